//! Builder patterns for ergonomic workflow construction
//!
//! Workflows are assembled bottom-up (steps into jobs, jobs into a workflow)
//! and validated once when [`WorkflowBuilder::build`] runs. Construction is
//! pure: it produces an in-memory tree and touches nothing else.

use std::path::PathBuf;

use crate::error::CompileError;
use crate::job::Job;
use crate::step::Step;
use crate::types::{JobId, RunnerType};
use crate::workflow::{Trigger, Workflow};

// ============================================================================
// WORKFLOW BUILDER
// ============================================================================

/// Fluent builder for constructing workflows
pub struct WorkflowBuilder {
    name: String,
    on: Vec<Trigger>,
    jobs: Vec<Job>,
    source_path: PathBuf,
}

impl WorkflowBuilder {
    /// Start a workflow. `source_path` is the definition's own location and
    /// is the sole input to output-path derivation.
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            on: Vec::new(),
            jobs: Vec::new(),
            source_path: source_path.into(),
        }
    }

    /// Add a trigger
    pub fn on(mut self, trigger: Trigger) -> Self {
        self.on.push(trigger);
        self
    }

    /// Add a pre-built job
    pub fn job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Add a job using [`JobBuilder`]
    pub fn with_job<F>(mut self, id: &str, f: F) -> Result<Self, CompileError>
    where
        F: FnOnce(JobBuilder) -> JobBuilder,
    {
        self.jobs.push(f(JobBuilder::new(id)).build()?);
        Ok(self)
    }

    /// Finish construction and validate every structural invariant.
    /// No output is produced for an invalid model.
    pub fn build(self) -> Result<Workflow, CompileError> {
        let workflow = Workflow {
            name: self.name,
            on: self.on,
            jobs: self.jobs,
            source_path: self.source_path,
        };
        workflow.validate()?;
        Ok(workflow)
    }
}

// ============================================================================
// JOB BUILDER
// ============================================================================

/// Builder for individual jobs
pub struct JobBuilder {
    id: String,
    runs_on: RunnerType,
    steps: Vec<Step>,
}

impl JobBuilder {
    /// Create a new job builder; the id is validated at [`JobBuilder::build`]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            runs_on: RunnerType::UbuntuLatest,
            steps: Vec::new(),
        }
    }

    /// Set the target runner (defaults to ubuntu-latest)
    pub fn runs_on(mut self, runner: RunnerType) -> Self {
        self.runs_on = runner;
        self
    }

    /// Append a step; order of `step` calls is execution order
    pub fn step(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Build the job, validating its id and every step
    pub fn build(self) -> Result<Job, CompileError> {
        let job = Job {
            id: JobId::new(&self.id)?,
            runs_on: self.runs_on,
            steps: self.steps,
        };
        job.validate()?;
        Ok(job)
    }
}
