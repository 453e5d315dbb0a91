//! Workflow model: triggers plus jobs, with source provenance

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::CompileError;
use crate::job::Job;
use crate::step::ParamValue;

/// Event condition that makes the external runner execute the workflow.
///
/// The core treats the event as an opaque label with optional ordered
/// parameters; it never interprets either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub event: String,
    pub params: Vec<(String, ParamValue)>,
}

impl Trigger {
    pub fn new(event: impl Into<String>) -> Self {
        Trigger {
            event: event.into(),
            params: Vec::new(),
        }
    }

    /// A bare push trigger
    pub fn push() -> Self {
        Trigger::new("push")
    }

    /// Append one parameter; order of `with` calls is the rendered order
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// Top-level pipeline definition.
///
/// Immutable once built; construct via [`WorkflowBuilder`]. The workflow is
/// the root owner of its jobs and steps, and `source_path` is the only way
/// the writer learns where to emit output.
///
/// [`WorkflowBuilder`]: crate::builders::WorkflowBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,
    pub on: Vec<Trigger>,
    pub jobs: Vec<Job>,
    pub source_path: PathBuf,
}

impl Workflow {
    /// Structural invariants, checked once when the builder finishes:
    /// non-empty name, at least one trigger and one job, unique job ids,
    /// balanced expression delimiters everywhere.
    pub(crate) fn validate(&self) -> Result<(), CompileError> {
        if self.name.trim().is_empty() {
            return Err(CompileError::EmptyName);
        }
        if self.on.is_empty() {
            return Err(CompileError::MissingTrigger);
        }
        if self.jobs.is_empty() {
            return Err(CompileError::EmptyWorkflow);
        }

        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(CompileError::DuplicateJobId {
                    job_id: job.id.to_string(),
                });
            }
            job.validate()?;
        }

        for trigger in &self.on {
            for (_, value) in &trigger.params {
                value.validate()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobId, RunnerType};

    fn job(id: &str) -> Job {
        Job {
            id: JobId::new(id).unwrap(),
            runs_on: RunnerType::UbuntuLatest,
            steps: Vec::new(),
        }
    }

    fn workflow(jobs: Vec<Job>) -> Workflow {
        Workflow {
            name: "CI".to_string(),
            on: vec![Trigger::push()],
            jobs,
            source_path: PathBuf::from("ci.src"),
        }
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let wf = workflow(Vec::new());
        assert!(matches!(wf.validate(), Err(CompileError::EmptyWorkflow)));
    }

    #[test]
    fn duplicate_job_ids_are_rejected() {
        let wf = workflow(vec![job("build"), job("build")]);
        assert!(matches!(
            wf.validate(),
            Err(CompileError::DuplicateJobId { .. })
        ));
    }

    #[test]
    fn missing_trigger_is_rejected() {
        let mut wf = workflow(vec![job("build")]);
        wf.on.clear();
        assert!(matches!(wf.validate(), Err(CompileError::MissingTrigger)));
    }

    #[test]
    fn trigger_params_are_checked_for_balance() {
        let mut wf = workflow(vec![job("build")]);
        wf.on = vec![Trigger::new("push").with("branches", ["main-${{ broken"])];
        assert!(matches!(
            wf.validate(),
            Err(CompileError::UnbalancedExpression { .. })
        ));
    }
}
