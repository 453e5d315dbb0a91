//! Job model: an ordered sequence of steps on one runner

use crate::error::CompileError;
use crate::step::Step;
use crate::types::{JobId, RunnerType};

/// A named group of ordered steps executed on a specified runner.
///
/// Step order is execution order and is preserved verbatim through
/// rendering. An empty step list is a valid no-op job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub runs_on: RunnerType,
    pub steps: Vec<Step>,
}

impl Job {
    pub(crate) fn validate(&self) -> Result<(), CompileError> {
        for step in &self.steps {
            step.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_job_is_valid() {
        let job = Job {
            id: JobId::new("noop").unwrap(),
            runs_on: RunnerType::UbuntuLatest,
            steps: Vec::new(),
        };
        assert!(job.validate().is_ok());
    }

    #[test]
    fn job_surfaces_step_errors() {
        let job = Job {
            id: JobId::new("build").unwrap(),
            runs_on: RunnerType::UbuntuLatest,
            steps: vec![Step::run("Broken", "echo }}")],
        };
        assert!(job.validate().is_err());
    }
}
