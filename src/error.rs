//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All failure modes of a compilation run.
///
/// Structural variants are raised at build time, before anything touches the
/// filesystem. `Yaml`/`Io` are raised while serializing or persisting output.
#[derive(Error, Debug)]
pub enum CompileError {
    // ─────────────────────────────────────────────────────────────
    // Structural errors (SMITH-010 to SMITH-017)
    // ─────────────────────────────────────────────────────────────

    #[error("SMITH-010: Workflow has no jobs")]
    EmptyWorkflow,

    #[error("SMITH-011: Workflow has no triggers")]
    MissingTrigger,

    #[error("SMITH-012: Workflow name cannot be empty")]
    EmptyName,

    #[error("SMITH-013: Invalid job id: {reason}")]
    InvalidJobId { reason: String },

    #[error("SMITH-014: Duplicate job id '{job_id}'")]
    DuplicateJobId { job_id: String },

    #[error("SMITH-015: Action reference cannot be empty (step '{step_name}')")]
    EmptyActionRef { step_name: String },

    #[error("SMITH-016: Unbalanced expression delimiters in '{value}'")]
    UnbalancedExpression { value: String },

    #[error("SMITH-017: Expression content may not contain delimiter markers: '{inner}'")]
    ExpressionNesting { inner: String },

    // ─────────────────────────────────────────────────────────────
    // Output errors
    // ─────────────────────────────────────────────────────────────

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for CompileError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            CompileError::EmptyWorkflow => Some("Add at least one job before build()"),
            CompileError::MissingTrigger => Some("Add a trigger, e.g. .on(Trigger::push())"),
            CompileError::EmptyName => Some("Give the workflow a non-empty name"),
            CompileError::InvalidJobId { .. } => {
                Some("Job ids are alphanumeric plus '-' and '_', max 64 chars")
            }
            CompileError::DuplicateJobId { .. } => Some("Use a unique id for each job"),
            CompileError::EmptyActionRef { .. } => {
                Some("Reference an action as 'owner/repo@version'")
            }
            CompileError::UnbalancedExpression { .. } => {
                Some("Every '${{' must be closed by '}}' and vice versa")
            }
            CompileError::ExpressionNesting { .. } => {
                Some("Pass the bare expression body, without '${{' or '}}'")
            }
            CompileError::Yaml(_) => None,
            CompileError::Io(_) => Some("Check the output path and permissions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_carry_codes() {
        let err = CompileError::DuplicateJobId {
            job_id: "build".to_string(),
        };
        assert!(err.to_string().starts_with("SMITH-014"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CompileError = io.into();
        assert!(matches!(err, CompileError::Io(_)));
    }

    #[test]
    fn every_structural_error_has_a_suggestion() {
        let errs = [
            CompileError::EmptyWorkflow,
            CompileError::MissingTrigger,
            CompileError::EmptyName,
            CompileError::UnbalancedExpression {
                value: "${{ x".to_string(),
            },
        ];
        for err in errs {
            assert!(err.fix_suggestion().is_some(), "no suggestion for {err}");
        }
    }
}
