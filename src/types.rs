//! NewType wrappers for type safety
//!
//! Prevents mixing up the identifier-like strings the model is full of:
//! job ids, action references, runner labels.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::CompileError;

// ============================================================================
// JOB ID
// ============================================================================

/// Strongly-typed job identifier
///
/// Guarantees:
/// - Non-empty
/// - Valid characters (alphanumeric, dash, underscore)
/// - Maximum 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    /// Maximum allowed length
    pub const MAX_LENGTH: usize = 64;

    /// Create a new JobId with validation
    pub fn new(id: impl AsRef<str>) -> Result<Self, CompileError> {
        let id = id.as_ref();

        if id.is_empty() {
            return Err(CompileError::InvalidJobId {
                reason: "job id cannot be empty".to_string(),
            });
        }
        if id.len() > Self::MAX_LENGTH {
            return Err(CompileError::InvalidJobId {
                reason: format!("job id too long ({} > {})", id.len(), Self::MAX_LENGTH),
            });
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CompileError::InvalidJobId {
                reason: format!("invalid characters in '{id}'"),
            });
        }

        Ok(JobId(id.to_string()))
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for JobId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobId::new(s)
    }
}

// ============================================================================
// ACTION REFERENCE
// ============================================================================

/// Opaque reference to an external, versioned action (`owner/repo@version`).
///
/// The core never interprets the reference beyond requiring it non-empty;
/// knowing what any particular action does is the runner's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRef(String);

impl ActionRef {
    /// Create a new action reference; only emptiness is rejected here.
    /// The step name is carried for error context.
    pub fn new(reference: impl Into<String>, step_name: &str) -> Result<Self, CompileError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(CompileError::EmptyActionRef {
                step_name: step_name.to_string(),
            });
        }
        Ok(ActionRef(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RUNNER TYPE
// ============================================================================

/// Target runner for a job, rendered as the provider's `runs-on` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerType {
    UbuntuLatest,
    MacosLatest,
    WindowsLatest,
    /// Any other runner label, passed through verbatim (e.g. self-hosted)
    Custom(String),
}

impl RunnerType {
    /// The label the target schema expects under `runs-on`
    pub fn label(&self) -> &str {
        match self {
            RunnerType::UbuntuLatest => "ubuntu-latest",
            RunnerType::MacosLatest => "macos-latest",
            RunnerType::WindowsLatest => "windows-latest",
            RunnerType::Custom(label) => label,
        }
    }
}

impl fmt::Display for RunnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_id_accepts_valid() {
        assert!(JobId::new("build").is_ok());
        assert!(JobId::new("build-and-test_2").is_ok());
    }

    #[test]
    fn job_id_rejects_empty() {
        assert!(matches!(
            JobId::new(""),
            Err(CompileError::InvalidJobId { .. })
        ));
    }

    #[test]
    fn job_id_rejects_invalid_characters() {
        assert!(JobId::new("build job").is_err());
        assert!(JobId::new("build/job").is_err());
    }

    #[test]
    fn job_id_rejects_too_long() {
        let long = "a".repeat(JobId::MAX_LENGTH + 1);
        assert!(JobId::new(&long).is_err());
    }

    #[test]
    fn action_ref_rejects_empty() {
        assert!(matches!(
            ActionRef::new("  ", "Checkout"),
            Err(CompileError::EmptyActionRef { .. })
        ));
    }

    #[test]
    fn runner_labels() {
        assert_eq!(RunnerType::UbuntuLatest.label(), "ubuntu-latest");
        assert_eq!(RunnerType::Custom("self-hosted".into()).label(), "self-hosted");
    }
}
