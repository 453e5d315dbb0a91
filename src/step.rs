//! Step model: one unit of work inside a job
//!
//! A step is either an action invocation (`uses` + parameter mapping) or a
//! literal shell command (`run`). Steps are plain values; all structural
//! validation happens once, when the owning workflow is built.

use crate::error::CompileError;
use crate::expr::{self, Expression};
use crate::types::ActionRef;

/// Value of a single action parameter.
///
/// Lists keep their shape when rendered: a one-element list stays a
/// one-element sequence. Expressions render in their delimited `${{ }}` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Literal string; may itself embed balanced `${{ ... }}` fragments
    Str(String),
    /// Ordered list of strings (e.g. multi-path cache keys)
    List(Vec<String>),
    /// A pure interpolated expression
    Expr(Expression),
}

impl ParamValue {
    /// Convenience for list parameters
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Check every embedded string for balanced expression delimiters
    pub(crate) fn validate(&self) -> Result<(), CompileError> {
        match self {
            ParamValue::Str(s) => expr::validate_delimiters(s),
            ParamValue::List(items) => {
                for item in items {
                    expr::validate_delimiters(item)?;
                }
                Ok(())
            }
            // Expression bodies are marker-free by construction
            ParamValue::Expr(_) => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(items: [&str; N]) -> Self {
        ParamValue::list(items)
    }
}

impl From<Expression> for ParamValue {
    fn from(e: Expression) -> Self {
        ParamValue::Expr(e)
    }
}

/// One unit of work. `name` is a human label, not an identifier; duplicates
/// are allowed and render verbatim each occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Invocation of an external action with an ordered parameter mapping
    Uses {
        name: String,
        action: String,
        with: Vec<(String, ParamValue)>,
    },
    /// Literal shell command
    Run { name: String, command: String },
}

impl Step {
    /// Start an action-invocation step; chain [`UsesStep::with`] for
    /// parameters, then pass it wherever a `Step` is expected.
    pub fn uses(name: impl Into<String>, action: impl Into<String>) -> UsesStep {
        UsesStep {
            name: name.into(),
            action: action.into(),
            with: Vec::new(),
        }
    }

    /// A literal shell command step
    pub fn run(name: impl Into<String>, command: impl Into<String>) -> Step {
        Step::Run {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Human label of the step
    pub fn name(&self) -> &str {
        match self {
            Step::Uses { name, .. } | Step::Run { name, .. } => name,
        }
    }

    /// Structural checks deferred to workflow build time: non-empty action
    /// reference, balanced delimiters in every string field.
    pub(crate) fn validate(&self) -> Result<(), CompileError> {
        match self {
            Step::Uses { name, action, with } => {
                ActionRef::new(action.clone(), name)?;
                for (_, value) in with {
                    value.validate()?;
                }
                Ok(())
            }
            Step::Run { command, .. } => expr::validate_delimiters(command),
        }
    }
}

/// Builder for [`Step::Uses`], keeping parameters in declaration order
#[derive(Debug, Clone)]
pub struct UsesStep {
    name: String,
    action: String,
    with: Vec<(String, ParamValue)>,
}

impl UsesStep {
    /// Append one parameter; order of `with` calls is the rendered order
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.with.push((key.into(), value.into()));
        self
    }
}

impl From<UsesStep> for Step {
    fn from(builder: UsesStep) -> Self {
        Step::Uses {
            name: builder.name,
            action: builder.action,
            with: builder.with,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_step_keeps_param_order() {
        let step: Step = Step::uses("Cache", "actions/cache@v3")
            .with("path", ["~/.m2/repository"])
            .with("key", "${{ runner.os }}-maven-")
            .with("restore-keys", ["${{ runner.os }}-maven-"])
            .into();

        let Step::Uses { with, .. } = &step else {
            panic!("expected a uses step");
        };
        let keys: Vec<&str> = with.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["path", "key", "restore-keys"]);
    }

    #[test]
    fn run_step_validates_command_delimiters() {
        let ok = Step::run("Build", "mvn -B install --file pom.xml");
        assert!(ok.validate().is_ok());

        let bad = Step::run("Broken", "echo ${{ oops");
        assert!(bad.validate().is_err());
    }

    #[test]
    fn uses_step_rejects_empty_action() {
        let step: Step = Step::uses("Checkout", "").into();
        assert!(step.validate().is_err());
    }

    #[test]
    fn single_element_list_stays_a_list() {
        let value = ParamValue::list(["~/.m2/repository"]);
        assert_eq!(value, ParamValue::List(vec!["~/.m2/repository".to_string()]));
    }
}
