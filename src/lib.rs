//! Actionsmith - compile declarative CI pipeline models into workflow YAML
//!
//! Build a [`Workflow`] bottom-up from steps and jobs, then render it to a
//! byte-stable YAML document next to its declared source path:
//!
//! ```
//! use actionsmith::{Step, Trigger, WorkflowBuilder};
//!
//! let workflow = WorkflowBuilder::new("Java CI", ".github/kts/maven.src")
//!     .on(Trigger::push())
//!     .with_job("build", |job| {
//!         job.step(Step::uses("Checkout", "actions/checkout@v3"))
//!             .step(Step::run("Build with Maven", "mvn -B install --file pom.xml"))
//!     })?
//!     .build()?;
//!
//! let yaml = workflow.to_yaml()?;
//! assert!(yaml.contains("runs-on: ubuntu-latest"));
//! # Ok::<(), actionsmith::CompileError>(())
//! ```
//!
//! The crate only compiles definitions; executing the pipeline, evaluating
//! `${{ ... }}` expressions, and knowing what any action does are the CI
//! runner's business.

pub mod builders;
pub mod error;
pub mod expr;
pub mod job;
pub mod render;
pub mod step;
pub mod types;
pub mod workflow;
pub mod writer;

pub use builders::{JobBuilder, WorkflowBuilder};
pub use error::{CompileError, FixSuggestion};
pub use expr::{is_expression, validate_delimiters, Expression};
pub use job::Job;
pub use render::render;
pub use step::{ParamValue, Step, UsesStep};
pub use types::{ActionRef, JobId, RunnerType};
pub use workflow::{Trigger, Workflow};
pub use writer::{output_path, TARGET_EXTENSION};
