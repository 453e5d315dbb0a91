//! Renderer: model tree to ordered YAML document tree
//!
//! Produces a `serde_yaml::Mapping` (insertion-ordered) mirroring the target
//! schema. Key order is canonical and fixed: schema keys in schema order,
//! jobs and steps in declaration order. Two renders of the same model are
//! identical, so the serialized text is byte-stable.

use serde::ser::{Serialize, Serializer};
use serde_yaml::{Mapping, Sequence, Value};
use tracing::debug;

use crate::job::Job;
use crate::step::{ParamValue, Step};
use crate::workflow::{Trigger, Workflow};

fn key(s: &str) -> Value {
    Value::String(s.to_string())
}

/// Render a workflow into the target schema's document tree:
/// `{name, on, jobs: {id: {runs-on, steps: [...]}}}`.
pub fn render(workflow: &Workflow) -> Mapping {
    debug!(
        workflow = %workflow.name,
        jobs = workflow.jobs.len(),
        "rendering workflow"
    );

    let mut doc = Mapping::new();
    doc.insert(key("name"), Value::String(workflow.name.clone()));
    doc.insert(key("on"), render_triggers(&workflow.on));

    let mut jobs = Mapping::new();
    for job in &workflow.jobs {
        jobs.insert(key(job.id.as_str()), render_job(job));
    }
    doc.insert(key("jobs"), Value::Mapping(jobs));

    doc
}

/// Parameterless triggers render as a sequence of event labels; as soon as
/// any trigger carries parameters the whole block becomes a mapping, since
/// the target grammar cannot mix the two forms.
fn render_triggers(triggers: &[Trigger]) -> Value {
    if triggers.iter().all(|t| t.params.is_empty()) {
        let events: Sequence = triggers
            .iter()
            .map(|t| Value::String(t.event.clone()))
            .collect();
        return Value::Sequence(events);
    }

    let mut on = Mapping::new();
    for trigger in triggers {
        let mut params = Mapping::new();
        for (name, value) in &trigger.params {
            params.insert(key(name), render_param(value));
        }
        on.insert(key(&trigger.event), Value::Mapping(params));
    }
    Value::Mapping(on)
}

fn render_job(job: &Job) -> Value {
    let mut out = Mapping::new();
    out.insert(key("runs-on"), Value::String(job.runs_on.label().to_string()));

    let steps: Sequence = job.steps.iter().map(render_step).collect();
    out.insert(key("steps"), Value::Sequence(steps));

    Value::Mapping(out)
}

/// Each step is `{name, uses, with}` or `{name, run}`. An action with no
/// parameters drops the `with` key entirely rather than emitting an empty
/// mapping.
fn render_step(step: &Step) -> Value {
    let mut out = Mapping::new();
    out.insert(key("name"), Value::String(step.name().to_string()));

    match step {
        Step::Uses { action, with, .. } => {
            out.insert(key("uses"), Value::String(action.clone()));
            if !with.is_empty() {
                let mut params = Mapping::new();
                for (name, value) in with {
                    params.insert(key(name), render_param(value));
                }
                out.insert(key("with"), Value::Mapping(params));
            }
        }
        Step::Run { command, .. } => {
            out.insert(key("run"), Value::String(command.clone()));
        }
    }

    Value::Mapping(out)
}

/// Lists keep their sequence shape whatever their length; expressions render
/// in delimited form and stay plain scalars through serialization.
fn render_param(value: &ParamValue) -> Value {
    match value {
        ParamValue::Str(s) => Value::String(s.clone()),
        ParamValue::List(items) => Value::Sequence(
            items.iter().map(|s| Value::String(s.clone())).collect(),
        ),
        ParamValue::Expr(e) => Value::String(e.escape()),
    }
}

/// A workflow serializes as its rendered document tree, so
/// `serde_yaml::to_string(&workflow)` emits the canonical text directly.
impl Serialize for Workflow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        render(self).serialize(serializer)
    }
}
