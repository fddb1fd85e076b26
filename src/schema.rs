//! Data model for sub-workflow resolution.
//!
//! - [`WorkflowSource`] — where the caller wants the workflow loaded from.
//! - [`WorkflowDescriptor`] — the resolved reference handed to the engine.
//! - [`WorkflowDefinition`] — an opaque workflow document; only the engine
//!   understands its schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered batch of opaque input records, forwarded to the engine unchanged.
pub type InputBatch = Vec<Value>;

/// The engine's output: one batch of records per output branch.
pub type OutputBatches = Vec<Vec<Value>>;

/// Where to load the sub-workflow from. Each variant carries exactly the
/// parameters that source needs, so a selection can never mix or omit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowSource {
    /// A workflow stored in the registry, referenced by id. The engine resolves
    /// the id itself; no I/O happens at this layer.
    Database { workflow_id: String },
    /// A JSON workflow file on the local file system.
    LocalFile { path: PathBuf },
    /// Raw workflow JSON supplied inline by the caller.
    Parameter { json: String },
    /// A URL serving the workflow JSON.
    Url { url: String },
}

/// The resolved reference passed to the engine. Exactly one form exists per
/// resolution; the enum makes "never both, never neither" structural.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowDescriptor {
    /// Reference into the engine's registry.
    ById(String),
    /// A fully materialized workflow document.
    Inline(WorkflowDefinition),
}

/// An opaque workflow document. Validated here only for JSON syntax; its shape
/// is the engine's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowDefinition(pub Value);

impl WorkflowDefinition {
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for WorkflowDefinition {
    fn from(value: Value) -> Self {
        WorkflowDefinition(value)
    }
}

/// One workflow entry as listed by the registry endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListedWorkflow {
    pub id: String,
    pub name: String,
}

/// A selectable workflow option derived from a [`ListedWorkflow`]: the label is
/// `"{id} - {name}"`, the value is the bare id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOption {
    pub name: String,
    pub value: String,
}

impl From<ListedWorkflow> for WorkflowOption {
    fn from(wf: ListedWorkflow) -> Self {
        WorkflowOption {
            name: format!("{} - {}", wf.id, wf.name),
            value: wf.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_parses_transparently() {
        let def: WorkflowDefinition =
            serde_json::from_str(r#"{"nodes": [], "connections": {}}"#).unwrap();
        assert_eq!(def.0, json!({"nodes": [], "connections": {}}));
    }

    #[test]
    fn test_definition_round_trips_as_plain_value() {
        let def = WorkflowDefinition(json!({"a": 1}));
        assert_eq!(serde_json::to_string(&def).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_listed_workflow_to_option() {
        let listed = ListedWorkflow {
            id: "17".to_string(),
            name: "Daily import".to_string(),
        };
        let option = WorkflowOption::from(listed);
        assert_eq!(option.name, "17 - Daily import");
        assert_eq!(option.value, "17");
    }
}
