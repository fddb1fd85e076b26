//! The execution-engine boundary.
//!
//! Resolution exists to feed this seam: the [`WorkflowEngine`] trait abstracts
//! whatever actually runs the sub-workflow so that tests can substitute
//! recording stubs and hosts can plug in their own engine.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::schema::{OutputBatches, WorkflowDescriptor};

/// Opaque failure from the execution engine. This crate has no insight into a
/// sub-workflow's internals, so the error is carried as-is and never wrapped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        EngineError {
            message: message.into(),
        }
    }
}

/// Trait for executing a resolved sub-workflow.
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Run the sub-workflow identified by `descriptor` with `items` as input,
    /// returning the engine's full output batches. The call completes before
    /// returning; no partial or streaming results are forwarded.
    async fn execute_sub_workflow(
        &self,
        descriptor: &WorkflowDescriptor,
        items: &[Value],
    ) -> Result<OutputBatches, EngineError>;
}
