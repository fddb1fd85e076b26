//! # Subflow — sub-workflow resolution and delegation
//!
//! `subflow` resolves a reference to a sub-workflow from one of four sources
//! and delegates its execution to an external workflow engine:
//!
//! - **Database**: a workflow id the engine resolves against its own registry.
//! - **Local file**: a JSON workflow document read from disk.
//! - **Parameter**: raw workflow JSON supplied inline.
//! - **URL**: a workflow document fetched over HTTP.
//!
//! Resolution is a single pass over a closed four-way branch producing exactly
//! one [`WorkflowDescriptor`], either a registry id or an inline definition.
//! The descriptor and the caller's input batch then go to the
//! [`WorkflowEngine`] boundary, whose output batches are returned verbatim.
//! Failures are classified (`WorkflowFileNotFound`, `WorkflowDefinitionInvalid`,
//! `WorkflowFetchFailed`) where they are expected and passed through unchanged
//! where they are not.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use subflow::{SubWorkflowExecutor, WorkflowSource};
//!
//! # async fn run(engine: Arc<dyn subflow::WorkflowEngine>) {
//! let executor = SubWorkflowExecutor::new(engine);
//! let source = WorkflowSource::Url {
//!     url: "https://example.com/workflow.json".to_string(),
//! };
//! let batches = executor.invoke(&source, &[]).await.unwrap();
//! println!("{:?}", batches);
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod executor;
pub mod fs;
pub mod http_client;
pub mod registry;
pub mod schema;

pub use crate::engine::{EngineError, WorkflowEngine};
pub use crate::error::{DefinitionSource, InvocationError, InvokeResult};
pub use crate::executor::SubWorkflowExecutor;
pub use crate::fs::{FsReadError, TokioWorkflowFs, WorkflowFs};
pub use crate::http_client::HttpConfig;
pub use crate::registry::WorkflowRegistryClient;
pub use crate::schema::{
    InputBatch, ListedWorkflow, OutputBatches, WorkflowDefinition, WorkflowDescriptor,
    WorkflowOption, WorkflowSource,
};
