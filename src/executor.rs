//! Sub-workflow resolution and delegation.
//!
//! [`SubWorkflowExecutor`] turns a [`WorkflowSource`] into exactly one
//! [`WorkflowDescriptor`] and hands it, together with the caller's input batch,
//! to the [`WorkflowEngine`] boundary. It holds no state between calls; every
//! invocation re-resolves from scratch.

use std::sync::Arc;

use serde_json::Value;

use crate::engine::WorkflowEngine;
use crate::error::{DefinitionSource, InvocationError};
use crate::fs::{FsReadError, TokioWorkflowFs, WorkflowFs};
use crate::http_client::HttpConfig;
use crate::schema::{OutputBatches, WorkflowDefinition, WorkflowDescriptor, WorkflowSource};

/// Accept header for URL fetches: JSON preferred, permissive about text bodies.
const WORKFLOW_ACCEPT: &str = "application/json,text/*;q=0.99";

/// Resolves a sub-workflow reference and delegates its execution.
pub struct SubWorkflowExecutor {
    engine: Arc<dyn WorkflowEngine>,
    fs: Arc<dyn WorkflowFs>,
    http_client: reqwest::Client,
}

impl SubWorkflowExecutor {
    pub fn new(engine: Arc<dyn WorkflowEngine>) -> Self {
        Self::with_collaborators(
            engine,
            Arc::new(TokioWorkflowFs),
            HttpConfig::default().build_client(),
        )
    }

    /// Substitute collaborators, for hosts with their own file-system policy or
    /// a pre-configured client.
    pub fn with_collaborators(
        engine: Arc<dyn WorkflowEngine>,
        fs: Arc<dyn WorkflowFs>,
        http_client: reqwest::Client,
    ) -> Self {
        SubWorkflowExecutor {
            engine,
            fs,
            http_client,
        }
    }

    /// Resolve `source` into a workflow descriptor.
    ///
    /// Single pass over a closed four-way branch: no retries, no caching, and
    /// only the selected branch performs I/O (file read for `LocalFile`, one
    /// GET for `Url`, none otherwise).
    pub async fn resolve(
        &self,
        source: &WorkflowSource,
    ) -> Result<WorkflowDescriptor, InvocationError> {
        match source {
            WorkflowSource::Database { workflow_id } => {
                // Validity of the id is the engine's concern.
                Ok(WorkflowDescriptor::ById(workflow_id.clone()))
            }
            WorkflowSource::LocalFile { path } => {
                let text = match self.fs.read_to_string(path).await {
                    Ok(text) => text,
                    Err(FsReadError::NotFound) => {
                        return Err(InvocationError::WorkflowFileNotFound { path: path.clone() })
                    }
                    Err(FsReadError::Other(e)) => return Err(InvocationError::Io(e)),
                };
                let definition = parse_definition(&text, || DefinitionSource::File(path.clone()))?;
                Ok(WorkflowDescriptor::Inline(definition))
            }
            WorkflowSource::Parameter { json } => {
                let definition = parse_definition(json, || DefinitionSource::Parameter)?;
                Ok(WorkflowDescriptor::Inline(definition))
            }
            WorkflowSource::Url { url } => {
                let definition = self.fetch_definition(url).await?;
                Ok(WorkflowDescriptor::Inline(definition))
            }
        }
    }

    /// Resolve `source`, run the sub-workflow with `items`, and return the
    /// engine's output batches verbatim.
    pub async fn invoke(
        &self,
        source: &WorkflowSource,
        items: &[Value],
    ) -> Result<OutputBatches, InvocationError> {
        let descriptor = self.resolve(source).await?;
        let batches = self.engine.execute_sub_workflow(&descriptor, items).await?;
        Ok(batches)
    }

    /// Fetch a workflow document by URL. The transport content-negotiates and
    /// decodes the body, so there is no secondary parse step; a body the client
    /// cannot decode is reported as a fetch failure like any transport fault.
    async fn fetch_definition(&self, url: &str) -> Result<WorkflowDefinition, InvocationError> {
        tracing::debug!("fetching workflow definition from {}", url);

        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, WORKFLOW_ACCEPT)
            .send()
            .await
            .map_err(|cause| InvocationError::WorkflowFetchFailed {
                url: url.to_string(),
                cause,
            })?
            .error_for_status()
            .map_err(|cause| InvocationError::WorkflowFetchFailed {
                url: url.to_string(),
                cause,
            })?;

        response
            .json::<WorkflowDefinition>()
            .await
            .map_err(|cause| InvocationError::WorkflowFetchFailed {
                url: url.to_string(),
                cause,
            })
    }
}

fn parse_definition(
    text: &str,
    source: impl FnOnce() -> DefinitionSource,
) -> Result<WorkflowDefinition, InvocationError> {
    serde_json::from_str(text).map_err(|cause| InvocationError::WorkflowDefinitionInvalid {
        source: source(),
        cause,
    })
}
