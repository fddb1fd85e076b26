//! Listing workflows from the registry endpoint.
//!
//! This is the auxiliary side of the registry source: it enumerates the
//! workflows a caller can pick an id from. Execution itself never goes through
//! here; a `Database` selection hands the id straight to the engine.

use serde::Deserialize;

use crate::error::InvocationError;
use crate::http_client::HttpConfig;
use crate::schema::{ListedWorkflow, WorkflowOption};

#[derive(Debug, Deserialize)]
struct WorkflowListResponse {
    data: Vec<ListedWorkflow>,
}

/// Client for the registry's REST surface.
pub struct WorkflowRegistryClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl WorkflowRegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, HttpConfig::default().build_client())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        WorkflowRegistryClient {
            base_url,
            http_client,
        }
    }

    /// List the workflows stored in the registry as selectable options,
    /// labelled `"{id} - {name}"`.
    pub async fn list_workflows(&self) -> Result<Vec<WorkflowOption>, InvocationError> {
        let url = format!("{}/workflows", self.base_url);
        tracing::debug!("listing workflows from {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|cause| InvocationError::WorkflowFetchFailed {
                url: url.clone(),
                cause,
            })?
            .error_for_status()
            .map_err(|cause| InvocationError::WorkflowFetchFailed {
                url: url.clone(),
                cause,
            })?;

        let listing = response
            .json::<WorkflowListResponse>()
            .await
            .map_err(|cause| InvocationError::WorkflowFetchFailed { url, cause })?;

        Ok(listing.data.into_iter().map(WorkflowOption::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = WorkflowRegistryClient::new("http://localhost:5678/rest/");
        assert_eq!(client.base_url, "http://localhost:5678/rest");
    }
}
