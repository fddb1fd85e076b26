//! File-system collaborator for the local-file source.
//!
//! The [`WorkflowFs`] trait abstracts how workflow files are read so that tests
//! can substitute spies, and so "not found" is decided here as a typed variant
//! rather than by inspecting an opaque error code downstream.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Closed error-kind set for workflow file reads.
#[derive(Debug, Error)]
pub enum FsReadError {
    /// The file does not exist at the given path.
    #[error("file not found")]
    NotFound,
    /// Any other read failure (permissions, encoding, hardware). Carried
    /// unchanged for the caller to diagnose.
    #[error(transparent)]
    Other(#[from] io::Error),
}

/// Trait for reading workflow definition files.
#[async_trait]
pub trait WorkflowFs: Send + Sync {
    /// Read the full file at `path` as UTF-8 text. No streaming; a workflow
    /// definition is a small document read in one call.
    async fn read_to_string(&self, path: &Path) -> Result<String, FsReadError>;
}

/// Default [`WorkflowFs`] over `tokio::fs`.
pub struct TokioWorkflowFs;

#[async_trait]
impl WorkflowFs for TokioWorkflowFs {
    async fn read_to_string(&self, path: &Path) -> Result<String, FsReadError> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FsReadError::NotFound),
            Err(e) => Err(FsReadError::Other(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"nodes\": []}}").unwrap();

        let text = TokioWorkflowFs
            .read_to_string(file.path())
            .await
            .unwrap();
        assert_eq!(text, "{\"nodes\": []}");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.json");

        let err = TokioWorkflowFs.read_to_string(&missing).await.unwrap_err();
        assert!(matches!(err, FsReadError::NotFound));
    }

    #[tokio::test]
    async fn test_directory_read_is_other() {
        let dir = tempfile::tempdir().unwrap();

        let err = TokioWorkflowFs.read_to_string(dir.path()).await.unwrap_err();
        assert!(matches!(err, FsReadError::Other(_)));
    }
}
