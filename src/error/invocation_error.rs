use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// Which text-bearing source an invalid workflow document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// A local file read from the given path.
    File(PathBuf),
    /// Raw JSON supplied inline by the caller.
    Parameter,
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionSource::File(path) => write!(f, "file {:?}", path),
            DefinitionSource::Parameter => write!(f, "parameter"),
        }
    }
}

/// Errors surfaced by sub-workflow invocation.
///
/// The first three variants are the expected, nameable resolution failures.
/// `Io` and `Engine` pass collaborator faults through unchanged so the caller
/// can diagnose them with the original cause intact.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("The file {path:?} could not be found.")]
    WorkflowFileNotFound { path: PathBuf },

    #[error("The workflow definition from {source} is not valid JSON")]
    WorkflowDefinitionInvalid {
        source: DefinitionSource,
        #[source]
        cause: serde_json::Error,
    },

    #[error("Could not fetch workflow from {url:?}")]
    WorkflowFetchFailed {
        url: String,
        #[source]
        cause: reqwest::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
