//! Error types for sub-workflow resolution and delegation.
//!
//! - [`InvocationError`] — Everything `invoke` can surface to the caller.
//! - [`DefinitionSource`] — Which text-bearing source produced an invalid document.

pub mod invocation_error;

pub use invocation_error::{DefinitionSource, InvocationError};

/// Convenience alias for invocation-level results.
pub type InvokeResult<T> = Result<T, InvocationError>;
