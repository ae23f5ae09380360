//! UI-specific error types

use crate::source::SourceError;
use thiserror::Error;

/// Failures of the interactive session
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal or event I/O error
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// The load sequence failed outside the fallback path
    #[error("Load failed: {0}")]
    Source(#[from] SourceError),
}

/// Result alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
