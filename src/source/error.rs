//! Source-specific error types
//!
//! Expected load failures never surface here; they resolve to the fallback
//! collection inside the adapter. This enum covers only failures that escape
//! that path entirely, which the presentation layer renders as a terminal
//! error state.

use thiserror::Error;

/// Failures of the load sequence that the fallback path cannot absorb
#[derive(Debug, Error)]
pub enum SourceError {
    /// The background load worker went away without producing a result
    #[error("load worker disconnected before producing a result")]
    WorkerDisconnected,
}
