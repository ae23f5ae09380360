//! Data source adapter - remote listing with local fallback
//!
//! The adapter issues a single HTTP GET against a brewery listing endpoint.
//! Expected failures (transport errors, non-2xx status, malformed payload)
//! are recovered locally by substituting a fixed fifteen-record collection;
//! they are reported as a tagged [`LoadOutcome::Fallback`] rather than an
//! error, so callers and tests can still tell the two paths apart.
//!
//! # Architecture
//!
//! - `client`: the HTTP fetch and the `Source` entry point
//! - `fallback`: the compiled-in substitute collection
//! - `error`: failures that escape the fallback path

pub mod client;
pub mod error;
pub mod fallback;

pub use client::{DEFAULT_ENDPOINT, FallbackReason, LoadOutcome, Source};
pub use error::SourceError;
pub use fallback::fallback_records;
