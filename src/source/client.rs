//! HTTP client for the brewery listing endpoint
//!
//! A single blocking GET with a bounded timeout. Any expected failure of the
//! read resolves to the fallback collection; the reason is carried on the
//! outcome so the caller can report it without treating it as an error.

use super::fallback::fallback_records;
use crate::model::Brewery;
use std::fmt;
use std::time::Duration;

/// Default remote listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openbrewerydb.org/v1/breweries";

/// Request timeout for the single outbound read
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why the fallback collection was substituted for the remote listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The network was skipped entirely (`--offline`)
    Offline,
    /// The endpoint answered with a non-2xx status
    Status(u16),
    /// The request never produced a response (DNS, refused, timeout, ...)
    Transport(String),
    /// The response body was not a valid brewery listing
    Parse(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offline => write!(f, "offline mode requested"),
            Self::Status(code) => write!(f, "remote returned HTTP {code}"),
            Self::Transport(detail) => write!(f, "network error: {detail}"),
            Self::Parse(detail) => write!(f, "malformed listing payload: {detail}"),
        }
    }
}

/// Result of a load: the raw collection, tagged with which path produced it
///
/// The original UI swallowed this distinction; keeping it explicit lets the
/// presentation layer warn about a masked outage and lets tests pin down the
/// fallback behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The remote endpoint answered with a parseable listing
    Remote(Vec<Brewery>),
    /// The fixed local collection was substituted
    Fallback {
        records: Vec<Brewery>,
        reason: FallbackReason,
    },
}

impl LoadOutcome {
    /// Take the raw collection, regardless of which path produced it
    #[must_use]
    pub fn into_records(self) -> Vec<Brewery> {
        match self {
            Self::Remote(records) | Self::Fallback { records, .. } => records,
        }
    }

    /// The fallback reason, if the fallback path was taken
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Remote(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Data source adapter for the brewery listing
///
/// ```no_run
/// use brewdir::source::{Source, DEFAULT_ENDPOINT};
///
/// let source = Source::new(DEFAULT_ENDPOINT, false);
/// let outcome = source.load();
/// let records = outcome.into_records();
/// ```
pub struct Source {
    endpoint: String,
    offline: bool,
    agent: ureq::Agent,
}

impl Source {
    /// Create a source for the given endpoint
    ///
    /// With `offline` set, `load` skips the network and yields the fallback
    /// collection immediately.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, offline: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            offline,
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    /// The endpoint this source reads from
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Load the raw brewery collection
    ///
    /// Never fails: every expected failure of the remote read substitutes the
    /// fallback collection, tagged with the reason.
    #[must_use]
    pub fn load(&self) -> LoadOutcome {
        if self.offline {
            return LoadOutcome::Fallback {
                records: fallback_records(),
                reason: FallbackReason::Offline,
            };
        }

        match self.fetch_remote() {
            Ok(records) => LoadOutcome::Remote(records),
            Err(reason) => LoadOutcome::Fallback {
                records: fallback_records(),
                reason,
            },
        }
    }

    /// Issue the single outbound read and parse the listing
    fn fetch_remote(&self) -> Result<Vec<Brewery>, FallbackReason> {
        let response = self
            .agent
            .get(&self.endpoint)
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => FallbackReason::Status(code),
                ureq::Error::Transport(transport) => {
                    FallbackReason::Transport(transport.to_string())
                }
            })?;

        response
            .into_json::<Vec<Brewery>>()
            .map_err(|err| FallbackReason::Parse(err.to_string()))
    }
}
