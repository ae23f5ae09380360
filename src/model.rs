//! Core data model for brewery records
//!
//! Records are deserialized straight from the Open Brewery DB JSON shape and
//! are never mutated after load; every later stage (search, sort, pagination)
//! works on derived views.

use serde::{Deserialize, Serialize};

/// The brewery category this directory is restricted to
pub const MICRO: &str = "micro";

/// A single brewery record as returned by the remote listing
///
/// `city` and `website_url` may be null or absent in the payload. `state`
/// defaults to an empty string when missing so that such records sort first
/// in ascending order instead of failing deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Brewery {
    /// Opaque identifier, kept as the row identity
    pub id: String,
    pub name: String,
    /// Category string, e.g. "micro", "brewpub", "large"
    pub brewery_type: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl Brewery {
    /// Whether this record belongs to the `micro` category
    #[must_use]
    pub fn is_micro(&self) -> bool {
        self.brewery_type == MICRO
    }
}

/// Narrow a raw collection to the working set of microbreweries
///
/// Pure function: keeps exactly the records whose category equals `micro`,
/// preserving their original order. Runs once per load.
#[must_use]
pub fn filter_micro(records: Vec<Brewery>) -> Vec<Brewery> {
    records.into_iter().filter(Brewery::is_micro).collect()
}
