//! Testing utilities for brewdir
//!
//! Small constructors for brewery records so tests don't repeat the full
//! struct literal.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::Brewery;

/// Build a record with full control over the optional fields
#[must_use]
pub fn brewery(
    id: &str,
    name: &str,
    city: Option<&str>,
    state: &str,
    website: Option<&str>,
) -> Brewery {
    Brewery {
        id: id.to_string(),
        name: name.to_string(),
        brewery_type: "micro".to_string(),
        city: city.map(str::to_string),
        state: state.to_string(),
        website_url: website.map(str::to_string),
    }
}

/// A micro brewery in the given state, no city or website
#[must_use]
pub fn brewery_in(id: &str, name: &str, state: &str) -> Brewery {
    brewery(id, name, None, state, None)
}

/// A brewery of an arbitrary category, for filter tests
#[must_use]
pub fn brewery_with_type(id: &str, name: &str, brewery_type: &str) -> Brewery {
    Brewery {
        brewery_type: brewery_type.to_string(),
        ..brewery_in(id, name, "Oregon")
    }
}
