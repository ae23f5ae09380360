//! Fixed fallback collection used when the remote listing is unavailable
//!
//! Fifteen real-world microbreweries, all category `micro`, one record
//! (Anchor Brewing) with no website. Tests assert against this literal list,
//! so it is part of the program's contract.

use crate::model::Brewery;

/// Number of records in the fallback collection
pub const FALLBACK_LEN: usize = 15;

fn record(id: &str, name: &str, city: &str, state: &str, website: Option<&str>) -> Brewery {
    Brewery {
        id: id.to_string(),
        name: name.to_string(),
        brewery_type: "micro".to_string(),
        city: Some(city.to_string()),
        state: state.to_string(),
        website_url: website.map(str::to_string),
    }
}

/// Build the fallback collection
///
/// Returns a fresh copy each call; the caller owns it outright, matching the
/// wholesale-replacement lifecycle of the loaded collection.
#[must_use]
pub fn fallback_records() -> Vec<Brewery> {
    vec![
        record(
            "1",
            "Stone Brewing",
            "Escondido",
            "California",
            Some("https://www.stonebrewing.com"),
        ),
        record(
            "2",
            "Dogfish Head Craft Brewery",
            "Milton",
            "Delaware",
            Some("https://www.dogfish.com"),
        ),
        record(
            "3",
            "Bell's Brewery",
            "Comstock",
            "Michigan",
            Some("https://www.bellsbeer.com"),
        ),
        record(
            "4",
            "New Belgium Brewing",
            "Fort Collins",
            "Colorado",
            Some("https://www.newbelgium.com"),
        ),
        record(
            "5",
            "Sierra Nevada Brewing",
            "Chico",
            "California",
            Some("https://www.sierranevada.com"),
        ),
        record(
            "6",
            "Founders Brewing",
            "Grand Rapids",
            "Michigan",
            Some("https://www.foundersbrewing.com"),
        ),
        record(
            "7",
            "Lagunitas Brewing",
            "Petaluma",
            "California",
            Some("https://www.lagunitas.com"),
        ),
        record(
            "8",
            "Oskar Blues Brewery",
            "Longmont",
            "Colorado",
            Some("https://www.oskarblues.com"),
        ),
        record(
            "9",
            "Deschutes Brewery",
            "Bend",
            "Oregon",
            Some("https://www.deschutesbrewery.com"),
        ),
        record(
            "10",
            "Great Lakes Brewing",
            "Cleveland",
            "Ohio",
            Some("https://www.greatlakesbrewing.com"),
        ),
        record(
            "11",
            "Troegs Independent Brewing",
            "Hershey",
            "Pennsylvania",
            Some("https://www.troegs.com"),
        ),
        record(
            "12",
            "Sweetwater Brewing",
            "Atlanta",
            "Georgia",
            Some("https://www.sweetwaterbrew.com"),
        ),
        record(
            "13",
            "Brooklyn Brewery",
            "Brooklyn",
            "New York",
            Some("https://www.brooklynbrewery.com"),
        ),
        // Anchor has no website on purpose: exercises the N/A placeholder
        record("14", "Anchor Brewing", "San Francisco", "California", None),
        record(
            "15",
            "Russian River Brewing",
            "Santa Rosa",
            "California",
            Some("https://www.russianriverbrewing.com"),
        ),
    ]
}
