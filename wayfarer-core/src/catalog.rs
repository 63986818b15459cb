// Static region catalog

use crate::model::{Region, RegionType};

/// Minimum number of entries a persisted snapshot must hold to be trusted
pub const MIN_SNAPSHOT_LEN: usize = 10;

#[rustfmt::skip]
const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"),
    ("Arkansas", "AR"), ("California", "CA"), ("Colorado", "CO"),
    ("Connecticut", "CT"), ("Delaware", "DE"), ("Florida", "FL"),
    ("Georgia", "GA"), ("Hawaii", "HI"), ("Idaho", "ID"),
    ("Illinois", "IL"), ("Indiana", "IN"), ("Iowa", "IA"),
    ("Kansas", "KS"), ("Kentucky", "KY"), ("Louisiana", "LA"),
    ("Maine", "ME"), ("Maryland", "MD"), ("Massachusetts", "MA"),
    ("Michigan", "MI"), ("Minnesota", "MN"), ("Mississippi", "MS"),
    ("Missouri", "MO"), ("Montana", "MT"), ("Nebraska", "NE"),
    ("Nevada", "NV"), ("New Hampshire", "NH"), ("New Jersey", "NJ"),
    ("New Mexico", "NM"), ("New York", "NY"), ("North Carolina", "NC"),
    ("North Dakota", "ND"), ("Ohio", "OH"), ("Oklahoma", "OK"),
    ("Oregon", "OR"), ("Pennsylvania", "PA"), ("Rhode Island", "RI"),
    ("South Carolina", "SC"), ("South Dakota", "SD"), ("Tennessee", "TN"),
    ("Texas", "TX"), ("Utah", "UT"), ("Vermont", "VT"),
    ("Virginia", "VA"), ("Washington", "WA"), ("West Virginia", "WV"),
    ("Wisconsin", "WI"), ("Wyoming", "WY"),
];

#[rustfmt::skip]
const COUNTRIES: &[(&str, &str)] = &[
    ("Australia", "AU"), ("Brazil", "BR"), ("Canada", "CA"),
    ("France", "FR"), ("Germany", "DE"), ("India", "IN"),
    ("Ireland", "IE"), ("Italy", "IT"), ("Japan", "JP"),
    ("Mexico", "MX"), ("Netherlands", "NL"), ("Portugal", "PT"),
    ("Spain", "ES"), ("United Kingdom", "GB"), ("United States", "US"),
];

/// Every trackable region, all unvisited.
///
/// States keep their canonical order; countries are sorted by display name.
pub fn all_regions() -> Vec<Region> {
    let states = US_STATES
        .iter()
        .map(|(name, code)| Region::new(RegionType::UsState, code, name));

    let mut countries: Vec<&(&str, &str)> = COUNTRIES.iter().collect();
    countries.sort_by(|a, b| a.0.cmp(b.0));
    let countries = countries
        .into_iter()
        .map(|(name, code)| Region::new(RegionType::Country, code, name));

    states.chain(countries).collect()
}

pub fn find(region_type: RegionType, region_code: &str) -> Option<Region> {
    let entries = match region_type {
        RegionType::UsState => US_STATES,
        RegionType::Country => COUNTRIES,
    };
    entries
        .iter()
        .find(|(_, code)| *code == region_code)
        .map(|(name, code)| Region::new(region_type, code, name))
}
