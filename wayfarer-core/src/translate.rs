//! Translation from third-party topology ids to canonical region codes.
//!
//! US states in topology data are keyed by two-digit FIPS codes, countries by
//! three-digit ISO 3166-1 numeric codes. Both tables only cover regions that
//! exist in the catalog; any other id simply has no match.

use crate::model::RegionType;
use phf::phf_map;

pub static US_STATE_FIPS: phf::Map<&'static str, &'static str> = phf_map! {
    "01" => "AL", "02" => "AK", "04" => "AZ", "05" => "AR", "06" => "CA",
    "08" => "CO", "09" => "CT", "10" => "DE", "12" => "FL", "13" => "GA",
    "15" => "HI", "16" => "ID", "17" => "IL", "18" => "IN", "19" => "IA",
    "20" => "KS", "21" => "KY", "22" => "LA", "23" => "ME", "24" => "MD",
    "25" => "MA", "26" => "MI", "27" => "MN", "28" => "MS", "29" => "MO",
    "30" => "MT", "31" => "NE", "32" => "NV", "33" => "NH", "34" => "NJ",
    "35" => "NM", "36" => "NY", "37" => "NC", "38" => "ND", "39" => "OH",
    "40" => "OK", "41" => "OR", "42" => "PA", "44" => "RI", "45" => "SC",
    "46" => "SD", "47" => "TN", "48" => "TX", "49" => "UT", "50" => "VT",
    "51" => "VA", "53" => "WA", "54" => "WV", "55" => "WI", "56" => "WY",
};

pub static COUNTRY_ISO_NUMERIC: phf::Map<&'static str, &'static str> = phf_map! {
    "036" => "AU", // Australia
    "076" => "BR", // Brazil
    "124" => "CA", // Canada
    "250" => "FR", // France
    "276" => "DE", // Germany
    "356" => "IN", // India
    "372" => "IE", // Ireland
    "380" => "IT", // Italy
    "392" => "JP", // Japan
    "484" => "MX", // Mexico
    "528" => "NL", // Netherlands
    "620" => "PT", // Portugal
    "724" => "ES", // Spain
    "826" => "GB", // United Kingdom
    "840" => "US", // United States
};

pub fn table(region_type: RegionType) -> &'static phf::Map<&'static str, &'static str> {
    match region_type {
        RegionType::UsState => &US_STATE_FIPS,
        RegionType::Country => &COUNTRY_ISO_NUMERIC,
    }
}

/// Resolve an external id to a canonical region code.
///
/// The id is matched verbatim: `"6"` and `"06"` are different ids.
pub fn translate(region_type: RegionType, external_id: &str) -> Option<&'static str> {
    table(region_type).get(external_id).copied()
}

/// Reverse lookup, canonical code to external id
pub fn external_id(region_type: RegionType, region_code: &str) -> Option<&'static str> {
    table(region_type)
        .entries()
        .find(|(_, code)| **code == region_code)
        .map(|(id, _)| *id)
}
