use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionType {
    #[serde(rename = "US_STATE")]
    UsState,
    #[serde(rename = "COUNTRY")]
    Country,
}

impl RegionType {
    pub const ALL: [RegionType; 2] = [RegionType::UsState, RegionType::Country];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionType::UsState => "US_STATE",
            RegionType::Country => "COUNTRY",
        }
    }

    /// Heading used when listing regions of this type
    pub fn label(&self) -> &'static str {
        match self {
            RegionType::UsState => "US States",
            RegionType::Country => "Countries",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            RegionType::UsState => "us",
            RegionType::Country => "world",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "us_state" | "us" | "state" | "states" => Some(RegionType::UsState),
            "country" | "countries" | "world" => Some(RegionType::Country),
            _ => None,
        }
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable state or country together with its visited flag.
///
/// Serialized with the field names of the persisted snapshot
/// (`id, name, type, regionCode, visited, visitedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub region_type: RegionType,
    pub region_code: String,
    pub visited: bool,
    pub visited_at: Option<DateTime<Utc>>,
}

impl Region {
    pub fn new(region_type: RegionType, region_code: &str, name: &str) -> Self {
        Self {
            id: region_id(region_type, region_code),
            name: name.to_string(),
            region_type,
            region_code: region_code.to_string(),
            visited: false,
            visited_at: None,
        }
    }

    /// Copy of this region with `visited` flipped and `visited_at` kept in step
    pub fn toggled(&self, now: DateTime<Utc>) -> Self {
        let visited = !self.visited;
        Self {
            visited,
            visited_at: if visited { Some(now) } else { None },
            ..self.clone()
        }
    }
}

pub fn region_id(region_type: RegionType, region_code: &str) -> String {
    format!("{}:{}", region_type.as_str(), region_code)
}
