// Read-only views over a region collection

use crate::model::{Region, RegionType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Visited progress for one region type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub region_type: RegionType,
    pub visited: usize,
    pub total: usize,
    pub percent: u32,
}

/// Regions of `region_type`, sorted by display name ignoring case.
///
/// Case folding uses `str::to_lowercase`, not locale collation; catalog names are ASCII.
pub fn by_type(regions: &[Region], region_type: RegionType) -> Vec<Region> {
    let mut scoped: Vec<Region> = regions
        .iter()
        .filter(|r| r.region_type == region_type)
        .cloned()
        .collect();
    scoped.sort_by(|a, b| compare_names(&a.name, &b.name));
    scoped
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn visited_count(regions: &[Region]) -> usize {
    regions.iter().filter(|r| r.visited).count()
}

pub fn visited_codes(regions: &[Region]) -> BTreeSet<String> {
    regions
        .iter()
        .filter(|r| r.visited)
        .map(|r| r.region_code.clone())
        .collect()
}

pub fn progress(regions: &[Region], region_type: RegionType) -> Progress {
    let scoped = by_type(regions, region_type);
    let visited = visited_count(&scoped);
    let total = scoped.len();
    Progress {
        region_type,
        visited,
        total,
        percent: percent(visited, total),
    }
}

fn percent(visited: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((visited as f64 / total as f64) * 100.0).round() as u32
}
