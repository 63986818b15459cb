// Visited-state store: load with validation, toggle, persist

use crate::catalog::{self, MIN_SNAPSHOT_LEN};
use crate::error::StoreError;
use crate::model::{Region, RegionType};
use crate::query;
use crate::storage::SnapshotStorage;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Ready,
}

/// Owns the visited-state collection and keeps the storage medium in sync
/// with it.
///
/// A store built with [`VisitedStore::detached`] has no medium: it always
/// loads a freshly seeded catalog and persisting is a no-op.
pub struct VisitedStore {
    storage: Option<Box<dyn SnapshotStorage>>,
    regions: Option<Vec<Region>>,
}

impl VisitedStore {
    pub fn new(storage: impl SnapshotStorage + 'static) -> Self {
        Self {
            storage: Some(Box::new(storage)),
            regions: None,
        }
    }

    pub fn detached() -> Self {
        Self {
            storage: None,
            regions: None,
        }
    }

    pub fn state(&self) -> StoreState {
        match self.regions {
            Some(_) => StoreState::Ready,
            None => StoreState::Uninitialized,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.storage.is_none()
    }

    pub fn regions(&self) -> Option<&[Region]> {
        self.regions.as_deref()
    }

    /// Read the persisted snapshot, or reseed from the catalog when it is
    /// missing, unreadable, malformed or implausibly short.
    ///
    /// A reseeded collection is not written back until the next mutation.
    pub fn load(&mut self) -> &[Region] {
        let regions = self.read_snapshot().unwrap_or_else(catalog::all_regions);
        self.regions.insert(regions).as_slice()
    }

    fn read_snapshot(&self) -> Option<Vec<Region>> {
        let Some(storage) = self.storage.as_ref() else {
            debug!("No persistence medium, seeding from catalog");
            return None;
        };

        let raw = match storage.get() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No snapshot found, seeding from catalog");
                return None;
            }
            Err(e) => {
                warn!("Failed to read snapshot, reseeding: {}", e);
                return None;
            }
        };

        let parsed: Vec<Region> = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Discarding malformed snapshot: {}", e);
                return None;
            }
        };

        if parsed.len() < MIN_SNAPSHOT_LEN {
            warn!(
                "Discarding snapshot with {} entries (minimum {})",
                parsed.len(),
                MIN_SNAPSHOT_LEN
            );
            return None;
        }

        debug!("Loaded snapshot with {} regions", parsed.len());
        Some(parsed)
    }

    /// Flip the visited flag of the region with `id` and persist the result.
    ///
    /// An unknown id leaves every entry unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<&[Region], StoreError> {
        let current = self.regions.as_deref().ok_or(StoreError::NotLoaded)?;
        if !current.iter().any(|r| r.id == id) {
            debug!("Toggle ignored, no region with id {}", id);
        }
        let next = toggled(current, id, Utc::now());
        write_snapshot(&mut self.storage, &next)?;
        Ok(self.regions.insert(next).as_slice())
    }

    pub fn persist(&mut self) -> Result<(), StoreError> {
        let regions = self.regions.as_deref().ok_or(StoreError::NotLoaded)?;
        write_snapshot(&mut self.storage, regions)
    }

    /// Replace everything with an unvisited catalog and persist it
    pub fn reset(&mut self) -> Result<&[Region], StoreError> {
        let seeded = catalog::all_regions();
        write_snapshot(&mut self.storage, &seeded)?;
        info!("Reseeded {} regions", seeded.len());
        Ok(self.regions.insert(seeded).as_slice())
    }

    // Entry points for the presentation layer. These load lazily.

    pub fn request_load(&mut self) -> &[Region] {
        if self.regions.is_none() {
            self.load();
        }
        self.regions.as_deref().unwrap_or_default()
    }

    pub fn request_toggle(&mut self, id: &str) -> Result<&[Region], StoreError> {
        self.request_load();
        self.toggle(id)
    }

    pub fn request_visited_codes(&mut self, region_type: RegionType) -> BTreeSet<String> {
        let scoped = query::by_type(self.request_load(), region_type);
        query::visited_codes(&scoped)
    }
}

/// Copy of `regions` with the entry matching `id` toggled at `now`
pub fn toggled(regions: &[Region], id: &str, now: DateTime<Utc>) -> Vec<Region> {
    regions
        .iter()
        .map(|r| if r.id == id { r.toggled(now) } else { r.clone() })
        .collect()
}

fn write_snapshot(
    storage: &mut Option<Box<dyn SnapshotStorage>>,
    regions: &[Region],
) -> Result<(), StoreError> {
    let Some(storage) = storage.as_mut() else {
        return Ok(());
    };
    let text = serde_json::to_string(regions)?;
    if let Err(e) = storage.set(&text) {
        // In-memory state stays authoritative for the rest of the session
        warn!("Failed to persist snapshot: {}", e);
    }
    Ok(())
}
