//! Map topology features and their highlight state.
//!
//! Topology documents come from third-party map datasets (us-atlas,
//! world-atlas and friends). Only feature ids and names are read; geometry
//! is left to whatever draws the map.

use crate::error::TopologyError;
use crate::model::RegionType;
use crate::translate;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Native id as found in the document. Numeric ids keep their decimal text.
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureHighlight {
    pub feature_id: String,
    pub name: Option<String>,
    pub region_code: Option<&'static str>,
    pub visited: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Topology {
    pub features: Vec<Feature>,
}

impl Topology {
    /// Parse a TopoJSON `Topology` or a GeoJSON `FeatureCollection`
    pub fn from_json(text: &str) -> Result<Self, TopologyError> {
        let doc: Value = serde_json::from_str(text)?;

        let features = match doc.get("type").and_then(Value::as_str) {
            Some("Topology") => {
                let objects = doc
                    .get("objects")
                    .and_then(Value::as_object)
                    .ok_or_else(|| TopologyError::Unsupported("topology has no objects".to_string()))?;
                objects
                    .values()
                    .filter_map(|object| object.get("geometries").and_then(Value::as_array))
                    .flatten()
                    .map(feature_from)
                    .collect()
            }
            Some("FeatureCollection") => doc
                .get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    TopologyError::Unsupported("feature collection has no features".to_string())
                })?
                .iter()
                .map(feature_from)
                .collect(),
            Some(other) => {
                return Err(TopologyError::Unsupported(format!(
                    "document type '{}'",
                    other
                )));
            }
            None => {
                return Err(TopologyError::Unsupported(
                    "document has no type".to_string(),
                ));
            }
        };

        let topology = Topology { features };
        debug!("Parsed topology with {} features", topology.features.len());
        Ok(topology)
    }

    pub fn highlight(
        &self,
        region_type: RegionType,
        visited_codes: &BTreeSet<String>,
    ) -> Vec<FeatureHighlight> {
        highlight(&self.features, region_type, visited_codes)
    }
}

fn feature_from(value: &Value) -> Feature {
    let id = match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    let name = value
        .get("properties")
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    Feature { id, name }
}

/// Resolve every feature to a canonical code and mark the visited ones.
///
/// Features whose id has no translation are never highlighted.
pub fn highlight(
    features: &[Feature],
    region_type: RegionType,
    visited_codes: &BTreeSet<String>,
) -> Vec<FeatureHighlight> {
    features
        .iter()
        .map(|feature| {
            let region_code = translate::translate(region_type, &feature.id);
            let visited = region_code.is_some_and(|code| visited_codes.contains(code));
            FeatureHighlight {
                feature_id: feature.id.clone(),
                name: feature.name.clone(),
                region_code,
                visited,
            }
        })
        .collect()
}
