//! Zones: labeled, colored bands of table positions.
//!
//! A zone owns an explicit set of 1-indexed ranks. Lookup walks zones in
//! configured order and returns the first one containing the rank, so
//! overlapping zones resolve to whichever is listed first.

use serde::{Deserialize, Serialize};

/// Normalized key for rows outside every zone.
pub const NO_ZONE: &str = "none";

/// Legend key for the entry that clears the zone filter.
pub const RESET_KEY: &str = "reset";

/// Swatch color for the reset legend entry.
pub const RESET_COLOR: &str = "#64748b";

/// A zone as configured in the zones data source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Zone {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub positions: Vec<u32>,
}

impl Zone {
    /// Normalized key used for CSS classes and filter matching.
    pub fn key(&self) -> String {
        normalize_zone_name(&self.name)
    }

    pub fn contains(&self, position: u32) -> bool {
        self.positions.contains(&position)
    }
}

/// Contents of the zones data source.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZonesData {
    #[serde(default)]
    pub zones: Vec<Zone>,
}

/// Zone assignment for a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneInfo {
    /// Zone name as written in the data source
    pub raw: String,
    pub normalized: String,
}

impl ZoneInfo {
    pub fn none() -> Self {
        Self {
            raw: NO_ZONE.to_string(),
            normalized: NO_ZONE.to_string(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.normalized == NO_ZONE
    }
}

/// One clickable entry of the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendItem {
    pub key: String,
    pub label: String,
    pub color: String,
    /// Rank set, empty for the reset entry
    pub positions: Vec<u32>,
}

impl LegendItem {
    pub fn is_reset(&self) -> bool {
        self.key == RESET_KEY
    }
}

impl ZonesData {
    /// Parse zones data from JSON text.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Zone for a 1-indexed league position, or the `none` sentinel.
    pub fn zone_for_position(&self, position: u32) -> ZoneInfo {
        self.zones
            .iter()
            .find(|zone| zone.contains(position))
            .map(|zone| ZoneInfo {
                raw: zone.name.clone(),
                normalized: zone.key(),
            })
            .unwrap_or_else(ZoneInfo::none)
    }

    /// Find a zone by its normalized key.
    pub fn find(&self, key: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.key() == key)
    }

    /// Legend entries in configured order, followed by the reset entry.
    pub fn legend(&self, show_all_label: &str) -> Vec<LegendItem> {
        let mut items: Vec<LegendItem> = self
            .zones
            .iter()
            .map(|zone| LegendItem {
                key: zone.key(),
                label: zone.label.clone(),
                color: zone.color.clone(),
                positions: zone.positions.clone(),
            })
            .collect();

        items.push(LegendItem {
            key: RESET_KEY.to_string(),
            label: show_all_label.to_string(),
            color: RESET_COLOR.to_string(),
            positions: vec![],
        });

        items
    }
}

/// Normalize a zone name: trim, lowercase, collapse whitespace runs to `-`.
///
/// Blank names normalize to `none`.
pub fn normalize_zone_name(name: &str) -> String {
    let normalized = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if normalized.is_empty() {
        NO_ZONE.to_string()
    } else {
        normalized
    }
}
