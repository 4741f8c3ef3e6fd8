//! Row filters: free-text search over team names and zone selection.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::team::Team;
use crate::zone::{normalize_zone_name, NO_ZONE, RESET_KEY};

/// Filter key selecting every row.
pub const ALL_KEY: &str = "all";

/// Filter keys that select more than one zone.
const ZONE_ALIASES: &[(&str, &[&str])] = &[("champions", &["champions", "championship"])];

/// Keep teams whose name contains `term`, ignoring case.
///
/// The term is trimmed first; a blank term keeps every team.
pub fn search_teams(teams: &[Team], term: &str) -> Vec<Team> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return teams.to_vec();
    }

    teams
        .iter()
        .filter(|team| team.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Zone selection applied to rendered rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneFilter {
    #[default]
    All,
    /// Normalized zone key (e.g. `fascia-1`)
    Zone(String),
}

impl ZoneFilter {
    /// Build a filter from a key. `all`, `reset` and blank keys select every row.
    pub fn from_key(key: &str) -> Self {
        let key = normalize_zone_name(key);
        if key == ALL_KEY || key == RESET_KEY || key == NO_ZONE {
            ZoneFilter::All
        } else {
            ZoneFilter::Zone(key)
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ZoneFilter::All => ALL_KEY,
            ZoneFilter::Zone(key) => key,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ZoneFilter::All)
    }

    /// Zone keys this filter selects. Empty for `All`.
    pub fn zone_keys(&self) -> Vec<&str> {
        match self {
            ZoneFilter::All => vec![],
            ZoneFilter::Zone(key) => ZONE_ALIASES
                .iter()
                .find(|(alias, _)| alias == key)
                .map(|(_, zones)| zones.to_vec())
                .unwrap_or_else(|| vec![key.as_str()]),
        }
    }

    /// Whether a row in zone `row_zone` stays visible.
    pub fn matches(&self, row_zone: &str) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Zone(_) => row_zone != NO_ZONE && self.zone_keys().contains(&row_zone),
        }
    }
}

impl FromStr for ZoneFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ZoneFilter::from_key(s))
    }
}

impl fmt::Display for ZoneFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for ZoneFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("Inter Nos", 50, 0.0),
            Team::new("Borussia Porcmund", 48, 0.0),
            Team::new("Sporting Lesbona", 44, 0.0),
            Team::new("FC Internazionale Brianza", 40, 0.0),
        ]
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let found = search_teams(&teams(), "INTER");
        let names: Vec<_> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Inter Nos", "FC Internazionale Brianza"]);
    }

    #[test]
    fn test_search_trims_term() {
        assert_eq!(search_teams(&teams(), "  porc  ").len(), 1);
    }

    #[test]
    fn test_search_blank_keeps_all() {
        assert_eq!(search_teams(&teams(), "").len(), 4);
        assert_eq!(search_teams(&teams(), "   ").len(), 4);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_teams(&teams(), "juventus").is_empty());
    }

    #[test]
    fn test_zone_filter_from_key() {
        assert_eq!(ZoneFilter::from_key("all"), ZoneFilter::All);
        assert_eq!(ZoneFilter::from_key("reset"), ZoneFilter::All);
        assert_eq!(ZoneFilter::from_key(""), ZoneFilter::All);
        assert_eq!(
            ZoneFilter::from_key("Fascia 1"),
            ZoneFilter::Zone("fascia-1".to_string())
        );
    }

    #[test]
    fn test_zone_filter_exact_match() {
        let filter = ZoneFilter::from_key("fascia-1");
        assert!(filter.matches("fascia-1"));
        assert!(!filter.matches("fascia-10"));
        assert!(!filter.matches("fascia"));
        assert!(!filter.matches("none"));
    }

    #[test]
    fn test_zone_filter_champions_union() {
        let filter = ZoneFilter::from_key("champions");
        assert!(filter.matches("champions"));
        assert!(filter.matches("championship"));
        assert!(!filter.matches("europa-league"));
        assert_eq!(filter.zone_keys(), vec!["champions", "championship"]);
    }

    #[test]
    fn test_zone_filter_championship_alone() {
        let filter = ZoneFilter::from_key("championship");
        assert!(filter.matches("championship"));
        assert!(!filter.matches("champions"));
    }

    #[test]
    fn test_zone_filter_all_matches_unzoned_rows() {
        assert!(ZoneFilter::All.matches("none"));
        assert!(ZoneFilter::All.matches("retrocessione"));
        assert!(ZoneFilter::All.zone_keys().is_empty());
    }

    #[test]
    fn test_zone_filter_display() {
        assert_eq!(ZoneFilter::All.to_string(), "all");
        assert_eq!(ZoneFilter::from_key("Europa League").to_string(), "europa-league");
    }
}
