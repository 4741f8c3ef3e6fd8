//! Sort criteria and their display labels.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::team::Team;

/// Label shown when the labels source has no entry for the criteria.
pub const DEFAULT_NO_CRITERIA_LABEL: &str = "Nessun criterio selezionato";

/// How the table is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    /// Points, highest first
    #[default]
    Points,
    /// Team name, A to Z
    Name,
    /// Fantapunti, highest first
    Fantapunti,
    /// Data source order
    Source,
}

impl SortCriteria {
    /// Criteria offered as sort buttons.
    pub const BUTTONS: [SortCriteria; 3] = [
        SortCriteria::Points,
        SortCriteria::Name,
        SortCriteria::Fantapunti,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriteria::Points => "points",
            SortCriteria::Name => "name",
            SortCriteria::Fantapunti => "fantapunti",
            SortCriteria::Source => "source",
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriteria {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "points" | "punti" => Ok(SortCriteria::Points),
            "name" | "nome" => Ok(SortCriteria::Name),
            "fantapunti" => Ok(SortCriteria::Fantapunti),
            "source" => Ok(SortCriteria::Source),
            other => anyhow::bail!(
                "Unknown sort criteria '{}'. Use points, name, fantapunti or source",
                other
            ),
        }
    }
}

/// Return a sorted copy of `teams`. All sorts are stable.
pub fn sort_teams(teams: &[Team], criteria: SortCriteria) -> Vec<Team> {
    let mut sorted = teams.to_vec();

    match criteria {
        SortCriteria::Points => sorted.sort_by(|a, b| b.points.cmp(&a.points)),
        SortCriteria::Name => sorted.sort_by(compare_names),
        SortCriteria::Fantapunti => sorted.sort_by(|a, b| b.fantapunti.total_cmp(&a.fantapunti)),
        SortCriteria::Source => {}
    }

    sorted
}

/// Collation-style name order: base letters first, then accents, then case
/// with lowercase ahead of uppercase. Raw names break any remaining tie.
fn compare_names(a: &Team, b: &Team) -> Ordering {
    collation_key(&a.name)
        .cmp(&collation_key(&b.name))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| case_key(&a.name).cmp(&case_key(&b.name)))
        .then_with(|| a.name.cmp(&b.name))
}

/// Lowercased name with accents stripped: "Èlite" -> "elite".
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Per-character case rank, lowercase before uppercase.
fn case_key(name: &str) -> Vec<bool> {
    name.chars().map(char::is_uppercase).collect()
}

/// Display labels keyed by criteria name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CriteriaLabels(HashMap<String, String>);

impl CriteriaLabels {
    /// Parse labels from a JSON object of `criteria -> label`.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn insert(&mut self, criteria: SortCriteria, label: impl Into<String>) {
        self.0.insert(criteria.as_str().to_string(), label.into());
    }

    pub fn get(&self, criteria: SortCriteria) -> Option<&str> {
        self.0
            .get(criteria.as_str())
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Label for `criteria`, or `fallback` when none is configured.
    pub fn label_for(&self, criteria: SortCriteria, fallback: &str) -> String {
        self.get(criteria).unwrap_or(fallback).to_string()
    }
}
