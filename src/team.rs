//! Team records as supplied by the teams data source.
//!
//! Points and fantapunti arrive pre-computed; nothing here derives them.

use serde::{Deserialize, Deserializer, Serialize};

/// A single team row in the league.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub name: String,
    /// Logo URL shown next to the name
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    pub points: i64,
    /// Secondary score, used only as an alternate sort key (missing or null = 0)
    #[serde(default, deserialize_with = "null_as_default")]
    pub fantapunti: f64,
}

impl Team {
    pub fn new(name: impl Into<String>, points: i64, fantapunti: f64) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            points,
            fantapunti,
        }
    }
}

/// Contents of the teams data source.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
    /// Set once the season is over
    #[serde(default)]
    pub champion: Option<String>,
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,
}

impl TeamsData {
    /// Parse teams data from JSON text.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Whether the season has a non-blank champion.
    pub fn has_champion(&self) -> bool {
        self.champion
            .as_deref()
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format a score without a trailing `.0` for whole numbers.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
