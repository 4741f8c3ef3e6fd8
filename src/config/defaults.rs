//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::criteria::{SortCriteria, DEFAULT_NO_CRITERIA_LABEL};
use crate::filter::ALL_KEY;
use crate::footer::DEFAULT_FOOTER_PREFIX;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_league_name, String, "Serie A".to_string());
default_fn!(default_filter, String, ALL_KEY.to_string());
default_fn!(
    default_no_criteria_label,
    String,
    DEFAULT_NO_CRITERIA_LABEL.to_string()
);
default_fn!(default_show_all_label, String, "Mostra tutte".to_string());
default_fn!(
    default_no_results_label,
    String,
    "Nessuna squadra trovata".to_string()
);
default_fn!(
    default_footer_prefix,
    String,
    DEFAULT_FOOTER_PREFIX.to_string()
);
default_fn!(default_site_output_dir, String, "./public/".to_string());
default_fn!(default_site_base_url, String, "/".to_string());
default_fn!(default_site_title, String, "Classifica".to_string());
default_fn!(default_true, bool, true);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// League identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueConfig {
    #[serde(default = "default_league_name")]
    pub name: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: default_league_name(),
        }
    }
}

/// Locations of the three JSON documents (file paths or http(s) URLs)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub teams: Option<String>,
    pub zones: Option<String>,
    pub criteria: Option<String>,
}

/// Initial table state
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub sort: SortCriteria,
    /// Zone filter key (`all` shows every row)
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sort: SortCriteria::default(),
            filter: default_filter(),
        }
    }
}

/// User-facing strings that are not part of the data sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelsConfig {
    /// Shown when the criteria has no label
    #[serde(default = "default_no_criteria_label")]
    pub no_criteria: String,
    /// Legend entry that clears the zone filter
    #[serde(default = "default_show_all_label")]
    pub show_all: String,
    /// Shown when a search matches no team
    #[serde(default = "default_no_results_label")]
    pub no_results: String,
    #[serde(default = "default_footer_prefix")]
    pub footer_prefix: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            no_criteria: default_no_criteria_label(),
            show_all: default_show_all_label(),
            no_results: default_no_results_label(),
            footer_prefix: default_footer_prefix(),
        }
    }
}

/// Which page groups the site build writes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteFeaturesConfig {
    /// One page per sort criteria
    #[serde(default = "default_true")]
    pub sort_pages: bool,
    /// One page per zone
    #[serde(default = "default_true")]
    pub zone_pages: bool,
    /// `standings.json` export
    #[serde(default = "default_true")]
    pub json: bool,
}

impl Default for SiteFeaturesConfig {
    fn default() -> Self {
        Self {
            sort_pages: true,
            zone_pages: true,
            json: true,
        }
    }
}

/// Static site generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Output directory for generated site (default: ./public/)
    #[serde(default = "default_site_output_dir")]
    pub output_dir: String,
    /// Base URL for the site (default: /)
    #[serde(default = "default_site_base_url")]
    pub base_url: String,
    /// Page title (default: "Classifica")
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default)]
    pub features: SiteFeaturesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: default_site_output_dir(),
            base_url: default_site_base_url(),
            title: default_site_title(),
            features: SiteFeaturesConfig::default(),
        }
    }
}
