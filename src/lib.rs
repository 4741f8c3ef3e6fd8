//! # Standings
//!
//! Standings renders a league table from pre-computed team data. Points and
//! fantapunti come from the data source; this crate orders, searches, zones
//! and filters the rows, then draws them in the terminal or as a static site.
//!
//! ## Modules
//!
//! - [`team`] - Team records and the teams document
//! - [`zone`] - Zones, zone lookup by position, and the legend
//! - [`criteria`] - Sort criteria, sorting, and criteria labels
//! - [`filter`] - Name search and zone filters
//! - [`standings`] - The view pipeline tying the above together
//! - [`data`] - Loading documents from files or URLs
//! - [`config`] - Project configuration
//! - [`site`] - Static site generation
//!
//! ## Example
//!
//! ```no_run
//! use standings::config::{Config, DataOverrides};
//! use standings::data::LeagueData;
//! use standings::standings::StandingsView;
//!
//! let config = Config::load().expect("Failed to load config");
//! let sources = config
//!     .data_sources(&DataOverrides::default())
//!     .expect("No data sources");
//! let data = LeagueData::load(&sources).expect("Failed to load data");
//!
//! let view = StandingsView::build(&data, &config.default_query(), &config.labels);
//! for row in view.visible_rows() {
//!     println!("{:>2}. {} {}", row.position, row.team.name, row.team.points);
//! }
//! ```

pub mod config;
pub mod criteria;
pub mod data;
pub mod filter;
pub mod footer;
pub mod formatters;
pub mod site;
pub mod standings;
pub mod team;
pub mod ui;
pub mod zone;

/// Default path constants for the standings directory structure.
pub mod paths {
    /// Project config file: `.standings/config.md`
    pub const CONFIG_FILE: &str = ".standings/config.md";
    /// Project directory: `.standings`
    pub const STANDINGS_DIR: &str = ".standings";
    /// Custom site theme directory: `.standings/site/theme`
    pub const THEME_DIR: &str = ".standings/site/theme";
}
