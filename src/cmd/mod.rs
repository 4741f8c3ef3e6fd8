//! Command module structure for standings CLI

use anyhow::Result;
use colored::Colorize;

use standings::config::{Config, DataOverrides};
use standings::data::LeagueData;
use standings::ui;

pub mod init;
pub mod show;
pub mod site;
pub mod util;

/// Load config (or defaults) and the three data sources it points at.
///
/// A missing project config is fine as long as every source is given on the
/// command line.
pub fn load_league(overrides: &DataOverrides) -> Result<(Config, LeagueData)> {
    let config = Config::load_or_default()?;
    let sources = config.data_sources(overrides)?;

    let show_progress = !ui::is_quiet() && atty::is(atty::Stream::Stderr);
    let data = LeagueData::load_with_progress(&sources, show_progress)?;

    if data.teams.teams.is_empty() && !ui::is_quiet() {
        eprintln!(
            "{} {} contains no teams",
            "Warning:".yellow(),
            sources.teams
        );
    }

    Ok((config, data))
}
