//! CLI argument definitions for standings.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use standings::config::DataOverrides;
use standings::criteria::SortCriteria;

#[derive(Parser)]
#[command(name = "standings")]
#[command(version)]
#[command(about = "League standings for the terminal and static sites", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    standings init              Write a starter .standings/config.md\n    standings show              Print the table\n    standings site build        Generate the static site"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Data source locations overriding the config
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Teams JSON (file path or http(s) URL)
    #[arg(long, value_name = "SOURCE")]
    pub teams: Option<String>,
    /// Zones JSON (file path or http(s) URL)
    #[arg(long, value_name = "SOURCE")]
    pub zones: Option<String>,
    /// Criteria labels JSON (file path or http(s) URL)
    #[arg(long, value_name = "SOURCE")]
    pub criteria: Option<String>,
}

impl SourceArgs {
    pub fn overrides(&self) -> DataOverrides {
        DataOverrides {
            teams: self.teams.clone(),
            zones: self.zones.clone(),
            criteria: self.criteria.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter config to .standings/config.md
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Print the standings table
    Show {
        /// Sort by points, name or fantapunti (default: from config)
        #[arg(long, short)]
        sort: Option<SortCriteria>,
        /// Show only rows in this zone (e.g. fascia-1, champions, all)
        #[arg(long, short)]
        zone: Option<String>,
        /// Show only teams whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// List zones with their positions
    Legend {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Generate the static site
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Subcommands for site generation
#[derive(Subcommand)]
pub enum SiteCommands {
    /// Copy the default theme to .standings/site/theme for customization
    Init {
        /// Overwrite existing theme files
        #[arg(long)]
        force: bool,
    },
    /// Build the static site
    Build {
        /// Output directory (overrides config)
        #[arg(long, short)]
        output: Option<String>,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Print the template variable reference
    Vars,
}
