//! CLI entry point for standings.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, SiteCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("STANDINGS_QUIET", "1");
    }
    standings::ui::configure_colors();

    match cli.command {
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Show {
            sort,
            zone,
            search,
            json,
            sources,
        } => cmd::show::cmd_show(
            cmd::show::ShowOptions {
                sort,
                zone,
                search,
                json,
            },
            &sources.overrides(),
        ),
        Commands::Legend { sources } => cmd::show::cmd_legend(&sources.overrides()),
        Commands::Site { command } => match command {
            SiteCommands::Init { force } => cmd::site::cmd_site_init(force),
            SiteCommands::Build { output, sources } => {
                cmd::site::cmd_site_build(output.as_deref(), &sources.overrides())
            }
            SiteCommands::Vars => cmd::site::cmd_site_vars(),
        },
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}
