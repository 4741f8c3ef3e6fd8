//! Site generation commands
//!
//! Commands for generating the static standings site.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use standings::config::DataOverrides;
use standings::paths::THEME_DIR;
use standings::site::{theme, SiteGenerator};
use standings::ui;

use super::load_league;

/// Initialize the theme directory with default templates
pub fn cmd_site_init(force: bool) -> Result<()> {
    let theme_dir = PathBuf::from(THEME_DIR);

    if theme::theme_exists(&theme_dir) && !force {
        println!(
            "{} Theme directory already exists at {}",
            "Note:".cyan(),
            theme_dir.display()
        );
        println!("Use {} to overwrite existing files", "--force".cyan());

        let files = theme::list_theme_files(&theme_dir)?;
        if !files.is_empty() {
            println!("\n{}", "Existing theme files:".bold());
            for file in files {
                println!("  {}", file);
            }
        }
        return Ok(());
    }

    let result = theme::init_theme(&theme_dir, force)?;

    if result.has_changes() {
        println!(
            "{} Theme initialized at {}",
            "✓".green(),
            theme_dir.display()
        );
        println!("\n{}", "Created files:".bold());
        for file in &result.created {
            let info = theme::get_theme_files()
                .iter()
                .find(|f| f.name == file)
                .map(|f| f.description)
                .unwrap_or("");
            println!("  {} - {}", file.cyan(), info.dimmed());
        }

        if !result.skipped.is_empty() {
            println!("\n{}", "Skipped (already exist):".yellow());
            for file in &result.skipped {
                println!("  {}", file);
            }
        }

        println!("\n{}", "Next steps:".bold());
        println!("  1. Edit templates in {}", theme_dir.display());
        println!(
            "  2. Run {} to generate the site",
            "standings site build".cyan()
        );
        println!(
            "\n{} Run {} for template variable documentation",
            "Tip:".cyan(),
            "standings site vars".dimmed()
        );
    } else {
        println!(
            "{} No files created (all exist). Use {} to overwrite.",
            "Note:".yellow(),
            "--force".cyan()
        );
    }

    Ok(())
}

/// Build the static site
pub fn cmd_site_build(output: Option<&str>, overrides: &DataOverrides) -> Result<()> {
    let quiet = ui::is_quiet();
    let (config, data) = load_league(overrides)?;

    let output_dir = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.site.output_dir));

    if !quiet {
        println!("{} Building site to {}", "→".cyan(), output_dir.display());
        println!(
            "  Found {} teams in {} zones",
            data.teams.teams.len(),
            data.zones.zones.len()
        );
    }

    let theme_dir = PathBuf::from(THEME_DIR);
    let theme_path = if theme::theme_exists(&theme_dir) {
        if !quiet {
            println!("  Using custom theme from {}", theme_dir.display());
        }
        Some(theme_dir.as_path())
    } else {
        if !quiet {
            println!("  Using embedded default theme");
        }
        None
    };

    let generator = SiteGenerator::new(config, data, theme_path)?;
    let result = generator.build(&output_dir)?;

    if !quiet {
        println!("\n{} Site built successfully", "✓".green());
        println!("  {} teams included", result.teams_included);
        println!("  {} zone pages", result.zone_pages);
        println!("  {} files written", result.files_written);
        println!("  Output: {}", output_dir.display());

        println!("\n{}", "Next steps:".bold());
        println!(
            "  Deploy: Copy {} to any static file host",
            output_dir.display()
        );
    }

    Ok(())
}

/// Print the template variable reference
pub fn cmd_site_vars() -> Result<()> {
    println!("{}", theme::get_template_variables_doc());
    Ok(())
}
