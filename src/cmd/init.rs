//! Project initialization

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use standings::paths::{CONFIG_FILE, STANDINGS_DIR};
use standings::ui;

const STARTER_CONFIG: &str = r#"---
league:
  name: Serie A

data:
  teams: data/teams.json
  zones: data/zones.json
  criteria: data/criteri.json

defaults:
  sort: points
  filter: all

labels:
  no_criteria: Nessun criterio selezionato
  show_all: Mostra tutte
  no_results: Nessuna squadra trovata
  footer_prefix: "© Info Serie A"

site:
  output_dir: ./public/
  base_url: /
  title: Classifica
---

# Standings config

`data` entries accept file paths (relative to this project) or http(s) URLs.
"#;

/// Write the starter config
pub fn cmd_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use {} to overwrite.",
            CONFIG_FILE,
            "--force".cyan()
        );
    }

    fs::create_dir_all(STANDINGS_DIR)
        .with_context(|| format!("Failed to create {}", STANDINGS_DIR))?;
    fs::write(config_path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    if !ui::is_quiet() {
        println!("{} Created {}", "✓".green(), CONFIG_FILE);
        println!("\n{}", "Next steps:".bold());
        println!("  1. Point {} at your JSON files", "data:".cyan());
        println!("  2. Run {} to check the table", "standings show".cyan());
        println!("  3. Run {} to generate the site", "standings site build".cyan());
    }

    Ok(())
}
