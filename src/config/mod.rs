//! Configuration management for standings projects.
//!
//! Configuration lives in the YAML frontmatter of `.standings/config.md`.
//! A global config in the user's config directory supplies fallbacks; each
//! section present in the project config replaces the global one.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{DataSource, DataSources};
use crate::filter::ZoneFilter;
use crate::paths::CONFIG_FILE;
use crate::standings::StandingsQuery;

pub mod defaults;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub league: LeagueConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub site: SiteConfig,
    /// Directory relative data paths resolve against
    #[serde(skip)]
    pub root: PathBuf,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (<config dir>/standings/config.md)
    /// 2. Project config (.standings/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(CONFIG_FILE))
    }

    /// Like [`Config::load`], falling back to defaults when no project
    /// config exists.
    pub fn load_or_default() -> Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::load()
        } else {
            let global = global_config_path()
                .filter(|p| p.exists())
                .map(|p| PartialConfig::load_from(&p))
                .transpose()?
                .unwrap_or_default();
            Ok(global.merge_with(PartialConfig::default(), PathBuf::from(".")))
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::parse(&content)?;
        config.root = project_root(path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let mut config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;
        config.root = PathBuf::from(".");
        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// The project config must exist; the global config is optional.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = PartialConfig::load_from(project_path)?;

        Ok(global_config.merge_with(project_config, project_root(project_path)))
    }

    /// Resolve data sources, preferring explicit overrides over config.
    pub fn data_sources(&self, overrides: &DataOverrides) -> Result<DataSources> {
        let teams = self.resolve_source("teams", overrides.teams.as_deref(), &self.data.teams)?;
        let zones = self.resolve_source("zones", overrides.zones.as_deref(), &self.data.zones)?;
        let criteria = self.resolve_source(
            "criteria",
            overrides.criteria.as_deref(),
            &self.data.criteria,
        )?;

        Ok(DataSources {
            teams,
            zones,
            criteria,
        })
    }

    fn resolve_source(
        &self,
        name: &str,
        flag: Option<&str>,
        configured: &Option<String>,
    ) -> Result<DataSource> {
        if let Some(location) = flag {
            return Ok(DataSource::parse(location));
        }

        match configured {
            Some(location) => Ok(DataSource::parse(location).relative_to(&self.root)),
            None => anyhow::bail!(
                "No {} data source configured. Set data.{} in {} or pass --{}",
                name,
                name,
                CONFIG_FILE,
                name
            ),
        }
    }

    /// Initial query from the `defaults` section.
    pub fn default_query(&self) -> StandingsQuery {
        StandingsQuery::new(self.defaults.sort)
            .with_filter(ZoneFilter::from_key(&self.defaults.filter))
    }
}

/// Data source locations given on the command line
#[derive(Debug, Clone, Default)]
pub struct DataOverrides {
    pub teams: Option<String>,
    pub zones: Option<String>,
    pub criteria: Option<String>,
}

/// Returns the path to the global config file, e.g. ~/.config/standings/config.md
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STANDINGS_GLOBAL_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("standings").join("config.md"))
}

/// Project root for a config at `<root>/.standings/config.md`.
fn project_root(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let frontmatter = rest[..end].to_string();
            let body = rest[end + 4..].trim_start();
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}

/// Partial config for merging - each section optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub league: Option<LeagueConfig>,
    pub data: Option<DataConfig>,
    pub defaults: Option<DefaultsConfig>,
    pub labels: Option<LabelsConfig>,
    pub site: Option<SiteConfig>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config.
    /// Sections present in the project config win; data locations merge
    /// per field so a project can point at its own teams file only.
    fn merge_with(self, project: PartialConfig, root: PathBuf) -> Config {
        let global_data = self.data.unwrap_or_default();
        let project_data = project.data.unwrap_or_default();

        Config {
            league: project.league.or(self.league).unwrap_or_default(),
            data: DataConfig {
                teams: project_data.teams.or(global_data.teams),
                zones: project_data.zones.or(global_data.zones),
                criteria: project_data.criteria.or(global_data.criteria),
            },
            defaults: project.defaults.or(self.defaults).unwrap_or_default(),
            labels: project.labels.or(self.labels).unwrap_or_default(),
            site: project.site.or(self.site).unwrap_or_default(),
            root,
        }
    }
}
