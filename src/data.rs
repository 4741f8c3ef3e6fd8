//! Loading team, zone and label data from files or URLs.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::criteria::CriteriaLabels;
use crate::team::TeamsData;
use crate::zone::ZonesData;

/// Where a JSON document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(url::Url),
}

impl DataSource {
    /// Interpret `location` as an http(s) URL when it parses as one,
    /// otherwise as a filesystem path.
    pub fn parse(location: &str) -> Self {
        match url::Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Url(url),
            _ => DataSource::File(PathBuf::from(location)),
        }
    }

    /// Resolve relative file paths against `base`. URLs are unchanged.
    pub fn relative_to(self, base: &Path) -> Self {
        match self {
            DataSource::File(path) if path.is_relative() => DataSource::File(base.join(path)),
            other => other,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }

    /// Read the raw document text.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            DataSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            DataSource::Url(url) => fetch(url),
        }
    }

    /// Read and deserialize the document as JSON.
    pub fn load_json<T: DeserializeOwned>(&self) -> Result<T> {
        let content = self.read_to_string()?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", self))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// GET a URL and return the body. Non-2xx responses are errors.
fn fetch(url: &url::Url) -> Result<String> {
    let response = match ureq::get(url.as_str()).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            anyhow::bail!("{} responded with HTTP {}", url, code)
        }
        Err(e) => return Err(e).with_context(|| format!("Request to {} failed", url)),
    };

    response
        .into_string()
        .with_context(|| format!("Failed to read response body from {}", url))
}

/// The three data sources a table needs.
#[derive(Debug, Clone)]
pub struct DataSources {
    pub teams: DataSource,
    pub zones: DataSource,
    pub criteria: DataSource,
}

impl DataSources {
    fn any_remote(&self) -> bool {
        self.teams.is_remote() || self.zones.is_remote() || self.criteria.is_remote()
    }
}

pub fn load_teams(source: &DataSource) -> Result<TeamsData> {
    source
        .load_json()
        .with_context(|| format!("Failed to load team data from {}", source))
}

pub fn load_zones(source: &DataSource) -> Result<ZonesData> {
    source
        .load_json()
        .with_context(|| format!("Failed to load zone data from {}", source))
}

pub fn load_labels(source: &DataSource) -> Result<CriteriaLabels> {
    source
        .load_json()
        .with_context(|| format!("Failed to load criteria labels from {}", source))
}

/// Teams, zones and criteria labels for one league.
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub teams: TeamsData,
    pub zones: ZonesData,
    pub labels: CriteriaLabels,
}

impl LeagueData {
    /// Load all three sources in order: teams, labels, zones.
    pub fn load(sources: &DataSources) -> Result<Self> {
        let teams = load_teams(&sources.teams)?;
        let labels = load_labels(&sources.criteria)?;
        let zones = load_zones(&sources.zones)?;

        Ok(Self {
            teams,
            zones,
            labels,
        })
    }

    /// Like [`LeagueData::load`], with a spinner while remote sources load.
    pub fn load_with_progress(sources: &DataSources, show_progress: bool) -> Result<Self> {
        if !show_progress || !sources.any_remote() {
            return Self::load(sources);
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Loading standings data...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = Self::load(sources);
        spinner.finish_and_clear();
        result
    }
}
