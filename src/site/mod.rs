//! Static site generation for league standings.
//!
//! The generated site mirrors the interactive table page with one static
//! page per view:
//! - `index.html` with the configured default sort and filter
//! - `sort/<criteria>.html` for each sort button
//! - `zones/<zone>.html` for each legend entry
//! - `standings.json` with the default view

pub mod theme;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;

use crate::config::Config;
use crate::criteria::SortCriteria;
use crate::data::LeagueData;
use crate::filter::ZoneFilter;
use crate::standings::{StandingsQuery, StandingsView};
use crate::team::format_score;
use crate::ui::parse_hex_color;

/// Embedded default theme templates
pub mod embedded {
    pub const BASE_HTML: &str = include_str!("../../templates/site/base.html");
    pub const STANDINGS_HTML: &str = include_str!("../../templates/site/standings.html");
    pub const STYLES_CSS: &str = include_str!("../../templates/site/styles.css");
}

/// Row data for templates
#[derive(Debug, Clone, Serialize)]
pub struct RowTemplateData {
    pub position: u32,
    pub name: String,
    pub image: String,
    pub points: i64,
    pub fantapunti: String,
    pub zone: String,
    pub zone_raw: String,
    pub css_class: Option<String>,
    pub visible: bool,
}

/// Sort button data for templates
#[derive(Debug, Clone, Serialize)]
pub struct ButtonTemplateData {
    pub criteria: String,
    pub label: String,
    pub url: String,
    pub selected: bool,
}

/// Legend entry data for templates
#[derive(Debug, Clone, Serialize)]
pub struct LegendTemplateData {
    pub key: String,
    pub label: String,
    pub color: String,
    pub url: String,
    pub selected: bool,
}

/// Site generator
pub struct SiteGenerator {
    config: Config,
    data: LeagueData,
    tera: Tera,
    theme_dir: Option<PathBuf>,
}

impl SiteGenerator {
    /// Create a new site generator, loading templates from `theme_dir` when
    /// it exists and from the embedded theme otherwise.
    pub fn new(config: Config, data: LeagueData, theme_dir: Option<&Path>) -> Result<Self> {
        let theme_dir = theme_dir.filter(|dir| dir.exists()).map(Path::to_path_buf);

        let tera = match &theme_dir {
            Some(dir) => Self::create_theme_tera(dir)?,
            None => Self::create_embedded_tera()?,
        };

        Ok(Self {
            config,
            data,
            tera,
            theme_dir,
        })
    }

    /// Create a Tera instance with embedded templates
    fn create_embedded_tera() -> Result<Tera> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", embedded::BASE_HTML)?;
        tera.add_raw_template("standings.html", embedded::STANDINGS_HTML)?;

        tera.register_filter("slugify", slugify_filter);

        Ok(tera)
    }

    /// Create a Tera instance from a theme directory. Templates the theme
    /// leaves out fall back to the embedded ones.
    fn create_theme_tera(dir: &Path) -> Result<Tera> {
        let mut templates: Vec<(String, String)> = Vec::new();

        for name in theme::list_theme_files(dir)? {
            if !name.ends_with(".html") {
                continue;
            }
            let path = dir.join(&name);
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            templates.push((name, content));
        }

        for (name, content) in [
            ("base.html", embedded::BASE_HTML),
            ("standings.html", embedded::STANDINGS_HTML),
        ] {
            if !templates.iter().any(|(n, _)| n == name) {
                templates.push((name.to_string(), content.to_string()));
            }
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .with_context(|| format!("Failed to load templates from {}", dir.display()))?;
        tera.register_filter("slugify", slugify_filter);

        Ok(tera)
    }

    /// Build the static site as of today's local date
    pub fn build(&self, output_dir: &Path) -> Result<BuildResult> {
        self.build_on(output_dir, Local::now().date_naive())
    }

    pub fn build_on(&self, output_dir: &Path, today: NaiveDate) -> Result<BuildResult> {
        let mut result = BuildResult::default();
        let features = &self.config.site.features;

        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        // Write CSS
        let css = format!("{}\n{}", self.base_css()?, zone_css(&self.data));
        fs::write(output_dir.join("styles.css"), css)?;
        result.files_written += 1;

        // Index page
        let default_query = self.config.default_query();
        let default_view = self.view(&default_query, today);
        self.render_page(&default_view, &output_dir.join("index.html"))?;
        result.files_written += 1;
        result.teams_included = default_view.rows.len();

        // One page per sort button
        if features.sort_pages {
            fs::create_dir_all(output_dir.join("sort"))?;
            for criteria in SortCriteria::BUTTONS {
                let view = self.view(&StandingsQuery::new(criteria), today);
                let path = output_dir
                    .join("sort")
                    .join(format!("{}.html", criteria.as_str()));
                self.render_page(&view, &path)?;
                result.files_written += 1;
            }
        }

        // One page per zone
        if features.zone_pages {
            fs::create_dir_all(output_dir.join("zones"))?;
            for zone in &self.data.zones.zones {
                let key = zone.key();
                let query = StandingsQuery::new(SortCriteria::Points)
                    .with_filter(ZoneFilter::from_key(&key));
                let view = self.view(&query, today);
                let path = output_dir
                    .join("zones")
                    .join(format!("{}.html", slugify(&key)));
                self.render_page(&view, &path)?;
                result.files_written += 1;
                result.zone_pages += 1;
            }
        }

        if features.json {
            let json = serde_json::to_string_pretty(&default_view)?;
            fs::write(output_dir.join("standings.json"), json)?;
            result.files_written += 1;
        }

        Ok(result)
    }

    fn view(&self, query: &StandingsQuery, today: NaiveDate) -> StandingsView {
        StandingsView::build_on(&self.data, query, &self.config.labels, today)
    }

    /// Render one view through `standings.html`
    fn render_page(&self, view: &StandingsView, path: &Path) -> Result<()> {
        let context = self.page_context(view);
        let html = self
            .tera
            .render("standings.html", &context)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn page_context(&self, view: &StandingsView) -> tera::Context {
        let base_url = &self.config.site.base_url;
        let features = &self.config.site.features;

        let mut context = tera::Context::new();
        context.insert("site_title", &self.config.site.title);
        context.insert("league_name", &self.config.league.name);
        context.insert("base_url", base_url);
        context.insert("criteria", view.criteria.as_str());
        context.insert("criteria_label", &view.criteria_label);
        context.insert("footer", &view.footer);
        context.insert("no_results", &self.config.labels.no_results);
        context.insert("filter", view.filter.key());

        let rows: Vec<RowTemplateData> = view
            .rows
            .iter()
            .map(|row| RowTemplateData {
                position: row.position,
                name: row.team.name.clone(),
                image: row.team.image.clone(),
                points: row.team.points,
                fantapunti: format_score(row.team.fantapunti),
                zone: row.zone.normalized.clone(),
                zone_raw: row.zone.raw.clone(),
                css_class: row.css_class(),
                visible: row.visible,
            })
            .collect();
        context.insert("rows", &rows);

        let buttons: Vec<ButtonTemplateData> = SortCriteria::BUTTONS
            .iter()
            .map(|criteria| ButtonTemplateData {
                criteria: criteria.as_str().to_string(),
                label: self
                    .data
                    .labels
                    .label_for(*criteria, criteria.as_str()),
                url: if features.sort_pages {
                    format!("{}sort/{}.html", base_url, criteria.as_str())
                } else {
                    format!("{}index.html", base_url)
                },
                selected: *criteria == view.criteria,
            })
            .collect();
        context.insert("buttons", &buttons);

        let legend: Vec<LegendTemplateData> = view
            .legend
            .iter()
            .map(|item| LegendTemplateData {
                key: item.key.clone(),
                label: item.label.clone(),
                color: css_color(&item.color),
                url: if item.is_reset() || !features.zone_pages {
                    format!("{}index.html", base_url)
                } else {
                    format!("{}zones/{}.html", base_url, slugify(&item.key))
                },
                selected: view.is_selected(item),
            })
            .collect();
        context.insert("legend", &legend);

        context
    }

    /// Base stylesheet from the custom theme, or the embedded one
    fn base_css(&self) -> Result<String> {
        match self.theme_dir.as_ref().map(|dir| dir.join("styles.css")) {
            Some(path) if path.exists() => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => Ok(embedded::STYLES_CSS.to_string()),
        }
    }
}

/// Validated CSS color, `transparent` for anything that is not a hex color
fn css_color(color: &str) -> String {
    if parse_hex_color(color).is_some() {
        color.trim().to_string()
    } else {
        "transparent".to_string()
    }
}

/// One rule per zone coloring the position cell of its rows
pub fn zone_css(data: &LeagueData) -> String {
    data.zones
        .zones
        .iter()
        .filter(|zone| is_css_ident(&zone.key()))
        .map(|zone| {
            format!(
                ".{key}-zone .pos-col {{ border-left-color: {color}; color: {color}; }}\n\
                 .legend-item.{key} .legend-color {{ background-color: {color}; }}\n",
                key = zone.key(),
                color = css_color(&zone.color)
            )
        })
        .collect()
}

fn is_css_ident(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with(|c: char| c.is_ascii_digit())
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Slugify a string for use in URLs
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Tera filter for slugify
fn slugify_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    match value.as_str() {
        Some(s) => Ok(tera::Value::String(slugify(s))),
        None => Ok(value.clone()),
    }
}

/// Result of building the site
#[derive(Debug, Default)]
pub struct BuildResult {
    pub files_written: usize,
    pub teams_included: usize,
    pub zone_pages: usize,
}
