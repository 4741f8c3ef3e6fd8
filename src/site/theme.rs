//! Theme management for site generation.
//!
//! Copies the embedded theme into a project so its templates can be
//! customized.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::embedded;

/// Theme file information
pub struct ThemeFile {
    pub name: &'static str,
    pub content: &'static str,
    pub description: &'static str,
}

/// Get all embedded theme files
pub fn get_theme_files() -> Vec<ThemeFile> {
    vec![
        ThemeFile {
            name: "base.html",
            content: embedded::BASE_HTML,
            description: "Page skeleton, head, footer",
        },
        ThemeFile {
            name: "standings.html",
            content: embedded::STANDINGS_HTML,
            description: "Sort buttons, table and legend",
        },
        ThemeFile {
            name: "styles.css",
            content: embedded::STYLES_CSS,
            description: "Base styling (zone colors are appended at build time)",
        },
    ]
}

/// Copy the embedded theme into `theme_dir`. Existing files are kept
/// unless `force` is set.
pub fn init_theme(theme_dir: &Path, force: bool) -> Result<InitResult> {
    fs::create_dir_all(theme_dir)
        .with_context(|| format!("Failed to create theme directory {}", theme_dir.display()))?;

    let mut result = InitResult::default();
    for file in get_theme_files() {
        let target = theme_dir.join(file.name);
        let name = file.name.to_string();

        if target.exists() && !force {
            result.skipped.push(name);
        } else {
            fs::write(&target, file.content)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            result.created.push(name);
        }
    }

    Ok(result)
}

/// Whether `theme_dir` is an existing directory
pub fn theme_exists(theme_dir: &Path) -> bool {
    theme_dir.is_dir()
}

/// Sorted names of the regular files in `theme_dir`
pub fn list_theme_files(theme_dir: &Path) -> Result<Vec<String>> {
    if !theme_exists(theme_dir) {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(theme_dir)
        .with_context(|| format!("Failed to read {}", theme_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }

    files.sort();
    Ok(files)
}

/// Files touched by [`init_theme`]
#[derive(Debug, Default)]
pub struct InitResult {
    pub created: Vec<String>,
    /// Already present and left alone
    pub skipped: Vec<String>,
}

impl InitResult {
    pub fn has_changes(&self) -> bool {
        !self.created.is_empty()
    }
}

/// Template variable documentation
pub fn get_template_variables_doc() -> &'static str {
    r#"# Template Variables Reference

## Global Variables (available in all templates)

- `site_title` - The site title from config
- `league_name` - The league name from config
- `base_url` - The base URL for all links
- `footer` - Footer line (season end date or today's date)

## Standings Page (`standings.html`)

- `criteria` - Current sort key (`points`, `name`, `fantapunti`)
- `criteria_label` - Display label for the current sort
- `filter` - Current zone filter key (`all` for none)
- `no_results` - Message shown when `rows` is empty
- `buttons` - Sort buttons:
  - `button.criteria`, `button.label`, `button.url`, `button.selected`
- `rows` - Table rows (hidden rows included, see `row.visible`):
  - `row.position` - 1-indexed rank
  - `row.name`, `row.image`
  - `row.points`, `row.fantapunti`
  - `row.zone` - Normalized zone key (`none` outside every zone)
  - `row.zone_raw` - Zone name as configured
  - `row.css_class` - `<zone>-zone`, or null
  - `row.visible` - False when the zone filter hides the row
- `legend` - Legend entries, the last one resets the filter:
  - `item.key`, `item.label`, `item.color`, `item.url`, `item.selected`

## Filters

- `slugify` - Convert string to URL-safe slug
  - Example: `{{ row.name | slugify }}`

## Example Template Snippet

```html
{% for row in rows %}
{% if row.visible %}
<div class="team-card {{ row.css_class | default(value="") }}">
  <strong>{{ row.position }}</strong> {{ row.name }} ({{ row.points }})
</div>
{% endif %}
{% endfor %}
```
"#
}
