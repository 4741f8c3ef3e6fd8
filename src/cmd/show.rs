//! Terminal table and legend commands

use anyhow::Result;

use standings::config::DataOverrides;
use standings::criteria::SortCriteria;
use standings::filter::ZoneFilter;
use standings::formatters;
use standings::standings::StandingsView;

use super::load_league;

/// Options for `standings show`
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub sort: Option<SortCriteria>,
    pub zone: Option<String>,
    pub search: Option<String>,
    pub json: bool,
}

/// Print the standings table
pub fn cmd_show(opts: ShowOptions, overrides: &DataOverrides) -> Result<()> {
    let (config, data) = load_league(overrides)?;

    let mut query = config.default_query();
    if let Some(sort) = opts.sort {
        query.criteria = sort;
    }
    if let Some(zone) = opts.zone.as_deref() {
        let filter = ZoneFilter::from_key(zone);
        if let ZoneFilter::Zone(key) = &filter {
            if filter.zone_keys().iter().all(|k| data.zones.find(k).is_none()) {
                anyhow::bail!(
                    "Unknown zone '{}'. Run `standings legend` to list zones.",
                    key
                );
            }
        }
        query.filter = filter;
    }
    if let Some(search) = opts.search {
        query = query.with_search(search);
    }

    let view = StandingsView::build(&data, &query, &config.labels);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "{}",
            formatters::format_standings(&view, &config.labels.no_results)
        );
    }

    Ok(())
}

/// Print zones with their position sets
pub fn cmd_legend(overrides: &DataOverrides) -> Result<()> {
    let (_config, data) = load_league(overrides)?;
    println!("{}", formatters::format_zones(&data.zones));
    Ok(())
}
