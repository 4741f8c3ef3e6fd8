//! Output formatters for standings views
//!
//! Turns a [`StandingsView`] into terminal text: the criteria header, the
//! table, the legend and the footer line.

use colored::Colorize;

use crate::standings::{StandingsRow, StandingsView};
use crate::team::format_score;
use crate::ui::{self, format};
use crate::zone::{LegendItem, ZonesData};

const TEAM_WIDTH: usize = 32;
const POINTS_WIDTH: usize = 6;
const FANTAPUNTI_WIDTH: usize = 11;

/// Format the whole view as multi-section text.
pub fn format_standings(view: &StandingsView, no_results: &str) -> String {
    let mut output = vec![
        format!("{} {}", "Ordinamento:".bold(), view.criteria_label),
        String::new(),
    ];

    if !view.search.is_empty() {
        output.insert(
            1,
            format!("{} \"{}\"", "Ricerca:".bold(), view.search.cyan()),
        );
    }

    if view.is_empty() {
        output.push(format!("  ({})", no_results).dimmed().to_string());
    } else {
        output.push(format_header());
        output.push(format::separator(table_width()));
        for row in view.visible_rows() {
            output.push(format_row(row, view));
        }
    }

    output.push(String::new());
    output.push(format_legend(view));
    output.push(String::new());
    output.push(view.footer.dimmed().to_string());

    output.join("\n")
}

fn table_width() -> usize {
    4 + 1 + TEAM_WIDTH + 1 + POINTS_WIDTH + 1 + FANTAPUNTI_WIDTH
}

/// Column headings
fn format_header() -> String {
    format!(
        "{:>4} {} {:>pw$} {:>fw$}",
        "#",
        format::pad_right("Squadra", TEAM_WIDTH),
        "Pt",
        "Fantapunti",
        pw = POINTS_WIDTH,
        fw = FANTAPUNTI_WIDTH,
    )
    .bold()
    .to_string()
}

/// Format one table row, coloring the position with its zone color
fn format_row(row: &StandingsRow, view: &StandingsView) -> String {
    let position = format!("{:>4}", row.position);
    let position = zone_color(view, &row.zone.normalized)
        .map(|color| ui::zone_colored(&position, color).bold().to_string())
        .unwrap_or(position);

    let name = format::pad_right(&format::truncate(&row.team.name, TEAM_WIDTH), TEAM_WIDTH);

    format!(
        "{} {} {:>pw$} {:>fw$}",
        position,
        name,
        row.team.points,
        format_score(row.team.fantapunti),
        pw = POINTS_WIDTH,
        fw = FANTAPUNTI_WIDTH,
    )
}

fn zone_color<'a>(view: &'a StandingsView, key: &str) -> Option<&'a str> {
    view.legend
        .iter()
        .find(|item| !item.is_reset() && item.key == key)
        .map(|item| item.color.as_str())
}

/// Format the legend, marking the selected zone filter
pub fn format_legend(view: &StandingsView) -> String {
    view.legend
        .iter()
        .map(|item| format_legend_item(item, view.is_selected(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_legend_item(item: &LegendItem, selected: bool) -> String {
    let marker = if selected { "▸" } else { " " };
    let label = if selected {
        item.label.bold().to_string()
    } else {
        item.label.clone()
    };

    format!(
        "{} {} {} {}",
        marker,
        ui::swatch(&item.color),
        label,
        format!("[{}]", item.key).dimmed()
    )
}

/// Format zones with their position sets, as listed by `standings legend`
pub fn format_zones(zones: &ZonesData) -> String {
    if zones.zones.is_empty() {
        return "  (no zones configured)".dimmed().to_string();
    }

    zones
        .zones
        .iter()
        .map(|zone| {
            format!(
                "  {} {} {}  {}",
                ui::swatch(&zone.color),
                format::pad_right(&zone.key(), 20).cyan(),
                format::pad_right(&zone.label, 24),
                format_positions(&zone.positions).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compact position list: `1-4, 7, 18-20`
pub fn format_positions(positions: &[u32]) -> String {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges: Vec<(u32, u32)> = Vec::new();
    for position in sorted {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == position => *end = position,
            _ => ranges.push((position, position)),
        }
    }

    ranges
        .iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
