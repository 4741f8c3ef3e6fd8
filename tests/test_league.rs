//! Library-level tests running the full pipeline over fixture files

use chrono::NaiveDate;
use serial_test::serial;
use std::fs;

use standings::config::{Config, DataOverrides, LabelsConfig};
use standings::criteria::SortCriteria;
use standings::data::LeagueData;
use standings::filter::ZoneFilter;
use standings::site::SiteGenerator;
use standings::standings::{StandingsQuery, StandingsView};

mod support;
use support::harness::TestHarness;

fn load(harness: &TestHarness) -> LeagueData {
    let config =
        Config::load_merged_from(None, &harness.path().join(".standings/config.md")).unwrap();
    let sources = config.data_sources(&DataOverrides::default()).unwrap();
    LeagueData::load(&sources).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()
}

fn positions(view: &StandingsView) -> Vec<(u32, String, String)> {
    view.visible_rows()
        .map(|r| (r.position, r.team.name.clone(), r.zone.normalized.clone()))
        .collect()
}

#[test]
fn test_points_view_with_zones() {
    let harness = TestHarness::new();
    let data = load(&harness);

    let view = StandingsView::build_on(
        &data,
        &StandingsQuery::default(),
        &LabelsConfig::default(),
        today(),
    );

    let rows = positions(&view);
    assert_eq!(
        rows,
        vec![
            (1, "Atletico Ma Non Troppo".into(), "champions".into()),
            (2, "Bayer Leverkusate".into(), "championship".into()),
            (3, "Real Mentecatti".into(), "fascia-1".into()),
            (4, "Sporting Lesbona".into(), "fascia-1".into()),
            (5, "Lokomotiv Lipsia".into(), "retrocessione".into()),
        ]
    );
    assert_eq!(view.footer, "© Info Serie A 18 gennaio 2026");
}

#[test]
fn test_name_view_reassigns_zones_by_position() {
    let harness = TestHarness::new();
    let data = load(&harness);

    let view = StandingsView::build_on(
        &data,
        &StandingsQuery::new(SortCriteria::Name),
        &LabelsConfig::default(),
        today(),
    );

    let rows = positions(&view);
    assert_eq!(rows[2], (3, "Lokomotiv Lipsia".into(), "fascia-1".into()));
    assert_eq!(view.criteria_label, "Ordine alfabetico");
}

#[test]
fn test_missing_fantapunti_defaults_to_zero() {
    let harness = TestHarness::new();
    let data = load(&harness);

    let lokomotiv = data
        .teams
        .teams
        .iter()
        .find(|t| t.name == "Lokomotiv Lipsia")
        .unwrap();
    assert_eq!(lokomotiv.fantapunti, 0.0);

    let view = StandingsView::build_on(
        &data,
        &StandingsQuery::new(SortCriteria::Fantapunti),
        &LabelsConfig::default(),
        today(),
    );
    assert_eq!(view.rows.last().unwrap().team.name, "Lokomotiv Lipsia");
}

#[test]
fn test_zone_filter_after_search() {
    let harness = TestHarness::new();
    let data = load(&harness);

    // "le" matches Atletico, Bayer Leverkusate and Sporting Lesbona; they become 1 to 3
    let query = StandingsQuery::default()
        .with_search("le")
        .with_filter(ZoneFilter::from_key("championship"));
    let view = StandingsView::build_on(&data, &query, &LabelsConfig::default(), today());

    assert_eq!(view.rows.len(), 3);
    let rows = positions(&view);
    assert_eq!(
        rows,
        vec![(2, "Bayer Leverkusate".into(), "championship".into())]
    );
    assert_eq!(view.rows[2].team.name, "Sporting Lesbona");
    assert_eq!(view.rows[2].zone.normalized, "fascia-1");
}

#[test]
#[serial]
fn test_config_load_from_working_directory() {
    let harness = TestHarness::new();
    let previous = std::env::current_dir().unwrap();
    std::env::set_var(
        "STANDINGS_GLOBAL_CONFIG",
        harness.path().join("no-global.md"),
    );
    std::env::set_current_dir(harness.path()).unwrap();

    let config = Config::load();

    std::env::set_current_dir(previous).unwrap();
    std::env::remove_var("STANDINGS_GLOBAL_CONFIG");

    let config = config.unwrap();
    assert_eq!(config.league.name, "Fantalega del Bar");
    assert_eq!(config.site.output_dir, "public");
}

#[test]
fn test_site_json_matches_default_view() {
    let harness = TestHarness::new();
    let data = load(&harness);
    let out = harness.path().join("site");

    let generator = SiteGenerator::new(Config::default(), data, None).unwrap();
    let result = generator.build_on(&out, today()).unwrap();
    assert_eq!(result.zone_pages, 4);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("standings.json")).unwrap()).unwrap();
    assert_eq!(json["criteria"], "points");
    assert_eq!(json["rows"].as_array().unwrap().len(), 5);
    assert_eq!(json["legend"].as_array().unwrap().len(), 5);
}
