//! The standings view: sorted, searched, zoned and filtered rows.
//!
//! Building a view runs the same pipeline every time the table is redrawn:
//! sort all teams, apply the search term, number the survivors from 1 and
//! assign each its zone by position, then mark rows hidden by the zone
//! filter. Hidden rows keep their numbers.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::config::LabelsConfig;
use crate::criteria::{sort_teams, SortCriteria};
use crate::data::LeagueData;
use crate::filter::{search_teams, ZoneFilter};
use crate::footer::footer_text_on;
use crate::team::Team;
use crate::zone::{LegendItem, ZoneInfo, ZonesData};

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsQuery {
    pub criteria: SortCriteria,
    pub filter: ZoneFilter,
    pub search: String,
}

impl StandingsQuery {
    pub fn new(criteria: SortCriteria) -> Self {
        Self {
            criteria,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: ZoneFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into().trim().to_string();
        self
    }
}

/// A numbered table row.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow {
    /// 1-indexed rank within the searched list
    pub position: u32,
    pub team: Team,
    pub zone: ZoneInfo,
    /// False when the zone filter hides the row
    pub visible: bool,
}

impl StandingsRow {
    /// CSS class for zoned rows, e.g. `fascia-1-zone`.
    pub fn css_class(&self) -> Option<String> {
        if self.zone.is_none() {
            None
        } else {
            Some(format!("{}-zone", self.zone.normalized))
        }
    }
}

/// Build numbered rows for already ordered teams.
pub fn assign_positions(teams: Vec<Team>, zones: &ZonesData) -> Vec<StandingsRow> {
    teams
        .into_iter()
        .enumerate()
        .map(|(index, team)| {
            let position = index as u32 + 1;
            StandingsRow {
                position,
                zone: zones.zone_for_position(position),
                team,
                visible: true,
            }
        })
        .collect()
}

/// Everything needed to draw the table, legend and footer.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsView {
    pub criteria: SortCriteria,
    pub criteria_label: String,
    pub filter: ZoneFilter,
    pub search: String,
    pub rows: Vec<StandingsRow>,
    pub legend: Vec<LegendItem>,
    pub footer: String,
}

impl StandingsView {
    /// Build the view as of today's local date.
    pub fn build(data: &LeagueData, query: &StandingsQuery, labels: &LabelsConfig) -> Self {
        Self::build_on(data, query, labels, Local::now().date_naive())
    }

    pub fn build_on(
        data: &LeagueData,
        query: &StandingsQuery,
        labels: &LabelsConfig,
        today: NaiveDate,
    ) -> Self {
        let sorted = sort_teams(&data.teams.teams, query.criteria);
        let searched = search_teams(&sorted, &query.search);

        let mut rows = assign_positions(searched, &data.zones);
        for row in &mut rows {
            row.visible = query.filter.matches(&row.zone.normalized);
        }

        Self {
            criteria: query.criteria,
            criteria_label: data.labels.label_for(query.criteria, &labels.no_criteria),
            filter: query.filter.clone(),
            search: query.search.clone(),
            rows,
            legend: data.zones.legend(&labels.show_all),
            footer: footer_text_on(&data.teams, &labels.footer_prefix, today),
        }
    }

    /// True when the search left nothing to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &StandingsRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    /// Whether a legend entry is the selected filter.
    pub fn is_selected(&self, item: &LegendItem) -> bool {
        !self.filter.is_all() && item.key == self.filter.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaLabels;
    use crate::team::TeamsData;
    use crate::zone::Zone;

    fn zone(name: &str, positions: &[u32]) -> Zone {
        Zone {
            name: name.to_string(),
            label: format!("{} label", name),
            color: "#16a34a".to_string(),
            positions: positions.to_vec(),
        }
    }

    fn league() -> LeagueData {
        let mut labels = CriteriaLabels::default();
        labels.insert(SortCriteria::Points, "Punti");

        LeagueData {
            teams: TeamsData {
                teams: vec![
                    Team::new("Dinamo Divano", 20, 900.0),
                    Team::new("Athletic Spritz", 45, 1200.0),
                    Team::new("Sporting Aperitivo", 38, 1300.0),
                    Team::new("Real Divano", 31, 1000.0),
                ],
                champion: None,
                end_date: None,
            },
            zones: ZonesData {
                zones: vec![
                    zone("Champions", &[1]),
                    zone("Championship", &[2]),
                    zone("Retrocessione", &[4]),
                ],
            },
            labels,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 12).unwrap()
    }

    fn build(query: &StandingsQuery) -> StandingsView {
        StandingsView::build_on(&league(), query, &LabelsConfig::default(), today())
    }

    #[test]
    fn test_default_view_sorted_by_points_with_zones() {
        let view = build(&StandingsQuery::default());

        let rows: Vec<_> = view
            .rows
            .iter()
            .map(|r| (r.position, r.team.name.as_str(), r.zone.normalized.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, "Athletic Spritz", "champions"),
                (2, "Sporting Aperitivo", "championship"),
                (3, "Real Divano", "none"),
                (4, "Dinamo Divano", "retrocessione"),
            ]
        );
        assert_eq!(view.criteria_label, "Punti");
        assert_eq!(view.footer, "© Info Serie A 12 aprile 2026");
        assert_eq!(view.legend.len(), 4);
    }

    #[test]
    fn test_zones_follow_position_not_team() {
        let view = build(&StandingsQuery::new(SortCriteria::Fantapunti));
        assert_eq!(view.rows[0].team.name, "Sporting Aperitivo");
        assert_eq!(view.rows[0].zone.normalized, "champions");
        assert_eq!(view.criteria_label, "Nessun criterio selezionato");
    }

    #[test]
    fn test_search_renumbers_rows() {
        let view = build(&StandingsQuery::default().with_search("divano"));

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].team.name, "Real Divano");
        assert_eq!(view.rows[0].position, 1);
        assert_eq!(view.rows[0].zone.normalized, "champions");
        assert_eq!(view.rows[1].position, 2);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let view = build(&StandingsQuery::default().with_search("juventus"));
        assert!(view.is_empty());
        assert_eq!(view.visible_rows().count(), 0);
    }

    #[test]
    fn test_zone_filter_hides_rows_but_keeps_positions() {
        let query = StandingsQuery::default().with_filter(ZoneFilter::from_key("retrocessione"));
        let view = build(&query);

        assert!(!view.is_empty());
        let visible: Vec<_> = view.visible_rows().map(|r| r.position).collect();
        assert_eq!(visible, vec![4]);
    }

    #[test]
    fn test_zone_filter_outside_search_hides_all_rows() {
        let query = StandingsQuery::default()
            .with_search("divano")
            .with_filter(ZoneFilter::from_key("retrocessione"));
        let view = build(&query);

        assert!(!view.is_empty());
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.visible_rows().count(), 0);
        assert!(view.rows.iter().all(|r| r.position <= 2));
    }

    #[test]
    fn test_champions_filter_includes_championship() {
        let query = StandingsQuery::default().with_filter(ZoneFilter::from_key("champions"));
        let view = build(&query);

        let visible: Vec<_> = view.visible_rows().map(|r| r.team.name.as_str()).collect();
        assert_eq!(visible, vec!["Athletic Spritz", "Sporting Aperitivo"]);

        let selected: Vec<_> = view
            .legend
            .iter()
            .filter(|item| view.is_selected(item))
            .map(|item| item.key.as_str())
            .collect();
        assert_eq!(selected, vec!["champions"]);
    }

    #[test]
    fn test_css_class() {
        let view = build(&StandingsQuery::default());
        assert_eq!(view.rows[0].css_class().as_deref(), Some("champions-zone"));
        assert_eq!(view.rows[2].css_class(), None);
    }
}
