//! JSON fixtures shaped like a real fantasy league's data files.

pub const TEAMS_JSON: &str = r#"{
  "champion": "",
  "endDate": "",
  "teams": [
    {"name": "Real Mentecatti", "image": "img/real.png", "points": 38, "fantapunti": 1490.5},
    {"name": "Atletico Ma Non Troppo", "image": "img/amnt.png", "points": 45, "fantapunti": 1502},
    {"name": "Bayer Leverkusate", "image": "img/bayer.png", "points": 41, "fantapunti": 1533},
    {"name": "Lokomotiv Lipsia", "image": "img/loko.png", "points": 22},
    {"name": "Sporting Lesbona", "image": "img/sporting.png", "points": 30, "fantapunti": 1388}
  ]
}"#;

pub const FINISHED_TEAMS_JSON: &str = r#"{
  "champion": "Atletico Ma Non Troppo",
  "endDate": "25 maggio 2025",
  "teams": [
    {"name": "Atletico Ma Non Troppo", "points": 70, "fantapunti": 2800}
  ]
}"#;

pub const ZONES_JSON: &str = r##"{
  "zones": [
    {"name": "Champions", "label": "Champions League", "color": "#1d4ed8", "positions": [1]},
    {"name": "Championship", "label": "Spareggio Champions", "color": "#3b82f6", "positions": [2]},
    {"name": "Fascia 1", "label": "Prima fascia", "color": "#f59e0b", "positions": [3, 4]},
    {"name": "Retrocessione", "label": "Retrocessione", "color": "#dc2626", "positions": [5]}
  ]
}"##;

pub const CRITERIA_JSON: &str = r#"{
  "points": "Classifica a punti",
  "name": "Ordine alfabetico",
  "fantapunti": "Classifica fantapunti"
}"#;
