//! Footer line under the table.

use chrono::{Datelike, Local, NaiveDate};

use crate::team::TeamsData;

pub const DEFAULT_FOOTER_PREFIX: &str = "© Info Serie A";

const MONTHS_IT: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Footer text for today's local date.
pub fn footer_text(data: &TeamsData, prefix: &str) -> String {
    footer_text_on(data, prefix, Local::now().date_naive())
}

/// Footer text as of `today`.
///
/// A finished season shows its end date; a running one shows `today`.
pub fn footer_text_on(data: &TeamsData, prefix: &str, today: NaiveDate) -> String {
    if data.has_champion() {
        let end_date = data.end_date.as_deref().unwrap_or_default();
        format!("{} {}", prefix, end_date).trim_end().to_string()
    } else {
        format!("{} {}", prefix, format_date_it(today))
    }
}

/// `DD <mese> YYYY`, e.g. `05 marzo 2026`.
pub fn format_date_it(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS_IT[date.month0() as usize],
        date.year()
    )
}
