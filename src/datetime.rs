// Current time helpers

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// The current local date and time.
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// The current local time rendered with strftime `format`.
///
/// Returns `None` for a malformed format string.
pub fn now_formatted(format: &str) -> Option<String> {
    format_datetime(&now(), format)
}

/// Render `datetime` with strftime `format`, `None` when the format is
/// malformed.
pub fn format_datetime(datetime: &DateTime<Local>, format: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        swiss_log::debug!("malformed datetime format '{}'", format);
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", datetime.format_with_items(items.into_iter())).ok()?;
    Some(out)
}
