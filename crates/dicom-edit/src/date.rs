//! Calendar shifting of `DA`/`DT` text.

use chrono::{Duration, NaiveDate};

use crate::error::ContentIssue;

const DATE_FORMAT: &str = "%Y%m%d";

/// Parse a signed whole number of days, e.g. `"10"`, `"-7"`, `"+3"`.
pub fn parse_day_offset(s: &str) -> Result<i64, ContentIssue> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| ContentIssue::UnparseableValue(format!("day offset {s:?}")))
}

/// Shift the leading `YYYYMMDD` of `text` by `days`, keeping any time or
/// offset suffix unchanged.
pub fn shift_date_text(text: &str, days: i64) -> Result<String, ContentIssue> {
    let unparseable = || ContentIssue::UnparseableValue(format!("date {text:?}"));

    let date_part = text.get(..8).filter(|d| d.bytes().all(|b| b.is_ascii_digit())).ok_or_else(unparseable)?;
    let suffix = &text[8..];
    let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| unparseable())?;
    let shifted = Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(unparseable)?;
    Ok(format!("{}{suffix}", shifted.format(DATE_FORMAT)))
}
