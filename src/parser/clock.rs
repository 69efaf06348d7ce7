//! `H:MM` clock token plumbing.
//!
//! Monthly Time Data reports express every duration as hours and minutes
//! separated by a colon, with hours running well past 24 for monthly
//! totals (e.g. `77:45`). These helpers convert between that form and
//! plain minutes.

use std::sync::LazyLock;

use regex::Regex;

/// Pre-compiled regex for a standalone `H:MM` token.
static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3}):([0-5]\d)$").expect("valid clock token regex"));

/// Parses an `H:MM` token into minutes.
///
/// Hours may run from one to three digits; minutes must be a zero-padded
/// value below 60. Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use timecard_engine::parser::parse_hhmm;
///
/// assert_eq!(parse_hhmm("10:30"), Some(630));
/// assert_eq!(parse_hhmm(" 77:45 "), Some(4665));
/// assert_eq!(parse_hhmm("10:75"), None);
/// ```
pub fn parse_hhmm(token: &str) -> Option<i64> {
    let captures = HHMM_RE.captures(token.trim())?;
    let hours: i64 = captures[1].parse().ok()?;
    let minutes: i64 = captures[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Formats minutes as an `H:MM` string, flooring negative values at zero.
///
/// # Examples
///
/// ```
/// use timecard_engine::parser::format_hhmm;
///
/// assert_eq!(format_hhmm(630), "10:30");
/// assert_eq!(format_hhmm(0), "0:00");
/// assert_eq!(format_hhmm(-5), "0:00");
/// ```
pub fn format_hhmm(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Replaces non-breaking spaces with plain spaces.
///
/// Reports copied out of terminal emulators frequently carry U+00A0 in
/// place of ordinary spaces, which would defeat `\s`-based matching.
pub fn normalize_nbsp(text: &str) -> String {
    text.replace('\u{00A0}', " ")
}
