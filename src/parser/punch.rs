//! Punch line parsing.
//!
//! A punch line records one shift as a date and a clock-in/clock-out pair,
//! with an optional break field:
//!
//! ```text
//! 01/05 09:00-17:30
//! 01/06 22:00 - 06:00 break 45
//! ```
//!
//! Parsing is per-line and failure-tolerant: a line that does not match,
//! or that matches but names an impossible date or time, becomes a
//! [`LineDiagnostic`] while the remaining lines parse normally. Output
//! order follows input order so diagnostics can point back at the paste.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use tracing::debug;

use crate::models::{LineDiagnostic, PunchDate, TimeEntry};

use super::clock::normalize_nbsp;

/// Pre-compiled regex for a punch line: `MM/DD HH:MM-HH:MM [break N]`.
///
/// The break field accepts `break 45`, `break=45`, `b45`, and similar.
static PUNCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^
        (?P<month>\d{1,2}) / (?P<day>\d{1,2})
        \s+
        (?P<in_h>\d{1,2}) : (?P<in_m>[0-5]\d)
        \s* - \s*
        (?P<out_h>\d{1,2}) : (?P<out_m>[0-5]\d)
        (?: \s+ (?:break|b) \s* [=:]? \s* (?P<break>\d{1,3}) )?
        $
        ",
    )
    .expect("valid punch line regex")
});

/// Placeholder year used to validate month/day tokens against a real
/// calendar. A leap year, so `02/29` is accepted.
const VALIDATION_YEAR: i32 = 2000;

/// One line of parsed input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// The line parsed as a time entry.
    Entry {
        /// 1-based input line number.
        line_number: usize,
        /// The line as pasted, trimmed.
        text: String,
        /// The parsed entry.
        entry: TimeEntry,
    },
    /// The line did not parse; the diagnostic carries the original text.
    Invalid(LineDiagnostic),
}

/// Parses raw pasted text into an ordered sequence of entries and
/// diagnostics.
///
/// Input is split on line boundaries; each line is trimmed and blank
/// lines are ignored. Line numbers are 1-based positions in the raw
/// input, counting blank lines, so they match what the user pasted.
pub fn parse_lines(raw_text: &str) -> Vec<ParsedLine> {
    let normalized = normalize_nbsp(raw_text);
    let mut parsed = Vec::new();

    for (index, line) in normalized.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parsed.push(parse_line(index + 1, line));
    }

    parsed
}

/// Parses a single non-blank, trimmed line.
fn parse_line(line_number: usize, text: &str) -> ParsedLine {
    let Some(captures) = PUNCH_RE.captures(text) else {
        debug!(line = line_number, "line does not match punch format");
        return invalid(
            line_number,
            text,
            "line does not match a recognized punch format".to_string(),
        );
    };

    // The regex only admits 1-2 digit numbers, so these cannot fail.
    let month: u32 = captures["month"].parse().unwrap_or_default();
    let day: u32 = captures["day"].parse().unwrap_or_default();

    if NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).is_none() {
        return invalid(
            line_number,
            text,
            format!("invalid calendar date {month:02}/{day:02}"),
        );
    }

    let Some(clock_in) = parse_clock(&captures["in_h"], &captures["in_m"]) else {
        return invalid(
            line_number,
            text,
            format!("clock-in time {}:{} is out of range", &captures["in_h"], &captures["in_m"]),
        );
    };
    let Some(clock_out) = parse_clock(&captures["out_h"], &captures["out_m"]) else {
        return invalid(
            line_number,
            text,
            format!(
                "clock-out time {}:{} is out of range",
                &captures["out_h"], &captures["out_m"]
            ),
        );
    };

    let break_minutes = captures
        .name("break")
        .map(|m| m.as_str().parse().unwrap_or_default());

    ParsedLine::Entry {
        line_number,
        text: text.to_string(),
        entry: TimeEntry {
            date: PunchDate { month, day },
            clock_in,
            clock_out,
            break_minutes,
        },
    }
}

fn parse_clock(hours: &str, minutes: &str) -> Option<NaiveTime> {
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

fn invalid(line_number: usize, text: &str, reason: String) -> ParsedLine {
    ParsedLine::Invalid(LineDiagnostic {
        line_number,
        text: text.to_string(),
        reason,
    })
}
