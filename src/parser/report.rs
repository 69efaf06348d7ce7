//! Monthly Time Data report parsing.
//!
//! A full report paste mixes several shapes of data:
//!
//! ```text
//! 05OCT  REG 3324   8:50  10:30 10:30 10:30
//! 06OCT  RES SCC          1:00  1:00
//! RES OTHER SUB TTL ... 17:51 + 39:43 + 0:00 = 57:34 ...
//! CREDIT APPLICABLE TO REG G/SLIP PAY: 57:34
//! G/SLIP PAY : 0:00 ASSIGN PAY: 0:00 REROUTE PAY: 10:30
//! ```
//!
//! Reports arrive either with their original line breaks or collapsed
//! onto a single line, so everything here matches by pattern position
//! rather than by line structure wherever the source allows it.

use std::sync::LazyLock;

use regex::{Match, Regex};
use tracing::trace;

use crate::config::ReportConfig;
use crate::models::DutyDay;

use super::clock::{normalize_nbsp, parse_hhmm};

/// Pre-compiled regex for a daily duty row with up to four time columns.
static DUTY_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<date>\d{2}[A-Z]{3})
        \s+
        (?P<duty>[A-Z]+)
        \s+
        (?P<pairing>[A-Z0-9-]+)
        (?P<times>(?:\s+\d{1,3}:[0-5]\d){0,4})
        \s*
        $
        ",
    )
    .expect("valid duty row regex")
});

/// Pre-compiled regex for a reserve row header inside a collapsed report.
static EXTRAS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{2}[A-Z]{3}\s+RES\s+[A-Z0-9-]+").expect("valid extras header regex")
});

/// Pre-compiled regex for the markers that end the daily-rows section.
static EXTRAS_TERMINATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)RES\s+OTHER\s+SUB\s+TTL|CREDIT\s+APPLICABLE|END OF DISPLAY")
        .expect("valid extras terminator regex")
});

/// Pre-compiled regex for any `H:MM` token on a row.
static ROW_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}:[0-5]\d\b").expect("valid row time regex"));

/// Pre-compiled regex for the preferred total-credit line.
static PREFERRED_CREDIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)CREDIT\s+APPLICABLE\s+TO\s+REG\s+G/SLIP\s+PAY\s*:\s*(\d{1,3}:[0-5]\d)")
        .expect("valid preferred credit regex")
});

/// Pre-compiled regex for the alternate `TTL ... CREDIT:` label.
static ALTERNATE_CREDIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)TTL\s+.*CREDIT\s*:\s*(\d{1,3}:[0-5]\d)").expect("valid alternate credit regex")
});

/// Pre-compiled regex for `= H:MM` terms on an equation line.
static EQUATION_TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=\s*(\d{1,3}:[0-5]\d)").expect("valid equation term regex"));

/// Pre-compiled regexes marking a sub-total equation line.
static SUB_TTL_CREDIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SUB\s+TTL\s+CREDIT").expect("valid sub ttl regex"));
static GUAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bGUAR\b").expect("valid guarantee regex"));

/// Daily-extras totals scanned out of the reserve rows of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyExtras {
    /// Pay-time minutes from extras rows (SCC, PVEL, LOSA, adjustments).
    pub pay_time: i64,
    /// Pay-only minutes from rows carrying a trailing pay-only column.
    pub pay_only: i64,
}

/// Parses the daily duty rows of a report into structured [`DutyDay`]s.
///
/// Rows are matched per line; anything that is not a duty row is skipped,
/// and exact duplicate rows (a common artifact of OCR double-reads) keep
/// only their first occurrence. Column meaning depends on the duty type:
/// reserve rows have no block time and read sked/pay/credit left to right,
/// lineholder rows read block/sked/pay/credit, and missing trailing
/// columns fall back to the previous one.
pub fn parse_duty_days(text: &str) -> Vec<DutyDay> {
    let normalized = normalize_nbsp(text);
    let mut rows: Vec<DutyDay> = Vec::new();

    for line in normalized.lines() {
        let line = line.trim();
        let Some(captures) = DUTY_ROW_RE.captures(line) else {
            continue;
        };

        let duty = captures["duty"].to_string();
        let times: Vec<i64> = ROW_TIME_RE
            .find_iter(&captures["times"])
            .filter_map(|m| parse_hhmm(m.as_str()))
            .collect();

        let (block, sked, pay, credit) = normalize_columns(&duty, &times);
        let row = DutyDay {
            date: captures["date"].to_string(),
            duty,
            pairing: captures["pairing"].to_string(),
            block,
            sked,
            pay,
            credit,
        };

        if !rows.contains(&row) {
            rows.push(row);
        }
    }

    rows
}

/// Maps a row's time columns onto block/sked/pay/credit.
fn normalize_columns(
    duty: &str,
    times: &[i64],
) -> (Option<i64>, Option<i64>, Option<i64>, Option<i64>) {
    let get = |index: usize| times.get(index).copied();

    if is_reserve_duty(duty) {
        // Reserve rows carry no block time; the columns that do appear
        // are duty/credit style values.
        let sked = get(0);
        let pay = get(1).or(sked);
        let credit = if times.len() >= 2 {
            times.last().copied()
        } else {
            sked
        };
        return (None, sked, pay, credit);
    }

    let block = get(0);
    let sked = get(1);
    let pay = get(2).or(sked);
    let credit = get(3).or(pay);
    (block, sked, pay, credit)
}

fn is_reserve_duty(duty: &str) -> bool {
    let duty = duty.to_ascii_uppercase();
    duty.starts_with("RES") || duty.starts_with("RSV") || duty == "SCC"
}

/// Extracts a labeled `H:MM` value, trying each label variant in order.
///
/// Labels in real pastes vary in spacing and punctuation (`G/SLIP PAY`,
/// `G - SLIP PAY`, `G SLIP PAY`), so each variant is compiled into a
/// whitespace-flexible, case-insensitive pattern followed by `: H:MM`.
/// Returns zero when no variant matches, matching how the report prints
/// absent components.
pub fn labeled_time(text: &str, variants: &[&str]) -> i64 {
    let normalized = normalize_nbsp(text);

    for variant in variants {
        let words: Vec<String> = variant.split_whitespace().map(regex::escape).collect();
        let pattern = format!(r"(?i){}\s*:\s*(\d{{1,3}}:[0-5]\d)", words.join(r"\s+"));

        // The pattern is built from escaped words, so compilation cannot
        // fail for any label variant.
        let Ok(regex) = Regex::new(&pattern) else {
            continue;
        };
        if let Some(captures) = regex.captures(&normalized) {
            return parse_hhmm(&captures[1]).unwrap_or(0);
        }
    }

    trace!(variants = ?variants, "no labeled time found");
    0
}

/// Extracts the total credit figure from a report.
///
/// Three sources are tried in order of reliability:
/// 1. The `CREDIT APPLICABLE TO REG G/SLIP PAY:` line.
/// 2. Any `TTL ... CREDIT:` label.
/// 3. The last `= H:MM` term on a `SUB TTL CREDIT` or guarantee
///    equation line.
///
/// Returns zero when none is present.
pub fn total_credit(text: &str) -> i64 {
    let normalized = normalize_nbsp(text);

    if let Some(captures) = PREFERRED_CREDIT_RE.captures(&normalized) {
        return parse_hhmm(&captures[1]).unwrap_or(0);
    }

    if let Some(captures) = ALTERNATE_CREDIT_RE.captures(&normalized) {
        return parse_hhmm(&captures[1]).unwrap_or(0);
    }

    for line in normalized.lines() {
        if SUB_TTL_CREDIT_RE.is_match(line) || GUAR_RE.is_match(line) {
            if let Some(captures) = EQUATION_TERM_RE.captures_iter(line).last() {
                return parse_hhmm(&captures[1]).unwrap_or(0);
            }
        }
    }

    0
}

/// Scans the daily reserve rows of a report for extras and pay-only time.
///
/// Rows are segmented robustly whether the report kept its line breaks or
/// was pasted as one long line: each segment runs from a `DDMMM RES <code>`
/// header to the next header or to a section terminator. Within a segment,
/// rows whose code is in the configured extras set contribute their last
/// time token as pay time, and rows carrying at least
/// `pay_only_min_times` time tokens contribute their last token as
/// pay-only time.
pub fn daily_extras(text: &str, config: &ReportConfig) -> DailyExtras {
    let normalized = normalize_nbsp(text);
    let headers: Vec<Match<'_>> = EXTRAS_HEADER_RE.find_iter(&normalized).collect();
    let terminators: Vec<usize> = EXTRAS_TERMINATOR_RE
        .find_iter(&normalized)
        .map(|m| m.start())
        .collect();

    let mut extras = DailyExtras::default();

    for (index, header) in headers.iter().enumerate() {
        let next_header = headers
            .get(index + 1)
            .map_or(normalized.len(), Match::start);
        let terminator = terminators
            .iter()
            .copied()
            .find(|&position| position >= header.end())
            .unwrap_or(normalized.len());
        let segment_end = next_header.min(terminator);

        let code = header
            .as_str()
            .split_whitespace()
            .nth(2)
            .unwrap_or_default()
            .to_ascii_uppercase();

        let row = format!("{} {}", header.as_str(), &normalized[header.end()..segment_end]);
        let row_times: Vec<i64> = ROW_TIME_RE
            .find_iter(&row)
            .filter_map(|m| parse_hhmm(m.as_str()))
            .collect();

        let Some(&last_time) = row_times.last() else {
            continue;
        };

        if row_times.len() >= config.pay_only_min_times {
            extras.pay_only += last_time;
        }
        if config.pay_extra_codes.iter().any(|c| c == &code) {
            extras.pay_time += last_time;
        }
    }

    extras
}
