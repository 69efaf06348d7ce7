//! Pay aggregation logic.
//!
//! This module turns parsed input into totals: [`compute`] is the
//! punch-line entry point required by the engine contract,
//! [`duty_day_total`] sums structured report rows, and
//! [`breakdown`] produces the labeled component breakdown for a full
//! Monthly Time Data paste.

mod breakdown;

pub use breakdown::breakdown;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::ComputeConfig;
use crate::models::{DutyDay, LineDiagnostic, PayResult};
use crate::parser::{ParsedLine, format_hhmm, parse_lines};

/// Computes total pay hours from raw pasted punch lines.
///
/// Each non-blank line is parsed into a time entry; entries convert to
/// durations (clock-out minus clock-in, minus break, floored at zero,
/// wrapping overnight spans when configured) and the durations sum into
/// a total rounded to the configured precision.
///
/// This function never fails: lines that do not parse, and entries whose
/// clock-out precedes clock-in while overnight shifts are disabled, are
/// collected into [`PayResult::errors`] in input order and excluded from
/// the total. An empty or fully-malformed input yields a zero total with
/// every non-blank line diagnosed. The computation is pure, so repeated
/// calls on the same input return identical results.
///
/// # Example
///
/// ```
/// use timecard_engine::{compute, ComputeConfig};
///
/// let result = compute("01/05 09:00-17:30\ngarbage", &ComputeConfig::default());
/// assert_eq!(result.total_hours.to_string(), "8.50");
/// assert_eq!(result.entry_count, 1);
/// assert_eq!(result.errors.len(), 1);
/// ```
pub fn compute(raw_text: &str, config: &ComputeConfig) -> PayResult {
    let mut total_minutes: i64 = 0;
    let mut entry_count = 0;
    let mut errors = Vec::new();

    for line in parse_lines(raw_text) {
        match line {
            ParsedLine::Entry {
                line_number,
                text,
                entry,
            } => match entry.worked_minutes(config.overnight_allowed) {
                Some(minutes) => {
                    total_minutes += minutes;
                    entry_count += 1;
                }
                None => errors.push(LineDiagnostic {
                    line_number,
                    text,
                    reason: "clock-out precedes clock-in and overnight shifts are disabled"
                        .to_string(),
                }),
            },
            ParsedLine::Invalid(diagnostic) => errors.push(diagnostic),
        }
    }

    debug!(
        entries = entry_count,
        errors = errors.len(),
        total_minutes,
        "computed pay total"
    );

    PayResult {
        total_hours: hours_from_minutes(total_minutes, config.rounding_precision),
        total_hhmm: format_hhmm(total_minutes),
        entry_count,
        errors,
    }
}

/// Sums the effective credit of structured report rows, in minutes.
///
/// Credit is preferred per row, falling back to pay when credit is blank.
pub fn duty_day_total(days: &[DutyDay]) -> i64 {
    days.iter().map(DutyDay::effective_credit).sum()
}

/// Converts minutes to decimal hours rounded to `precision` places,
/// half away from zero.
pub(crate) fn hours_from_minutes(minutes: i64, precision: u32) -> Decimal {
    let mut hours = (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so 510 minutes renders as "8.50" rather than "8.5".
    hours.rescale(precision);
    hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DutyDay;

    fn dec(s: &str) -> Decimal {
        use std::str::FromStr;
        Decimal::from_str(s).unwrap()
    }

    /// CP-001: the canonical example input
    #[test]
    fn test_single_valid_line() {
        let result = compute("01/05 09:00-17:30", &ComputeConfig::default());
        assert_eq!(result.total_hours, dec("8.50"));
        assert_eq!(result.total_hhmm, "8:30");
        assert_eq!(result.entry_count, 1);
        assert!(result.errors.is_empty());
    }

    /// CP-002: garbage lines never reduce the valid total
    #[test]
    fn test_valid_and_garbage_lines() {
        let result = compute(
            "01/05 09:00-17:30\nutter nonsense",
            &ComputeConfig::default(),
        );
        assert_eq!(result.total_hours, dec("8.50"));
        assert_eq!(result.entry_count, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].text, "utter nonsense");
    }

    /// CP-003: empty input yields a zero result
    #[test]
    fn test_empty_input() {
        let result = compute("", &ComputeConfig::default());
        assert_eq!(result.total_hours, dec("0.00"));
        assert_eq!(result.total_hhmm, "0:00");
        assert_eq!(result.entry_count, 0);
        assert!(result.errors.is_empty());
    }

    /// CP-004: fully-malformed input diagnoses every non-blank line
    #[test]
    fn test_fully_malformed_input() {
        let result = compute("first\n\nsecond", &ComputeConfig::default());
        assert_eq!(result.total_hours, dec("0.00"));
        assert_eq!(result.entry_count, 0);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].line_number, 1);
        assert_eq!(result.errors[1].line_number, 3);
    }

    /// CP-005: break minutes subtract from the total
    #[test]
    fn test_break_minutes_subtracted() {
        let result = compute("01/05 09:00-17:30 break 30", &ComputeConfig::default());
        assert_eq!(result.total_hours, dec("8.00"));
    }

    /// CP-006: overnight wrap adds 24 hours when allowed
    #[test]
    fn test_overnight_allowed() {
        let result = compute("01/05 22:00-06:00", &ComputeConfig::default());
        assert_eq!(result.total_hours, dec("8.00"));
        assert_eq!(result.entry_count, 1);
    }

    /// CP-007: overnight wrap diagnosed when disallowed
    #[test]
    fn test_overnight_disallowed() {
        let config = ComputeConfig {
            overnight_allowed: false,
            ..ComputeConfig::default()
        };
        let result = compute("01/05 22:00-06:00", &config);
        assert_eq!(result.total_hours, dec("0.00"));
        assert_eq!(result.entry_count, 0);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].reason.contains("overnight"));
    }

    /// CP-008: totals round to the configured precision
    #[test]
    fn test_rounding_precision() {
        // 7 hours 50 minutes = 7.8333... hours
        let config = ComputeConfig {
            rounding_precision: 1,
            ..ComputeConfig::default()
        };
        let result = compute("01/05 09:00-16:50", &config);
        assert_eq!(result.total_hours, dec("7.8"));

        let config = ComputeConfig {
            rounding_precision: 4,
            ..ComputeConfig::default()
        };
        let result = compute("01/05 09:00-16:50", &config);
        assert_eq!(result.total_hours, dec("7.8333"));
    }

    /// CP-009: multiple entries sum before rounding
    #[test]
    fn test_multiple_entries_sum() {
        let result = compute(
            "01/05 09:00-17:30\n01/06 08:00-12:15\n01/07 13:00-13:00",
            &ComputeConfig::default(),
        );
        // 510 + 255 + 0 minutes = 12.75 hours
        assert_eq!(result.total_hours, dec("12.75"));
        assert_eq!(result.entry_count, 3);
    }

    /// CP-010: recomputation is idempotent
    #[test]
    fn test_idempotent() {
        let input = "01/05 09:00-17:30\ngarbage\n01/06 22:00-06:00";
        let config = ComputeConfig::default();
        let first = compute(input, &config);
        let second = compute(input, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duty_day_total_prefers_credit() {
        let days = vec![
            DutyDay {
                date: "05OCT".to_string(),
                duty: "REG".to_string(),
                pairing: "3324".to_string(),
                block: Some(530),
                sked: Some(630),
                pay: Some(630),
                credit: Some(630),
            },
            DutyDay {
                date: "06OCT".to_string(),
                duty: "RES".to_string(),
                pairing: "SCC".to_string(),
                block: None,
                sked: Some(60),
                pay: Some(60),
                credit: None,
            },
        ];
        assert_eq!(duty_day_total(&days), 690);
    }

    #[test]
    fn test_hours_from_minutes_midpoint_rounds_away() {
        // 51 minutes is 0.85 hours exactly, a midpoint at 1 decimal place.
        assert_eq!(hours_from_minutes(51, 1), dec("0.9"));
        assert_eq!(hours_from_minutes(0, 2), dec("0.00"));
    }

    #[test]
    fn test_hours_keep_configured_scale() {
        assert_eq!(hours_from_minutes(510, 2).to_string(), "8.50");
        assert_eq!(hours_from_minutes(0, 2).to_string(), "0.00");
    }
}
