//! Parsing logic for pasted timecard text.
//!
//! This module contains the line parser that turns raw pasted text into
//! structured time entries, the `H:MM` token plumbing shared by every
//! parser, and the Monthly Time Data report parser for full-report pastes
//! with duty rows, labeled pay components, and sub-total lines.

mod clock;
mod punch;
mod report;

pub use clock::{format_hhmm, normalize_nbsp, parse_hhmm};
pub use punch::{ParsedLine, parse_lines};
pub use report::{DailyExtras, daily_extras, labeled_time, parse_duty_days, total_credit};
