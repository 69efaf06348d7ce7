//! Time entry model and related types.
//!
//! This module defines the [`TimeEntry`] struct representing one parsed
//! clock-in/clock-out record from a pasted timecard, and the [`PunchDate`]
//! calendar token it is keyed on.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Minutes in a day, used to wrap overnight spans.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A month/day date token as it appears on a punch line (e.g. `01/05`).
///
/// Punch lines carry no year, so this is deliberately not a full calendar
/// date; it exists to key entries back to the pasted line and to validate
/// that the token names a real day of a real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PunchDate {
    /// Month number, 1 through 12.
    pub month: u32,
    /// Day of month, 1 through 31 (validated against the month at parse time).
    pub day: u32,
}

impl fmt::Display for PunchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

/// Represents one parsed clock-in/clock-out record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The date of the punch.
    pub date: PunchDate,
    /// The clock-in time.
    pub clock_in: NaiveTime,
    /// The clock-out time.
    pub clock_out: NaiveTime,
    /// Unpaid break minutes, if the line carried a break field.
    #[serde(default)]
    pub break_minutes: Option<u32>,
}

impl TimeEntry {
    /// Calculates the paid duration of this entry in minutes.
    ///
    /// The duration is clock-out minus clock-in, minus any break minutes,
    /// floored at zero. When clock-out precedes clock-in the shift is
    /// treated as spanning midnight and 24 hours are added, but only if
    /// `overnight_allowed` is set; otherwise the entry is invalid and
    /// `None` is returned so the caller can report it as a diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::{PunchDate, TimeEntry};
    /// use chrono::NaiveTime;
    ///
    /// let entry = TimeEntry {
    ///     date: PunchDate { month: 1, day: 5 },
    ///     clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     clock_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    ///     break_minutes: None,
    /// };
    /// assert_eq!(entry.worked_minutes(true), Some(510)); // 8.5 hours
    /// ```
    pub fn worked_minutes(&self, overnight_allowed: bool) -> Option<i64> {
        let mut minutes = (self.clock_out - self.clock_in).num_minutes();

        // A clock-out before clock-in is an overnight span when permitted.
        if minutes < 0 {
            if !overnight_allowed {
                return None;
            }
            minutes += MINUTES_PER_DAY;
        }

        let break_minutes = i64::from(self.break_minutes.unwrap_or(0));
        Some((minutes - break_minutes).max(0))
    }
}
