//! Models for full Monthly Time Data report parsing.
//!
//! A pasted report carries more than punch pairs: daily duty rows with
//! block/sked/pay/credit columns, labeled pay components, and sub-total
//! lines. These types hold the structured form of that data. All times are
//! in minutes; formatting back to `H:MM` happens at the display boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily row of a Monthly Time Data report.
///
/// Example source lines:
///
/// ```text
/// 05OCT  REG 3324   8:50  10:30 10:30 10:30
/// 06OCT  RES SCC          1:00  1:00
/// ```
///
/// Reserve-style rows generally carry no block time, so every time column
/// is optional. Missing pay falls back to sked and missing credit falls
/// back to pay during normalization, mirroring how the report omits
/// columns whose value repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyDay {
    /// The date token as printed, e.g. `05OCT`.
    pub date: String,
    /// The duty designator, e.g. `REG` or `RES`.
    pub duty: String,
    /// The pairing or code column, e.g. `3324` or `SCC`.
    pub pairing: String,
    /// Block minutes, if the row carried a block column.
    pub block: Option<i64>,
    /// Scheduled minutes.
    pub sked: Option<i64>,
    /// Pay minutes.
    pub pay: Option<i64>,
    /// Credit minutes.
    pub credit: Option<i64>,
}

impl DutyDay {
    /// Returns the minutes that count toward the monthly total for this row.
    ///
    /// Credit is preferred; pay is the fallback when credit is blank.
    pub fn effective_credit(&self) -> i64 {
        self.credit.or(self.pay).unwrap_or(0)
    }
}

/// One labeled component of a pay breakdown, e.g. `REROUTE PAY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownComponent {
    /// The component label as shown to the user.
    pub label: String,
    /// The component value in minutes.
    pub minutes: i64,
}

/// A full pay breakdown over a Monthly Time Data report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The individual components, in report order, with a trailing total row.
    pub components: Vec<BreakdownComponent>,
    /// The grand total in minutes.
    pub total_minutes: i64,
    /// The grand total in `H:MM` form.
    pub total_hhmm: String,
    /// The grand total as decimal hours, rounded to two places.
    pub total_hours: Decimal,
}
