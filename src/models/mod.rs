//! Data models for the timecard engine.

mod pay_result;
mod report;
mod time_entry;

pub use pay_result::{LineDiagnostic, PayResult};
pub use report::{BreakdownComponent, DutyDay, PayBreakdown};
pub use time_entry::{PunchDate, TimeEntry};
