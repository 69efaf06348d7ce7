//! Aggregated result models for a computation call.
//!
//! This module contains [`PayResult`], the output of
//! [`compute`](crate::compute::compute), and [`LineDiagnostic`], the
//! per-line failure record it carries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single input line that failed to parse or validate.
///
/// Diagnostics preserve the original pasted text so the caller can show
/// the user exactly which lines were excluded from the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiagnostic {
    /// 1-based position among the non-blank lines of the input.
    pub line_number: usize,
    /// The offending line, trimmed but otherwise verbatim.
    pub text: String,
    /// A human-readable description of what went wrong.
    pub reason: String,
}

/// The aggregated output of one computation call.
///
/// Aggregation always succeeds: malformed lines reduce nothing, they are
/// simply reported in `errors`. An entirely empty or fully-malformed input
/// yields a zero total with every non-blank line diagnosed.
///
/// # Example
///
/// ```
/// use timecard_engine::{compute, ComputeConfig};
///
/// let result = compute("01/05 09:00-17:30", &ComputeConfig::default());
/// assert_eq!(result.total_hours.to_string(), "8.50");
/// assert_eq!(result.total_hhmm, "8:30");
/// assert_eq!(result.entry_count, 1);
/// assert!(result.errors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// Total pay hours as a decimal, rounded to the configured precision.
    pub total_hours: Decimal,
    /// Total pay time in `H:MM` form.
    pub total_hhmm: String,
    /// Number of lines that parsed and validated as time entries.
    pub entry_count: usize,
    /// Lines that failed to parse or validate, in input order.
    pub errors: Vec<LineDiagnostic>,
}
