//! Leave type policy records.

use rust_decimal::Decimal;
use serde::Serialize;

use super::LeaveType;

/// The policy governing one leave type.
///
/// Policies are defined once at process start by
/// [`crate::rules::LeaveTypeCatalog`] and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveTypePolicy {
    /// The leave type this policy applies to.
    pub leave_type: LeaveType,
    /// Maximum days that may be requested per year; `None` when governed by
    /// tenure or expiry instead of a fixed cap.
    pub max_days_per_year: Option<u32>,
    /// Minimum days between submission and the first day of leave.
    pub advance_notice_days_required: u32,
    /// Whether supporting documents must be supplied.
    pub document_required: bool,
    /// Fraction of the daily salary paid, in `[0, 1]`.
    pub pay_rate: Decimal,
    /// Short description of the leave type.
    pub description: &'static str,
}

/// A policy together with the human-readable requirements and restrictions
/// shown to the employee before they file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveTypeDetails {
    /// The underlying policy.
    #[serde(flatten)]
    pub policy: LeaveTypePolicy,
    /// Things the employee must do (notice, documents).
    pub requirements: Vec<String>,
    /// Limits on the leave (caps, expiry).
    pub restrictions: Vec<String>,
}
