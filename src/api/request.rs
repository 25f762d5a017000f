//! Request types for the leave engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/leave-summary` endpoint.
///
/// These are the fields the conversation extractor produces for a leave
/// request, plus the employee it is filed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSummaryRequest {
    /// Employee ID or full name.
    pub employee: String,
    /// Leave type code (e.g. "annual_leave" or "annual").
    pub leave_type: String,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Reason for the leave.
    #[serde(default)]
    pub reason: String,
    /// Submission date; defaults to today.
    #[serde(default)]
    pub submitted_on: Option<NaiveDate>,
}

/// Request body for the `/salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Leave type code.
    pub leave_type: String,
    /// Days of leave; zero is rejected.
    pub days: u32,
    /// Daily salary; taken from the roster when omitted.
    #[serde(default)]
    pub daily_salary: Option<Decimal>,
    /// Employee ID, used when `daily_salary` is omitted.
    #[serde(default)]
    pub employee_id: Option<String>,
}
