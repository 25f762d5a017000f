//! Engine outputs: validation results, handover plans, pay breakdowns and
//! the composed leave summary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApprovalProcess, AuditStep, LeaveRequest, LeaveTypePolicy};

/// The outcome of validating a leave request.
///
/// Errors block approval; warnings are advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub valid: bool,
    /// Policy violations.
    pub errors: Vec<String>,
    /// Advisory notes (special periods, handover, retroactive filing).
    pub warnings: Vec<String>,
    /// One audit step per rule evaluated.
    #[serde(default)]
    pub checks: Vec<AuditStep>,
}

/// Hand-off actions required before an absence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandoverRequirements {
    /// True for absences of two days or more.
    pub required: bool,
    /// The actions, generic items first.
    pub requirements: Vec<String>,
}

/// Whether a summarised request can go to its approvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    /// No validation errors.
    ReadyForApproval,
    /// At least one validation error must be fixed first.
    RequiresRevision,
}

/// One itemized line of a leave pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryLine {
    /// Human-readable description, e.g. "First 5 days at full pay".
    pub description: String,
    /// Days covered by this line.
    pub days: u32,
    /// Fraction of the daily salary paid for these days.
    pub rate: Decimal,
    /// Amount paid, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// The pay owed for a period of leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Total pay, rounded to 2 decimal places.
    pub total_salary: Decimal,
    /// The daily salary the calculation used.
    pub daily_salary: Decimal,
    /// Days of leave.
    pub days: u32,
    /// The policy pay rate for the leave type.
    pub pay_rate: Decimal,
    /// Itemized lines.
    pub details: Vec<SalaryLine>,
}

/// The complete evaluation of a leave request, ready to persist and render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveSummary {
    /// Unique identifier for this summary.
    pub summary_id: Uuid,
    /// The request that was evaluated.
    #[serde(flatten)]
    pub request: LeaveRequest,
    /// Validation outcome.
    pub validation: ValidationResult,
    /// Approval chain.
    pub approval_process: ApprovalProcess,
    /// Handover plan.
    pub handover_requirements: HandoverRequirements,
    /// The resolved policy; absent for an unknown leave type.
    pub config: Option<LeaveTypePolicy>,
    /// Approval readiness.
    pub status: SummaryStatus,
    /// When the summary was produced.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced it.
    pub engine_version: String,
}
