//! Advance notice rules.
//!
//! Each leave type requires a minimum number of days between submission
//! and the first day of leave. Technology staff must give at least five
//! days for annual leave.

use crate::models::{AuditStep, Department, Employee, LeaveType, LeaveTypePolicy};

use super::RuleOutcome;

/// Minimum annual leave notice for the Technology department.
pub const TECHNOLOGY_ANNUAL_NOTICE_DAYS: u32 = 5;

/// Returns the notice an employee must give for a leave type.
///
/// # Examples
///
/// ```
/// use leave_engine::models::{Department, Employee, LeaveType};
/// use leave_engine::rules::{LeaveTypeCatalog, effective_advance_notice};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "TEC20230".to_string(),
///     name: "Wang Qiang".to_string(),
///     department: Department::Technology,
///     position: "Engineer".to_string(),
///     supervisor: "Li (Technology Director)".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
/// };
/// let policy = LeaveTypeCatalog::new().policy(LeaveType::AnnualLeave);
/// assert_eq!(effective_advance_notice(&employee, policy), 5);
/// ```
pub fn effective_advance_notice(employee: &Employee, policy: &LeaveTypePolicy) -> u32 {
    let base = policy.advance_notice_days_required;
    if employee.department == Department::Technology && policy.leave_type == LeaveType::AnnualLeave
    {
        base.max(TECHNOLOGY_ANNUAL_NOTICE_DAYS)
    } else {
        base
    }
}

/// Checks the notice given against the notice required.
///
/// Short notice is an error, except for sick and bereavement leave which
/// may be filed retroactively and only draw a warning.
pub fn check_advance_notice(
    employee: &Employee,
    policy: &LeaveTypePolicy,
    advance_notice_days: i64,
    step_number: u32,
) -> RuleOutcome {
    let required = effective_advance_notice(employee, policy);
    let leave_type = policy.leave_type;
    let mut outcome = RuleOutcome::default();

    let reasoning = if advance_notice_days >= i64::from(required) {
        format!(
            "{} days notice given; {} required",
            advance_notice_days, required
        )
    } else if leave_type.allows_retroactive_filing() {
        outcome
            .warnings
            .push(format!("{} may be filed retroactively", leave_type));
        format!(
            "{} days notice given; {} required, but {} may be filed after the fact",
            advance_notice_days,
            required,
            leave_type.label().to_lowercase()
        )
    } else {
        outcome.errors.push(format!(
            "{} requires {} days advance notice; only {} given",
            leave_type, required, advance_notice_days
        ));
        format!(
            "{} days notice given; {} required",
            advance_notice_days, required
        )
    };

    outcome.audit_step = AuditStep::new(
        step_number,
        "advance_notice",
        "Advance Notice",
        serde_json::json!({
            "leave_type": leave_type.code(),
            "department": employee.department.name(),
            "advance_notice_days": advance_notice_days
        }),
        serde_json::json!({
            "required_days": required,
            "errors": outcome.errors,
            "warnings": outcome.warnings
        }),
        reasoning,
    );

    outcome
}
