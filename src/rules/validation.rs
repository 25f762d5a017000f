//! Leave request validation.
//!
//! Runs every rule against a request and collects all findings together.
//! The only early return is an unknown leave type, which yields a single
//! error and nothing else.

use tracing::warn;

use crate::models::{AuditStep, LeaveRequest, LeaveTypePolicy, ValidationResult};

use super::balance::{BalanceProvider, LeaveBalance, check_balance, draws_on_balance};
use super::handover::handover_rule;
use super::notice::check_advance_notice;
use super::special_period::special_period_rule;
use super::LeaveTypeCatalog;

/// The findings of one validation rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Policy violations that block approval.
    pub errors: Vec<String>,
    /// Advisory notes.
    pub warnings: Vec<String>,
    /// The audit record of the evaluation.
    pub audit_step: AuditStep,
}

/// Checks the requested days against the leave type's yearly cap.
pub fn check_day_cap(policy: &LeaveTypePolicy, days: u32, step_number: u32) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    let reasoning = match policy.max_days_per_year {
        Some(max_days) if days > max_days => {
            outcome.errors.push(format!(
                "{} annual cap is {} days; requested {} exceeds it",
                policy.leave_type, max_days, days
            ));
            format!("{} days > cap of {}", days, max_days)
        }
        Some(max_days) => format!("{} days <= cap of {}", days, max_days),
        None => format!("{} has no yearly cap", policy.leave_type),
    };

    outcome.audit_step = AuditStep::new(
        step_number,
        "day_cap",
        "Yearly Day Cap",
        serde_json::json!({
            "leave_type": policy.leave_type.code(),
            "days": days
        }),
        serde_json::json!({
            "max_days_per_year": policy.max_days_per_year,
            "exceeded": !outcome.errors.is_empty()
        }),
        reasoning,
    );

    outcome
}

/// Checks the employee's balance through the provider.
///
/// Leave types that do not draw on a yearly balance never query the
/// provider. A provider failure is reported as an error.
pub fn check_leave_balance<P: BalanceProvider + ?Sized>(
    request: &LeaveRequest,
    policy: &LeaveTypePolicy,
    provider: &P,
    step_number: u32,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let leave_type = policy.leave_type;

    let balance = if draws_on_balance(leave_type) {
        provider.leave_balance(&request.employee.id)
    } else {
        Ok(LeaveBalance::default())
    };

    let (output, reasoning) = match balance {
        Ok(balance) => {
            let check = check_balance(&balance, leave_type, request.days);
            if !check.valid {
                outcome.errors.push(check.message.clone());
            }
            (
                serde_json::json!({
                    "sufficient": check.valid,
                    "remaining": check.remaining
                }),
                check.message,
            )
        }
        Err(err) => {
            warn!(employee_id = %request.employee.id, error = %err, "Leave balance unavailable");
            let message = format!("No leave balance on record: {}", err);
            outcome.errors.push(message.clone());
            (
                serde_json::json!({
                    "sufficient": false,
                    "remaining": null
                }),
                message,
            )
        }
    };

    outcome.audit_step = AuditStep::new(
        step_number,
        "leave_balance",
        "Leave Balance",
        serde_json::json!({
            "employee_id": request.employee.id,
            "leave_type": leave_type.code(),
            "days": request.days
        }),
        output,
        reasoning,
    );

    outcome
}

/// Validates a request against the catalog, the employee's balance and the
/// calendar heuristics.
///
/// All rules run and their findings are returned together; `valid` is true
/// when no rule produced an error.
pub fn validate<P: BalanceProvider + ?Sized>(
    catalog: &LeaveTypeCatalog,
    request: &LeaveRequest,
    provider: &P,
) -> ValidationResult {
    let policy = match catalog.lookup(&request.leave_type) {
        Ok(policy) => policy,
        Err(err) => {
            warn!(
                employee_id = %request.employee.id,
                leave_type = %request.leave_type,
                "Unknown leave type"
            );
            let audit_step = AuditStep::new(
                1,
                "leave_type_lookup",
                "Leave Type Lookup",
                serde_json::json!({ "leave_type": request.leave_type }),
                serde_json::json!({ "found": false }),
                format!("'{}' is not in the leave type catalog", request.leave_type),
            );
            return ValidationResult {
                valid: false,
                errors: vec![err.to_string()],
                warnings: Vec::new(),
                checks: vec![audit_step],
            };
        }
    };

    let lookup = RuleOutcome {
        audit_step: AuditStep::new(
            1,
            "leave_type_lookup",
            "Leave Type Lookup",
            serde_json::json!({ "leave_type": request.leave_type }),
            serde_json::json!({ "found": true, "resolved": policy.leave_type.code() }),
            format!("'{}' resolved to {}", request.leave_type, policy.leave_type),
        ),
        ..RuleOutcome::default()
    };

    let outcomes = [
        lookup,
        check_day_cap(policy, request.days, 2),
        check_advance_notice(&request.employee, policy, request.advance_notice_days, 3),
        check_leave_balance(request, policy, provider, 4),
        special_period_rule(&request.employee, request.start_date, request.end_date, 5),
        handover_rule(&request.employee, request.days, 6),
    ];

    let mut result = ValidationResult::default();
    for outcome in outcomes {
        result.errors.extend(outcome.errors);
        result.warnings.extend(outcome.warnings);
        result.checks.push(outcome.audit_step);
    }
    result.valid = result.errors.is_empty();

    result
}
