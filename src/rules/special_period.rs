//! Department-specific special period detection.
//!
//! A calendar heuristic on the first day of leave: finance month-end close
//! (day 25 onward), technology quarter-end sprints (March, June, September,
//! December) and sales key-account months (January, April, July, October).
//! Matches are advisory and never block a request.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{AuditStep, Department, Employee};

use super::RuleOutcome;

/// First day of the month treated as month-end close for Finance.
pub const FINANCE_MONTH_END_START_DAY: u32 = 25;

/// Months in which Technology runs quarter-end sprints.
pub const TECHNOLOGY_SPRINT_MONTHS: [u32; 4] = [3, 6, 9, 12];

/// Months Sales reserves for key-account maintenance.
pub const SALES_KEY_ACCOUNT_MONTHS: [u32; 4] = [1, 4, 7, 10];

/// A recognised special period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialPeriod {
    /// Technology quarter-end sprint.
    TechnologySprint,
    /// Sales key-account period.
    SalesKeyAccount,
    /// Finance month-end close.
    FinanceMonthEnd,
}

impl SpecialPeriod {
    /// Returns the advisory shown to the employee.
    pub fn warning(&self) -> &'static str {
        match self {
            SpecialPeriod::TechnologySprint => {
                "Leave may overlap the quarterly technology sprint"
            }
            SpecialPeriod::SalesKeyAccount => {
                "Leave falls in the sales key-account period; consider rescheduling"
            }
            SpecialPeriod::FinanceMonthEnd => {
                "Leave includes the month-end financial close and may affect scheduling"
            }
        }
    }
}

/// The result of checking a leave period for special-period conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialPeriodCheck {
    /// True when any special period matched.
    pub has_conflict: bool,
    /// The matched periods.
    pub periods: Vec<SpecialPeriod>,
    /// One advisory per matched period.
    pub warnings: Vec<String>,
}

/// Finds the special periods a leave period conflicts with.
///
/// Only the start date is evaluated.
///
/// # Examples
///
/// ```
/// use leave_engine::models::{Department, Employee};
/// use leave_engine::rules::check_special_periods;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "FIN20200".to_string(),
///     name: "Qian Jin".to_string(),
///     department: Department::Finance,
///     position: "Accountant".to_string(),
///     supervisor: "Qian (Finance Manager)".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap(),
/// };
/// let start = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 28).unwrap();
/// assert!(check_special_periods(&employee, start, end).has_conflict);
/// ```
pub fn check_special_periods(
    employee: &Employee,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> SpecialPeriodCheck {
    let month = start_date.month();
    let day = start_date.day();

    let period = match employee.department {
        Department::Finance if day >= FINANCE_MONTH_END_START_DAY => {
            Some(SpecialPeriod::FinanceMonthEnd)
        }
        Department::Technology if TECHNOLOGY_SPRINT_MONTHS.contains(&month) => {
            Some(SpecialPeriod::TechnologySprint)
        }
        Department::Sales if SALES_KEY_ACCOUNT_MONTHS.contains(&month) => {
            Some(SpecialPeriod::SalesKeyAccount)
        }
        _ => None,
    };

    if let Some(period) = period {
        tracing::debug!(
            employee_id = %employee.id,
            ?period,
            %start_date,
            %end_date,
            "Leave overlaps a special period"
        );
    }

    let periods: Vec<SpecialPeriod> = period.into_iter().collect();
    SpecialPeriodCheck {
        has_conflict: !periods.is_empty(),
        warnings: periods.iter().map(|p| p.warning().to_string()).collect(),
        periods,
    }
}

/// Runs the special-period check as a validation rule.
pub(crate) fn special_period_rule(
    employee: &Employee,
    start_date: NaiveDate,
    end_date: NaiveDate,
    step_number: u32,
) -> RuleOutcome {
    let check = check_special_periods(employee, start_date, end_date);
    let reasoning = if check.has_conflict {
        format!(
            "{} leave starting {} overlaps {} special period(s)",
            employee.department,
            start_date,
            check.periods.len()
        )
    } else {
        format!(
            "No {} special period on {}",
            employee.department, start_date
        )
    };

    RuleOutcome {
        errors: Vec::new(),
        audit_step: AuditStep::new(
            step_number,
            "special_period",
            "Special Period",
            serde_json::json!({
                "department": employee.department.name(),
                "start_date": start_date,
                "end_date": end_date
            }),
            serde_json::json!({
                "has_conflict": check.has_conflict,
                "periods": check.periods
            }),
            reasoning,
        ),
        warnings: check.warnings,
    }
}
