//! Leave balance lookup and sufficiency checks.
//!
//! The engine never owns balances. A [`BalanceProvider`] hands out a
//! read-only snapshot per call; decrementing quotas after approval is the
//! persistence layer's job.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveType;

/// Annual sick leave allowance in days.
pub const SICK_LEAVE_ALLOWANCE: u32 = 30;

/// Annual personal leave allowance in days.
pub const PERSONAL_LEAVE_ALLOWANCE: u32 = 10;

/// A snapshot of an employee's remaining leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Annual leave days remaining.
    pub remaining_annual: u32,
    /// Sick leave days still available this year.
    pub available_sick: u32,
    /// Personal leave days still available this year.
    pub available_personal: u32,
}

impl LeaveBalance {
    /// Builds a balance from recorded usage against the yearly allowances.
    ///
    /// `remaining_annual` is taken as recorded; sick and personal leave are
    /// derived from the days already used.
    pub fn from_usage(remaining_annual: u32, used_sick: u32, used_personal: u32) -> Self {
        Self {
            remaining_annual,
            available_sick: SICK_LEAVE_ALLOWANCE.saturating_sub(used_sick),
            available_personal: PERSONAL_LEAVE_ALLOWANCE.saturating_sub(used_personal),
        }
    }
}

/// Returns true for leave types limited by a yearly balance.
pub fn draws_on_balance(leave_type: LeaveType) -> bool {
    matches!(
        leave_type,
        LeaveType::AnnualLeave | LeaveType::SickLeave | LeaveType::PersonalLeave
    )
}

/// Supplies leave balances to the engine.
pub trait BalanceProvider {
    /// Returns the current balance for an employee.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` when no balance is on record.
    fn leave_balance(&self, employee_id: &str) -> EngineResult<LeaveBalance>;
}

impl BalanceProvider for HashMap<String, LeaveBalance> {
    fn leave_balance(&self, employee_id: &str) -> EngineResult<LeaveBalance> {
        self.get(employee_id)
            .copied()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                identifier: employee_id.to_string(),
            })
    }
}

impl<P: BalanceProvider + ?Sized> BalanceProvider for &P {
    fn leave_balance(&self, employee_id: &str) -> EngineResult<LeaveBalance> {
        (**self).leave_balance(employee_id)
    }
}

impl<P: BalanceProvider + ?Sized> BalanceProvider for Arc<P> {
    fn leave_balance(&self, employee_id: &str) -> EngineResult<LeaveBalance> {
        (**self).leave_balance(employee_id)
    }
}

/// The outcome of checking a balance against a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceCheck {
    /// Whether the balance covers the requested days.
    pub valid: bool,
    /// Days remaining for the leave type; `None` when the type is not
    /// governed by a yearly balance.
    pub remaining: Option<u32>,
    /// Explanation suitable for an error message.
    pub message: String,
}

/// Checks whether a balance covers `days` of the given leave type.
///
/// Annual, sick and personal leave draw on the balance; every other type
/// is unlimited.
///
/// # Examples
///
/// ```
/// use leave_engine::models::LeaveType;
/// use leave_engine::rules::{LeaveBalance, check_balance};
///
/// let balance = LeaveBalance::from_usage(8, 2, 1);
/// assert!(check_balance(&balance, LeaveType::AnnualLeave, 8).valid);
/// assert!(!check_balance(&balance, LeaveType::PersonalLeave, 10).valid);
/// assert!(check_balance(&balance, LeaveType::MarriageLeave, 5).valid);
/// ```
pub fn check_balance(balance: &LeaveBalance, leave_type: LeaveType, days: u32) -> BalanceCheck {
    let remaining = match leave_type {
        LeaveType::AnnualLeave => balance.remaining_annual,
        LeaveType::SickLeave => balance.available_sick,
        LeaveType::PersonalLeave => balance.available_personal,
        _ => {
            return BalanceCheck {
                valid: true,
                remaining: None,
                message: format!("{} is not limited by a yearly balance", leave_type),
            };
        }
    };

    let valid = remaining >= days;
    let message = if valid {
        format!("{} balance sufficient: {} days remaining", leave_type, remaining)
    } else {
        format!(
            "Insufficient {} balance: {} days remaining, {} requested",
            leave_type.label().to_lowercase(),
            remaining,
            days
        )
    };

    BalanceCheck {
        valid,
        remaining: Some(remaining),
        message,
    }
}
