//! Leave policy rules.
//!
//! This module contains the leave type catalog, the validation rules
//! (yearly caps, advance notice, balances, special periods, handover), the
//! approval chain derivation, leave pay calculation, and the
//! [`RulesEngine`] that composes them into a leave summary.

mod approval;
mod balance;
mod catalog;
mod engine;
mod handover;
mod notice;
mod salary;
mod special_period;
mod validation;

pub use approval::{
    CEO_NAME, HR_MANAGER_NAME, determine_approval_process, director_title_for, special_approvers,
};
pub use balance::{
    BalanceCheck, BalanceProvider, LeaveBalance, PERSONAL_LEAVE_ALLOWANCE, SICK_LEAVE_ALLOWANCE,
    check_balance, draws_on_balance,
};
pub use catalog::LeaveTypeCatalog;
pub use engine::RulesEngine;
pub use handover::{HANDOVER_MIN_DAYS, check_handover_requirements};
pub use notice::{TECHNOLOGY_ANNUAL_NOTICE_DAYS, check_advance_notice, effective_advance_notice};
pub use salary::{SICK_FULL_PAY_DAYS, calculate_salary, sick_reduced_pay_rate};
pub use special_period::{
    FINANCE_MONTH_END_START_DAY, SALES_KEY_ACCOUNT_MONTHS, SpecialPeriod, SpecialPeriodCheck,
    TECHNOLOGY_SPRINT_MONTHS, check_special_periods,
};
pub use validation::{RuleOutcome, check_day_cap, check_leave_balance, validate};
