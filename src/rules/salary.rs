//! Leave pay calculation.
//!
//! Sick leave is tiered: the first five days are paid in full and the rest
//! at 80%. Every other leave type pays `days * daily_salary * pay_rate`.
//! Amounts are rounded to 2 decimal places, midpoint away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveType, LeaveTypePolicy, SalaryBreakdown, SalaryLine};

/// Sick leave days paid at the full rate.
pub const SICK_FULL_PAY_DAYS: u32 = 5;

/// The rate paid for sick leave beyond [`SICK_FULL_PAY_DAYS`].
///
/// The rate is 0.80 (80% of the daily salary).
pub fn sick_reduced_pay_rate() -> Decimal {
    Decimal::new(80, 2)
}

fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(days: u32, daily_salary: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "leave pay overflows for {} days at {} per day",
            days, daily_salary
        ),
    }
}

/// `days * daily_salary * rate`, unrounded.
fn line_amount(days: u32, daily_salary: Decimal, rate: Decimal) -> EngineResult<Decimal> {
    Decimal::from(days)
        .checked_mul(daily_salary)
        .and_then(|amount| amount.checked_mul(rate))
        .ok_or_else(|| overflow(days, daily_salary))
}

fn pay_line(
    description: String,
    days: u32,
    daily_salary: Decimal,
    rate: Decimal,
) -> EngineResult<SalaryLine> {
    Ok(SalaryLine {
        description,
        days,
        rate,
        amount: round_currency(line_amount(days, daily_salary, rate)?),
    })
}

/// Calculates the pay owed for a period of leave.
///
/// # Arguments
///
/// * `policy` - The leave type's policy, which supplies the pay rate
/// * `days` - Days of leave; must be at least 1
/// * `daily_salary` - The employee's daily salary
///
/// # Errors
///
/// Returns `InvalidRequest` for zero days and `CalculationError` for a
/// negative daily salary or an amount too large to represent.
///
/// # Examples
///
/// ```
/// use leave_engine::models::LeaveType;
/// use leave_engine::rules::{LeaveTypeCatalog, calculate_salary};
/// use rust_decimal::Decimal;
///
/// let policy = LeaveTypeCatalog::new().policy(LeaveType::SickLeave);
/// let breakdown = calculate_salary(policy, 7, Decimal::new(100, 0)).unwrap();
/// assert_eq!(breakdown.total_salary, Decimal::new(66000, 2));
/// ```
pub fn calculate_salary(
    policy: &LeaveTypePolicy,
    days: u32,
    daily_salary: Decimal,
) -> EngineResult<SalaryBreakdown> {
    if days == 0 {
        return Err(EngineError::InvalidRequest {
            field: "days".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if daily_salary < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("daily salary cannot be negative: {}", daily_salary),
        });
    }

    let mut details = Vec::new();
    let total = if policy.leave_type == LeaveType::SickLeave {
        let full_pay_days = days.min(SICK_FULL_PAY_DAYS);
        let reduced_pay_days = days.saturating_sub(SICK_FULL_PAY_DAYS);

        let full = line_amount(full_pay_days, daily_salary, Decimal::ONE)?;
        let reduced = line_amount(reduced_pay_days, daily_salary, sick_reduced_pay_rate())?;

        details.push(pay_line(
            format!("First {} days at full pay", full_pay_days),
            full_pay_days,
            daily_salary,
            Decimal::ONE,
        )?);
        if reduced_pay_days > 0 {
            details.push(pay_line(
                format!("Remaining {} days at 80% pay", reduced_pay_days),
                reduced_pay_days,
                daily_salary,
                sick_reduced_pay_rate(),
            )?);
        }

        full.checked_add(reduced)
            .ok_or_else(|| overflow(days, daily_salary))?
    } else {
        let rate = policy.pay_rate;
        let description = if rate == Decimal::ONE {
            format!("{} days at full pay", days)
        } else if rate.is_zero() {
            format!("{} days unpaid", days)
        } else {
            format!("{} days at {}% pay", days, (rate * Decimal::ONE_HUNDRED).normalize())
        };
        details.push(pay_line(description, days, daily_salary, rate)?);

        line_amount(days, daily_salary, rate)?
    };

    Ok(SalaryBreakdown {
        total_salary: round_currency(total),
        daily_salary,
        days,
        pay_rate: policy.pay_rate,
        details,
    })
}
