//! Leave type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The category of absence a request is filed under.
///
/// Codes are snake_case (`annual_leave`); the short forms (`annual`) used by
/// the request extractor are accepted when parsing.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveType;
///
/// let leave_type: LeaveType = "sick".parse().unwrap();
/// assert_eq!(leave_type, LeaveType::SickLeave);
/// assert_eq!(leave_type.code(), "sick_leave");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave governed by tenure.
    AnnualLeave,
    /// Sick leave; tiered pay.
    SickLeave,
    /// Unpaid leave for personal matters.
    PersonalLeave,
    /// Marriage leave.
    MarriageLeave,
    /// Maternity leave.
    MaternityLeave,
    /// Paternity leave.
    PaternityLeave,
    /// Bereavement leave.
    BereavementLeave,
    /// Time off in lieu of overtime.
    CompensatoryLeave,
}

impl LeaveType {
    /// All leave types in catalog order.
    pub const ALL: [LeaveType; 8] = [
        LeaveType::AnnualLeave,
        LeaveType::SickLeave,
        LeaveType::PersonalLeave,
        LeaveType::MarriageLeave,
        LeaveType::MaternityLeave,
        LeaveType::PaternityLeave,
        LeaveType::BereavementLeave,
        LeaveType::CompensatoryLeave,
    ];

    /// Returns the snake_case code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::AnnualLeave => "annual_leave",
            LeaveType::SickLeave => "sick_leave",
            LeaveType::PersonalLeave => "personal_leave",
            LeaveType::MarriageLeave => "marriage_leave",
            LeaveType::MaternityLeave => "maternity_leave",
            LeaveType::PaternityLeave => "paternity_leave",
            LeaveType::BereavementLeave => "bereavement_leave",
            LeaveType::CompensatoryLeave => "compensatory_leave",
        }
    }

    /// Returns the human-readable name used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::AnnualLeave => "Annual leave",
            LeaveType::SickLeave => "Sick leave",
            LeaveType::PersonalLeave => "Personal leave",
            LeaveType::MarriageLeave => "Marriage leave",
            LeaveType::MaternityLeave => "Maternity leave",
            LeaveType::PaternityLeave => "Paternity leave",
            LeaveType::BereavementLeave => "Bereavement leave",
            LeaveType::CompensatoryLeave => "Compensatory leave",
        }
    }

    /// Returns true for leave that may be filed after it has started.
    pub fn allows_retroactive_filing(&self) -> bool {
        matches!(self, LeaveType::SickLeave | LeaveType::BereavementLeave)
    }
}

impl FromStr for LeaveType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        let short = key.strip_suffix("_leave").unwrap_or(key.as_str());

        match short {
            "annual" => Ok(LeaveType::AnnualLeave),
            "sick" => Ok(LeaveType::SickLeave),
            "personal" => Ok(LeaveType::PersonalLeave),
            "marriage" => Ok(LeaveType::MarriageLeave),
            "maternity" => Ok(LeaveType::MaternityLeave),
            "paternity" => Ok(LeaveType::PaternityLeave),
            "bereavement" => Ok(LeaveType::BereavementLeave),
            "compensatory" => Ok(LeaveType::CompensatoryLeave),
            _ => Err(EngineError::PolicyNotFound {
                leave_type: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
