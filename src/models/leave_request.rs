//! Leave request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Employee, LeaveType};

/// The reason recorded when the employee gives none.
pub const DEFAULT_REASON: &str = "personal matters";

/// A single leave submission, the immutable input to the rules engine.
///
/// `leave_type` holds the code as extracted from the conversation; it is
/// resolved against the catalog during validation so that an unknown code
/// surfaces as a validation error rather than a parse failure upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee requesting leave.
    pub employee: Employee,
    /// The requested leave type code (e.g. "annual_leave").
    pub leave_type: String,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Inclusive day count between start and end.
    pub days: u32,
    /// Free-text reason.
    pub reason: String,
    /// Days between submission and the start date; negative when filed after the fact.
    pub advance_notice_days: i64,
}

impl LeaveRequest {
    /// Builds a request from the extracted fields and the submission date.
    ///
    /// The day count and advance notice are derived from the dates. An empty
    /// reason becomes [`DEFAULT_REASON`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if `end_date` is before `start_date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{Department, Employee, LeaveRequest};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "SAL20210".to_string(),
    ///     name: "Li Na".to_string(),
    ///     department: Department::Sales,
    ///     position: "Sales Manager".to_string(),
    ///     supervisor: "Chen (Sales Director)".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
    /// };
    /// let request = LeaveRequest::new(
    ///     employee,
    ///     "annual_leave",
    ///     NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
    ///     "",
    ///     NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(request.days, 3);
    /// assert_eq!(request.advance_notice_days, 10);
    /// assert_eq!(request.reason, "personal matters");
    /// ```
    pub fn new(
        employee: Employee,
        leave_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
        submitted_on: NaiveDate,
    ) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidRequest {
                field: "end_date".to_string(),
                message: format!("{} is before start_date {}", end_date, start_date),
            });
        }

        let days = (end_date - start_date).num_days() + 1;
        let days = u32::try_from(days).map_err(|_| EngineError::InvalidRequest {
            field: "end_date".to_string(),
            message: format!("leave of {} days is out of range", days),
        })?;

        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            DEFAULT_REASON.to_string()
        } else {
            reason.trim().to_string()
        };

        Ok(Self {
            employee,
            leave_type: leave_type.into(),
            start_date,
            end_date,
            days,
            reason,
            advance_notice_days: (start_date - submitted_on).num_days(),
        })
    }

    /// Resolves the requested code to a [`LeaveType`].
    pub fn resolved_leave_type(&self) -> EngineResult<LeaveType> {
        self.leave_type.parse()
    }
}
