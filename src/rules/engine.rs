//! The rules engine facade.
//!
//! [`RulesEngine`] ties the catalog to a balance provider and composes the
//! individual rules into a [`LeaveSummary`]. It holds no mutable state and
//! can be shared between request handlers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    ApprovalProcess, Employee, HandoverRequirements, LeaveRequest, LeaveSummary, LeaveTypePolicy,
    SalaryBreakdown, SummaryStatus, ValidationResult,
};

use super::{
    BalanceProvider, LeaveTypeCatalog, calculate_salary, check_handover_requirements,
    determine_approval_process, validate,
};

/// Evaluates leave requests against company policy.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use leave_engine::models::{Department, Employee, LeaveRequest, SummaryStatus};
/// use leave_engine::rules::{LeaveBalance, RulesEngine};
/// use chrono::NaiveDate;
///
/// let balances = HashMap::from([("OPS20200".to_string(), LeaveBalance::from_usage(15, 4, 2))]);
/// let engine = RulesEngine::new(balances);
///
/// let employee = Employee {
///     id: "OPS20200".to_string(),
///     name: "Wu Jun".to_string(),
///     department: Department::Operations,
///     position: "Customer Service Lead".to_string(),
///     supervisor: "Ma (Operations Manager)".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
/// };
/// let request = LeaveRequest::new(
///     employee,
///     "annual_leave",
///     NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 8).unwrap(),
///     "family trip",
///     NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
/// )
/// .unwrap();
///
/// let summary = engine.generate_leave_summary(&request);
/// assert_eq!(summary.status, SummaryStatus::ReadyForApproval);
/// assert_eq!(summary.approval_process.total_levels, 2);
/// ```
#[derive(Debug, Clone)]
pub struct RulesEngine<P> {
    catalog: LeaveTypeCatalog,
    balances: P,
}

impl<P: BalanceProvider> RulesEngine<P> {
    /// Creates an engine reading balances from `balances`.
    pub fn new(balances: P) -> Self {
        Self {
            catalog: LeaveTypeCatalog::new(),
            balances,
        }
    }

    /// Returns the leave type catalog.
    pub fn catalog(&self) -> &LeaveTypeCatalog {
        &self.catalog
    }

    /// Returns the balance provider.
    pub fn balances(&self) -> &P {
        &self.balances
    }

    /// Validates a request. See [`validate`].
    pub fn validate(&self, request: &LeaveRequest) -> ValidationResult {
        validate(&self.catalog, request, &self.balances)
    }

    /// Builds the approval chain for a request.
    ///
    /// The chain is computed even when the request is invalid or its leave
    /// type is unknown.
    pub fn determine_approval_process(&self, request: &LeaveRequest) -> ApprovalProcess {
        let leave_type = request.resolved_leave_type().ok();
        determine_approval_process(&request.employee, leave_type, request.days)
    }

    /// Lists the handover actions for an absence.
    pub fn check_handover_requirements(
        &self,
        employee: &Employee,
        days: u32,
    ) -> HandoverRequirements {
        check_handover_requirements(employee, days)
    }

    /// Calculates leave pay for a request.
    ///
    /// # Errors
    ///
    /// Returns `PolicyNotFound` for an unknown leave type and
    /// `CalculationError` for a negative daily salary.
    pub fn calculate_salary(
        &self,
        request: &LeaveRequest,
        daily_salary: Decimal,
    ) -> EngineResult<SalaryBreakdown> {
        let policy = self.catalog.lookup(&request.leave_type)?;
        calculate_salary(policy, request.days, daily_salary)
    }

    /// Evaluates a request and stamps the summary with the current time.
    pub fn generate_leave_summary(&self, request: &LeaveRequest) -> LeaveSummary {
        self.generate_leave_summary_at(request, Utc::now())
    }

    /// Evaluates a request and stamps the summary with `generated_at`.
    pub fn generate_leave_summary_at(
        &self,
        request: &LeaveRequest,
        generated_at: DateTime<Utc>,
    ) -> LeaveSummary {
        let config: Option<LeaveTypePolicy> = self.catalog.lookup(&request.leave_type).ok().copied();

        let validation = self.validate(request);
        let approval_process = self.determine_approval_process(request);
        let handover_requirements =
            self.check_handover_requirements(&request.employee, request.days);

        let status = if validation.errors.is_empty() {
            SummaryStatus::ReadyForApproval
        } else {
            SummaryStatus::RequiresRevision
        };

        debug!(
            employee_id = %request.employee.id,
            leave_type = %request.leave_type,
            days = request.days,
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            approval_levels = approval_process.total_levels,
            ?status,
            "Generated leave summary"
        );

        LeaveSummary {
            summary_id: Uuid::new_v4(),
            request: request.clone(),
            validation,
            approval_process,
            handover_requirements,
            config,
            status,
            generated_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApprovalLevel, Department, LeaveType};
    use crate::rules::LeaveBalance;
    use chrono::{NaiveDate, TimeZone};
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_employee(department: Department) -> Employee {
        Employee {
            id: "EMP001".to_string(),
            name: "Test Employee".to_string(),
            department,
            position: "Staff".to_string(),
            supervisor: "Direct Supervisor".to_string(),
            hire_date: date(2020, 1, 1),
        }
    }

    fn engine(balance: LeaveBalance) -> RulesEngine<HashMap<String, LeaveBalance>> {
        RulesEngine::new(HashMap::from([("EMP001".to_string(), balance)]))
    }

    #[test]
    fn test_summary_ready_when_no_errors() {
        let request = LeaveRequest::new(
            create_test_employee(Department::Technology),
            "annual_leave",
            date(2025, 5, 12),
            date(2025, 5, 14),
            "",
            date(2025, 5, 7),
        )
        .unwrap();
        let at = Utc.with_ymd_and_hms(2025, 5, 7, 9, 0, 0).unwrap();
        let summary = engine(LeaveBalance::from_usage(8, 0, 0)).generate_leave_summary_at(&request, at);

        assert_eq!(summary.status, SummaryStatus::ReadyForApproval);
        assert!(summary.validation.valid);
        assert_eq!(summary.generated_at, at);
        assert_eq!(summary.config.unwrap().leave_type, LeaveType::AnnualLeave);
        assert!(summary.handover_requirements.required);
        let levels: Vec<ApprovalLevel> =
            summary.approval_process.approvers.iter().map(|s| s.level).collect();
        assert_eq!(
            levels,
            vec![
                ApprovalLevel::Supervisor,
                ApprovalLevel::DepartmentDirector,
                ApprovalLevel::TechnologyDirectorSpecial
            ]
        );
    }

    #[test]
    fn test_summary_requires_revision_with_errors() {
        let request = LeaveRequest::new(
            create_test_employee(Department::Finance),
            "personal_leave",
            date(2025, 5, 12),
            date(2025, 5, 12),
            "",
            date(2025, 5, 12),
        )
        .unwrap();
        let summary = engine(LeaveBalance::from_usage(5, 0, 0)).generate_leave_summary(&request);

        assert_eq!(summary.status, SummaryStatus::RequiresRevision);
        assert_eq!(summary.validation.errors.len(), 1);
        assert_eq!(summary.approval_process.total_levels, 2);
    }

    #[test]
    fn test_summary_for_unknown_leave_type() {
        let request = LeaveRequest::new(
            create_test_employee(Department::Sales),
            "sabbatical",
            date(2025, 5, 12),
            date(2025, 5, 16),
            "",
            date(2025, 4, 1),
        )
        .unwrap();
        let summary = engine(LeaveBalance::default()).generate_leave_summary(&request);

        assert_eq!(summary.status, SummaryStatus::RequiresRevision);
        assert!(summary.config.is_none());
        assert_eq!(summary.validation.errors.len(), 1);
        assert!(summary.handover_requirements.required);
        assert_eq!(summary.handover_requirements.requirements.len(), 4);
        assert!(!summary.approval_process.approvers.is_empty());
    }

    #[test]
    fn test_single_day_unknown_leave_type_needs_no_handover() {
        let request = LeaveRequest::new(
            create_test_employee(Department::Sales),
            "sabbatical",
            date(2025, 5, 12),
            date(2025, 5, 12),
            "",
            date(2025, 4, 1),
        )
        .unwrap();
        let summary = engine(LeaveBalance::default()).generate_leave_summary(&request);

        assert!(!summary.handover_requirements.required);
        assert!(summary.handover_requirements.requirements.is_empty());
    }

    #[test]
    fn test_summary_serializes_request_fields_flat() {
        let request = LeaveRequest::new(
            create_test_employee(Department::Marketing),
            "annual",
            date(2025, 5, 12),
            date(2025, 5, 12),
            "dentist",
            date(2025, 5, 1),
        )
        .unwrap();
        let summary = engine(LeaveBalance::from_usage(3, 0, 0)).generate_leave_summary(&request);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["leave_type"], "annual");
        assert_eq!(json["reason"], "dentist");
        assert_eq!(json["days"], 1);
        assert_eq!(json["status"], "ready_for_approval");
        assert_eq!(json["config"]["leave_type"], "annual_leave");
        assert_eq!(json["approval_process"]["auto_approval_eligible"], true);
    }

    #[test]
    fn test_calculate_salary_resolves_policy() {
        let request = LeaveRequest::new(
            create_test_employee(Department::Marketing),
            "sick",
            date(2025, 5, 12),
            date(2025, 5, 18),
            "",
            date(2025, 5, 12),
        )
        .unwrap();
        let breakdown = engine(LeaveBalance::default())
            .calculate_salary(&request, Decimal::new(100, 0))
            .unwrap();
        assert_eq!(breakdown.total_salary, Decimal::new(660, 0));
    }

    #[test]
    fn test_calculate_salary_unknown_type_is_error() {
        let mut request = LeaveRequest::new(
            create_test_employee(Department::Marketing),
            "annual",
            date(2025, 5, 12),
            date(2025, 5, 12),
            "",
            date(2025, 5, 1),
        )
        .unwrap();
        request.leave_type = "unpaid_sabbatical".to_string();
        assert!(
            engine(LeaveBalance::default())
                .calculate_salary(&request, Decimal::new(100, 0))
                .is_err()
        );
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RulesEngine<HashMap<String, LeaveBalance>>>();
    }
}
