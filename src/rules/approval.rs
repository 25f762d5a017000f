//! Approval chain derivation.
//!
//! Every request goes to the supervisor. Longer absences escalate to the
//! department director (2+ days), HR (more than 5) and the CEO (more than
//! 10). Some departments add a director sign-off at order 2.5, between the
//! department director and HR. These special steps are gated on their own
//! thresholds, so they can apply to a one-day request that has no
//! department director step.

use rust_decimal::Decimal;

use crate::models::{ApprovalLevel, ApprovalProcess, ApprovalStep, Department, Employee, LeaveType};

/// Approver name for the HR step.
pub const HR_MANAGER_NAME: &str = "HR Manager";

/// Approver name for the CEO step.
pub const CEO_NAME: &str = "CEO";

/// Returns the director title for a department.
///
/// Departments without a mapping get the generic "Department Director".
pub fn director_title_for(department: &Department) -> &'static str {
    match department {
        Department::Technology => "Technology Director",
        Department::Sales => "Sales Director",
        Department::Product => "Product Director",
        Department::Marketing => "Marketing Director",
        Department::Operations => "Operations Director",
        Department::HumanResources => "HR Director",
        Department::Finance => "Finance Director",
        Department::Other(_) => "Department Director",
    }
}

fn order(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

fn standard_step(
    level: ApprovalLevel,
    approver_name: impl Into<String>,
    position: i64,
) -> ApprovalStep {
    ApprovalStep {
        level,
        approver_name: approver_name.into(),
        order: order(position, 0),
        required: true,
        reason: None,
    }
}

/// Returns the department-specific steps for a request, each at order 2.5.
///
/// Technology needs more than 2 days, Sales and Product more than 1, and
/// Finance applies to every request.
pub fn special_approvers(employee: &Employee, days: u32) -> Vec<ApprovalStep> {
    let special = match employee.department {
        Department::Technology if days > 2 => Some((
            ApprovalLevel::TechnologyDirectorSpecial,
            "Technology Director",
            "Sprint-period review",
        )),
        Department::Sales if days > 1 => Some((
            ApprovalLevel::SalesDirectorReview,
            "Sales Director",
            "Customer-impact review",
        )),
        Department::Finance => Some((
            ApprovalLevel::FinanceDirectorSpecial,
            "Finance Director",
            "Settlement-period review",
        )),
        Department::Product if days > 1 => Some((
            ApprovalLevel::ProductDirectorSpecial,
            "Product Director",
            "Launch-period review",
        )),
        _ => None,
    };

    special
        .into_iter()
        .map(|(level, approver_name, reason)| ApprovalStep {
            level,
            approver_name: approver_name.to_string(),
            order: order(25, 1),
            required: true,
            reason: Some(reason.to_string()),
        })
        .collect()
}

/// Builds the ordered approval chain for a request.
///
/// # Arguments
///
/// * `employee` - The employee requesting leave
/// * `leave_type` - The resolved leave type, or `None` when the code was unknown
/// * `days` - Days of leave requested
///
/// # Examples
///
/// ```
/// use leave_engine::models::{ApprovalLevel, Department, Employee, LeaveType};
/// use leave_engine::rules::determine_approval_process;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "TEC20220".to_string(),
///     name: "Zhang Wei".to_string(),
///     department: Department::Technology,
///     position: "Senior Engineer".to_string(),
///     supervisor: "Li (Technology Director)".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
/// };
/// let process = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 3);
/// let levels: Vec<ApprovalLevel> = process.approvers.iter().map(|s| s.level).collect();
/// assert_eq!(
///     levels,
///     vec![
///         ApprovalLevel::Supervisor,
///         ApprovalLevel::DepartmentDirector,
///         ApprovalLevel::TechnologyDirectorSpecial,
///     ]
/// );
/// ```
pub fn determine_approval_process(
    employee: &Employee,
    leave_type: Option<LeaveType>,
    days: u32,
) -> ApprovalProcess {
    let mut approvers = vec![standard_step(
        ApprovalLevel::Supervisor,
        employee.supervisor.as_str(),
        1,
    )];
    let mut final_approver = None;

    if days >= 2 {
        approvers.push(standard_step(
            ApprovalLevel::DepartmentDirector,
            director_title_for(&employee.department),
            2,
        ));
    }

    if days > 5 {
        approvers.push(standard_step(ApprovalLevel::HrManager, HR_MANAGER_NAME, 3));
    }

    if days > 10 {
        let ceo = standard_step(ApprovalLevel::Ceo, CEO_NAME, 4);
        final_approver = Some(ceo.clone());
        approvers.push(ceo);
    }

    approvers.extend(special_approvers(employee, days));

    // Stable: equal orders keep insertion order.
    approvers.sort_by(|a, b| a.order.cmp(&b.order));

    let total_levels = approvers.len() as u32;

    ApprovalProcess {
        approvers,
        total_levels,
        estimated_processing_days: total_levels.div_ceil(2),
        auto_approval_eligible: days == 1 && leave_type == Some(LeaveType::AnnualLeave),
        final_approver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_employee(department: Department) -> Employee {
        Employee {
            id: "EMP001".to_string(),
            name: "Test Employee".to_string(),
            department,
            position: "Staff".to_string(),
            supervisor: "Direct Supervisor".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    fn levels(process: &ApprovalProcess) -> Vec<ApprovalLevel> {
        process.approvers.iter().map(|s| s.level).collect()
    }

    #[test]
    fn test_single_day_goes_to_supervisor_only() {
        let employee = create_test_employee(Department::Marketing);
        let process = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 1);

        assert_eq!(levels(&process), vec![ApprovalLevel::Supervisor]);
        assert_eq!(process.approvers[0].approver_name, "Direct Supervisor");
        assert_eq!(process.total_levels, 1);
        assert_eq!(process.estimated_processing_days, 1);
        assert!(process.auto_approval_eligible);
        assert!(process.final_approver.is_none());
    }

    #[test]
    fn test_two_days_adds_department_director() {
        let employee = create_test_employee(Department::Operations);
        let process = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 2);

        assert_eq!(
            levels(&process),
            vec![ApprovalLevel::Supervisor, ApprovalLevel::DepartmentDirector]
        );
        assert_eq!(process.approvers[1].approver_name, "Operations Director");
        assert!(!process.auto_approval_eligible);
    }

    #[test]
    fn test_six_days_adds_hr_manager() {
        let employee = create_test_employee(Department::HumanResources);
        let process = determine_approval_process(&employee, Some(LeaveType::SickLeave), 6);

        assert_eq!(
            levels(&process),
            vec![
                ApprovalLevel::Supervisor,
                ApprovalLevel::DepartmentDirector,
                ApprovalLevel::HrManager
            ]
        );
        assert_eq!(process.approvers[1].approver_name, "HR Director");
        assert_eq!(process.estimated_processing_days, 2);
    }

    #[test]
    fn test_eleven_days_escalates_to_ceo() {
        let employee = create_test_employee(Department::Marketing);
        let process = determine_approval_process(&employee, Some(LeaveType::MarriageLeave), 11);

        assert_eq!(process.total_levels, 4);
        let final_approver = process.final_approver.as_ref().unwrap();
        assert_eq!(final_approver.level, ApprovalLevel::Ceo);
        assert_eq!(final_approver.order, Decimal::new(4, 0));
        assert_eq!(process.approvers.last().unwrap(), final_approver);
    }

    #[test]
    fn test_unknown_department_gets_generic_director() {
        let employee = create_test_employee(Department::Other("Legal".to_string()));
        let process = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 3);
        assert_eq!(process.approvers[1].approver_name, "Department Director");
    }

    #[test]
    fn test_technology_special_step_needs_more_than_two_days() {
        let employee = create_test_employee(Department::Technology);
        let two = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 2);
        assert!(!two.approvers.iter().any(|s| s.level.is_special()));

        let three = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 3);
        let special = &three.approvers[2];
        assert_eq!(special.level, ApprovalLevel::TechnologyDirectorSpecial);
        assert_eq!(special.order, Decimal::new(25, 1));
        assert_eq!(special.reason.as_deref(), Some("Sprint-period review"));
    }

    #[test]
    fn test_finance_special_step_applies_to_single_day() {
        let employee = create_test_employee(Department::Finance);
        let process = determine_approval_process(&employee, Some(LeaveType::PersonalLeave), 1);

        assert_eq!(
            levels(&process),
            vec![ApprovalLevel::Supervisor, ApprovalLevel::FinanceDirectorSpecial]
        );
        assert_eq!(process.estimated_processing_days, 1);
    }

    #[test]
    fn test_special_step_sorts_between_director_and_hr() {
        let employee = create_test_employee(Department::Sales);
        let process = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 12);

        assert_eq!(
            levels(&process),
            vec![
                ApprovalLevel::Supervisor,
                ApprovalLevel::DepartmentDirector,
                ApprovalLevel::SalesDirectorReview,
                ApprovalLevel::HrManager,
                ApprovalLevel::Ceo
            ]
        );
        assert_eq!(process.total_levels, 5);
        assert_eq!(process.estimated_processing_days, 3);
    }

    #[test]
    fn test_product_special_step_needs_more_than_one_day() {
        let employee = create_test_employee(Department::Product);
        let one = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 1);
        assert_eq!(one.total_levels, 1);

        let two = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 2);
        assert_eq!(two.approvers[2].level, ApprovalLevel::ProductDirectorSpecial);
    }

    #[test]
    fn test_unknown_leave_type_still_gets_a_chain() {
        let employee = create_test_employee(Department::Finance);
        let process = determine_approval_process(&employee, None, 1);
        assert_eq!(process.total_levels, 2);
        assert!(!process.auto_approval_eligible);
    }

    #[test]
    fn test_approval_step_serializes_order_as_string() {
        let employee = create_test_employee(Department::Finance);
        let process = determine_approval_process(&employee, Some(LeaveType::AnnualLeave), 1);
        let json = serde_json::to_value(&process).unwrap();
        assert_eq!(json["approvers"][1]["order"], "2.5");
        assert_eq!(json["approvers"][1]["level"], "finance_director_special");
        assert!(json["approvers"][0].get("reason").is_none());
    }
}
