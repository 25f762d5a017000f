//! Property tests for the rules engine.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use proptest::test_runner::Config;

use leave_engine::models::{ApprovalLevel, Department, Employee, LeaveRequest, LeaveType};
use leave_engine::rules::{
    HANDOVER_MIN_DAYS, LeaveBalance, RulesEngine, check_handover_requirements,
};

const EMPLOYEE_ID: &str = "EMP001";

fn department_strategy() -> impl Strategy<Value = Department> {
    prop_oneof![
        Just(Department::Technology),
        Just(Department::Sales),
        Just(Department::Product),
        Just(Department::Marketing),
        Just(Department::Operations),
        Just(Department::HumanResources),
        Just(Department::Finance),
        Just(Department::Other("Legal".to_string())),
    ]
}

fn leave_type_strategy() -> impl Strategy<Value = LeaveType> {
    proptest::sample::select(LeaveType::ALL.to_vec())
}

fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0_i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn employee(department: Department) -> Employee {
    Employee {
        id: EMPLOYEE_ID.to_string(),
        name: "Test Employee".to_string(),
        department,
        position: "Staff".to_string(),
        supervisor: "Direct Supervisor".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    }
}

fn engine() -> RulesEngine<HashMap<String, LeaveBalance>> {
    RulesEngine::new(HashMap::from([(
        EMPLOYEE_ID.to_string(),
        LeaveBalance::from_usage(30, 0, 0),
    )]))
}

fn request(
    department: Department,
    leave_type: &str,
    start: NaiveDate,
    days: u32,
    notice: i64,
) -> LeaveRequest {
    LeaveRequest::new(
        employee(department),
        leave_type,
        start,
        start + Duration::days(i64::from(days) - 1),
        "",
        start - Duration::days(notice),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn unknown_leave_type_yields_exactly_one_error(
        department in department_strategy(),
        code in "[x-z]{3,10}",
        start in start_date_strategy(),
        days in 1_u32..40,
        notice in -5_i64..60
    ) {
        let validation = engine().validate(&request(department, &code, start, days, notice));

        prop_assert!(!validation.valid);
        prop_assert_eq!(validation.errors.len(), 1);
        prop_assert!(validation.warnings.is_empty());
    }

    #[test]
    fn single_day_never_escalates(
        department in department_strategy(),
        leave_type in leave_type_strategy()
    ) {
        let process = engine().determine_approval_process(
            &request(department, leave_type.code(), NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(), 1, 10),
        );

        prop_assert_eq!(process.approvers[0].level, ApprovalLevel::Supervisor);
        for step in &process.approvers {
            prop_assert!(!matches!(
                step.level,
                ApprovalLevel::DepartmentDirector | ApprovalLevel::HrManager | ApprovalLevel::Ceo
            ));
        }
    }

    #[test]
    fn approval_chain_is_ordered(
        department in department_strategy(),
        leave_type in leave_type_strategy(),
        days in 1_u32..40
    ) {
        let process = engine().determine_approval_process(
            &request(department, leave_type.code(), NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(), days, 10),
        );

        prop_assert_eq!(process.total_levels as usize, process.approvers.len());
        prop_assert!(process.approvers.windows(2).all(|pair| pair[0].order <= pair[1].order));
        prop_assert_eq!(process.final_approver.is_some(), days > 10);
    }

    #[test]
    fn handover_required_from_two_days(
        department in department_strategy(),
        days in 0_u32..40
    ) {
        let handover = check_handover_requirements(&employee(department), days);

        prop_assert_eq!(handover.required, days >= HANDOVER_MIN_DAYS);
        prop_assert_eq!(handover.requirements.is_empty(), !handover.required);
    }

    #[test]
    fn retroactive_sick_and_bereavement_have_no_notice_errors(
        department in department_strategy(),
        bereavement in any::<bool>(),
        start in start_date_strategy(),
        notice in -30_i64..0
    ) {
        let (code, days) = if bereavement { ("bereavement", 3) } else { ("sick", 5) };
        let validation = engine().validate(&request(department, code, start, days, notice));

        prop_assert!(validation.valid, "errors: {:?}", validation.errors);
    }

    #[test]
    fn annual_leave_with_notice_and_balance_is_valid(
        department in department_strategy(),
        start in start_date_strategy(),
        days in 1_u32..=30,
        notice in 5_i64..90
    ) {
        let validation = engine().validate(&request(department, "annual_leave", start, days, notice));

        prop_assert!(validation.valid, "errors: {:?}", validation.errors);
        prop_assert_eq!(validation.checks.len(), 6);
    }
}
