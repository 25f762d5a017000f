//! Handover requirements for absences of two days or more.

use crate::models::{AuditStep, Department, Employee, HandoverRequirements};

use super::RuleOutcome;

/// Absences at least this long require a handover.
pub const HANDOVER_MIN_DAYS: u32 = 2;

const GENERIC_ITEMS: [&str; 2] = [
    "Designate a temporary owner and complete handover",
    "Update task list and key reminders",
];

fn department_items(department: &Department) -> &'static [&'static str] {
    match department {
        Department::Technology => &[
            "Commit code and update technical documentation",
            "Document project progress and open risks",
            "Set up emergency contact details and delegated authority",
        ],
        Department::Sales => &[
            "Update customer communication status and follow-up plans for key opportunities",
            "Prepare an emergency customer contact plan",
        ],
        Department::Finance => &[
            "Complete in-progress financial processing",
            "Hand over outstanding accounting items",
        ],
        Department::Product => &[
            "Update product development progress and requirement documents",
            "Arrange substitutes for product meetings",
        ],
        _ => &["Complete routine departmental handover"],
    }
}

/// Lists the handover actions an absence requires.
///
/// Absences of two days or more, of any leave type, require the two generic
/// items followed by the department's own list.
///
/// # Examples
///
/// ```
/// use leave_engine::models::{Department, Employee};
/// use leave_engine::rules::check_handover_requirements;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "MKT20230".to_string(),
///     name: "Sun Li".to_string(),
///     department: Department::Marketing,
///     position: "Marketing Specialist".to_string(),
///     supervisor: "Zhou (Marketing Director)".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
/// };
/// let handover = check_handover_requirements(&employee, 2);
/// assert!(handover.required);
/// assert_eq!(handover.requirements.len(), 3);
/// ```
pub fn check_handover_requirements(employee: &Employee, days: u32) -> HandoverRequirements {
    if days < HANDOVER_MIN_DAYS {
        return HandoverRequirements::default();
    }

    let requirements = GENERIC_ITEMS
        .iter()
        .chain(department_items(&employee.department))
        .map(|item| item.to_string())
        .collect();

    HandoverRequirements {
        required: true,
        requirements,
    }
}

/// Runs the handover check as a validation rule; requirements become warnings.
pub(crate) fn handover_rule(employee: &Employee, days: u32, step_number: u32) -> RuleOutcome {
    let handover = check_handover_requirements(employee, days);
    let reasoning = if handover.required {
        format!(
            "{} days >= {}: {} handover items for {}",
            days,
            HANDOVER_MIN_DAYS,
            handover.requirements.len(),
            employee.department
        )
    } else {
        format!("{} day(s) < {}: no handover required", days, HANDOVER_MIN_DAYS)
    };

    RuleOutcome {
        errors: Vec::new(),
        audit_step: AuditStep::new(
            step_number,
            "handover",
            "Handover Requirements",
            serde_json::json!({
                "department": employee.department.name(),
                "days": days
            }),
            serde_json::json!({
                "required": handover.required,
                "items": handover.requirements.len()
            }),
            reasoning,
        ),
        warnings: handover.requirements,
    }
}
