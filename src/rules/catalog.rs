//! The leave type catalog.
//!
//! A static table of the eight leave-type policies. Lookups by code return
//! `PolicyNotFound` for anything outside the table; callers turn that into a
//! validation error.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{LeaveType, LeaveTypeDetails, LeaveTypePolicy};

/// Policies indexed by `LeaveType as usize`.
static POLICIES: [LeaveTypePolicy; 8] = [
    LeaveTypePolicy {
        leave_type: LeaveType::AnnualLeave,
        max_days_per_year: None,
        advance_notice_days_required: 3,
        document_required: false,
        pay_rate: Decimal::ONE,
        description: "Paid annual leave based on length of service",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::SickLeave,
        max_days_per_year: Some(30),
        advance_notice_days_required: 0,
        document_required: true,
        pay_rate: Decimal::ONE,
        description: "Leave for illness; a medical certificate is required",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::PersonalLeave,
        max_days_per_year: Some(10),
        advance_notice_days_required: 1,
        document_required: false,
        pay_rate: Decimal::ZERO,
        description: "Unpaid leave for personal matters",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::MarriageLeave,
        max_days_per_year: Some(5),
        advance_notice_days_required: 5,
        document_required: true,
        pay_rate: Decimal::ONE,
        description: "Leave for the employee's wedding; a marriage certificate is required",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::MaternityLeave,
        max_days_per_year: Some(158),
        advance_notice_days_required: 30,
        document_required: true,
        pay_rate: Decimal::ONE,
        description: "Statutory leave for childbirth",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::PaternityLeave,
        max_days_per_year: Some(15),
        advance_notice_days_required: 5,
        document_required: true,
        pay_rate: Decimal::ONE,
        description: "Leave to support a partner giving birth",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::BereavementLeave,
        max_days_per_year: Some(3),
        advance_notice_days_required: 0,
        document_required: true,
        pay_rate: Decimal::ONE,
        description: "Leave to attend to the death of a relative",
    },
    LeaveTypePolicy {
        leave_type: LeaveType::CompensatoryLeave,
        max_days_per_year: None,
        advance_notice_days_required: 1,
        document_required: false,
        pay_rate: Decimal::ONE,
        description: "Time off in lieu of overtime; must be taken within 3 months",
    },
];

/// Registry of leave type policies.
///
/// # Example
///
/// ```
/// use leave_engine::rules::LeaveTypeCatalog;
///
/// let catalog = LeaveTypeCatalog::new();
/// let policy = catalog.lookup("personal_leave").unwrap();
/// assert_eq!(policy.max_days_per_year, Some(10));
/// assert!(catalog.lookup("sabbatical").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveTypeCatalog;

impl LeaveTypeCatalog {
    /// Creates the catalog.
    pub fn new() -> Self {
        Self
    }

    /// Looks up the policy for a leave type code.
    ///
    /// # Errors
    ///
    /// Returns `PolicyNotFound` if the code names no catalog entry.
    pub fn lookup(&self, code: &str) -> EngineResult<&'static LeaveTypePolicy> {
        let leave_type: LeaveType = code.parse()?;
        Ok(self.policy(leave_type))
    }

    /// Returns the policy for a known leave type.
    pub fn policy(&self, leave_type: LeaveType) -> &'static LeaveTypePolicy {
        &POLICIES[leave_type as usize]
    }

    /// Returns every policy in catalog order.
    pub fn policies(&self) -> &'static [LeaveTypePolicy] {
        &POLICIES
    }

    /// Returns the policy with the requirements and restrictions an
    /// employee should read before filing.
    pub fn details(&self, leave_type: LeaveType) -> LeaveTypeDetails {
        let policy = *self.policy(leave_type);
        let mut requirements = Vec::new();
        let mut restrictions = Vec::new();

        if policy.advance_notice_days_required > 0 {
            requirements.push(format!(
                "Apply at least {} days in advance",
                policy.advance_notice_days_required
            ));
        }

        if policy.document_required {
            let document = match leave_type {
                LeaveType::SickLeave => Some(
                    "Hospital certificate for 1-3 days; inpatient record for more than 3 days",
                ),
                LeaveType::MarriageLeave => Some("Marriage certificate"),
                LeaveType::MaternityLeave | LeaveType::PaternityLeave => Some("Birth certificate"),
                LeaveType::BereavementLeave => {
                    Some("Proof of relationship and death certificate")
                }
                _ => None,
            };
            requirements.extend(document.map(str::to_string));
        }

        if let Some(max_days) = policy.max_days_per_year {
            restrictions.push(format!("Annual cap of {} days", max_days));
        }

        if leave_type == LeaveType::CompensatoryLeave {
            restrictions.push("Must be used within 3 months".to_string());
        }

        LeaveTypeDetails {
            policy,
            requirements,
            restrictions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_policy_table_is_indexed_by_leave_type() {
        let catalog = LeaveTypeCatalog::new();
        for leave_type in LeaveType::ALL {
            assert_eq!(catalog.policy(leave_type).leave_type, leave_type);
        }
        assert_eq!(catalog.policies().len(), 8);
    }

    #[test]
    fn test_lookup_unknown_code_returns_policy_not_found() {
        let catalog = LeaveTypeCatalog::new();
        match catalog.lookup("study_leave") {
            Err(EngineError::PolicyNotFound { leave_type }) => {
                assert_eq!(leave_type, "study_leave");
            }
            other => panic!("Expected PolicyNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_annual_and_compensatory_are_uncapped() {
        let catalog = LeaveTypeCatalog::new();
        assert_eq!(catalog.policy(LeaveType::AnnualLeave).max_days_per_year, None);
        assert_eq!(
            catalog.policy(LeaveType::CompensatoryLeave).max_days_per_year,
            None
        );
    }

    #[test]
    fn test_only_personal_leave_is_unpaid() {
        let catalog = LeaveTypeCatalog::new();
        for policy in catalog.policies() {
            if policy.leave_type == LeaveType::PersonalLeave {
                assert_eq!(policy.pay_rate, Decimal::ZERO);
            } else {
                assert_eq!(policy.pay_rate, Decimal::ONE);
            }
        }
    }

    #[test]
    fn test_policy_values() {
        let catalog = LeaveTypeCatalog::new();
        let maternity = catalog.policy(LeaveType::MaternityLeave);
        assert_eq!(maternity.max_days_per_year, Some(158));
        assert_eq!(maternity.advance_notice_days_required, 30);
        assert!(maternity.document_required);

        let bereavement = catalog.policy(LeaveType::BereavementLeave);
        assert_eq!(bereavement.max_days_per_year, Some(3));
        assert_eq!(bereavement.advance_notice_days_required, 0);
    }

    #[test]
    fn test_sick_leave_details_list_certificate_and_cap() {
        let details = LeaveTypeCatalog::new().details(LeaveType::SickLeave);
        assert_eq!(details.requirements.len(), 1);
        assert!(details.requirements[0].contains("Hospital certificate"));
        assert_eq!(details.restrictions, vec!["Annual cap of 30 days".to_string()]);
    }

    #[test]
    fn test_compensatory_leave_details_include_expiry() {
        let details = LeaveTypeCatalog::new().details(LeaveType::CompensatoryLeave);
        assert_eq!(
            details.requirements,
            vec!["Apply at least 1 days in advance".to_string()]
        );
        assert_eq!(
            details.restrictions,
            vec!["Must be used within 3 months".to_string()]
        );
    }

    #[test]
    fn test_details_serialize_policy_fields_flat() {
        let details = LeaveTypeCatalog::new().details(LeaveType::MarriageLeave);
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["leave_type"], "marriage_leave");
        assert_eq!(json["max_days_per_year"], 5);
        assert_eq!(json["requirements"][1], "Marriage certificate");
    }
}
