//! Approval chain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role that signs off one step of the approval chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalLevel {
    /// The employee's direct supervisor.
    Supervisor,
    /// The head of the employee's department.
    DepartmentDirector,
    /// The HR manager.
    HrManager,
    /// The chief executive.
    Ceo,
    /// Technology director sign-off during sprint periods.
    TechnologyDirectorSpecial,
    /// Sales director review of customer impact.
    SalesDirectorReview,
    /// Finance director sign-off during settlement periods.
    FinanceDirectorSpecial,
    /// Product director sign-off during launch periods.
    ProductDirectorSpecial,
}

impl ApprovalLevel {
    /// Returns the label printed on the leave form.
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalLevel::Supervisor => "Supervisor",
            ApprovalLevel::DepartmentDirector => "Department Director",
            ApprovalLevel::HrManager => "HR Manager",
            ApprovalLevel::Ceo => "CEO",
            ApprovalLevel::TechnologyDirectorSpecial => "Technology Director special approval",
            ApprovalLevel::SalesDirectorReview => "Sales Director review",
            ApprovalLevel::FinanceDirectorSpecial => "Finance Director special approval",
            ApprovalLevel::ProductDirectorSpecial => "Product Director special approval",
        }
    }

    /// Returns true for the department-specific steps inserted between the
    /// standard levels.
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            ApprovalLevel::TechnologyDirectorSpecial
                | ApprovalLevel::SalesDirectorReview
                | ApprovalLevel::FinanceDirectorSpecial
                | ApprovalLevel::ProductDirectorSpecial
        )
    }
}

/// One sign-off in the approval chain.
///
/// `order` is a fixed-point sort key; special approvers use half steps
/// (2.5) to land between the standard levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    /// The approving role.
    pub level: ApprovalLevel,
    /// Who signs for that role.
    pub approver_name: String,
    /// Position in the chain; steps are stably sorted ascending.
    pub order: Decimal,
    /// Whether the step must be completed.
    pub required: bool,
    /// Why a special step was added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The ordered approval chain for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalProcess {
    /// Steps sorted by `order`.
    pub approvers: Vec<ApprovalStep>,
    /// Number of steps.
    pub total_levels: u32,
    /// Half a working day per step, rounded up.
    pub estimated_processing_days: u32,
    /// Single-day annual leave may be approved automatically.
    pub auto_approval_eligible: bool,
    /// The CEO step when the request escalates that far.
    pub final_approver: Option<ApprovalStep>,
}
