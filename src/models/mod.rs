//! Core data models for the leave rules engine.
//!
//! This module contains all the domain models used throughout the engine.

mod approval;
mod audit;
mod employee;
mod leave_request;
mod leave_type;
mod policy;
mod summary;

pub use approval::{ApprovalLevel, ApprovalProcess, ApprovalStep};
pub use audit::AuditStep;
pub use employee::{Department, Employee};
pub use leave_request::{DEFAULT_REASON, LeaveRequest};
pub use leave_type::LeaveType;
pub use policy::{LeaveTypeDetails, LeaveTypePolicy};
pub use summary::{
    HandoverRequirements, LeaveSummary, SalaryBreakdown, SalaryLine, SummaryStatus,
    ValidationResult,
};
