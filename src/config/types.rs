//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Employee;
use crate::rules::LeaveBalance;

/// Metadata about the company whose policy is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// Short company code.
    pub code: String,
    /// The company's name.
    pub name: String,
    /// The version or effective date of the roster.
    pub version: String,
}

/// One employee in the roster with their recorded leave usage.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    /// The employee reference handed to the engine.
    #[serde(flatten)]
    pub employee: Employee,
    /// Annual leave days remaining. The roster records the remaining
    /// balance here, not days used.
    pub annual_leave: u32,
    /// Sick leave days used this year.
    #[serde(default)]
    pub used_sick_leave: u32,
    /// Personal leave days used this year.
    #[serde(default)]
    pub used_personal_leave: u32,
    /// Daily salary for leave pay calculations.
    #[serde(default)]
    pub daily_salary: Option<Decimal>,
}

impl EmployeeRecord {
    /// Returns the leave balance derived from this record.
    pub fn leave_balance(&self) -> LeaveBalance {
        LeaveBalance::from_usage(
            self.annual_leave,
            self.used_sick_leave,
            self.used_personal_leave,
        )
    }
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// All employees.
    pub employees: Vec<EmployeeRecord>,
}

/// The complete company configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    /// Company metadata.
    metadata: CompanyMetadata,
    /// The employee roster, in file order.
    employees: Vec<EmployeeRecord>,
}

impl CompanyConfig {
    /// Creates a new CompanyConfig from its component parts.
    pub fn new(metadata: CompanyMetadata, employees: Vec<EmployeeRecord>) -> Self {
        Self {
            metadata,
            employees,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the employee roster.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }
}
