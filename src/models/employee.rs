//! Employee model and related types.
//!
//! This module defines the [`Employee`] reference the engine reads and the
//! [`Department`] enum that drives department-specific rules.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The department an employee belongs to.
///
/// Departments outside the known set are kept as [`Department::Other`] so
/// that generic fallbacks apply instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    /// Engineering and IT.
    Technology,
    /// Sales and account management.
    Sales,
    /// Product management.
    Product,
    /// Marketing.
    Marketing,
    /// Operations and customer service.
    Operations,
    /// Human resources.
    HumanResources,
    /// Finance and accounting.
    Finance,
    /// Any department without bespoke rules.
    Other(String),
}

impl Department {
    /// Returns the display name of the department.
    pub fn name(&self) -> &str {
        match self {
            Department::Technology => "Technology",
            Department::Sales => "Sales",
            Department::Product => "Product",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::HumanResources => "Human Resources",
            Department::Finance => "Finance",
            Department::Other(name) => name,
        }
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        let key: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "technology" | "tech" => Department::Technology,
            "sales" => Department::Sales,
            "product" => Department::Product,
            "marketing" => Department::Marketing,
            "operations" | "ops" => Department::Operations,
            "humanresources" | "hr" => Department::HumanResources,
            "finance" => Department::Finance,
            _ => Department::Other(value.trim().to_string()),
        }
    }
}

impl From<&str> for Department {
    fn from(value: &str) -> Self {
        Department::from(value.to_string())
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents the employee a leave request is filed for.
///
/// The engine only reads this record; balances live with the
/// [`crate::rules::BalanceProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (e.g. "TEC20220").
    pub id: String,
    /// Full name.
    pub name: String,
    /// The employee's department.
    pub department: Department,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Name of the direct supervisor, the first approver on every request.
    pub supervisor: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Returns the number of whole years worked as of the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{Department, Employee};
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
    /// let as_of = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
    /// assert_eq!(employee.work_years(as_of), 2);
    /// ```
    pub fn work_years(&self, as_of: NaiveDate) -> u32 {
        if as_of < self.hire_date {
            return 0;
        }
        let mut years = as_of.year() - self.hire_date.year();
        if (as_of.month(), as_of.day()) < (self.hire_date.month(), self.hire_date.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Returns the annual leave entitlement for the employee's tenure.
    ///
    /// Under one year: 0 days; under three: 5; under five: 10; otherwise 15.
    pub fn entitled_annual_leave(&self, as_of: NaiveDate) -> u32 {
        match self.work_years(as_of) {
            0 => 0,
            1..=2 => 5,
            3..=4 => 10,
            _ => 15,
        }
    }
}
