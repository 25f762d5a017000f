//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::rules::{BalanceProvider, LeaveBalance};

use super::types::{CompanyConfig, CompanyMetadata, EmployeeRecord, RosterConfig};

/// Loads and provides access to company configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and serves employee lookups and leave balances.
///
/// # Directory Structure
///
/// ```text
/// config/demo/
/// ├── company.yaml    # Company metadata
/// └── employees.yaml  # Employee roster with leave usage
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo").unwrap();
/// let record = loader.find_employee("TEC20220").unwrap();
/// println!("Found {}", record.employee.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The roster is empty
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;

        let roster_path = path.join("employees.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;
        if roster.employees.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no employees found)", roster_path.display()),
            });
        }

        Ok(Self {
            config: CompanyConfig::new(metadata, roster.employees),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Gets an employee record by ID.
    pub fn get_employee(&self, id: &str) -> EngineResult<&EmployeeRecord> {
        self.config
            .employees()
            .iter()
            .find(|record| record.employee.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                identifier: id.to_string(),
            })
    }

    /// Finds an employee by exact name, falling back to ID.
    ///
    /// The identifier is trimmed; IDs are matched case-insensitively.
    pub fn find_employee(&self, identifier: &str) -> EngineResult<&EmployeeRecord> {
        let trimmed = identifier.trim();
        let employees = self.config.employees();

        employees
            .iter()
            .find(|record| record.employee.name == trimmed)
            .or_else(|| {
                let id = trimmed.to_uppercase();
                employees.iter().find(|record| record.employee.id == id)
            })
            .ok_or_else(|| EngineError::EmployeeNotFound {
                identifier: trimmed.to_string(),
            })
    }

    /// Gets the daily salary on record for an employee.
    pub fn daily_salary(&self, id: &str) -> EngineResult<Option<Decimal>> {
        Ok(self.get_employee(id)?.daily_salary)
    }
}

impl BalanceProvider for ConfigLoader {
    fn leave_balance(&self, employee_id: &str) -> EngineResult<LeaveBalance> {
        Ok(self.get_employee(employee_id)?.leave_balance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/demo"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.company().code, "DEMO");
        assert_eq!(loader.config().employees().len(), 8);
    }

    #[test]
    fn test_get_employee_by_id() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let record = loader.get_employee("FIN20200").unwrap();

        assert_eq!(record.employee.name, "Qian Jin");
        assert_eq!(record.employee.department, Department::Finance);
        assert_eq!(record.annual_leave, 12);
        assert_eq!(record.used_sick_leave, 5);
    }

    #[test]
    fn test_find_employee_prefers_name_then_id() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let by_name = loader.find_employee("  Zhang Wei ").unwrap();
        assert_eq!(by_name.employee.id, "TEC20220");

        let by_id = loader.find_employee("tec20230").unwrap();
        assert_eq!(by_id.employee.name, "Wang Qiang");
    }

    #[test]
    fn test_find_unknown_employee_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.find_employee("Nobody") {
            Err(EngineError::EmployeeNotFound { identifier }) => {
                assert_eq!(identifier, "Nobody");
            }
            other => panic!("Expected EmployeeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_balance_provider_derives_allowances() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let balance = loader.leave_balance("SAL20210").unwrap();

        assert_eq!(balance.remaining_annual, 12);
        assert_eq!(balance.available_sick, 27);
        assert_eq!(balance.available_personal, 8);
    }

    #[test]
    fn test_daily_salary_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(
            loader.daily_salary("TEC20220").unwrap(),
            Some(Decimal::from_str("800.00").unwrap())
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
