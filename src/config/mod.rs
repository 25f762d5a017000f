//! Configuration loading and management for the leave engine.
//!
//! This module loads company metadata and the employee roster from YAML
//! files. The loaded roster doubles as the engine's balance provider.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/demo").unwrap();
//! println!("Loaded roster for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyConfig, CompanyMetadata, EmployeeRecord, RosterConfig};
