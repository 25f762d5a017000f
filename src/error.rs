//! Error types for the leave rules engine.
//!
//! Policy outcomes (cap exceeded, short notice, low balance) are data and
//! travel inside [`crate::models::ValidationResult`]. The errors here cover
//! lookups that cannot produce a result at all and configuration faults.

use thiserror::Error;

/// The main error type for the leave rules engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::PolicyNotFound {
///     leave_type: "sabbatical".to_string(),
/// };
/// assert_eq!(error.to_string(), "invalid leave type: sabbatical");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The leave type code is not in the catalog.
    #[error("invalid leave type: {leave_type}")]
    PolicyNotFound {
        /// The code that was looked up.
        leave_type: String,
    },

    /// No employee matched the given name or ID.
    #[error("Employee not found: {identifier}")]
    EmployeeNotFound {
        /// The name or ID that was looked up.
        identifier: String,
    },

    /// A leave request was structurally inconsistent.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay calculation could not be performed.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
