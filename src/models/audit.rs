//! Audit records for rule evaluations.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

impl AuditStep {
    /// Creates an audit step.
    pub fn new(
        step_number: u32,
        rule_id: impl Into<String>,
        rule_name: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            step_number,
            rule_id: rule_id.into(),
            rule_name: rule_name.into(),
            input,
            output,
            reasoning: reasoning.into(),
        }
    }
}
