//! Application state for the leave engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::rules::RulesEngine;

/// Shared application state.
///
/// Holds the rules engine, backed by the loaded roster.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RulesEngine<ConfigLoader>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            engine: Arc::new(RulesEngine::new(config)),
        }
    }

    /// Returns the rules engine.
    pub fn engine(&self) -> &RulesEngine<ConfigLoader> {
        &self.engine
    }

    /// Returns the loaded roster.
    pub fn config(&self) -> &ConfigLoader {
        self.engine.balances()
    }
}
