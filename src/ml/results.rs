use std::collections::HashMap;

use crate::models::RawBundle;

/// Prediction index → raw recommendation bundle
#[cfg_attr(test, mockall::automock)]
pub trait ResultsTable: Send + Sync {
    fn lookup(&self, combination_id: u32) -> Option<RawBundle>;
}

/// Results keyed through the model's `idx_to_combination` list
#[derive(Debug, Clone, Default)]
pub struct CombinationTable {
    combinations: Vec<String>,
    bundles: HashMap<String, RawBundle>,
}

impl CombinationTable {
    pub fn new(combinations: Vec<String>, bundles: HashMap<String, RawBundle>) -> Self {
        Self {
            combinations,
            bundles,
        }
    }

    /// Combination key for a prediction index
    pub fn combination(&self, combination_id: u32) -> Option<&str> {
        self.combinations
            .get(combination_id as usize)
            .map(String::as_str)
    }
}

impl ResultsTable for CombinationTable {
    fn lookup(&self, combination_id: u32) -> Option<RawBundle> {
        self.combination(combination_id)
            .and_then(|key| self.bundles.get(key))
            .cloned()
    }
}
