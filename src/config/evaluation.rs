use super::traits::ConfigSection;
use crate::error::FloraError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Evaluate query pairs on the rayon thread pool
    pub parallel: bool,
    /// Pair lists shorter than this are always evaluated sequentially
    pub parallel_threshold: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 1024,
        }
    }
}

impl EvaluationConfig {
    pub fn use_parallel(&self, num_pairs: usize) -> bool {
        self.parallel && num_pairs >= self.parallel_threshold
    }
}

impl ConfigSection for EvaluationConfig {
    fn section_name() -> &'static str {
        "evaluation"
    }

    fn validate(&self) -> Result<(), FloraError> {
        if self.parallel_threshold == 0 {
            return Err(FloraError::Configuration(
                "Parallel threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
