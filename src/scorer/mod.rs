pub mod classifier;
pub mod engine;
pub mod loader;
pub mod normalizer;
pub mod rounding;
pub mod scaling;
pub mod tally;
pub mod types;

pub use self::loader::{ConfigLoader, ConfigSource, LoadedConfig};
pub use self::normalizer::{Answer, PresenceVector, PresenceVectors};
pub use self::types::{Axis, AxisValues, DiscPercentages, DiscResult, DiscScores, StylePair};

use crate::config::DiscConfig;
use crate::error::DfResult;
use std::sync::Arc;

/// Immutable scoring configuration plus the pipeline that runs over it.
///
/// Cloning is cheap and every call allocates its own working state, so one
/// engine can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: Arc<DiscConfig>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(DiscConfig::default())
    }
}

impl ScoringEngine {
    /// Wraps an already-loaded configuration. The caller is responsible for
    /// having validated it; [`ConfigLoader`] only ever hands out valid ones.
    pub fn new(config: DiscConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn from_loader(loader: &ConfigLoader) -> Self {
        Self::new(loader.load().config)
    }

    pub fn config(&self) -> &DiscConfig {
        &self.config
    }

    /// Scores one 48-answer sheet.
    pub fn compute_disc(&self, answers: &[Answer]) -> DfResult<DiscResult> {
        let presence = normalizer::normalize(answers)?;
        Ok(self.compute_from_presence(&presence))
    }

    /// Scores already-built presence vectors.
    pub fn compute_from_presence(&self, presence: &PresenceVectors) -> DiscResult {
        engine::score_presence(&self.config, presence)
    }
}
