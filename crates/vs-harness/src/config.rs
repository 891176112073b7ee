//! Harness configuration.

use serde::{Deserialize, Serialize};
use vs_rng::Generator;

use crate::error::ConfigError;

/// Seed of the reference configuration.
pub const DEFAULT_SEED: u32 = 11;

/// Dataset length of the reference configuration.
pub const DEFAULT_SIZE: usize = 32_768;

/// Elements shown on each side of a mismatch in diagnostics.
pub const DEFAULT_CONTEXT: usize = 3;

/// Everything that determines a harness run.
///
/// Identical configurations always generate identical datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Seed for the value source
    pub seed: u32,
    /// Number of elements in the dataset
    pub size: usize,
    /// Pseudo-random algorithm filling the dataset
    pub generator: Generator,
    /// Run both routines concurrently on their own buffers
    pub parallel: bool,
    /// Diagnostic window around a mismatch
    pub context: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size: DEFAULT_SIZE,
            generator: Generator::default(),
            parallel: false,
            context: DEFAULT_CONTEXT,
        }
    }
}

impl HarnessConfig {
    /// Parse a JSON configuration; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        Ok(())
    }
}
