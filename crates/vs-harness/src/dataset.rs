//! Seeded input datasets.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vs_rng::Generator;

use crate::config::HarnessConfig;
use crate::error::{ConfigError, HarnessError, Result};

/// Fixed-length sequence of signed integers fed to both routines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    values: Vec<i32>,
}

impl Dataset {
    /// Fill `size` values from `generator` seeded with `seed`.
    ///
    /// Same seed, generator and size always give the same sequence.
    pub fn generate(seed: u32, size: usize, generator: Generator) -> Result<Self> {
        if size == 0 {
            return Err(ConfigError::EmptyDataset.into());
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|source| HarnessError::Allocation { size, source })?;

        let mut source = generator.source(seed);
        values.extend((0..size).map(|_| source.next_value()));
        debug!(seed, size, %generator, calls = source.calls(), "dataset generated");

        Ok(Self { values })
    }

    /// Generate the dataset described by `config`.
    pub fn from_config(config: &HarnessConfig) -> Result<Self> {
        Self::generate(config.seed, config.size, config.generator)
    }

    /// Split into two independent buffers with identical contents and order.
    ///
    /// The original buffer becomes the first copy, so only one extra
    /// allocation is made, and a failed one is reported rather than aborting.
    pub fn duplicate(self) -> Result<(Dataset, Dataset)> {
        let size = self.values.len();
        let mut copy = Vec::new();
        copy.try_reserve_exact(size)
            .map_err(|source| HarnessError::Allocation { size, source })?;
        copy.extend_from_slice(&self.values);
        Ok((self, Self { values: copy }))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Self { values }
    }
}

impl AsRef<[i32]> for Dataset {
    fn as_ref(&self) -> &[i32] {
        &self.values
    }
}
