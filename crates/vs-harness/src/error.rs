//! Harness error types.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::routine::RoutineError;

/// Configuration rejected before any generation or sorting work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dataset size must be greater than zero")]
    EmptyDataset,

    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that abort a harness run.
///
/// A content mismatch is not an error; it is reported through
/// [`Comparison`](crate::Comparison).
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to allocate dataset of {size} elements")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("routine `{name}` failed")]
    Routine {
        name: String,
        #[source]
        source: RoutineError,
    },
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
