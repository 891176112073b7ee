//! Differential equivalence harness for in-place sorting routines.
//!
//! Generates one seeded dataset, hands identical copies to a reference and a
//! candidate routine, and reports the first index at which their outputs
//! differ. It checks equivalence only: two routines that produce the same
//! wrong order still pass.
//!
//! ```no_run
//! use vs_harness::{Harness, HarnessConfig, Named};
//!
//! let harness = Harness::new(HarnessConfig::default())?;
//! let reference = Named::new("std", |d: &mut [i32]| d.sort());
//! let candidate = Named::new("unstable", |d: &mut [i32]| d.sort_unstable());
//! let report = harness.run(&reference, &candidate)?;
//! assert!(report.is_equivalent());
//! # Ok::<(), vs_harness::HarnessError>(())
//! ```

pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod report;
pub mod routine;

pub use compare::{Comparison, Mismatch, MismatchContext, compare};
pub use config::{DEFAULT_CONTEXT, DEFAULT_SEED, DEFAULT_SIZE, HarnessConfig};
pub use dataset::Dataset;
pub use error::{ConfigError, HarnessError};
pub use harness::{Harness, invoke};
pub use report::{RoutineRun, RunReport};
pub use routine::{Named, RoutineError, SortRoutine};
pub use vs_rng::Generator;
