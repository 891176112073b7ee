//! Sorting routines for the equivalence harness.
//!
//! Routines are picked by name: a [`Builtin`] name such as `bubble` or
//! `bubble-fast`, or `cmd:<program> [args...]` for an [`ExternalRoutine`].

mod builtin;
mod external;

pub use builtin::{Builtin, bubble_sort, bubble_sort_fast, insertion_sort};
pub use external::ExternalRoutine;

use core::fmt;
use core::str::FromStr;

use thiserror::Error;
use vs_harness::SortRoutine;

/// Prefix selecting an external program.
pub const COMMAND_PREFIX: &str = "cmd:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("unknown routine `{0}` (expected one of: {known}, or cmd:<program>)", known = Builtin::names().join(", "))]
    Unknown(String),

    #[error("`cmd:` needs a program to run")]
    EmptyCommand,
}

/// A parsed routine selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineSpec {
    Builtin(Builtin),
    External(ExternalRoutine),
}

impl RoutineSpec {
    /// Instantiate the routine.
    pub fn build(&self) -> Box<dyn SortRoutine> {
        match self {
            RoutineSpec::Builtin(b) => Box::new(*b),
            RoutineSpec::External(e) => Box::new(e.clone()),
        }
    }
}

impl FromStr for RoutineSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(command) = s.strip_prefix(COMMAND_PREFIX) {
            let mut words = command.split_whitespace().map(str::to_string);
            let program = words.next().ok_or(SpecError::EmptyCommand)?;
            return Ok(RoutineSpec::External(ExternalRoutine::new(
                program,
                words.collect(),
            )));
        }

        s.parse::<Builtin>()
            .map(RoutineSpec::Builtin)
            .map_err(|_| SpecError::Unknown(s.to_string()))
    }
}

impl fmt::Display for RoutineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutineSpec::Builtin(b) => write!(f, "{b}"),
            RoutineSpec::External(e) => write!(f, "{}", e.name()),
        }
    }
}
