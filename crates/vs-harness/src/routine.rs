//! The sorting routine contract.
//!
//! A routine receives a mutable slice and rearranges it in place. Because it
//! only ever sees a slice it cannot resize, reallocate or replace the buffer,
//! and it cannot keep a reference past the call.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Failures a routine can report instead of sorting.
#[derive(Debug, Error)]
pub enum RoutineError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("process exited with {0}")]
    Exited(ExitStatus),

    #[error("expected {expected} values, got {actual}")]
    LengthChanged { expected: usize, actual: usize },

    #[error("unparsable value on output line {line}: {value:?}")]
    Parse { line: usize, value: String },
}

/// An in-place sorting implementation.
///
/// Must be deterministic given identical input. Any
/// `Fn(&mut [i32]) + Send + Sync` closure qualifies.
pub trait SortRoutine: Send + Sync {
    /// Sort `data` in place.
    fn sort(&self, data: &mut [i32]) -> Result<(), RoutineError>;

    /// Label used in logs and reports.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> SortRoutine for F
where
    F: Fn(&mut [i32]) + Send + Sync,
{
    fn sort(&self, data: &mut [i32]) -> Result<(), RoutineError> {
        self(data);
        Ok(())
    }
}

/// A closure with a name attached.
pub struct Named<F> {
    name: String,
    func: F,
}

impl<F> Named<F>
where
    F: Fn(&mut [i32]) + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> SortRoutine for Named<F>
where
    F: Fn(&mut [i32]) + Send + Sync,
{
    fn sort(&self, data: &mut [i32]) -> Result<(), RoutineError> {
        (self.func)(data);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_routine() {
        let routine = |data: &mut [i32]| data.sort_unstable();
        let mut data = [3, 1, 2];
        routine.sort(&mut data).unwrap();
        assert_eq!(data, [1, 2, 3]);
        assert_eq!(SortRoutine::name(&routine), "anonymous");
    }

    #[test]
    fn test_named_routine() {
        let routine = Named::new("reverse", |data: &mut [i32]| data.reverse());
        let mut data = [1, 2, 3];
        routine.sort(&mut data).unwrap();
        assert_eq!(data, [3, 2, 1]);
        assert_eq!(routine.name(), "reverse");
    }

    #[test]
    fn test_boxed_routine_keeps_name() {
        let boxed: Box<dyn SortRoutine> = Box::new(Named::new("std", |d: &mut [i32]| d.sort()));
        assert_eq!(boxed.name(), "std");
        let mut data = [2, 1];
        boxed.sort(&mut data).unwrap();
        assert_eq!(data, [1, 2]);
    }
}
