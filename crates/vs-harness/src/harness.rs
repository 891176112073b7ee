//! Run orchestration: generate, duplicate, invoke both routines, compare.

use std::time::Instant;

use tracing::{debug, info, info_span};

use crate::compare::{MismatchContext, compare};
use crate::config::HarnessConfig;
use crate::dataset::Dataset;
use crate::error::{HarnessError, Result};
use crate::report::{RoutineRun, RunReport};
use crate::routine::SortRoutine;

/// Hand `dataset` to `routine` to sort in place.
///
/// Returns the wall-clock time the routine took.
pub fn invoke<R>(routine: &R, dataset: &mut Dataset) -> Result<RoutineRun>
where
    R: SortRoutine + ?Sized,
{
    let name = routine.name().to_string();
    let start = Instant::now();
    routine
        .sort(dataset.as_mut_slice())
        .map_err(|source| HarnessError::Routine {
            name: name.clone(),
            source,
        })?;
    let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    debug!(routine = %name, elapsed_us, "routine finished");

    Ok(RoutineRun { name, elapsed_us })
}

/// Equivalence harness for one configuration.
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Validate `config` before any work is done.
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Generate this configuration's dataset.
    pub fn generate(&self) -> Result<Dataset> {
        Dataset::from_config(&self.config)
    }

    /// Run `reference` and `candidate` over identical copies and compare.
    ///
    /// A mismatch is a normal outcome carried in the report; `Err` means the
    /// run itself could not complete.
    pub fn run<R, C>(&self, reference: &R, candidate: &C) -> Result<RunReport>
    where
        R: SortRoutine + ?Sized,
        C: SortRoutine + ?Sized,
    {
        let span = info_span!(
            "run",
            seed = self.config.seed,
            size = self.config.size,
            generator = %self.config.generator,
        );
        let _guard = span.enter();

        let (mut ref_data, mut cand_data) = self.generate()?.duplicate()?;

        let (ref_run, cand_run) = if self.config.parallel {
            // Worker threads do not inherit the entered span.
            let (r, c) = rayon::join(
                || span.in_scope(|| invoke(reference, &mut ref_data)),
                || span.in_scope(|| invoke(candidate, &mut cand_data)),
            );
            (r?, c?)
        } else {
            let r = invoke(reference, &mut ref_data)?;
            let c = invoke(candidate, &mut cand_data)?;
            (r, c)
        };

        let comparison = compare(ref_data.as_slice(), cand_data.as_slice());
        let context = comparison.mismatch().map(|m| {
            MismatchContext::around(
                m,
                ref_data.as_slice(),
                cand_data.as_slice(),
                self.config.context,
            )
        });

        if comparison.is_equivalent() {
            info!(
                reference = %ref_run.name,
                candidate = %cand_run.name,
                "outputs are equivalent"
            );
        } else {
            info!(
                reference = %ref_run.name,
                candidate = %cand_run.name,
                %comparison,
                "outputs differ"
            );
        }

        Ok(RunReport {
            seed: self.config.seed,
            size: self.config.size,
            generator: self.config.generator,
            parallel: self.config.parallel,
            reference: ref_run,
            candidate: cand_run,
            comparison,
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Comparison;
    use crate::error::ConfigError;
    use crate::routine::{Named, RoutineError};

    struct Failing;

    impl SortRoutine for Failing {
        fn sort(&self, data: &mut [i32]) -> Result<(), RoutineError> {
            Err(RoutineError::LengthChanged {
                expected: data.len(),
                actual: 0,
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_new_rejects_empty_dataset() {
        let err = Harness::new(HarnessConfig::default().with_size(0)).unwrap_err();
        assert!(matches!(err, HarnessError::Config(ConfigError::EmptyDataset)));
    }

    #[test]
    fn test_invoke_sorts_in_place() {
        let mut data = Dataset::from(vec![3, -1, 2]);
        let run = invoke(&Named::new("std", |d: &mut [i32]| d.sort()), &mut data).unwrap();
        assert_eq!(data.as_slice(), &[-1, 2, 3]);
        assert_eq!(run.name, "std");
    }

    #[test]
    fn test_invoke_wraps_routine_error() {
        let mut data = Dataset::from(vec![1, 2]);
        let err = invoke(&Failing, &mut data).unwrap_err();
        match err {
            HarnessError::Routine { name, source } => {
                assert_eq!(name, "failing");
                assert!(matches!(source, RoutineError::LengthChanged { expected: 2, actual: 0 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_reports_context_on_mismatch() {
        let harness = Harness::new(HarnessConfig::default().with_size(64).with_context(2)).unwrap();
        let sort = Named::new("std", |d: &mut [i32]| d.sort_unstable());
        let reverse = Named::new("reverse", |d: &mut [i32]| {
            d.sort_unstable();
            d.reverse();
        });

        let report = harness.run(&sort, &reverse).unwrap();
        assert!(matches!(report.comparison, Comparison::Mismatch(m) if m.index == 0));
        let ctx = report.context.unwrap();
        assert_eq!(ctx.start, 0);
        assert_eq!(ctx.reference.len(), 3);
    }

    #[test]
    fn test_run_propagates_candidate_failure() {
        let harness = Harness::new(HarnessConfig::default().with_size(16)).unwrap();
        let sort = |d: &mut [i32]| d.sort();
        assert!(harness.run(&sort, &Failing).is_err());

        let parallel = Harness::new(HarnessConfig::default().with_size(16).with_parallel(true)).unwrap();
        assert!(parallel.run(&Failing, &sort).is_err());
    }
}
