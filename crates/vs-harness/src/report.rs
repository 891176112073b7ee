//! Run reporting - human-readable summary and machine-readable JSON.

use serde::{Deserialize, Serialize};
use vs_rng::Generator;

use crate::compare::{Comparison, MismatchContext};

/// Timing and identity of one routine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineRun {
    pub name: String,
    pub elapsed_us: u64,
}

/// Verdict of a single harness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: u32,
    pub size: usize,
    pub generator: Generator,
    pub parallel: bool,
    pub reference: RoutineRun,
    pub candidate: RoutineRun,
    pub comparison: Comparison,
    /// Buffers around the mismatch, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<MismatchContext>,
}

impl RunReport {
    /// True if both buffers matched at every position.
    pub fn is_equivalent(&self) -> bool {
        self.comparison.is_equivalent()
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n============================================================");
        println!(
            "Equivalence: {} vs {}",
            self.reference.name, self.candidate.name
        );
        println!(
            "Seed: {}, Size: {}, Generator: {}{}",
            self.seed,
            self.size,
            self.generator,
            if self.parallel { " (parallel)" } else { "" }
        );
        println!(
            "Result: {}",
            if self.is_equivalent() { "PASS" } else { "FAIL" }
        );
        println!(
            "Time: {} {}us, {} {}us",
            self.reference.name,
            self.reference.elapsed_us,
            self.candidate.name,
            self.candidate.elapsed_us
        );

        if !self.is_equivalent() {
            println!("{}", self.comparison);
        }

        if let Some(ctx) = &self.context {
            println!("\nFrom index {}:", ctx.start);
            println!("  {:>12}: {:?}", self.reference.name, ctx.reference);
            println!("  {:>12}: {:?}", self.candidate.name, ctx.candidate);
        }

        println!("============================================================\n");
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Mismatch;

    fn report(comparison: Comparison) -> RunReport {
        RunReport {
            seed: 11,
            size: 8,
            generator: Generator::Glibc,
            parallel: false,
            reference: RoutineRun {
                name: "bubble".into(),
                elapsed_us: 3,
            },
            candidate: RoutineRun {
                name: "identity".into(),
                elapsed_us: 0,
            },
            comparison,
            context: None,
        }
    }

    #[test]
    fn test_json_contains_verdict() {
        let r = report(Comparison::Mismatch(Mismatch {
            index: 0,
            reference: 1,
            candidate: 2,
        }));
        assert!(!r.is_equivalent());
        let value: serde_json::Value = serde_json::from_str(&r.to_json()).unwrap();
        assert_eq!(value["comparison"]["status"], "mismatch");
        assert_eq!(value["generator"], "glibc");
        assert_eq!(value["reference"]["name"], "bubble");
        assert!(value.get("context").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let r = report(Comparison::Equivalent);
        let back: RunReport = serde_json::from_str(&r.to_json()).unwrap();
        assert_eq!(back, r);
    }
}
