//! Command-line surface: arguments, configuration precedence, verdict output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use vs_harness::{Generator, Harness, HarnessConfig, RunReport};
use vs_sorts::RoutineSpec;

/// Exit status when both outputs are identical.
pub const EXIT_EQUIVALENT: u8 = 0;
/// Exit status when the outputs differ.
pub const EXIT_MISMATCH: u8 = 1;
/// Exit status when the run could not complete.
pub const EXIT_ERROR: u8 = 2;

/// Check that two sorting routines produce identical output
#[derive(Parser, Debug)]
#[command(name = "verify-sort")]
#[command(author, version, about = "Sort two copies of a seeded dataset and report the first difference", long_about = None)]
pub struct Args {
    /// Seed for the dataset generator [default: 11]
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of elements to sort [default: 32768]
    #[arg(long)]
    pub size: Option<usize>,

    /// Value generator (glibc, chacha8) [default: glibc]
    #[arg(long)]
    pub generator: Option<Generator>,

    /// Reference routine: bubble, bubble-fast, insertion, std, identity or cmd:<program>
    #[arg(short = 'r', long, default_value = "bubble")]
    pub reference: RoutineSpec,

    /// Candidate routine, same syntax as --reference
    #[arg(short = 'c', long, default_value = "bubble-fast")]
    pub candidate: RoutineSpec,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run both routines concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Elements shown on each side of a mismatch in the summary and JSON report
    #[arg(long)]
    pub context: Option<usize>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Print a human-readable summary on stdout
    #[arg(long)]
    pub summary: bool,

    /// Invert the verdict status: exit 1 when equivalent, 0 on mismatch
    #[arg(long)]
    pub legacy_exit_codes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Merge defaults, the optional config file and flags, in that order.
    pub fn harness_config(&self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                HarnessConfig::from_json(&text)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => HarnessConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(generator) = self.generator {
            config.generator = generator;
        }
        if let Some(context) = self.context {
            config.context = context;
        }
        if self.parallel {
            config.parallel = true;
        }

        Ok(config)
    }
}

/// Build the harness and run both routines.
pub fn execute(args: &Args) -> Result<RunReport> {
    let harness = Harness::new(args.harness_config()?)?;
    let reference = args.reference.build();
    let candidate = args.candidate.build();
    let report = harness.run(reference.as_ref(), candidate.as_ref())?;
    Ok(report)
}

/// Emit the verdict: one stderr line on mismatch, plus any requested reports.
pub fn print_outcome(args: &Args, report: &RunReport) {
    if !report.is_equivalent() {
        eprintln!("{}", report.comparison);
    }
    if args.summary {
        report.print_summary();
    }
    if args.json {
        println!("{}", report.to_json());
    }
}

/// Process exit status for a verdict.
pub fn exit_code(equivalent: bool, legacy: bool) -> u8 {
    match (equivalent, legacy) {
        (true, false) => EXIT_EQUIVALENT,
        (false, false) => EXIT_MISMATCH,
        (true, true) => 1,
        (false, true) => 0,
    }
}
