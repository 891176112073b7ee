//! verify-sort
//!
//! Sorts two copies of a seeded dataset with a reference and a candidate
//! routine and reports the first index where the outputs differ.
//!
//! Exit status: 0 equivalent, 1 mismatch, 2 error. `--legacy-exit-codes`
//! swaps the first two: 1 equivalent, 0 mismatch.

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    match cli::execute(&args) {
        Ok(report) => {
            cli::print_outcome(&args, &report);
            ExitCode::from(cli::exit_code(
                report.is_equivalent(),
                args.legacy_exit_codes,
            ))
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(cli::EXIT_ERROR)
        }
    }
}
