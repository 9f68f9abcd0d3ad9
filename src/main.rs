//! seawatch CLI entrypoint.
//!
//! Parse args, run one acquisition and map the outcome to an exit status.
//! For programmatic use, prefer the library API (`seawatch::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
