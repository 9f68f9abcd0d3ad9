//! Command Line Interface (CLI) layer for seawatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges arguments with the
//! environment and drives one acquisition through `seawatch::api`.
//!
//! If you are embedding seawatch into another application, prefer using
//! the high-level `seawatch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{report_failure, run};
