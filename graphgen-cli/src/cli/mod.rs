//! Command-line interface orchestration for graphgen.
//!
//! The CLI offers a `generate` command that builds one random graph and
//! renders it as renderer-ready JSON or as a short text summary.

mod commands;
mod outcome;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, OutputFormat, render_summary,
    run_cli,
};
pub use outcome::{Failure, classify_failure};
