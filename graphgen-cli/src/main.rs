//! `graphgen` binary.
//!
//! Generates one graph per invocation and streams it to stdout. Diagnostics
//! go to stderr through `tracing`, so the JSON on stdout stays pipeable.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use graphgen_cli::{
    cli::{Cli, ExecutionSummary, Failure, classify_failure, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{debug, error};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = run() else {
        return ExitCode::SUCCESS;
    };
    match classify_failure(&err) {
        Failure::ClosedOutput => {
            debug!("stdout closed before the graph was fully written");
            ExitCode::SUCCESS
        }
        Failure::Failed(code) => {
            error!(error = %format!("{err:#}"), code, "command execution failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to generate graph")?;
    write_stdout(&summary)
}

fn write_stdout(summary: &ExecutionSummary) -> Result<()> {
    let mut writer = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut writer).context("failed to write graph")?;
    writer.flush().context("failed to flush stdout")
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("graphgen: cannot initialise logging: {err}");
}
