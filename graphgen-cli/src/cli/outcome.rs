//! Classification of failed runs for the process exit path.

use std::io;

use graphgen_core::GraphGenError;

use super::CliError;

/// How a failed run should end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The reader closed stdout before all output was written.
    ClosedOutput,
    /// A genuine failure, carrying the stable error code when one exists.
    Failed(Option<&'static str>),
}

/// Walks the error chain of `err` to decide how the process should exit.
///
/// # Examples
/// ```
/// use std::io;
///
/// use graphgen_cli::cli::{Failure, classify_failure};
///
/// let err = anyhow::Error::new(io::Error::from(io::ErrorKind::BrokenPipe))
///     .context("failed to flush output");
/// assert_eq!(classify_failure(&err), Failure::ClosedOutput);
/// ```
#[must_use]
pub fn classify_failure(err: &anyhow::Error) -> Failure {
    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                return Failure::ClosedOutput;
            }
        }
        if let Some(CliError::Core(core)) = cause.downcast_ref::<CliError>() {
            return Failure::Failed(Some(core.code().as_str()));
        }
        if let Some(core) = cause.downcast_ref::<GraphGenError>() {
            return Failure::Failed(Some(core.code().as_str()));
        }
    }
    Failure::Failed(None)
}
