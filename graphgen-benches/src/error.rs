//! Benchmark setup error type.

use graphgen_core::GraphGenError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator configuration or sizing failed.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GraphGenError),
}
