//! Support library for the graphgen CLI binary.
//!
//! Exposes the command and logging modules so tests can drive generation
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
