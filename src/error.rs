// src/error.rs

use thiserror::Error;

/// Fatal simulation errors. None of these is recoverable: a single-trajectory
/// run has no meaningful partial result once an invariant is broken.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// A process asked to suspend for zero days. Wakeups must land strictly
    /// in the future, otherwise the clock could stall.
    #[error("invalid suspend delay of {0} days (must be at least 1)")]
    InvalidDelay(u64),

    /// A sampling table failed to cover the drawn value. Tables are required
    /// to tile the whole draw span, so this means a misconfigured table.
    #[error("sampling table does not cover drawn value {0}")]
    TableCoverage(u32),

    /// The configuration failed validation before the run started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
