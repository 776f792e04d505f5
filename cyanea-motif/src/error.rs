//! Structured error types for graph and path construction.
//!
//! Evaluation itself never fails: an unmatched signature or a false predicate
//! simply leaves bits unset. Errors only surface while assembling the inputs.

use thiserror::Error;

/// Unified error type for `cyanea-motif` construction APIs.
#[derive(Debug, Error)]
pub enum MotifError {
    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Inconsistent graph context (dangling ids, unbonded ring members, ...)
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Path whose atoms and bonds do not describe a walk
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Bit name not present in the fingerprint catalogue
    #[error("unknown fingerprint bit: {0}")]
    UnknownBit(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MotifError>;
