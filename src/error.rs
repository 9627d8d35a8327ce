// clampcore/src/error.rs

use thiserror::Error;

/// Errors the computation core can hand back to its caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeError {
    /// Bounds arrived inverted. This is a configuration bug; surface it
    /// immediately instead of swapping the ends.
    #[error("invalid bounds: low {low} > high {high}")]
    InvalidRange { low: i64, high: i64 },

    /// `compute` ran before `initialize`. Recoverable: initialize and retry.
    #[error("compute called before initialize")]
    NotInitialized,
}

pub type ComputeResult<T> = Result<T, ComputeError>;
