//! Errors raised while configuring a visualisation.
//!
//! The numeric crates never fail; they report missing roots as `None`.
//! Everything here is a rejected parameter.

use thiserror::Error;

/// Errors that can occur when building or reconfiguring a [`crate::Visualizer`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VizError {
    #[error("{0} is not a prime")]
    NotPrime(u64),

    #[error("prime {0} is too large to tabulate")]
    PrimeTooLarge(u64),

    #[error("precision power must be at least 1, got {0}")]
    InvalidPower(u32),

    #[error("{prime}^{power} does not fit in 64 bits")]
    ModulusOverflow { prime: u64, power: u32 },

    #[error("integer range 0..={0} is larger than a frame can hold")]
    RangeTooLarge(u64),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("configuration parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        VizError::Json(err.to_string())
    }
}

/// Result alias for configuration and orchestration.
pub type Result<T> = std::result::Result<T, VizError>;
