//! # Error Module
//!
//! Errors raised while building or mutating scoring inputs.
//!
//! The scoring functions themselves are total and never fail; every error
//! here is a caller or configuration mistake caught at construction time.

use crate::indicator::Dimension;
use thiserror::Error;

/// Errors from the scoring core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A raw score fell outside `0..=100`.
    #[error("score {0} is outside the range 0..=100")]
    ScoreOutOfRange(u32),

    /// A composite score was not a decimal in `0..=100` with at most four
    /// fractional digits.
    #[error("invalid composite score: {0:?} (expected 0..=100, at most 4 decimals)")]
    InvalidComposite(String),

    /// A raw weight fell outside `0..=10000` basis points.
    #[error("weight {0} bp is outside the range 0..=10000")]
    WeightOutOfRange(u32),

    /// Indicator weights did not add up to exactly 1.0.
    #[error("indicator weights sum to {0} bp, expected 10000")]
    WeightSum(u32),

    /// The same dimension appeared twice in one indicator set.
    #[error("duplicate indicator: {0}")]
    DuplicateIndicator(Dimension),

    /// The dimension is not part of the active indicator set.
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    /// A grade letter could not be parsed.
    #[error("invalid grade: {0:?} (expected one of A, B, C, D, F)")]
    InvalidGrade(String),

    /// A demographic value could not be parsed.
    #[error("invalid {field}: {value:?}")]
    InvalidDemographic {
        /// Which demographic field was rejected.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Contact details for an analysis request were unusable.
    #[error("invalid contact details: {0}")]
    InvalidContact(String),
}
