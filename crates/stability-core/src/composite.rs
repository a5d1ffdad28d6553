//! # Composite Module
//!
//! Aggregation of weighted indicator scores.
//!
//! The composite is `Σ score × weight`. Scores are whole points and weights
//! are basis points, so the sum is carried exactly as an integer count of
//! ten-thousandths of a point. `58.0` is stored as `580_000`.

use crate::band::{Band, Grade, StabilityLabel};
use crate::error::CoreError;
use crate::indicator::{Indicator, Score, WEIGHT_SCALE};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// COMPOSITE SCORE
// =============================================================================

/// A composite score in fixed point (ten-thousandths of a point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompositeScore(u32);

impl CompositeScore {
    /// Raw units per whole point.
    pub const SCALE: u32 = WEIGHT_SCALE;

    /// The highest composite a valid indicator set can produce.
    pub const MAX: CompositeScore = CompositeScore(100 * WEIGHT_SCALE);

    /// Wrap a raw fixed-point value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// A composite of exactly `points` whole points.
    #[must_use]
    pub const fn from_points(points: u8) -> Self {
        Self(points as u32 * Self::SCALE)
    }

    /// The raw fixed-point value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The value rounded half-up to tenths, as `(whole, tenths)`.
    #[must_use]
    pub const fn tenths(self) -> (u32, u32) {
        let tenths = self.0.saturating_add(Self::SCALE / 20) / (Self::SCALE / 10);
        (tenths / 10, tenths % 10)
    }

    /// The value as a float, for serialization and display.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::SCALE)
    }
}

impl From<Score> for CompositeScore {
    fn from(score: Score) -> Self {
        Self::from_points(score.value())
    }
}

impl fmt::Display for CompositeScore {
    /// Formats with one decimal place, e.g. `58.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, tenth) = self.tenths();
        write!(f, "{whole}.{tenth}")
    }
}

impl FromStr for CompositeScore {
    type Err = CoreError;

    /// Parses a decimal such as `91.15` exactly, without going through `f64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidComposite(s.to_string());
        let text = s.trim();
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 4 {
            return Err(invalid());
        }

        let whole: u32 = whole.parse().map_err(|_| invalid())?;
        let fraction: u32 = format!("{fraction:0<4}").parse().map_err(|_| invalid())?;

        whole
            .checked_mul(Self::SCALE)
            .and_then(|raw| raw.checked_add(fraction))
            .filter(|raw| *raw <= Self::MAX.0)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Serialize for CompositeScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

// =============================================================================
// COMPOSITE RESULT
// =============================================================================

/// Composite score together with its grade and stability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResult {
    pub composite_score: CompositeScore,
    pub grade: Grade,
    pub label: StabilityLabel,
}

impl CompositeResult {
    /// Classify a composite score.
    #[must_use]
    pub fn from_score(composite_score: CompositeScore) -> Self {
        let band = Band::for_composite(composite_score);
        Self {
            composite_score,
            grade: band.grade,
            label: band.label,
        }
    }

    /// Description text of the label.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.label.description()
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Weighted sum of indicator scores.
///
/// Weights are assumed to sum to 1.0; that is checked when an
/// [`IndicatorSet`](crate::IndicatorSet) is built, not here.
#[must_use]
pub fn composite_score(indicators: &[Indicator]) -> CompositeScore {
    let raw = indicators
        .iter()
        .fold(0u32, |total, indicator| total.saturating_add(indicator.weighted()));
    CompositeScore(raw)
}

/// Composite score of `indicators`, classified.
#[must_use]
pub fn evaluate(indicators: &[Indicator]) -> CompositeResult {
    CompositeResult::from_score(composite_score(indicators))
}

// =============================================================================
// TESTS
// =============================================================================
