//! # Indicator Module
//!
//! The scored policy dimensions and their numeric building blocks.
//!
//! - [`Score`]: integer `0..=100`, unrepresentable outside the range.
//! - [`Weight`]: basis points `0..=10000`; a full indicator set sums to
//!   exactly `10000`.
//! - [`Indicator`]: one dimension with its weight, grade and score. Grade and
//!   score are only changed together so they never disagree.
//! - [`IndicatorSet`]: a validated, ordered collection of indicators.

use crate::band::{Grade, grade_to_score, score_to_grade};
use crate::error::CoreError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SCORE
// =============================================================================

/// An indicator score between 0 and 100 inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Score = Score(0);
    /// Highest possible score.
    pub const MAX: Score = Score(100);

    /// Create a score, rejecting values above 100.
    pub fn new(value: u32) -> Result<Self, CoreError> {
        if value > u32::from(Self::MAX.0) {
            return Err(CoreError::ScoreOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Create a score, clamping values above 100.
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        Self(value.min(u32::from(Self::MAX.0)) as u8)
    }

    /// The score as an integer.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Score {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        u32::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// WEIGHT
// =============================================================================

/// Basis points in a whole (1.0).
pub const WEIGHT_SCALE: u32 = 10_000;

/// Indicator weight in basis points (1 bp = 0.0001).
///
/// Serialized as a fraction of one, e.g. `0.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(u16);

impl Weight {
    /// Create a weight from basis points, rejecting values above 10000.
    pub fn from_bp(bp: u32) -> Result<Self, CoreError> {
        if bp > WEIGHT_SCALE {
            return Err(CoreError::WeightOutOfRange(bp));
        }
        Ok(Self(bp as u16))
    }

    /// Create a weight from whole percent, clamping at 100.
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self(percent as u16 * 100)
    }

    /// The weight in basis points.
    #[must_use]
    pub const fn bp(self) -> u32 {
        self.0 as u32
    }

    /// The weight as a fraction of one.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / f64::from(WEIGHT_SCALE)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_fraction())
    }
}

// =============================================================================
// DIMENSION
// =============================================================================

/// The five policy dimensions rated by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Immigration,
    Economy,
    Foreign,
    Domestic,
    Social,
}

impl Dimension {
    /// All dimensions in survey order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Immigration,
        Dimension::Economy,
        Dimension::Foreign,
        Dimension::Domestic,
        Dimension::Social,
    ];

    /// Stable identifier used as the indicator key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immigration => "immigration",
            Self::Economy => "economy",
            Self::Foreign => "foreign",
            Self::Domestic => "domestic",
            Self::Social => "social",
        }
    }

    /// Short title of the dimension.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Immigration => "Immigration Policy",
            Self::Economy => "Economic Management",
            Self::Foreign => "Foreign Policy",
            Self::Domestic => "Domestic Policy",
            Self::Social => "Social Policy",
        }
    }

    const fn subtitle(self) -> &'static str {
        match self {
            Self::Immigration => "How the government handles immigrants in the U.S.",
            Self::Economy => "How the government manages the economy",
            Self::Foreign => "How the U.S. interacts with other countries",
            Self::Domestic => "How the government acts within the U.S.",
            Self::Social => "How the government ensures & promotes citizen's rights",
        }
    }

    const fn default_weight(self) -> Weight {
        match self {
            Self::Immigration | Self::Foreign | Self::Social => Weight::from_percent(20),
            Self::Economy => Weight::from_percent(15),
            Self::Domestic => Weight::from_percent(25),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownIndicator(s.to_string()))
    }
}

// =============================================================================
// INDICATOR
// =============================================================================

/// A single rated dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub id: Dimension,
    pub name: String,
    pub description: String,
    pub weight: Weight,
    grade: Grade,
    score: Score,
}

impl Indicator {
    /// Create an indicator at the initial rating: grade A, score 100.
    #[must_use]
    pub fn new(id: Dimension, name: impl Into<String>, weight: Weight) -> Self {
        Self {
            id,
            name: name.into(),
            description: format!("How would you grade the administration on {}?", id.title()),
            weight,
            grade: Grade::A,
            score: Score::MAX,
        }
    }

    /// The survey's standard indicator for a dimension.
    #[must_use]
    pub fn standard(id: Dimension) -> Self {
        Self::new(
            id,
            format!("{} - {}", id.title(), id.subtitle()),
            id.default_weight(),
        )
    }

    /// Current grade.
    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Pick a grade; the score moves to the bottom of the grade's range.
    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = grade;
        self.score = grade_to_score(grade);
    }

    /// Set a score; the grade follows the band the score falls in.
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
        self.grade = score_to_grade(score);
    }

    /// Score multiplied by weight, in ten-thousandths of a point.
    #[must_use]
    pub fn weighted(&self) -> u32 {
        u32::from(self.score.value()).saturating_mul(self.weight.bp())
    }
}

// =============================================================================
// INDICATOR SET
// =============================================================================

/// An ordered set of indicators whose weights sum to exactly 1.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndicatorSet {
    indicators: Vec<Indicator>,
}

impl IndicatorSet {
    /// Validate and wrap a list of indicators.
    ///
    /// Fails on a repeated dimension or when the weights do not add up to
    /// 10000 bp.
    pub fn new(indicators: Vec<Indicator>) -> Result<Self, CoreError> {
        let mut seen = Vec::with_capacity(indicators.len());
        let mut total: u32 = 0;

        for indicator in &indicators {
            if seen.contains(&indicator.id) {
                return Err(CoreError::DuplicateIndicator(indicator.id));
            }
            seen.push(indicator.id);
            total = total.saturating_add(indicator.weight.bp());
        }

        if total != WEIGHT_SCALE {
            return Err(CoreError::WeightSum(total));
        }

        Ok(Self { indicators })
    }

    /// Get an indicator by dimension.
    #[must_use]
    pub fn get(&self, id: Dimension) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// Get a mutable indicator by dimension.
    pub fn get_mut(&mut self, id: Dimension) -> Option<&mut Indicator> {
        self.indicators.iter_mut().find(|i| i.id == id)
    }

    /// Iterate in set order.
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }

    /// The indicators as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Indicator] {
        &self.indicators
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

impl Default for IndicatorSet {
    /// The five survey dimensions with their standard weights.
    fn default() -> Self {
        Self {
            indicators: Dimension::ALL.into_iter().map(Indicator::standard).collect(),
        }
    }
}

impl From<IndicatorSet> for Vec<Indicator> {
    fn from(set: IndicatorSet) -> Self {
        set.indicators
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn score_rejects_and_clamps() {
        assert!(Score::new(100).is_ok());
        assert_eq!(Score::new(101), Err(CoreError::ScoreOutOfRange(101)));
        assert_eq!(Score::saturating(250), Score::MAX);
        assert_eq!(Score::saturating(7).value(), 7);
    }

    #[test]
    fn score_deserialization_validates() {
        let ok: Score = serde_json::from_str("42").unwrap();
        assert_eq!(ok.value(), 42);
        assert!(serde_json::from_str::<Score>("101").is_err());
        assert!(serde_json::from_str::<Score>("-1").is_err());
    }

    #[test]
    fn weight_conversions() {
        assert_eq!(Weight::from_percent(15).bp(), 1500);
        assert_eq!(Weight::from_percent(200).bp(), 10_000);
        assert!(Weight::from_bp(10_001).is_err());
        assert_eq!(serde_json::to_string(&Weight::from_percent(20)).unwrap(), "0.2");
    }

    #[test]
    fn default_set_weights_sum_to_one() {
        let set = IndicatorSet::default();
        assert_eq!(set.len(), 5);
        let total: u32 = set.iter().map(|i| i.weight.bp()).sum();
        assert_eq!(total, WEIGHT_SCALE);
        assert!(IndicatorSet::new(set.clone().into()).is_ok());
    }

    #[test]
    fn default_indicators_start_at_a_100() {
        for indicator in IndicatorSet::default().iter() {
            assert_eq!(indicator.grade(), Grade::A);
            assert_eq!(indicator.score(), Score::MAX);
        }
    }

    #[test]
    fn standard_names_and_descriptions() {
        let economy = Indicator::standard(Dimension::Economy);
        assert_eq!(
            economy.name,
            "Economic Management - How the government manages the economy"
        );
        assert_eq!(
            economy.description,
            "How would you grade the administration on Economic Management?"
        );
    }

    #[test]
    fn set_rejects_bad_weights() {
        let indicators = vec![
            Indicator::new(Dimension::Immigration, "a", Weight::from_percent(50)),
            Indicator::new(Dimension::Economy, "b", Weight::from_percent(40)),
        ];
        assert_eq!(IndicatorSet::new(indicators), Err(CoreError::WeightSum(9000)));
    }

    #[test]
    fn set_rejects_duplicates() {
        let indicators = vec![
            Indicator::new(Dimension::Social, "a", Weight::from_percent(50)),
            Indicator::new(Dimension::Social, "b", Weight::from_percent(50)),
        ];
        assert_eq!(
            IndicatorSet::new(indicators),
            Err(CoreError::DuplicateIndicator(Dimension::Social))
        );
    }

    #[test]
    fn grade_and_score_stay_consistent() {
        let mut indicator = Indicator::standard(Dimension::Foreign);

        indicator.set_grade(Grade::B);
        assert_eq!(indicator.score().value(), 61);

        indicator.set_score(Score::new(20).unwrap());
        assert_eq!(indicator.grade(), Grade::F);

        indicator.set_score(Score::new(21).unwrap());
        assert_eq!(indicator.grade(), Grade::D);
    }

    #[test]
    fn dimension_parsing() {
        assert_eq!("Economy".parse::<Dimension>().unwrap(), Dimension::Economy);
        assert!("weather".parse::<Dimension>().is_err());
    }

    #[test]
    fn indicator_serializes_for_results_view() {
        let json = serde_json::to_value(Indicator::standard(Dimension::Domestic)).unwrap();
        assert_eq!(json["id"], "domestic");
        assert_eq!(json["grade"], "A");
        assert_eq!(json["score"], 100);
        assert_eq!(json["weight"], 0.25);
    }
}
