//! # Band Module
//!
//! The single bucketing table of the scoring model.
//!
//! Every score in `0..=100` falls into exactly one [`Band`]. A band carries
//! the letter [`Grade`] a score receives and the [`StabilityLabel`] used to
//! describe a composite score. Both [`score_to_grade`] and [`interpret`]
//! consult [`BANDS`], so the two mappings cannot drift apart.
//!
//! Bounds are inclusive at the top: `20 → F`, `21 → D`.

use crate::composite::CompositeScore;
use crate::error::CoreError;
use crate::indicator::Score;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// GRADE
// =============================================================================

/// Letter grade given to a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// All grades, worst first.
    pub const ALL: [Grade; 5] = [Grade::F, Grade::D, Grade::C, Grade::B, Grade::A];

    /// The letter as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// The band this grade names.
    #[must_use]
    pub fn band(self) -> &'static Band {
        &BANDS[self.band_index()]
    }

    const fn band_index(self) -> usize {
        match self {
            Self::F => 0,
            Self::D => 1,
            Self::C => 2,
            Self::B => 3,
            Self::A => 4,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(CoreError::InvalidGrade(s.to_string())),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// STABILITY LABEL
// =============================================================================

/// Categorical interpretation of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StabilityLabel {
    #[serde(rename = "Very Unstable")]
    VeryUnstable,
    #[serde(rename = "Low Stability")]
    LowStability,
    #[serde(rename = "Moderate Stability")]
    ModerateStability,
    #[serde(rename = "Highly Stable")]
    HighlyStable,
    #[serde(rename = "Extremely Stable")]
    ExtremelyStable,
}

impl StabilityLabel {
    /// Human-readable label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryUnstable => "Very Unstable",
            Self::LowStability => "Low Stability",
            Self::ModerateStability => "Moderate Stability",
            Self::HighlyStable => "Highly Stable",
            Self::ExtremelyStable => "Extremely Stable",
        }
    }

    /// One-sentence description of the risk level.
    #[must_use]
    pub fn description(self) -> &'static str {
        BANDS
            .iter()
            .find(|band| band.label == self)
            .map(|band| band.description)
            .unwrap_or_default()
    }
}

impl fmt::Display for StabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// BAND TABLE
// =============================================================================

/// One row of the bucketing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Inclusive upper bound, in whole points.
    pub upper: u8,
    /// Grade for indicator scores inside the band.
    pub grade: Grade,
    /// Label for composite scores inside the band.
    pub label: StabilityLabel,
    /// Description shown next to the label.
    pub description: &'static str,
}

/// The bucketing table, ordered by ascending upper bound.
///
/// The last row must end at 100 so that every valid score is covered.
pub static BANDS: [Band; 5] = [
    Band {
        upper: 20,
        grade: Grade::F,
        label: StabilityLabel::VeryUnstable,
        description: "Critical risks that could lead to severe consequences.",
    },
    Band {
        upper: 40,
        grade: Grade::D,
        label: StabilityLabel::LowStability,
        description: "Significant risks with potential for major shifts.",
    },
    Band {
        upper: 60,
        grade: Grade::C,
        label: StabilityLabel::ModerateStability,
        description: "Noticeable risks that require attention.",
    },
    Band {
        upper: 80,
        grade: Grade::B,
        label: StabilityLabel::HighlyStable,
        description: "Some risks present, but manageable.",
    },
    Band {
        upper: 100,
        grade: Grade::A,
        label: StabilityLabel::ExtremelyStable,
        description: "Stable environment with minimal risks.",
    },
];

impl Band {
    /// Band containing an integer indicator score.
    #[must_use]
    pub fn for_score(score: Score) -> &'static Band {
        Self::for_composite(CompositeScore::from(score))
    }

    /// Band containing a composite score.
    ///
    /// Comparison happens on the exact fixed-point value, so `20.0001`
    /// already belongs to the second band.
    #[must_use]
    pub fn for_composite(score: CompositeScore) -> &'static Band {
        BANDS
            .iter()
            .find(|band| score <= CompositeScore::from_points(band.upper))
            .unwrap_or(&BANDS[BANDS.len() - 1])
    }
}

// =============================================================================
// GRADE RANGES
// =============================================================================

/// Inclusive score range covered by a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeRange {
    pub lower: Score,
    pub upper: Score,
}

impl GradeRange {
    /// Check whether a score falls inside the range.
    #[must_use]
    pub fn contains(&self, score: Score) -> bool {
        self.lower <= score && score <= self.upper
    }
}

/// Score range of a grade: one past the previous band's bound up to its own.
#[must_use]
pub fn grade_range(grade: Grade) -> GradeRange {
    let index = grade.band_index();
    let lower = match index.checked_sub(1) {
        Some(previous) => BANDS[previous].upper.saturating_add(1),
        None => 0,
    };
    GradeRange {
        lower: Score::saturating(u32::from(lower)),
        upper: Score::saturating(u32::from(BANDS[index].upper)),
    }
}

/// Score assigned when a grade is picked directly: the range's lower bound.
#[must_use]
pub fn grade_to_score(grade: Grade) -> Score {
    grade_range(grade).lower
}

/// Grade of the band containing `score`.
#[must_use]
pub fn score_to_grade(score: Score) -> Grade {
    Band::for_score(score).grade
}

/// Stability label of the band containing `score`.
#[must_use]
pub fn interpret(score: impl Into<CompositeScore>) -> StabilityLabel {
    Band::for_composite(score.into()).label
}

// =============================================================================
// TESTS
// =============================================================================
