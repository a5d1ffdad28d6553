//! # Session Module
//!
//! A single evaluation in progress.
//!
//! [`Evaluation`] owns the indicator values and demographic answers for one
//! respondent. The caller holds it, mutates it as ratings arrive, and asks it
//! for a result or a payload at submission time. Nothing here is global.

use crate::band::Grade;
use crate::composite::{CompositeResult, evaluate};
use crate::error::CoreError;
use crate::indicator::{Dimension, Indicator, IndicatorSet, Score};
use crate::payload::{Demographics, SubmissionPayload};
use crate::results::{CommunityAverages, Results};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rating given to one dimension: either a slider value or a grade button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Score(Score),
    Grade(Grade),
}

impl FromStr for Rating {
    type Err = CoreError;

    /// Integers are scores; anything else must be a grade letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u32>() {
            Ok(value) => Score::new(value).map(Self::Score),
            Err(_) => s.parse::<Grade>().map(Self::Grade),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(score) => write!(f, "{score}"),
            Self::Grade(grade) => write!(f, "{grade}"),
        }
    }
}

/// Caller-owned evaluation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    indicators: IndicatorSet,
    demographics: Demographics,
}

impl Evaluation {
    /// Start from the standard indicator set, every dimension at A/100.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a custom indicator set.
    #[must_use]
    pub fn with_indicators(indicators: IndicatorSet) -> Self {
        Self {
            indicators,
            demographics: Demographics::default(),
        }
    }

    /// Current indicators in survey order.
    #[must_use]
    pub fn indicators(&self) -> &[Indicator] {
        self.indicators.as_slice()
    }

    #[must_use]
    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn set_demographics(&mut self, demographics: Demographics) {
        self.demographics = demographics;
    }

    /// Pick a grade for a dimension.
    pub fn set_grade(&mut self, id: Dimension, grade: Grade) -> Result<(), CoreError> {
        self.indicator_mut(id)?.set_grade(grade);
        Ok(())
    }

    /// Move a dimension's slider.
    pub fn set_score(&mut self, id: Dimension, score: Score) -> Result<(), CoreError> {
        self.indicator_mut(id)?.set_score(score);
        Ok(())
    }

    /// Apply either kind of rating.
    pub fn apply(&mut self, id: Dimension, rating: Rating) -> Result<(), CoreError> {
        match rating {
            Rating::Score(score) => self.set_score(id, score),
            Rating::Grade(grade) => self.set_grade(id, grade),
        }
    }

    /// Composite result of the current state.
    #[must_use]
    pub fn result(&self) -> CompositeResult {
        evaluate(self.indicators.as_slice())
    }

    /// Payload for the submission endpoint.
    #[must_use]
    pub fn submission_payload(&self) -> SubmissionPayload {
        SubmissionPayload::new(&self.demographics, self.indicators.as_slice())
    }

    /// Finish the evaluation.
    #[must_use]
    pub fn into_results(
        self,
        community_averages: CommunityAverages,
        survey_id: Option<String>,
    ) -> Results {
        Results::new(self.indicators.into(), community_averages, survey_id)
    }

    fn indicator_mut(&mut self, id: Dimension) -> Result<&mut Indicator, CoreError> {
        self.indicators
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownIndicator(id.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
