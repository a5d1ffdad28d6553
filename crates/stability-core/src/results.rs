//! # Results Module
//!
//! The object handed from an evaluation to the results view.
//!
//! Keys are camelCase on the wire, matching what the view reads.

use crate::band::{Grade, StabilityLabel};
use crate::composite::{CompositeScore, evaluate};
use crate::indicator::Indicator;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Average composite scores of other respondents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityAverages {
    pub overall: CompositeScore,
    pub by_age: BTreeMap<String, CompositeScore>,
    pub by_region: BTreeMap<String, CompositeScore>,
}

impl CommunityAverages {
    /// Stand-in averages shown until a real aggregate source exists.
    ///
    /// Overall is zero; a single age bucket `30-45` sits at 73.5.
    #[must_use]
    pub fn placeholder() -> Self {
        let mut by_age = BTreeMap::new();
        by_age.insert("30-45".to_string(), CompositeScore::from_raw(735_000));
        Self {
            overall: CompositeScore::default(),
            by_age,
            by_region: BTreeMap::new(),
        }
    }
}

/// A finished evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub composite_score: CompositeScore,
    pub grade: Grade,
    pub label: StabilityLabel,
    pub indicators: Vec<Indicator>,
    pub community_averages: CommunityAverages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_id: Option<String>,
}

impl Results {
    /// Score `indicators` and attach the comparison data.
    #[must_use]
    pub fn new(
        indicators: Vec<Indicator>,
        community_averages: CommunityAverages,
        survey_id: Option<String>,
    ) -> Self {
        let result = evaluate(&indicators);
        Self {
            composite_score: result.composite_score,
            grade: result.grade,
            label: result.label,
            indicators,
            community_averages,
            survey_id,
        }
    }

    /// How the composite compares with the overall community average.
    #[must_use]
    pub fn versus_average(&self) -> Ordering {
        self.composite_score.cmp(&self.community_averages.overall)
    }
}

// =============================================================================
// TESTS
// =============================================================================
