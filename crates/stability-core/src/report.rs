//! # Report Module
//!
//! Plain-text rendering of a finished evaluation.
//!
//! The report is a fixed three-section box: the indicator ratings, the
//! composite interpretation, and the community comparison. No colours, no
//! terminal control codes.

use crate::band::{Grade, StabilityLabel};
use crate::composite::CompositeScore;
use crate::indicator::Score;
use crate::results::Results;
use std::cmp::Ordering;

/// One indicator line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub title: &'static str,
    pub score: Score,
    pub grade: Grade,
}

/// Text view over a [`Results`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub lines: Vec<ReportLine>,
    pub composite_score: CompositeScore,
    pub grade: Grade,
    pub label: StabilityLabel,
    pub community_overall: CompositeScore,
    pub versus_average: Ordering,
}

impl ScoreReport {
    #[must_use]
    pub fn from_results(results: &Results) -> Self {
        Self {
            lines: results
                .indicators
                .iter()
                .map(|indicator| ReportLine {
                    title: indicator.id.title(),
                    score: indicator.score(),
                    grade: indicator.grade(),
                })
                .collect(),
            composite_score: results.composite_score,
            grade: results.grade,
            label: results.label,
            community_overall: results.community_averages.overall,
            versus_average: results.versus_average(),
        }
    }

    /// Format as plain text with the standard template.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("┌─────────────────────────────────────┐\n");
        output.push_str("│ RATINGS                             │\n");

        if self.lines.is_empty() {
            output.push_str("│ - (none)                            │\n");
        } else {
            for line in &self.lines {
                output.push_str(&format!(
                    "│ - {:<22} {:>3}  [{}]\n",
                    line.title, line.score, line.grade
                ));
            }
        }

        output.push_str("├─────────────────────────────────────┤\n");
        output.push_str("│ STABILITY SCORE                     │\n");
        output.push_str(&format!(
            "│ - {} / 100 [{}] {}\n",
            self.composite_score, self.grade, self.label
        ));
        output.push_str(&format!("│ - {}\n", self.label.description()));

        // A zero overall means no community data has been collected yet.
        if self.community_overall != CompositeScore::default() {
            output.push_str("├─────────────────────────────────────┤\n");
            output.push_str("│ COMMUNITY                           │\n");
            let relation = match self.versus_average {
                Ordering::Greater => "above",
                Ordering::Less => "below",
                Ordering::Equal => "equal to",
            };
            output.push_str(&format!(
                "│ - average {} (you are {} average)\n",
                self.community_overall, relation
            ));
        }

        output.push_str("└─────────────────────────────────────┘\n");

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::indicator::{Dimension, IndicatorSet};
    use crate::results::CommunityAverages;
    use crate::session::Evaluation;

    #[test]
    fn report_lists_every_indicator() {
        let results = Results::new(
            IndicatorSet::default().into(),
            CommunityAverages::placeholder(),
            None,
        );
        let report = ScoreReport::from_results(&results);

        assert_eq!(report.lines.len(), 5);
        let text = report.to_text();
        assert!(text.contains("RATINGS"));
        assert!(text.contains("Immigration Policy"));
        assert!(text.contains("100.0 / 100 [A] Extremely Stable"));
        assert!(text.contains("Stable environment with minimal risks."));
        assert!(!text.contains("COMMUNITY"));
    }

    #[test]
    fn report_shows_community_comparison() {
        let mut evaluation = Evaluation::new();
        evaluation.set_grade(Dimension::Domestic, Grade::F).unwrap();

        let averages = CommunityAverages {
            overall: CompositeScore::from_points(80),
            ..CommunityAverages::default()
        };
        let results = evaluation.into_results(averages, None);
        let text = ScoreReport::from_results(&results).to_text();

        assert!(text.contains("75.0 / 100 [B] Highly Stable"));
        assert!(text.contains("average 80.0 (you are below average)"));
    }
}
