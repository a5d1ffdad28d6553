//! # Stability Core
//!
//! The deterministic scoring engine behind the Stability Calculator.
//!
//! A survey rates five policy dimensions ([`Dimension`]). Each rating is a
//! [`Score`] in `0..=100` paired with a letter [`Grade`]; the weighted sum of
//! the scores is the [`CompositeScore`], which is interpreted as a
//! [`StabilityLabel`].
//!
//! ## Design Principles
//!
//! - Pure computation: no I/O, no async, no logging.
//! - Integer fixed-point arithmetic. Weights are basis points and the
//!   composite is kept in ten-thousandths of a point, so every sum is exact.
//!   Floats only appear when a value is serialized or displayed.
//! - One band table ([`BANDS`]) drives both grade bucketing and label
//!   interpretation.
//!
//! ## Example
//!
//! ```rust
//! use stability_core::{Dimension, Evaluation, Grade, Score, StabilityLabel};
//!
//! let mut evaluation = Evaluation::new();
//! evaluation.set_grade(Dimension::Economy, Grade::C).unwrap();
//! evaluation.set_score(Dimension::Social, Score::saturating(15)).unwrap();
//!
//! let result = evaluation.result();
//! assert_eq!(result.label, StabilityLabel::HighlyStable);
//! ```

pub mod band;
pub mod composite;
pub mod error;
pub mod indicator;
pub mod payload;
pub mod report;
pub mod results;
pub mod session;

pub use band::{
    BANDS, Band, Grade, GradeRange, StabilityLabel, grade_range, grade_to_score, interpret,
    score_to_grade,
};
pub use composite::{CompositeResult, CompositeScore, composite_score, evaluate};
pub use error::CoreError;
pub use indicator::{Dimension, Indicator, IndicatorSet, Score, Weight};
pub use payload::{AgeRange, AnalysisRequest, Demographics, Region, SubmissionPayload};
pub use report::ScoreReport;
pub use results::{CommunityAverages, Results};
pub use session::{Evaluation, Rating};
