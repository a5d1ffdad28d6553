//! # Payload Module
//!
//! JSON shapes sent to the external submission endpoint.
//!
//! Two payloads exist:
//! - [`SubmissionPayload`]: one survey response (demographics plus the raw
//!   score of every dimension).
//! - [`AnalysisRequest`]: a follow-up request for a full analysis of a
//!   computed result.
//!
//! Field names are snake_case on the wire.

use crate::band::StabilityLabel;
use crate::composite::{CompositeResult, CompositeScore};
use crate::error::CoreError;
use crate::indicator::{Dimension, Indicator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DEMOGRAPHICS
// =============================================================================

/// Age bracket offered by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    From65,
}

impl AgeRange {
    pub const ALL: [AgeRange; 6] = [
        AgeRange::From18To24,
        AgeRange::From25To34,
        AgeRange::From35To44,
        AgeRange::From45To54,
        AgeRange::From55To64,
        AgeRange::From65,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55To64 => "55-64",
            Self::From65 => "65+",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s.trim())
            .ok_or_else(|| CoreError::InvalidDemographic {
                field: "age range",
                value: s.to_string(),
            })
    }
}

/// Region of residence offered by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Northeast,
        Region::Southeast,
        Region::Midwest,
        Region::Southwest,
        Region::West,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Northeast => "northeast",
            Self::Southeast => "southeast",
            Self::Midwest => "midwest",
            Self::Southwest => "southwest",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidDemographic {
                field: "region",
                value: s.to_string(),
            })
    }
}

/// Optional demographic answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_range: Option<AgeRange>,
    pub region: Option<Region>,
}

// =============================================================================
// SUBMISSION PAYLOAD
// =============================================================================

/// One survey response as posted to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub age_range: Option<AgeRange>,
    pub region: Option<Region>,
    pub immigration_policy_rate: u8,
    pub economic_management_rate: u8,
    pub foreign_policy_rate: u8,
    pub domestic_policy_rate: u8,
    pub social_policy_rate: u8,
}

impl SubmissionPayload {
    /// Build the payload from demographics and current indicator state.
    ///
    /// A dimension missing from `indicators` is reported as `0`.
    #[must_use]
    pub fn new(demographics: &Demographics, indicators: &[Indicator]) -> Self {
        let rate = |id: Dimension| {
            indicators
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.score().value())
                .unwrap_or(0)
        };

        Self {
            age_range: demographics.age_range,
            region: demographics.region,
            immigration_policy_rate: rate(Dimension::Immigration),
            economic_management_rate: rate(Dimension::Economy),
            foreign_policy_rate: rate(Dimension::Foreign),
            domestic_policy_rate: rate(Dimension::Domestic),
            social_policy_rate: rate(Dimension::Social),
        }
    }
}

// =============================================================================
// ANALYSIS REQUEST
// =============================================================================

/// Request type tag for [`AnalysisRequest`].
pub const ANALYSIS_REQUEST_TYPE: &str = "analysis_request";

/// A request for a full write-up of a computed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub email: String,
    pub survey_id: Option<String>,
    pub composite_score: CompositeScore,
    pub stability_status: StabilityLabel,
}

impl AnalysisRequest {
    /// Create a request, checking the contact details.
    ///
    /// The name must not be blank and the email needs text on both sides of
    /// an `@`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        result: &CompositeResult,
        survey_id: Option<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        if name.is_empty() {
            return Err(CoreError::InvalidContact("name is empty".to_string()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(CoreError::InvalidContact(format!(
                    "{email:?} is not an email address"
                )));
            }
        }

        Ok(Self {
            kind: ANALYSIS_REQUEST_TYPE,
            name,
            email,
            survey_id,
            composite_score: result.composite_score,
            stability_status: result.label,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::composite::evaluate;
    use crate::indicator::{IndicatorSet, Score};

    #[test]
    fn submission_payload_shape() {
        let mut indicators: Vec<Indicator> = IndicatorSet::default().into();
        indicators[1].set_score(Score::new(60).unwrap());

        let demographics = Demographics {
            age_range: Some(AgeRange::From25To34),
            region: None,
        };
        let payload = SubmissionPayload::new(&demographics, &indicators);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["age_range"], "25-34");
        assert!(json["region"].is_null());
        assert_eq!(json["immigration_policy_rate"], 100);
        assert_eq!(json["economic_management_rate"], 60);
        assert_eq!(json["social_policy_rate"], 100);
        assert!(json.get("instability_ratio").is_none());
    }

    #[test]
    fn missing_dimension_rates_zero() {
        let payload = SubmissionPayload::new(&Demographics::default(), &[]);
        assert_eq!(payload.foreign_policy_rate, 0);
        assert_eq!(payload.age_range, None);
    }

    #[test]
    fn analysis_request_shape() {
        let result = evaluate(IndicatorSet::default().as_slice());
        let request =
            AnalysisRequest::new(" Ada ", "ada@example.org", &result, Some("s-1".into())).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["type"], "analysis_request");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["survey_id"], "s-1");
        assert_eq!(json["composite_score"], 100.0);
        assert_eq!(json["stability_status"], "Extremely Stable");
    }

    #[test]
    fn analysis_request_rejects_bad_contact() {
        let result = evaluate(IndicatorSet::default().as_slice());
        assert!(AnalysisRequest::new("", "a@b", &result, None).is_err());
        assert!(AnalysisRequest::new("Ada", "ada.example.org", &result, None).is_err());
        assert!(AnalysisRequest::new("Ada", "@example.org", &result, None).is_err());
    }

    #[test]
    fn demographic_parsing() {
        assert_eq!("65+".parse::<AgeRange>().unwrap(), AgeRange::From65);
        assert_eq!("Midwest".parse::<Region>().unwrap(), Region::Midwest);
        assert!("north".parse::<Region>().is_err());
        assert!("30-45".parse::<AgeRange>().is_err());
    }
}
