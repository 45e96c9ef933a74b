//! Attribute normalization: trims, case-folds and parses raw extracted values

use crate::processing::candidate::{
    CandidateAttributes, Experience, RawCandidateAttributes, RawExperience, TermSet,
};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when the extraction step could not find a candidate name.
pub const UNNAMED_CANDIDATE: &str = "Unnamed candidate";

/// Largest value accepted as years of experience. Anything above is treated
/// as unparsable (e.g. a calendar year).
pub const MAX_PLAUSIBLE_YEARS: f64 = 80.0;

pub struct AttributeNormalizer {
    number_regex: Regex,
}

/// Non-fatal data-quality finding raised while normalizing a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DataQualityWarning {
    MissingExperience,
    UnparsableExperience { raw: String },
    MissingName,
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityWarning::MissingExperience => {
                write!(f, "years of experience not provided; treated as unknown")
            }
            DataQualityWarning::UnparsableExperience { raw } => {
                write!(f, "could not read years of experience from '{}'; treated as unknown", raw)
            }
            DataQualityWarning::MissingName => {
                write!(f, "candidate name not provided")
            }
        }
    }
}

/// Normalized attributes together with the warnings raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCandidate {
    pub attributes: CandidateAttributes,
    pub warnings: Vec<DataQualityWarning>,
}

impl Default for AttributeNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeNormalizer {
    pub fn new() -> Self {
        let number_regex = Regex::new(r"-?\d+(?:[.,]\d+)?").expect("Invalid number regex");

        Self { number_regex }
    }

    /// Canonicalize one candidate. Never fails: bad values degrade to
    /// "unknown" and are reported through the warning list.
    pub fn normalize(&self, raw: &RawCandidateAttributes) -> NormalizedCandidate {
        let mut warnings = Vec::new();

        let candidate_name = match clean(&raw.candidate_name) {
            Some(name) => name,
            None => {
                warnings.push(DataQualityWarning::MissingName);
                UNNAMED_CANDIDATE.to_string()
            }
        };

        let years_experience = match &raw.years_experience {
            None => {
                warnings.push(DataQualityWarning::MissingExperience);
                Experience::Unknown
            }
            Some(value) => match self.parse_experience(value) {
                Some(years) => Experience::Known(years),
                None => {
                    let raw_text = match value {
                        RawExperience::Number(n) => n.to_string(),
                        RawExperience::Text(text) => text.clone(),
                    };
                    debug!("Unparsable experience for {}: {:?}", candidate_name, raw_text);
                    warnings.push(DataQualityWarning::UnparsableExperience { raw: raw_text });
                    Experience::Unknown
                }
            },
        };

        let attributes = CandidateAttributes {
            candidate_name,
            email: raw.email.as_deref().and_then(clean),
            phone: raw.phone.as_deref().and_then(clean),
            location: raw.location.as_deref().and_then(clean),
            role: clean(&raw.role).unwrap_or_default(),
            years_experience,
            skills: to_term_set(&raw.skills),
            languages: to_term_set(&raw.languages),
            education: to_term_set(&raw.education),
            certifications: to_term_set(&raw.certifications),
            summary: raw.summary.as_deref().and_then(clean),
        };

        NormalizedCandidate {
            attributes,
            warnings,
        }
    }

    /// Whole years from a numeric or numeric-looking value.
    pub fn parse_experience(&self, value: &RawExperience) -> Option<u32> {
        match value {
            RawExperience::Number(n) => whole_years(*n),
            RawExperience::Text(text) => {
                let found = self.number_regex.find(text)?;
                let number: f64 = found.as_str().replace(',', ".").parse().ok()?;
                whole_years(number)
            }
        }
    }
}

fn whole_years(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > MAX_PLAUSIBLE_YEARS {
        return None;
    }
    Some(value.floor() as u32)
}

fn clean(value: &str) -> Option<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

fn to_term_set(values: &[String]) -> TermSet {
    values.iter().filter_map(|v| clean(v)).collect()
}
