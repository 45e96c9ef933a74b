//! Compatibility scoring: weighted composite, highlights and concerns

use crate::config::ScoringConfig;
use crate::processing::candidate::CandidateAttributes;
use crate::processing::matcher::{FactorBreakdown, FactorMatcher};
use crate::processing::normalizer::{DataQualityWarning, NormalizedCandidate};
use crate::processing::profile::JobProfile;
use crate::processing::weights::{Factor, FactorWeights, PriorityWeights};
use serde::{Deserialize, Serialize};

/// Scores one candidate against a job profile
pub struct CompatibilityScorer {
    matcher: FactorMatcher,
    highlight_threshold: f64,
    concern_threshold: f64,
}

/// Scoring outcome for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub document_id: Option<String>,
    pub attributes: CandidateAttributes,
    pub breakdown: FactorBreakdown,
    pub weights: FactorWeights,
    /// Weighted composite, 0-100
    pub overall_score: u8,
    pub highlights: Vec<String>,
    pub concerns: Vec<String>,
    pub warnings: Vec<DataQualityWarning>,
}

impl ComparisonResult {
    pub fn candidate_name(&self) -> &str {
        &self.attributes.candidate_name
    }

    /// Copy of this result tagged with the source document.
    pub fn with_document_id(self, document_id: impl Into<String>) -> Self {
        Self {
            document_id: Some(document_id.into()),
            ..self
        }
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl CompatibilityScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            matcher: FactorMatcher::new(config.preferred_skill_bonus),
            highlight_threshold: config.highlight_threshold,
            concern_threshold: config.concern_threshold,
        }
    }

    /// Score a normalized candidate. Identical inputs give identical output.
    pub fn score(
        &self,
        profile: &JobProfile,
        candidate: NormalizedCandidate,
        selection: &PriorityWeights,
    ) -> ComparisonResult {
        let NormalizedCandidate {
            attributes,
            warnings,
        } = candidate;

        let breakdown = self.matcher.match_candidate(profile, &attributes);
        let weights = FactorWeights::from_priorities(selection);
        let overall_score = composite_score(&breakdown, &weights);

        let mut highlights = self.highlights(profile, &breakdown);
        if selection.certifications && !attributes.certifications.is_empty() {
            highlights.push(format!(
                "Holds {} certification(s): {}",
                attributes.certifications.len(),
                attributes.certifications.iter().collect::<Vec<_>>().join(", ")
            ));
        }
        let concerns = self.concerns(profile, &attributes, &breakdown);

        ComparisonResult {
            document_id: None,
            attributes,
            breakdown,
            weights,
            overall_score,
            highlights,
            concerns,
            warnings,
        }
    }

    /// One highlight per factor at or above the threshold, whatever its
    /// weight. Unconstrained factors are reported as having no requirement.
    fn highlights(&self, profile: &JobProfile, breakdown: &FactorBreakdown) -> Vec<String> {
        let mut highlights = Vec::new();

        for factor in Factor::ALL {
            if breakdown.get(factor) < self.highlight_threshold {
                continue;
            }

            if !is_constrained(profile, factor) {
                highlights.push(format!("No {} requirement", factor.label().to_lowercase()));
                continue;
            }

            let text = match factor {
                Factor::Skills if profile.required_skills().is_empty() => format!(
                    "Has preferred skills: {}",
                    breakdown.matched_preferred_skills.join(", ")
                ),
                Factor::Skills => {
                    let mut text = format!(
                        "Covers {}/{} required skills",
                        breakdown.matched_skills.len(),
                        profile.required_skills().len()
                    );
                    if !breakdown.matched_preferred_skills.is_empty() {
                        text.push_str(&format!(
                            " plus preferred: {}",
                            breakdown.matched_preferred_skills.join(", ")
                        ));
                    }
                    text
                }
                Factor::Experience => "Experience fits the requested range".to_string(),
                Factor::Location => format!("Located in {}", profile.location().unwrap_or_default()),
                Factor::Languages => format!(
                    "Speaks {}",
                    breakdown.matched_languages.join(", ")
                ),
                Factor::Education => "Education matches the profile".to_string(),
            };
            highlights.push(text);
        }

        highlights
    }

    fn concerns(
        &self,
        profile: &JobProfile,
        candidate: &CandidateAttributes,
        breakdown: &FactorBreakdown,
    ) -> Vec<String> {
        let mut concerns = Vec::new();

        for factor in Factor::ALL {
            if !is_required(profile, factor) {
                continue;
            }

            if breakdown.is_unverified(factor) {
                concerns.push(format!("Cannot verify {}", factor.label().to_lowercase()));
                continue;
            }

            if breakdown.get(factor) >= self.concern_threshold {
                continue;
            }

            let text = match factor {
                Factor::Skills => format!(
                    "Missing required skills: {}",
                    breakdown.missing_skills.join(", ")
                ),
                Factor::Experience => format!(
                    "Experience ({}) outside the requested range",
                    candidate.years_experience
                ),
                Factor::Location => format!(
                    "Location {} does not match {}",
                    candidate.location.as_deref().unwrap_or("unknown"),
                    profile.location().unwrap_or_default()
                ),
                Factor::Languages => format!(
                    "Missing required languages: {}",
                    breakdown.missing_languages.join(", ")
                ),
                Factor::Education => continue,
            };
            concerns.push(text);
        }

        concerns
    }
}

/// `round(Σ weight * score)`, clamped to [0, 100].
pub fn composite_score(breakdown: &FactorBreakdown, weights: &FactorWeights) -> u8 {
    let total: f64 = weights
        .iter()
        .map(|(factor, weight)| weight * breakdown.get(factor).clamp(0.0, 100.0))
        .sum();

    total.round().clamp(0.0, 100.0) as u8
}

/// Whether the profile states any requirement or preference for the factor.
/// A factor that is not constrained scores 100 vacuously.
fn is_constrained(profile: &JobProfile, factor: Factor) -> bool {
    match factor {
        Factor::Skills => !profile.required_skills().is_empty() || !profile.preferred_skills().is_empty(),
        Factor::Education => !profile.education().is_empty(),
        _ => is_required(profile, factor),
    }
}

/// Factors whose shortfall is reported as a concern.
fn is_required(profile: &JobProfile, factor: Factor) -> bool {
    match factor {
        Factor::Skills => !profile.required_skills().is_empty(),
        Factor::Experience => profile.constrains_experience(),
        Factor::Location => profile.location().is_some(),
        Factor::Languages => !profile.languages().is_empty(),
        Factor::Education => false,
    }
}
