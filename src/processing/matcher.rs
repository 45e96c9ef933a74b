//! Per-factor matching of a candidate against a job profile

use crate::processing::candidate::{fold, CandidateAttributes, Experience, TermSet};
use crate::processing::profile::JobProfile;
use crate::processing::weights::Factor;
use serde::{Deserialize, Serialize};

/// Default ceiling of the bonus earned by matching every preferred skill.
pub const DEFAULT_PREFERRED_SKILL_BONUS: f64 = 20.0;

/// Factor matcher for skills, experience, location, languages and education
pub struct FactorMatcher {
    preferred_skill_bonus: f64,
}

/// Bounded sub-scores per factor plus the sets behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub skills_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub languages_match: f64,
    pub education_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_preferred_skills: Vec<String>,
    pub matched_languages: Vec<String>,
    pub missing_languages: Vec<String>,
    /// Constrained factors whose candidate value was unknown.
    pub unverified: Vec<Factor>,
}

impl FactorBreakdown {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Skills => self.skills_match,
            Factor::Experience => self.experience_match,
            Factor::Location => self.location_match,
            Factor::Languages => self.languages_match,
            Factor::Education => self.education_match,
        }
    }

    pub fn is_unverified(&self, factor: Factor) -> bool {
        self.unverified.contains(&factor)
    }
}

impl Default for FactorMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_PREFERRED_SKILL_BONUS)
    }
}

impl FactorMatcher {
    pub fn new(preferred_skill_bonus: f64) -> Self {
        Self {
            preferred_skill_bonus: preferred_skill_bonus.clamp(0.0, 100.0),
        }
    }

    /// Compute every factor for one candidate. Each factor is independent.
    pub fn match_candidate(
        &self,
        profile: &JobProfile,
        candidate: &CandidateAttributes,
    ) -> FactorBreakdown {
        let mut unverified = Vec::new();

        let matched_skills = profile.required_skills().intersection(&candidate.skills);
        let missing_skills = profile.required_skills().difference(&candidate.skills);
        let matched_preferred_skills = profile.preferred_skills().intersection(&candidate.skills);
        let skills_match = self.skills_score(
            profile,
            matched_skills.len(),
            matched_preferred_skills.len(),
        );

        let experience_match = match experience_score(profile, candidate.years_experience) {
            Some(score) => score,
            None => {
                unverified.push(Factor::Experience);
                0.0
            }
        };

        let location_match = match location_score(profile.location(), candidate.location.as_deref()) {
            Some(score) => score,
            None => {
                unverified.push(Factor::Location);
                0.0
            }
        };

        let matched_languages = profile.languages().intersection(&candidate.languages);
        let missing_languages = profile.languages().difference(&candidate.languages);
        let languages_match = coverage_score(profile.languages(), matched_languages.len());

        let matched_education = profile.education().intersection(&candidate.education);
        let education_match = coverage_score(profile.education(), matched_education.len());

        FactorBreakdown {
            skills_match,
            experience_match,
            location_match,
            languages_match,
            education_match,
            matched_skills,
            missing_skills,
            matched_preferred_skills,
            matched_languages,
            missing_languages,
            unverified,
        }
    }

    fn skills_score(&self, profile: &JobProfile, matched_required: usize, matched_preferred: usize) -> f64 {
        let base = coverage_score(profile.required_skills(), matched_required);

        let preferred = profile.preferred_skills().len();
        let bonus = if preferred == 0 {
            0.0
        } else {
            self.preferred_skill_bonus * matched_preferred as f64 / preferred as f64
        };

        (base + bonus).min(100.0)
    }
}

/// Percentage of `required` covered. An empty requirement is satisfied.
fn coverage_score(required: &TermSet, matched: usize) -> f64 {
    if required.is_empty() {
        return 100.0;
    }
    100.0 * matched as f64 / required.len().max(1) as f64
}

/// `None` when the profile constrains experience but the candidate's is unknown.
fn experience_score(profile: &JobProfile, experience: Experience) -> Option<f64> {
    if !profile.constrains_experience() {
        return Some(100.0);
    }

    let years = experience.years()?;
    let min = profile.min_experience();

    if years < min {
        return Some((100.0 * years as f64 / min as f64).max(0.0));
    }

    match profile.max_experience() {
        Some(max) if years > max => {
            if max == 0 {
                Some(0.0)
            } else {
                Some((100.0 * max as f64 / years as f64).clamp(0.0, 100.0))
            }
        }
        _ => Some(100.0),
    }
}

/// `None` when a location is required but the candidate's is unknown.
fn location_score(required: Option<&str>, candidate: Option<&str>) -> Option<f64> {
    let Some(required) = required else {
        return Some(100.0);
    };
    let candidate = candidate?;

    if fold(candidate).contains(&fold(required)) {
        Some(100.0)
    } else {
        Some(0.0)
    }
}
