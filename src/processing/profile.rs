//! Job profile definition and validation

use crate::error::ProfileError;
use crate::processing::candidate::TermSet;
use serde::{Deserialize, Serialize};

/// Job requirements as supplied by the caller, before validation.
///
/// Experience bounds are signed so that negative input can be reported as a
/// profile error instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobProfileDraft {
    pub title: String,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience: i64,
    pub max_experience: Option<i64>,
    pub location: Option<String>,
    pub languages: Vec<String>,
    pub education: Vec<String>,
}

/// A validated job profile. Immutable during a scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    title: String,
    description: Option<String>,
    required_skills: TermSet,
    preferred_skills: TermSet,
    min_experience: u32,
    max_experience: Option<u32>,
    location: Option<String>,
    languages: TermSet,
    education: TermSet,
}

impl JobProfile {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn required_skills(&self) -> &TermSet {
        &self.required_skills
    }

    pub fn preferred_skills(&self) -> &TermSet {
        &self.preferred_skills
    }

    pub fn min_experience(&self) -> u32 {
        self.min_experience
    }

    pub fn max_experience(&self) -> Option<u32> {
        self.max_experience
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn languages(&self) -> &TermSet {
        &self.languages
    }

    pub fn education(&self) -> &TermSet {
        &self.education
    }

    /// True when the profile places any bound on experience.
    pub fn constrains_experience(&self) -> bool {
        self.min_experience > 0 || self.max_experience.is_some()
    }
}

impl TryFrom<JobProfileDraft> for JobProfile {
    type Error = ProfileError;

    fn try_from(draft: JobProfileDraft) -> Result<Self, Self::Error> {
        if draft.min_experience < 0 {
            return Err(ProfileError::NegativeMinExperience(draft.min_experience));
        }
        let min_experience = u32::try_from(draft.min_experience)
            .map_err(|_| ProfileError::ExperienceOutOfRange(draft.min_experience))?;

        let max_experience = match draft.max_experience {
            Some(max) if max < 0 => return Err(ProfileError::NegativeMaxExperience(max)),
            Some(max) => {
                let max = u32::try_from(max).map_err(|_| ProfileError::ExperienceOutOfRange(max))?;
                if max < min_experience {
                    return Err(ProfileError::ExperienceRangeInverted {
                        min: min_experience,
                        max,
                    });
                }
                Some(max)
            }
            None => None,
        };

        Ok(Self {
            title: draft.title.trim().to_string(),
            description: non_blank(draft.description),
            required_skills: draft.required_skills.into(),
            preferred_skills: draft.preferred_skills.into(),
            min_experience,
            max_experience,
            location: non_blank(draft.location),
            languages: draft.languages.into(),
            education: draft.education.into(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JobProfileDraft {
        JobProfileDraft {
            title: "  Ingeniero de Mantenimiento ".to_string(),
            required_skills: vec!["SAP PM".to_string(), "sap pm".to_string()],
            min_experience: 3,
            location: Some("   ".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed_and_deduplicated() {
        let profile = JobProfile::try_from(draft()).unwrap();
        assert_eq!(profile.title(), "Ingeniero de Mantenimiento");
        assert_eq!(profile.required_skills().len(), 1);
        assert_eq!(profile.location(), None);
        assert!(profile.constrains_experience());
    }

    #[test]
    fn test_negative_min_experience_is_rejected() {
        let mut d = draft();
        d.min_experience = -1;
        assert_eq!(
            JobProfile::try_from(d),
            Err(ProfileError::NegativeMinExperience(-1))
        );
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut d = draft();
        d.min_experience = 5;
        d.max_experience = Some(2);
        assert_eq!(
            JobProfile::try_from(d),
            Err(ProfileError::ExperienceRangeInverted { min: 5, max: 2 })
        );
    }

    #[test]
    fn test_negative_max_experience_is_rejected() {
        let mut d = draft();
        d.max_experience = Some(-4);
        assert_eq!(
            JobProfile::try_from(d),
            Err(ProfileError::NegativeMaxExperience(-4))
        );
    }

    #[test]
    fn test_draft_deserializes_from_client_shape() {
        let d: JobProfileDraft = serde_json::from_str(
            r#"{"title":"Analista","requiredSkills":["SQL"],"minExperience":2,"maxExperience":6}"#,
        )
        .unwrap();
        let profile = JobProfile::try_from(d).unwrap();
        assert_eq!(profile.min_experience(), 2);
        assert_eq!(profile.max_experience(), Some(6));
        assert!(profile.preferred_skills().is_empty());
    }
}
