//! Population-level summary of a scored candidate pool

use crate::processing::candidate::fold;
use crate::processing::scorer::ComparisonResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// How a candidate's free-text role is compared with the job title when
/// counting role matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMatchStrategy {
    /// Candidate role contains the job title (case-insensitive).
    #[default]
    Substring,
    /// Role and title share at least one word.
    TokenOverlap,
    /// Role equals the title (case-insensitive).
    Exact,
}

impl RoleMatchStrategy {
    pub fn matches(&self, role: &str, title: &str) -> bool {
        let role = fold(role.trim());
        let title = fold(title.trim());
        if role.is_empty() || title.is_empty() {
            return false;
        }

        match self {
            RoleMatchStrategy::Substring => role.contains(&title),
            RoleMatchStrategy::TokenOverlap => {
                let title_words: Vec<&str> = title.unicode_words().collect();
                role.unicode_words().any(|word| title_words.contains(&word))
            }
            RoleMatchStrategy::Exact => role == title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSummary {
    pub total_candidates: usize,
    pub matches_by_role: usize,
    /// Mean over candidates with known experience; 0 when there are none.
    pub average_experience: f64,
    pub top_skills: Vec<SkillCount>,
    pub location_distribution: Vec<LocationCount>,
}

pub struct PopulationSummarizer {
    role_match: RoleMatchStrategy,
}

/// Case-insensitive tally that keeps a stable display label.
#[derive(Default)]
struct Tally {
    counts: HashMap<String, (String, usize)>,
}

impl Tally {
    fn add(&mut self, value: &str) {
        let entry = self
            .counts
            .entry(fold(value))
            .or_insert_with(|| (value.to_string(), 0));
        // Smallest spelling wins so the label does not depend on arrival order.
        if value < entry.0.as_str() {
            entry.0 = value.to_string();
        }
        entry.1 += 1;
    }

    /// Count descending, then label ascending.
    fn into_sorted(self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self.counts.into_values().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl Default for PopulationSummarizer {
    fn default() -> Self {
        Self::new(RoleMatchStrategy::default())
    }
}

impl PopulationSummarizer {
    pub fn new(role_match: RoleMatchStrategy) -> Self {
        Self { role_match }
    }

    /// Aggregate results in a single pass; ordering is applied at the end.
    pub fn summarize(&self, job_title: &str, results: &[ComparisonResult]) -> TalentSummary {
        let mut total_candidates = 0;
        let mut matches_by_role = 0;
        let mut experience_sum: u64 = 0;
        let mut experience_count: u64 = 0;
        let mut skills = Tally::default();
        let mut locations = Tally::default();

        for result in results {
            let candidate = &result.attributes;
            total_candidates += 1;

            if self.role_match.matches(&candidate.role, job_title) {
                matches_by_role += 1;
            }

            if let Some(years) = candidate.years_experience.years() {
                experience_sum += years as u64;
                experience_count += 1;
            }

            for skill in candidate.skills.iter() {
                skills.add(skill);
            }

            if let Some(location) = &candidate.location {
                locations.add(location);
            }
        }

        let average_experience = if experience_count == 0 {
            0.0
        } else {
            experience_sum as f64 / experience_count as f64
        };

        TalentSummary {
            total_candidates,
            matches_by_role,
            average_experience,
            top_skills: skills
                .into_sorted()
                .into_iter()
                .map(|(skill, count)| SkillCount { skill, count })
                .collect(),
            location_distribution: locations
                .into_sorted()
                .into_iter()
                .map(|(location, count)| LocationCount { location, count })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidate::{CandidateAttributes, Experience, TermSet};
    use crate::processing::matcher::FactorBreakdown;
    use crate::processing::weights::{FactorWeights, PriorityWeights};

    fn result(name: &str, role: &str, years: Experience, skills: &[&str], location: Option<&str>) -> ComparisonResult {
        ComparisonResult {
            document_id: None,
            attributes: CandidateAttributes {
                candidate_name: name.to_string(),
                email: None,
                phone: None,
                location: location.map(str::to_string),
                role: role.to_string(),
                years_experience: years,
                skills: skills.iter().collect(),
                languages: TermSet::new(),
                education: TermSet::new(),
                certifications: TermSet::new(),
                summary: None,
            },
            breakdown: FactorBreakdown {
                skills_match: 0.0,
                experience_match: 0.0,
                location_match: 0.0,
                languages_match: 0.0,
                education_match: 0.0,
                matched_skills: vec![],
                missing_skills: vec![],
                matched_preferred_skills: vec![],
                matched_languages: vec![],
                missing_languages: vec![],
                unverified: vec![],
            },
            weights: FactorWeights::from_priorities(&PriorityWeights::default()),
            overall_score: 0,
            highlights: vec![],
            concerns: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_empty_pool() {
        let summary = PopulationSummarizer::default().summarize("Analista", &[]);
        assert_eq!(summary.total_candidates, 0);
        assert_eq!(summary.matches_by_role, 0);
        assert_eq!(summary.average_experience, 0.0);
        assert!(summary.top_skills.is_empty());
        assert!(summary.location_distribution.is_empty());
    }

    #[test]
    fn test_unknown_experience_is_excluded_from_average() {
        let results = vec![
            result("A", "Analista", Experience::Known(7), &[], None),
            result("B", "Analista", Experience::Unknown, &[], None),
        ];
        let summary = PopulationSummarizer::default().summarize("Analista", &results);
        assert_eq!(summary.total_candidates, 2);
        assert_eq!(summary.average_experience, 7.0);
    }

    #[test]
    fn test_skill_and_location_ordering() {
        let results = vec![
            result("A", "", Experience::Known(1), &["python", "SQL"], Some("Bogotá")),
            result("B", "", Experience::Known(2), &["Python", "Excel"], Some("bogotá")),
            result("C", "", Experience::Known(3), &["SQL", "Power BI"], Some("Cali")),
            result("D", "", Experience::Known(4), &[], None),
        ];
        let summary = PopulationSummarizer::default().summarize("Analista", &results);

        let skills: Vec<(&str, usize)> = summary
            .top_skills
            .iter()
            .map(|s| (s.skill.as_str(), s.count))
            .collect();
        assert_eq!(
            skills,
            vec![("Python", 2), ("SQL", 2), ("Excel", 1), ("Power BI", 1)]
        );

        let locations: Vec<(&str, usize)> = summary
            .location_distribution
            .iter()
            .map(|l| (l.location.as_str(), l.count))
            .collect();
        assert_eq!(locations, vec![("Bogotá", 2), ("Cali", 1)]);
        assert_eq!(summary.average_experience, 2.5);
    }

    #[test]
    fn test_summary_is_independent_of_arrival_order() {
        let mut results = vec![
            result("A", "Data Analyst", Experience::Known(1), &["sql"], Some("Lima")),
            result("B", "Analyst", Experience::Known(5), &["SQL"], Some("Quito")),
        ];
        let forward = PopulationSummarizer::default().summarize("Analyst", &results);
        results.reverse();
        let backward = PopulationSummarizer::default().summarize("Analyst", &results);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_role_match_strategies() {
        let title = "Data Analyst";
        assert!(RoleMatchStrategy::Substring.matches("Senior Data Analyst", title));
        assert!(!RoleMatchStrategy::Substring.matches("Analyst", title));
        assert!(RoleMatchStrategy::TokenOverlap.matches("Business Analyst", title));
        assert!(!RoleMatchStrategy::TokenOverlap.matches("Plant Engineer", title));
        assert!(RoleMatchStrategy::Exact.matches(" data analyst ", title));
        assert!(!RoleMatchStrategy::Exact.matches("Senior Data Analyst", title));
        assert!(!RoleMatchStrategy::Substring.matches("", title));
    }

    #[test]
    fn test_matches_by_role_uses_strategy() {
        let results = vec![
            result("A", "Senior Data Analyst", Experience::Known(1), &[], None),
            result("B", "Business Analyst", Experience::Known(1), &[], None),
            result("C", "Plant Engineer", Experience::Known(1), &[], None),
        ];
        let substring = PopulationSummarizer::new(RoleMatchStrategy::Substring).summarize("Data Analyst", &results);
        assert_eq!(substring.matches_by_role, 1);

        let overlap = PopulationSummarizer::new(RoleMatchStrategy::TokenOverlap).summarize("Data Analyst", &results);
        assert_eq!(overlap.matches_by_role, 2);
    }
}
