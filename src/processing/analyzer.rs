//! Analysis engine: runs a whole ranking request through the scoring pipeline

use crate::config::Config;
use crate::error::Result;
use crate::processing::document::{partition_ready, CandidateDocument, SkippedDocument};
use crate::processing::normalizer::AttributeNormalizer;
use crate::processing::profile::{JobProfile, JobProfileDraft};
use crate::processing::ranking::{rank, RankedCandidate};
use crate::processing::scorer::{CompatibilityScorer, ComparisonResult};
use crate::processing::summary::{PopulationSummarizer, TalentSummary};
use crate::processing::weights::PriorityWeights;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Coordinates normalization, scoring, ranking and summarizing.
pub struct AnalysisEngine {
    normalizer: AttributeNormalizer,
    scorer: CompatibilityScorer,
    summarizer: PopulationSummarizer,
}

/// Job profile, priority selection and the uploaded documents to rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub job_requirements: JobProfileDraft,
    #[serde(default)]
    pub filters: PriorityWeights,
    #[serde(default)]
    pub documents: Vec<CandidateDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub profile: JobProfile,
    pub results: Vec<RankedCandidate>,
    pub summary: TalentSummary,
    pub skipped: Vec<SkippedDocument>,
    /// Text to hand to the natural-language search service when nothing
    /// could be scored.
    pub fallback_query: Option<String>,
    pub processing_time_ms: u64,
}

impl AnalysisOutcome {
    pub fn needs_fallback(&self) -> bool {
        self.results.is_empty()
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: AttributeNormalizer::new(),
            scorer: CompatibilityScorer::new(&config.scoring),
            summarizer: PopulationSummarizer::new(config.summary.role_match),
        }
    }

    /// Validate the profile, then score every ready document.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        let start = Instant::now();

        let profile = JobProfile::try_from(request.job_requirements.clone())?;
        info!(
            "Analyzing {} document(s) for '{}'",
            request.documents.len(),
            profile.title()
        );

        let (ready, skipped) = partition_ready(&request.documents);
        for document in &skipped {
            warn!("Skipping document {}: {}", document.id, document.reason);
        }

        let scored: Vec<ComparisonResult> = ready
            .into_iter()
            .map(|(document, raw)| {
                let normalized = self.normalizer.normalize(raw);
                for warning in &normalized.warnings {
                    debug!("Document {}: {}", document.id, warning);
                }
                self.scorer
                    .score(&profile, normalized, &request.filters)
                    .with_document_id(document.id.clone())
            })
            .collect();

        let summary = self.summarizer.summarize(profile.title(), &scored);
        let results = rank(scored);

        let fallback_query = if results.is_empty() {
            info!("No candidates scored; preparing natural-language fallback query");
            Some(fallback_query(&profile))
        } else {
            None
        };

        Ok(AnalysisOutcome {
            profile,
            results,
            summary,
            skipped,
            fallback_query,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Free-text description of the profile for the external search service.
pub fn fallback_query(profile: &JobProfile) -> String {
    let mut parts = vec![profile.title().to_string()];

    if !profile.required_skills().is_empty() {
        parts.push(format!(
            "with {}",
            profile.required_skills().iter().collect::<Vec<_>>().join(", ")
        ));
    }
    if profile.min_experience() > 0 {
        parts.push(format!("{}+ years of experience", profile.min_experience()));
    }
    if let Some(location) = profile.location() {
        parts.push(format!("in {}", location));
    }
    if !profile.languages().is_empty() {
        parts.push(format!(
            "speaking {}",
            profile.languages().iter().collect::<Vec<_>>().join(", ")
        ));
    }

    parts.join(" ")
}
