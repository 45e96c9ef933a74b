//! Ranking report assembled from an analysis outcome

use crate::processing::analyzer::AnalysisOutcome;
use crate::processing::document::SkippedDocument;
use crate::processing::profile::JobProfile;
use crate::processing::ranking::RankedCandidate;
use crate::processing::summary::TalentSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the formatters need to render one ranking run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    /// The validated job profile candidates were scored against
    pub job: JobProfile,

    /// Population statistics over every scored candidate
    pub summary: TalentSummary,

    /// Candidates in rank order
    pub candidates: Vec<RankedCandidate>,

    /// Documents left out of scoring
    pub skipped: Vec<SkippedDocument>,

    /// Query for the natural-language search service, set when nothing was scored
    pub fallback_query: Option<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub request_file: String,
    pub processing_time_ms: u64,
}

impl RankingReport {
    pub fn from_outcome(outcome: AnalysisOutcome, request_file: impl Into<String>) -> Self {
        Self {
            job: outcome.profile,
            summary: outcome.summary,
            candidates: outcome.results,
            skipped: outcome.skipped,
            fallback_query: outcome.fallback_query,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                request_file: request_file.into(),
                processing_time_ms: outcome.processing_time_ms,
            },
        }
    }

    /// The first `limit` candidates, or all of them.
    pub fn shortlist(&self, limit: Option<usize>) -> &[RankedCandidate] {
        match limit {
            Some(n) if n < self.candidates.len() => &self.candidates[..n],
            _ => &self.candidates,
        }
    }

    pub fn job_title(&self) -> &str {
        self.job.title()
    }
}
