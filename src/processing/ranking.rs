//! Candidate ranking by overall score

use crate::processing::candidate::fold;
use crate::processing::scorer::ComparisonResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking
    pub rank: usize,
    pub result: ComparisonResult,
}

/// Order by overall score (highest first). Ties fall back to candidate name
/// and then document id so the ranking is reproducible.
pub fn rank(results: Vec<ComparisonResult>) -> Vec<RankedCandidate> {
    let mut results = results;
    results.sort_by(compare);

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| RankedCandidate {
            rank: index + 1,
            result,
        })
        .collect()
}

fn compare(a: &ComparisonResult, b: &ComparisonResult) -> Ordering {
    b.overall_score
        .cmp(&a.overall_score)
        .then_with(|| fold(a.candidate_name()).cmp(&fold(b.candidate_name())))
        .then_with(|| a.document_id.cmp(&b.document_id))
}
