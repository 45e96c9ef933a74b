//! Candidate attribute records, raw and normalized

use serde::{Deserialize, Serialize};
use std::fmt;

/// A case-insensitive set of display strings.
///
/// Membership is tested against a lower-cased shadow copy while the original
/// spelling and first-seen order are kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TermSet {
    display: Vec<String>,
    folded: Vec<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, trimming it first. Blank terms and case-insensitive
    /// duplicates are ignored. Returns whether the term was added.
    pub fn insert(&mut self, term: &str) -> bool {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return false;
        }

        let key = fold(trimmed);
        if self.folded.contains(&key) {
            return false;
        }

        self.display.push(trimmed.to_string());
        self.folded.push(key);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        let key = fold(term.trim());
        self.folded.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// Terms in display casing, first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.display.iter().map(String::as_str)
    }

    /// Lower-cased shadow keys, parallel to `iter`.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.folded.iter().map(String::as_str)
    }

    /// Pairs of (display, key).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().zip(self.keys())
    }

    /// Terms of `self` present in `other`, keeping `self`'s casing and order.
    pub fn intersection(&self, other: &TermSet) -> Vec<String> {
        self.entries()
            .filter(|(_, key)| other.folded.iter().any(|k| k == key))
            .map(|(display, _)| display.to_string())
            .collect()
    }

    /// Terms of `self` absent from `other`.
    pub fn difference(&self, other: &TermSet) -> Vec<String> {
        self.entries()
            .filter(|(_, key)| !other.folded.iter().any(|k| k == key))
            .map(|(display, _)| display.to_string())
            .collect()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.display.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        for term in iter {
            set.insert(term.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TermSet {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<TermSet> for Vec<String> {
    fn from(set: TermSet) -> Self {
        set.display
    }
}

/// Case folding used for every membership comparison.
pub fn fold(term: &str) -> String {
    term.to_lowercase()
}

/// Years of experience. `Unknown` is never conflated with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "years")]
pub enum Experience {
    Known(u32),
    Unknown,
}

impl Experience {
    pub fn years(&self) -> Option<u32> {
        match self {
            Experience::Known(years) => Some(*years),
            Experience::Unknown => None,
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Known(1) => write!(f, "1 year"),
            Experience::Known(years) => write!(f, "{} years", years),
            Experience::Unknown => write!(f, "unknown"),
        }
    }
}

/// Years of experience as reported by the extraction step: a number, a
/// free-text string such as "5 años", or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawExperience {
    Number(f64),
    Text(String),
}

/// Attributes extracted from one résumé, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCandidateAttributes {
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: String,
    pub years_experience: Option<RawExperience>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub summary: Option<String>,
}

/// Normalized candidate attributes. Read-only input to the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAttributes {
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: String,
    pub years_experience: Experience,
    pub skills: TermSet,
    pub languages: TermSet,
    pub education: TermSet,
    pub certifications: TermSet,
    pub summary: Option<String>,
}
