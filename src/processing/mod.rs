//! Candidate scoring and aggregation

pub mod candidate;
pub mod profile;
pub mod document;
pub mod normalizer;
pub mod weights;
pub mod matcher;
pub mod scorer;
pub mod summary;
pub mod ranking;
pub mod analyzer;
