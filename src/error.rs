//! Error handling for the talent matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid job profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request parsing error: {0}")]
    RequestParsing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

/// Shape violations rejected when a job profile is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("minimum experience must not be negative (got {0})")]
    NegativeMinExperience(i64),

    #[error("maximum experience must not be negative (got {0})")]
    NegativeMaxExperience(i64),

    #[error("maximum experience {max} is below minimum experience {min}")]
    ExperienceRangeInverted { min: u32, max: u32 },

    #[error("experience value {0} is out of range")]
    ExperienceOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, TalentMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for TalentMatcherError {
    fn from(err: anyhow::Error) -> Self {
        TalentMatcherError::AnalysisFailed(err.to_string())
    }
}

impl From<toml::de::Error> for TalentMatcherError {
    fn from(err: toml::de::Error) -> Self {
        TalentMatcherError::RequestParsing(err.to_string())
    }
}
