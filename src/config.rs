//! Configuration management for the talent matcher

use crate::error::{Result, TalentMatcherError};
use crate::processing::matcher::DEFAULT_PREFERRED_SKILL_BONUS;
use crate::processing::summary::RoleMatchStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub summary: SummaryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// A factor at or above this sub-score yields a highlight
    pub highlight_threshold: f64,
    /// A required factor below this sub-score yields a concern
    pub concern_threshold: f64,
    /// Points added to the skills factor when every preferred skill matches
    pub preferred_skill_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub role_match: RoleMatchStrategy,
    pub top_skills_shown: usize,
    pub locations_shown: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            highlight_threshold: 70.0,
            concern_threshold: 40.0,
            preferred_skill_bonus: DEFAULT_PREFERRED_SKILL_BONUS,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            role_match: RoleMatchStrategy::Substring,
            top_skills_shown: 8,
            locations_shown: 5,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            summary: SummaryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, writing defaults if the file is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| TalentMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TalentMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("talent-matcher")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let in_range = |value: f64| (0.0..=100.0).contains(&value);

        if !in_range(self.scoring.highlight_threshold) {
            return Err(TalentMatcherError::Configuration(
                "scoring.highlight_threshold must be between 0 and 100".to_string(),
            ));
        }
        if !in_range(self.scoring.concern_threshold) {
            return Err(TalentMatcherError::Configuration(
                "scoring.concern_threshold must be between 0 and 100".to_string(),
            ));
        }
        if !in_range(self.scoring.preferred_skill_bonus) {
            return Err(TalentMatcherError::Configuration(
                "scoring.preferred_skill_bonus must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}
