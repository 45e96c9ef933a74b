//! Input manager for loading ranking requests

use crate::error::{Result, TalentMatcherError};
use crate::input::file_detector::FileType;
use crate::processing::analyzer::AnalysisRequest;
use anyhow::Context;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, AnalysisRequest>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read and parse a JSON or TOML request file.
    pub async fn load_request(&mut self, path: &Path) -> Result<AnalysisRequest> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached request for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(TalentMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read request file {}", path.display()))?;

        let request: AnalysisRequest = match file_type {
            FileType::Json => {
                info!("Parsing JSON request: {}", path.display());
                serde_json::from_str(&content).map_err(|e| {
                    TalentMatcherError::RequestParsing(format!("{}: {}", path.display(), e))
                })?
            }
            FileType::Toml => {
                info!("Parsing TOML request: {}", path.display());
                toml::from_str(&content)?
            }
            FileType::Unknown => {
                return Err(TalentMatcherError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, request.clone());
        }

        Ok(request)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                TalentMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
