//! Input manager for the JSON documents fed to the scorer

use crate::error::{Result, ScorerError};
use crate::matching::GapAnalysis;
use crate::model::{CandidateProfile, JobRequirements};
use crate::ranking::{RankingCandidate, RankingWeights};
use anyhow::Context;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
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

    /// Raw file contents, read once per path while caching is enabled
    pub async fn read_text(&mut self, path: &Path) -> Result<String> {
        // Check cache first
        if self.enable_cache {
            if let Some(cached) = self.cache.get(path) {
                debug!("Using cached contents for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        validate_extension(path)?;

        info!("Reading {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub async fn load_json<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let text = self.read_text(path).await?;
        let value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(value)
    }

    pub async fn load_profile(&mut self, path: &Path) -> Result<CandidateProfile> {
        self.load_json(path).await
    }

    pub async fn load_job(&mut self, path: &Path) -> Result<JobRequirements> {
        self.load_json(path).await
    }

    pub async fn load_candidates(&mut self, path: &Path) -> Result<Vec<RankingCandidate>> {
        let candidates: Vec<RankingCandidate> = self.load_json(path).await?;
        info!("Loaded {} candidates from {}", candidates.len(), path.display());
        Ok(candidates)
    }

    pub async fn load_weights(&mut self, path: &Path) -> Result<RankingWeights> {
        self.load_json(path).await
    }

    pub async fn load_gaps(&mut self, path: &Path) -> Result<GapAnalysis> {
        self.load_json(path).await
    }

    /// Peer match scores, a JSON array of numbers
    pub async fn load_peer_scores(&mut self, path: &Path) -> Result<Vec<f64>> {
        self.load_json(path).await
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn validate_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(()),
        Some(ext) => Err(ScorerError::InvalidInput(format!(
            "Unsupported file extension: .{} (expected .json)",
            ext
        ))),
        None => Err(ScorerError::InvalidInput(format!(
            "File has no extension: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_and_caches_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, r#"{"job_title": "SRE", "experience_required": 3}"#).unwrap();

        let mut manager = InputManager::new();
        let job = manager.load_job(&path).await.unwrap();
        assert_eq!(job.job_title, "SRE");
        assert_eq!(job.experience_required, 3.0);
        assert_eq!(manager.cache_size(), 1);

        // Served from cache even after the file changes
        std::fs::write(&path, r#"{"job_title": "Changed"}"#).unwrap();
        let cached = manager.load_job(&path).await.unwrap();
        assert_eq!(cached.job_title, "SRE");

        manager.clear_cache();
        assert_eq!(manager.load_job(&path).await.unwrap().job_title, "Changed");
    }

    #[tokio::test]
    async fn test_rejects_missing_and_non_json_files() {
        let dir = TempDir::new().unwrap();
        let mut manager = InputManager::new();

        let missing = dir.path().join("absent.json");
        assert!(matches!(
            manager.read_text(&missing).await,
            Err(ScorerError::InvalidInput(_))
        ));

        let text = dir.path().join("resume.txt");
        std::fs::write(&text, "plain text").unwrap();
        assert!(matches!(
            manager.read_text(&text).await,
            Err(ScorerError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = InputManager::new()
            .with_cache(false)
            .load_profile(&path)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
