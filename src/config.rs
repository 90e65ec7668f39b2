//! Configuration management for the candidate scorer

use crate::error::{Result, ScorerError};
use crate::ranking::{RankingDimension, RankingWeights};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "candidate-scorer";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub anonymize: bool,
    pub weights: WeightsConfig,
}

/// Ranking weights as they appear in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub cultural_fit: f64,
    pub career_trajectory: f64,
    pub certifications: f64,
    pub availability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fixed "present" date for reproducible runs; today when unset
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills_match: RankingDimension::SkillsMatch.default_weight(),
            experience_match: RankingDimension::ExperienceMatch.default_weight(),
            education_match: RankingDimension::EducationMatch.default_weight(),
            cultural_fit: RankingDimension::CulturalFit.default_weight(),
            career_trajectory: RankingDimension::CareerTrajectory.default_weight(),
            certifications: RankingDimension::Certifications.default_weight(),
            availability: RankingDimension::Availability.default_weight(),
        }
    }
}

impl From<&WeightsConfig> for RankingWeights {
    fn from(config: &WeightsConfig) -> Self {
        RankingWeights::new(BTreeMap::from([
            (RankingDimension::SkillsMatch, config.skills_match),
            (RankingDimension::ExperienceMatch, config.experience_match),
            (RankingDimension::EducationMatch, config.education_match),
            (RankingDimension::CulturalFit, config.cultural_fit),
            (RankingDimension::CareerTrajectory, config.career_trajectory),
            (RankingDimension::Certifications, config.certifications),
            (RankingDimension::Availability, config.availability),
        ]))
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

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file is created with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ScorerError::Configuration(format!(
                    "Failed to parse config {}: {}",
                    config_path.display(),
                    e
                ))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.ranking_weights()
            .validate()
            .map_err(|e| ScorerError::Configuration(format!("ranking.weights: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn ranking_weights(&self) -> RankingWeights {
        RankingWeights::from(&self.ranking.weights)
    }

    /// Reference date for duration calculations
    pub fn as_of(&self) -> NaiveDate {
        self.analysis
            .as_of
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[analysis]\nas_of = \"2024-06-30\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.as_of(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color_output);
        assert!(config.ranking_weights().is_normalized());
    }

    #[test]
    fn test_unnormalized_weights_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ranking.weights]\nskills_match = 0.9\n").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ScorerError::Configuration(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ranking\nanonymize = yes").unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ScorerError::Configuration(_))
        ));
    }
}
