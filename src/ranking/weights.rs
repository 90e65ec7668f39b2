//! Ranking dimensions and the weight map applied to them

use crate::error::{Result, ScorerError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Allowed deviation of a weight sum from 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// The seven criteria a candidate is ranked on. Declaration order is the
/// report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingDimension {
    SkillsMatch,
    ExperienceMatch,
    EducationMatch,
    CulturalFit,
    CareerTrajectory,
    Certifications,
    Availability,
}

impl RankingDimension {
    pub const ALL: [RankingDimension; 7] = [
        RankingDimension::SkillsMatch,
        RankingDimension::ExperienceMatch,
        RankingDimension::EducationMatch,
        RankingDimension::CulturalFit,
        RankingDimension::CareerTrajectory,
        RankingDimension::Certifications,
        RankingDimension::Availability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingDimension::SkillsMatch => "skills_match",
            RankingDimension::ExperienceMatch => "experience_match",
            RankingDimension::EducationMatch => "education_match",
            RankingDimension::CulturalFit => "cultural_fit",
            RankingDimension::CareerTrajectory => "career_trajectory",
            RankingDimension::Certifications => "certifications",
            RankingDimension::Availability => "availability",
        }
    }

    /// Title-cased name used in strengths and weaknesses
    pub fn label(&self) -> &'static str {
        match self {
            RankingDimension::SkillsMatch => "Skills Match",
            RankingDimension::ExperienceMatch => "Experience Match",
            RankingDimension::EducationMatch => "Education Match",
            RankingDimension::CulturalFit => "Cultural Fit",
            RankingDimension::CareerTrajectory => "Career Trajectory",
            RankingDimension::Certifications => "Certifications",
            RankingDimension::Availability => "Availability",
        }
    }

    pub fn default_weight(&self) -> f64 {
        match self {
            RankingDimension::SkillsMatch => 0.30,
            RankingDimension::ExperienceMatch => 0.25,
            RankingDimension::EducationMatch => 0.15,
            RankingDimension::CulturalFit => 0.10,
            RankingDimension::CareerTrajectory => 0.10,
            RankingDimension::Certifications => 0.05,
            RankingDimension::Availability => 0.05,
        }
    }
}

impl fmt::Display for RankingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight per dimension. A dimension absent from the map weighs 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingWeights(BTreeMap<RankingDimension, f64>);

impl Default for RankingWeights {
    fn default() -> Self {
        Self(
            RankingDimension::ALL
                .iter()
                .map(|dim| (*dim, dim.default_weight()))
                .collect(),
        )
    }
}

impl RankingWeights {
    pub fn new(weights: BTreeMap<RankingDimension, f64>) -> Self {
        Self(weights)
    }

    pub fn get(&self, dimension: RankingDimension) -> f64 {
        self.0.get(&dimension).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, dimension: RankingDimension, weight: f64) {
        self.0.insert(dimension, weight);
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_TOLERANCE
    }

    /// Reject negative or non-finite weights and sums other than 1.0
    pub fn validate(&self) -> Result<()> {
        if let Some((dim, weight)) = self
            .0
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(ScorerError::InvalidWeights(format!(
                "weight for {} must be a non-negative number, got {}",
                dim, weight
            )));
        }

        if !self.is_normalized() {
            return Err(ScorerError::InvalidWeights(format!(
                "weights must sum to 1.0, got {:.4}",
                self.sum()
            )));
        }

        Ok(())
    }

    /// Dimensions carrying a weight, in report order
    pub fn criteria(&self) -> Vec<RankingDimension> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RankingDimension, f64)> + '_ {
        self.0.iter().map(|(dim, w)| (*dim, *w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_normalized() {
        let weights = RankingWeights::default();
        assert!(weights.is_normalized());
        assert!(weights.validate().is_ok());
        assert_eq!(weights.criteria(), RankingDimension::ALL.to_vec());
    }

    #[test]
    fn test_missing_dimension_weighs_zero() {
        let weights: RankingWeights =
            serde_json::from_str(r#"{"skills_match": 0.6, "experience_match": 0.4}"#).unwrap();
        assert_eq!(weights.get(RankingDimension::CulturalFit), 0.0);
        assert!(weights.validate().is_ok());
        assert_eq!(weights.criteria().len(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let mut weights = RankingWeights::default();
        weights.set(RankingDimension::Availability, 0.5);
        assert!(matches!(
            weights.validate(),
            Err(ScorerError::InvalidWeights(_))
        ));

        let negative = RankingWeights::new(BTreeMap::from([
            (RankingDimension::SkillsMatch, 1.5),
            (RankingDimension::Availability, -0.5),
        ]));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_serializes_with_dimension_names() {
        let json = serde_json::to_value(RankingWeights::default()).unwrap();
        assert_eq!(json["skills_match"], 0.30);
        assert_eq!(json["availability"], 0.05);
    }
}
