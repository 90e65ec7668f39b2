//! Weighted aggregation of skill, experience and education sub-scores
//! into a single job match result.

use crate::matching::education_matcher::{EducationCurve, EducationMatch, EducationMatcher};
use crate::matching::experience_matcher::{ExperienceAnalysis, ExperienceMatcher};
use crate::matching::skill_matcher::{SkillAnalysis, SkillMatcher};
use crate::model::{CandidateProfile, JobRequirements};
use crate::score::{clamp_score, round2};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Confidence never reaches full certainty
pub const MAX_CONFIDENCE: f64 = 99.9;

const SKILL_COMPLETENESS_WEIGHT: f64 = 0.6;
const EXPERIENCE_CONFIDENCE_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchRecommendation {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Strong Match")]
    Strong,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Weak Match")]
    Weak,
}

impl MatchRecommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            MatchRecommendation::Excellent
        } else if score >= 70.0 {
            MatchRecommendation::Strong
        } else if score >= 55.0 {
            MatchRecommendation::Good
        } else if score >= 40.0 {
            MatchRecommendation::Moderate
        } else {
            MatchRecommendation::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchRecommendation::Excellent => "Excellent Match",
            MatchRecommendation::Strong => "Strong Match",
            MatchRecommendation::Good => "Good Match",
            MatchRecommendation::Moderate => "Moderate Match",
            MatchRecommendation::Weak => "Weak Match",
        }
    }
}

impl fmt::Display for MatchRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

/// Output of [`MatchScorer::calculate_overall_score`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub overall_score: f64,
    pub confidence_score: f64,
    pub recommendation: MatchRecommendation,
    pub category_scores: CategoryScores,
    pub weights_used: MatchWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub severity: Severity,
}

/// Gap analysis supplied by the caller and carried through unchanged.
/// Fields the scorer does not know about are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapAnalysis {
    pub critical_gaps: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub experience_gaps: Vec<String>,
    pub education_gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub estimated_time_to_ready: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl GapAnalysis {
    pub fn is_empty(&self) -> bool {
        self.critical_gaps.is_empty()
            && self.skill_gaps.is_empty()
            && self.experience_gaps.is_empty()
            && self.education_gaps.is_empty()
            && self.recommendations.is_empty()
            && self.estimated_time_to_ready.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthArea {
    pub area: String,
    pub score: f64,
    pub description: String,
}

/// Full evaluation of one candidate against one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub job_title: String,
    pub overall_score: f64,
    pub confidence_score: f64,
    pub recommendation: MatchRecommendation,
    pub category_scores: CategoryScores,
    #[serde(default)]
    pub skill_analysis: Option<SkillAnalysis>,
    #[serde(default)]
    pub experience_analysis: Option<ExperienceAnalysis>,
    #[serde(default)]
    pub education_match: Option<EducationMatch>,
    #[serde(default)]
    pub gap_analysis: GapAnalysis,
    #[serde(default)]
    pub strength_areas: Vec<StrengthArea>,
}

/// Runs the three sub-matchers and combines their scores
#[derive(Debug, Clone)]
pub struct MatchScorer {
    skill_matcher: SkillMatcher,
    experience_matcher: ExperienceMatcher,
    education_matcher: EducationMatcher,
    weights: MatchWeights,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::with_experience_matcher(ExperienceMatcher::default())
    }
}

impl MatchScorer {
    pub fn new(as_of: NaiveDate) -> Self {
        Self::with_experience_matcher(ExperienceMatcher::new(as_of))
    }

    fn with_experience_matcher(experience_matcher: ExperienceMatcher) -> Self {
        Self {
            skill_matcher: SkillMatcher::new(),
            experience_matcher,
            education_matcher: EducationMatcher::new(EducationCurve::JOB_MATCH),
            weights: MatchWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Evaluate a candidate against a job.
    ///
    /// `gaps` is passed through into the result; `None` yields an empty
    /// gap analysis.
    pub fn evaluate(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirements,
        gaps: Option<GapAnalysis>,
    ) -> MatchResult {
        let skill_analysis = self.skill_matcher.match_skills(
            &profile.skills,
            &job.required_skills,
            &job.preferred_skills,
        );
        let experience_analysis = self
            .experience_matcher
            .match_experience(&profile.experience, job);
        let education_match = self
            .education_matcher
            .match_education(&profile.education, &job.education_required);

        let summary =
            self.calculate_overall_score(&skill_analysis, &experience_analysis, &education_match);
        let strength_areas =
            identify_strengths(&skill_analysis, &experience_analysis, &education_match);

        debug!(
            "Match for '{}' against '{}': {:.2} ({})",
            profile.display_name(),
            job.job_title,
            summary.overall_score,
            summary.recommendation
        );

        MatchResult {
            job_title: job.job_title.clone(),
            overall_score: summary.overall_score,
            confidence_score: summary.confidence_score,
            recommendation: summary.recommendation,
            category_scores: summary.category_scores,
            skill_analysis: Some(skill_analysis),
            experience_analysis: Some(experience_analysis),
            education_match: Some(education_match),
            gap_analysis: gaps.unwrap_or_default(),
            strength_areas,
        }
    }

    pub fn calculate_overall_score(
        &self,
        skill_analysis: &SkillAnalysis,
        experience_analysis: &ExperienceAnalysis,
        education_match: &EducationMatch,
    ) -> ScoreSummary {
        let skills = clamp_score(skill_analysis.overall_skill_score);
        let experience = clamp_score(experience_analysis.overall_experience_score);
        let education = clamp_score(education_match.score);

        let overall = clamp_score(
            skills * self.weights.skills
                + experience * self.weights.experience
                + education * self.weights.education,
        );

        ScoreSummary {
            overall_score: round2(overall),
            confidence_score: round2(confidence(skill_analysis, experience_analysis)),
            recommendation: MatchRecommendation::from_score(overall),
            category_scores: CategoryScores {
                skills: round2(skills),
                experience: round2(experience),
                education: round2(education),
            },
            weights_used: self.weights,
        }
    }
}

fn confidence(skill_analysis: &SkillAnalysis, experience_analysis: &ExperienceAnalysis) -> f64 {
    let skill_completeness = if skill_analysis.total_required_skills > 0 {
        skill_analysis.required_skills_matched.len() as f64
            / skill_analysis.total_required_skills as f64
    } else {
        1.0
    };

    let experience_confidence = if experience_analysis.meets_minimum_requirement {
        1.0
    } else {
        0.5
    };

    let confidence = (skill_completeness * SKILL_COMPLETENESS_WEIGHT
        + experience_confidence * EXPERIENCE_CONFIDENCE_WEIGHT)
        * 100.0;
    confidence.min(MAX_CONFIDENCE)
}

fn identify_strengths(
    skills: &SkillAnalysis,
    experience: &ExperienceAnalysis,
    education: &EducationMatch,
) -> Vec<StrengthArea> {
    let mut strengths = Vec::new();

    if skills.required_match_percentage >= 80.0 {
        strengths.push(StrengthArea {
            area: "Required Skills".to_string(),
            score: skills.required_match_percentage,
            description: format!(
                "Strong match on required skills ({} out of {} matched)",
                skills.required_skills_matched.len(),
                skills.total_required_skills
            ),
        });
    }

    if experience.exceeds_preferred {
        strengths.push(StrengthArea {
            area: "Experience".to_string(),
            score: experience.experience_score,
            description: format!(
                "Exceeds preferred experience ({} years)",
                experience.total_years_experience
            ),
        });
    }

    if experience.relevant_years_experience >= experience.required_years {
        strengths.push(StrengthArea {
            area: "Relevant Experience".to_string(),
            score: experience.relevance_score,
            description: format!(
                "Strong relevant experience ({} years in relevant roles)",
                experience.relevant_years_experience
            ),
        });
    }

    if education.meets_requirement {
        strengths.push(StrengthArea {
            area: "Education".to_string(),
            score: education.score,
            description: "Meets or exceeds education requirements".to_string(),
        });
    }

    if skills.preferred_match_percentage >= 70.0 {
        strengths.push(StrengthArea {
            area: "Preferred Skills".to_string(),
            score: skills.preferred_match_percentage,
            description: format!(
                "Strong match on preferred skills ({} matched)",
                skills.preferred_skills_matched.len()
            ),
        });
    }

    strengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, Experience, SkillList, Skills};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn job() -> JobRequirements {
        JobRequirements {
            job_title: "Backend Engineer".to_string(),
            required_skills: vec!["Python".to_string(), "AWS".to_string()],
            preferred_skills: vec!["Docker".to_string()],
            experience_required: 4.0,
            experience_preferred: 6.0,
            education_required: "Bachelor's degree".to_string(),
            technologies: vec!["python".to_string()],
            ..Default::default()
        }
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            experience: vec![Experience {
                title: "Python Developer".to_string(),
                start_date: Some("2018-01-01".to_string()),
                end_date: Some("present".to_string()),
                ..Default::default()
            }],
            education: vec![Education {
                degree: "Bachelor of Science".to_string(),
                ..Default::default()
            }],
            skills: Skills {
                technical: SkillList::Flat(vec!["python".to_string(), "docker".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(MatchRecommendation::from_score(85.0), MatchRecommendation::Excellent);
        assert_eq!(MatchRecommendation::from_score(84.99), MatchRecommendation::Strong);
        assert_eq!(MatchRecommendation::from_score(55.0), MatchRecommendation::Good);
        assert_eq!(MatchRecommendation::from_score(40.0), MatchRecommendation::Moderate);
        assert_eq!(MatchRecommendation::from_score(39.9), MatchRecommendation::Weak);
        assert_eq!(
            serde_json::to_string(&MatchRecommendation::Strong).unwrap(),
            r#""Strong Match""#
        );
    }

    #[test]
    fn test_overall_score_weights() {
        let scorer = MatchScorer::new(as_of());
        let skills = SkillAnalysis {
            overall_skill_score: 80.0,
            ..Default::default()
        };
        let experience = ExperienceAnalysis {
            overall_experience_score: 60.0,
            meets_minimum_requirement: true,
            ..Default::default()
        };
        let education = EducationMatch {
            score: 100.0,
            ..Default::default()
        };

        let summary = scorer.calculate_overall_score(&skills, &experience, &education);
        // 80*0.5 + 60*0.3 + 100*0.2
        assert_eq!(summary.overall_score, 78.0);
        assert_eq!(summary.recommendation, MatchRecommendation::Strong);
        assert_eq!(summary.weights_used, MatchWeights::default());
    }

    #[test]
    fn test_confidence_is_capped() {
        let scorer = MatchScorer::new(as_of());
        let experience = ExperienceAnalysis {
            meets_minimum_requirement: true,
            ..Default::default()
        };
        let summary = scorer.calculate_overall_score(
            &SkillAnalysis::default(),
            &experience,
            &EducationMatch::default(),
        );
        assert_eq!(summary.confidence_score, MAX_CONFIDENCE);
    }

    #[test]
    fn test_evaluate_half_skill_coverage() {
        let scorer = MatchScorer::new(as_of());
        let result = scorer.evaluate(&profile(), &job(), None);

        let skills = result.skill_analysis.as_ref().unwrap();
        assert_eq!(skills.required_match_percentage, 50.0);
        assert_eq!(skills.required_skills_missing, vec!["AWS".to_string()]);
        // one of two required matched, experience met
        assert_eq!(result.confidence_score, 70.0);
        assert!(result.gap_analysis.is_empty());
        assert!(result
            .strength_areas
            .iter()
            .any(|s| s.area == "Education"));
        assert!(result
            .strength_areas
            .iter()
            .all(|s| s.area != "Required Skills"));
        assert!((0.0..=100.0).contains(&result.overall_score));
    }

    #[test]
    fn test_gap_analysis_passes_through() {
        let scorer = MatchScorer::new(as_of());
        let gaps: GapAnalysis = serde_json::from_str(
            r#"{"critical_gaps": ["AWS"], "skill_gaps": [{"skill": "AWS", "severity": "high"}], "note": "manual review"}"#,
        )
        .unwrap();

        let result = scorer.evaluate(&profile(), &job(), Some(gaps.clone()));
        assert_eq!(result.gap_analysis, gaps);
        assert_eq!(result.gap_analysis.skill_gaps[0].severity, Severity::High);
        assert!(result.gap_analysis.extra.contains_key("note"));
    }
}
