//! Candidate-to-job matching

pub mod education_matcher;
pub mod experience_matcher;
pub mod match_scorer;
pub mod skill_matcher;

pub use education_matcher::{EducationCurve, EducationMatch, EducationMatcher};
pub use experience_matcher::{DurationError, ExperienceAnalysis, ExperienceMatcher};
pub use match_scorer::{
    CategoryScores, GapAnalysis, MatchRecommendation, MatchResult, MatchScorer, MatchWeights,
    ScoreSummary, Severity, SkillGap, StrengthArea,
};
pub use skill_matcher::{SkillAnalysis, SkillMatcher};
