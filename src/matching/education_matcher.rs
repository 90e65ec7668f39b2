//! Ordinal degree-level comparison

use crate::model::Education;
use serde::{Deserialize, Serialize};

/// Degree keywords and their ordinal level. Matching is by lower-cased substring.
pub const EDUCATION_LEVELS: [(&str, u8); 7] = [
    ("high school", 1),
    ("associate", 2),
    ("bachelor", 3),
    ("master", 4),
    ("mba", 4),
    ("phd", 5),
    ("doctorate", 5),
];

/// Score assigned to each comparison outcome.
///
/// Job matching and candidate ranking grade education on different curves,
/// so the curve is chosen by whoever constructs the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationCurve {
    pub meets: f64,
    pub one_below: f64,
    pub below: f64,
    pub none: f64,
    /// Used when the job states no education requirement
    pub unspecified: f64,
}

impl EducationCurve {
    pub const JOB_MATCH: EducationCurve = EducationCurve {
        meets: 100.0,
        one_below: 75.0,
        below: 50.0,
        none: 25.0,
        unspecified: 50.0,
    };

    pub const RANKING: EducationCurve = EducationCurve {
        meets: 100.0,
        one_below: 70.0,
        below: 40.0,
        none: 20.0,
        unspecified: 75.0,
    };
}

impl Default for EducationCurve {
    fn default() -> Self {
        Self::JOB_MATCH
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationMatch {
    pub score: f64,
    pub meets_requirement: bool,
    pub candidate_level: u8,
    pub required_level: u8,
    pub details: String,
}

#[derive(Debug, Clone, Default)]
pub struct EducationMatcher {
    curve: EducationCurve,
}

impl EducationMatcher {
    pub fn new(curve: EducationCurve) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &EducationCurve {
        &self.curve
    }

    pub fn match_education(&self, education: &[Education], requirement: &str) -> EducationMatch {
        let candidate_level = candidate_level(education);

        if requirement.trim().is_empty() {
            return EducationMatch {
                score: self.curve.unspecified,
                meets_requirement: false,
                candidate_level,
                required_level: 0,
                details: "No education requirement specified".to_string(),
            };
        }

        let required_level = education_level(requirement);

        let (score, meets_requirement) = if candidate_level >= required_level {
            (self.curve.meets, true)
        } else if candidate_level + 1 == required_level {
            (self.curve.one_below, false)
        } else if candidate_level > 0 {
            (self.curve.below, false)
        } else {
            (self.curve.none, false)
        };

        EducationMatch {
            score,
            meets_requirement,
            candidate_level,
            required_level,
            details: format!(
                "Candidate has education level {}, required {}",
                candidate_level, required_level
            ),
        }
    }
}

/// Highest level whose keyword occurs in `text`, 0 if none
pub fn education_level(text: &str) -> u8 {
    let lower = text.to_lowercase();
    EDUCATION_LEVELS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, level)| *level)
        .max()
        .unwrap_or(0)
}

/// Highest level across all of a candidate's degrees
pub fn candidate_level(education: &[Education]) -> u8 {
    education
        .iter()
        .map(|edu| education_level(&edu.degree))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(name: &str) -> Education {
        Education {
            degree: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_level_is_highest_keyword_present() {
        assert_eq!(education_level("Bachelor's or Master's in CS"), 4);
        assert_eq!(education_level("PhD preferred"), 5);
        assert_eq!(education_level("Relevant degree"), 0);
        assert_eq!(candidate_level(&[degree("BSc"), degree("MBA")]), 4);
    }

    #[test]
    fn test_job_match_curve() {
        let matcher = EducationMatcher::new(EducationCurve::JOB_MATCH);
        let req = "Master's degree";

        let meets = matcher.match_education(&[degree("Master of Science")], req);
        assert_eq!(meets.score, 100.0);
        assert!(meets.meets_requirement);

        assert_eq!(matcher.match_education(&[degree("Bachelor of Arts")], req).score, 75.0);
        assert_eq!(matcher.match_education(&[degree("Associate")], req).score, 50.0);
        assert_eq!(matcher.match_education(&[], req).score, 25.0);
    }

    #[test]
    fn test_ranking_curve() {
        let matcher = EducationMatcher::new(EducationCurve::RANKING);
        let req = "PhD";

        assert_eq!(matcher.match_education(&[degree("Master")], req).score, 70.0);
        assert_eq!(matcher.match_education(&[degree("High School")], req).score, 40.0);
        assert_eq!(matcher.match_education(&[degree("Bootcamp")], req).score, 20.0);
    }

    #[test]
    fn test_blank_requirement_uses_neutral_score() {
        let job_match = EducationMatcher::new(EducationCurve::JOB_MATCH);
        let ranking = EducationMatcher::new(EducationCurve::RANKING);

        let blank = job_match.match_education(&[], "  ");
        assert_eq!(blank.score, 50.0);
        assert!(!blank.meets_requirement);
        assert_eq!(ranking.match_education(&[], "").score, 75.0);
    }

    #[test]
    fn test_unrecognised_requirement_is_met_by_anyone() {
        let matcher = EducationMatcher::default();
        let result = matcher.match_education(&[], "Relevant degree");
        assert_eq!(result.required_level, 0);
        assert!(result.meets_requirement);
        assert_eq!(result.score, 100.0);
    }
}
