//! Set-overlap scoring between candidate skills and job skill lists

use crate::model::Skills;
use crate::score::{coverage_percentage, round2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weight of required-skill coverage in the overall skill score
pub const REQUIRED_WEIGHT: f64 = 0.7;
/// Weight of preferred-skill coverage in the overall skill score
pub const PREFERRED_WEIGHT: f64 = 0.3;

/// Skill matcher for exact and normalized-substring matching
#[derive(Debug, Clone, Default)]
pub struct SkillMatcher;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillAnalysis {
    pub required_skills_matched: Vec<String>,
    pub required_skills_missing: Vec<String>,
    pub required_match_percentage: f64,
    pub preferred_skills_matched: Vec<String>,
    pub preferred_skills_missing: Vec<String>,
    pub preferred_match_percentage: f64,
    pub overall_skill_score: f64,
    pub total_candidate_skills: usize,
    pub total_required_skills: usize,
    pub total_preferred_skills: usize,
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Match candidate skills against the required and preferred lists.
    ///
    /// An empty list is vacuously satisfied (100% coverage).
    pub fn match_skills(
        &self,
        candidate_skills: &Skills,
        required_skills: &[String],
        preferred_skills: &[String],
    ) -> SkillAnalysis {
        let all_candidate_skills = Self::flatten(candidate_skills);

        let (required_matched, required_missing) =
            self.partition(&all_candidate_skills, required_skills);
        let (preferred_matched, preferred_missing) =
            self.partition(&all_candidate_skills, preferred_skills);

        let required_score = coverage_percentage(required_matched.len(), required_skills.len());
        let preferred_score = coverage_percentage(preferred_matched.len(), preferred_skills.len());

        let overall_skill_score =
            required_score * REQUIRED_WEIGHT + preferred_score * PREFERRED_WEIGHT;

        SkillAnalysis {
            required_skills_matched: required_matched,
            required_skills_missing: required_missing,
            required_match_percentage: round2(required_score),
            preferred_skills_matched: preferred_matched,
            preferred_skills_missing: preferred_missing,
            preferred_match_percentage: round2(preferred_score),
            overall_skill_score: round2(overall_skill_score),
            total_candidate_skills: all_candidate_skills.len(),
            total_required_skills: required_skills.len(),
            total_preferred_skills: preferred_skills.len(),
        }
    }

    /// Lower-cased set of every non-blank candidate skill
    pub fn flatten(skills: &Skills) -> BTreeSet<String> {
        skills
            .all()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether `skill` is present in the candidate's flattened set
    pub fn skill_exists(&self, skill: &str, candidate_skills: &BTreeSet<String>) -> bool {
        let skill_lower = skill.trim().to_lowercase();

        if candidate_skills.contains(&skill_lower) {
            return true;
        }

        let skill_normalized = normalize(&skill_lower);
        if skill_normalized.is_empty() {
            return false;
        }

        candidate_skills.iter().any(|candidate_skill| {
            let candidate_normalized = normalize(candidate_skill);
            !candidate_normalized.is_empty()
                && (candidate_normalized.contains(&skill_normalized)
                    || skill_normalized.contains(&candidate_normalized))
        })
    }

    fn partition(
        &self,
        candidate_skills: &BTreeSet<String>,
        wanted: &[String],
    ) -> (Vec<String>, Vec<String>) {
        wanted
            .iter()
            .cloned()
            .partition(|skill| self.skill_exists(skill, candidate_skills))
    }
}

/// Strip punctuation, keeping word characters and whitespace
fn normalize(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillList;

    fn skills(technical: &[&str]) -> Skills {
        Skills {
            technical: SkillList::Flat(technical.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_required_coverage() {
        let matcher = SkillMatcher::new();
        let analysis = matcher.match_skills(
            &skills(&["python", "docker"]),
            &list(&["Python", "AWS"]),
            &[],
        );

        assert_eq!(analysis.required_match_percentage, 50.0);
        assert_eq!(analysis.required_skills_missing, vec!["AWS".to_string()]);
        assert_eq!(analysis.required_skills_matched, vec!["Python".to_string()]);
        // 50 * 0.7 + 100 * 0.3
        assert_eq!(analysis.overall_skill_score, 65.0);
    }

    #[test]
    fn test_empty_required_list_is_fully_covered() {
        let matcher = SkillMatcher::new();
        let analysis = matcher.match_skills(&skills(&[]), &[], &list(&["Go"]));

        assert_eq!(analysis.required_match_percentage, 100.0);
        assert_eq!(analysis.preferred_match_percentage, 0.0);
        assert_eq!(analysis.overall_skill_score, 70.0);
    }

    #[test]
    fn test_punctuation_variants_match_by_substring() {
        let matcher = SkillMatcher::new();
        let set = SkillMatcher::flatten(&skills(&["Amazon Web Services (AWS)", "Node.js"]));

        assert!(matcher.skill_exists("AWS", &set));
        assert!(matcher.skill_exists("nodejs", &set));
        assert!(!matcher.skill_exists("Kubernetes", &set));
    }

    #[test]
    fn test_punctuation_only_skill_needs_exact_match() {
        let matcher = SkillMatcher::new();
        let set = SkillMatcher::flatten(&skills(&["rust"]));
        assert!(!matcher.skill_exists("++", &set));
    }

    #[test]
    fn test_flatten_lowercases_and_dedups_across_categories() {
        let profile_skills = Skills {
            technical: SkillList::Flat(list(&["Rust", "rust", " "])),
            soft: list(&["Teamwork"]),
            languages: list(&["English"]),
        };
        let set = SkillMatcher::flatten(&profile_skills);
        assert_eq!(set.len(), 3);
        assert!(set.contains("teamwork"));
    }
}
