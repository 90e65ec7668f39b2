//! Head-to-head comparison of two ranked candidates

use crate::model::CandidateProfile;
use crate::ranking::ranker::RankingEntry;
use crate::score::MAX_SCORE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a comparison needs to know about one side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSnapshot {
    pub candidate_id: String,
    pub final_score: f64,
    pub category_scores: BTreeMap<String, f64>,
    /// Used for the completeness fallback and section counts
    pub profile: Option<CandidateProfile>,
}

impl From<&RankingEntry> for CandidateSnapshot {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            candidate_id: entry.candidate_id.clone(),
            final_score: entry.final_score,
            category_scores: entry
                .category_scores
                .iter()
                .map(|(dim, score)| (dim.as_str().to_string(), *score))
                .collect(),
            profile: None,
        }
    }
}

impl CandidateSnapshot {
    pub fn with_profile(mut self, profile: CandidateProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Candidate1,
    Candidate2,
    Tie,
}

impl Side {
    fn leader<T: PartialOrd>(first: T, second: T) -> Self {
        if first > second {
            Side::Candidate1
        } else if second > first {
            Side::Candidate2
        } else {
            Side::Tie
        }
    }

    /// The same outcome seen from the other side
    pub fn flipped(&self) -> Self {
        match self {
            Side::Candidate1 => Side::Candidate2,
            Side::Candidate2 => Side::Candidate1,
            Side::Tie => Side::Tie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub candidate1: f64,
    pub candidate2: f64,
    pub leader: Side,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCount {
    pub candidate1_count: usize,
    pub candidate2_count: usize,
    pub leader: Side,
}

impl SectionCount {
    fn new(candidate1_count: usize, candidate2_count: usize) -> Self {
        Self {
            candidate1_count,
            candidate2_count,
            leader: Side::leader(candidate1_count, candidate2_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileComparison {
    pub skills: SectionCount,
    pub experience: SectionCount,
    pub education: SectionCount,
    pub certifications: SectionCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub candidate1_score: f64,
    pub candidate2_score: f64,
    pub score_difference: f64,
    pub winner: Side,
    /// Both final scores were 0 and completeness scores were used instead
    pub used_quality_fallback: bool,
    pub category_comparison: BTreeMap<String, CategoryComparison>,
    pub resume_comparison: ProfileComparison,
}

/// Compare two candidates on final score, shared categories and profile sections
pub fn compare(first: &CandidateSnapshot, second: &CandidateSnapshot) -> Comparison {
    let mut score1 = first.final_score;
    let mut score2 = second.final_score;

    let used_quality_fallback = score1 == 0.0
        && score2 == 0.0
        && (first.profile.is_some() || second.profile.is_some());
    if used_quality_fallback {
        score1 = first.profile.as_ref().map(quality_score).unwrap_or(0.0);
        score2 = second.profile.as_ref().map(quality_score).unwrap_or(0.0);
    }

    let category_comparison = first
        .category_scores
        .iter()
        .filter_map(|(category, s1)| {
            second.category_scores.get(category).map(|s2| {
                (
                    category.clone(),
                    CategoryComparison {
                        candidate1: *s1,
                        candidate2: *s2,
                        leader: Side::leader(*s1, *s2),
                        difference: (s1 - s2).abs(),
                    },
                )
            })
        })
        .collect();

    Comparison {
        candidate1_score: score1,
        candidate2_score: score2,
        score_difference: (score1 - score2).abs(),
        winner: Side::leader(score1, score2),
        used_quality_fallback,
        category_comparison,
        resume_comparison: compare_profiles(first.profile.as_ref(), second.profile.as_ref()),
    }
}

/// Completeness score of a profile, from 0 to 100
pub fn quality_score(profile: &CandidateProfile) -> f64 {
    let info = &profile.personal_info;
    let present = |field: &Option<String>| {
        field
            .as_deref()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    };

    let mut score = 0.0;
    for field in [&info.email, &info.phone, &info.location] {
        if present(field) {
            score += 5.0;
        }
    }

    score += (profile.skills.count() as f64 * 2.0).min(20.0);
    score += (profile.experience.len() as f64 * 10.0).min(30.0);
    score += (profile.education.len() as f64 * 8.0).min(20.0);
    score += (profile.certifications.len() as f64 * 3.0).min(15.0);

    score.min(MAX_SCORE)
}

fn compare_profiles(
    first: Option<&CandidateProfile>,
    second: Option<&CandidateProfile>,
) -> ProfileComparison {
    let count = |profile: Option<&CandidateProfile>, section: fn(&CandidateProfile) -> usize| {
        profile.map(section).unwrap_or(0)
    };
    let section = |f: fn(&CandidateProfile) -> usize| SectionCount::new(count(first, f), count(second, f));

    ProfileComparison {
        skills: section(|p| p.skills.count()),
        experience: section(|p| p.experience.len()),
        education: section(|p| p.education.len()),
        certifications: section(|p| p.certifications.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Certification, Education, Experience, PersonalInfo, SkillList, Skills};

    fn snapshot(id: &str, score: f64, categories: &[(&str, f64)]) -> CandidateSnapshot {
        CandidateSnapshot {
            candidate_id: id.to_string(),
            final_score: score,
            category_scores: categories
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            profile: None,
        }
    }

    #[test]
    fn test_winner_and_shared_categories() {
        let a = snapshot("a", 82.0, &[("skills_match", 90.0), ("availability", 50.0)]);
        let b = snapshot("b", 70.5, &[("skills_match", 75.0), ("availability", 50.0), ("cultural_fit", 60.0)]);

        let result = compare(&a, &b);
        assert_eq!(result.winner, Side::Candidate1);
        assert_eq!(result.score_difference, 11.5);
        assert_eq!(result.category_comparison.len(), 2);
        assert_eq!(result.category_comparison["skills_match"].leader, Side::Candidate1);
        assert_eq!(result.category_comparison["skills_match"].difference, 15.0);
        assert_eq!(result.category_comparison["availability"].leader, Side::Tie);
        assert!(!result.used_quality_fallback);
    }

    #[test]
    fn test_comparison_is_symmetric() {
        let a = snapshot("a", 64.0, &[("skills_match", 40.0), ("experience_match", 85.0)]);
        let b = snapshot("b", 71.0, &[("skills_match", 70.0), ("experience_match", 85.0)]);

        let ab = compare(&a, &b);
        let ba = compare(&b, &a);

        assert_eq!(ab.winner, ba.winner.flipped());
        assert_eq!(ab.score_difference, ba.score_difference);
        for (category, left) in &ab.category_comparison {
            let right = &ba.category_comparison[category];
            assert_eq!(left.leader, right.leader.flipped());
            assert_eq!(left.difference, right.difference);
            assert_eq!(left.candidate1, right.candidate2);
        }
    }

    #[test]
    fn test_equal_scores_tie() {
        let a = snapshot("a", 50.0, &[]);
        let b = snapshot("b", 50.0, &[]);
        assert_eq!(compare(&a, &b).winner, Side::Tie);
    }

    #[test]
    fn test_zero_scores_fall_back_to_completeness() {
        let full = CandidateProfile {
            personal_info: PersonalInfo {
                email: Some("a@example.com".to_string()),
                phone: Some("555-0100".to_string()),
                location: Some(" ".to_string()),
                ..Default::default()
            },
            skills: Skills {
                technical: SkillList::Flat(vec!["rust".to_string(); 12]),
                ..Default::default()
            },
            experience: vec![Experience::default(); 2],
            education: vec![Education::default()],
            certifications: vec![Certification::default(); 6],
        };
        // 10 + 20 + 20 + 8 + 15
        assert_eq!(quality_score(&full), 73.0);

        let a = snapshot("a", 0.0, &[]).with_profile(full);
        let b = snapshot("b", 0.0, &[]);
        let result = compare(&a, &b);
        assert!(result.used_quality_fallback);
        assert_eq!(result.candidate1_score, 73.0);
        assert_eq!(result.candidate2_score, 0.0);
        assert_eq!(result.winner, Side::Candidate1);
        assert_eq!(result.resume_comparison.experience.candidate1_count, 2);
        assert_eq!(result.resume_comparison.experience.leader, Side::Candidate1);
        assert_eq!(result.resume_comparison.skills.candidate2_count, 0);
    }

    #[test]
    fn test_zero_scores_without_profiles_tie() {
        let result = compare(&snapshot("a", 0.0, &[]), &snapshot("b", 0.0, &[]));
        assert!(!result.used_quality_fallback);
        assert_eq!(result.winner, Side::Tie);
        assert_eq!(result.resume_comparison.education.leader, Side::Tie);
    }
}
