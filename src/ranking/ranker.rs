//! Multi-candidate ranking
//!
//! Each candidate is scored independently on the seven ranking dimensions;
//! the weighted sum becomes its final score. Candidates are then ordered,
//! and rank, percentile and tier are derived from that order in one final
//! pass shared by the sequential and concurrent entry points.

use crate::error::Result;
use crate::matching::MatchResult;
use crate::model::{Availability, CandidateProfile, JobRequirements};
use crate::ranking::dimensions::DimensionScorer;
use crate::ranking::statistics::RankingStatistics;
use crate::ranking::weights::{RankingDimension, RankingWeights};
use crate::score::{clamp_score, round2};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinSet;

const STRENGTH_THRESHOLD: f64 = 75.0;
const WEAKNESS_THRESHOLD: f64 = 60.0;
/// Dimensions weighted below this are never reported as weaknesses
const WEAKNESS_MIN_WEIGHT: f64 = 0.10;
const HIGHLIGHT_COUNT: usize = 3;

/// One candidate submitted for ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingCandidate {
    pub candidate_id: String,
    #[serde(alias = "resume_data")]
    pub profile: CandidateProfile,
    /// Precomputed job match; its skill analysis is reused when present
    #[serde(alias = "match_data")]
    pub match_result: Option<MatchResult>,
    pub availability: Availability,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingOptions {
    /// Replace names with "Candidate N" (N = 1-based input position)
    pub anonymize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Tier::S
        } else if score >= 75.0 {
            Tier::A
        } else if score >= 60.0 {
            Tier::B
        } else if score >= 45.0 {
            Tier::C
        } else {
            Tier::D
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl InterviewPriority {
    pub fn assess(final_score: f64, skills_score: f64) -> Self {
        if final_score >= 85.0 && skills_score >= 80.0 {
            InterviewPriority::Urgent
        } else if final_score >= 70.0 {
            InterviewPriority::High
        } else if final_score >= 55.0 {
            InterviewPriority::Medium
        } else {
            InterviewPriority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewPriority::Urgent => "urgent",
            InterviewPriority::High => "high",
            InterviewPriority::Medium => "medium",
            InterviewPriority::Low => "low",
        }
    }
}

impl fmt::Display for InterviewPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiringRecommendation {
    StrongRecommend,
    Recommend,
    Consider,
    Maybe,
    NotRecommended,
}

impl HiringRecommendation {
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 85.0 {
            HiringRecommendation::StrongRecommend
        } else if final_score >= 70.0 {
            HiringRecommendation::Recommend
        } else if final_score >= 55.0 {
            HiringRecommendation::Consider
        } else if final_score >= 40.0 {
            HiringRecommendation::Maybe
        } else {
            HiringRecommendation::NotRecommended
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HiringRecommendation::StrongRecommend => {
                "STRONG RECOMMEND - Top-tier candidate, schedule interview immediately"
            }
            HiringRecommendation::Recommend => {
                "RECOMMEND - Strong candidate, proceed with interview"
            }
            HiringRecommendation::Consider => {
                "CONSIDER - Meets basic requirements, interview if pipeline permits"
            }
            HiringRecommendation::Maybe => {
                "MAYBE - Below target, consider only if limited options"
            }
            HiringRecommendation::NotRecommended => {
                "NOT RECOMMENDED - Significant gaps in qualifications"
            }
        }
    }
}

impl fmt::Display for HiringRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub candidate_id: String,
    pub candidate_name: String,
    pub final_score: f64,
    pub category_scores: BTreeMap<RankingDimension, f64>,
    /// 1-based position after sorting
    pub rank: usize,
    pub percentile: f64,
    pub tier: Tier,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: HiringRecommendation,
    pub interview_priority: InterviewPriority,
    /// Overall job match score, 0 when no match result was attached
    pub match_summary: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    #[serde(rename = "S_tier")]
    pub s: usize,
    #[serde(rename = "A_tier")]
    pub a: usize,
    #[serde(rename = "B_tier")]
    pub b: usize,
    #[serde(rename = "C_tier")]
    pub c: usize,
    #[serde(rename = "D_tier")]
    pub d: usize,
}

impl TierDistribution {
    pub fn record(&mut self, tier: Tier) {
        match tier {
            Tier::S => self.s += 1,
            Tier::A => self.a += 1,
            Tier::B => self.b += 1,
            Tier::C => self.c += 1,
            Tier::D => self.d += 1,
        }
    }

    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::S => self.s,
            Tier::A => self.a,
            Tier::B => self.b,
            Tier::C => self.c,
            Tier::D => self.d,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub total_candidates: usize,
    pub ranked_candidates: Vec<RankingEntry>,
    pub tier_distribution: TierDistribution,
    /// Absent when there are no candidates
    pub statistics: Option<RankingStatistics>,
    pub weights_used: RankingWeights,
    pub ranking_criteria: Vec<RankingDimension>,
}

impl RankingReport {
    pub fn find(&self, candidate_id: &str) -> Option<&RankingEntry> {
        self.ranked_candidates
            .iter()
            .find(|entry| entry.candidate_id == candidate_id)
    }
}

#[derive(Debug, Clone)]
pub struct CandidateRanker {
    dimensions: DimensionScorer,
}

impl CandidateRanker {
    pub fn new(as_of: NaiveDate) -> Result<Self> {
        Ok(Self {
            dimensions: DimensionScorer::new(as_of)?,
        })
    }

    /// Rank candidates for a job. `weights` of `None` uses the defaults.
    pub fn rank(
        &self,
        candidates: &[RankingCandidate],
        job: &JobRequirements,
        weights: Option<&RankingWeights>,
        options: &RankingOptions,
    ) -> RankingReport {
        info!("Starting candidate ranking for {} candidates", candidates.len());

        let weights = resolve_weights(weights.cloned());
        let entries = candidates
            .iter()
            .enumerate()
            .map(|(position, candidate)| {
                self.score_candidate(candidate, job, &weights, position, options)
            })
            .collect();

        self.finalize(entries, weights)
    }

    /// Same result as [`rank`](Self::rank), with per-candidate scoring spread
    /// over blocking tasks and gathered back in input order.
    pub async fn rank_concurrent(
        self: &Arc<Self>,
        candidates: Vec<RankingCandidate>,
        job: JobRequirements,
        weights: Option<RankingWeights>,
        options: RankingOptions,
    ) -> Result<RankingReport> {
        info!(
            "Starting concurrent candidate ranking for {} candidates",
            candidates.len()
        );

        let weights = Arc::new(resolve_weights(weights));
        let job = Arc::new(job);
        let total = candidates.len();

        let mut tasks = JoinSet::new();
        for (position, candidate) in candidates.into_iter().enumerate() {
            let ranker = Arc::clone(self);
            let job = Arc::clone(&job);
            let weights = Arc::clone(&weights);
            tasks.spawn_blocking(move || {
                let entry = ranker.score_candidate(&candidate, &job, &weights, position, &options);
                (position, entry)
            });
        }

        let mut scored = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            scored.push(joined?);
        }
        scored.sort_by_key(|(position, _)| *position);

        let entries = scored.into_iter().map(|(_, entry)| entry).collect();
        Ok(self.finalize(entries, (*weights).clone()))
    }

    /// Score one candidate. Rank and percentile are left at 0 until
    /// the candidate set is finalized.
    pub fn score_candidate(
        &self,
        candidate: &RankingCandidate,
        job: &JobRequirements,
        weights: &RankingWeights,
        position: usize,
        options: &RankingOptions,
    ) -> RankingEntry {
        let scores = self.dimensions.score_all(candidate, job);

        let weighted: f64 = scores
            .iter()
            .map(|(dim, score)| score * weights.get(*dim))
            .sum();
        let final_score = round2(clamp_score(weighted));

        let (strengths, weaknesses) = strengths_and_weaknesses(&scores, weights);
        let skills_score = scores
            .get(&RankingDimension::SkillsMatch)
            .copied()
            .unwrap_or(0.0);

        let candidate_name = if options.anonymize {
            format!("Candidate {}", position + 1)
        } else {
            candidate.profile.display_name().to_string()
        };

        debug!(
            "Scored candidate '{}' at {:.2}",
            candidate.candidate_id, final_score
        );

        RankingEntry {
            candidate_id: candidate.candidate_id.clone(),
            candidate_name,
            final_score,
            category_scores: scores.into_iter().map(|(d, s)| (d, round2(s))).collect(),
            rank: 0,
            percentile: 0.0,
            tier: Tier::from_score(final_score),
            strengths,
            weaknesses,
            recommendation: HiringRecommendation::from_score(final_score),
            interview_priority: InterviewPriority::assess(final_score, skills_score),
            match_summary: candidate
                .match_result
                .as_ref()
                .map(|m| m.overall_score)
                .unwrap_or(0.0),
        }
    }

    /// Order entries by final score and derive rank, percentile and tier
    pub fn finalize(&self, mut entries: Vec<RankingEntry>, weights: RankingWeights) -> RankingReport {
        // Stable: equal scores keep input order
        entries.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

        let total = entries.len();
        let mut tier_distribution = TierDistribution::default();
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
            entry.percentile = round2((total - i) as f64 / total as f64 * 100.0);
            entry.tier = Tier::from_score(entry.final_score);
            tier_distribution.record(entry.tier);
        }

        let scores: Vec<f64> = entries.iter().map(|e| e.final_score).collect();

        RankingReport {
            total_candidates: total,
            tier_distribution,
            statistics: RankingStatistics::calculate(&scores),
            ranking_criteria: weights.criteria(),
            weights_used: weights,
            ranked_candidates: entries,
        }
    }
}

fn resolve_weights(weights: Option<RankingWeights>) -> RankingWeights {
    match weights {
        Some(custom) => {
            if !custom.is_normalized() {
                warn!(
                    "Ranking weights sum to {:.4}, not 1.0; using them as given",
                    custom.sum()
                );
            }
            custom
        }
        None => RankingWeights::default(),
    }
}

fn strengths_and_weaknesses(
    scores: &BTreeMap<RankingDimension, f64>,
    weights: &RankingWeights,
) -> (Vec<String>, Vec<String>) {
    let mut sorted: Vec<(RankingDimension, f64)> =
        scores.iter().map(|(d, s)| (*d, *s)).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let describe = |(dim, score): &(RankingDimension, f64)| format!("{}: {:.0}%", dim.label(), score);

    let mut strengths: Vec<String> = sorted
        .iter()
        .take(HIGHLIGHT_COUNT)
        .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
        .map(describe)
        .collect();

    let bottom_start = sorted.len().saturating_sub(HIGHLIGHT_COUNT);
    let mut weaknesses: Vec<String> = sorted[bottom_start..]
        .iter()
        .filter(|(dim, score)| *score < WEAKNESS_THRESHOLD && weights.get(*dim) >= WEAKNESS_MIN_WEIGHT)
        .map(describe)
        .collect();

    if strengths.is_empty() {
        strengths.push("Balanced skill set".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("No significant weaknesses identified".to_string());
    }

    (strengths, weaknesses)
}
