//! Multi-criteria ranking of candidate sets

pub mod compare;
pub mod dimensions;
pub mod ranker;
pub mod statistics;
pub mod weights;

pub use compare::{compare, CandidateSnapshot, Comparison, Side};
pub use dimensions::DimensionScorer;
pub use ranker::{
    CandidateRanker, HiringRecommendation, InterviewPriority, RankingCandidate, RankingEntry,
    RankingOptions, RankingReport, Tier, TierDistribution,
};
pub use statistics::RankingStatistics;
pub use weights::{RankingDimension, RankingWeights};
