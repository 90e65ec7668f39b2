//! Market benchmarking of a single candidate

pub mod benchmarks;
pub mod competitive;

pub use benchmarks::{Industry, IndustryBenchmark, IndustryClassifier, SalaryRange};
pub use competitive::{
    CompetitiveAdvantage, CompetitiveAnalyzer, CompetitiveProfile, CompetitivenessLevel,
    ImprovementPriority, MarketPosition, RelativeRanking,
};
