//! Population statistics over final scores

use crate::score::round2;
use serde::{Deserialize, Serialize};

const QUALIFIED_SCORE: f64 = 60.0;
const HIGHLY_QUALIFIED_SCORE: f64 = 75.0;
/// Fewer scores than this and the top-10% cutoff is simply the maximum
const DECILE_MIN_SAMPLES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingStatistics {
    pub mean_score: f64,
    pub median_score: f64,
    /// Sample standard deviation, 0 for a single score
    pub std_deviation: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub score_range: f64,
    pub top_10_percent_cutoff: f64,
    pub qualified_candidates: usize,
    pub highly_qualified_candidates: usize,
}

impl RankingStatistics {
    /// `None` for an empty score list
    pub fn calculate(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        let cutoff = if sorted.len() >= DECILE_MIN_SAMPLES {
            ninth_decile(&sorted)
        } else {
            max
        };

        Some(Self {
            mean_score: round2(mean(scores)),
            median_score: round2(median(scores)),
            std_deviation: round2(sample_std_deviation(scores)),
            min_score: round2(min),
            max_score: round2(max),
            score_range: round2(max - min),
            top_10_percent_cutoff: round2(cutoff),
            qualified_candidates: scores.iter().filter(|s| **s >= QUALIFIED_SCORE).count(),
            highly_qualified_candidates: scores
                .iter()
                .filter(|s| **s >= HIGHLY_QUALIFIED_SCORE)
                .count(),
        })
    }
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value (mean of the two middle values for an even count), 0 for an empty slice
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Standard deviation with Bessel's correction
pub fn sample_std_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Last of the nine decile cut points, exclusive method.
///
/// With `m = n + 1` the cut point sits at position `9m / 10` (1-based)
/// and is linearly interpolated between its neighbours. Requires
/// `sorted.len() >= 2`.
fn ninth_decile(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let m = n + 1;
    let j = (9 * m / 10).clamp(1, n - 1);
    let delta = (9 * m - 10 * j) as f64;
    (sorted[j - 1] * (10.0 - delta) + sorted[j] * delta) / 10.0
}
