//! Score clamping and rounding shared by every scorer

/// Upper bound of every score and sub-score
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a score into `[0, 100]`. NaN collapses to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_SCORE)
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to 2 decimal places, the precision every report uses.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// `numerator / denominator * 100`, with an empty denominator treated as full coverage.
pub fn coverage_percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return MAX_SCORE;
    }
    clamp_score(numerator as f64 / denominator as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(140.0), 100.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round_to(4.25, 1), 4.3);
    }

    #[test]
    fn test_empty_denominator_is_full_coverage() {
        assert_eq!(coverage_percentage(0, 0), 100.0);
        assert_eq!(coverage_percentage(1, 2), 50.0);
    }
}
