//! Structured job requirements as produced by the job description parser

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub job_title: String,
    /// Free text, only used to infer the industry benchmark
    pub description: String,
    pub industry: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    /// Minimum years of experience; 0 when the posting is ambiguous
    pub experience_required: f64,
    pub experience_preferred: f64,
    /// Free-text level descriptor, e.g. "Bachelor's degree in CS"
    pub education_required: String,
    /// Technologies used to decide whether a past role is relevant
    pub technologies: Vec<String>,
}

impl JobRequirements {
    /// Required years, with negative or non-finite values read as 0
    pub fn required_years(&self) -> f64 {
        non_negative(self.experience_required)
    }

    pub fn preferred_years(&self) -> f64 {
        non_negative(self.experience_preferred)
    }
}

fn non_negative(years: f64) -> f64 {
    if years.is_finite() && years > 0.0 {
        years
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let job: JobRequirements = serde_json::from_str(r#"{"job_title": "SRE"}"#).unwrap();
        assert!(job.required_skills.is_empty());
        assert_eq!(job.required_years(), 0.0);
    }

    #[test]
    fn test_negative_years_read_as_zero() {
        let job = JobRequirements {
            experience_required: -2.0,
            experience_preferred: 6.0,
            ..Default::default()
        };
        assert_eq!(job.required_years(), 0.0);
        assert_eq!(job.preferred_years(), 6.0);
    }
}
