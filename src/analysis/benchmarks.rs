//! Static industry reference profiles and industry inference

use crate::error::Result;
use crate::keywords::KeywordSet;
use crate::model::JobRequirements;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    SoftwareEngineering,
    DataScience,
    ProductManagement,
    Devops,
    Default,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::SoftwareEngineering => "software_engineering",
            Industry::DataScience => "data_science",
            Industry::ProductManagement => "product_management",
            Industry::Devops => "devops",
            Industry::Default => "default",
        }
    }

    pub fn benchmark(&self) -> &'static IndustryBenchmark {
        match self {
            Industry::SoftwareEngineering => &SOFTWARE_ENGINEERING,
            Industry::DataScience => &DATA_SCIENCE,
            Industry::ProductManagement => &PRODUCT_MANAGEMENT,
            Industry::Devops => &DEVOPS,
            Industry::Default => &DEFAULT,
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Annual salary band in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", thousands(self.min), thousands(self.max))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryBenchmark {
    pub industry: Industry,
    pub avg_years_experience: f64,
    pub common_skills: &'static [&'static str],
    /// Degree keyword from the education level table
    pub preferred_education: &'static str,
    pub salary_range: SalaryRange,
}

pub const SOFTWARE_ENGINEERING: IndustryBenchmark = IndustryBenchmark {
    industry: Industry::SoftwareEngineering,
    avg_years_experience: 5.0,
    common_skills: &["python", "java", "javascript", "aws", "docker", "kubernetes"],
    preferred_education: "bachelor",
    salary_range: SalaryRange { min: 80_000, max: 150_000 },
};

pub const DATA_SCIENCE: IndustryBenchmark = IndustryBenchmark {
    industry: Industry::DataScience,
    avg_years_experience: 4.0,
    common_skills: &["python", "r", "sql", "machine learning", "tensorflow", "pandas"],
    preferred_education: "master",
    salary_range: SalaryRange { min: 90_000, max: 160_000 },
};

pub const PRODUCT_MANAGEMENT: IndustryBenchmark = IndustryBenchmark {
    industry: Industry::ProductManagement,
    avg_years_experience: 6.0,
    common_skills: &["agile", "scrum", "roadmap", "analytics", "stakeholder management"],
    preferred_education: "bachelor",
    salary_range: SalaryRange { min: 95_000, max: 170_000 },
};

pub const DEVOPS: IndustryBenchmark = IndustryBenchmark {
    industry: Industry::Devops,
    avg_years_experience: 5.0,
    common_skills: &["kubernetes", "docker", "jenkins", "terraform", "aws", "ci/cd"],
    preferred_education: "bachelor",
    salary_range: SalaryRange { min: 85_000, max: 155_000 },
};

pub const DEFAULT: IndustryBenchmark = IndustryBenchmark {
    industry: Industry::Default,
    avg_years_experience: 5.0,
    common_skills: &[],
    preferred_education: "bachelor",
    salary_range: SalaryRange { min: 60_000, max: 120_000 },
};

/// Infers the industry of a job from its title, description and required skills.
///
/// Rules are checked in order and the first hit wins, so a "Machine Learning
/// Engineer" is classed as software engineering.
#[derive(Debug, Clone)]
pub struct IndustryClassifier {
    rules: Vec<(Industry, KeywordSet)>,
}

impl IndustryClassifier {
    pub fn new() -> Result<Self> {
        let rules = vec![
            (
                Industry::SoftwareEngineering,
                KeywordSet::new(["software", "developer", "engineer", "programming"])?,
            ),
            (
                Industry::DataScience,
                KeywordSet::new(["data science", "machine learning", "ai", "analytics"])?,
            ),
            (
                Industry::ProductManagement,
                KeywordSet::new(["product manager", "product owner", "pm"])?,
            ),
            (
                Industry::Devops,
                KeywordSet::new(["devops", "sre", "infrastructure", "cloud engineer"])?,
            ),
        ];

        Ok(Self { rules })
    }

    pub fn infer(&self, job: &JobRequirements) -> Industry {
        let text = format!(
            "{} {} {}",
            job.job_title,
            job.description,
            job.required_skills.join(" ")
        );

        self.rules
            .iter()
            .find(|(_, keywords)| keywords.contains_any(&text))
            .map(|(industry, _)| *industry)
            .unwrap_or(Industry::Default)
    }
}

fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, skills: &[&str]) -> JobRequirements {
        JobRequirements {
            job_title: title.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_inference_order() {
        let classifier = IndustryClassifier::new().unwrap();
        assert_eq!(
            classifier.infer(&job("Machine Learning Engineer", &[])),
            Industry::SoftwareEngineering
        );
        assert_eq!(
            classifier.infer(&job("Data Scientist", &["Machine Learning"])),
            Industry::DataScience
        );
        assert_eq!(
            classifier.infer(&job("Senior Product Owner", &[])),
            Industry::ProductManagement
        );
        assert_eq!(classifier.infer(&job("SRE", &["Terraform"])), Industry::Devops);
        assert_eq!(classifier.infer(&job("Chef", &["Cooking"])), Industry::Default);
    }

    #[test]
    fn test_salary_band_display() {
        assert_eq!(
            SOFTWARE_ENGINEERING.salary_range.to_string(),
            "$80,000 - $150,000"
        );
        assert_eq!(thousands(999), "999");
    }

    #[test]
    fn test_benchmark_lookup() {
        assert_eq!(Industry::DataScience.benchmark().preferred_education, "master");
        assert!(Industry::Default.benchmark().common_skills.is_empty());
    }
}
