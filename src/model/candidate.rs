//! Candidate profile as produced by the resume extraction step

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structured resume data for one candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
}

/// Contact details. Only `full_name` is shown in reports; the remaining
/// fields feed the completeness score used by pairwise comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: Option<String>,
    /// `None` or "present"/"current"/"now" for an ongoing role
    pub end_date: Option<String>,
    /// Explicit tenure in years when the extractor computed one
    pub duration_years: Option<f64>,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub graduation_date: Option<String>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
}

/// Technical skills arrive either flat or grouped by category
/// (`{"languages": [...], "cloud": [...]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    Flat(Vec<String>),
    Categorized(BTreeMap<String, Vec<String>>),
}

impl Default for SkillList {
    fn default() -> Self {
        SkillList::Flat(Vec::new())
    }
}

impl SkillList {
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            SkillList::Flat(skills) => Box::new(skills.iter().map(String::as_str)),
            SkillList::Categorized(groups) => {
                Box::new(groups.values().flatten().map(String::as_str))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SkillList::Flat(skills) => skills.len(),
            SkillList::Categorized(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for SkillList {
    fn from(skills: Vec<String>) -> Self {
        SkillList::Flat(skills)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: SkillList,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

impl Skills {
    /// Every skill string across all categories, in declaration order
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.technical
            .iter()
            .chain(self.soft.iter().map(String::as_str))
            .chain(self.languages.iter().map(String::as_str))
    }

    pub fn count(&self) -> usize {
        self.technical.len() + self.soft.len() + self.languages.len()
    }
}

impl CandidateProfile {
    /// Name shown in reports
    pub fn display_name(&self) -> &str {
        self.personal_info
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown Candidate")
    }
}

/// When a candidate can start. Unrecognised labels read as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Availability {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "within_2_weeks")]
    WithinTwoWeeks,
    #[serde(rename = "within_1_month")]
    WithinOneMonth,
    #[serde(rename = "within_2_months")]
    WithinTwoMonths,
    #[serde(rename = "within_3_months")]
    WithinThreeMonths,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Availability {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "immediate" => Availability::Immediate,
            "within_2_weeks" => Availability::WithinTwoWeeks,
            "within_1_month" => Availability::WithinOneMonth,
            "within_2_months" => Availability::WithinTwoMonths,
            "within_3_months" => Availability::WithinThreeMonths,
            _ => Availability::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Immediate => "immediate",
            Availability::WithinTwoWeeks => "within_2_weeks",
            Availability::WithinOneMonth => "within_1_month",
            Availability::WithinTwoMonths => "within_2_months",
            Availability::WithinThreeMonths => "within_3_months",
            Availability::Unknown => "unknown",
        }
    }
}

impl From<String> for Availability {
    fn from(label: String) -> Self {
        Availability::from_label(&label)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
