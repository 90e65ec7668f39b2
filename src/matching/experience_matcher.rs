//! Career duration and relevance-weighted experience scoring

use crate::model::{Experience, JobRequirements};
use crate::score::{clamp_score, round2, round_to, MAX_SCORE};
use chrono::{NaiveDate, Utc};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// End-date markers for an ongoing role
pub const PRESENT_MARKERS: [&str; 3] = ["present", "current", "now"];

/// Months credited to a role whose dates are malformed.
/// A real but badly recorded role counts as at least a year rather than nothing.
pub const FALLBACK_MONTHS: u32 = 12;

const DAYS_PER_MONTH: i64 = 30;
const EXPERIENCE_WEIGHT: f64 = 0.6;
const RELEVANCE_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The string has a date shape but no such calendar date exists
    #[error("malformed date '{0}'")]
    Malformed(String),
}

/// Experience matcher with an injected "present" reference date
#[derive(Debug, Clone)]
pub struct ExperienceMatcher {
    as_of: NaiveDate,
    date_shape: Regex,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceAnalysis {
    pub total_years_experience: f64,
    pub relevant_years_experience: f64,
    pub required_years: f64,
    pub preferred_years: f64,
    pub meets_minimum_requirement: bool,
    pub exceeds_preferred: bool,
    pub experience_score: f64,
    pub relevance_score: f64,
    pub overall_experience_score: f64,
    pub relevant_roles: Vec<String>,
}

impl Default for ExperienceMatcher {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl ExperienceMatcher {
    /// `as_of` stands in for "now" when a role is ongoing
    pub fn new(as_of: NaiveDate) -> Self {
        let date_shape = Regex::new(r"^(\d{4})(?:-(\d{2}))?(?:-(\d{2}))?$")
            .expect("Invalid date shape regex");

        Self { as_of, date_shape }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Score a candidate's roles against the job's experience requirements
    pub fn match_experience(
        &self,
        roles: &[Experience],
        job: &JobRequirements,
    ) -> ExperienceAnalysis {
        let total_years = self.total_years(roles.iter());
        let required_years = job.required_years();
        let preferred_years = job.preferred_years();

        let relevant = self.find_relevant_experience(roles, &job.technologies, &job.industry);
        let relevant_years = self.total_years(relevant.iter().copied());

        let (meets_minimum, experience_score) = if required_years > 0.0 {
            (
                total_years >= required_years,
                clamp_score(total_years / required_years * 100.0),
            )
        } else {
            (true, MAX_SCORE)
        };

        let exceeds_preferred = preferred_years <= 0.0 || total_years >= preferred_years;

        let relevance_score = clamp_score(relevant_years / required_years.max(1.0) * 100.0);

        let overall_experience_score =
            experience_score * EXPERIENCE_WEIGHT + relevance_score * RELEVANCE_WEIGHT;

        ExperienceAnalysis {
            total_years_experience: round_to(total_years, 1),
            relevant_years_experience: round_to(relevant_years, 1),
            required_years,
            preferred_years,
            meets_minimum_requirement: meets_minimum,
            exceeds_preferred,
            experience_score: round2(experience_score),
            relevance_score: round2(relevance_score),
            overall_experience_score: round2(overall_experience_score),
            relevant_roles: relevant.iter().map(|exp| exp.title.clone()).collect(),
        }
    }

    /// Sum of role durations in years, computed from start/end dates
    pub fn total_years<'a, I>(&self, roles: I) -> f64
    where
        I: IntoIterator<Item = &'a Experience>,
    {
        let total_months: u32 = roles.into_iter().map(|exp| self.role_months(exp)).sum();
        total_months as f64 / 12.0
    }

    /// Months for one role, applying the malformed-date fallback
    pub fn role_months(&self, experience: &Experience) -> u32 {
        match self.duration_months(experience) {
            Ok(months) => months,
            Err(e) => {
                debug!(
                    "Role '{}' at '{}': {}; crediting {} months",
                    experience.title, experience.company, e, FALLBACK_MONTHS
                );
                FALLBACK_MONTHS
            }
        }
    }

    /// Tenure in years: the explicit `duration_years` when present,
    /// otherwise derived from the role's dates.
    pub fn role_years(&self, experience: &Experience) -> f64 {
        match experience.duration_years {
            Some(years) if years.is_finite() && years >= 0.0 => years,
            _ => self.role_months(experience) as f64 / 12.0,
        }
    }

    /// Whole months between start and end (days / 30), never negative.
    ///
    /// A missing or unrecognised start date yields `Ok(0)`.
    pub fn duration_months(&self, experience: &Experience) -> Result<u32, DurationError> {
        let start = match experience.start_date.as_deref() {
            Some(raw) => match self.parse_date(raw)? {
                Some(date) => date,
                None => return Ok(0),
            },
            None => return Ok(0),
        };

        let end = match experience.end_date.as_deref().map(str::trim) {
            None | Some("") => self.as_of,
            Some(raw) if is_present_marker(raw) => self.as_of,
            Some(raw) => match self.parse_date(raw)? {
                Some(date) => date,
                None => return Ok(0),
            },
        };

        let days = (end - start).num_days().max(0);
        Ok((days / DAYS_PER_MONTH) as u32)
    }

    /// Parse a bare year, a year-month or a full ISO date.
    ///
    /// Returns `Ok(None)` for text with no recognised shape and
    /// `Err(Malformed)` for a recognised shape naming an impossible date.
    pub fn parse_date(&self, raw: &str) -> Result<Option<NaiveDate>, DurationError> {
        let trimmed = raw.trim();
        let caps = match self.date_shape.captures(trimmed) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let malformed = || DurationError::Malformed(trimmed.to_string());
        let component = |idx: usize| -> Result<Option<u32>, DurationError> {
            caps.get(idx)
                .map(|m| m.as_str().parse::<u32>().map_err(|_| malformed()))
                .transpose()
        };

        let year = component(1)?.ok_or_else(malformed)?;
        let month = component(2)?;
        let day = component(3)?;

        let date = match (month, day) {
            (None, None) => NaiveDate::from_ymd_opt(year as i32, 1, 1),
            (Some(month), None) => NaiveDate::from_ymd_opt(year as i32, month, 1),
            (Some(month), Some(day)) => NaiveDate::from_ymd_opt(year as i32, month, day),
            (None, Some(_)) => None,
        };

        date.map(Some).ok_or_else(malformed)
    }

    /// Roles that mention a job technology or sit in the job's industry
    pub fn find_relevant_experience<'a>(
        &self,
        roles: &'a [Experience],
        technologies: &[String],
        industry: &str,
    ) -> Vec<&'a Experience> {
        let tech_keywords: Vec<String> = technologies
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let industry = industry.trim().to_lowercase();

        roles
            .iter()
            .filter(|exp| is_relevant(exp, &tech_keywords, &industry))
            .collect()
    }
}

fn is_present_marker(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    PRESENT_MARKERS.contains(&lower.as_str())
}

fn is_relevant(experience: &Experience, tech_keywords: &[String], industry: &str) -> bool {
    let role_technologies: Vec<String> = experience
        .technologies
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    if tech_keywords.iter().any(|tech| role_technologies.contains(tech)) {
        return true;
    }

    if !industry.is_empty() && experience.company.to_lowercase().contains(industry) {
        return true;
    }

    let description = experience.description.to_lowercase();
    let title = experience.title.to_lowercase();
    tech_keywords
        .iter()
        .any(|tech| description.contains(tech.as_str()) || title.contains(tech.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn role(title: &str, start: Option<&str>, end: Option<&str>) -> Experience {
        Experience {
            title: title.to_string(),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_supported_shapes() {
        let matcher = ExperienceMatcher::new(as_of());
        assert_eq!(
            matcher.parse_date("2019").unwrap(),
            NaiveDate::from_ymd_opt(2019, 1, 1)
        );
        assert_eq!(
            matcher.parse_date("2019-06").unwrap(),
            NaiveDate::from_ymd_opt(2019, 6, 1)
        );
        assert_eq!(
            matcher.parse_date("2019-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2019, 6, 15)
        );
        assert_eq!(matcher.parse_date("June 2019").unwrap(), None);
        assert!(matcher.parse_date("2019-13").is_err());
        assert!(matcher.parse_date("2021-02-30").is_err());
    }

    #[test]
    fn test_present_markers_use_reference_date() {
        let matcher = ExperienceMatcher::new(as_of());
        for marker in ["Present", "current", "NOW"] {
            let months = matcher
                .duration_months(&role("Dev", Some("2023-01-01"), Some(marker)))
                .unwrap();
            // 365 days / 30
            assert_eq!(months, 12);
        }
        let open_ended = matcher
            .duration_months(&role("Dev", Some("2023-01-01"), None))
            .unwrap();
        assert_eq!(open_ended, 12);
    }

    #[test]
    fn test_missing_or_unrecognised_start_contributes_nothing() {
        let matcher = ExperienceMatcher::new(as_of());
        assert_eq!(matcher.role_months(&role("Dev", None, Some("2020"))), 0);
        assert_eq!(matcher.role_months(&role("Dev", Some("a while ago"), None)), 0);
    }

    #[test]
    fn test_malformed_dates_fall_back_to_a_year() {
        let matcher = ExperienceMatcher::new(as_of());
        let broken = role("Dev", Some("2020-13"), None);
        assert!(matcher.duration_months(&broken).is_err());
        assert_eq!(matcher.role_months(&broken), FALLBACK_MONTHS);
    }

    #[test]
    fn test_end_before_start_is_zero() {
        let matcher = ExperienceMatcher::new(as_of());
        assert_eq!(
            matcher.role_months(&role("Dev", Some("2022"), Some("2020"))),
            0
        );
    }

    #[test]
    fn test_six_years_against_four_required() {
        let matcher = ExperienceMatcher::new(as_of());
        let roles = vec![role("Backend Engineer", Some("2018-01-01"), Some("2024-01-01"))];
        let job = JobRequirements {
            experience_required: 4.0,
            ..Default::default()
        };

        let analysis = matcher.match_experience(&roles, &job);
        assert!(analysis.meets_minimum_requirement);
        assert_eq!(analysis.experience_score, 100.0);
        assert!(analysis.total_years_experience >= 6.0);
    }

    #[test]
    fn test_relevance_by_technology_title_and_industry() {
        let matcher = ExperienceMatcher::new(as_of());
        let roles = vec![
            Experience {
                title: "Engineer".to_string(),
                technologies: vec!["Rust".to_string()],
                start_date: Some("2020".to_string()),
                end_date: Some("2022".to_string()),
                ..Default::default()
            },
            Experience {
                title: "Analyst".to_string(),
                company: "Acme Fintech".to_string(),
                start_date: Some("2022".to_string()),
                end_date: Some("2023".to_string()),
                ..Default::default()
            },
            role("Barista", Some("2019"), Some("2020")),
        ];
        let relevant =
            matcher.find_relevant_experience(&roles, &["rust".to_string()], "fintech");
        let titles: Vec<&str> = relevant.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer", "Analyst"]);
    }

    #[test]
    fn test_no_requirement_scores_full_and_meets_minimum() {
        let matcher = ExperienceMatcher::new(as_of());
        let analysis = matcher.match_experience(&[], &JobRequirements::default());
        assert!(analysis.meets_minimum_requirement);
        assert!(analysis.exceeds_preferred);
        assert_eq!(analysis.experience_score, 100.0);
        // 100 * 0.6 + 0 * 0.4
        assert_eq!(analysis.overall_experience_score, 60.0);
    }

    #[test]
    fn test_role_years_prefers_explicit_duration() {
        let matcher = ExperienceMatcher::new(as_of());
        let mut explicit = role("Dev", Some("2023-01-01"), None);
        explicit.duration_years = Some(3.5);
        assert_eq!(matcher.role_years(&explicit), 3.5);

        explicit.duration_years = None;
        assert_eq!(matcher.role_years(&explicit), 1.0);
    }
}
