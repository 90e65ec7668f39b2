//! Per-candidate sub-scorers for the seven ranking dimensions

use crate::error::Result;
use crate::keywords::KeywordSet;
use crate::matching::education_matcher::{EducationCurve, EducationMatcher};
use crate::matching::experience_matcher::ExperienceMatcher;
use crate::matching::skill_matcher::SkillMatcher;
use crate::model::{Availability, CandidateProfile, JobRequirements};
use crate::ranking::ranker::RankingCandidate;
use crate::ranking::weights::RankingDimension;
use crate::score::clamp_score;
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

const NEUTRAL: f64 = 50.0;

const SENIORITY_INDICATORS: [&str; 8] = [
    "senior", "lead", "principal", "manager", "director", "head", "vp", "chief",
];
const TEAM_VOCABULARY: [&str; 4] = ["team", "collaborate", "led", "managed"];
const DESIRED_SOFT_SKILLS: [&str; 5] = [
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "adaptability",
];

/// How many recent roles are compared for a seniority trend
const TRAJECTORY_WINDOW: usize = 3;

/// Scores a candidate on every ranking dimension
#[derive(Debug, Clone)]
pub struct DimensionScorer {
    experience_matcher: ExperienceMatcher,
    education_matcher: EducationMatcher,
    seniority: KeywordSet,
    team_vocabulary: KeywordSet,
    desired_soft_skills: KeywordSet,
}

impl DimensionScorer {
    pub fn new(as_of: NaiveDate) -> Result<Self> {
        Ok(Self {
            experience_matcher: ExperienceMatcher::new(as_of),
            education_matcher: EducationMatcher::new(EducationCurve::RANKING),
            seniority: KeywordSet::new(SENIORITY_INDICATORS)?,
            team_vocabulary: KeywordSet::new(TEAM_VOCABULARY)?,
            desired_soft_skills: KeywordSet::new(DESIRED_SOFT_SKILLS)?,
        })
    }

    pub fn score_all(
        &self,
        candidate: &RankingCandidate,
        job: &JobRequirements,
    ) -> BTreeMap<RankingDimension, f64> {
        RankingDimension::ALL
            .iter()
            .map(|dim| (*dim, clamp_score(self.score(*dim, candidate, job))))
            .collect()
    }

    pub fn score(
        &self,
        dimension: RankingDimension,
        candidate: &RankingCandidate,
        job: &JobRequirements,
    ) -> f64 {
        let profile = &candidate.profile;
        match dimension {
            RankingDimension::SkillsMatch => self.skills_match(candidate, job),
            RankingDimension::ExperienceMatch => self.experience_match(profile, job),
            RankingDimension::EducationMatch => self.education_match(profile, job),
            RankingDimension::CulturalFit => self.cultural_fit(profile),
            RankingDimension::CareerTrajectory => self.career_trajectory(profile),
            RankingDimension::Certifications => certifications(profile),
            RankingDimension::Availability => availability(candidate.availability),
        }
    }

    /// Reuses a precomputed skill analysis when one is attached
    pub fn skills_match(&self, candidate: &RankingCandidate, job: &JobRequirements) -> f64 {
        if let Some(analysis) = candidate
            .match_result
            .as_ref()
            .and_then(|m| m.skill_analysis.as_ref())
        {
            return analysis.required_match_percentage * 0.7
                + analysis.preferred_match_percentage * 0.3;
        }

        let required: BTreeSet<String> = job
            .required_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if required.is_empty() {
            return NEUTRAL;
        }

        let held = SkillMatcher::flatten(&candidate.profile.skills)
            .iter()
            .filter(|skill| required.contains(*skill))
            .count();

        clamp_score(held as f64 / job.required_skills.len() as f64 * 100.0)
    }

    pub fn experience_match(&self, profile: &CandidateProfile, job: &JobRequirements) -> f64 {
        let total_years: f64 = profile
            .experience
            .iter()
            .map(|exp| self.experience_matcher.role_years(exp))
            .sum();
        let required = job.required_years();

        if total_years >= required * 1.5 {
            100.0
        } else if total_years >= required {
            85.0
        } else if total_years >= required * 0.7 {
            65.0
        } else if total_years >= required * 0.5 {
            45.0
        } else {
            25.0
        }
    }

    pub fn education_match(&self, profile: &CandidateProfile, job: &JobRequirements) -> f64 {
        self.education_matcher
            .match_education(&profile.education, &job.education_required)
            .score
    }

    pub fn cultural_fit(&self, profile: &CandidateProfile) -> f64 {
        let soft_skills = &profile.skills.soft;
        if soft_skills.is_empty() {
            return NEUTRAL;
        }

        let matching = soft_skills
            .iter()
            .filter(|skill| self.desired_soft_skills.contains_any(skill))
            .count();
        let base = matching as f64 / DESIRED_SOFT_SKILLS.len() as f64 * 100.0;

        let team_roles = profile
            .experience
            .iter()
            .filter(|exp| self.team_vocabulary.contains_any(&exp.description))
            .count();
        let bonus = (team_roles as f64 * 10.0).min(20.0);

        (base + bonus).min(100.0)
    }

    pub fn career_trajectory(&self, profile: &CandidateProfile) -> f64 {
        let roles = &profile.experience;
        if roles.len() < 2 {
            return NEUTRAL;
        }

        let mut dated: Vec<_> = roles
            .iter()
            .filter_map(|exp| {
                let raw = exp.start_date.as_deref()?.trim();
                if raw.is_empty() {
                    return None;
                }
                let parsed = self.experience_matcher.parse_date(raw).ok().flatten();
                Some((parsed, raw, exp))
            })
            .collect();
        // Most recent first; unparseable dates order after real ones by raw text
        dated.sort_by_key(|(parsed, raw, _)| Reverse((*parsed, *raw)));

        let levels: Vec<usize> = dated
            .iter()
            .map(|(_, _, exp)| self.seniority.distinct_matches(&exp.title))
            .collect();

        let mut score = NEUTRAL;

        if levels.len() >= 2 {
            let recent = &levels[..levels.len().min(TRAJECTORY_WINDOW)];
            let (newest, oldest) = (recent[0], recent[recent.len() - 1]);
            if newest > oldest {
                score += 30.0;
            } else if newest == oldest {
                score += 15.0;
            }
        }

        if roles.len() >= 3 {
            score += 10.0;
        }

        let average_tenure = roles
            .iter()
            .map(|exp| self.experience_matcher.role_years(exp))
            .sum::<f64>()
            / roles.len() as f64;
        if (2.0..=4.0).contains(&average_tenure) {
            score += 10.0;
        } else if average_tenure > 4.0 {
            score += 5.0;
        }

        score.min(100.0)
    }
}

pub fn certifications(profile: &CandidateProfile) -> f64 {
    match profile.certifications.len() {
        n if n >= 5 => 100.0,
        n if n >= 3 => 85.0,
        2 => 70.0,
        1 => 55.0,
        _ => 30.0,
    }
}

pub fn availability(availability: Availability) -> f64 {
    match availability {
        Availability::Immediate => 100.0,
        Availability::WithinTwoWeeks => 90.0,
        Availability::WithinOneMonth => 80.0,
        Availability::WithinTwoMonths => 60.0,
        Availability::WithinThreeMonths => 40.0,
        Availability::Unknown => NEUTRAL,
    }
}
