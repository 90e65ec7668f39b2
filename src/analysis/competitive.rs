//! Benchmarks a single candidate against an industry reference profile
//! and, optionally, against the match scores of a peer group.

use crate::analysis::benchmarks::{Industry, IndustryBenchmark, IndustryClassifier};
use crate::error::Result;
use crate::keywords::KeywordSet;
use crate::matching::education_matcher::{education_level, EDUCATION_LEVELS};
use crate::matching::experience_matcher::ExperienceMatcher;
use crate::matching::skill_matcher::SkillMatcher;
use crate::model::{CandidateProfile, JobRequirements};
use crate::ranking::statistics::{mean, median};
use crate::score::{clamp_score, round_to};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

const MATCH_WEIGHT: f64 = 0.4;
const EXPERIENCE_WEIGHT: f64 = 0.25;
const SKILLS_WEIGHT: f64 = 0.25;
const EDUCATION_WEIGHT: f64 = 0.1;

const MAX_MISSING_LISTED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitivenessLevel {
    HighlyCompetitive,
    Competitive,
    ModeratelyCompetitive,
    BelowAverage,
}

impl CompetitivenessLevel {
    fn from_skill_score(score: f64) -> Self {
        if score >= 80.0 {
            CompetitivenessLevel::HighlyCompetitive
        } else if score >= 60.0 {
            CompetitivenessLevel::Competitive
        } else if score >= 40.0 {
            CompetitivenessLevel::ModeratelyCompetitive
        } else {
            CompetitivenessLevel::BelowAverage
        }
    }

    /// Fixed score attached to a level by the experience and education checks
    fn score(&self) -> f64 {
        match self {
            CompetitivenessLevel::HighlyCompetitive => 95.0,
            CompetitivenessLevel::Competitive => 80.0,
            CompetitivenessLevel::ModeratelyCompetitive => 60.0,
            CompetitivenessLevel::BelowAverage => 40.0,
        }
    }
}

/// Position in the market, also used as the tier of a relative ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    TopTier,
    Strong,
    Average,
    BelowAverage,
}

impl MarketPosition {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            MarketPosition::TopTier
        } else if score >= 70.0 {
            MarketPosition::Strong
        } else if score >= 55.0 {
            MarketPosition::Average
        } else {
            MarketPosition::BelowAverage
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MarketPosition::TopTier => "Top 10% - Highly competitive candidate",
            MarketPosition::Strong => "Top 25% - Strong competitive position",
            MarketPosition::Average => "Top 50% - Average competitive position",
            MarketPosition::BelowAverage => "Below average - Needs improvement",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPosition::TopTier => "top_tier",
            MarketPosition::Strong => "strong",
            MarketPosition::Average => "average",
            MarketPosition::BelowAverage => "below_average",
        }
    }

    fn insights(&self) -> [&'static str; 2] {
        match self {
            MarketPosition::TopTier => [
                "You are among the most competitive candidates in the market",
                "Consider negotiating for higher compensation or benefits",
            ],
            MarketPosition::Strong => [
                "You have a strong competitive position",
                "Focus on highlighting your unique strengths in interviews",
            ],
            MarketPosition::Average => [
                "You meet basic market expectations",
                "Consider developing additional skills to stand out",
            ],
            MarketPosition::BelowAverage => [
                "Significant improvement needed to be competitive",
                "Focus on closing skill and experience gaps",
            ],
        }
    }
}

impl fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCompetitiveness {
    pub total_years: f64,
    pub benchmark_years: f64,
    pub percentage_of_benchmark: f64,
    pub competitiveness_level: CompetitivenessLevel,
    pub score: f64,
    pub gap_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsCompetitiveness {
    pub total_skills: usize,
    pub industry_coverage: f64,
    pub job_coverage: f64,
    pub competitiveness_level: CompetitivenessLevel,
    pub score: f64,
    pub missing_industry_skills: Vec<String>,
    pub missing_job_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationCompetitiveness {
    pub highest_degree: String,
    pub degree_level: u8,
    pub preferred_level: u8,
    pub competitiveness_level: CompetitivenessLevel,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveAdvantage {
    pub advantage: String,
    pub description: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPriority {
    pub priority: Priority,
    pub area: String,
    pub action: String,
    pub timeline: String,
}

/// Where a candidate's match score sits among a peer group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeRanking {
    pub rank: usize,
    pub total_candidates: usize,
    pub percentile: f64,
    pub tier: MarketPosition,
    pub score_vs_average: f64,
    pub score_vs_median: f64,
    pub top_candidate_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveProfile {
    pub competitive_score: f64,
    pub market_position: MarketPosition,
    pub market_position_description: String,
    /// Percentile looked up from the competitive score, not computed
    /// from any population
    pub benchmark_percentile: u8,
    pub industry_benchmark: Industry,
    pub experience_analysis: ExperienceCompetitiveness,
    pub skills_analysis: SkillsCompetitiveness,
    pub education_analysis: EducationCompetitiveness,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub competitive_advantages: Vec<CompetitiveAdvantage>,
    pub improvement_priorities: Vec<ImprovementPriority>,
    pub relative_ranking: Option<RelativeRanking>,
    pub market_insights: Vec<String>,
    pub analyzed_as_of: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeakArea {
    Experience,
    Skills,
    Education,
}

#[derive(Debug)]
pub struct CompetitiveAnalyzer {
    classifier: IndustryClassifier,
    experience_matcher: ExperienceMatcher,
    leadership_titles: KeywordSet,
}

impl CompetitiveAnalyzer {
    pub fn new(as_of: NaiveDate) -> Result<Self> {
        Ok(Self {
            classifier: IndustryClassifier::new()?,
            experience_matcher: ExperienceMatcher::new(as_of),
            leadership_titles: KeywordSet::new(["lead", "manager", "director", "head", "chief"])?,
        })
    }

    /// Benchmark a candidate whose job match score is already known.
    ///
    /// `peers` holds the match scores of the other candidates; when absent or
    /// empty no relative ranking is produced.
    pub fn analyze(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirements,
        match_score: f64,
        peers: Option<&[f64]>,
    ) -> CompetitiveProfile {
        info!(
            "Starting competitive analysis for '{}'",
            profile.display_name()
        );

        let industry = self.classifier.infer(job);
        let benchmark = industry.benchmark();
        debug!("Inferred industry benchmark: {}", industry);

        let experience = self.experience_competitiveness(profile, benchmark);
        let skills = skills_competitiveness(profile, job, benchmark);
        let education = education_competitiveness(profile, benchmark);

        let competitive_score = clamp_score(
            clamp_score(match_score) * MATCH_WEIGHT
                + experience.score * EXPERIENCE_WEIGHT
                + skills.score * SKILLS_WEIGHT
                + education.score * EDUCATION_WEIGHT,
        );
        let market_position = MarketPosition::from_score(competitive_score);

        let (strengths, weaknesses, weak_areas) =
            strengths_and_weaknesses(&experience, &skills, &education);

        let relative_ranking = peers
            .filter(|scores| !scores.is_empty())
            .map(|scores| relative_ranking(match_score, scores));

        let mut market_insights: Vec<String> = market_position
            .insights()
            .iter()
            .map(|s| s.to_string())
            .collect();
        market_insights.push(format!(
            "Market salary range for this role: {}",
            benchmark.salary_range
        ));

        CompetitiveProfile {
            competitive_score: round_to(competitive_score, 1),
            market_position,
            market_position_description: market_position.description().to_string(),
            benchmark_percentile: benchmark_percentile(competitive_score),
            industry_benchmark: industry,
            experience_analysis: experience,
            skills_analysis: skills,
            education_analysis: education,
            strengths,
            weaknesses,
            competitive_advantages: self.competitive_advantages(profile),
            improvement_priorities: improvement_priorities(&weak_areas, benchmark),
            relative_ranking,
            market_insights,
            analyzed_as_of: self.experience_matcher.as_of(),
        }
    }

    fn experience_competitiveness(
        &self,
        profile: &CandidateProfile,
        benchmark: &IndustryBenchmark,
    ) -> ExperienceCompetitiveness {
        let total_years: f64 = profile
            .experience
            .iter()
            .map(|exp| self.experience_matcher.role_years(exp))
            .sum();
        let avg_years = benchmark.avg_years_experience;

        let percentage = if avg_years > 0.0 {
            total_years / avg_years * 100.0
        } else {
            0.0
        };

        let level = if total_years >= avg_years * 1.5 {
            CompetitivenessLevel::HighlyCompetitive
        } else if total_years >= avg_years {
            CompetitivenessLevel::Competitive
        } else if total_years >= avg_years * 0.7 {
            CompetitivenessLevel::ModeratelyCompetitive
        } else {
            CompetitivenessLevel::BelowAverage
        };

        ExperienceCompetitiveness {
            total_years: round_to(total_years, 1),
            benchmark_years: avg_years,
            percentage_of_benchmark: round_to(percentage, 1),
            competitiveness_level: level,
            score: level.score(),
            gap_years: round_to((avg_years - total_years).max(0.0), 1),
        }
    }

    fn competitive_advantages(&self, profile: &CandidateProfile) -> Vec<CompetitiveAdvantage> {
        let mut advantages = Vec::new();

        let certifications = profile.certifications.len();
        if certifications >= 3 {
            advantages.push(CompetitiveAdvantage {
                advantage: "Multiple Certifications".to_string(),
                description: format!("{} professional certifications", certifications),
                impact: Impact::High,
            });
        }

        let languages = profile.skills.languages.len();
        if languages >= 2 {
            advantages.push(CompetitiveAdvantage {
                advantage: "Multilingual".to_string(),
                description: format!("Fluent in {} languages", languages),
                impact: Impact::Medium,
            });
        }

        let leadership_roles = profile
            .experience
            .iter()
            .filter(|exp| self.leadership_titles.contains_any(&exp.title))
            .count();
        if leadership_roles >= 2 {
            advantages.push(CompetitiveAdvantage {
                advantage: "Leadership Experience".to_string(),
                description: format!("{} leadership roles", leadership_roles),
                impact: Impact::High,
            });
        }

        if advantages.is_empty() {
            advantages.push(CompetitiveAdvantage {
                advantage: "Well-Rounded Profile".to_string(),
                description: "Balanced skills and experience".to_string(),
                impact: Impact::Medium,
            });
        }

        advantages
    }
}

fn skills_competitiveness(
    profile: &CandidateProfile,
    job: &JobRequirements,
    benchmark: &IndustryBenchmark,
) -> SkillsCompetitiveness {
    let candidate_skills = SkillMatcher::flatten(&profile.skills);

    let industry_skills: Vec<String> = benchmark
        .common_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let job_skills: Vec<String> = job
        .required_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let industry_coverage = membership_coverage(&candidate_skills, &industry_skills);
    let job_coverage = membership_coverage(&candidate_skills, &job_skills);
    let score = industry_coverage * 0.4 + job_coverage * 0.6;

    SkillsCompetitiveness {
        total_skills: candidate_skills.len(),
        industry_coverage: round_to(industry_coverage, 1),
        job_coverage: round_to(job_coverage, 1),
        competitiveness_level: CompetitivenessLevel::from_skill_score(score),
        score: round_to(score, 1),
        missing_industry_skills: missing(&candidate_skills, &industry_skills),
        missing_job_skills: missing(&candidate_skills, &job_skills),
    }
}

/// Share of `reference` the candidate holds; an empty reference is 0 coverage
fn membership_coverage(candidate: &BTreeSet<String>, reference: &[String]) -> f64 {
    let unique: BTreeSet<&String> = reference.iter().collect();
    if unique.is_empty() {
        return 0.0;
    }
    let held = unique.iter().filter(|s| candidate.contains(s.as_str())).count();
    clamp_score(held as f64 / unique.len() as f64 * 100.0)
}

fn missing(candidate: &BTreeSet<String>, reference: &[String]) -> Vec<String> {
    reference
        .iter()
        .filter(|s| !candidate.contains(s.as_str()))
        .take(MAX_MISSING_LISTED)
        .cloned()
        .collect()
}

fn education_competitiveness(
    profile: &CandidateProfile,
    benchmark: &IndustryBenchmark,
) -> EducationCompetitiveness {
    let preferred_level = EDUCATION_LEVELS
        .iter()
        .find(|(keyword, _)| *keyword == benchmark.preferred_education)
        .map(|(_, level)| *level)
        .unwrap_or(3);

    // First degree reaching the highest level
    let mut degree_level = 0;
    let mut highest_degree = None;
    for edu in &profile.education {
        let level = education_level(&edu.degree);
        if level > degree_level {
            degree_level = level;
            highest_degree = Some(edu.degree.clone());
        }
    }

    let level = if degree_level > preferred_level {
        CompetitivenessLevel::HighlyCompetitive
    } else if degree_level == preferred_level {
        CompetitivenessLevel::Competitive
    } else if degree_level + 1 == preferred_level {
        CompetitivenessLevel::ModeratelyCompetitive
    } else {
        CompetitivenessLevel::BelowAverage
    };

    EducationCompetitiveness {
        highest_degree: highest_degree.unwrap_or_else(|| "Not specified".to_string()),
        degree_level,
        preferred_level,
        competitiveness_level: level,
        score: level.score(),
    }
}

fn strengths_and_weaknesses(
    experience: &ExperienceCompetitiveness,
    skills: &SkillsCompetitiveness,
    education: &EducationCompetitiveness,
) -> (Vec<String>, Vec<String>, Vec<WeakArea>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut weak_areas = Vec::new();

    if experience.score >= 80.0 {
        strengths.push(format!("Strong experience ({} years)", experience.total_years));
    } else if experience.score < 60.0 {
        weaknesses.push(format!(
            "Limited experience ({} years gap)",
            experience.gap_years
        ));
        weak_areas.push(WeakArea::Experience);
    }

    if skills.score >= 80.0 {
        strengths.push(format!(
            "Excellent skill coverage ({}% job match)",
            skills.job_coverage
        ));
    } else if skills.score < 60.0 {
        weaknesses.push(format!(
            "Skill gaps ({} key skills missing)",
            skills.missing_job_skills.len()
        ));
        weak_areas.push(WeakArea::Skills);
    }

    if education.score >= 80.0 {
        strengths.push(format!(
            "Strong educational background ({})",
            education.highest_degree
        ));
    } else if education.score < 60.0 {
        weaknesses.push("Educational requirements not fully met".to_string());
        weak_areas.push(WeakArea::Education);
    }

    if strengths.is_empty() {
        strengths.push("Demonstrates potential for growth".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("Minor areas for continued development".to_string());
    }

    (strengths, weaknesses, weak_areas)
}

fn improvement_priorities(
    weak_areas: &[WeakArea],
    benchmark: &IndustryBenchmark,
) -> Vec<ImprovementPriority> {
    let mut priorities: Vec<ImprovementPriority> = weak_areas
        .iter()
        .map(|area| match area {
            WeakArea::Experience => ImprovementPriority {
                priority: Priority::High,
                area: "Experience".to_string(),
                action: "Seek additional project work or responsibilities".to_string(),
                timeline: "6-12 months".to_string(),
            },
            WeakArea::Skills => ImprovementPriority {
                priority: Priority::High,
                area: "Skills".to_string(),
                action: format!(
                    "Learn key industry skills: {}",
                    benchmark
                        .common_skills
                        .iter()
                        .take(3)
                        .copied()
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                timeline: "3-6 months".to_string(),
            },
            WeakArea::Education => ImprovementPriority {
                priority: Priority::Medium,
                area: "Education".to_string(),
                action: "Consider relevant certifications or advanced degree".to_string(),
                timeline: "12+ months".to_string(),
            },
        })
        .collect();

    if priorities.is_empty() {
        priorities.push(ImprovementPriority {
            priority: Priority::Low,
            area: "Continuous Improvement".to_string(),
            action: "Stay updated with industry trends and emerging technologies".to_string(),
            timeline: "Ongoing".to_string(),
        });
    }

    priorities
}

/// Rank `match_score` among itself plus `peers`, best first
pub fn relative_ranking(match_score: f64, peers: &[f64]) -> RelativeRanking {
    let mut all_scores: Vec<f64> = peers.to_vec();
    all_scores.push(match_score);
    all_scores.sort_by(|a, b| b.total_cmp(a));

    let total = all_scores.len();
    // 1-based position of the first occurrence in descending order
    let rank = 1 + all_scores.iter().filter(|s| **s > match_score).count();
    let percentile = if total > 1 {
        (total - rank) as f64 / total as f64 * 100.0
    } else {
        100.0
    };

    let rank_fraction = rank as f64;
    let total_f = total as f64;
    let tier = if rank_fraction <= total_f * 0.1 {
        MarketPosition::TopTier
    } else if rank_fraction <= total_f * 0.25 {
        MarketPosition::Strong
    } else if rank_fraction <= total_f * 0.5 {
        MarketPosition::Average
    } else {
        MarketPosition::BelowAverage
    };

    RelativeRanking {
        rank,
        total_candidates: total,
        percentile: round_to(percentile, 1),
        tier,
        score_vs_average: round_to(match_score - mean(&all_scores), 1),
        score_vs_median: round_to(match_score - median(&all_scores), 1),
        top_candidate_score: all_scores[0],
    }
}

/// Percentile band looked up from a competitive score
pub fn benchmark_percentile(score: f64) -> u8 {
    match score {
        s if s >= 95.0 => 99,
        s if s >= 85.0 => 90,
        s if s >= 75.0 => 75,
        s if s >= 65.0 => 60,
        s if s >= 55.0 => 50,
        s if s >= 45.0 => 40,
        s if s >= 35.0 => 25,
        _ => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Certification, Education, Experience, SkillList, Skills};

    fn analyzer() -> CompetitiveAnalyzer {
        CompetitiveAnalyzer::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap()
    }

    fn engineer_job() -> JobRequirements {
        JobRequirements {
            job_title: "Software Engineer".to_string(),
            required_skills: vec!["Python".to_string(), "AWS".to_string()],
            ..Default::default()
        }
    }

    fn role(title: &str, years: f64) -> Experience {
        Experience {
            title: title.to_string(),
            duration_years: Some(years),
            ..Default::default()
        }
    }

    fn strong_profile() -> CandidateProfile {
        CandidateProfile {
            experience: vec![role("Tech Lead", 5.0), role("Engineering Manager", 3.0)],
            education: vec![Education {
                degree: "Master of Science".to_string(),
                ..Default::default()
            }],
            skills: Skills {
                technical: SkillList::Flat(
                    ["python", "java", "javascript", "aws", "docker", "kubernetes"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                ),
                languages: vec!["English".to_string(), "German".to_string()],
                ..Default::default()
            },
            certifications: vec![Certification::default(); 3],
            ..Default::default()
        }
    }

    #[test]
    fn test_strong_candidate_is_top_tier() {
        let result = analyzer().analyze(&strong_profile(), &engineer_job(), 90.0, None);

        assert_eq!(result.industry_benchmark, Industry::SoftwareEngineering);
        assert_eq!(
            result.experience_analysis.competitiveness_level,
            CompetitivenessLevel::HighlyCompetitive
        );
        assert_eq!(result.skills_analysis.score, 100.0);
        assert_eq!(result.education_analysis.score, 95.0);
        // 90*0.4 + 95*0.25 + 100*0.25 + 95*0.1 = 94.25
        assert!(result.competitive_score > 94.0 && result.competitive_score < 94.5);
        assert_eq!(result.market_position, MarketPosition::TopTier);
        assert_eq!(result.benchmark_percentile, 90);
        assert_eq!(result.competitive_advantages.len(), 3);
        assert_eq!(result.improvement_priorities[0].priority, Priority::Low);
        assert!(result.relative_ranking.is_none());
        assert_eq!(
            result.market_insights.last().unwrap(),
            "Market salary range for this role: $80,000 - $150,000"
        );
    }

    #[test]
    fn test_empty_profile_gets_improvement_plan() {
        let result =
            analyzer().analyze(&CandidateProfile::default(), &engineer_job(), 20.0, Some(&[][..]));

        assert_eq!(result.market_position, MarketPosition::BelowAverage);
        assert_eq!(result.weaknesses.len(), 3);
        assert_eq!(result.strengths, vec!["Demonstrates potential for growth".to_string()]);
        let areas: Vec<&str> = result
            .improvement_priorities
            .iter()
            .map(|p| p.area.as_str())
            .collect();
        assert_eq!(areas, vec!["Experience", "Skills", "Education"]);
        assert_eq!(
            result.improvement_priorities[1].action,
            "Learn key industry skills: python, java, javascript"
        );
        assert_eq!(result.education_analysis.highest_degree, "Not specified");
        assert_eq!(
            result.competitive_advantages[0].advantage,
            "Well-Rounded Profile"
        );
        assert!(result.relative_ranking.is_none());
    }

    #[test]
    fn test_default_industry_has_zero_industry_coverage() {
        let job = JobRequirements {
            job_title: "Chef".to_string(),
            ..Default::default()
        };
        let result = analyzer().analyze(&strong_profile(), &job, 50.0, None);
        assert_eq!(result.industry_benchmark, Industry::Default);
        assert_eq!(result.skills_analysis.industry_coverage, 0.0);
        assert_eq!(result.skills_analysis.job_coverage, 0.0);
    }

    #[test]
    fn test_relative_ranking_against_peers() {
        let ranking = relative_ranking(80.0, &[90.0, 70.0, 60.0]);
        assert_eq!(ranking.rank, 2);
        assert_eq!(ranking.total_candidates, 4);
        assert_eq!(ranking.percentile, 50.0);
        assert_eq!(ranking.tier, MarketPosition::Average);
        assert_eq!(ranking.score_vs_average, 5.0);
        assert_eq!(ranking.score_vs_median, 5.0);
        assert_eq!(ranking.top_candidate_score, 90.0);
    }

    #[test]
    fn test_relative_ranking_ties_take_first_position() {
        let ranking = relative_ranking(80.0, &[80.0, 80.0]);
        assert_eq!(ranking.rank, 1);
        assert_eq!(ranking.percentile, 66.7);
        assert_eq!(ranking.tier, MarketPosition::Average);
    }

    #[test]
    fn test_benchmark_percentile_table() {
        assert_eq!(benchmark_percentile(95.0), 99);
        assert_eq!(benchmark_percentile(84.9), 75);
        assert_eq!(benchmark_percentile(55.0), 50);
        assert_eq!(benchmark_percentile(0.0), 10);
    }
}
