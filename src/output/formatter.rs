//! Output formatters for match, competitive, ranking and comparison reports

use crate::analysis::CompetitiveProfile;
use crate::config::OutputFormat;
use crate::error::{Result, ScorerError};
use crate::matching::MatchResult;
use crate::ranking::{Comparison, RankingReport, Side, Tier};
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

/// Anything the CLI can render
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Match(&'a MatchResult),
    Competitive(&'a CompetitiveProfile),
    Ranking(&'a RankingReport),
    Comparison {
        candidate1: &'a str,
        candidate2: &'a str,
        comparison: &'a Comparison,
    },
}

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report<'_>) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Serde name of a unit variant with underscores turned into spaces
fn variant_label<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name.replace('_', " "),
        _ => String::from("unknown"),
    }
}

fn side_label<'a>(side: Side, candidate1: &'a str, candidate2: &'a str) -> &'a str {
    match side {
        Side::Candidate1 => candidate1,
        Side::Candidate2 => candidate2,
        Side::Tie => "tie",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = if score >= 90.0 {
            ("EXCELLENT", Color::Green)
        } else if score >= 80.0 {
            ("VERY GOOD", Color::BrightGreen)
        } else if score >= 70.0 {
            ("GOOD", Color::Yellow)
        } else if score >= 60.0 {
            ("FAIR", Color::BrightYellow)
        } else if score >= 50.0 {
            ("BELOW AVG", Color::Red)
        } else {
            ("POOR", Color::BrightRed)
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn tier_color(tier: Tier) -> Color {
        match tier {
            Tier::S => Color::BrightGreen,
            Tier::A => Color::Green,
            Tier::B => Color::Yellow,
            Tier::C => Color::BrightYellow,
            Tier::D => Color::Red,
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }

    fn format_match(&self, result: &MatchResult) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 JOB MATCH ANALYSIS", 1));
        if !result.job_title.is_empty() {
            output.push_str(&format!("Position: {}\n", result.job_title));
        }

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Overall Score: {:.1}% {}\n",
            result.overall_score,
            self.format_score_badge(result.overall_score)
        ));
        output.push_str(&format!("Confidence: {:.1}%\n", result.confidence_score));
        output.push_str(&format!(
            "Recommendation: {}\n",
            self.colorize(result.recommendation.label(), Color::Cyan)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!("🛠️  Skills: {:.1}%\n", result.category_scores.skills));
        output.push_str(&format!("💼 Experience: {:.1}%\n", result.category_scores.experience));
        output.push_str(&format!("🎓 Education: {:.1}%\n", result.category_scores.education));

        if self.detailed {
            if let Some(skills) = &result.skill_analysis {
                output.push_str(&self.format_header("Skills", 3));
                output.push_str(&format!(
                    "Required: {}/{} matched ({:.1}%)\n",
                    skills.required_skills_matched.len(),
                    skills.total_required_skills,
                    skills.required_match_percentage
                ));
                if !skills.required_skills_missing.is_empty() {
                    output.push_str(&format!(
                        "  Missing: {}\n",
                        self.colorize(&skills.required_skills_missing.join(", "), Color::Red)
                    ));
                }
                output.push_str(&format!(
                    "Preferred: {}/{} matched ({:.1}%)\n",
                    skills.preferred_skills_matched.len(),
                    skills.total_preferred_skills,
                    skills.preferred_match_percentage
                ));
            }

            if let Some(experience) = &result.experience_analysis {
                output.push_str(&self.format_header("Experience", 3));
                output.push_str(&format!(
                    "Total: {:.1} years | Relevant: {:.1} years | Required: {:.1} years\n",
                    experience.total_years_experience,
                    experience.relevant_years_experience,
                    experience.required_years
                ));
                if !experience.relevant_roles.is_empty() {
                    output.push_str(&format!(
                        "Relevant roles: {}\n",
                        experience.relevant_roles.join(", ")
                    ));
                }
            }

            if let Some(education) = &result.education_match {
                output.push_str(&self.format_header("Education", 3));
                output.push_str(&format!("{}\n", education.details));
            }
        }

        if !result.strength_areas.is_empty() {
            output.push_str(&self.format_header("✅ Strength Areas", 3));
            for area in &result.strength_areas {
                output.push_str(&format!(
                    "  • {} ({:.1}%): {}\n",
                    self.colorize(&area.area, Color::Green),
                    area.score,
                    area.description
                ));
            }
        }

        let gaps = &result.gap_analysis;
        if !gaps.is_empty() {
            output.push_str(&self.format_header("⚠️  Gap Analysis", 2));
            self.format_list(&mut output, "Critical Gaps", &gaps.critical_gaps, Color::Red);
            if !gaps.skill_gaps.is_empty() {
                output.push_str(&self.format_header("Skill Gaps", 3));
                for gap in &gaps.skill_gaps {
                    output.push_str(&format!(
                        "  • {} ({})\n",
                        self.colorize(&gap.skill, Color::Yellow),
                        variant_label(&gap.severity)
                    ));
                }
            }
            self.format_list(&mut output, "Experience Gaps", &gaps.experience_gaps, Color::Yellow);
            self.format_list(&mut output, "Education Gaps", &gaps.education_gaps, Color::Yellow);
            self.format_list(&mut output, "📋 Recommendations", &gaps.recommendations, Color::Cyan);
            if let Some(time) = &gaps.estimated_time_to_ready {
                output.push_str(&format!("\nEstimated time to ready: {}\n", time));
            }
        }

        output
    }

    fn format_competitive(&self, profile: &CompetitiveProfile) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🏆 COMPETITIVE ANALYSIS", 1));
        output.push_str(&format!("Analyzed as of {}\n", profile.analyzed_as_of));

        output.push_str(&self.format_header("Market Position", 2));
        output.push_str(&format!(
            "Competitive Score: {:.1}% {}\n",
            profile.competitive_score,
            self.format_score_badge(profile.competitive_score)
        ));
        output.push_str(&format!(
            "Position: {}\n",
            self.colorize(&profile.market_position_description, Color::Cyan)
        ));
        output.push_str(&format!(
            "Benchmark percentile: {}th\n",
            profile.benchmark_percentile
        ));

        let benchmark = profile.industry_benchmark.benchmark();
        output.push_str(&format!(
            "Industry: {} (avg. {:.0} years, {} preferred, {})\n",
            profile.industry_benchmark,
            benchmark.avg_years_experience,
            benchmark.preferred_education,
            benchmark.salary_range
        ));

        output.push_str(&self.format_header("Dimensions", 3));
        let experience = &profile.experience_analysis;
        output.push_str(&format!(
            "💼 Experience: {:.1} of {:.1} benchmark years ({:.0}%), {}\n",
            experience.total_years,
            experience.benchmark_years,
            experience.percentage_of_benchmark,
            variant_label(&experience.competitiveness_level)
        ));
        let skills = &profile.skills_analysis;
        output.push_str(&format!(
            "🛠️  Skills: {} total, {:.1}% industry coverage, {:.1}% job coverage, {}\n",
            skills.total_skills,
            skills.industry_coverage,
            skills.job_coverage,
            variant_label(&skills.competitiveness_level)
        ));
        let education = &profile.education_analysis;
        output.push_str(&format!(
            "🎓 Education: {}, {}\n",
            education.highest_degree,
            variant_label(&education.competitiveness_level)
        ));

        if self.detailed && !skills.missing_industry_skills.is_empty() {
            output.push_str(&format!(
                "  Missing industry skills: {}\n",
                self.colorize(&skills.missing_industry_skills.join(", "), Color::Yellow)
            ));
        }

        self.format_list(&mut output, "✅ Strengths", &profile.strengths, Color::Green);
        self.format_list(&mut output, "🎯 Weaknesses", &profile.weaknesses, Color::Yellow);

        if !profile.competitive_advantages.is_empty() {
            output.push_str(&self.format_header("Competitive Advantages", 3));
            for advantage in &profile.competitive_advantages {
                output.push_str(&format!(
                    "  • {} [{} impact]: {}\n",
                    self.colorize(&advantage.advantage, Color::Green),
                    variant_label(&advantage.impact),
                    advantage.description
                ));
            }
        }

        if !profile.improvement_priorities.is_empty() {
            output.push_str(&self.format_header("📋 Improvement Priorities", 2));
            for (i, item) in profile.improvement_priorities.iter().enumerate() {
                output.push_str(&format!(
                    "{}. [{}] {}: {} ({})\n",
                    i + 1,
                    variant_label(&item.priority).to_uppercase(),
                    item.area,
                    item.action,
                    item.timeline
                ));
            }
        }

        if let Some(ranking) = &profile.relative_ranking {
            output.push_str(&self.format_header("Relative Ranking", 3));
            output.push_str(&format!(
                "Rank {} of {} ({:.1} percentile, {})\n",
                ranking.rank, ranking.total_candidates, ranking.percentile, ranking.tier
            ));
            output.push_str(&format!(
                "vs. average: {:+.1} | vs. median: {:+.1} | top score: {:.1}\n",
                ranking.score_vs_average, ranking.score_vs_median, ranking.top_candidate_score
            ));
        }

        self.format_list(&mut output, "💡 Market Insights", &profile.market_insights, Color::Cyan);
        output
    }

    fn format_ranking(&self, report: &RankingReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📋 CANDIDATE RANKING", 1));
        output.push_str(&format!("Candidates: {}\n", report.total_candidates));

        let distribution = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D]
            .iter()
            .map(|tier| format!("{}: {}", tier, report.tier_distribution.count(*tier)))
            .collect::<Vec<_>>()
            .join(" | ");
        output.push_str(&format!("Tiers: {}\n", distribution));

        output.push_str(&self.format_header("Ranked Candidates", 2));
        for entry in &report.ranked_candidates {
            let tier = format!("[{}]", entry.tier);
            output.push_str(&format!(
                "{:>3}. {} {} {:.2} ({:.1} pct) {}\n",
                entry.rank,
                self.colorize(&tier, Self::tier_color(entry.tier)),
                entry.candidate_name,
                entry.final_score,
                entry.percentile,
                self.format_score_badge(entry.final_score)
            ));
            output.push_str(&format!(
                "     {} | interview priority: {}\n",
                entry.recommendation, entry.interview_priority
            ));

            if self.detailed {
                for (dimension, score) in &entry.category_scores {
                    output.push_str(&format!("     - {}: {:.1}\n", dimension.label(), score));
                }
                if !entry.strengths.is_empty() {
                    output.push_str(&format!(
                        "     Strengths: {}\n",
                        self.colorize(&entry.strengths.join(", "), Color::Green)
                    ));
                }
                if !entry.weaknesses.is_empty() {
                    output.push_str(&format!(
                        "     Weaknesses: {}\n",
                        self.colorize(&entry.weaknesses.join(", "), Color::Yellow)
                    ));
                }
            }
        }

        if let Some(stats) = &report.statistics {
            output.push_str(&self.format_header("Statistics", 3));
            output.push_str(&format!(
                "Mean: {:.2} | Median: {:.2} | Std dev: {:.2}\n",
                stats.mean_score, stats.median_score, stats.std_deviation
            ));
            output.push_str(&format!(
                "Range: {:.2} - {:.2} | Top 10% cutoff: {:.2}\n",
                stats.min_score, stats.max_score, stats.top_10_percent_cutoff
            ));
            output.push_str(&format!(
                "Qualified (60+): {} | Highly qualified (75+): {}\n",
                stats.qualified_candidates, stats.highly_qualified_candidates
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Weights", 3));
            for (dimension, weight) in report.weights_used.iter() {
                output.push_str(&format!("  {}: {:.0}%\n", dimension.label(), weight * 100.0));
            }
        }

        output
    }

    fn format_comparison(&self, candidate1: &str, candidate2: &str, comparison: &Comparison) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("⚖️  CANDIDATE COMPARISON", 1));
        output.push_str(&format!(
            "{}: {:.2}\n{}: {:.2}\n",
            candidate1, comparison.candidate1_score, candidate2, comparison.candidate2_score
        ));
        if comparison.used_quality_fallback {
            output.push_str(&self.colorize(
                "Both final scores were 0; profile completeness was compared instead\n",
                Color::Yellow,
            ));
        }

        let winner = side_label(comparison.winner, candidate1, candidate2);
        output.push_str(&format!(
            "Winner: {} (by {:.2})\n",
            self.colorize(winner, Color::Green),
            comparison.score_difference
        ));

        if !comparison.category_comparison.is_empty() {
            output.push_str(&self.format_header("Categories", 3));
            for (category, detail) in &comparison.category_comparison {
                output.push_str(&format!(
                    "  {}: {:.1} vs {:.1} → {}\n",
                    category.replace('_', " "),
                    detail.candidate1,
                    detail.candidate2,
                    side_label(detail.leader, candidate1, candidate2)
                ));
            }
        }

        output.push_str(&self.format_header("Profile Sections", 3));
        let sections = &comparison.resume_comparison;
        for (name, section) in [
            ("skills", &sections.skills),
            ("experience", &sections.experience),
            ("education", &sections.education),
            ("certifications", &sections.certifications),
        ] {
            output.push_str(&format!(
                "  {}: {} vs {} → {}\n",
                name,
                section.candidate1_count,
                section.candidate2_count,
                side_label(section.leader, candidate1, candidate2)
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report<'_>) -> Result<String> {
        Ok(match report {
            Report::Match(result) => self.format_match(result),
            Report::Competitive(profile) => self.format_competitive(profile),
            Report::Ranking(ranking) => self.format_ranking(ranking),
            Report::Comparison {
                candidate1,
                candidate2,
                comparison,
            } => self.format_comparison(candidate1, candidate2, comparison),
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report<'_>) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        if score >= 90.0 {
            "🟢 Excellent"
        } else if score >= 80.0 {
            "🟡 Very Good"
        } else if score >= 70.0 {
            "🟠 Good"
        } else if score >= 60.0 {
            "🔴 Fair"
        } else if score >= 50.0 {
            "🔴 Below Average"
        } else {
            "🔴 Poor"
        }
    }

    fn bullet_section(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn format_match(&self, result: &MatchResult) -> String {
        let mut output = String::from("# 🎯 Job Match Report\n\n");
        if self.include_metadata && !result.job_title.is_empty() {
            output.push_str(&format!("**Position:** {}\n\n", result.job_title));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {:.1}% {}\n\n",
            result.overall_score,
            Self::markdown_score_badge(result.overall_score)
        ));
        output.push_str(&format!("**Confidence:** {:.1}%\n\n", result.confidence_score));
        output.push_str(&format!("**Recommendation:** {}\n\n", result.recommendation));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Category | Score |\n");
        output.push_str("|----------|-------|\n");
        output.push_str(&format!("| Skills | {:.1}% |\n", result.category_scores.skills));
        output.push_str(&format!("| Experience | {:.1}% |\n", result.category_scores.experience));
        output.push_str(&format!("| Education | {:.1}% |\n\n", result.category_scores.education));

        if let Some(skills) = &result.skill_analysis {
            if !skills.required_skills_missing.is_empty() {
                output.push_str(&format!(
                    "**Missing required skills:** {}\n\n",
                    skills.required_skills_missing.join(", ")
                ));
            }
        }

        if !result.strength_areas.is_empty() {
            output.push_str("### ✅ Strength Areas\n\n");
            for area in &result.strength_areas {
                output.push_str(&format!(
                    "- **{}** ({:.1}%): {}\n",
                    area.area, area.score, area.description
                ));
            }
            output.push('\n');
        }

        let gaps = &result.gap_analysis;
        if !gaps.is_empty() {
            output.push_str("## Gap Analysis\n\n");
            Self::bullet_section(&mut output, "Critical Gaps", &gaps.critical_gaps);
            let skill_gaps: Vec<String> = gaps
                .skill_gaps
                .iter()
                .map(|gap| format!("{} ({})", gap.skill, variant_label(&gap.severity)))
                .collect();
            Self::bullet_section(&mut output, "Skill Gaps", &skill_gaps);
            Self::bullet_section(&mut output, "Experience Gaps", &gaps.experience_gaps);
            Self::bullet_section(&mut output, "Education Gaps", &gaps.education_gaps);
            Self::bullet_section(&mut output, "Recommendations", &gaps.recommendations);
            if let Some(time) = &gaps.estimated_time_to_ready {
                output.push_str(&format!("**Estimated time to ready:** {}\n\n", time));
            }
        }

        output
    }

    fn format_competitive(&self, profile: &CompetitiveProfile) -> String {
        let mut output = String::from("# 🏆 Competitive Analysis\n\n");
        if self.include_metadata {
            output.push_str(&format!("**Analyzed as of:** {}\n\n", profile.analyzed_as_of));
        }

        output.push_str(&format!(
            "**Competitive Score:** {:.1}% {}\n\n",
            profile.competitive_score,
            Self::markdown_score_badge(profile.competitive_score)
        ));
        output.push_str(&format!(
            "**Market Position:** {}\n\n",
            profile.market_position_description
        ));
        output.push_str(&format!(
            "**Industry:** {} | **Benchmark percentile:** {}th\n\n",
            profile.industry_benchmark, profile.benchmark_percentile
        ));

        output.push_str("| Dimension | Level | Score |\n");
        output.push_str("|-----------|-------|-------|\n");
        output.push_str(&format!(
            "| Experience | {} | {:.1} |\n",
            variant_label(&profile.experience_analysis.competitiveness_level),
            profile.experience_analysis.score
        ));
        output.push_str(&format!(
            "| Skills | {} | {:.1} |\n",
            variant_label(&profile.skills_analysis.competitiveness_level),
            profile.skills_analysis.score
        ));
        output.push_str(&format!(
            "| Education | {} | {:.1} |\n\n",
            variant_label(&profile.education_analysis.competitiveness_level),
            profile.education_analysis.score
        ));

        Self::bullet_section(&mut output, "Strengths", &profile.strengths);
        Self::bullet_section(&mut output, "Weaknesses", &profile.weaknesses);

        if !profile.improvement_priorities.is_empty() {
            output.push_str("### Improvement Priorities\n\n");
            for (i, item) in profile.improvement_priorities.iter().enumerate() {
                output.push_str(&format!(
                    "{}. **{}** ({} priority): {} _{}_\n",
                    i + 1,
                    item.area,
                    variant_label(&item.priority),
                    item.action,
                    item.timeline
                ));
            }
            output.push('\n');
        }

        if let Some(ranking) = &profile.relative_ranking {
            output.push_str(&format!(
                "**Relative rank:** {} of {} ({:.1} percentile)\n\n",
                ranking.rank, ranking.total_candidates, ranking.percentile
            ));
        }

        Self::bullet_section(&mut output, "Market Insights", &profile.market_insights);
        output
    }

    fn format_ranking(&self, report: &RankingReport) -> String {
        let mut output = String::from("# 📋 Candidate Ranking\n\n");
        output.push_str(&format!("**Candidates:** {}\n\n", report.total_candidates));

        output.push_str("| Rank | Candidate | Score | Tier | Percentile | Recommendation |\n");
        output.push_str("|------|-----------|-------|------|------------|----------------|\n");
        for entry in &report.ranked_candidates {
            output.push_str(&format!(
                "| {} | {} | {:.2} | {} | {:.1} | {} |\n",
                entry.rank,
                entry.candidate_name,
                entry.final_score,
                entry.tier,
                entry.percentile,
                variant_label(&entry.recommendation)
            ));
        }
        output.push('\n');

        if let Some(stats) = &report.statistics {
            output.push_str("## Statistics\n\n");
            output.push_str(&format!(
                "- Mean: {:.2}\n- Median: {:.2}\n- Standard deviation: {:.2}\n- Top 10% cutoff: {:.2}\n\n",
                stats.mean_score, stats.median_score, stats.std_deviation, stats.top_10_percent_cutoff
            ));
        }

        if self.include_metadata {
            output.push_str("## Weights\n\n");
            for (dimension, weight) in report.weights_used.iter() {
                output.push_str(&format!("- {}: {:.0}%\n", dimension.label(), weight * 100.0));
            }
            output.push('\n');
        }

        output
    }

    fn format_comparison(candidate1: &str, candidate2: &str, comparison: &Comparison) -> String {
        let mut output = String::from("# ⚖️ Candidate Comparison\n\n");
        output.push_str(&format!(
            "**Winner:** {} (difference {:.2})\n\n",
            side_label(comparison.winner, candidate1, candidate2),
            comparison.score_difference
        ));

        output.push_str(&format!("| Category | {} | {} |\n", candidate1, candidate2));
        output.push_str("|----------|----|----|\n");
        output.push_str(&format!(
            "| Final score | {:.2} | {:.2} |\n",
            comparison.candidate1_score, comparison.candidate2_score
        ));
        for (category, detail) in &comparison.category_comparison {
            output.push_str(&format!(
                "| {} | {:.1} | {:.1} |\n",
                category.replace('_', " "),
                detail.candidate1,
                detail.candidate2
            ));
        }
        output.push('\n');

        if comparison.used_quality_fallback {
            output.push_str("_Both final scores were 0; profile completeness was compared instead._\n");
        }
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report<'_>) -> Result<String> {
        Ok(match report {
            Report::Match(result) => self.format_match(result),
            Report::Competitive(profile) => self.format_competitive(profile),
            Report::Ranking(ranking) => self.format_ranking(ranking),
            Report::Comparison {
                candidate1,
                candidate2,
                comparison,
            } => Self::format_comparison(candidate1, candidate2, comparison),
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate_report(&self, report: &Report<'_>, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if file_path.is_dir() {
        return Err(ScorerError::OutputFormatting(format!(
            "{} is a directory",
            file_path.display()
        )));
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{CategoryScores, GapAnalysis, MatchRecommendation, SkillGap, Severity};
    use crate::ranking::{CandidateSnapshot, RankingWeights};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn match_result() -> MatchResult {
        MatchResult {
            job_title: "Backend Engineer".to_string(),
            overall_score: 83.4,
            confidence_score: 91.2,
            recommendation: MatchRecommendation::from_score(83.4),
            category_scores: CategoryScores {
                skills: 88.0,
                experience: 80.0,
                education: 75.0,
            },
            skill_analysis: None,
            experience_analysis: None,
            education_match: None,
            gap_analysis: GapAnalysis {
                skill_gaps: vec![SkillGap {
                    skill: "kubernetes".to_string(),
                    severity: Severity::High,
                }],
                ..Default::default()
            },
            strength_areas: Vec::new(),
        }
    }

    fn empty_ranking() -> RankingReport {
        RankingReport {
            total_candidates: 0,
            ranked_candidates: Vec::new(),
            tier_distribution: Default::default(),
            statistics: None,
            weights_used: RankingWeights::default(),
            ranking_criteria: Vec::new(),
        }
    }

    #[test]
    fn test_console_without_colors_is_plain() {
        let result = match_result();
        let text = ConsoleFormatter::new(false, true)
            .format_report(&Report::Match(&result))
            .unwrap();

        assert!(text.contains("Position: Backend Engineer"));
        assert!(text.contains("Overall Score: 83.4% [VERY GOOD]"));
        assert!(text.contains("kubernetes (high)"));
        assert!(!text.contains("\u{1b}["));
    }

    #[test]
    fn test_json_is_the_bare_report() {
        let result = match_result();
        let json = JsonFormatter::new(false)
            .format_report(&Report::Match(&result))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overall_score"], 83.4);
        assert_eq!(value["recommendation"], "Strong Match");
    }

    #[test]
    fn test_markdown_ranking_lists_weights() {
        let report = empty_ranking();
        let text = MarkdownFormatter::new(true)
            .format_report(&Report::Ranking(&report))
            .unwrap();
        assert!(text.starts_with("# 📋 Candidate Ranking"));
        assert!(text.contains("- Skills Match: 30%"));
    }

    #[test]
    fn test_comparison_names_the_winner() {
        let first = CandidateSnapshot {
            candidate_id: "c1".to_string(),
            final_score: 81.0,
            category_scores: BTreeMap::from([("skills_match".to_string(), 90.0)]),
            profile: None,
        };
        let second = CandidateSnapshot {
            candidate_id: "c2".to_string(),
            final_score: 64.5,
            category_scores: BTreeMap::from([("skills_match".to_string(), 70.0)]),
            profile: None,
        };
        let comparison = crate::ranking::compare(&first, &second);
        let report = Report::Comparison {
            candidate1: "Ada",
            candidate2: "Grace",
            comparison: &comparison,
        };

        let text = ReportGenerator::with_options(false, false, true)
            .generate_report(&report, &OutputFormat::Console)
            .unwrap();
        assert!(text.contains("Winner: Ada (by 16.50)"));
        assert!(text.contains("skills match: 90.0 vs 70.0 → Ada"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, false, true);
        let report = empty_ranking();
        assert!(generator
            .generate_report(&Report::Ranking(&report), &OutputFormat::Json)
            .unwrap()
            .contains("\"total_candidates\": 0"));
        assert_eq!(
            ConsoleFormatter::new(false, false).supports_format(),
            OutputFormat::Console
        );
    }

    #[test]
    fn test_save_report_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("match.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");

        assert!(matches!(
            save_report_to_file("x", dir.path()),
            Err(ScorerError::OutputFormatting(_))
        ));
    }
}
