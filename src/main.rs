//! Candidate scorer: deterministic candidate scoring and ranking

use candidate_scorer::analysis::CompetitiveAnalyzer;
use candidate_scorer::cli::{Cli, Commands, ConfigAction};
use candidate_scorer::config::{Config, OutputFormat};
use candidate_scorer::input::InputManager;
use candidate_scorer::matching::MatchScorer;
use candidate_scorer::model::JobRequirements;
use candidate_scorer::output::{save_report_to_file, Report, ReportGenerator};
use candidate_scorer::ranking::{
    compare, CandidateRanker, CandidateSnapshot, RankingCandidate, RankingOptions, RankingReport,
};
use candidate_scorer::{Result, ScorerError};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

/// Rendering options shared by every scoring command
struct OutputOptions {
    format: OutputFormat,
    detailed: bool,
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let output = OutputOptions {
        format: cli.output.unwrap_or(config.output.format),
        detailed: cli.detailed || config.output.detailed,
        save: cli.save,
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config, output).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_file: Option<PathBuf>,
    output: OutputOptions,
) -> Result<()> {
    let as_of = config.as_of();
    let generator = ReportGenerator::with_options(config.output.color_output, output.detailed, true);
    let mut input_manager = InputManager::new();

    match command {
        Commands::Match {
            candidate,
            job,
            gaps,
        } => {
            info!("Starting job match");
            let profile = input_manager.load_profile(&candidate).await?;
            let job = input_manager.load_job(&job).await?;
            let gaps = match gaps {
                Some(path) => Some(input_manager.load_gaps(&path).await?),
                None => None,
            };

            let result = MatchScorer::new(as_of).evaluate(&profile, &job, gaps);
            emit(&generator, &Report::Match(&result), &output)?;
        }

        Commands::Benchmark {
            candidate,
            job,
            peers,
        } => {
            info!("Starting competitive benchmark");
            let profile = input_manager.load_profile(&candidate).await?;
            let job = input_manager.load_job(&job).await?;
            let peers = match peers {
                Some(path) => Some(input_manager.load_peer_scores(&path).await?),
                None => None,
            };

            let match_score = MatchScorer::new(as_of)
                .evaluate(&profile, &job, None)
                .overall_score;
            let analysis = CompetitiveAnalyzer::new(as_of)?.analyze(
                &profile,
                &job,
                match_score,
                peers.as_deref(),
            );
            emit(&generator, &Report::Competitive(&analysis), &output)?;
        }

        Commands::Rank {
            candidates,
            job,
            weights,
            anonymize,
            parallel,
        } => {
            let mut pool = input_manager.load_candidates(&candidates).await?;
            let job = input_manager.load_job(&job).await?;
            let weights = match weights {
                Some(path) => input_manager.load_weights(&path).await?,
                None => config.ranking_weights(),
            };
            attach_match_results(&mut pool, &job, &MatchScorer::new(as_of));

            let options = RankingOptions {
                anonymize: anonymize || config.ranking.anonymize,
            };
            let ranker = CandidateRanker::new(as_of)?;
            let report = if parallel {
                Arc::new(ranker)
                    .rank_concurrent(pool, job, Some(weights), options)
                    .await?
            } else {
                ranker.rank(&pool, &job, Some(&weights), &options)
            };
            emit(&generator, &Report::Ranking(&report), &output)?;
        }

        Commands::Compare {
            candidates,
            job,
            first,
            second,
        } => {
            let mut pool = input_manager.load_candidates(&candidates).await?;
            let job = input_manager.load_job(&job).await?;
            attach_match_results(&mut pool, &job, &MatchScorer::new(as_of));

            let report = CandidateRanker::new(as_of)?.rank(
                &pool,
                &job,
                Some(&config.ranking_weights()),
                &RankingOptions::default(),
            );

            let first_snapshot = snapshot(&report, &pool, &first)?;
            let second_snapshot = snapshot(&report, &pool, &second)?;
            let comparison = compare(&first_snapshot, &second_snapshot);
            let view = Report::Comparison {
                candidate1: &first,
                candidate2: &second,
                comparison: &comparison,
            };
            emit(&generator, &view, &output)?;
        }

        Commands::Config { action } => {
            let path = config_file.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("File: {}", path.display());
                    println!("Reference date: {}", as_of);
                    println!("Anonymize rankings: {}", config.ranking.anonymize);
                    println!("Output format: {:?}", config.output.format);
                    println!("\nRanking Weights:");
                    for (dimension, weight) in config.ranking_weights().iter() {
                        println!("  {}: {:.1}%", dimension.label(), weight * 100.0);
                    }
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Score candidates that arrived without a precomputed job match
fn attach_match_results(pool: &mut [RankingCandidate], job: &JobRequirements, scorer: &MatchScorer) {
    for candidate in pool.iter_mut().filter(|c| c.match_result.is_none()) {
        candidate.match_result = Some(scorer.evaluate(&candidate.profile, job, None));
    }
}

fn snapshot(
    report: &RankingReport,
    pool: &[RankingCandidate],
    candidate_id: &str,
) -> Result<CandidateSnapshot> {
    let entry = report.find(candidate_id).ok_or_else(|| {
        ScorerError::InvalidInput(format!("Unknown candidate id: {}", candidate_id))
    })?;
    let profile = pool
        .iter()
        .find(|c| c.candidate_id == candidate_id)
        .map(|c| c.profile.clone())
        .unwrap_or_default();
    Ok(CandidateSnapshot::from(entry).with_profile(profile))
}

fn emit(generator: &ReportGenerator, report: &Report<'_>, output: &OutputOptions) -> Result<()> {
    let rendered = generator.generate_report(report, &output.format)?;
    match &output.save {
        Some(path) => {
            save_report_to_file(&rendered, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
