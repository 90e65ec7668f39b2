//! CLI interface for the candidate scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "candidate-scorer")]
#[command(about = "Deterministic candidate scoring and ranking")]
#[command(long_about = "Score structured candidate profiles against job requirements, benchmark them against the market, and rank candidate pools with weighted criteria")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Include per-category details in the report
    #[arg(short, long, global = true)]
    pub detailed: bool,

    /// Save output to file
    #[arg(short, long, global = true)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate against a job
    Match {
        /// Candidate profile (JSON)
        #[arg(long)]
        candidate: PathBuf,

        /// Job requirements (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Gap analysis to carry into the result (JSON)
        #[arg(long)]
        gaps: Option<PathBuf>,
    },

    /// Benchmark one candidate against industry norms
    Benchmark {
        /// Candidate profile (JSON)
        #[arg(long)]
        candidate: PathBuf,

        /// Job requirements (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Match scores of peer candidates, a JSON array of numbers
        #[arg(long)]
        peers: Option<PathBuf>,
    },

    /// Rank a pool of candidates for a job
    Rank {
        /// Candidates to rank, a JSON array
        #[arg(long)]
        candidates: PathBuf,

        /// Job requirements (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Per-dimension weights overriding the configuration (JSON)
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Replace candidate names with "Candidate N"
        #[arg(long)]
        anonymize: bool,

        /// Score candidates on the blocking thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Compare two candidates from a pool head to head
    Compare {
        /// Candidate pool, a JSON array
        #[arg(long)]
        candidates: PathBuf,

        /// Job requirements (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Candidate id of the first candidate
        #[arg(long)]
        first: String,

        /// Candidate id of the second candidate
        #[arg(long)]
        second: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_rank_with_global_flags() {
        let cli = Cli::try_parse_from([
            "candidate-scorer",
            "rank",
            "--candidates",
            "pool.json",
            "-j",
            "job.json",
            "--anonymize",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Rank {
                anonymize,
                parallel,
                weights,
                ..
            } => {
                assert!(anonymize);
                assert!(!parallel);
                assert!(weights.is_none());
            }
            _ => panic!("expected rank"),
        }
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        let parsed = Cli::try_parse_from([
            "candidate-scorer",
            "match",
            "--candidate",
            "a.json",
            "-j",
            "job.json",
            "-o",
            "pdf",
        ]);
        assert!(parsed.is_err());
    }
}
