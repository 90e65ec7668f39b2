//! Candidate scorer library
//!
//! Scores candidate profiles against job requirements, benchmarks them
//! against industry norms and ranks candidate pools.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod keywords;
pub mod matching;
pub mod model;
pub mod output;
pub mod ranking;
pub mod score;

pub use config::Config;
pub use error::{Result, ScorerError};
