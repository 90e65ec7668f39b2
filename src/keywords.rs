//! Case-insensitive keyword sets backed by an Aho-Corasick automaton

use crate::error::{Result, ScorerError};
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// A fixed set of keywords searched for as case-insensitive substrings.
///
/// Used for seniority indicators in job titles, team vocabulary in role
/// descriptions and industry inference terms.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    automaton: AhoCorasick,
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .map_err(|e| ScorerError::Configuration(format!("Failed to build keyword set: {}", e)))?;

        Ok(Self { automaton, keywords })
    }

    /// True if any keyword occurs anywhere in `text`
    pub fn contains_any(&self, text: &str) -> bool {
        !self.keywords.is_empty() && self.automaton.is_match(text)
    }

    /// Number of distinct keywords occurring in `text`, overlaps included
    /// ("team lead" counts both "team" and "lead").
    pub fn distinct_matches(&self, text: &str) -> usize {
        self.automaton
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
