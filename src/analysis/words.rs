//! Word frequency analysis.
//!
//! Bodies are concatenated, lowercased, and tokenized with an alphabetic
//! pattern that keeps apostrophes inside tokens, so contractions like
//! `don't` stay whole. A fixed English stopword list is removed and the
//! remaining tokens are ranked by count, ties broken by first appearance.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Record;

/// Alphabetic tokens, apostrophes allowed inside.
const TOKEN_PATTERN: &str = r"\b[a-zA-Z']+\b";

/// Words excluded from frequency ranking.
pub const STOPWORDS: [&str; 15] = [
    "the", "is", "and", "to", "a", "of", "in", "on", "it", "for", "that", "me", "i", "you", "my",
];

/// Number of entries the ranking is truncated to.
pub const TOP_WORDS: usize = 25;

/// One entry of the ranked word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word, lowercased.
    pub word: String,
    /// Occurrences across all message bodies.
    pub count: u64,
}

/// Tokenizer plus ranking for word usage.
pub struct WordFrequency {
    token: Regex,
}

impl WordFrequency {
    /// Creates the analyzer with the fixed token pattern.
    pub fn new() -> Self {
        Self {
            token: Regex::new(TOKEN_PATTERN).unwrap(),
        }
    }

    /// Ranks word usage across all records.
    ///
    /// Returns at most [`TOP_WORDS`] entries ordered by descending count;
    /// equal counts keep first-encountered order. Empty input yields an
    /// empty list.
    pub fn top_words(&self, records: &[Record]) -> Vec<WordCount> {
        let text = records
            .iter()
            .map(|r| r.body.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        // (count, first-seen index) per word, for the stable tie-break.
        let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
        let mut next_rank = 0usize;
        for token in self.token.find_iter(&text) {
            let word = token.as_str();
            if STOPWORDS.contains(&word) {
                continue;
            }
            counts
                .entry(word)
                .or_insert_with(|| {
                    let rank = (0, next_rank);
                    next_rank += 1;
                    rank
                })
                .0 += 1;
        }

        let mut ranked: Vec<(&str, u64, usize)> = counts
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(TOP_WORDS);

        ranked
            .into_iter()
            .map(|(word, count, _)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }
}

impl Default for WordFrequency {
    fn default() -> Self {
        Self::new()
    }
}
