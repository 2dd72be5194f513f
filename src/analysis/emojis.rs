//! Emoji frequency analysis.
//!
//! Counts individual emoji characters across all message bodies and ranks
//! them. Like the per-record `emoji_count`, this is a character-by-character
//! scan: compound sequences are counted by their recognized members.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Record;
use crate::emoji::EmojiLookup;

/// Number of entries the ranking is truncated to.
pub const TOP_EMOJIS: usize = 10;

/// One entry of the ranked emoji list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji character.
    pub emoji: char,
    /// Occurrences across all message bodies.
    pub count: u64,
}

/// Ranks emoji usage across all records.
///
/// Returns at most [`TOP_EMOJIS`] entries ordered by descending count, ties
/// broken by first-encountered order. A chat with no emoji yields an empty
/// list — the "nothing to show" state, not an error.
pub fn top_emojis(records: &[Record], lookup: &dyn EmojiLookup) -> Vec<EmojiCount> {
    let mut counts: HashMap<char, (u64, usize)> = HashMap::new();
    let mut next_rank = 0usize;
    for record in records {
        for ch in record.body.chars().filter(|&ch| lookup.contains(ch)) {
            counts
                .entry(ch)
                .or_insert_with(|| {
                    let rank = (0, next_rank);
                    next_rank += 1;
                    rank
                })
                .0 += 1;
        }
    }

    let mut ranked: Vec<(char, u64, usize)> = counts
        .into_iter()
        .map(|(emoji, (count, first))| (emoji, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(TOP_EMOJIS);

    ranked
        .into_iter()
        .map(|(emoji, count, _)| EmojiCount { emoji, count })
        .collect()
}
