//! Aggregated message statistics.
//!
//! All aggregation follows the same shape: build a map from grouping key to a
//! mutable [`Accumulator`], add each record once, then finalize every
//! accumulator into an output row. `BTreeMap` keys give lexicographic output
//! order, so repeated runs over the same records are bit-identical.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Record;

/// Grand totals across the whole record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Number of messages.
    pub messages: u64,
    /// Sum of per-message word counts.
    pub words: u64,
    /// Sum of per-message letter counts.
    pub letters: u64,
    /// Sum of per-message emoji counts.
    pub emojis: u64,
}

/// Per-group statistics shared by the daily and per-user tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Messages in the group.
    pub messages: u64,
    /// Summed word counts.
    pub words: u64,
    /// Summed letter counts.
    pub letters: u64,
    /// Summed emoji counts.
    pub emojis: u64,
    /// `emojis / messages * 100`, rounded to 2 decimals.
    ///
    /// `None` when the denominator is zero — "not applicable", never a crash
    /// and never coerced to zero.
    pub emoji_per_message_pct: Option<f64>,
    /// `emojis / letters * 100`, rounded to 4 decimals. `None` when the
    /// group has zero letters.
    pub emoji_per_letter_pct: Option<f64>,
}

/// One row of the per-day-per-user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date of the group.
    pub date: NaiveDate,
    /// Sender of the group.
    pub sender: String,
    /// Aggregated statistics.
    #[serde(flatten)]
    pub stats: GroupStats,
}

/// One row of the per-user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Sender of the group.
    pub sender: String,
    /// Aggregated statistics.
    #[serde(flatten)]
    pub stats: GroupStats,
}

/// Messages per calendar date, all senders combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    /// Calendar date.
    pub date: NaiveDate,
    /// Messages sent on that date.
    pub messages: u64,
}

/// Per-sender message counts by hour of day, for heatmap consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Sender name.
    pub sender: String,
    /// Message counts indexed by hour (0..=23).
    pub by_hour: [u64; 24],
}

/// Mutable per-group accumulator, finalized into [`GroupStats`].
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    messages: u64,
    words: u64,
    letters: u64,
    emojis: u64,
}

impl Accumulator {
    fn add(&mut self, record: &Record) {
        self.messages += 1;
        self.words += record.word_count as u64;
        self.letters += record.letter_count as u64;
        self.emojis += record.emoji_count as u64;
    }

    fn finalize(self) -> GroupStats {
        GroupStats {
            messages: self.messages,
            words: self.words,
            letters: self.letters,
            emojis: self.emojis,
            emoji_per_message_pct: ratio_pct(self.emojis, self.messages).map(|p| round_to(p, 2)),
            emoji_per_letter_pct: ratio_pct(self.emojis, self.letters).map(|p| round_to(p, 4)),
        }
    }
}

fn ratio_pct(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64 * 100.0)
    }
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Sums message, word, letter, and emoji counts across all records.
pub fn totals(records: &[Record]) -> Totals {
    let mut acc = Accumulator::default();
    for record in records {
        acc.add(record);
    }
    Totals {
        messages: acc.messages,
        words: acc.words,
        letters: acc.letters,
        emojis: acc.emojis,
    }
}

/// Groups records by `(date, sender)` and aggregates each group.
///
/// Rows are ordered by date, then sender.
pub fn summarize_daily(records: &[Record]) -> Vec<DailySummary> {
    let mut groups: BTreeMap<(NaiveDate, &str), Accumulator> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.date, record.sender.as_str()))
            .or_default()
            .add(record);
    }
    groups
        .into_iter()
        .map(|((date, sender), acc)| DailySummary {
            date,
            sender: sender.to_string(),
            stats: acc.finalize(),
        })
        .collect()
}

/// Groups records by sender and aggregates each group over the full range.
///
/// Rows are ordered by sender.
pub fn summarize_users(records: &[Record]) -> Vec<UserSummary> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.sender.as_str()).or_default().add(record);
    }
    groups
        .into_iter()
        .map(|(sender, acc)| UserSummary {
            sender: sender.to_string(),
            stats: acc.finalize(),
        })
        .collect()
}

/// Counts messages per calendar date across all senders, ordered by date.
pub fn daily_message_counts(records: &[Record]) -> Vec<DayCount> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(date, messages)| DayCount { date, messages })
        .collect()
}

/// Counts messages per sender per hour of day, ordered by sender.
pub fn hourly_activity(records: &[Record]) -> Vec<HourlyActivity> {
    let mut counts: BTreeMap<&str, [u64; 24]> = BTreeMap::new();
    for record in records {
        counts.entry(record.sender.as_str()).or_insert([0; 24])[record.hour() as usize] += 1;
    }
    counts
        .into_iter()
        .map(|(sender, by_hour)| HourlyActivity {
            sender: sender.to_string(),
            by_hour,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ChatParser;

    fn records(text: &str) -> Vec<Record> {
        ChatParser::new().parse(text)
    }

    const SAMPLE: &str = "20/09/2025, 10:00 - Alice: hello there 🍀\n\
                          20/09/2025, 10:05 - Bob: hi\n\
                          21/09/2025, 09:00 - Alice: good morning";

    #[test]
    fn test_totals() {
        let t = totals(&records(SAMPLE));
        assert_eq!(t.messages, 3);
        assert_eq!(t.words, 6);
        assert_eq!(t.emojis, 1);
        // "hello there 🍀" = 13, "hi" = 2, "good morning" = 12
        assert_eq!(t.letters, 27);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn test_summarize_daily_groups_and_orders() {
        let daily = summarize_daily(&records(SAMPLE));
        let keys: Vec<(String, String)> = daily
            .iter()
            .map(|d| (d.date.to_string(), d.sender.clone()))
            .collect();
        assert_eq!(
            keys,
            [
                ("2025-09-20".to_string(), "Alice".to_string()),
                ("2025-09-20".to_string(), "Bob".to_string()),
                ("2025-09-21".to_string(), "Alice".to_string()),
            ]
        );
        assert_eq!(daily[0].stats.messages, 1);
        assert_eq!(daily[0].stats.emojis, 1);
    }

    #[test]
    fn test_summarize_users_partitions_totals() {
        let recs = records(SAMPLE);
        let users = summarize_users(&recs);
        let total: u64 = users.iter().map(|u| u.stats.messages).sum();
        assert_eq!(total, totals(&recs).messages);

        let alice = users.iter().find(|u| u.sender == "Alice").unwrap();
        assert_eq!(alice.stats.messages, 2);
    }

    #[test]
    fn test_ratio_rounding() {
        // 1 emoji over 3 messages: 33.333...% -> 33.33
        let recs = records(
            "20/09/2025, 10:00 - A: 🍀\n\
             20/09/2025, 10:01 - A: x\n\
             20/09/2025, 10:02 - A: y",
        );
        let users = summarize_users(&recs);
        assert_eq!(users[0].stats.emoji_per_message_pct, Some(33.33));
        // 1 emoji over 3 letters -> 33.3333
        assert_eq!(users[0].stats.emoji_per_letter_pct, Some(33.3333));
    }

    #[test]
    fn test_zero_letters_gives_none() {
        let recs = records("20/09/2025, 10:00 - A: ");
        let users = summarize_users(&recs);
        assert_eq!(users[0].stats.letters, 0);
        assert_eq!(users[0].stats.emoji_per_letter_pct, None);
        assert_eq!(users[0].stats.emoji_per_message_pct, Some(0.0));
    }

    #[test]
    fn test_daily_message_counts() {
        let days = daily_message_counts(&records(SAMPLE));
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].messages, 2);
        assert_eq!(days[1].messages, 1);
    }

    #[test]
    fn test_hourly_activity() {
        let hours = hourly_activity(&records(SAMPLE));
        let alice = hours.iter().find(|h| h.sender == "Alice").unwrap();
        assert_eq!(alice.by_hour[10], 1);
        assert_eq!(alice.by_hour[9], 1);
        assert_eq!(alice.by_hour.iter().sum::<u64>(), 2);
    }

    #[test]
    fn test_determinism() {
        let recs = records(SAMPLE);
        assert_eq!(summarize_daily(&recs), summarize_daily(&recs));
        assert_eq!(summarize_users(&recs), summarize_users(&recs));
    }
}
