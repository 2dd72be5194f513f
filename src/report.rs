//! One-shot analysis pipeline.
//!
//! [`Report`] runs every analysis over a single parsed record sequence and
//! holds the results as plain serializable data. It has no rendering
//! knowledge; presentation layers chart whatever they need from it.
//!
//! Runs are pure and deterministic: the same input text always produces a
//! bit-identical report, and nothing is cached across runs.

use serde::{Deserialize, Serialize};

use crate::Record;
use crate::analysis::{
    DailySummary, DayCount, EmojiCount, HourlyActivity, ResponderLag, Totals, UserSummary,
    WordCount, WordFrequency, average_by_responder, daily_message_counts, hourly_activity,
    reply_events, summarize_daily, summarize_users, top_emojis, totals,
};
use crate::emoji::{EmojiLookup, EmojiTable};
use crate::parse::ChatParser;

/// Everything the analyses derive from one chat export.
///
/// Each field is computed independently from the same record sequence, so an
/// empty result in one analysis (no emoji, no alternating senders) leaves
/// the others intact.
///
/// # Example
///
/// ```
/// use chatlens::Report;
///
/// let report = Report::from_text("20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀");
/// assert_eq!(report.totals.messages, 1);
/// assert_eq!(report.users[0].sender, "Shivam");
/// assert!(report.reply_lags.is_empty()); // one message, nothing to reply to
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Grand totals across all messages.
    pub totals: Totals,
    /// Per-day-per-user table, ordered by date then sender.
    pub daily: Vec<DailySummary>,
    /// Per-user table over the full time range, ordered by sender.
    pub users: Vec<UserSummary>,
    /// Ranked word frequency, stopwords removed, top 25.
    pub top_words: Vec<WordCount>,
    /// Ranked emoji frequency, top 10. Empty when the chat has no emoji.
    pub top_emojis: Vec<EmojiCount>,
    /// Average reply lag per responder. Empty when no sender change exists.
    pub reply_lags: Vec<ResponderLag>,
    /// Messages per calendar date, for timeline rendering.
    pub daily_messages: Vec<DayCount>,
    /// Per-sender hourly message counts, for heatmap rendering.
    pub hourly_activity: Vec<HourlyActivity>,
    /// The enriched record sequence itself, in original order.
    pub records: Vec<Record>,
}

impl Report {
    /// Parses `text` with the built-in emoji table and runs all analyses.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, &EmojiTable::new())
    }

    /// Parses `text` with a custom emoji table and runs all analyses.
    pub fn from_text_with(text: &str, lookup: &dyn EmojiLookup) -> Self {
        let records = ChatParser::with_lookup(lookup).parse(text);
        Self::from_records(records, lookup)
    }

    /// Runs all analyses over an already-parsed record sequence.
    pub fn from_records(records: Vec<Record>, lookup: &dyn EmojiLookup) -> Self {
        Self {
            totals: totals(&records),
            daily: summarize_daily(&records),
            users: summarize_users(&records),
            top_words: WordFrequency::new().top_words(&records),
            top_emojis: top_emojis(&records, lookup),
            reply_lags: average_by_responder(&reply_events(&records)),
            daily_messages: daily_message_counts(&records),
            hourly_activity: hourly_activity(&records),
            records,
        }
    }

    /// Returns `true` if parsing produced zero records.
    ///
    /// This is the reportable "no data" state; callers decide how to surface
    /// it (the CLI maps it to [`crate::ChatlensError::NoMessages`]).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
