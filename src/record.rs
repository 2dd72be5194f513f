//! The parsed message record type.
//!
//! [`Record`] is one successfully parsed chat line, enriched with the
//! per-message metrics (letters, words, emoji) at construction time. Records
//! are immutable once built; every aggregate in [`crate::analysis`] is a pure
//! recomputation over a `&[Record]` slice.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::emoji::EmojiLookup;

/// One parsed, enriched chat line.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent (minute resolution) |
/// | `date` | `NaiveDate` | Calendar date component of `timestamp` |
/// | `epoch_minutes` | `i64` | Minutes since the Unix epoch, for lag arithmetic |
/// | `sender` | `String` | Trimmed sender name, treated as an opaque key |
/// | `body` | `String` | Trimmed message text |
/// | `letter_count` | `usize` | Characters in the captured body |
/// | `word_count` | `usize` | Whitespace-delimited tokens in the body |
/// | `emoji_count` | `usize` | Characters classified as emoji |
///
/// # Counting semantics
///
/// `letter_count` counts Unicode scalar values, so an emoji is one "letter"
/// like any other character. `emoji_count` tests characters one at a time
/// against the injected table, which undercounts compound sequences (a ZWJ
/// family counts each member it recognizes, not the family).
///
/// # Example
///
/// ```
/// use chatlens::emoji::EmojiTable;
/// use chatlens::Record;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2025, 9, 20)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let rec = Record::from_parts(ts, "Shivam", "Best of luck for exams! 🍀", &EmojiTable::new());
///
/// assert_eq!(rec.sender, "Shivam");
/// assert_eq!(rec.word_count, 6);
/// assert_eq!(rec.emoji_count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Calendar date component of `timestamp`.
    pub date: NaiveDate,

    /// Minutes since the Unix epoch (UTC interpretation of `timestamp`).
    ///
    /// Used only for reply-lag arithmetic; monotonic within a correctly
    /// ordered log.
    pub epoch_minutes: i64,

    /// Sender name, trimmed of surrounding whitespace.
    ///
    /// Case-sensitive and opaque: no normalization or alias resolution.
    pub sender: String,

    /// Message text, trimmed of surrounding whitespace.
    pub body: String,

    /// Characters in the captured body (emoji included, one unit each).
    pub letter_count: usize,

    /// Whitespace-delimited tokens in the body.
    pub word_count: usize,

    /// Characters of the body present in the emoji table.
    pub emoji_count: usize,
}

impl Record {
    /// Builds a record from the raw captured parts of a chat line.
    ///
    /// `raw_body` is the body exactly as captured, before trimming: the
    /// letter/word/emoji metrics are derived from it, while the stored `body`
    /// is the trimmed text.
    pub fn from_parts(
        timestamp: NaiveDateTime,
        sender: &str,
        raw_body: &str,
        emoji: &dyn EmojiLookup,
    ) -> Self {
        Self {
            date: timestamp.date(),
            epoch_minutes: timestamp.and_utc().timestamp().div_euclid(60),
            sender: sender.trim().to_string(),
            body: raw_body.trim().to_string(),
            letter_count: raw_body.chars().count(),
            word_count: raw_body.split_whitespace().count(),
            emoji_count: raw_body.chars().filter(|&ch| emoji.contains(ch)).count(),
            timestamp,
        }
    }

    /// Hour of day the message was sent (0..=23).
    pub fn hour(&self) -> u32 {
        use chrono::Timelike;
        self.timestamp.hour()
    }
}
