//! Chat export line parser.
//!
//! The supported export format is a single fixed shape, one message per
//! physical line:
//!
//! ```text
//! 20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀
//! ```
//!
//! i.e. `DD/MM/YYYY, HH:MM - Sender: Body` with a zero-padded 24-hour clock.
//! Lines that do not match the pattern, or whose date/time fields fail the
//! fixed chrono format, are dropped silently — parsing never fails, it only
//! yields fewer records. Continuation lines of multi-line messages are not
//! reassembled; each physical line stands alone.
//!
//! # Example
//!
//! ```
//! use chatlens::parse::ChatParser;
//!
//! let parser = ChatParser::new();
//! let records = parser.parse("20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sender, "Shivam");
//! ```

use chrono::NaiveDateTime;
use regex::Regex;

use crate::Record;
use crate::emoji::{EmojiLookup, EmojiTable};

/// Line pattern: date, hour, minute, sender (any colon-free run), body.
///
/// Deliberately unanchored: a match may begin mid-line, so a stray invisible
/// prefix (e.g. a directionality mark) does not lose the message.
const LINE_PATTERN: &str = r"(\d{2}/\d{2}/\d{4}), (\d{2}):(\d{2}) - ([^:]+): (.*)";

/// The fixed timestamp format. No other format is accepted.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Parser for the fixed chat-export format.
///
/// Holds the compiled line pattern and the injected emoji table used to
/// enrich each record at parse time.
///
/// # Example
///
/// ```
/// use chatlens::parse::ChatParser;
/// use std::collections::HashSet;
///
/// // Default emoji table
/// let parser = ChatParser::new();
///
/// // Custom table, e.g. for tests
/// let stars: HashSet<char> = ['★'].into_iter().collect();
/// let parser = ChatParser::with_lookup(stars);
/// let records = parser.parse("01/01/2024, 09:00 - Ana: ★");
/// assert_eq!(records[0].emoji_count, 1);
/// ```
pub struct ChatParser<L = EmojiTable> {
    pattern: Regex,
    emoji: L,
}

impl ChatParser<EmojiTable> {
    /// Creates a parser with the built-in emoji table.
    pub fn new() -> Self {
        Self::with_lookup(EmojiTable::new())
    }
}

impl Default for ChatParser<EmojiTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EmojiLookup> ChatParser<L> {
    /// Creates a parser with a custom emoji membership table.
    pub fn with_lookup(emoji: L) -> Self {
        Self {
            pattern: Regex::new(LINE_PATTERN).unwrap(),
            emoji,
        }
    }

    /// Parses the full export text into an ordered record sequence.
    ///
    /// One record per matching line, in original line order. Empty input or
    /// input with zero matching lines yields an empty vector; callers must
    /// treat that as "no data", not as a failure.
    pub fn parse(&self, text: &str) -> Vec<Record> {
        text.lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    /// Parses a single physical line, or `None` if it is malformed.
    fn parse_line(&self, line: &str) -> Option<Record> {
        let caps = self.pattern.captures(line)?;
        let stamp = format!("{}, {}:{}", &caps[1], &caps[2], &caps[3]);
        // Shape-valid but impossible dates (31/02, hour 25) fail here.
        let timestamp = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).ok()?;
        Some(Record::from_parts(timestamp, &caps[4], &caps[5], &self.emoji))
    }
}
