//! # Chatlens
//!
//! A Rust library for parsing WhatsApp-style chat exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! Chatlens turns a semi-structured chat export — one message per line in
//! the fixed `DD/MM/YYYY, HH:MM - Sender: Body` format — into an ordered
//! sequence of enriched [`Record`]s, then derives:
//!
//! - **Totals** — message, word, letter, and emoji counts
//! - **Per-day-per-user and per-user tables** — with emoji-usage ratios
//! - **Word frequency** — stopword-filtered, ranked, top 25
//! - **Emoji frequency** — ranked, top 10
//! - **Reply lag** — average turn-taking latency per responder
//! - **Activity breakdowns** — daily counts and per-sender hourly heatmap data
//!
//! Malformed lines are dropped silently; parsing never fails, it only yields
//! fewer records. The whole pipeline is a single synchronous in-memory pass
//! and is fully deterministic.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::Report;
//!
//! let text = "20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀";
//! let report = Report::from_text(text);
//!
//! assert_eq!(report.totals.messages, 1);
//! assert_eq!(report.records[0].word_count, 6);
//! ```
//!
//! ## Using the pieces directly
//!
//! Each analysis is an independent consumer of the record sequence:
//!
//! ```rust
//! use chatlens::analysis::{summarize_users, totals};
//! use chatlens::parse::ChatParser;
//!
//! let records = ChatParser::new().parse("20/09/2025, 10:00 - Ana: hi there");
//! let totals = totals(&records);
//! let users = summarize_users(&records);
//!
//! assert_eq!(totals.words, 2);
//! assert_eq!(users[0].sender, "Ana");
//! ```
//!
//! ## Module Structure
//!
//! - [`parse`] — [`ChatParser`](parse::ChatParser), the fixed-format line parser
//! - [`record`] — [`Record`], the enriched message type
//! - [`emoji`] — [`EmojiLookup`](emoji::EmojiLookup) trait and the built-in table
//! - [`analysis`] — the aggregators and frequency/lag analyzers
//! - [`report`] — [`Report`], the one-shot pipeline
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod emoji;
pub mod error;
pub mod parse;
pub mod record;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::Record;
pub use report::Report;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Record, Report};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parse::ChatParser;

    // Emoji table injection
    pub use crate::emoji::{EmojiLookup, EmojiTable};

    // Analyses
    pub use crate::analysis::{
        DailySummary, DayCount, EmojiCount, GroupStats, HourlyActivity, ReplyEvent, ResponderLag,
        Totals, UserSummary, WordCount, WordFrequency, average_by_responder,
        daily_message_counts, hourly_activity, reply_events, summarize_daily, summarize_users,
        top_emojis, totals,
    };
}
