//! Statistical analyses over the parsed record sequence.
//!
//! Each submodule is an independent consumer of `&[Record]`:
//!
//! - [`summary`] — totals, per-day-per-user and per-user tables, activity
//!   breakdowns.
//! - [`words`] — ranked word frequency with stopword filtering.
//! - [`emojis`] — ranked emoji frequency.
//! - [`lag`] — turn-taking reply latency per responder.
//!
//! Emptiness in one analysis never affects the others; an analysis with
//! nothing to show returns an empty collection rather than an error.

pub mod emojis;
pub mod lag;
pub mod summary;
pub mod words;

pub use emojis::{EmojiCount, top_emojis};
pub use lag::{ReplyEvent, ResponderLag, average_by_responder, reply_events};
pub use summary::{
    DailySummary, DayCount, GroupStats, HourlyActivity, Totals, UserSummary,
    daily_message_counts, hourly_activity, summarize_daily, summarize_users, totals,
};
pub use words::{WordCount, WordFrequency};
