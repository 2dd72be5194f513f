//! Reply lag analysis.
//!
//! Walks the record sequence pairwise and records a reply event whenever the
//! sender changes between consecutive messages. Consecutive messages from
//! the same sender are one turn, not a reply. Lag is the difference in
//! `epoch_minutes` and may be negative if the source log is out of order;
//! values are not clamped, callers filter if they need to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Record;
use crate::analysis::summary::round_to;

/// One turn change between two consecutive records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEvent {
    /// Sender of the earlier message.
    pub sender: String,
    /// Sender of the later message; the lag is attributed to them.
    pub responder: String,
    /// Minutes between the two messages. Negative on out-of-order input.
    pub lag_minutes: i64,
}

/// Average reply lag for one responder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderLag {
    /// The responding sender.
    pub responder: String,
    /// Number of reply events attributed to them.
    pub replies: u64,
    /// Arithmetic mean of their lags, rounded to 2 decimals.
    pub avg_lag_minutes: f64,
}

/// Extracts reply events from the ordered record sequence.
///
/// Fewer than two records, or a log where the sender never changes, yields
/// an empty vector — the "insufficient data" state, not an error.
pub fn reply_events(records: &[Record]) -> Vec<ReplyEvent> {
    records
        .windows(2)
        .filter(|pair| pair[0].sender != pair[1].sender)
        .map(|pair| ReplyEvent {
            sender: pair[0].sender.clone(),
            responder: pair[1].sender.clone(),
            lag_minutes: pair[1].epoch_minutes - pair[0].epoch_minutes,
        })
        .collect()
}

/// Averages lag per responder, ordered by responder name.
pub fn average_by_responder(events: &[ReplyEvent]) -> Vec<ResponderLag> {
    let mut groups: BTreeMap<&str, (i64, u64)> = BTreeMap::new();
    for event in events {
        let (sum, n) = groups.entry(event.responder.as_str()).or_default();
        *sum += event.lag_minutes;
        *n += 1;
    }
    groups
        .into_iter()
        .map(|(responder, (sum, n))| ResponderLag {
            responder: responder.to_string(),
            replies: n,
            avg_lag_minutes: round_to(sum as f64 / n as f64, 2),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ChatParser;

    fn events(text: &str) -> Vec<ReplyEvent> {
        reply_events(&ChatParser::new().parse(text))
    }

    #[test]
    fn test_single_reply() {
        let events = events(
            "20/09/2025, 10:00 - A: hi\n\
             20/09/2025, 10:05 - B: hello",
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sender, "A");
        assert_eq!(events[0].responder, "B");
        assert_eq!(events[0].lag_minutes, 5);
    }

    #[test]
    fn test_same_sender_is_not_an_event() {
        let events = events(
            "20/09/2025, 10:00 - A: hi\n\
             20/09/2025, 10:05 - A: still me",
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_negative_lag_is_kept() {
        let events = events(
            "20/09/2025, 10:05 - A: hi\n\
             20/09/2025, 10:00 - B: earlier somehow",
        );
        assert_eq!(events[0].lag_minutes, -5);
    }

    #[test]
    fn test_lag_across_days() {
        let events = events(
            "20/09/2025, 23:59 - A: night\n\
             21/09/2025, 00:01 - B: morning",
        );
        assert_eq!(events[0].lag_minutes, 2);
    }

    #[test]
    fn test_average_by_responder() {
        let events = events(
            "20/09/2025, 10:00 - A: one\n\
             20/09/2025, 10:04 - B: two\n\
             20/09/2025, 10:05 - A: three\n\
             20/09/2025, 10:08 - B: four",
        );
        let lags = average_by_responder(&events);
        assert_eq!(lags.len(), 2);
        // A replied once (10:04 -> 10:05), B twice (4 and 3 minutes).
        assert_eq!(lags[0].responder, "A");
        assert_eq!(lags[0].replies, 1);
        assert_eq!(lags[0].avg_lag_minutes, 1.0);
        assert_eq!(lags[1].responder, "B");
        assert_eq!(lags[1].replies, 2);
        assert_eq!(lags[1].avg_lag_minutes, 3.5);
    }

    #[test]
    fn test_mean_rounding() {
        let events = vec![
            ReplyEvent {
                sender: "A".into(),
                responder: "B".into(),
                lag_minutes: 1,
            },
            ReplyEvent {
                sender: "A".into(),
                responder: "B".into(),
                lag_minutes: 0,
            },
            ReplyEvent {
                sender: "A".into(),
                responder: "B".into(),
                lag_minutes: 0,
            },
        ];
        let lags = average_by_responder(&events);
        assert_eq!(lags[0].avg_lag_minutes, 0.33);
    }

    #[test]
    fn test_insufficient_data() {
        assert!(events("20/09/2025, 10:00 - A: alone").is_empty());
        assert!(average_by_responder(&[]).is_empty());
    }
}
