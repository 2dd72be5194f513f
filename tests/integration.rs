//! Integration tests for the full parse-and-analyze pipeline.

use chatlens::prelude::*;

const CHAT: &str = "\
20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀
20/09/2025, 10:05 - Priya: Thanks! You too 😂😂
20/09/2025, 10:06 - Priya: the revision is going well
20/09/2025, 11:30 - Shivam: same here, see you at the library
21/09/2025, 09:00 - Priya: on my way 🚀
this line has no timestamp and is dropped
21/09/2025, 09:02 - Shivam: grabbing a seat for you";

fn report() -> Report {
    Report::from_text(CHAT)
}

#[test]
fn one_record_per_matching_line_in_order() {
    let report = report();
    assert_eq!(report.records.len(), 6);
    let senders: Vec<&str> = report.records.iter().map(|r| r.sender.as_str()).collect();
    assert_eq!(
        senders,
        ["Shivam", "Priya", "Priya", "Shivam", "Priya", "Shivam"]
    );
}

#[test]
fn spec_round_trip_line() {
    let report = Report::from_text("20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀");
    assert_eq!(report.records.len(), 1);
    let rec = &report.records[0];
    assert_eq!(rec.sender, "Shivam");
    assert_eq!(rec.word_count, 6);
    assert_eq!(rec.emoji_count, 1);
    assert_eq!(report.totals.messages, 1);
}

#[test]
fn totals_partition_per_user() {
    let report = report();
    let per_user: u64 = report.users.iter().map(|u| u.stats.messages).sum();
    assert_eq!(per_user, report.totals.messages);

    let per_user_words: u64 = report.users.iter().map(|u| u.stats.words).sum();
    assert_eq!(per_user_words, report.totals.words);
}

#[test]
fn daily_table_partitions_per_user_table() {
    let report = report();
    for user in &report.users {
        let from_daily: u64 = report
            .daily
            .iter()
            .filter(|d| d.sender == user.sender)
            .map(|d| d.stats.messages)
            .sum();
        assert_eq!(from_daily, user.stats.messages, "user {}", user.sender);
    }
}

#[test]
fn reply_lag_scenario() {
    let report = Report::from_text(
        "20/09/2025, 10:00 - A: hi\n\
         20/09/2025, 10:05 - B: hello",
    );
    assert_eq!(report.reply_lags.len(), 1);
    let lag = &report.reply_lags[0];
    assert_eq!(lag.responder, "B");
    assert_eq!(lag.replies, 1);
    assert_eq!(lag.avg_lag_minutes, 5.0);
}

#[test]
fn same_sender_reports_insufficient_data() {
    let report = Report::from_text(
        "20/09/2025, 10:00 - A: hi\n\
         20/09/2025, 10:05 - A: me again",
    );
    assert!(report.reply_lags.is_empty());
    // The rest of the analyses still ran.
    assert_eq!(report.totals.messages, 2);
}

#[test]
fn stopword_scenario() {
    let report = Report::from_text("20/09/2025, 10:00 - A: the cat and the hat");
    let words: Vec<(&str, u64)> = report
        .top_words
        .iter()
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    assert_eq!(words, [("cat", 1), ("hat", 1)]);
}

#[test]
fn malformed_line_drops_exactly_one_record() {
    let well_formed = "20/09/2025, 10:00 - A: one\n20/09/2025, 10:01 - B: two";
    let with_bad_line = "20/09/2025, 10:00 - A: one\n20/09/2025 - B: missing time\n20/09/2025, 10:01 - B: two";

    let a = Report::from_text(well_formed);
    let b = Report::from_text(with_bad_line);
    assert_eq!(a.records.len(), b.records.len());
    assert_eq!(a.totals, b.totals);
}

#[test]
fn pipeline_is_deterministic() {
    let a = report();
    let b = report();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn per_record_bounds_hold() {
    for rec in &report().records {
        assert!(rec.letter_count >= rec.body.chars().count());
        assert!(rec.emoji_count <= rec.letter_count);
    }
}

#[test]
fn emoji_ranking_counts_repeats() {
    let report = report();
    assert_eq!(report.top_emojis[0].emoji, '😂');
    assert_eq!(report.top_emojis[0].count, 2);
    let emojis: Vec<char> = report.top_emojis.iter().map(|e| e.emoji).collect();
    assert!(emojis.contains(&'🍀'));
    assert!(emojis.contains(&'🚀'));
}

#[test]
fn hourly_activity_matches_message_count() {
    let report = report();
    let total: u64 = report
        .hourly_activity
        .iter()
        .flat_map(|h| h.by_hour.iter())
        .sum();
    assert_eq!(total, report.totals.messages);
}

#[test]
fn custom_emoji_table_is_injectable() {
    use std::collections::HashSet;

    let stars: HashSet<char> = ['★'].into_iter().collect();
    let report = Report::from_text_with("20/09/2025, 10:00 - A: ★ 🍀", &stars);
    assert_eq!(report.totals.emojis, 1);
    assert_eq!(report.top_emojis.len(), 1);
    assert_eq!(report.top_emojis[0].emoji, '★');
}

#[test]
fn empty_input_is_reportable_not_fatal() {
    let report = Report::from_text("");
    assert!(report.is_empty());
    assert!(report.users.is_empty());
    assert!(report.top_words.is_empty());
    assert!(report.reply_lags.is_empty());
}
