//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;

use chatlens::cli::{Args, OutputFormat};
use chatlens::{ChatlensError, Report, Result};

/// Fallback input used when no file is given.
const DEFAULT_SAMPLE: &str = "20/09/2025, 10:00 - Shivam: Best of luck for exams! 🍀";

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();

    let (text, path) = match &args.input {
        Some(input) => (fs::read_to_string(input)?, Some(PathBuf::from(input))),
        None => {
            eprintln!("📄 No input file given, using built-in demo chat");
            (DEFAULT_SAMPLE.to_string(), None)
        }
    };

    let mut report = Report::from_text(&text);
    if report.is_empty() {
        return Err(ChatlensError::no_messages(path));
    }

    match args.format {
        OutputFormat::Json => {
            if args.no_records {
                report.records.clear();
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &Report) {
    println!("📱 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "💬 Messages: {}   ✍️ Words: {}   🔠 Letters: {}   😂 Emojis: {}",
        report.totals.messages, report.totals.words, report.totals.letters, report.totals.emojis
    );

    println!("\n👤 Per user:");
    for user in &report.users {
        let emoji_pct = user
            .stats
            .emoji_per_message_pct
            .map(|p| format!("{p:.2}%"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "   {:<20} {:>6} messages  {:>7} words  {:>8} letters  emoji/msg {}",
            user.sender, user.stats.messages, user.stats.words, user.stats.letters, emoji_pct
        );
    }

    if report.top_words.is_empty() {
        println!("\n📋 Top words: nothing to show");
    } else {
        println!("\n📋 Top words:");
        for word in &report.top_words {
            println!("   {:<20} {}", word.word, word.count);
        }
    }

    if report.top_emojis.is_empty() {
        println!("\n😂 Top emojis: no emojis found in this chat");
    } else {
        println!("\n😂 Top emojis:");
        for emoji in &report.top_emojis {
            println!("   {}  {}", emoji.emoji, emoji.count);
        }
    }

    if report.reply_lags.is_empty() {
        println!("\n⏱️ Reply lag: not enough alternating messages");
    } else {
        println!("\n⏱️ Average reply lag (minutes):");
        for lag in &report.reply_lags {
            println!(
                "   {:<20} {:>8.2}  ({} replies)",
                lag.responder, lag.avg_lag_minutes, lag.replies
            );
        }
    }

    println!("\n📅 Messages per day:");
    for day in &report.daily_messages {
        println!("   {}  {}", day.date, day.messages);
    }
}
