//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze WhatsApp-style chat exports: totals, per-user and per-day
/// statistics, word and emoji frequency, and reply latency.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --format json
    chatlens chat.txt -f json --no-records
    chatlens                       # analyzes the built-in demo chat")]
pub struct Args {
    /// Path to the exported chat file (built-in demo chat when omitted)
    pub input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Omit the raw record sequence from JSON output
    #[arg(long)]
    pub no_records: bool,
}

/// Report output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary tables
    Text,
    /// The full report as pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["chatlens"]);
        assert!(args.input.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.no_records);
    }

    #[test]
    fn test_format_flag() {
        let args = Args::parse_from(["chatlens", "chat.txt", "--format", "json"]);
        assert_eq!(args.input.as_deref(), Some("chat.txt"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }
}
