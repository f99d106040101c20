//! CLI argument parsing for chatsum
//!
//! Input selection: --file or --folder (--file wins when both are given).
//! Presentation: --format, --show-messages, --quiet. Logging: --verbose,
//! --log-level, --log-json.

use std::path::PathBuf;

use clap::Parser;

use chatsum_core::format::OutputFormat;

/// Chatsum - summarize two-party User/AI chat transcripts
#[derive(Parser, Debug)]
#[command(name = "chatsum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a chat log file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Folder of .txt chat logs for batch summarization
    #[arg(long, value_name = "PATH")]
    pub folder: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// List every User and AI message in the report
    #[arg(long)]
    pub show_messages: bool,

    /// Config file (defaults to ~/.config/chatsum/config.toml when present)
    #[arg(long, env = "CHATSUM_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a directive)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
