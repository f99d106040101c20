//! Chatsum - chat transcript summarizer CLI
//!
//! Reads plain-text User/AI transcripts and reports message statistics,
//! keywords and a one-line topic summary per file.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use chatsum_core::error::{ChatsumError, ExitCode as ChatsumExitCode};
use chatsum_core::format::OutputFormat;
use chatsum_core::logging;
use cli::Cli;
use commands::dispatch::RunOutcome;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                // Help and version are informational, not errors
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    err.exit()
                }
                _ => {}
            }

            if argv_requests_json() {
                let usage = ChatsumError::UsageError(err.to_string());
                eprintln!("{}", usage.to_json());
            } else {
                let _ = err.print();
            }
            return ExitCode::from(ChatsumExitCode::Usage as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli) {
        Ok(RunOutcome::Completed) => {
            tracing::debug!(elapsed = ?start.elapsed(), "done");
            ExitCode::from(ChatsumExitCode::Success as u8)
        }
        Ok(RunOutcome::FilesFailed(failed)) => {
            tracing::debug!(elapsed = ?start.elapsed(), failed, "done with failures");
            ExitCode::from(ChatsumExitCode::Io as u8)
        }
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `--format json` is checked on raw argv because clap may fail before
/// `Cli.format` is available.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
