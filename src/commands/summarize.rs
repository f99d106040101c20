//! `--file` and `--folder` handling
//!
//! A single file failure is fatal for `--file`. In folder mode each file is
//! processed independently: failures are reported and counted, and the
//! remaining files are still summarized.

use std::path::Path;

use chatsum_core::error::Result;
use chatsum_core::format::OutputFormat;
use chatsum_core::summary::Summarizer;
use chatsum_core::transcript::{discover_transcripts, Transcript};

use crate::cli::Cli;
use crate::commands::output::{self, FileReport};

/// Summarize one transcript file and print its report
pub fn summarize_file(cli: &Cli, summarizer: &Summarizer<'_>, path: &Path) -> Result<()> {
    let report = build_report(summarizer, path)?;

    match cli.format {
        OutputFormat::Human => print!("{}", output::render_human(&report, cli.show_messages)),
        OutputFormat::Json => {
            let json = output::report_json(&report, cli.show_messages);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Summarize every `.txt` file directly inside `folder`, in file-name order.
///
/// Returns the number of files that could not be read or decoded.
pub fn summarize_folder(cli: &Cli, summarizer: &Summarizer<'_>, folder: &Path) -> Result<usize> {
    let paths = discover_transcripts(folder)?;
    let mut failed = 0;
    let mut printed = 0;
    let mut json_reports = Vec::new();

    for path in &paths {
        let report = match build_report(summarizer, path) {
            Ok(report) => report,
            Err(e) => {
                failed += 1;
                tracing::warn!(path = %path.display(), error = %e, "skipping transcript");
                if cli.format == OutputFormat::Json {
                    eprintln!("{}", e.to_json());
                } else if !cli.quiet {
                    eprintln!("error: {}", e);
                }
                continue;
            }
        };

        match cli.format {
            OutputFormat::Human => {
                if printed > 0 {
                    println!();
                }
                print!("{}", output::render_human(&report, cli.show_messages));
                printed += 1;
            }
            OutputFormat::Json => json_reports.push(output::report_json(&report, cli.show_messages)),
        }
    }

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    }

    tracing::debug!(
        folder = %folder.display(),
        files = paths.len(),
        failed,
        "folder summarized"
    );
    Ok(failed)
}

fn build_report(summarizer: &Summarizer<'_>, path: &Path) -> Result<FileReport> {
    let transcript = Transcript::load(path)?;
    let report = summarizer.summarize(&transcript);
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileReport {
        file,
        transcript,
        report,
    })
}
