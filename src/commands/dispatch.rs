//! Command dispatch logic for chatsum
use std::time::Instant;

use chatsum_core::config::SummarizerConfig;
use chatsum_core::debug_time;
use chatsum_core::error::Result;
use chatsum_core::summary::Summarizer;

use crate::cli::Cli;
use crate::commands::summarize;

/// Prompt printed when no input was selected
pub const NO_INPUT_MESSAGE: &str =
    "Please provide a file to start summarizing (use --file <PATH> or --folder <PATH>).";

/// How a run finished when no fatal error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// Folder mode processed every file but this many could not be read
    FilesFailed(usize),
}

pub fn run(cli: &Cli) -> Result<RunOutcome> {
    if cli.file.is_none() && cli.folder.is_none() {
        if !cli.quiet {
            println!("{}", NO_INPUT_MESSAGE);
        }
        return Ok(RunOutcome::Completed);
    }

    let start = Instant::now();
    let config = SummarizerConfig::resolve(cli.config.as_deref())?;
    let resources = config.resources();
    let summarizer = Summarizer::new(&resources).with_top_n(config.keywords.top_n);
    debug_time!(start, "load_resources", stop_words = resources.stop_words().len());

    // --file takes precedence over --folder
    if let Some(path) = &cli.file {
        summarize::summarize_file(cli, &summarizer, path)?;
        return Ok(RunOutcome::Completed);
    }

    match &cli.folder {
        Some(folder) => {
            let failed = summarize::summarize_folder(cli, &summarizer, folder)?;
            if failed > 0 {
                Ok(RunOutcome::FilesFailed(failed))
            } else {
                Ok(RunOutcome::Completed)
            }
        }
        None => Ok(RunOutcome::Completed),
    }
}
