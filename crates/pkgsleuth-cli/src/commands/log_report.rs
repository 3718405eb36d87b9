/// `npm-log-report`: Locator -> Summarizer -> Archiver -> Report Printer.
use super::Outcome;
use crate::report::print_report;
use anyhow::Context;
use pkgsleuth_core::config::LogToolPaths;
use pkgsleuth_core::npm_log::{archive_log, find_latest_log, summarize_log};
use pkgsleuth_core::LogError;
use std::io::Write;
use tracing::info;

pub const NO_LOGS_GUIDANCE: &str =
    "No npm debug logs found. Run 'npm install' to generate logs on failure.";

/// Run the log pipeline with explicit `paths`.
///
/// A missing log directory or an empty one prints guidance and returns
/// [`Outcome::NothingToDo`] without touching the archive. Read and archive
/// failures are fatal.
pub fn run(
    paths: &LogToolPaths,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    writeln!(out, "Starting local CI/CD log analysis...")?;

    let latest = match find_latest_log(&paths.log_dir) {
        Ok(path) => path,
        Err(e) if e.is_graceful() => {
            if matches!(e, LogError::MissingDirectory(_)) {
                writeln!(err, "Error: {e}")?;
            }
            info!("{e}");
            writeln!(out, "{NO_LOGS_GUIDANCE}")?;
            return Ok(Outcome::NothingToDo);
        }
        Err(e) => return Err(e).context("failed to locate npm debug logs"),
    };

    let summary = summarize_log(&latest).context("failed to analyse npm debug log")?;
    let archived = archive_log(&latest, &paths.archive_dir)
        .context("failed to archive npm debug log")?;

    print_report(out, &summary, &archived)?;
    Ok(Outcome::Completed)
}

/// Entry point used when the home directory cannot be resolved.
pub fn report_unresolved_home(
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    writeln!(out, "Starting local CI/CD log analysis...")?;
    writeln!(err, "Error: could not determine the home directory")?;
    writeln!(out, "{NO_LOGS_GUIDANCE}")?;
    Ok(Outcome::NothingToDo)
}
