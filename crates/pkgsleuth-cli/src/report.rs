/// Report Printer -- render a `LogSummary` as the console failure report.
use pkgsleuth_core::npm_log::LogSummary;
use std::io::{self, Write};
use std::path::Path;

const RULE: &str = "-----------------------------------------------------";
const TITLE: &str = "             NPM Build Failure Summary             ";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write the report to `out`. `archived` is where the log copy was written.
pub fn print_report(
    out: &mut impl Write,
    summary: &LogSummary,
    archived: &Path,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Copied log to: {}", archived.display())?;
    writeln!(
        out,
        "Original Log Time: {}",
        summary.timestamp.format(TIME_FORMAT)
    )?;
    writeln!(out, "Node Version: {}", summary.node_version)?;
    writeln!(out, "NPM Version: {}", summary.npm_version)?;
    writeln!(out, "Error Type: {}", summary.error_type)?;
    writeln!(out, "Error Message: {}", summary.error_message)?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(
        out,
        "Action Required: Please fix the syntax error in your package.json as described above."
    )?;
    writeln!(out, "Once fixed, run 'npm install' again.")
}
