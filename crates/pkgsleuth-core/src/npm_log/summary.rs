/// Log Summarizer -- extract a fixed set of fields from an npm debug log.
///
/// The log is not parsed structurally. Each line is tested against a small
/// ordered table of marker substrings and every rule whose marker occurs in
/// the line is applied, so one line can feed more than one field.
///
/// | marker                     | field           | policy                       |
/// |----------------------------|-----------------|------------------------------|
/// | `npm ERR! code `           | `error_type`    | last wins, text after marker |
/// | `npm ERR! Failed to parse` | `error_message` | last wins, whole line        |
/// | `info using npm@`          | `npm_version`   | last wins, text after marker |
/// | `info using node@`         | `node_version`  | last wins, text after marker |
/// | `npm ERR! JSON.parse `     | `error_message` | append `\n` + text after     |
use crate::error::LogError;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default `error_type` when no `npm ERR! code` line is present.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Fields extracted from one npm debug log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSummary {
    /// Modification time of the log file (not taken from log content).
    pub timestamp: DateTime<Local>,
    /// Path of the analysed log.
    pub file_path: PathBuf,
    pub error_type: String,
    /// May span several lines when `JSON.parse` details were appended.
    pub error_message: String,
    pub npm_version: String,
    pub node_version: String,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    ErrorType,
    ErrorMessage,
    NpmVersion,
    NodeVersion,
}

#[derive(Debug, Clone, Copy)]
enum Combine {
    /// Overwrite with the trimmed text following the marker.
    ReplaceWithTail,
    /// Overwrite with the whole trimmed line.
    ReplaceWithLine,
    /// Append a newline and the text following the marker.
    AppendTail,
}

struct MarkerRule {
    marker: &'static str,
    field: Field,
    combine: Combine,
}

const RULES: [MarkerRule; 5] = [
    MarkerRule {
        marker: "npm ERR! code ",
        field: Field::ErrorType,
        combine: Combine::ReplaceWithTail,
    },
    MarkerRule {
        marker: "npm ERR! Failed to parse",
        field: Field::ErrorMessage,
        combine: Combine::ReplaceWithLine,
    },
    MarkerRule {
        marker: "info using npm@",
        field: Field::NpmVersion,
        combine: Combine::ReplaceWithTail,
    },
    MarkerRule {
        marker: "info using node@",
        field: Field::NodeVersion,
        combine: Combine::ReplaceWithTail,
    },
    MarkerRule {
        marker: "npm ERR! JSON.parse ",
        field: Field::ErrorMessage,
        combine: Combine::AppendTail,
    },
];

/// Read `path` and summarise it.
///
/// Invalid UTF-8 is replaced rather than rejected, so only a failure to open
/// or stat the file is an error.
pub fn summarize_log(path: &Path) -> Result<LogSummary, LogError> {
    let read_err = |source: std::io::Error| LogError::Read {
        path: path.to_path_buf(),
        source,
    };
    let bytes = std::fs::read(path).map_err(read_err)?;
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(read_err)?;

    let text = String::from_utf8_lossy(&bytes);
    debug!("Summarising {} ({} bytes)", path.display(), bytes.len());
    Ok(summarize_text(&text, path.to_path_buf(), modified.into()))
}

/// Summarise log `text` that was read from `file_path`.
pub fn summarize_text(text: &str, file_path: PathBuf, timestamp: DateTime<Local>) -> LogSummary {
    let mut summary = LogSummary {
        timestamp,
        file_path,
        error_type: UNKNOWN_ERROR.to_string(),
        error_message: String::new(),
        npm_version: String::new(),
        node_version: String::new(),
    };

    for line in text.lines() {
        for rule in &RULES {
            if line.contains(rule.marker) {
                apply(&mut summary, rule, line);
            }
        }
    }

    summary
}

fn apply(summary: &mut LogSummary, rule: &MarkerRule, line: &str) {
    let slot = match rule.field {
        Field::ErrorType => &mut summary.error_type,
        Field::ErrorMessage => &mut summary.error_message,
        Field::NpmVersion => &mut summary.npm_version,
        Field::NodeVersion => &mut summary.node_version,
    };

    match rule.combine {
        Combine::ReplaceWithTail => *slot = tail(line, rule.marker).trim().to_string(),
        Combine::ReplaceWithLine => *slot = line.trim().to_string(),
        Combine::AppendTail => {
            slot.push('\n');
            slot.push_str(tail(line.trim(), rule.marker));
        }
    }
}

/// Text after the first `marker`, cut at any later repeat of it.
fn tail<'a>(line: &'a str, marker: &str) -> &'a str {
    line.split(marker).nth(1).unwrap_or("")
}
