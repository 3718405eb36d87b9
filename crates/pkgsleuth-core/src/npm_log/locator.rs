/// Log Locator -- pick the most recently modified npm debug log.
use crate::config::DEBUG_LOG_PATTERN;
use crate::error::LogError;
use crate::fs_scan::{matching_files, MatchedFile};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

/// Return the newest `*-debug-*.log` file in `log_dir`.
///
/// Files sharing the newest modification time are ordered by file name and
/// the lexicographically greatest one wins, so the choice never depends on
/// directory enumeration order.
pub fn find_latest_log(log_dir: &Path) -> Result<PathBuf, LogError> {
    if !log_dir.is_dir() {
        return Err(LogError::MissingDirectory(log_dir.to_path_buf()));
    }

    let candidates = matching_files(log_dir, DEBUG_LOG_PATTERN).map_err(|source| {
        LogError::Read {
            path: log_dir.to_path_buf(),
            source,
        }
    })?;
    debug!("{} debug log candidate(s)", candidates.len());

    let latest =
        newest(candidates).ok_or_else(|| LogError::NoLogsFound(log_dir.to_path_buf()))?;
    info!("Latest npm debug log: {}", latest.display());
    Ok(latest)
}

fn newest(candidates: Vec<MatchedFile>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .max_by(|a, b| {
            let ta = a.modified.unwrap_or(SystemTime::UNIX_EPOCH);
            let tb = b.modified.unwrap_or(SystemTime::UNIX_EPOCH);
            ta.cmp(&tb).then_with(|| a.file_name.cmp(&b.file_name))
        })
        .map(|f| f.path)
}
