/// Log Archiver -- copy a log into the project-local sequence-numbered archive.
///
/// The next number is `count of existing npm-error-*.log files + 1`. Nothing
/// reserves the number, so two concurrent runs may pick the same name, and a
/// gap left by a deleted archive can make a new copy overwrite an old one.
/// The tool assumes a single local user.
use crate::config::ARCHIVE_LOG_PATTERN;
use crate::error::LogError;
use crate::fs_scan::matching_files;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for archive sequence number `n`, zero-padded to two digits.
pub fn archive_file_name(n: usize) -> String {
    format!("npm-error-{n:02}.log")
}

/// Compute the path the next archived log will be written to.
///
/// `archive_dir` must already exist.
pub fn next_archive_path(archive_dir: &Path) -> Result<PathBuf, LogError> {
    let existing = matching_files(archive_dir, ARCHIVE_LOG_PATTERN).map_err(|source| {
        LogError::Archive {
            path: archive_dir.to_path_buf(),
            source,
        }
    })?;
    Ok(archive_dir.join(archive_file_name(existing.len() + 1)))
}

/// Ensure `archive_dir` exists and copy `source` into it under the next
/// sequence number. Returns the new file's path.
pub fn archive_log(source: &Path, archive_dir: &Path) -> Result<PathBuf, LogError> {
    fs::create_dir_all(archive_dir).map_err(|e| LogError::Archive {
        path: archive_dir.to_path_buf(),
        source: e,
    })?;

    let dest = next_archive_path(archive_dir)?;
    fs::copy(source, &dest).map_err(|e| LogError::Archive {
        path: dest.clone(),
        source: e,
    })?;

    info!("Archived {} to {}", source.display(), dest.display());
    Ok(dest)
}
