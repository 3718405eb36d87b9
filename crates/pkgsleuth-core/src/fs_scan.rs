/// Single-directory enumeration filtered by a shell-style file name pattern.
///
/// Both the log locator (`*-debug-*.log`) and the archiver (`npm-error-*.log`)
/// only care about regular files directly inside one directory, so the walk
/// is capped at depth 1 and runs serially.
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// A regular file whose name matched the requested pattern.
#[derive(Debug, Clone)]
pub struct MatchedFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Bare file name (lossy UTF-8).
    pub file_name: String,
    /// Last modification time, if the platform reports one.
    pub modified: Option<SystemTime>,
}

/// List the regular files in `dir` whose names match `pattern`.
///
/// Entries that cannot be read are logged and skipped. Results are sorted by
/// file name.
pub fn matching_files(dir: &Path, pattern: &str) -> io::Result<Vec<MatchedFile>> {
    let pattern = glob::Pattern::new(pattern)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let walker = jwalk::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut matched = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !pattern.matches(&file_name) {
            continue;
        }

        let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
        matched.push(MatchedFile {
            path: entry.path(),
            file_name,
            modified,
        });
    }

    debug!(
        "{} file(s) matching {} in {}",
        matched.len(),
        pattern.as_str(),
        dir.display()
    );
    Ok(matched)
}
