/// Error taxonomy for both tools.
///
/// Every variant is caught by the CLI runner nearest its origin and turned
/// into a printed diagnostic. Field-extraction misses are not errors.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the log pipeline (locate, summarise, archive).
#[derive(Debug, Error)]
pub enum LogError {
    #[error("npm logs directory not found at {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("no npm debug logs found in {}", .0.display())]
    NoLogsFound(PathBuf),

    #[error("failed to read log {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to archive log to {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of the manifest `clean` pipeline.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("The file {} was not found.", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to parse {}. Is it a valid JSON file?", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read the file {}.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write to the file {}.", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// `true` for the "nothing to analyse" outcomes that end a run normally.
    pub fn is_graceful(&self) -> bool {
        matches!(self, Self::MissingDirectory(_) | Self::NoLogsFound(_))
    }
}
