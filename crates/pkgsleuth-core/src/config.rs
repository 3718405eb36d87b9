/// Path configuration for both tools.
///
/// The core functions take every path explicitly. Default resolution (home
/// directory, working directory, the executable's own directory) lives here
/// so it stays a boundary concern.
use std::io;
use std::path::{Path, PathBuf};

/// Glob matched against file names in the npm log directory.
pub const DEBUG_LOG_PATTERN: &str = "*-debug-*.log";

/// Glob matched against file names in the archive directory.
pub const ARCHIVE_LOG_PATTERN: &str = "npm-error-*.log";

/// Archive directory, relative to the current working directory.
pub const DEFAULT_ARCHIVE_DIR: &str = "local-ci-logs";

/// Manifest file name read and written by `clean`.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Output directory for the cleaned manifest, relative to the project dir.
pub const DIST_DIR_NAME: &str = "dist";

/// Locations used by the log tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogToolPaths {
    /// Directory npm writes its debug logs into.
    pub log_dir: PathBuf,
    /// Directory archived copies are written to.
    pub archive_dir: PathBuf,
}

impl LogToolPaths {
    /// npm's default log directory under `home`, archive in `./local-ci-logs`.
    pub fn for_home(home: &Path) -> Self {
        Self {
            log_dir: npm_log_dir(home),
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
        }
    }

    /// Defaults for the current user. `None` when no home directory can be
    /// determined.
    pub fn resolve_default() -> Option<Self> {
        dirs::home_dir().map(|home| Self::for_home(&home))
    }
}

/// `<home>/.npm/_logs`
pub fn npm_log_dir(home: &Path) -> PathBuf {
    home.join(".npm").join("_logs")
}

/// Locations used by the manifest tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    /// Source manifest.
    pub input: PathBuf,
    /// Cleaned manifest destination.
    pub output: PathBuf,
}

impl ManifestPaths {
    /// `<project>/package.json` -> `<project>/dist/package.json`.
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            input: project_dir.join(MANIFEST_FILE_NAME),
            output: project_dir.join(DIST_DIR_NAME).join(MANIFEST_FILE_NAME),
        }
    }

    /// Defaults relative to the directory holding the running executable.
    pub fn resolve_default() -> io::Result<Self> {
        Ok(Self::for_project(&tool_dir()?))
    }

    /// Directory the output file lives in.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output.parent()
    }
}

/// Directory containing the running executable.
pub fn tool_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path {} has no parent", exe.display()),
        )
    })
}
