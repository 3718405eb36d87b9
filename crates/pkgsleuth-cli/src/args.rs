/// Command-line definitions for both binaries (clap derive).
use clap::{Args, Parser, Subcommand};
use pkgsleuth_core::config::{LogToolPaths, ManifestPaths, DEFAULT_ARCHIVE_DIR};
use std::io;
use std::path::PathBuf;

/// Flags shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct LogFlags {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable diagnostic logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Find the latest npm debug log, archive it, and summarise the failure
#[derive(Parser, Debug)]
#[command(name = "npm-log-report")]
#[command(author, version, about, long_about = None)]
pub struct NpmLogReportCli {
    /// npm log directory (default: ~/.npm/_logs)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Archive directory (default: ./local-ci-logs)
    #[arg(long, value_name = "DIR")]
    pub archive_dir: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogFlags,
}

impl NpmLogReportCli {
    /// Effective paths: defaults for the current user, overridden by flags.
    /// `None` when no override is given and the home directory is unknown.
    pub fn paths(&self) -> Option<LogToolPaths> {
        let mut paths = match &self.log_dir {
            Some(dir) => LogToolPaths {
                log_dir: dir.clone(),
                archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
            },
            None => LogToolPaths::resolve_default()?,
        };
        if let Some(dir) = &self.archive_dir {
            paths.archive_dir = dir.clone();
        }
        Some(paths)
    }
}

/// A tool to manage local project builds
#[derive(Parser, Debug)]
#[command(name = "build-tool")]
#[command(author, version, about, long_about = None)]
pub struct BuildToolCli {
    #[command(subcommand)]
    pub command: Option<BuildCommand>,

    #[command(flatten)]
    pub log: LogFlags,
}

#[derive(Subcommand, Debug)]
pub enum BuildCommand {
    /// Remove devDependencies from package.json
    Clean(CleanArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Keep devDependencies in the output file.
    #[arg(long)]
    pub keep_dev: bool,

    /// Project directory holding package.json (default: the tool's directory)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,
}

impl CleanArgs {
    pub fn paths(&self) -> io::Result<ManifestPaths> {
        match &self.project_dir {
            Some(dir) => Ok(ManifestPaths::for_project(dir)),
            None => ManifestPaths::resolve_default(),
        }
    }
}
