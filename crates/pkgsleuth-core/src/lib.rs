/// PkgSleuth Core -- npm log analysis and manifest cleaning.
///
/// This crate contains all business logic with zero CLI dependencies.
/// Every function takes its paths explicitly; default path resolution lives
/// in [`config`].
///
/// # Modules
///
/// - [`npm_log`] -- Locate, summarise, and archive npm debug logs.
/// - [`manifest`] -- Load, strip, and write `package.json` documents.
/// - [`config`] -- Default paths and file name patterns.
/// - [`fs_scan`] -- Pattern-filtered single-directory listing.
/// - [`error`] -- Error types for both pipelines.
pub mod config;
pub mod error;
pub mod fs_scan;
pub mod manifest;
pub mod npm_log;

pub use error::{LogError, ManifestError};
