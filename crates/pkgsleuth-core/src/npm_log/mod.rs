/// npm debug log pipeline: locate the newest log, summarise it, archive a copy.
pub mod archive;
pub mod locator;
pub mod summary;

pub use archive::{archive_log, next_archive_path};
pub use locator::find_latest_log;
pub use summary::{summarize_log, summarize_text, LogSummary, UNKNOWN_ERROR};
