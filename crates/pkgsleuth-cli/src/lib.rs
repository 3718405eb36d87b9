/// PkgSleuth CLI -- command definitions, console report, and runners.
///
/// Business logic lives in `pkgsleuth-core`. This crate turns core results
/// into console output and exit codes.
pub mod args;
pub mod commands;
pub mod logging;
pub mod report;

pub use args::{BuildCommand, BuildToolCli, CleanArgs, NpmLogReportCli};
pub use commands::Outcome;
