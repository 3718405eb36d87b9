/// Command runners. Each catches core errors at the boundary and turns them
/// into printed diagnostics plus an [`Outcome`].
pub mod build_tool;
pub mod clean;
pub mod log_report;

use std::process::ExitCode;

/// How a command run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The pipeline ran to completion.
    Completed,
    /// Nothing to process; guidance was printed.
    NothingToDo,
    /// A reported failure; nothing further was done.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Completed | Self::NothingToDo => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}
