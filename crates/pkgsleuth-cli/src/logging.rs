/// Structured logging setup shared by both binaries.
///
/// Log events go to stderr so the stdout report stays clean. `RUST_LOG`
/// overrides the level chosen from `-v`.
use crate::args::LogFlags;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Does nothing with `--quiet`.
pub fn init(flags: &LogFlags) {
    if flags.quiet {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(flags.verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
