//! npm-log-report -- summarise the latest npm debug log after a failed install.
//!
//! Thin binary entry point. All logic lives in the `pkgsleuth-core` and
//! `pkgsleuth-cli` crates.

use clap::Parser;
use pkgsleuth_cli::commands::log_report;
use pkgsleuth_cli::NpmLogReportCli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = NpmLogReportCli::parse();
    pkgsleuth_cli::logging::init(&cli.log);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &NpmLogReportCli) -> anyhow::Result<ExitCode> {
    tracing::info!("npm-log-report starting");

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let outcome = match cli.paths() {
        Some(paths) => log_report::run(&paths, &mut out, &mut err)?,
        None => log_report::report_unresolved_home(&mut out, &mut err)?,
    };
    Ok(outcome.exit_code())
}
