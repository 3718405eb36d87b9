//! build-tool -- produce a deployable package.json without devDependencies.
//!
//! Thin binary entry point. All logic lives in the `pkgsleuth-core` and
//! `pkgsleuth-cli` crates.

use clap::Parser;
use pkgsleuth_cli::commands::build_tool;
use pkgsleuth_cli::BuildToolCli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = BuildToolCli::parse();
    pkgsleuth_cli::logging::init(&cli.log);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &BuildToolCli) -> anyhow::Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let outcome = build_tool::run(cli.command.as_ref(), &mut out, &mut err)?;
    Ok(outcome.exit_code())
}
