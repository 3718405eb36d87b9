/// `build-tool` dispatch: `clean` runs the manifest pipeline, no subcommand
/// prints usage and touches no files.
use super::{clean, Outcome};
use crate::args::{BuildCommand, BuildToolCli};
use clap::CommandFactory;
use std::io::Write;

pub fn run(
    command: Option<&BuildCommand>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let Some(BuildCommand::Clean(args)) = command else {
        write!(out, "{}", BuildToolCli::command().render_help())?;
        return Ok(Outcome::NothingToDo);
    };

    let paths = args.paths()?;
    tracing::info!("Cleaning {}", paths.input.display());
    Ok(clean::run(&paths, args.keep_dev, out, err)?)
}
