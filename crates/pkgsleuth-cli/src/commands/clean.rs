/// `build-tool clean`: Manifest Loader -> Dependency Stripper -> Manifest Writer.
use super::Outcome;
use pkgsleuth_core::config::ManifestPaths;
use pkgsleuth_core::manifest::{load_manifest, strip_dev_dependencies, write_cleaned};
use pkgsleuth_core::ManifestError;
use std::io::{self, Write};
use tracing::warn;

/// Clean `paths.input` into `paths.output`.
///
/// The removal notice is printed as soon as `devDependencies` is dropped,
/// before the write is attempted. Missing input, parse failure and write
/// failure each print their own message and return [`Outcome::Failed`].
pub fn run(
    paths: &ManifestPaths,
    keep_dev_dependencies: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    match clean(paths, keep_dev_dependencies, out)? {
        Ok(()) => {
            writeln!(
                out,
                "Successfully generated a new package.json at {}",
                paths.output.display()
            )?;
            Ok(Outcome::Completed)
        }
        Err(e) => {
            warn!("clean failed: {e:?}");
            writeln!(err, "Error: {e}")?;
            Ok(Outcome::Failed)
        }
    }
}

fn clean(
    paths: &ManifestPaths,
    keep_dev_dependencies: bool,
    out: &mut impl Write,
) -> io::Result<Result<(), ManifestError>> {
    let mut doc = match load_manifest(&paths.input) {
        Ok(doc) => doc,
        Err(e) => return Ok(Err(e)),
    };
    if strip_dev_dependencies(&mut doc, keep_dev_dependencies) {
        writeln!(out, "Removing devDependencies for production build...")?;
    }
    Ok(write_cleaned(&doc, paths))
}
