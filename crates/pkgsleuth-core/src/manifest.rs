/// Manifest cleaning -- load a `package.json`, drop `devDependencies`, write
/// the deployable copy.
///
/// The document is kept as an opaque JSON object. Only the top-level
/// `devDependencies` key is inspected; nothing is validated against a schema.
use crate::config::ManifestPaths;
use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key removed for production builds.
pub const DEV_DEPENDENCIES_KEY: &str = "devDependencies";

/// A parsed manifest: a JSON object with its keys in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestDocument(Map<String, Value>);

impl ManifestDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Parse a manifest from text. `path` is only used for error reporting.
pub fn parse_manifest(text: &str, path: &Path) -> Result<ManifestDocument, ManifestError> {
    serde_json::from_str(text).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<ManifestDocument, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ManifestError::MissingFile(path.to_path_buf()),
        _ => ManifestError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let doc = parse_manifest(&text, path)?;
    debug!("Loaded {} with {} top-level keys", path.display(), doc.len());
    Ok(doc)
}

/// Remove `devDependencies` unless `keep_dev_dependencies` is set.
///
/// Returns `true` when the key was present and removed. Absent key or
/// `keep_dev_dependencies = true` leaves the document untouched.
pub fn strip_dev_dependencies(doc: &mut ManifestDocument, keep_dev_dependencies: bool) -> bool {
    if keep_dev_dependencies {
        return false;
    }
    doc.0.shift_remove(DEV_DEPENDENCIES_KEY).is_some()
}

/// Serialise `doc` with two-space indentation and write it to `path`.
///
/// The parent directory must already exist.
pub fn write_manifest(doc: &ManifestDocument, path: &Path) -> Result<(), ManifestError> {
    let write_err = |source: io::Error| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };
    let text = serde_json::to_string_pretty(doc).map_err(|e| write_err(io::Error::other(e)))?;
    fs::write(path, text).map_err(write_err)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// What a successful `clean` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// `devDependencies` was present and dropped.
    pub removed_dev_dependencies: bool,
    /// Where the cleaned manifest was written.
    pub output: PathBuf,
}

/// Create the output directory and write `doc` to `paths.output`.
pub fn write_cleaned(doc: &ManifestDocument, paths: &ManifestPaths) -> Result<(), ManifestError> {
    if let Some(dir) = paths.output_dir() {
        fs::create_dir_all(dir).map_err(|source| ManifestError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    write_manifest(doc, &paths.output)
}

/// Load `paths.input`, strip it, create the output directory and write
/// `paths.output`.
///
/// Load and parse failures happen before anything is created, so a failed
/// run leaves no output file behind.
pub fn clean_manifest(
    paths: &ManifestPaths,
    keep_dev_dependencies: bool,
) -> Result<CleanReport, ManifestError> {
    let mut doc = load_manifest(&paths.input)?;
    let removed = strip_dev_dependencies(&mut doc, keep_dev_dependencies);
    if removed {
        info!("Removed {DEV_DEPENDENCIES_KEY} from {}", paths.input.display());
    }
    write_cleaned(&doc, paths)?;

    Ok(CleanReport {
        removed_dev_dependencies: removed,
        output: paths.output.clone(),
    })
}
