//! Input schema file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{CliError, CliResult};

/// Discover input schema files for one run.
///
/// A pattern naming an existing file is used directly; an existing
/// directory is searched for `.proto` files (recursively unless
/// `recursive` is false); anything else is expanded as a glob pattern.
/// The result is sorted lexicographically and deduplicated so repeated
/// runs over an unchanged file set produce byte-identical output.
pub fn discover(pattern: &str, recursive: bool) -> CliResult<Vec<PathBuf>> {
    let path = Path::new(pattern);

    let mut found = if path.is_file() {
        vec![path.to_path_buf()]
    } else if path.is_dir() {
        scan_dir(path, recursive)?
    } else {
        expand_glob(pattern)?
    };

    found.sort();
    found.dedup();
    Ok(found)
}

fn scan_dir(dir: &Path, recursive: bool) -> CliResult<Vec<PathBuf>> {
    if recursive {
        Ok(WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_proto(path))
            .collect())
    } else {
        let entries = std::fs::read_dir(dir).map_err(|source| CliError::InputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_proto(path))
            .collect())
    }
}

fn expand_glob(pattern: &str) -> CliResult<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| CliError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(paths
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect())
}

fn is_proto(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "proto")
}
