//! One generation run over a discovered input set.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use protots_core::GenerationOptions;

use crate::error::{CliError, CliResult};
use crate::loader;

/// Outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Generate one output file per input schema file.
///
/// A parse failure on one file is logged and counted but never aborts
/// the rest of the run; the run only fails as a whole when the output
/// directory is unusable, a write fails, or every input failed to
/// parse. Inputs are processed in the (already sorted) order given, so
/// an unchanged input set produces byte-identical output.
pub fn run_once(
    inputs: &[PathBuf],
    output_dir: &Path,
    opts: &GenerationOptions,
) -> CliResult<RunSummary> {
    fs::create_dir_all(output_dir).map_err(|source| CliError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = RunSummary::default();

    for input in inputs {
        let root = match loader::load_schema(input) {
            Ok(root) => root,
            Err(err) => {
                warn!(input = %input.display(), "parse failed: {err:#}");
                summary.failed += 1;
                continue;
            }
        };

        let body = protots_core::generate(&root, opts);
        if body.is_empty() {
            if let Some(filter) = &opts.package_filter {
                info!(
                    input = %input.display(),
                    filter = %filter,
                    "package filter matched nothing; writing empty document"
                );
            }
        }

        let out_path = output_path(output_dir, input);
        write_atomic(&out_path, &render_document(input, &body))?;
        debug!(input = %input.display(), output = %out_path.display(), "generated");
        summary.succeeded += 1;
    }

    if summary.succeeded == 0 && summary.failed > 0 {
        return Err(CliError::AllFilesFailed {
            failed: summary.failed,
        });
    }

    Ok(summary)
}

/// Output file name: input stem + `.ts` under the output directory.
fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());
    output_dir.join(format!("{stem}.ts"))
}

/// Fixed banner plus the generated declarations. No timestamps, so
/// reruns over unchanged input stay byte-identical.
fn render_document(input: &Path, body: &str) -> String {
    let source = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut document = String::new();
    document.push_str("// Generated by protots. DO NOT EDIT.\n");
    document.push_str(&format!("// Source: {source}\n"));
    if !body.is_empty() {
        document.push('\n');
        document.push_str(body);
    }
    document
}

/// Write via a temp file in the same directory, then rename into place,
/// so a failed run never leaves a half-written output file.
fn write_atomic(path: &Path, contents: &str) -> CliResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| CliError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "run/run_tests.rs"]
mod run_tests;
