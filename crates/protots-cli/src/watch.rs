//! Watch mode: regenerate when input schema files change.
//!
//! Filesystem events funnel into one mpsc channel; a single synchronous
//! consumer loop coalesces each burst behind a quiet window and then
//! regenerates inline. Because the loop is the only place regeneration
//! happens, at most one run is ever in flight, and events arriving
//! during a run sit in the channel and trigger one follow-up cycle.
//! Dropping the watcher closes the channel; an in-flight cycle finishes
//! before the loop returns.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, warn};

use protots_core::GenerationOptions;

use crate::discover;
use crate::error::CliError;
use crate::run;

/// Quiet window for coalescing change-event bursts.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

/// Run once, then keep regenerating on changes until the watcher dies.
pub fn watch(
    pattern: &str,
    recursive: bool,
    output_dir: &Path,
    opts: &GenerationOptions,
    silent: bool,
) -> Result<()> {
    let inputs = discover::discover(pattern, recursive)?;
    if inputs.is_empty() {
        return Err(CliError::NoInputs {
            pattern: pattern.to_string(),
        }
        .into());
    }

    let summary = run::run_once(&inputs, output_dir, opts)?;
    if let Some(line) = summary_line("Generated", summary, silent) {
        println!("{line}");
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        match result {
            Ok(event) if is_relevant(&event) => {
                let _ = tx.send(());
            }
            Ok(_) => {}
            Err(err) => warn!("watch error: {err}"),
        }
    })
    .context("failed to create filesystem watcher")?;

    let mode = if recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };
    let dirs = watch_roots(&inputs);
    for dir in &dirs {
        watcher
            .watch(dir, mode)
            .with_context(|| format!("failed to watch {}", dir.display()))?;
    }
    if !silent {
        println!("Watching {} directory(ies); Ctrl-C to stop", dirs.len());
    }

    debounce_loop(&rx, DEBOUNCE_WINDOW, || {
        // Rediscover every cycle: files may have appeared or vanished.
        // A failed cycle is logged and the session continues.
        match regenerate(pattern, recursive, output_dir, opts) {
            Ok(summary) => {
                if let Some(line) = summary_line("Regenerated", summary, silent) {
                    println!("{line}");
                }
            }
            Err(err) => warn!("regeneration failed: {err:#}"),
        }
    });

    Ok(())
}

/// One status line per run, suppressed entirely in silent mode.
fn summary_line(verb: &str, summary: run::RunSummary, silent: bool) -> Option<String> {
    if silent {
        return None;
    }
    Some(format!(
        "{verb} {} file(s), {} failed",
        summary.succeeded, summary.failed
    ))
}

fn regenerate(
    pattern: &str,
    recursive: bool,
    output_dir: &Path,
    opts: &GenerationOptions,
) -> Result<run::RunSummary> {
    let inputs = discover::discover(pattern, recursive)?;
    if inputs.is_empty() {
        return Err(CliError::NoInputs {
            pattern: pattern.to_string(),
        }
        .into());
    }
    Ok(run::run_once(&inputs, output_dir, opts)?)
}

/// Deduplicated parent directories of the discovered inputs.
fn watch_roots(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = inputs
        .iter()
        .map(|input| match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        })
        .collect();
    dirs.sort();
    dirs.dedup();
    dirs
}

/// Consume change events, coalescing bursts behind a quiet window.
///
/// Blocks until an event arrives, then drains further events until the
/// window elapses with none, and only then invokes `regenerate` once.
/// When the channel disconnects with an event already pending, that
/// final regeneration still runs to completion before returning.
fn debounce_loop<F: FnMut()>(rx: &mpsc::Receiver<()>, window: Duration, mut regenerate: F) {
    while rx.recv().is_ok() {
        loop {
            match rx.recv_timeout(window) {
                Ok(()) => continue,
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    regenerate();
                    return;
                }
            }
        }
        debug!("change burst settled; regenerating");
        regenerate();
    }
}

/// Only create/modify/remove events touching `.proto` paths count;
/// editor temp files and access events are noise.
fn is_relevant(event: &Event) -> bool {
    let kind_ok = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    kind_ok
        && event
            .paths
            .iter()
            .any(|path| path.extension().is_some_and(|ext| ext == "proto"))
}
