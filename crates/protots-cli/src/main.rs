//! protots - generate TypeScript bindings from protobuf schema files
//!
//! One-shot: discover `.proto` inputs, compile each, write one `.ts`
//! file per input. With `--watch`, keep regenerating on changes.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use protots_core::GenerationOptions;

mod discover;
mod error;
mod loader;
mod run;
mod watch;

#[derive(Parser)]
#[command(name = "protots")]
#[command(author, version, about = "Generate TypeScript bindings from protobuf schema files", long_about = None)]
struct Cli {
    /// Input schema file, directory, or glob pattern
    #[arg(default_value = "**/*.proto")]
    pattern: String,

    /// Output directory for generated .ts files
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Regenerate whenever an input file changes
    #[arg(short, long)]
    watch: bool,

    /// Emit class declarations instead of interfaces
    #[arg(long)]
    classes: bool,

    /// Do not copy doc comments into the generated code
    #[arg(long)]
    no_comments: bool,

    /// Do not emit client-facing service interfaces
    #[arg(long)]
    no_client: bool,

    /// Restrict output to one dotted package path (e.g. acme.catalog)
    #[arg(short, long)]
    package: Option<String>,

    /// Do not search directories recursively
    #[arg(long)]
    no_recursive: bool,

    /// Verbose diagnostics
    #[arg(short, long, conflicts_with = "silent")]
    verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long)]
    silent: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.silent);

    let opts = GenerationOptions {
        emit_comments: !cli.no_comments,
        emit_classes: cli.classes,
        emit_client_interfaces: !cli.no_client,
        package_filter: cli.package.clone(),
    };
    let recursive = !cli.no_recursive;

    if cli.watch {
        watch::watch(&cli.pattern, recursive, &cli.output, &opts, cli.silent)?;
        return Ok(());
    }

    let inputs = discover::discover(&cli.pattern, recursive)?;
    if inputs.is_empty() {
        return Err(error::CliError::NoInputs {
            pattern: cli.pattern,
        }
        .into());
    }

    let summary = run::run_once(&inputs, &cli.output, &opts)?;
    if !cli.silent {
        println!(
            "Generated {} file(s), {} failed",
            summary.succeeded, summary.failed
        );
    }

    Ok(())
}

fn init_tracing(verbose: bool, silent: bool) {
    let default_level = if verbose {
        "debug"
    } else if silent {
        "error"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
