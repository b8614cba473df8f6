// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line entry point.
//!
//! Run without arguments to convert `.env.local` in the working directory into
//! `cloudrun-env.yaml` in the system temporary directory.

use clap::Parser;
use envyaml::domain::SkipSet;
use std::path::PathBuf;
use std::process::ExitCode;

/// Default environment file, relative to the working directory.
const DEFAULT_ENV_FILE: &str = ".env.local";

/// Default output file name, placed in the system temporary directory.
const DEFAULT_OUTPUT_FILE: &str = "cloudrun-env.yaml";

/// Convert a .env file into a Cloud Run compatible YAML env-vars file.
#[derive(Debug, Parser)]
#[command(name = "envyaml", version, about)]
struct Cli {
    /// Environment file to read
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    input: PathBuf,

    /// YAML file to write [default: <temp dir>/cloudrun-env.yaml]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log each skipped and ignored line to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "envyaml=debug" } else { "envyaml=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli
        .output
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_OUTPUT_FILE));

    match envyaml::convert(&cli.input, &output, &SkipSet::default()) {
        Ok(count) => {
            println!("✓ {} vars written to {}", count, output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
