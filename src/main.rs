//! `scs` entry point.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scs::cli::{self, Args};

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| {
            eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
            EnvFilter::new("warn")
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?args, "Parsed arguments");

    if let Err(err) = cli::run(&args) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
