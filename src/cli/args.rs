//! Command-line arguments of the `scs` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extract STPA control structures from SysML/UML models and yEd diagrams
#[derive(Parser, Debug)]
#[command(name = "scs", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a model file and print the extracted control structure
    Parse {
        /// Path to the input model (.xmi, .uml, .xml, .graphml or a zip archive)
        file: PathBuf,
    },
}
