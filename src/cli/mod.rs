//! Command-line front end.

mod args;
mod config;

pub use args::{Args, Command};
pub use config::load_config;

use crate::parser::ControlStructureParsers;

/// Run the command described by `args`, printing results to stdout.
///
/// # Errors
///
/// Returns the configuration or parse error, with its cause chain.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let parsers = ControlStructureParsers::new(config);
    match &args.command {
        Command::Parse { file } => {
            tracing::info!(input = %file.display(), "Parsing control structure");
            let parsed = parsers.parse_with_diagnostics(file)?;
            if !parsed.diagnostics.is_empty() {
                tracing::info!(
                    count = parsed.diagnostics.len(),
                    "Parse finished with diagnostics"
                );
            }
            println!("{}", parsed.model);
        }
    }
    Ok(())
}
