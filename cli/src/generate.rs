#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads one annotated Rust file and writes the generated validators,
//! wrappers and dispatchers next to it.

use std::fs;
use std::path::PathBuf;

use crate::config::ConfigArgs;
use crate::error::{CliError, CliResult};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Annotated Rust source file.
    pub input: PathBuf,

    /// Destination of the generated code.
    pub output: PathBuf,

    /// Fail instead of writing when the output is out of date.
    #[clap(long)]
    pub check: bool,

    #[clap(flatten)]
    pub config: ConfigArgs,
}

/// Executes the generation.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let config = args.config.resolve()?;

    let code = fs::read_to_string(&args.input).map_err(|e| {
        CliError::General(format!("Failed to read {}: {}", args.input.display(), e))
    })?;
    let unit = apigen_core::generate(&code, &config)?;

    if args.check {
        let current = fs::read_to_string(&args.output).unwrap_or_default();
        if current != unit.source {
            return Err(CliError::Stale(args.output.clone()));
        }
        println!("{} is up to date", args.output.display());
        return Ok(());
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.output, &unit.source)?;

    println!(
        "Generated {} ({} skipped declarations)",
        args.output.display(),
        unit.diagnostics.len()
    );

    Ok(())
}
