#![deny(missing_docs)]

//! # apigen CLI
//!
//! Command Line Interface for the annotation-driven handler generator.
//!
//! Supported Commands:
//! - `generate`: Annotated Rust source -> validators, wrappers and dispatchers.
//! - `inspect`: Prints the extracted model as JSON.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod config;
mod error;
mod generate;
mod inspect;

#[derive(Parser, Debug)]
#[clap(author, version, about = "apigen handler generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates validators, HTTP wrappers and dispatchers from an annotated file.
    Generate(generate::GenerateArgs),
    /// Prints the model extracted from an annotated file.
    Inspect(inspect::InspectArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Inspect(args) => inspect::execute(args, &mut std::io::stdout().lock()),
    }
}

fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "apigen",
            "generate",
            "src/api.rs",
            "src/api_gen.rs",
            "--check",
            "--auth-header",
            "X-Token",
            "--auth-validator",
            "crate::auth::check",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.check);
        assert_eq!(args.config.auth_header.as_deref(), Some("X-Token"));
        assert_eq!(
            args.config.auth_validator.as_deref(),
            Some("crate::auth::check")
        );
    }

    #[test]
    fn test_credential_conflicts_with_validator() {
        let result = Cli::try_parse_from([
            "apigen",
            "generate",
            "a.rs",
            "b.rs",
            "--auth-credential",
            "x",
            "--auth-validator",
            "crate::check",
        ]);
        assert!(result.is_err());
    }
}
