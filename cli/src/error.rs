#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apigen_core::AppError;
use derive_more::{Display, From};
use std::path::PathBuf;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Extraction or generation failed.
    #[display("{}", _0)]
    Core(AppError),

    /// The configuration file is not valid YAML for `GeneratorConfig`.
    #[display("Config Error: {}", _0)]
    Config(serde_yaml::Error),

    /// The model could not be printed.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// `--check` found an output that differs from a fresh generation.
    #[from(ignore)]
    #[display("{} is out of date, run `apigen generate` again", _0.display())]
    Stale(PathBuf),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
