#![deny(missing_docs)]

//! # Inspect Command
//!
//! Prints the model extracted from an annotated file as JSON, without generating.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Annotated Rust source file.
    pub input: PathBuf,

    /// Print on one line.
    #[clap(long)]
    pub compact: bool,
}

/// Executes the inspection, writing the report to `out`.
pub fn execute(args: &InspectArgs, out: &mut impl Write) -> CliResult<()> {
    let code = fs::read_to_string(&args.input).map_err(|e| {
        CliError::General(format!("Failed to read {}: {}", args.input.display(), e))
    })?;
    let report = apigen_core::inspect(&code)?;

    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_inspect_prints_model() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.rs");
        fs::write(
            &input,
            r#"
            pub struct ProfileParams {
                /// apivalidator: required,paramname=user
                login: String,
            }

            pub struct Loose {
                login: String,
            }

            impl MyApi {
                /// apigen:api {"url": "/user/profile", "method": "GET", "auth": true}
                pub fn profile(&self, params: ProfileParams) -> Result<String, String> {
                    Ok(params.login)
                }
            }
            "#,
        )
        .unwrap();

        let mut out = Vec::new();
        let args = InspectArgs {
            input,
            compact: true,
        };
        execute(&args, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["types"][0]["ident"], "ProfileParams");
        assert_eq!(json["types"][0]["fields"][0]["param_name"], "user");
        assert_eq!(json["types"][0]["fields"][0]["kind"], "string");
        assert_eq!(json["methods"][0]["http_method"], "GET");
        assert_eq!(json["methods"][0]["requires_auth"], true);
        assert_eq!(json["routes"][0]["receiver"], "MyApi");
        assert_eq!(json["diagnostics"][0]["item"], "Loose");
        assert_eq!(json["diagnostics"][0]["reason"]["kind"], "missing_annotations");
    }
}
