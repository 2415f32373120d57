#![deny(missing_docs)]

//! # Configuration Layering
//!
//! Resolves the `GeneratorConfig` of a run: built-in defaults, then the YAML
//! file given with `--config`, then individual flags. Every flag can also be
//! set through its `APIGEN_*` environment variable (or a `.env` file).

use crate::error::{CliError, CliResult};
use apigen_core::GeneratorConfig;
use std::fs;
use std::path::PathBuf;

/// Configuration flags shared by the generating commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// YAML file with generator settings.
    #[clap(long, env = "APIGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path of the runtime crate as seen from the generated code.
    #[clap(long, env = "APIGEN_RUNTIME_CRATE")]
    pub runtime_crate: Option<String>,

    /// Header carrying the credential of `"auth": true` handlers.
    #[clap(long, env = "APIGEN_AUTH_HEADER")]
    pub auth_header: Option<String>,

    /// Accept requests whose auth header equals this value.
    #[clap(long, env = "APIGEN_AUTH_CREDENTIAL", conflicts_with = "auth_validator")]
    pub auth_credential: Option<String>,

    /// Path of a `fn(Option<&str>) -> bool` deciding on the auth header.
    #[clap(long, env = "APIGEN_AUTH_VALIDATOR")]
    pub auth_validator: Option<String>,
}

impl ConfigArgs {
    /// Builds the effective configuration.
    pub fn resolve(&self) -> CliResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| {
                    CliError::General(format!("Failed to read config {}: {}", path.display(), e))
                })?;
                // `check: {validator: ..}` is a single-key map, not a `!validator` tag.
                serde_yaml::with::singleton_map_recursive::deserialize(
                    serde_yaml::Deserializer::from_str(&text),
                )?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(runtime) = &self.runtime_crate {
            config = config.with_runtime_crate(runtime.as_str());
        }
        if let Some(header) = &self.auth_header {
            config = config.with_auth_header(header.as_str());
        }
        if let Some(credential) = &self.auth_credential {
            config = config.with_credential(credential.as_str());
        }
        if let Some(validator) = &self.auth_validator {
            config = config.with_validator(validator.as_str());
        }

        config.validate()?;
        tracing::debug!(?config, "resolved generator config");
        Ok(config)
    }
}
