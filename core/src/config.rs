//! # Generator Configuration
//!
//! Settings baked into the generated code: where the runtime crate lives and
//! how the auth header of `"auth": true` handlers is checked.
//!
//! Deserializable so the CLI can load it from YAML:
//!
//! ```yaml
//! runtime_crate: ::apigen_runtime
//! auth:
//!   header: X-Auth
//!   check:
//!     validator: crate::auth::is_authorized
//! ```
//!
//! `check` is a single-key map, either `validator: <path>` or `static: <value>`.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Default runtime crate path used by generated code.
pub const DEFAULT_RUNTIME_CRATE: &str = "::apigen_runtime";

/// Default auth header name.
pub const DEFAULT_AUTH_HEADER: &str = "X-Auth";

/// Default static credential.
pub const DEFAULT_CREDENTIAL: &str = "100500";

/// How an auth header value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialCheck {
    /// The header must equal this value.
    Static(String),
    /// Path of a `fn(Option<&str>) -> bool` called with the header value.
    Validator(String),
}

/// Authentication settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Header carrying the credential.
    pub header: String,
    /// Credential check applied to the header.
    pub check: CredentialCheck,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_AUTH_HEADER.to_string(),
            check: CredentialCheck::Static(DEFAULT_CREDENTIAL.to_string()),
        }
    }
}

/// Top-level generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path of the runtime crate as seen from the generated code.
    pub runtime_crate: String,
    /// Authentication settings.
    pub auth: AuthConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            auth: AuthConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the runtime crate path.
    pub fn with_runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// Sets the auth header name.
    pub fn with_auth_header(mut self, header: impl Into<String>) -> Self {
        self.auth.header = header.into();
        self
    }

    /// Accepts requests whose auth header equals `credential`.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.auth.check = CredentialCheck::Static(credential.into());
        self
    }

    /// Delegates the auth decision to the function at `path`.
    pub fn with_validator(mut self, path: impl Into<String>) -> Self {
        self.auth.check = CredentialCheck::Validator(path.into());
        self
    }

    /// Parses `runtime_crate` into a path.
    pub fn runtime_path(&self) -> AppResult<syn::Path> {
        parse_path("runtime_crate", &self.runtime_crate)
    }

    /// Rejects settings that would produce uncompilable code.
    pub fn validate(&self) -> AppResult<()> {
        self.runtime_path()?;
        if self.auth.header.trim().is_empty() {
            return Err(AppError::General("auth.header must not be empty".into()));
        }
        if let CredentialCheck::Validator(path) = &self.auth.check {
            parse_path("auth.check.validator", path)?;
        }
        Ok(())
    }
}

/// Parses a config value naming a Rust path.
pub(crate) fn parse_path(key: &str, value: &str) -> AppResult<syn::Path> {
    syn::parse_str(value)
        .map_err(|e| AppError::General(format!("{} `{}` is not a Rust path: {}", key, value, e)))
}
