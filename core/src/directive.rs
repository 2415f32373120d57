//! # Method Directive
//!
//! Decodes the JSON payload of an `apigen:api` doc line:
//!
//! ```text
//! /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//! ```
//!
//! A directive that is present but cannot be decoded aborts the run: the method
//! is clearly meant to be served, and guessing its route or auth would be unsafe.

use crate::error::{AppError, AppResult};
use crate::parser::models::HttpMethod;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Routing and auth metadata of one handler method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDirective {
    /// Exact route path.
    pub url: String,
    /// `"GET"`, `"POST"`, or `""`/absent for any verb.
    #[serde(default, deserialize_with = "deserialize_method")]
    pub method: Option<HttpMethod>,
    /// Whether the auth header is enforced.
    #[serde(default)]
    pub auth: bool,
}

/// Decodes a directive payload.
///
/// # Arguments
///
/// * `item` - The annotated declaration, used in the error message.
/// * `payload` - Text following the `apigen:api` marker.
///
/// # Examples
/// ```
/// use apigen_core::directive::parse_api_directive;
/// use apigen_core::HttpMethod;
///
/// let d = parse_api_directive("MyApi::create", r#"{"url": "/user/create", "method": "POST"}"#).unwrap();
/// assert_eq!(d.url, "/user/create");
/// assert_eq!(d.method, Some(HttpMethod::Post));
/// assert!(!d.auth);
/// ```
pub fn parse_api_directive(item: &str, payload: &str) -> AppResult<ApiDirective> {
    serde_json::from_str(payload).map_err(|e| AppError::Directive {
        item: item.to_string(),
        message: e.to_string(),
    })
}

fn deserialize_method<'de, D>(deserializer: D) -> Result<Option<HttpMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some("GET") => Ok(Some(HttpMethod::Get)),
        Some("POST") => Ok(Some(HttpMethod::Post)),
        Some(other) => Err(D::Error::custom(format!(
            "unsupported method `{}`, expected \"GET\", \"POST\" or \"\"",
            other
        ))),
    }
}
