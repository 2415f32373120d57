//! # Error Types
//!
//! `ValidationError` is produced by generated `fill_and_validate` routines and
//! answered with 400. `ApiError` is the structured error a business method
//! returns to choose its own status; any other error is answered with 500.

use actix_web::http::StatusCode;
use derive_more::Display;

/// Any error a business method may return, once boxed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The first rule a request parameter violated.
///
/// Parameter names and bounds are baked into the generated code, hence `'static`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    /// A `required` parameter was empty or absent.
    #[display("{param} must me not empty")]
    Missing {
        /// Request parameter name.
        param: &'static str,
    },

    /// The value could not be parsed into the field's type.
    #[display("{param} must be {expected}")]
    Malformed {
        /// Request parameter name.
        param: &'static str,
        /// Expected type label, e.g. `int`.
        expected: &'static str,
    },

    /// The value is not one of the `enum` alternatives.
    #[display("{param} must be one of [{}]", variants.join(", "))]
    NotOneOf {
        /// Request parameter name.
        param: &'static str,
        /// Allowed values, in declared order.
        variants: &'static [&'static str],
    },

    /// A string shorter than its `min` length.
    #[display("{param} len must be >= {bound}")]
    TooShort {
        /// Request parameter name.
        param: &'static str,
        /// The `min` bound as written.
        bound: &'static str,
    },

    /// A value below its `min` bound.
    #[display("{param} must be >= {bound}")]
    BelowMin {
        /// Request parameter name.
        param: &'static str,
        /// The `min` bound as written.
        bound: &'static str,
    },

    /// A value above its `max` bound.
    #[display("{param} must be <= {bound}")]
    AboveMax {
        /// Request parameter name.
        param: &'static str,
        /// The `max` bound as written.
        bound: &'static str,
    },
}

impl std::error::Error for ValidationError {}

/// A business error carrying the HTTP status to answer with.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{message}")]
pub struct ApiError {
    /// Status of the error response.
    pub http_status: StatusCode,
    /// Message placed in the envelope's `error` field.
    pub message: String,
}

impl ApiError {
    /// Creates an error answered with `http_status`.
    pub fn new(http_status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            http_status,
            message: message.into(),
        }
    }
}

impl std::error::Error for ApiError {}
