#![deny(missing_docs)]

//! # apigen Runtime
//!
//! Items referenced by code generated with `apigen`: request parameter lookup,
//! the JSON response envelope, and the error types wrappers understand.
//!
//! Generated files only name items of this crate, so a service needs no other
//! import to compile them.

/// Validation and business error types.
pub mod error;

/// JSON response envelope.
pub mod envelope;

/// Request parameter lookup.
pub mod params;

pub use actix_web::http::{Method, StatusCode};
pub use actix_web::{HttpRequest, HttpResponse};
pub use envelope::{business_error_response, error_response, success_response, Envelope};
pub use error::{ApiError, BoxError, ValidationError};
pub use params::{header_value, FormValues, Params};
