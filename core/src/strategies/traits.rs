#![deny(missing_docs)]

//! # Backend Strategy Trait
//!
//! Defines the interface the generators use to reach runtime items (request,
//! response, parameter parsing) without hard-coding a web framework.

use crate::parser::models::HttpMethod;
use proc_macro2::{Ident, TokenStream};

/// Status codes the generated wrappers and dispatchers answer with on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// 400, validation failed.
    BadRequest,
    /// 403, auth header rejected.
    Forbidden,
    /// 404, no route for the path.
    NotFound,
    /// 406, verb not accepted.
    NotAcceptable,
    /// 500, unclassified business error.
    InternalServerError,
}

impl ErrorStatus {
    /// The associated constant name on `http::StatusCode`.
    pub fn const_name(self) -> &'static str {
        match self {
            ErrorStatus::BadRequest => "BAD_REQUEST",
            ErrorStatus::Forbidden => "FORBIDDEN",
            ErrorStatus::NotFound => "NOT_FOUND",
            ErrorStatus::NotAcceptable => "NOT_ACCEPTABLE",
            ErrorStatus::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// A strategy trait for decoupling framework-specific code generation.
///
/// Every method returns tokens spliced into the emitted wrappers; `req` and
/// `body` are the identifiers of the wrapper's request and body parameters.
pub trait BackendStrategy {
    /// Type of the wrapper's request parameter (e.g. `&HttpRequest`).
    fn request_type(&self) -> TokenStream;

    /// Type every wrapper and dispatcher returns.
    fn response_type(&self) -> TokenStream;

    /// Boolean expression: the request uses `method`.
    fn method_matches(&self, req: &Ident, method: HttpMethod) -> TokenStream;

    /// `Option<&str>` expression: the value of `header`.
    fn header_value(&self, req: &Ident, header: &str) -> TokenStream;

    /// `&str` expression: the request path.
    fn request_path(&self, req: &Ident) -> TokenStream;

    /// Expression building the request's parameter lookup.
    fn form_values(&self, req: &Ident, body: &Ident) -> TokenStream;

    /// Path of the parameter lookup trait taken by validation routines.
    fn params_trait(&self) -> TokenStream;

    /// Path of the validation error type.
    fn validation_error(&self) -> TokenStream;

    /// Response expression for an error envelope with a fixed status.
    ///
    /// * `message` - A `&str` expression.
    fn error_response(&self, status: ErrorStatus, message: TokenStream) -> TokenStream;

    /// Response expression for a success envelope around `value`.
    fn success_response(&self, value: &Ident) -> TokenStream;

    /// Response expression for a failed business call.
    ///
    /// `err` holds the business method's error value; errors carrying their own
    /// status must keep it, anything else is a 500.
    fn business_error_response(&self, err: &Ident) -> TokenStream;
}
