//! # Response Envelope
//!
//! Every generated response is a JSON object `{"error": "...", "response": ...}`.
//! `error` is empty on success; `response` is omitted when there is none.

use crate::error::{ApiError, BoxError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// The JSON body of every generated response.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    /// Error message, empty on success.
    pub error: &'a str,
    /// Business output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<&'a T>,
}

/// Answers `status` with `{"error": message}`.
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    let envelope: Envelope<'_, ()> = Envelope {
        error: message,
        response: None,
    };
    write(status, &envelope)
}

/// Answers 200 with `{"error": "", "response": value}`.
pub fn success_response<T: Serialize>(value: &T) -> HttpResponse {
    let envelope = Envelope {
        error: "",
        response: Some(value),
    };
    write(StatusCode::OK, &envelope)
}

/// Answers a failed business call.
///
/// An `ApiError` keeps its status and message; anything else is a 500 with
/// the error's message.
pub fn business_error_response(err: impl Into<BoxError>) -> HttpResponse {
    let err: BoxError = err.into();
    match err.downcast_ref::<ApiError>() {
        Some(api) => error_response(api.http_status, &api.message),
        None => {
            tracing::warn!(error = %err, "unclassified business error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn write<T: Serialize>(status: StatusCode, envelope: &Envelope<'_, T>) -> HttpResponse {
    match serde_json::to_vec(envelope) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(body),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response envelope");
            HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                .content_type(ContentType::json())
                .body(r#"{"error":"Internal server error"}"#)
        }
    }
}
