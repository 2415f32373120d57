#![deny(missing_docs)]

//! # apigen Web Demo
//!
//! Serves the generated dispatchers of `api` through actix-web.
//! Each receiver type gets its own server; every path is handed to its
//! `serve_http`, which answers 404 for paths it does not know.

use actix_web::{web, HttpRequest, HttpResponse};

/// Annotated API and its generated handlers.
pub mod api;

pub use api::{MyApi, OtherApi};

/// Default service forwarding every request to `MyApi::serve_http`.
pub async fn serve_my_api(
    api: web::Data<MyApi>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    api.serve_http(&req, &body).await
}

/// Default service forwarding every request to `OtherApi::serve_http`.
pub async fn serve_other_api(
    api: web::Data<OtherApi>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    api.serve_http(&req, &body).await
}
