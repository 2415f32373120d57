//! # Request Parameters
//!
//! Generated validation routines read parameters through the `Params` trait.
//! `FormValues` implements it over one request: urlencoded body values of
//! `POST`, `PUT` and `PATCH` requests first, then query values. The first
//! value seen for a name wins.

use actix_web::http::{header, Method};
use actix_web::HttpRequest;
use std::collections::HashMap;

/// Parameter lookup used by `fill_and_validate`.
pub trait Params {
    /// Returns the value of `name`, or `""` when absent.
    fn value(&self, name: &str) -> &str;
}

/// Decoded body and query values of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    /// Collects the parameters of `req`, whose payload is `body`.
    pub fn from_request(req: &HttpRequest, body: &[u8]) -> Self {
        let mut values = Self::default();
        if carries_form(req) {
            values.extend_from(body);
        }
        values.extend_from(req.query_string().as_bytes());
        values
    }

    /// Decodes a `application/x-www-form-urlencoded` string.
    pub fn parse(input: &str) -> Self {
        let mut values = Self::default();
        values.extend_from(input.as_bytes());
        values
    }

    fn extend_from(&mut self, encoded: &[u8]) {
        for (name, value) in url::form_urlencoded::parse(encoded) {
            self.values
                .entry(name.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }
}

impl Params for FormValues {
    fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

impl Params for HashMap<String, String> {
    fn value(&self, name: &str) -> &str {
        self.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Returns the value of header `name` when present and valid UTF-8.
pub fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

fn carries_form(req: &HttpRequest) -> bool {
    if ![Method::POST, Method::PUT, Method::PATCH].contains(req.method()) {
        return false;
    }
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::ContentType;
    use actix_web::test::TestRequest;

    #[test]
    fn test_query_values() {
        let req = TestRequest::get()
            .uri("/user/profile?login=alice&age=20&login=bob")
            .to_http_request();
        let values = FormValues::from_request(&req, b"");
        assert_eq!(values.value("login"), "alice");
        assert_eq!(values.value("age"), "20");
        assert_eq!(values.value("missing"), "");
    }

    #[test]
    fn test_body_values_take_precedence() {
        let req = TestRequest::post()
            .uri("/user/create?login=from_query&status=admin")
            .insert_header(ContentType::form_url_encoded())
            .to_http_request();
        let values = FormValues::from_request(&req, b"login=from+body&full_name=J%C3%B6rg");
        assert_eq!(values.value("login"), "from body");
        assert_eq!(values.value("full_name"), "Jörg");
        assert_eq!(values.value("status"), "admin");
    }

    #[test]
    fn test_body_ignored_without_form_content_type() {
        let req = TestRequest::post()
            .uri("/user/create")
            .insert_header(ContentType::json())
            .to_http_request();
        let values = FormValues::from_request(&req, b"login=body");
        assert_eq!(values.value("login"), "");
    }

    #[test]
    fn test_body_ignored_for_get() {
        let req = TestRequest::get()
            .uri("/user/profile")
            .insert_header(ContentType::form_url_encoded())
            .to_http_request();
        let values = FormValues::from_request(&req, b"login=body");
        assert_eq!(values.value("login"), "");
    }

    #[test]
    fn test_content_type_parameters_are_ignored() {
        let req = TestRequest::patch()
            .insert_header((
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=utf-8",
            ))
            .to_http_request();
        let values = FormValues::from_request(&req, b"a=1");
        assert_eq!(values.value("a"), "1");
    }

    #[test]
    fn test_header_value() {
        let req = TestRequest::default()
            .insert_header(("X-Auth", "100500"))
            .to_http_request();
        assert_eq!(header_value(&req, "X-Auth"), Some("100500"));
        assert_eq!(header_value(&req, "x-auth"), Some("100500"));
        assert_eq!(header_value(&req, "X-Other"), None);
    }

    #[test]
    fn test_hash_map_params() {
        let mut map = HashMap::new();
        map.insert("login".to_string(), "alice".to_string());
        assert_eq!(map.value("login"), "alice");
        assert_eq!(map.value("age"), "");
    }
}
