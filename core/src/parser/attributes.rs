//! # Attribute Operations
//!
//! internal logic for locating `apivalidator:` and `apigen:api` directives in doc comments.
//!
//! Both annotations live in doc comments so the annotated source keeps compiling
//! as plain Rust. `/// text` desugars to `#[doc = " text"]`, which is what we read.

use regex::Regex;
use std::sync::OnceLock;
use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// Marker of a per-field validation annotation.
pub const VALIDATOR_MARKER: &str = "apivalidator:";

/// Marker of a per-method routing directive.
pub const API_MARKER: &str = "apigen:api";

/// Collects every doc line attached to a declaration, in order.
pub fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    let mut lines = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let Meta::NameValue(nv) = &attr.meta {
            if let Expr::Lit(ExprLit {
                lit: Lit::Str(text),
                ..
            }) = &nv.value
            {
                lines.extend(text.value().lines().map(str::to_owned));
            }
        }
    }

    lines
}

/// Returns the clause list of the first `apivalidator:` line.
///
/// An empty clause list counts as "not annotated".
pub fn find_validator_annotation(attrs: &[Attribute]) -> Option<String> {
    static VALIDATOR_RE: OnceLock<Regex> = OnceLock::new();
    let re = VALIDATOR_RE.get_or_init(|| {
        Regex::new(&format!(r"^\s*{}(.*)$", regex::escape(VALIDATOR_MARKER)))
            .expect("Invalid regex")
    });

    doc_lines(attrs)
        .iter()
        .find_map(|line| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|payload| payload.as_str().trim().to_string())
        .filter(|payload| !payload.is_empty())
}

/// Returns the payload of the first `apigen:api` line.
///
/// A present marker with an empty payload still yields `Some("")`: the caller
/// treats it as a malformed directive, not an absent one.
pub fn find_api_directive(attrs: &[Attribute]) -> Option<String> {
    static API_RE: OnceLock<Regex> = OnceLock::new();
    let re = API_RE.get_or_init(|| {
        Regex::new(&format!(r"^\s*{}\b(.*)$", regex::escape(API_MARKER))).expect("Invalid regex")
    });

    doc_lines(attrs)
        .iter()
        .find_map(|line| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|payload| payload.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_attrs(code: &str) -> Vec<Attribute> {
        let item: syn::ItemStruct = syn::parse_str(code).expect("struct");
        item.fields
            .iter()
            .next()
            .map(|f| f.attrs.clone())
            .expect("field missing")
    }

    fn fn_attrs(code: &str) -> Vec<Attribute> {
        let item: syn::ItemFn = syn::parse_str(code).expect("fn");
        item.attrs
    }

    #[test]
    fn test_doc_lines_keep_order() {
        let attrs = fn_attrs(
            r#"
            /// first
            /// second
            fn f() {}
            "#,
        );
        assert_eq!(doc_lines(&attrs), vec![" first", " second"]);
    }

    #[test]
    fn test_find_validator_annotation() {
        let attrs = field_attrs(
            r#"
            struct P {
                /// The login.
                /// apivalidator: required,min=10
                login: String,
            }
            "#,
        );
        assert_eq!(
            find_validator_annotation(&attrs).as_deref(),
            Some("required,min=10")
        );
    }

    #[test]
    fn test_empty_validator_annotation_is_absent() {
        let attrs = field_attrs(
            r#"
            struct P {
                /// apivalidator:
                login: String,
            }
            "#,
        );
        assert!(find_validator_annotation(&attrs).is_none());
    }

    #[test]
    fn test_ignores_non_doc_attributes() {
        let attrs = field_attrs(
            r#"
            struct P {
                #[serde(rename = "apivalidator: required")]
                login: String,
            }
            "#,
        );
        assert!(find_validator_annotation(&attrs).is_none());
    }

    #[test]
    fn test_find_api_directive() {
        let attrs = fn_attrs(
            r#"
            /// Creates a user.
            /// apigen:api {"url": "/user/create", "auth": true}
            fn create() {}
            "#,
        );
        assert_eq!(
            find_api_directive(&attrs).as_deref(),
            Some(r#"{"url": "/user/create", "auth": true}"#)
        );
    }

    #[test]
    fn test_bare_api_marker_is_present_but_empty() {
        let attrs = fn_attrs(
            r#"
            /// apigen:api
            fn create() {}
            "#,
        );
        assert_eq!(find_api_directive(&attrs).as_deref(), Some(""));
    }

    #[test]
    fn test_marker_must_lead_the_line() {
        let attrs = fn_attrs(
            r#"
            /// See apigen:api for details.
            fn create() {}
            "#,
        );
        assert!(find_api_directive(&attrs).is_none());
    }
}
