#![deny(missing_docs)]

//! # Wrapper Guards
//!
//! Early-return checks placed at the top of a wrapper, before any parameter
//! is read: verb first, then auth.

use crate::config::{parse_path, AuthConfig, CredentialCheck};
use crate::error::AppResult;
use crate::parser::models::MethodSpec;
use crate::strategies::{BackendStrategy, ErrorStatus};
use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Rejects requests using another verb with 406.
pub fn method_guard(
    spec: &MethodSpec,
    req: &Ident,
    strategy: &impl BackendStrategy,
) -> Option<TokenStream> {
    let method = spec.http_method?;
    let matches = strategy.method_matches(req, method);
    let reject = strategy.error_response(ErrorStatus::NotAcceptable, quote!("bad method"));
    Some(quote! {
        if !(#matches) {
            return #reject;
        }
    })
}

/// Rejects requests failing the credential check with 403.
pub fn auth_guard(
    spec: &MethodSpec,
    auth: &AuthConfig,
    req: &Ident,
    strategy: &impl BackendStrategy,
) -> AppResult<Option<TokenStream>> {
    if !spec.requires_auth {
        return Ok(None);
    }
    let header = strategy.header_value(req, &auth.header);
    let accepted = match &auth.check {
        CredentialCheck::Static(credential) => {
            let credential = credential.as_str();
            quote!(#header == Some(#credential))
        }
        CredentialCheck::Validator(path) => {
            let path = parse_path("auth.check.validator", path)?;
            quote!(#path(#header))
        }
    };
    let reject = strategy.error_response(ErrorStatus::Forbidden, quote!("unauthorized"));
    Ok(Some(quote! {
        if !(#accepted) {
            return #reject;
        }
    }))
}
