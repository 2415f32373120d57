#![deny(missing_docs)]

//! # Wrapper Builder
//!
//! Assembles the full wrapper method of one annotated handler.

use crate::config::AuthConfig;
use crate::error::AppResult;
use crate::handler_generator::guards::{auth_guard, method_guard};
use crate::parser::models::MethodSpec;
use crate::strategies::{BackendStrategy, ErrorStatus};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;

/// Name of the wrapper generated for `handler`: `wrapper_<handler>`.
pub fn wrapper_ident(handler: &Ident) -> Ident {
    format_ident!("wrapper_{}", handler.unraw())
}

/// Generates the `wrapper_<handler>` method for an annotated handler.
///
/// The result is an associated function item, to be placed inside an
/// `impl <Receiver>` block next to the receiver's dispatcher.
///
/// # Errors
///
/// Returns an error when the configured auth validator is not a Rust path.
pub fn generate_wrapper(
    spec: &MethodSpec,
    auth: &AuthConfig,
    strategy: &impl BackendStrategy,
) -> AppResult<TokenStream> {
    let req = Ident::new("req", Span::call_site());
    let body = Ident::new("body", Span::call_site());
    let params = Ident::new("params", Span::call_site());
    let output = Ident::new("output", Span::call_site());
    let err = Ident::new("err", Span::call_site());

    let wrapper = wrapper_ident(&spec.handler);
    let handler = &spec.handler;
    let params_type = &spec.params_type;
    let request_type = strategy.request_type();
    let response_type = strategy.response_type();

    let method_check = method_guard(spec, &req, strategy);
    let auth_check = auth_guard(spec, auth, &req, strategy)?;
    let form_values = strategy.form_values(&req, &body);
    let invalid = strategy.error_response(ErrorStatus::BadRequest, quote!(&#err.to_string()));
    let call = if spec.is_async {
        quote!(self.#handler(#params).await)
    } else {
        quote!(self.#handler(#params))
    };
    let success = strategy.success_response(&output);
    let failure = strategy.business_error_response(&err);

    let doc = format!(
        " Serves `{}` by calling [`Self::{}`].",
        spec.url,
        handler.unraw()
    );

    tracing::debug!(handler = %spec.qualified_name(), url = %spec.url, "generated wrapper");

    Ok(quote! {
        #[doc = #doc]
        pub async fn #wrapper(&self, #req: #request_type, #body: &[u8]) -> #response_type {
            #method_check
            #auth_check
            let values = #form_values;
            let #params = match #params_type::fill_and_validate(&values) {
                Ok(#params) => #params,
                Err(#err) => return #invalid,
            };
            match #call {
                Ok(#output) => #success,
                Err(#err) => #failure,
            }
        }
    })
}
