#![deny(missing_docs)]

//! # Actix Strategy
//!
//! Implementation of `BackendStrategy` for the Actix Web framework.
//! Every emitted reference goes through the runtime crate, so generated files
//! need no `use` lines of their own.

use crate::parser::models::HttpMethod;
use crate::strategies::traits::{BackendStrategy, ErrorStatus};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

/// Strategy for generating Actix Web compatible code.
#[derive(Debug, Clone)]
pub struct ActixStrategy {
    runtime: syn::Path,
}

impl ActixStrategy {
    /// Creates a strategy emitting references rooted at `runtime`.
    pub fn new(runtime: syn::Path) -> Self {
        Self { runtime }
    }
}

impl BackendStrategy for ActixStrategy {
    fn request_type(&self) -> TokenStream {
        let rt = &self.runtime;
        quote!(&#rt::HttpRequest)
    }

    fn response_type(&self) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::HttpResponse)
    }

    fn method_matches(&self, req: &Ident, method: HttpMethod) -> TokenStream {
        let rt = &self.runtime;
        let verb = Ident::new(&method.to_string(), Span::call_site());
        quote!(#req.method() == #rt::Method::#verb)
    }

    fn header_value(&self, req: &Ident, header: &str) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::header_value(#req, #header))
    }

    fn request_path(&self, req: &Ident) -> TokenStream {
        quote!(#req.path())
    }

    fn form_values(&self, req: &Ident, body: &Ident) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::FormValues::from_request(#req, #body))
    }

    fn params_trait(&self) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::Params)
    }

    fn validation_error(&self) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::ValidationError)
    }

    fn error_response(&self, status: ErrorStatus, message: TokenStream) -> TokenStream {
        let rt = &self.runtime;
        let status = Ident::new(status.const_name(), Span::call_site());
        quote!(#rt::error_response(#rt::StatusCode::#status, #message))
    }

    fn success_response(&self, value: &Ident) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::success_response(&#value))
    }

    fn business_error_response(&self, err: &Ident) -> TokenStream {
        let rt = &self.runtime;
        quote!(#rt::business_error_response(#err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> ActixStrategy {
        ActixStrategy::new(syn::parse_str("::apigen_runtime").unwrap())
    }

    fn ident(name: &str) -> Ident {
        Ident::new(name, Span::call_site())
    }

    #[test]
    fn test_method_matches() {
        let code = strategy()
            .method_matches(&ident("req"), HttpMethod::Post)
            .to_string();
        assert_eq!(code, "req . method () == :: apigen_runtime :: Method :: POST");
    }

    #[test]
    fn test_error_response_uses_status_constant() {
        let code = strategy()
            .error_response(ErrorStatus::NotAcceptable, quote!("bad method"))
            .to_string();
        assert!(code.contains("StatusCode :: NOT_ACCEPTABLE"));
        assert!(code.contains("\"bad method\""));
    }

    #[test]
    fn test_custom_runtime_path() {
        let strategy = ActixStrategy::new(syn::parse_str("crate::rt").unwrap());
        let code = strategy.header_value(&ident("req"), "X-Auth").to_string();
        assert_eq!(code, "crate :: rt :: header_value (req , \"X-Auth\")");
    }
}
