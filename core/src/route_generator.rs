#![deny(missing_docs)]

//! # Route Generator
//!
//! Groups the generated wrappers by receiver type and emits one `serve_http`
//! dispatcher per receiver, matching the request path exactly.
//!
//! Receivers keep the order in which they are first seen and entries keep
//! method declaration order, so the emitted `match` is stable across runs.

use crate::handler_generator::wrapper_ident;
use crate::parser::models::{path_to_string, MethodSpec, RouteEntry, RouteTable};
use crate::strategies::{BackendStrategy, ErrorStatus};
use indexmap::IndexMap;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

/// Builds one `RouteTable` per distinct receiver type.
///
/// A URL declared twice on the same receiver is routed to the later method,
/// at the position of the first declaration.
pub fn build_route_tables(methods: &[MethodSpec]) -> Vec<RouteTable> {
    let mut receivers: IndexMap<String, (syn::Path, IndexMap<String, Ident>)> = IndexMap::new();

    for method in methods {
        let (_, routes) = receivers
            .entry(method.receiver_name())
            .or_insert_with(|| (method.receiver.clone(), IndexMap::new()));
        let wrapper = wrapper_ident(&method.handler);
        if let Some(previous) = routes.insert(method.url.clone(), wrapper) {
            tracing::warn!(
                receiver = %path_to_string(&method.receiver),
                url = %method.url,
                replaced = %previous,
                "duplicate route, the later handler wins"
            );
        }
    }

    receivers
        .into_values()
        .map(|(receiver, routes)| RouteTable {
            receiver,
            entries: routes
                .into_iter()
                .map(|(url, wrapper)| RouteEntry { url, wrapper })
                .collect(),
        })
        .collect()
}

/// Generates the `serve_http` dispatcher method for one receiver.
///
/// Unknown paths answer 404 `"unknown method"`.
pub fn generate_dispatcher(table: &RouteTable, strategy: &impl BackendStrategy) -> TokenStream {
    let req = Ident::new("req", Span::call_site());
    let body = Ident::new("body", Span::call_site());
    let request_type = strategy.request_type();
    let response_type = strategy.response_type();
    let path = strategy.request_path(&req);
    let not_found = strategy.error_response(ErrorStatus::NotFound, quote!("unknown method"));

    let arms = table.entries.iter().map(|entry| {
        let url = entry.url.as_str();
        let wrapper = &entry.wrapper;
        quote!(#url => self.#wrapper(#req, #body).await,)
    });

    quote! {
        /// Routes a request to the wrapper registered for its path.
        pub async fn serve_http(&self, #req: #request_type, #body: &[u8]) -> #response_type {
            match #path {
                #(#arms)*
                _ => #not_found,
            }
        }
    }
}
