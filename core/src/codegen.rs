#![deny(missing_docs)]

//! # Code Generation
//!
//! Drives the whole pipeline over one input unit and prints one artifact:
//!
//! 1. Extract the `SourceModel` from the annotated source.
//! 2. Emit a `fill_and_validate` routine per annotated struct.
//! 3. Emit, per receiver type, one `impl` block holding its wrappers and its
//!    `serve_http` dispatcher.
//! 4. Parse the token tree back into a `syn::File` and print it with `prettyplease`.
//!
//! Output depends only on the input text and the configuration.

use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::handler_generator::generate_wrapper;
use crate::parser::extract_model;
use crate::parser::models::{Diagnostic, RouteTable, SourceModel};
use crate::route_generator::{build_route_tables, generate_dispatcher};
use crate::strategies::ActixStrategy;
use crate::validator_generator::generate_validator;
use quote::quote;
use serde::Serialize;

/// First line of every generated artifact.
pub const GENERATED_HEADER: &str = "// Code generated by apigen. DO NOT EDIT.";

/// The result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Formatted Rust source, header included.
    pub source: String,
    /// Declarations that produced no code.
    pub diagnostics: Vec<Diagnostic>,
}

/// The extracted model together with the dispatch tables derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelReport {
    /// Extracted types, methods and diagnostics.
    #[serde(flatten)]
    pub model: SourceModel,
    /// Dispatch tables, one per receiver type.
    pub routes: Vec<RouteTable>,
}

/// Generates the validators, wrappers and dispatchers for one source file.
///
/// # Examples
/// ```
/// use apigen_core::{generate, GeneratorConfig};
///
/// let code = r#"
///     pub struct ProfileParams {
///         /// apivalidator: required
///         login: String,
///     }
///
///     impl MyApi {
///         /// apigen:api {"url": "/user/profile"}
///         pub fn profile(&self, params: ProfileParams) -> Result<String, String> { todo!() }
///     }
/// "#;
/// let unit = generate(code, &GeneratorConfig::default()).unwrap();
/// assert!(unit.source.starts_with("// Code generated by apigen. DO NOT EDIT."));
/// assert!(unit.source.contains("pub async fn serve_http"));
/// ```
pub fn generate(code: &str, config: &GeneratorConfig) -> AppResult<GeneratedUnit> {
    let model = extract_model(code)?;
    let source = render(&model, config)?;
    Ok(GeneratedUnit {
        source,
        diagnostics: model.diagnostics,
    })
}

/// Extracts the model of a source file without generating code.
pub fn inspect(code: &str) -> AppResult<ModelReport> {
    let model = extract_model(code)?;
    let routes = build_route_tables(&model.methods);
    Ok(ModelReport { model, routes })
}

/// Prints the artifact for an already extracted model.
pub fn render(model: &SourceModel, config: &GeneratorConfig) -> AppResult<String> {
    config.validate()?;
    let strategy = ActixStrategy::new(config.runtime_path()?);

    let validators = model
        .types
        .iter()
        .map(|spec| generate_validator(spec, &strategy))
        .collect::<AppResult<Vec<_>>>()?;

    for method in &model.methods {
        if model.find_type(&method.params_type).is_none() {
            tracing::warn!(
                handler = %method.qualified_name(),
                "parameter type has no validator in this file, it must be generated elsewhere"
            );
        }
    }

    let mut receivers = Vec::new();
    for table in build_route_tables(&model.methods) {
        let receiver = &table.receiver;
        let wrappers = model
            .methods
            .iter()
            .filter(|m| m.receiver == table.receiver)
            .map(|m| generate_wrapper(m, &config.auth, &strategy))
            .collect::<AppResult<Vec<_>>>()?;
        let dispatcher = generate_dispatcher(&table, &strategy);
        receivers.push(quote! {
            impl #receiver {
                #(#wrappers)*
                #dispatcher
            }
        });
    }

    let tokens = quote! {
        #(#validators)*
        #(#receivers)*
    };
    let file: syn::File = syn::parse2(tokens)?;

    tracing::debug!(
        validators = validators.len(),
        receivers = receivers.len(),
        "rendered artifact"
    );

    Ok(format!("{}\n\n{}", GENERATED_HEADER, prettyplease::unparse(&file)))
}
