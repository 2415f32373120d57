//! # Data Models
//!
//! definition of Intermediate Representation (IR) structures for annotated Rust code.

use derive_more::Display;
use quote::ToTokens;
use serde::{Serialize, Serializer};

/// Classification of a field's declared type, deciding how its raw value is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// `String`: bound as-is, `min` checks the length.
    String,
    /// Integer primitives: parsed as base-10.
    Int,
    /// Anything else: parsed through `FromStr`.
    Other,
}

/// HTTP verbs an `apigen:api` directive can restrict a handler to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum HttpMethod {
    /// `GET`
    #[display("GET")]
    #[serde(rename = "GET")]
    Get,
    /// `POST`
    #[display("POST")]
    #[serde(rename = "POST")]
    Post,
}

/// One field of an annotated struct together with its validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// The field identifier as declared (may be a raw identifier).
    #[serde(serialize_with = "tokens")]
    pub ident: syn::Ident,
    /// The declared type.
    #[serde(serialize_with = "tokens")]
    pub ty: syn::Type,
    /// The field name without any `r#` prefix.
    pub field_name: String,
    /// Kind derived from `ty`.
    pub kind: FieldKind,
    /// The request parameter the field is bound from.
    pub param_name: String,
    /// Empty values are rejected.
    pub required: bool,
    /// Value used when the parameter is empty.
    pub default_value: Option<String>,
    /// Allowed values, in declared order.
    pub enum_values: Option<Vec<String>>,
    /// Raw lower bound text.
    pub min_bound: Option<String>,
    /// Raw upper bound text.
    pub max_bound: Option<String>,
}

/// A struct whose every field carries an `apivalidator` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    /// The struct name.
    #[serde(serialize_with = "tokens")]
    pub ident: syn::Ident,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl TypeSpec {
    /// Returns the struct name.
    pub fn name(&self) -> String {
        self.ident.to_string()
    }
}

/// A method carrying an `apigen:api` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSpec {
    /// The `impl` block's self type.
    #[serde(serialize_with = "path_tokens")]
    pub receiver: syn::Path,
    /// The business method name.
    #[serde(serialize_with = "tokens")]
    pub handler: syn::Ident,
    /// Route path served by the wrapper.
    pub url: String,
    /// Verb restriction, `None` accepts any verb.
    pub http_method: Option<HttpMethod>,
    /// Whether the auth header is checked.
    pub requires_auth: bool,
    /// Type of the method's single parameter.
    #[serde(serialize_with = "path_tokens")]
    pub params_type: syn::Path,
    /// Whether the business method must be awaited.
    pub is_async: bool,
}

impl MethodSpec {
    /// Returns the receiver name as written, e.g. `MyApi` or `crate::api::MyApi`.
    pub fn receiver_name(&self) -> String {
        path_to_string(&self.receiver)
    }

    /// Returns the `Receiver::handler` label used in diagnostics and errors.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.receiver_name(), self.handler)
    }
}

/// One `path -> wrapper` entry of a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Exact request path.
    pub url: String,
    /// Name of the generated wrapper method.
    #[serde(serialize_with = "tokens")]
    pub wrapper: syn::Ident,
}

/// The dispatch table of one receiver type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    /// The receiver type the dispatcher is generated on.
    #[serde(serialize_with = "path_tokens")]
    pub receiver: syn::Path,
    /// Entries in method declaration order.
    pub entries: Vec<RouteEntry>,
}

/// Why a declaration produced no generated code.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Some, but not all, fields are annotated (or none are).
    #[display("not enough 'apivalidator' annotations ({annotated} of {total} fields)")]
    MissingAnnotations {
        /// Annotated field count.
        annotated: usize,
        /// Total field count.
        total: usize,
    },
    /// Tuple and unit structs cannot be bound by name.
    #[display("no named fields")]
    NoNamedFields,
    /// Generic structs are not supported.
    #[display("generic types are not supported")]
    Generic,
    /// The function carries no `apigen:api` directive.
    #[display("no 'apigen:api' directive")]
    MissingDirective,
    /// Enums, unions and type aliases are never bound.
    #[display("not a struct")]
    NotAStruct,
}

/// A non-fatal note about a skipped declaration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("SKIP {item}: {reason}")]
pub struct Diagnostic {
    /// The skipped declaration.
    pub item: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Everything extracted from one input unit in a single pass.
///
/// This is the accumulator threaded through the pipeline; it is built fresh
/// per run and owns no global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceModel {
    /// Fully annotated structs, in declaration order.
    pub types: Vec<TypeSpec>,
    /// Annotated methods, in declaration order.
    pub methods: Vec<MethodSpec>,
    /// Skipped declarations.
    pub diagnostics: Vec<Diagnostic>,
}

impl SourceModel {
    /// Looks up an annotated type by its last path segment.
    pub fn find_type(&self, path: &syn::Path) -> Option<&TypeSpec> {
        let name = path.segments.last()?;
        self.types.iter().find(|t| t.ident == name.ident)
    }
}

/// Renders a path the way it was written, without token spacing.
pub fn path_to_string(path: &syn::Path) -> String {
    let segments: Vec<String> = path
        .segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{}", joined)
    } else {
        joined
    }
}

fn tokens<T: ToTokens, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_token_stream().to_string())
}

fn path_tokens<S: Serializer>(path: &syn::Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path_to_string(path))
}
