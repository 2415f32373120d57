#![deny(missing_docs)]

//! # apigen Core
//!
//! Core library of the annotation-driven handler generator.
//!
//! Reads Rust source carrying `apivalidator:` field annotations and
//! `apigen:api` method directives, and emits request binding/validation
//! routines, HTTP wrappers and per-receiver dispatchers.

/// Shared error types.
pub mod error;

/// AST Parsing logic.
pub mod parser;

/// Field validation rule parsing.
pub mod rules;

/// Method directive parsing.
pub mod directive;

/// Field type classification and typed literals.
pub mod type_mapping;

/// Generator settings.
pub mod config;

/// Validation routine generation.
pub mod validator_generator;

/// Wrapper generation.
pub mod handler_generator;

/// Dispatcher generation.
pub mod route_generator;

/// Pipeline driver.
pub mod codegen;

/// Strategy Pattern Interfaces.
pub mod strategies;

pub use codegen::{generate, inspect, render, GeneratedUnit, ModelReport, GENERATED_HEADER};
pub use config::{AuthConfig, CredentialCheck, GeneratorConfig};
pub use error::{AppError, AppResult};
pub use parser::{
    extract_model, Diagnostic, FieldKind, FieldSpec, HttpMethod, MethodSpec, RouteEntry,
    RouteTable, SkipReason, SourceModel, TypeSpec,
};
pub use strategies::{ActixStrategy, BackendStrategy};
