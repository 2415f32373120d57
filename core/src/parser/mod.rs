#![deny(missing_docs)]

//! # Parser Module
//!
//! Handles parsing of Rust source code using `syn`.
//! Extracts annotated structs and handler methods into the `SourceModel` IR.

pub mod attributes;
pub mod extractors;
pub mod models;

// Re-export major types and functions to maintain API compatibility
pub use extractors::extract_model;
pub use models::{
    Diagnostic, FieldKind, FieldSpec, HttpMethod, MethodSpec, RouteEntry, RouteTable,
    SkipReason, SourceModel, TypeSpec,
};
