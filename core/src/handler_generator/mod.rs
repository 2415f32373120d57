#![deny(missing_docs)]

//! # Handler Generator Module
//!
//! Generates the HTTP wrapper of each annotated handler method.
//! A wrapper enforces the verb and auth restrictions of its directive, binds
//! and validates the parameter struct, calls the business method and turns
//! its result into a response envelope.

mod builder;
mod guards;

pub use builder::{generate_wrapper, wrapper_ident};
