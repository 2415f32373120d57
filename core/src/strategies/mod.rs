#![deny(missing_docs)]

//! # Strategies
//!
//! Pluggable backends for the code emitted around annotated handlers.
//!
//! - **traits**: Defines `BackendStrategy` for implementing new frameworks.
//! - **actix**: The default implementation for Actix Web, via the runtime crate.

pub mod actix;
pub mod traits;

// Re-export for easier access downstream
pub use actix::ActixStrategy;
pub use traits::{BackendStrategy, ErrorStatus};
