//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Coverage gaps (a struct missing annotations, a method without a directive)
//! are *not* errors: they are reported as `Diagnostic`s and the run continues.
//! Every variant here aborts the whole generation run.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The input unit is not valid Rust.
    #[display("Parse Error: {_0}")]
    Parse(syn::Error),

    /// A present `apigen:api` directive whose payload cannot be decoded.
    #[from(ignore)]
    #[display("Malformed apigen:api directive on `{item}`: {message}")]
    Directive {
        /// The annotated declaration (e.g. `MyApi::create`).
        item: String,
        /// What was wrong with the payload.
        message: String,
    },

    /// A validation rule whose value does not fit the field it is attached to.
    #[from(ignore)]
    #[display("Invalid apivalidator rule on `{item}`: {message}")]
    Rule {
        /// The annotated field (e.g. `CreateParams::age`).
        item: String,
        /// What was wrong with the rule.
        message: String,
    },

    /// An annotated method that cannot be wired into a wrapper.
    #[from(ignore)]
    #[display("Unsupported handler signature for `{item}`: {message}")]
    Signature {
        /// The annotated declaration.
        item: String,
        /// Why it cannot be wired.
        message: String,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
