//! Define error types for protocol → source emission.
//!
//! These errors represent *backend emission* failures (as opposed to schema parsing or resolution, which
//! `inspector_model` reports).

use miette::Diagnostic;
use thiserror::Error;

/// Error during emission.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("template refers to `${key}` but no value was supplied")]
    #[diagnostic(code(inspector::emit::missing_template_key))]
    MissingTemplateKey { key: String },

    #[error("invalid template placeholder at byte {offset}")]
    #[diagnostic(
        code(inspector::emit::invalid_placeholder),
        help("write `$$` for a literal dollar sign")
    )]
    InvalidPlaceholder { offset: usize },

    #[error("{domain}: {message}")]
    #[diagnostic(code(inspector::emit::unsupported))]
    Unsupported { domain: String, message: String },
}
