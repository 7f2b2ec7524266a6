//! Code generation backend
//!
//! This module turns a resolved protocol model into generated source files.
//!
//! The pipeline is:
//! 1. Resolved `Protocol` from `inspector_model` → a [`Generator`] → output text
//! 2. The CLI writes (or checks) the text as `Generator::output_filename()`
//!
//! ## Module Organization
//!
//! - `generator.rs` - The `Generator` trait and helpers shared by all generators
//! - `config.rs` - Generator configuration (class prefix, banner settings)
//! - `templates.rs` - Fixed templates and `$`-placeholder substitution
//! - `emitter.rs` - Low-level indented source string builder
//! - `objc/` - Objective-C naming, type mapping, and the event dispatcher generator
//! - `errors.rs` - Emission errors

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod emitter;
pub mod errors;
pub mod generator;
pub mod objc;
pub mod templates;

pub use config::GeneratorConfig;
pub use errors::EmitError;
pub use generator::Generator;
pub use objc::ObjCFrontendDispatcherImplementationGenerator;
