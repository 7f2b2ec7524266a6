//! Provide the canonical vocabulary shared by the protocol model and the code generators.
//!
//! This crate is intentionally small and dependency-free. It holds `const` registries that both:
//! - the model crate uses to recognize primitive type spellings and frameworks while parsing, and
//! - the generators use to pick per-primitive spellings (setter methods, Objective-C types).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no model types.
//! - Registries are lookup tables (spellings + metadata). Resolution of `$ref`s and declarations lives in
//!   `inspector_model`.

pub mod frameworks;
pub mod primitives;

/// Default Objective-C class prefix for generated protocol bindings.
pub const DEFAULT_OBJC_PREFIX: &str = "RWIProtocol";
