//! Protocol model for the inspector binding generator: schema parsing, reference resolution, diagnostics.
//!
//! This crate turns protocol specification files (JSON) into a validated [`model::Protocol`]. Generators only read
//! the resolved model; they never see raw schema values.
//!
//! ## Notes
//! - Parsing happens per file ([`parser::ProtocolBuilder::add_specification`]); resolution of `$ref`s happens once
//!   all files are known ([`parser::ProtocolBuilder::build`]), so supplemental files can provide types to the
//!   primary file and vice versa.
//! - Vocabulary (primitive spellings, frameworks) comes from `inspector_core` registries.
//!
//! ## Examples
//! ```rust
//! use inspector_core::frameworks::Framework;
//! use inspector_model::parser;
//!
//! let source = r#"{"domain": "Console", "events": [{"name": "messagesCleared"}]}"#;
//! let protocol = parser::parse_protocol(source, "Console.json", Framework::Test).unwrap();
//! assert_eq!(protocol.domains()[0].events[0].name, "messagesCleared");
//! ```

pub mod errors;
pub mod model;
pub mod parser;
mod schema;

pub use errors::ModelError;
pub use model::{Command, Domain, Event, Parameter, Protocol, QualifiedName, Type, TypeDeclaration, TypeKind};
pub use parser::{ProtocolBuilder, parse_protocol};
