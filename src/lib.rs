#![forbid(unsafe_code)]
//! Inspector protocol binding generator
//!
//! Reads JSON protocol specifications (domains with types, commands and events), resolves them into a typed model
//! and renders native bindings from it. The Objective-C event dispatcher implementation
//! (`<Prefix>EventDispatchers.mm`) is the generator provided here.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Example
//!
//! ```
//! use inspector_codegen::{Generator, GeneratorConfig, ObjCFrontendDispatcherImplementationGenerator};
//! use inspector_codegen::model::parse_protocol;
//! use inspector_core::frameworks::Framework;
//!
//! let source = r#"{"domain": "Page", "events": [{"name": "loaded"}]}"#;
//! let protocol = parse_protocol(source, "Page.json", Framework::Test).unwrap();
//! let config = GeneratorConfig::new().with_input_filename("Page.json");
//! let generator = ObjCFrontendDispatcherImplementationGenerator::new(&protocol, config);
//! let output = generator.generate_output().unwrap();
//! assert!(output.contains("@implementation RWIProtocolPageDomainEventDispatcher"));
//! ```

pub mod backend;
pub mod cli;
pub mod version;

pub use inspector_model as model;

pub use backend::{EmitError, Generator, GeneratorConfig, ObjCFrontendDispatcherImplementationGenerator};
