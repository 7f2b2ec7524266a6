//! The interface every output generator implements, plus helpers shared between generators.
//!
//! A generator reads a resolved [`Protocol`] and produces the text of exactly one output file. The driver asks for
//! [`Generator::output_filename`] and [`Generator::generate_output`] and writes the result; generators never touch
//! the filesystem themselves.

use inspector_core::primitives::{self, PrimitiveId};
use inspector_model::{Domain, Protocol, Type, TypeKind};

use super::config::GeneratorConfig;
use super::errors::EmitError;
use super::templates;

pub trait Generator {
    fn model(&self) -> &Protocol;

    fn config(&self) -> &GeneratorConfig;

    /// Name of the file this generator produces (no directory).
    fn output_filename(&self) -> String;

    /// Domains this generator emits code for, in model order.
    ///
    /// Defaults to every domain that did not come from a supplemental file.
    fn domains_to_generate(&self) -> Vec<&Domain> {
        non_supplemental_domains(self.model())
    }

    /// Render the complete output file.
    fn generate_output(&self) -> Result<String, EmitError>;

    /// Render the license banner naming the input file and the generating tool.
    fn generate_license(&self) -> Result<String, EmitError> {
        let config = self.config();
        templates::substitute(
            templates::LICENSE,
            &[
                ("inputFilename", config.input_filename.as_str()),
                ("generatorName", config.generator_name.as_str()),
            ],
        )
    }
}

/// Every domain that did not come from a supplemental file, in model order.
pub fn non_supplemental_domains(protocol: &Protocol) -> Vec<&Domain> {
    protocol.domains().iter().filter(|d| !d.is_supplemental).collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The `InspectorObject` setter used to store a value of `ty` under a key.
pub fn keyed_set_method_for_type(ty: &Type) -> &'static str {
    match ty.kind() {
        TypeKind::Object(_) => primitives::keyed_set_method(PrimitiveId::Object),
        TypeKind::Array(_) => primitives::keyed_set_method(PrimitiveId::Array),
        TypeKind::Enum { primitive, .. } | TypeKind::Primitive(primitive) => {
            primitives::keyed_set_method(primitive)
        }
    }
}
