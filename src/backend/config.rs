//! Generator configuration
//!
//! Settings every generator reads: where the model came from (for the banner) and how generated names are
//! spelled.

use inspector_core::DEFAULT_OBJC_PREFIX;

/// Name written into the "generated by" banner when none is configured.
pub const DEFAULT_GENERATOR_NAME: &str = "inspector-codegen";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// File name of the primary specification, as shown in the banner
    pub input_filename: String,
    /// Class prefix for generated Objective-C names
    pub objc_prefix: String,
    /// Tool name shown in the banner
    pub generator_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_filename: String::new(),
            objc_prefix: DEFAULT_OBJC_PREFIX.to_string(),
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the specification file name shown in the banner
    pub fn with_input_filename(mut self, name: impl Into<String>) -> Self {
        self.input_filename = name.into();
        self
    }

    /// Set the Objective-C class prefix
    pub fn with_objc_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.objc_prefix = prefix.into();
        self
    }

    /// Set the tool name shown in the banner
    pub fn with_generator_name(mut self, name: impl Into<String>) -> Self {
        self.generator_name = name.into();
        self
    }
}
