//! Primitive protocol type vocabulary.
//!
//! This registry covers the raw `type` spellings a protocol schema may use and the per-primitive spellings the
//! generators need when marshaling values into protocol JSON.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: schema files are JSON and `"String"` is not a primitive.
//! - Objective-C spellings that name the JSON object wrapper are stored *without* the class prefix
//!   (`"JSONObject"`); generators prepend the configured prefix.
//!
//! ## Examples
//! ```rust
//! use inspector_core::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_str("integer"), Some(PrimitiveId::Integer));
//! assert_eq!(primitives::keyed_set_method(PrimitiveId::Number), "setDouble");
//! assert_eq!(primitives::from_str("Integer"), None);
//! ```

/// Stable identifier for protocol primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Boolean,
    Integer,
    Number,
    String,
    Object,
    Any,
    Array,
}

/// How a value of a type is carried across the Objective-C boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjCCategory {
    /// Scalars passed by value (`BOOL`, `int`, `double`).
    Simple,
    /// `NSString *`.
    String,
    /// Wrapped JSON objects and declared object types.
    Object,
    /// `NSArray *` of some element class.
    Array,
}

/// How the Objective-C spelling of a primitive is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjCSpelling {
    /// Spelled verbatim (`BOOL`, `NSNumber`).
    Plain(&'static str),
    /// Spelled as the configured class prefix followed by this suffix.
    Prefixed(&'static str),
}

/// Metadata for a primitive protocol type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    pub canonical: &'static str,
    /// `InspectorObject` setter used when storing a value of this type under a key.
    pub keyed_set_method: &'static str,
    /// Objective-C parameter type, `None` for structural primitives.
    pub objc_type: Option<ObjCSpelling>,
    /// Objective-C class used for array elements of this type.
    pub objc_class: ObjCSpelling,
    pub category: ObjCCategory,
    pub description: &'static str,
}

/// Registry of primitive protocol types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    PrimitiveInfo {
        id: PrimitiveId::Boolean,
        canonical: "boolean",
        keyed_set_method: "setBoolean",
        objc_type: Some(ObjCSpelling::Plain("BOOL")),
        objc_class: ObjCSpelling::Plain("NSNumber"),
        category: ObjCCategory::Simple,
        description: "true or false.",
    },
    PrimitiveInfo {
        id: PrimitiveId::Integer,
        canonical: "integer",
        keyed_set_method: "setInteger",
        objc_type: Some(ObjCSpelling::Plain("int")),
        objc_class: ObjCSpelling::Plain("NSNumber"),
        category: ObjCCategory::Simple,
        description: "Signed integer.",
    },
    PrimitiveInfo {
        id: PrimitiveId::Number,
        canonical: "number",
        keyed_set_method: "setDouble",
        objc_type: Some(ObjCSpelling::Plain("double")),
        objc_class: ObjCSpelling::Plain("NSNumber"),
        category: ObjCCategory::Simple,
        description: "Double precision floating point number.",
    },
    PrimitiveInfo {
        id: PrimitiveId::String,
        canonical: "string",
        keyed_set_method: "setString",
        objc_type: Some(ObjCSpelling::Plain("NSString *")),
        objc_class: ObjCSpelling::Plain("NSString"),
        category: ObjCCategory::String,
        description: "UTF-16 string.",
    },
    PrimitiveInfo {
        id: PrimitiveId::Object,
        canonical: "object",
        keyed_set_method: "setObject",
        objc_type: Some(ObjCSpelling::Prefixed("JSONObject *")),
        objc_class: ObjCSpelling::Prefixed("JSONObject"),
        category: ObjCCategory::Object,
        description: "Untyped JSON object.",
    },
    PrimitiveInfo {
        id: PrimitiveId::Any,
        canonical: "any",
        keyed_set_method: "setValue",
        objc_type: Some(ObjCSpelling::Prefixed("JSONObject *")),
        objc_class: ObjCSpelling::Prefixed("JSONObject"),
        category: ObjCCategory::Object,
        description: "Any JSON value.",
    },
    PrimitiveInfo {
        id: PrimitiveId::Array,
        canonical: "array",
        keyed_set_method: "setArray",
        objc_type: None,
        objc_class: ObjCSpelling::Plain("NSArray"),
        category: ObjCCategory::Array,
        description: "Ordered list; element type comes from `items`.",
    },
];

/// Resolve a schema `type` spelling to a [`PrimitiveId`].
///
/// ## Returns
/// - `Some(PrimitiveId)` if `name` is a canonical primitive spelling.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.canonical == name).map(|p| p.id)
}

/// Return the canonical schema spelling for a primitive.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).canonical
}

/// Return the keyed setter (`setString`, `setInteger`, ...) for a primitive.
pub fn keyed_set_method(id: PrimitiveId) -> &'static str {
    info_for(id).keyed_set_method
}

/// Return the full metadata entry for a primitive.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVES
        .iter()
        .find(|p| p.id == id)
        .expect("primitive info missing")
}

impl ObjCSpelling {
    /// Render the spelling with the given class prefix.
    pub fn render(self, prefix: &str) -> String {
        match self {
            ObjCSpelling::Plain(s) => s.to_string(),
            ObjCSpelling::Prefixed(suffix) => format!("{prefix}{suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("string"), Some(PrimitiveId::String));
        assert_eq!(from_str("String"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn test_any_uses_set_value() {
        assert_eq!(keyed_set_method(PrimitiveId::Any), "setValue");
        assert_eq!(keyed_set_method(PrimitiveId::Object), "setObject");
    }

    #[test]
    fn test_prefixed_spelling_renders_with_prefix() {
        let info = info_for(PrimitiveId::Object);
        assert_eq!(info.objc_type.map(|t| t.render("ABC")), Some("ABCJSONObject *".to_string()));
        assert_eq!(info_for(PrimitiveId::Integer).objc_class.render("ABC"), "NSNumber");
    }
}
