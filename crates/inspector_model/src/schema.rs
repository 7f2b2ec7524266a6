//! Raw (unresolved) schema shapes as they appear in specification files.

use serde::Deserialize;

/// `{"domains": [...]}` wrapper form.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSpecification {
    pub domains: Vec<RawDomain>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDomain {
    pub domain: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default, rename = "featureGuard")]
    pub feature_guard: Option<String>,
    #[serde(default)]
    pub types: Vec<RawTypeDeclaration>,
    #[serde(default)]
    pub commands: Vec<RawCommand>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTypeDeclaration {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default)]
    pub properties: Vec<RawParameter>,
    #[serde(default)]
    pub items: Option<Box<RawTypeRef>>,
}

/// Either a `$ref` or an inline `type` (with optional `items` / `enum`).
#[derive(Debug, Deserialize)]
pub(crate) struct RawTypeRef {
    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub items: Option<Box<RawTypeRef>>,
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    pub name: String,
    #[serde(flatten)]
    pub ty: RawTypeRef,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCommand {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default)]
    pub returns: Vec<RawParameter>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}
