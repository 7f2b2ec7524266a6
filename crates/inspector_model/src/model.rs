//! Resolved protocol model.
//!
//! Everything here has passed reference resolution: every [`Type`] is fully known, and declared object types are
//! referred to by [`QualifiedName`] so that recursive declarations stay finite.

use std::collections::HashMap;
use std::fmt;

use inspector_core::frameworks::Framework;
use inspector_core::primitives::PrimitiveId;

/// `Domain.Name` identity of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    pub domain: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
        }
    }

    /// Qualify a `$ref` seen inside `current_domain`.
    ///
    /// `"Node"` becomes `current_domain.Node`; `"DOM.Node"` is taken as-is.
    pub fn from_reference(reference: &str, current_domain: &str) -> Self {
        match reference.split_once('.') {
            Some((domain, name)) => Self::new(domain, name),
            None => Self::new(current_domain, reference),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.name)
    }
}

/// A resolved protocol type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A raw primitive used inline (`"type": "string"`).
    Primitive(PrimitiveId),
    /// A named declaration standing for another type.
    Alias { name: QualifiedName, aliased: Box<Type> },
    /// A fixed set of string values; `name` is `None` for enums declared inline on a parameter.
    Enum {
        name: Option<QualifiedName>,
        values: Vec<String>,
        primitive: PrimitiveId,
    },
    Array(Box<Type>),
    /// A declared object type; members live on the [`TypeDeclaration`].
    Object(QualifiedName),
}

/// What a [`Type`] is once every alias layer is looked through.
///
/// Has no alias variant, so matches over it need no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeKind<'a> {
    Primitive(PrimitiveId),
    Enum {
        name: Option<&'a QualifiedName>,
        values: &'a [String],
        primitive: PrimitiveId,
    },
    Array(&'a Type),
    Object(&'a QualifiedName),
}

impl Type {
    /// Look through any number of alias layers.
    pub fn kind(&self) -> TypeKind<'_> {
        match self {
            Type::Primitive(primitive) => TypeKind::Primitive(*primitive),
            Type::Alias { aliased, .. } => aliased.kind(),
            Type::Enum {
                name,
                values,
                primitive,
            } => TypeKind::Enum {
                name: name.as_ref(),
                values,
                primitive: *primitive,
            },
            Type::Array(element) => TypeKind::Array(element),
            Type::Object(name) => TypeKind::Object(name),
        }
    }

    pub fn is_anonymous_enum(&self) -> bool {
        matches!(self, Type::Enum { name: None, .. })
    }

    /// The declaration this type was introduced by, if any.
    pub fn declaration_name(&self) -> Option<&QualifiedName> {
        match self {
            Type::Alias { name, .. } | Type::Object(name) => Some(name),
            Type::Enum { name, .. } => name.as_ref(),
            Type::Primitive(_) | Type::Array(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
    pub is_optional: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: QualifiedName,
    pub description: Option<String>,
    pub ty: Type,
    /// Object members, in schema order. Empty for non-object declarations.
    pub members: Vec<Parameter>,
}

/// A message sent from the backend to the frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// A request sent from the frontend to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
    pub returns: Vec<Parameter>,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub description: Option<String>,
    pub availability: Option<String>,
    pub feature_guard: Option<String>,
    /// Domains from supplemental files provide types but are never generated.
    pub is_supplemental: bool,
    pub type_declarations: Vec<TypeDeclaration>,
    pub commands: Vec<Command>,
    pub events: Vec<Event>,
}

/// A fully resolved protocol: every domain from every specification file.
#[derive(Debug, Clone)]
pub struct Protocol {
    framework: Framework,
    domains: Vec<Domain>,
    /// (domain index, declaration index) by qualified name
    declarations: HashMap<QualifiedName, (usize, usize)>,
}

impl Protocol {
    pub(crate) fn new(framework: Framework, domains: Vec<Domain>) -> Self {
        let mut declarations = HashMap::new();
        for (domain_index, domain) in domains.iter().enumerate() {
            for (decl_index, decl) in domain.type_declarations.iter().enumerate() {
                declarations.insert(decl.name.clone(), (domain_index, decl_index));
            }
        }
        Self {
            framework,
            domains,
            declarations,
        }
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    /// All domains, in the order their files were added and then schema order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn declaration(&self, name: &QualifiedName) -> Option<&TypeDeclaration> {
        let &(domain_index, decl_index) = self.declarations.get(name)?;
        self.domains.get(domain_index)?.type_declarations.get(decl_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_qualification() {
        assert_eq!(
            QualifiedName::from_reference("Node", "DOM"),
            QualifiedName::new("DOM", "Node")
        );
        assert_eq!(
            QualifiedName::from_reference("Runtime.RemoteObject", "DOM"),
            QualifiedName::new("Runtime", "RemoteObject")
        );
        assert_eq!(QualifiedName::new("Page", "FrameId").to_string(), "Page.FrameId");
    }

    #[test]
    fn test_kind_looks_through_every_alias_layer() {
        let ty = Type::Alias {
            name: QualifiedName::new("A", "Outer"),
            aliased: Box::new(Type::Alias {
                name: QualifiedName::new("A", "Inner"),
                aliased: Box::new(Type::Primitive(PrimitiveId::String)),
            }),
        };
        assert_eq!(ty.kind(), TypeKind::Primitive(PrimitiveId::String));
        assert_eq!(ty.declaration_name(), Some(&QualifiedName::new("A", "Outer")));
    }

    #[test]
    fn test_kind_of_aliased_array_and_enum() {
        let color = QualifiedName::new("A", "Color");
        let colors = Type::Alias {
            name: QualifiedName::new("A", "Colors"),
            aliased: Box::new(Type::Array(Box::new(Type::Enum {
                name: Some(color.clone()),
                values: vec!["red".to_string()],
                primitive: PrimitiveId::String,
            }))),
        };
        let TypeKind::Array(element) = colors.kind() else {
            panic!("expected an array");
        };
        assert_eq!(
            element.kind(),
            TypeKind::Enum {
                name: Some(&color),
                values: &["red".to_string()],
                primitive: PrimitiveId::String,
            }
        );
    }
}
