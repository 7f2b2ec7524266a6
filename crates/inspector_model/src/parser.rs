//! Parse specification files and resolve them into a [`Protocol`].
//!
//! ## Pipeline
//!
//! 1. [`ProtocolBuilder::add_specification`] parses one file into raw schema domains. JSON syntax errors are
//!    reported with a source span; structural errors name the file.
//! 2. [`ProtocolBuilder::build`] indexes every type declaration from every file, then resolves declarations,
//!    members, commands and events. `$ref`s may cross files.
//!
//! ## Resolution rules
//!
//! - A `$ref` without a dot is qualified with the referencing domain.
//! - A declaration with `enum` is a named enum; with `"type": "object"` an object; anything else an alias.
//! - Alias chains must terminate; objects may refer to themselves.

use std::collections::{HashMap, HashSet};

use inspector_core::frameworks::Framework;
use inspector_core::primitives::{self, PrimitiveId};

use crate::errors::ModelError;
use crate::model::{Command, Domain, Event, Parameter, Protocol, QualifiedName, Type, TypeDeclaration};
use crate::schema::{RawDomain, RawParameter, RawSpecification, RawTypeDeclaration, RawTypeRef};

#[cfg(test)]
mod tests;

/// Parse a single specification file into a protocol.
pub fn parse_protocol(source: &str, file_name: &str, framework: Framework) -> Result<Protocol, ModelError> {
    let mut builder = ProtocolBuilder::new(framework);
    builder.add_specification(source, file_name, false)?;
    builder.build()
}

struct SpecificationFile {
    domains: Vec<RawDomain>,
    is_supplemental: bool,
}

/// Collects specification files, then resolves them together.
pub struct ProtocolBuilder {
    framework: Framework,
    files: Vec<SpecificationFile>,
}

impl ProtocolBuilder {
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            files: Vec::new(),
        }
    }

    /// Parse one specification file.
    ///
    /// Supplemental files contribute types that other files may reference, but their domains are marked
    /// [`Domain::is_supplemental`] and are not generated.
    pub fn add_specification(&mut self, source: &str, file_name: &str, is_supplemental: bool) -> Result<(), ModelError> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|e| ModelError::json(file_name, source, &e))?;

        let domains = if value.is_array() {
            serde_json::from_value::<Vec<RawDomain>>(value)
        } else if value.get("domains").is_some() {
            serde_json::from_value::<RawSpecification>(value).map(|s| s.domains)
        } else {
            serde_json::from_value::<RawDomain>(value).map(|d| vec![d])
        }
        .map_err(|e| ModelError::Shape {
            file_name: file_name.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            file = file_name,
            domains = domains.len(),
            supplemental = is_supplemental,
            "parsed specification"
        );

        self.files.push(SpecificationFile {
            domains,
            is_supplemental,
        });
        Ok(())
    }

    /// Resolve every added file into a [`Protocol`].
    pub fn build(self) -> Result<Protocol, ModelError> {
        let raw_domains: Vec<(&RawDomain, bool)> = self
            .files
            .iter()
            .flat_map(|file| file.domains.iter().map(move |d| (d, file.is_supplemental)))
            .collect();

        let mut seen_domains = HashSet::new();
        let mut raw_declarations = HashMap::new();
        for &(raw, _) in &raw_domains {
            if !seen_domains.insert(raw.domain.as_str()) {
                return Err(ModelError::DuplicateDomain {
                    domain: raw.domain.clone(),
                });
            }
            for decl in &raw.types {
                let name = QualifiedName::new(&raw.domain, &decl.id);
                if raw_declarations.insert(name.clone(), decl).is_some() {
                    return Err(ModelError::DuplicateType { name: name.to_string() });
                }
            }
        }

        let mut resolver = Resolver {
            raw_declarations,
            resolved: HashMap::new(),
            in_progress: HashSet::new(),
        };

        let domains = raw_domains
            .into_iter()
            .map(|(raw, is_supplemental)| resolver.domain(raw, is_supplemental))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            domains = domains.len(),
            declarations = resolver.resolved.len(),
            "resolved protocol"
        );
        Ok(Protocol::new(self.framework, domains))
    }
}

struct Resolver<'a> {
    raw_declarations: HashMap<QualifiedName, &'a RawTypeDeclaration>,
    resolved: HashMap<QualifiedName, Type>,
    in_progress: HashSet<QualifiedName>,
}

impl<'a> Resolver<'a> {
    fn domain(&mut self, raw: &'a RawDomain, is_supplemental: bool) -> Result<Domain, ModelError> {
        let domain = raw.domain.as_str();

        let mut type_declarations = Vec::with_capacity(raw.types.len());
        for decl in &raw.types {
            let name = QualifiedName::new(domain, &decl.id);
            let ty = self.declaration(&name)?;
            let members = match &ty {
                Type::Object(_) => self.parameters(domain, &format!("type `{}`", decl.id), &decl.properties)?,
                _ => Vec::new(),
            };
            type_declarations.push(TypeDeclaration {
                name,
                description: decl.description.clone(),
                ty,
                members,
            });
        }

        let mut command_names = HashSet::new();
        let mut commands = Vec::with_capacity(raw.commands.len());
        for command in &raw.commands {
            if !command_names.insert(command.name.as_str()) {
                return Err(ModelError::DuplicateCommand {
                    domain: domain.to_string(),
                    command: command.name.clone(),
                });
            }
            let owner = format!("command `{}`", command.name);
            commands.push(Command {
                name: command.name.clone(),
                description: command.description.clone(),
                parameters: self.parameters(domain, &owner, &command.parameters)?,
                returns: self.parameters(domain, &format!("{owner} returns"), &command.returns)?,
                is_async: command.is_async,
            });
        }

        let mut event_names = HashSet::new();
        let mut events = Vec::with_capacity(raw.events.len());
        for event in &raw.events {
            if !event_names.insert(event.name.as_str()) {
                return Err(ModelError::DuplicateEvent {
                    domain: domain.to_string(),
                    event: event.name.clone(),
                });
            }
            events.push(Event {
                name: event.name.clone(),
                description: event.description.clone(),
                parameters: self.parameters(domain, &format!("event `{}`", event.name), &event.parameters)?,
            });
        }

        Ok(Domain {
            name: domain.to_string(),
            description: raw.description.clone(),
            availability: raw.availability.clone(),
            feature_guard: raw.feature_guard.clone(),
            is_supplemental,
            type_declarations,
            commands,
            events,
        })
    }

    fn parameters(&mut self, domain: &str, owner: &str, raw: &[RawParameter]) -> Result<Vec<Parameter>, ModelError> {
        let mut names = HashSet::new();
        raw.iter()
            .map(|param| {
                if !names.insert(param.name.as_str()) {
                    return Err(ModelError::DuplicateParameter {
                        domain: domain.to_string(),
                        owner: owner.to_string(),
                        parameter: param.name.clone(),
                    });
                }
                let member = format!("{owner} parameter `{}`", param.name);
                Ok(Parameter {
                    name: param.name.clone(),
                    ty: self.type_ref(domain, &member, &param.ty)?,
                    is_optional: param.optional,
                    description: param.description.clone(),
                })
            })
            .collect()
    }

    /// Resolve a declaration, memoized. Detects alias cycles.
    fn declaration(&mut self, name: &QualifiedName) -> Result<Type, ModelError> {
        if let Some(ty) = self.resolved.get(name) {
            return Ok(ty.clone());
        }
        let Some(raw) = self.raw_declarations.get(name).copied() else {
            return Err(ModelError::UnknownReference {
                domain: name.domain.clone(),
                owner: "a type reference".to_string(),
                reference: name.to_string(),
            });
        };
        if !self.in_progress.insert(name.clone()) {
            return Err(ModelError::CyclicAlias { name: name.to_string() });
        }

        let owner = format!("type `{}`", raw.id);
        let ty = if raw.enum_values.is_some() {
            self.kind(
                &name.domain,
                &owner,
                &raw.kind,
                raw.items.as_deref(),
                raw.enum_values.as_deref(),
                Some(name.clone()),
            )?
        } else if raw.kind == primitives::as_str(PrimitiveId::Object) {
            Type::Object(name.clone())
        } else {
            let aliased = self.kind(&name.domain, &owner, &raw.kind, raw.items.as_deref(), None, None)?;
            Type::Alias {
                name: name.clone(),
                aliased: Box::new(aliased),
            }
        };

        self.in_progress.remove(name);
        self.resolved.insert(name.clone(), ty.clone());
        Ok(ty)
    }

    fn type_ref(&mut self, domain: &str, owner: &str, raw: &RawTypeRef) -> Result<Type, ModelError> {
        if let Some(reference) = &raw.reference {
            let name = QualifiedName::from_reference(reference, domain);
            if !self.raw_declarations.contains_key(&name) {
                return Err(ModelError::UnknownReference {
                    domain: domain.to_string(),
                    owner: owner.to_string(),
                    reference: reference.clone(),
                });
            }
            return self.declaration(&name);
        }

        let Some(kind) = &raw.kind else {
            return Err(ModelError::MissingType {
                domain: domain.to_string(),
                owner: owner.to_string(),
            });
        };
        self.kind(
            domain,
            owner,
            kind,
            raw.items.as_deref(),
            raw.enum_values.as_deref(),
            None,
        )
    }

    fn kind(
        &mut self,
        domain: &str,
        owner: &str,
        kind: &str,
        items: Option<&RawTypeRef>,
        enum_values: Option<&[String]>,
        enum_name: Option<QualifiedName>,
    ) -> Result<Type, ModelError> {
        let Some(primitive) = primitives::from_str(kind) else {
            return Err(ModelError::UnknownPrimitive {
                domain: domain.to_string(),
                owner: owner.to_string(),
                kind: kind.to_string(),
            });
        };

        if let Some(values) = enum_values {
            if primitive != PrimitiveId::String {
                return Err(ModelError::NonStringEnum {
                    domain: domain.to_string(),
                    owner: owner.to_string(),
                    kind: kind.to_string(),
                });
            }
            if values.is_empty() {
                return Err(ModelError::EmptyEnum {
                    domain: domain.to_string(),
                    owner: owner.to_string(),
                });
            }
            return Ok(Type::Enum {
                name: enum_name,
                values: values.to_vec(),
                primitive,
            });
        }

        if primitive == PrimitiveId::Array {
            let Some(items) = items else {
                return Err(ModelError::MissingItems {
                    domain: domain.to_string(),
                    owner: owner.to_string(),
                });
            };
            let element = self.type_ref(domain, &format!("{owner} items"), items)?;
            return Ok(Type::Array(Box::new(element)));
        }

        Ok(Type::Primitive(primitive))
    }
}
