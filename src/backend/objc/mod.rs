//! Objective-C naming and type mapping shared by the Objective-C generators.
//!
//! Generated names are `<Prefix><Domain><Name>`. Types map as follows:
//!
//! | protocol type | parameter type | array element class |
//! |---|---|---|
//! | `boolean` / `integer` / `number` | `BOOL` / `int` / `double` | `NSNumber` |
//! | `string`, enums | `NSString *`, enum name | `NSString` |
//! | `object` / `any` | `<Prefix>JSONObject *` | `<Prefix>JSONObject` |
//! | declared object | `<Prefix><Domain><Name> *` | `<Prefix><Domain><Name>` |
//! | array | `NSArray/*<Element>*/ *` | `NSArray/*<Element>*/` |
//!
//! Optional parameters are passed by pointer, so they gain one more `*`.

pub mod event_dispatchers;

pub use event_dispatchers::ObjCFrontendDispatcherImplementationGenerator;

use inspector_core::frameworks;
use inspector_core::primitives::{self, ObjCCategory, PrimitiveId};
use inspector_model::{Domain, Parameter, Protocol, QualifiedName, Type, TypeKind};

use super::generator::ucfirst;

/// `<Prefix><Domain><Name>` for a declared type.
pub fn objc_name_for_declaration(prefix: &str, name: &QualifiedName) -> String {
    format!("{prefix}{}{}", name.domain, name.name)
}

/// Name of the enum generated for an enum declared inline on a parameter.
pub fn objc_enum_name_for_anonymous_enum_parameter(
    prefix: &str,
    domain_name: &str,
    event_or_command_name: &str,
    parameter: &Parameter,
) -> String {
    format!(
        "{prefix}{domain_name}{}{}",
        ucfirst(event_or_command_name),
        ucfirst(&parameter.name)
    )
}

/// Parameter type as written in a method signature, including optional indirection.
pub fn objc_type_for_param(
    prefix: &str,
    domain_name: &str,
    event_or_command_name: &str,
    parameter: &Parameter,
) -> String {
    let objc_type = objc_type_for_param_internal(prefix, domain_name, event_or_command_name, parameter);
    if !parameter.is_optional {
        return objc_type;
    }
    if objc_type.ends_with('*') {
        format!("{objc_type}*")
    } else {
        format!("{objc_type} *")
    }
}

fn objc_type_for_param_internal(
    prefix: &str,
    domain_name: &str,
    event_or_command_name: &str,
    parameter: &Parameter,
) -> String {
    match parameter.ty.kind() {
        TypeKind::Primitive(primitive) => objc_type_for_primitive(prefix, primitive),
        TypeKind::Enum { name: Some(name), .. } => objc_name_for_declaration(prefix, name),
        TypeKind::Enum { name: None, .. } => {
            objc_enum_name_for_anonymous_enum_parameter(prefix, domain_name, event_or_command_name, parameter)
        }
        TypeKind::Object(name) => format!("{} *", objc_name_for_declaration(prefix, name)),
        TypeKind::Array(element) => format!(
            "NSArray/*<{}>*/ *",
            strip_comment_markers(&objc_class_for_type(prefix, element))
        ),
    }
}

fn objc_type_for_primitive(prefix: &str, primitive: PrimitiveId) -> String {
    let info = primitives::info_for(primitive);
    match info.objc_type {
        Some(spelling) => spelling.render(prefix),
        None => format!("{} *", info.objc_class.render(prefix)),
    }
}

/// Class of a value of `ty` when boxed into a Foundation collection.
///
/// Only the outermost array keeps its `/*<...>*/` element comment: `NSArray/*<NSArray<NSString>>*/`.
pub fn objc_class_for_type(prefix: &str, ty: &Type) -> String {
    match ty.kind() {
        TypeKind::Primitive(primitive) => primitives::info_for(primitive).objc_class.render(prefix),
        TypeKind::Enum { .. } => primitives::info_for(PrimitiveId::String).objc_class.render(prefix),
        TypeKind::Object(name) => objc_name_for_declaration(prefix, name),
        TypeKind::Array(element) => format!(
            "NSArray/*<{}>*/",
            strip_comment_markers(&objc_class_for_type(prefix, element))
        ),
    }
}

/// Remove `/*` and `*/` so a type containing them can be nested inside another comment.
pub fn strip_comment_markers(s: &str) -> String {
    s.replace("/*", "").replace("*/", "")
}

/// Expression converting the Objective-C variable `var_name` into its protocol (JSON) value.
pub fn objc_protocol_export_expression_for_variable(ty: &Type, var_name: &str) -> String {
    match ty.kind() {
        TypeKind::Enum { .. } => format!("toProtocolString({var_name})"),
        TypeKind::Object(_) => format!("[{var_name} toInspectorObject]"),
        TypeKind::Array(element) => format!("{}({var_name})", array_export_helper(element)),
        TypeKind::Primitive(primitive) => match primitives::info_for(primitive).category {
            ObjCCategory::Simple | ObjCCategory::String => var_name.to_string(),
            ObjCCategory::Object => format!("[{var_name} toInspectorObject]"),
            ObjCCategory::Array => format!("inspectorObjectArray({var_name})"),
        },
    }
}

fn array_export_helper(element: &Type) -> &'static str {
    match element.kind() {
        TypeKind::Array(inner) if is_string_like(inner) => "inspectorStringArrayArray",
        TypeKind::Primitive(PrimitiveId::String) | TypeKind::Enum { .. } => "inspectorStringArray",
        TypeKind::Primitive(PrimitiveId::Integer) => "inspectorIntegerArray",
        TypeKind::Primitive(PrimitiveId::Number) => "inspectorDoubleArray",
        _ => "inspectorObjectArray",
    }
}

fn is_string_like(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Primitive(PrimitiveId::String) | TypeKind::Enum { .. })
}

/// Whether `domain` gets an `<Prefix><Domain>DomainEventDispatcher` implementation.
pub fn should_generate_domain_event_dispatcher(protocol: &Protocol, domain: &Domain) -> bool {
    !domain.events.is_empty() && frameworks::exposes_objc_event_dispatcher(protocol.framework(), &domain.name)
}

/// Whether `name` can be used verbatim as an Objective-C selector piece or variable.
pub fn is_valid_objc_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
