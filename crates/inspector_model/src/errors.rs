//! Errors raised while parsing specification files and resolving the protocol model.
//!
//! Each variant names the domain and member involved so a failing schema can be fixed without a debugger. JSON
//! syntax errors additionally carry the source text and a span for miette's graphical reports.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("{file_name}: invalid JSON: {message}")]
    #[diagnostic(code(inspector::model::json))]
    Json {
        file_name: String,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("{file_name}: not a protocol specification: {message}")]
    #[diagnostic(
        code(inspector::model::shape),
        help("a specification is a domain object, a list of domain objects, or {{\"domains\": [...]}}")
    )]
    Shape { file_name: String, message: String },

    #[error("domain `{domain}` is declared more than once")]
    #[diagnostic(code(inspector::model::duplicate_domain))]
    DuplicateDomain { domain: String },

    #[error("type `{name}` is declared more than once")]
    #[diagnostic(code(inspector::model::duplicate_type))]
    DuplicateType { name: String },

    #[error("{domain}: event `{event}` is declared more than once")]
    #[diagnostic(code(inspector::model::duplicate_event))]
    DuplicateEvent { domain: String, event: String },

    #[error("{domain}: command `{command}` is declared more than once")]
    #[diagnostic(code(inspector::model::duplicate_command))]
    DuplicateCommand { domain: String, command: String },

    #[error("{domain}: {owner} has more than one parameter named `{parameter}`")]
    #[diagnostic(code(inspector::model::duplicate_parameter))]
    DuplicateParameter {
        domain: String,
        owner: String,
        parameter: String,
    },

    #[error("{domain}: {owner} refers to unknown type `{reference}`")]
    #[diagnostic(
        code(inspector::model::unknown_reference),
        help("declare the type in its domain's `types`, or pass the file that declares it as a dependency")
    )]
    UnknownReference {
        domain: String,
        owner: String,
        reference: String,
    },

    #[error("{domain}: {owner} uses unknown type `{kind}`")]
    #[diagnostic(
        code(inspector::model::unknown_primitive),
        help("primitive types are boolean, integer, number, string, object, any and array")
    )]
    UnknownPrimitive {
        domain: String,
        owner: String,
        kind: String,
    },

    #[error("{domain}: {owner} has neither `type` nor `$ref`")]
    #[diagnostic(code(inspector::model::missing_type))]
    MissingType { domain: String, owner: String },

    #[error("{domain}: {owner} is an array without `items`")]
    #[diagnostic(code(inspector::model::missing_items))]
    MissingItems { domain: String, owner: String },

    #[error("{domain}: {owner} declares an enum with no values")]
    #[diagnostic(code(inspector::model::empty_enum))]
    EmptyEnum { domain: String, owner: String },

    #[error("{domain}: {owner} declares an enum of type `{kind}`; enums must be strings")]
    #[diagnostic(code(inspector::model::non_string_enum))]
    NonStringEnum {
        domain: String,
        owner: String,
        kind: String,
    },

    #[error("type `{name}` is defined in terms of itself")]
    #[diagnostic(
        code(inspector::model::cyclic_alias),
        help("only object declarations may refer to themselves")
    )]
    CyclicAlias { name: String },
}

impl ModelError {
    /// Build a [`ModelError::Json`] pointing at the location serde_json reported.
    pub(crate) fn json(file_name: &str, source: &str, err: &serde_json::Error) -> Self {
        let offset = offset_for(source, err.line(), err.column());
        let len = if offset < source.len() { 1 } else { 0 };
        ModelError::Json {
            file_name: file_name.to_string(),
            message: err.to_string(),
            src: NamedSource::new(file_name, source.to_string()),
            span: (offset, len).into(),
        }
    }
}

/// Convert a 1-based line/column pair into a byte offset, clamped to the source length.
fn offset_for(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_for_second_line() {
        let source = "{\n  x\n}";
        assert_eq!(offset_for(source, 2, 3), 4);
        assert_eq!(&source[4..5], "x");
    }

    #[test]
    fn test_offset_for_is_clamped() {
        assert_eq!(offset_for("{}", 9, 9), 2);
        assert_eq!(offset_for("", 0, 0), 0);
    }
}
