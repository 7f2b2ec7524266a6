//! Fixed text templates shared by the generators, and `$`-placeholder substitution.
//!
//! Placeholders follow the familiar shell-like form: `${name}` or `$name`, with `$$` producing a literal `$`.
//! Substitution is strict: a placeholder without a value is an error, never an empty string.

use super::errors::EmitError;

/// Banner written at the top of every generated file.
pub const LICENSE: &str = "\
/*
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions
 * are met:
 * 1. Redistributions of source code must retain the above copyright
 *    notice, this list of conditions and the following disclaimer.
 * 2. Redistributions in binary form must reproduce the above copyright
 *    notice, this list of conditions and the following disclaimer in the
 *    documentation and/or other materials provided with the distribution.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES ARE DISCLAIMED.
 */

// DO NOT EDIT THIS FILE. It is automatically generated from ${inputFilename}
// by the script: ${generatorName}";

pub const OBJC_IMPLEMENTATION_PRELUDE: &str = "\
#import ${primaryInclude}

${secondaryIncludes}

using namespace Inspector;";

pub const OBJC_IMPLEMENTATION_POSTLUDE: &str = "";

/// Substitute `${name}` / `$name` placeholders in `template`.
///
/// ## Errors
/// - [`EmitError::MissingTemplateKey`] if a placeholder has no value in `values`.
/// - [`EmitError::InvalidPlaceholder`] for a `$` not followed by `$`, `{name}`, or an identifier.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> Result<String, EmitError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let offset = template.len() - rest.len() + pos;
        let after = &rest[pos + 1..];

        let (key, consumed) = if let Some(stripped) = after.strip_prefix('$') {
            out.push('$');
            rest = stripped;
            continue;
        } else if let Some(braced) = after.strip_prefix('{') {
            let end = braced.find('}').ok_or(EmitError::InvalidPlaceholder { offset })?;
            let key = &braced[..end];
            if !is_identifier(key) {
                return Err(EmitError::InvalidPlaceholder { offset });
            }
            (key, end + 2)
        } else {
            let len = identifier_prefix_len(after);
            if len == 0 {
                return Err(EmitError::InvalidPlaceholder { offset });
            }
            (&after[..len], len)
        };

        let value = values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| EmitError::MissingTemplateKey { key: key.to_string() })?;
        out.push_str(value);
        rest = &after[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

fn identifier_prefix_len(s: &str) -> usize {
    let mut len = 0;
    for (i, ch) in s.char_indices() {
        let ok = ch == '_' || ch.is_ascii_alphabetic() || (i > 0 && ch.is_ascii_digit());
        if !ok {
            break;
        }
        len = i + ch.len_utf8();
    }
    len
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_prefix_len(s) == s.len()
}
