//! YAML text to [`FabricDescription`].
//!
//! Parsing happens in two passes. The first reads the text as an untyped YAML
//! value, so that syntax problems (E001) are told apart from documents that
//! are well formed but do not fit the description's shape (E002). An empty
//! document is not an error: it yields a description with every field absent.

use log::{debug, trace};
use serde_yaml::Value;

use trellis_core::description::FabricDescription;

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Parse description text.
///
/// # Errors
///
/// Returns a [`ParseError`] with a single diagnostic when the text is not
/// well-formed YAML or when a value has a type the description cannot hold.
pub fn parse(source: &str) -> Result<FabricDescription, ParseError> {
    let value: Value = serde_yaml::from_str(source).map_err(|err| {
        debug!(err:%; "Description is not well-formed YAML");
        syntax_diagnostic(&err, source)
    })?;

    if value.is_null() {
        trace!("Empty description document");
        return Ok(FabricDescription::default());
    }

    let description: FabricDescription = serde_yaml::from_str(source).map_err(|err| {
        debug!(err:%; "Description has an unexpected shape");
        shape_diagnostic(&err, source)
    })?;

    trace!(description:?; "Parsed description");
    Ok(description)
}

fn syntax_diagnostic(err: &serde_yaml::Error, source: &str) -> ParseError {
    let diag = Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E001)
        .with_help("check indentation and close every `[`, `{` and quote");
    with_location(diag, err, source, "malformed YAML here").into()
}

fn shape_diagnostic(err: &serde_yaml::Error, source: &str) -> ParseError {
    let diag = Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E002)
        .with_help("sections must be mappings and selector or protocol lists must hold strings");
    with_location(diag, err, source, "unexpected value here").into()
}

fn with_location(
    diag: Diagnostic,
    err: &serde_yaml::Error,
    source: &str,
    label: &str,
) -> Diagnostic {
    match err.location() {
        Some(location) => diag.with_label(Span::at(location.index(), source.len()), label),
        None => diag,
    }
}

/// Find the span of the value written after `key:` on the first line that
/// starts (after indentation) with that key.
///
/// This is a plain text scan, good enough to point a diagnostic at the
/// offending line; it does not understand nesting.
pub(crate) fn locate_key(source: &str, key: &str) -> Option<Span> {
    let needle = format!("{key}:");
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with(&needle) {
            let key_start = offset + (line.len() - trimmed.len());
            let rest = trimmed[needle.len()..].trim_end();
            let value_text = rest.trim_start();
            if value_text.is_empty() {
                return Some(Span::new(key_start..key_start + key.len()));
            }
            let value_start = key_start + needle.len() + (rest.len() - value_text.len());
            return Some(Span::new(value_start..value_start + value_text.len()));
        }
        offset += line.len();
    }

    None
}
