//! Required-field rules for fabric descriptions.
//!
//! A description is valid when all of these hold:
//!
//! | Code | Rule                                   |
//! |------|----------------------------------------|
//! | E200 | `apiVersion` present and non-empty     |
//! | E201 | `kind` is exactly `Fabric`             |
//! | E202 | `metadata.name` present and non-empty  |
//! | E203 | `spec.leafs` present                   |
//! | E204 | `spec.spines` present                  |
//! | E205 | `spec.underlayProtocol` present        |
//!
//! Section contents are not required: an empty `leafs: {}` passes. A
//! section that lists no selectors is reported as a warning instead (W300
//! for spines, W301 for leafs), since the topology falls back to a default
//! device count for it.

use log::debug;

use trellis_core::description::{FABRIC_KIND, FabricDescription};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    parser::{locate_key, parse},
};

/// Returns `true` if `source` parses and satisfies every rule.
///
/// Parse failures are reported as `false`, never propagated.
pub fn validate(source: &str) -> bool {
    match parse(source) {
        Ok(description) => validate_description(&description),
        Err(err) => {
            debug!(err:%; "Description failed to parse during validation");
            false
        }
    }
}

/// Returns `true` if an already-parsed description satisfies every rule.
///
/// Warnings do not count against it.
pub fn validate_description(description: &FabricDescription) -> bool {
    !check(description)
        .iter()
        .any(|diag| diag.severity().is_error())
}

/// Lists every broken rule in table order, followed by any warnings.
pub fn check(description: &FabricDescription) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if is_blank(description.api_version.as_deref()) {
        diagnostics.push(
            Diagnostic::error("missing `apiVersion`")
                .with_code(ErrorCode::E200)
                .with_help("add `apiVersion: fabrics.eda.nokia.com/v1alpha1`"),
        );
    }

    match description.kind.as_deref() {
        Some(FABRIC_KIND) => {}
        Some(other) => diagnostics.push(
            Diagnostic::error(format!("`kind` must be `{FABRIC_KIND}`, found `{other}`"))
                .with_code(ErrorCode::E201)
                .with_help("set `kind: Fabric`"),
        ),
        None => diagnostics.push(
            Diagnostic::error("missing `kind`")
                .with_code(ErrorCode::E201)
                .with_help("set `kind: Fabric`"),
        ),
    }

    if is_blank(description.name()) {
        diagnostics.push(
            Diagnostic::error("missing `metadata.name`")
                .with_code(ErrorCode::E202)
                .with_help("name the fabric under `metadata:`"),
        );
    }

    let spec = description.spec.as_ref();

    if spec.and_then(|spec| spec.leafs.as_ref()).is_none() {
        diagnostics.push(
            Diagnostic::error("missing `spec.leafs`")
                .with_code(ErrorCode::E203)
                .with_help("add a `leafs:` section with a `leafNodeSelector` list"),
        );
    }

    if spec.and_then(|spec| spec.spines.as_ref()).is_none() {
        diagnostics.push(
            Diagnostic::error("missing `spec.spines`")
                .with_code(ErrorCode::E204)
                .with_help("add a `spines:` section with a `spineNodeSelector` list"),
        );
    }

    if spec.and_then(|spec| spec.underlay_protocol.as_ref()).is_none() {
        diagnostics.push(
            Diagnostic::error("missing `spec.underlayProtocol`")
                .with_code(ErrorCode::E205)
                .with_help("add an `underlayProtocol:` section with a `protocol` list"),
        );
    }

    let has_spines = spec.is_some_and(|spec| spec.spines.is_some());
    if has_spines && description.spine_selectors().is_empty() {
        diagnostics.push(
            Diagnostic::warning("`spec.spines` lists no selectors; using the default spine count")
                .with_code(ErrorCode::W300)
                .with_help("add one `spineNodeSelector` entry per spine"),
        );
    }

    let has_leafs = spec.is_some_and(|spec| spec.leafs.is_some());
    if has_leafs && description.leaf_selectors().is_empty() {
        diagnostics.push(
            Diagnostic::warning("`spec.leafs` lists no selectors; using the default leaf count")
                .with_code(ErrorCode::W301)
                .with_help("add one `leafNodeSelector` entry per leaf"),
        );
    }

    diagnostics
}

/// Parses `source` and checks it, pointing diagnostics at the lines they
/// concern where those lines exist.
///
/// # Errors
///
/// Returns the [`ParseError`] if the text does not parse.
pub fn check_source(source: &str) -> Result<Vec<Diagnostic>, ParseError> {
    let description = parse(source)?;

    let diagnostics = check(&description)
        .into_iter()
        .map(|diag| {
            let anchor = match diag.code() {
                Some(ErrorCode::E200) => locate_key(source, "apiVersion"),
                Some(ErrorCode::E201) => locate_key(source, "kind"),
                Some(ErrorCode::E202) => locate_key(source, "metadata"),
                Some(ErrorCode::E203 | ErrorCode::E204 | ErrorCode::E205) => {
                    locate_key(source, "spec")
                }
                Some(ErrorCode::W300) => locate_key(source, "spines"),
                Some(ErrorCode::W301) => locate_key(source, "leafs"),
                _ => None,
            };
            match anchor {
                Some(span) => diag.with_label(span, "here"),
                None => diag,
            }
        })
        .collect();

    Ok(diagnostics)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
