//! Error codes for the Trellis diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Parse errors (the text is not a usable YAML document)
//! - `E2xx` - Validation errors (a required field is missing or wrong)
//! - `W3xx` - Validation warnings (a default stands in for missing content)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Parse Errors (E0xx)
    // =========================================================================
    /// Malformed YAML.
    ///
    /// The text is not well-formed YAML: an unterminated flow collection,
    /// bad indentation, a stray tab, and so on.
    E001,

    /// Unexpected document shape.
    ///
    /// The YAML is well formed but a value has the wrong type, such as a
    /// scalar where the `spec` mapping belongs or a number inside a selector
    /// list.
    E002,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Missing `apiVersion`.
    E200,

    /// `kind` is absent or is not `Fabric`.
    E201,

    /// Missing `metadata.name`.
    E202,

    /// Missing `spec.leafs`.
    E203,

    /// Missing `spec.spines`.
    E204,

    /// Missing `spec.underlayProtocol`.
    E205,

    // =========================================================================
    // Validation Warnings (W3xx)
    // =========================================================================
    /// `spec.spines` lists no selectors, so the default spine count is used.
    W300,

    /// `spec.leafs` lists no selectors, so the default leaf count is used.
    W301,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::W300 => "W300",
            ErrorCode::W301 => "W301",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed YAML",
            ErrorCode::E002 => "unexpected document shape",
            ErrorCode::E200 => "missing api version",
            ErrorCode::E201 => "not a fabric",
            ErrorCode::E202 => "missing fabric name",
            ErrorCode::E203 => "missing leaf section",
            ErrorCode::E204 => "missing spine section",
            ErrorCode::E205 => "missing underlay protocol",
            ErrorCode::W300 => "default spine count",
            ErrorCode::W301 => "default leaf count",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
