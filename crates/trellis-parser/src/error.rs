//! Error and diagnostic system for the Trellis parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the description text
//! - Severity levels, so default-filled gaps can be reported without
//!   rejecting the description
//!
//! # Overview
//!
//! A [`Diagnostic`] represents a single error or warning with an optional
//! error code, source locations, and help text. Parse failures are returned
//! as a [`ParseError`]; validation results are plain lists of diagnostics
//! mixing errors and warnings.
//!
//! # Example
//!
//! ```
//! # use trellis_parser::error::{Diagnostic, ErrorCode};
//! # use trellis_parser::Span;
//!
//! let diag = Diagnostic::error("`kind` must be `Fabric`")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(38..50), "found `Switch`")
//!     .with_help("set `kind: Fabric`");
//! ```

mod diagnostic;
mod error_code;
mod parse_error;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
