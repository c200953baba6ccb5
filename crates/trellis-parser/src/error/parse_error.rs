//! Failure to read description text at all.

use std::fmt;

use crate::error::Diagnostic;

/// Description text that is not well-formed YAML, or whose values do not
/// fit the description's shape.
///
/// Holds the diagnostics explaining why; the parser reports one per failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, diagnostic) in self.diagnostics.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, parse};

    #[test]
    fn test_display_names_the_code() {
        let err: ParseError = Diagnostic::error("bad indentation")
            .with_code(ErrorCode::E001)
            .into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.to_string(), "error[E001]: bad indentation");
    }

    #[test]
    fn test_parser_reports_one_diagnostic() {
        let err = parse("spec: [leafs").unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert!(err.to_string().starts_with("error[E001]: "));
    }
}
