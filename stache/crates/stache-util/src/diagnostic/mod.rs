//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics about templates.
//!
//! # Examples
//!
//! ```
//! use stache_util::diagnostic::{Diagnostic, Handler};
//! use stache_util::TemplateError;
//!
//! let mut handler = Handler::new();
//! let err = TemplateError::parse("Unclosed Mustache tag", None, 2);
//! handler.emit(Diagnostic::from(&err));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

use std::fmt;

use crate::error::TemplateError;
use crate::span::TemplateId;

/// An error message with its template location
///
/// The display form is the message on the first line followed by an arrow
/// line pointing at the template and line:
///
/// ```text
/// error: Unclosed Mustache tag
///   --> greeting:3
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Template the diagnostic refers to
    pub template_id: Option<TemplateId>,
    /// Line the diagnostic refers to (1-based)
    pub line: Option<u32>,
}

impl Diagnostic {
    /// Create an error diagnostic without location
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            template_id: None,
            line: None,
        }
    }

    /// Attach a location
    pub fn at(mut self, template_id: Option<TemplateId>, line: u32) -> Self {
        self.template_id = template_id;
        self.line = Some(line);
        self
    }
}

impl From<&TemplateError> for Diagnostic {
    fn from(err: &TemplateError) -> Self {
        Diagnostic::error(err.message()).at(err.template_id().cloned(), err.line())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;
        match (&self.template_id, self.line) {
            (Some(id), Some(line)) => write!(f, "\n  --> {}:{}", id, line)?,
            (None, Some(line)) => write!(f, "\n  --> line {}", line)?,
            (Some(id), None) => write!(f, "\n  --> {}", id)?,
            (None, None) => {}
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use stache_util::diagnostic::{Diagnostic, Handler};
///
/// let mut handler = Handler::new();
/// assert!(!handler.has_errors());
/// handler.emit(Diagnostic::error("Unclosed Mustache tag").at(None, 1));
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// All diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_template() {
        let diag =
            Diagnostic::error("Unclosed Mustache tag").at(Some(TemplateId::new("page")), 3);
        assert_eq!(diag.to_string(), "error: Unclosed Mustache tag\n  --> page:3");
    }

    #[test]
    fn test_display_without_template() {
        let diag = Diagnostic::error("Unclosed Mustache tag").at(None, 1);
        assert_eq!(diag.to_string(), "error: Unclosed Mustache tag\n  --> line 1");
    }

    #[test]
    fn test_display_without_location() {
        let diag = Diagnostic::error("No such file");
        assert_eq!(diag.to_string(), "error: No such file");
    }

    #[test]
    fn test_from_template_error() {
        let err =
            TemplateError::parse("Invalid set delimiters tag", Some(TemplateId::new("t")), 4);
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.message, "Invalid set delimiters tag");
        assert_eq!(diag.line, Some(4));
        assert_eq!(diag.template_id, Some(TemplateId::new("t")));
    }

    #[test]
    fn test_handler_counts() {
        let mut handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        handler.emit(Diagnostic::error("e1"));
        handler.emit(Diagnostic::error("e2").at(None, 2));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics()[1].line, Some(2));
    }
}
