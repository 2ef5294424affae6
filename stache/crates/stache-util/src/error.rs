//! Core error types shared by the stache crates.
//!
//! Template errors carry the identifier of the offending template and the
//! line the faulty construct opened on. Their display form reads
//! `Parse error at line 3 of template greeting: Unclosed Mustache tag`.

use std::fmt;

use thiserror::Error;

use crate::span::TemplateId;

/// Error raised while processing a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template text is not valid Mustache
    #[error("Parse error{}: {message}", Location::new(.template_id, .line))]
    Parse {
        /// Human readable description
        message: String,
        /// Template the error was found in
        template_id: Option<TemplateId>,
        /// Opening line of the faulty construct (1-based)
        line: u32,
    },
}

impl TemplateError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>, template_id: Option<TemplateId>, line: u32) -> Self {
        Self::Parse {
            message: message.into(),
            template_id,
            line,
        }
    }

    /// The error message without location information
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. } => message,
        }
    }

    /// Line the error was reported at
    pub fn line(&self) -> u32 {
        match self {
            Self::Parse { line, .. } => *line,
        }
    }

    /// Template the error was reported in, if known
    pub fn template_id(&self) -> Option<&TemplateId> {
        match self {
            Self::Parse { template_id, .. } => template_id.as_ref(),
        }
    }
}

/// Location suffix of a template error message
struct Location<'a> {
    template_id: Option<&'a TemplateId>,
    line: u32,
}

impl<'a> Location<'a> {
    fn new(template_id: &'a Option<TemplateId>, line: &u32) -> Self {
        Self {
            template_id: template_id.as_ref(),
            line: *line,
        }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " at line {}", self.line)?;
        if let Some(id) = self.template_id {
            write!(f, " of template {}", id)?;
        }
        Ok(())
    }
}

/// Error type for delimiter pair construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimiterError {
    /// One of the delimiters is the empty string
    #[error("Tag delimiters must not be empty")]
    Empty,

    /// Delimiter text did not contain exactly two components
    #[error("Expected two whitespace separated delimiters, found {found}")]
    ComponentCount {
        /// Number of components actually found
        found: usize,
    },
}

/// Result type alias for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;
