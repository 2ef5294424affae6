//! Span module - Template location tracking.
//!
//! This module provides types for representing locations inside a template:
//! byte offsets, the line a construct opened on, and the identifier of the
//! template the location belongs to.
//!
//! # Examples
//!
//! ```
//! use stache_util::span::{Span, TemplateId};
//!
//! // A span covering bytes 10..20 that opened on line 2
//! let span = Span::new(10, 20, 2);
//!
//! // Templates are identified for diagnostics only
//! let id = TemplateId::new("greeting");
//! assert_eq!(id.as_str(), "greeting");
//! ```

use std::fmt;
use std::sync::Arc;

/// An opaque identifier for a template
///
/// Template identifiers are attached to tokens and errors purely for
/// diagnostics. They are cheap to clone: every clone shares the same string.
///
/// # Examples
///
/// ```
/// use stache_util::span::TemplateId;
///
/// let id = TemplateId::new("partials/header");
/// let copy = id.clone();
/// assert_eq!(id, copy);
/// assert_eq!(copy.to_string(), "partials/header");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(Arc<str>);

impl TemplateId {
    /// Create a new template identifier
    #[inline]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemplateId({:?})", self.as_str())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// Template location span
///
/// A `Span` represents a range in template source, identified by:
/// - Byte offsets (start, end), end exclusive
/// - The line number (1-based) on which the range opened
///
/// The line is the *opening* line: a tag spanning several lines reports the
/// line of its opening delimiter.
///
/// # Examples
///
/// ```
/// use stache_util::span::Span;
///
/// let span = Span::new(4, 12, 1);
/// assert_eq!(span.line, 1);
/// assert_eq!(span.slice("Hi, {{name}}!"), "{{name}}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Opening line number (1-based)
    pub line: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Opening line number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end, line }
    }

    /// Returns the text covered by this span
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie on char boundaries of `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
