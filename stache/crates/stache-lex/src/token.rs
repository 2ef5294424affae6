//! Token definitions for Mustache templates.
//!
//! A template tokenizes into text runs and tags. Tag tokens carry the raw
//! text found between the sigil and the closing delimiter; turning that text
//! into expressions is left to the parser.

use serde::Serialize;
use stache_util::{Span, TemplateId};

use crate::delimiters::DelimiterPair;

/// The type of a token, with the borrowed content of its tag.
///
/// Sections and variables remember the delimiter pair that was active when
/// they were scanned, since a later set-delimiters tag must not change how
/// they are read back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenKind<'a> {
    /// Plain text between tags
    Text { text: &'a str },
    /// `{{! ... }}`
    Comment,
    /// `{{# ... }}`
    Section {
        content: &'a str,
        delimiters: DelimiterPair,
    },
    /// `{{^ ... }}`
    InvertedSection {
        content: &'a str,
        delimiters: DelimiterPair,
    },
    /// `{{$ ... }}`
    Block { content: &'a str },
    /// `{{/ ... }}`
    Close { content: &'a str },
    /// `{{> ... }}`
    Partial { content: &'a str },
    /// `{{< ... }}`
    PartialOverride { content: &'a str },
    /// `{{& ... }}` or `{{{ ... }}}`
    UnescapedVariable {
        content: &'a str,
        delimiters: DelimiterPair,
    },
    /// `{{ ... }}` with no sigil
    EscapedVariable {
        content: &'a str,
        delimiters: DelimiterPair,
    },
    /// `{{% ... }}`
    Pragma { content: &'a str },
    /// `{{=<open> <close>=}}`
    SetDelimiters,
}

impl<'a> TokenKind<'a> {
    /// The raw content of the token, if it has any.
    ///
    /// For text tokens this is the text itself.
    pub fn content(&self) -> Option<&'a str> {
        match self {
            TokenKind::Text { text } => Some(*text),
            TokenKind::Section { content, .. }
            | TokenKind::InvertedSection { content, .. }
            | TokenKind::Block { content }
            | TokenKind::Close { content }
            | TokenKind::Partial { content }
            | TokenKind::PartialOverride { content }
            | TokenKind::UnescapedVariable { content, .. }
            | TokenKind::EscapedVariable { content, .. }
            | TokenKind::Pragma { content } => Some(*content),
            TokenKind::Comment | TokenKind::SetDelimiters => None,
        }
    }

    /// The delimiter pair recorded when the tag was scanned.
    pub fn delimiters(&self) -> Option<&DelimiterPair> {
        match self {
            TokenKind::Section { delimiters, .. }
            | TokenKind::InvertedSection { delimiters, .. }
            | TokenKind::UnescapedVariable { delimiters, .. }
            | TokenKind::EscapedVariable { delimiters, .. } => Some(delimiters),
            _ => None,
        }
    }

    /// A short lowercase name, used in logs and token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text { .. } => "text",
            TokenKind::Comment => "comment",
            TokenKind::Section { .. } => "section",
            TokenKind::InvertedSection { .. } => "inverted_section",
            TokenKind::Block { .. } => "block",
            TokenKind::Close { .. } => "close",
            TokenKind::Partial { .. } => "partial",
            TokenKind::PartialOverride { .. } => "partial_override",
            TokenKind::UnescapedVariable { .. } => "unescaped_variable",
            TokenKind::EscapedVariable { .. } => "escaped_variable",
            TokenKind::Pragma { .. } => "pragma",
            TokenKind::SetDelimiters => "set_delimiters",
        }
    }
}

/// A token of a Mustache template.
///
/// The span covers the token's full extent in the source, delimiters
/// included, and its line is the line the token opened on.
///
/// # Example
///
/// ```
/// use stache_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("Hi {{name}}").unwrap();
/// assert_eq!(tokens[1].as_str(), "{{name}}");
/// assert_eq!(tokens[1].kind.content(), Some("name"));
/// assert_eq!(tokens[1].line(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind<'a>,
    /// Where the token is.
    pub span: Span,
    /// The template being tokenized, for diagnostics.
    pub template_id: Option<TemplateId>,
    source: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token covering `span` of `source`.
    pub fn new(
        kind: TokenKind<'a>,
        span: Span,
        template_id: Option<TemplateId>,
        source: &'a str,
    ) -> Self {
        Self {
            kind,
            span,
            template_id,
            source,
        }
    }

    /// The line the token opened on (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// The exact source text of the token.
    pub fn as_str(&self) -> &'a str {
        self.span.slice(self.source)
    }

    /// The full template source the token was read from.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
