//! Tokenizer module.
//!
//! This module organizes the tokenizer into smaller components:
//! - `core` - The scanning state machine
//! - `tag` - Sigil classification of closed tags

mod core;
mod tag;

use stache_util::{TemplateId, TemplateResult};

use crate::consumer::{TokenCollector, TokenConsumer};
use crate::delimiters::DelimiterPair;
use crate::token::Token;

/// Error message for a tag still open at end of input.
pub const UNCLOSED_TAG: &str = "Unclosed Mustache tag";

/// Error message for a set-delimiters tag without exactly two delimiters.
pub const INVALID_SET_DELIMITERS: &str = "Invalid set delimiters tag";

/// Tokenizer for Mustache templates.
///
/// A tokenizer only holds the delimiter pair templates start with. Each call
/// to [`Tokenizer::tokenize`] scans with its own copy, so set-delimiters tags
/// in one template never leak into the next, and one tokenizer can be shared
/// between threads.
///
/// # Example
///
/// ```
/// use stache_lex::{DelimiterPair, TokenKind, Tokenizer};
///
/// let tokenizer = Tokenizer::new(DelimiterPair::new("<%", "%>").unwrap());
/// let tokens = tokenizer.collect("<%#items%>x<%/items%>", None).unwrap();
/// assert!(matches!(tokens[0].kind, TokenKind::Section { content: "items", .. }));
/// assert_eq!(tokens.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokenizer {
    delimiters: DelimiterPair,
}

impl Tokenizer {
    /// Creates a tokenizer whose templates start with `delimiters`.
    pub fn new(delimiters: DelimiterPair) -> Self {
        Self { delimiters }
    }

    /// The delimiter pair templates start with.
    pub fn delimiters(&self) -> &DelimiterPair {
        &self.delimiters
    }

    /// Tokenizes `text`, pushing each token into `consumer` as soon as it is
    /// complete.
    ///
    /// Stops early when the consumer breaks. On malformed input the consumer
    /// receives exactly one error and no further tokens.
    pub fn tokenize<'a, C>(
        &self,
        text: &'a str,
        template_id: Option<TemplateId>,
        consumer: &mut C,
    ) where
        C: TokenConsumer<'a> + ?Sized,
    {
        core::Scanner::new(text, self.delimiters.clone(), template_id, consumer).run();
    }

    /// Tokenizes `text` into a vector.
    pub fn collect<'a>(
        &self,
        text: &'a str,
        template_id: Option<TemplateId>,
    ) -> TemplateResult<Vec<Token<'a>>> {
        let mut collector = TokenCollector::new();
        self.tokenize(text, template_id, &mut collector);
        collector.finish()
    }
}

/// Tokenizes `text` with the default `{{`/`}}` delimiters.
///
/// # Example
///
/// ```
/// use stache_lex::tokenize;
///
/// let err = tokenize("{{#open").unwrap_err();
/// assert_eq!(err.to_string(), "Parse error at line 1: Unclosed Mustache tag");
/// ```
pub fn tokenize(text: &str) -> TemplateResult<Vec<Token<'_>>> {
    Tokenizer::default().collect(text, None)
}
