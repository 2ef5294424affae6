//! Token consumers.
//!
//! The tokenizer pushes tokens into a [`TokenConsumer`] one at a time, in
//! source order. A consumer can stop the scan after any token by returning
//! [`ControlFlow::Break`]. A failed scan ends with exactly one call to
//! [`TokenConsumer::consume_error`] and no further tokens.

use std::ops::ControlFlow;

use stache_util::TemplateError;

use crate::token::Token;

/// Receiver of the token stream.
pub trait TokenConsumer<'a> {
    /// Receives the next token. Returning `Break` stops tokenization.
    fn consume_token(&mut self, token: Token<'a>) -> ControlFlow<()>;

    /// Receives the error that ended tokenization.
    fn consume_error(&mut self, error: TemplateError);
}

/// A consumer that buffers every token.
///
/// # Example
///
/// ```
/// use stache_lex::{TokenCollector, Tokenizer};
///
/// let mut collector = TokenCollector::new();
/// Tokenizer::default().tokenize("a{{b}}", None, &mut collector);
/// let tokens = collector.finish().unwrap();
/// assert_eq!(tokens.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TokenCollector<'a> {
    tokens: Vec<Token<'a>>,
    error: Option<TemplateError>,
}

impl<'a> TokenCollector<'a> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens received so far.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The error received, if any.
    pub fn error(&self) -> Option<&TemplateError> {
        self.error.as_ref()
    }

    /// Returns the tokens, or the error if tokenization failed.
    pub fn finish(self) -> Result<Vec<Token<'a>>, TemplateError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

impl<'a> TokenConsumer<'a> for TokenCollector<'a> {
    fn consume_token(&mut self, token: Token<'a>) -> ControlFlow<()> {
        self.tokens.push(token);
        ControlFlow::Continue(())
    }

    fn consume_error(&mut self, error: TemplateError) {
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use stache_util::Span;

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = TokenCollector::new();
        for (i, text) in ["a", "b"].into_iter().enumerate() {
            let token = Token::new(TokenKind::Text { text }, Span::new(i, i + 1, 1), None, "ab");
            assert!(collector.consume_token(token).is_continue());
        }
        let texts: Vec<_> = collector.tokens().iter().map(|t| t.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert!(collector.error().is_none());
    }

    #[test]
    fn test_collector_finish_reports_error() {
        let mut collector = TokenCollector::new();
        collector.consume_error(TemplateError::parse("Unclosed Mustache tag", None, 2));
        let err = collector.finish().unwrap_err();
        assert_eq!(err.line(), 2);
    }
}
