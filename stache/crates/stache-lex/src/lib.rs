//! stache-lex - Tokenizer for Mustache Templates
//!
//! This crate turns Mustache template text into a stream of tokens that a
//! parser can build a template tree from. Tokens are pushed into a
//! [`TokenConsumer`] as soon as they are complete, so a consumer may stop the
//! scan at any point without the rest of the template being read.
//!
//! # Example Usage
//!
//! ```
//! use stache_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("Hello {{#user}}{{name}}{{/user}}!").unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind, TokenKind::Text { text: "Hello " });
//! assert_eq!(tokens[3].kind, TokenKind::Close { content: "user" });
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`tokenizer`] - The scanning state machine
//! - [`consumer`] - The push interface tokens are delivered through
//! - [`delimiters`] - Delimiter pairs and the markers derived from them
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! | Source            | Token                 |
//! |-------------------|-----------------------|
//! | plain text        | `Text`                |
//! | `{{! x }}`        | `Comment`             |
//! | `{{# x }}`        | `Section`             |
//! | `{{^ x }}`        | `InvertedSection`     |
//! | `{{$ x }}`        | `Block`               |
//! | `{{/ x }}`        | `Close`               |
//! | `{{> x }}`        | `Partial`             |
//! | `{{< x }}`        | `PartialOverride`     |
//! | `{{& x }}`        | `UnescapedVariable`   |
//! | `{{{ x }}}`       | `UnescapedVariable`   |
//! | `{{% x }}`        | `Pragma`              |
//! | `{{=<% %>=}}`     | `SetDelimiters`       |
//! | `{{ x }}`         | `EscapedVariable`     |
//!
//! Tag content is kept raw. Surrounding whitespace is not trimmed, and an
//! escaped variable keeps its first character since it carries no sigil.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod consumer;
pub mod cursor;
pub mod delimiters;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use consumer::{TokenCollector, TokenConsumer};
pub use cursor::Cursor;
pub use delimiters::{DelimiterPair, DelimiterTable};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer, INVALID_SET_DELIMITERS, UNCLOSED_TAG};
