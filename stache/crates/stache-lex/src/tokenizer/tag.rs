//! Tag classification.
//!
//! Once the closing delimiter of a tag is found, the first character after
//! the opening delimiter (the sigil) decides the token kind.

use crate::delimiters::DelimiterPair;
use crate::token::TokenKind;

/// Classifies a tag from its interior, the text between the opening and
/// closing delimiters.
///
/// A recognized sigil is stripped from the content. Anything else makes an
/// escaped variable whose content is the whole interior.
pub(super) fn classify<'a>(interior: &'a str, delimiters: &DelimiterPair) -> TokenKind<'a> {
    let mut chars = interior.chars();
    let Some(sigil) = chars.next() else {
        return TokenKind::EscapedVariable {
            content: interior,
            delimiters: delimiters.clone(),
        };
    };
    let content = chars.as_str();

    match sigil {
        '!' => TokenKind::Comment,
        '#' => TokenKind::Section {
            content,
            delimiters: delimiters.clone(),
        },
        '^' => TokenKind::InvertedSection {
            content,
            delimiters: delimiters.clone(),
        },
        '$' => TokenKind::Block { content },
        '/' => TokenKind::Close { content },
        '>' => TokenKind::Partial { content },
        '<' => TokenKind::PartialOverride { content },
        '&' => TokenKind::UnescapedVariable {
            content,
            delimiters: delimiters.clone(),
        },
        '%' => TokenKind::Pragma { content },
        _ => TokenKind::EscapedVariable {
            content: interior,
            delimiters: delimiters.clone(),
        },
    }
}
