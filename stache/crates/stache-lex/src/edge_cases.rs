//! Edge case tests for stache-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, DelimiterPair, Token, TokenKind, INVALID_SET_DELIMITERS, UNCLOSED_TAG};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        tokenize(source).unwrap()
    }

    fn escaped(content: &str) -> TokenKind<'_> {
        TokenKind::EscapedVariable {
            content,
            delimiters: DelimiterPair::default(),
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_lone_open_brace() {
        let t = lex_all("a { b");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Text { text: "a { b" });
    }

    #[test]
    fn test_edge_close_marker_in_text() {
        let t = lex_all("a }} b");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Text { text: "a }} b" });
    }

    #[test]
    fn test_edge_empty_tag() {
        let t = lex_all("{{}}");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, escaped(""));
    }

    #[test]
    fn test_edge_first_close_wins() {
        let t = lex_all("{{a}}b}}");
        assert_eq!(t[0].kind, escaped("a"));
        assert_eq!(t[1].kind, TokenKind::Text { text: "b}}" });
    }

    #[test]
    fn test_edge_open_inside_tag() {
        // An opening marker inside a tag is just content.
        let t = lex_all("{{a{{b}}");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, escaped("a{{b"));
    }

    #[test]
    fn test_edge_adjacent_tags() {
        let t = lex_all("{{a}}{{b}}");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].span.start, 5);
    }

    #[test]
    fn test_edge_quadruple_brace() {
        // `{{{` wins, leaving `{` as content of the triple mustache.
        let t = lex_all("{{{{x}}}");
        assert!(matches!(
            t[0].kind,
            TokenKind::UnescapedVariable { content: "{x", .. }
        ));
    }

    #[test]
    fn test_edge_triple_close_in_plain_tag() {
        // A plain tag ends at the first `}}`, leaving `}` as text.
        let t = lex_all("{{a}}}");
        assert_eq!(t[0].kind, escaped("a"));
        assert_eq!(t[1].kind, TokenKind::Text { text: "}" });
    }

    #[test]
    fn test_edge_multiline_tag() {
        let t = lex_all("{{!\nlong\ncomment\n}}{{x}}");
        assert_eq!(t[0].line(), 1);
        assert_eq!(t[1].line(), 4);
    }

    #[test]
    fn test_edge_multibyte_text() {
        let t = lex_all("héllo {{wörld}} ✓");
        assert_eq!(t[0].kind, TokenKind::Text { text: "héllo " });
        assert_eq!(t[1].kind, escaped("wörld"));
        assert_eq!(t[2].as_str(), " ✓");
    }

    #[test]
    fn test_edge_multibyte_delimiters() {
        let t = lex_all("{{=« »=}}«x»");
        assert_eq!(t[1].as_str(), "«x»");
        assert_eq!(t[1].kind.content(), Some("x"));
    }

    #[test]
    fn test_edge_set_delimiters_newline_separator() {
        let t = lex_all("{{=<%\n%>=}}\n<%x%>");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].line(), 3);
    }

    #[test]
    fn test_edge_delimiters_sharing_characters() {
        let t = lex_all("{{=| |=}}|a|");
        assert_eq!(
            t[1].kind,
            TokenKind::EscapedVariable {
                content: "a",
                delimiters: DelimiterPair::new("|", "|").unwrap(),
            }
        );
    }

    #[test]
    fn test_edge_long_text() {
        let text = "a".repeat(10000);
        let t = lex_all(&text);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].span.end, 10000);
    }

    #[test]
    fn test_edge_many_tags() {
        let source = "{{x}}".repeat(1000);
        assert_eq!(lex_all(&source).len(), 1000);
    }

    // ==================== ERRORS ====================

    #[test]
    fn test_err_unclosed_tag() {
        let err = tokenize("{{x").unwrap_err();
        assert_eq!(err.message(), UNCLOSED_TAG);
    }

    #[test]
    fn test_err_unclosed_triple_mustache() {
        let err = tokenize("{{{x}}").unwrap_err();
        assert_eq!(err.message(), UNCLOSED_TAG);
    }

    #[test]
    fn test_err_unclosed_set_delimiters() {
        let err = tokenize("\n{{=<% %>}}").unwrap_err();
        assert_eq!(err.message(), UNCLOSED_TAG);
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_err_open_marker_at_end() {
        let err = tokenize("text{{").unwrap_err();
        assert_eq!(err.message(), UNCLOSED_TAG);
    }

    #[test]
    fn test_err_empty_set_delimiters() {
        let err = tokenize("{{==}}").unwrap_err();
        assert_eq!(err.message(), INVALID_SET_DELIMITERS);
    }

    #[test]
    fn test_err_three_delimiters() {
        let err = tokenize("{{=a b c=}}").unwrap_err();
        assert_eq!(err.message(), INVALID_SET_DELIMITERS);
    }

    #[test]
    fn test_err_tab_separated_delimiters() {
        let err = tokenize("{{=<%\t%>=}}").unwrap_err();
        assert_eq!(err.message(), INVALID_SET_DELIMITERS);
    }

    #[test]
    fn test_err_display() {
        let err = tokenize("a\n{{#b").unwrap_err();
        assert_eq!(err.to_string(), "Parse error at line 2: Unclosed Mustache tag");
    }
}
