//! Character cursor for traversing template source.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through template characters. It handles UTF-8 encoding
//! correctly and tracks line information for diagnostics.

/// A cursor for traversing template source character by character.
///
/// The cursor maintains the current byte position in the source string and
/// the line that position lies on. Every consumed `'\n'` bumps the line,
/// including newlines that are skipped as part of a multi-character marker.
///
/// # Example
///
/// ```
/// use stache_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a{{b}}");
/// cursor.advance();
/// assert!(cursor.at("{{"));
/// cursor.advance_bytes(2);
/// assert_eq!(cursor.remaining(), "b}}");
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns true if the remaining source starts with `marker`.
    ///
    /// # Example
    ///
    /// ```
    /// use stache_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("{{{x}}}");
    /// assert!(cursor.at("{{"));
    /// assert!(cursor.at("{{{"));
    /// assert!(!cursor.at("{{{{"));
    /// ```
    #[inline]
    pub fn at(&self, marker: &str) -> bool {
        self.remaining().starts_with(marker)
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.source.as_bytes().get(self.position).copied() else {
            return;
        };

        // Fast path for ASCII (most common)
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by the given byte count, counting the newlines jumped over.
    ///
    /// Callers pass the byte length of a marker they just matched with
    /// [`Cursor::at`], so the target position is always a char boundary.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        let skipped = &self.source.as_bytes()[self.position..end];
        self.line += skipped.iter().filter(|&&b| b == b'\n').count() as u32;
        self.position = end;
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use stache_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("line1\nline2");
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance_bytes(6); // Skip "line1\n"
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
