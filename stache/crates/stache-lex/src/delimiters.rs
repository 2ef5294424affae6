//! Tag delimiters.
//!
//! A [`DelimiterPair`] is the pair of markers that open and close a tag,
//! `{{` and `}}` by default. A [`DelimiterTable`] derives from a pair every
//! literal marker the tokenizer scans for. Templates may switch pairs midway
//! with a set-delimiters tag such as `{{=<% %>=}}`, in which case the table
//! is derived again from the new pair.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use stache_util::DelimiterError;

/// Default opening delimiter.
pub const DEFAULT_OPEN: &str = "{{";

/// Default closing delimiter.
pub const DEFAULT_CLOSE: &str = "}}";

/// Opening marker of a triple mustache, only recognized under the default pair.
pub const UNESCAPED_OPEN: &str = "{{{";

/// Closing marker of a triple mustache, only recognized under the default pair.
pub const UNESCAPED_CLOSE: &str = "}}}";

/// An ordered pair of non-empty tag delimiters.
///
/// # Example
///
/// ```
/// use stache_lex::DelimiterPair;
///
/// let pair: DelimiterPair = "<% %>".parse().unwrap();
/// assert_eq!(pair.open(), "<%");
/// assert_eq!(pair.close(), "%>");
/// assert!(!pair.is_default());
/// assert!(DelimiterPair::default().is_default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DelimiterPair {
    open: String,
    close: String,
}

impl DelimiterPair {
    /// Creates a pair, rejecting empty delimiters.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, DelimiterError> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Err(DelimiterError::Empty);
        }
        Ok(Self { open, close })
    }

    /// The opening delimiter.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing delimiter.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns true for the literal `{{`/`}}` pair.
    pub fn is_default(&self) -> bool {
        self.open == DEFAULT_OPEN && self.close == DEFAULT_CLOSE
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl fmt::Display for DelimiterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.open, self.close)
    }
}

impl FromStr for DelimiterPair {
    type Err = DelimiterError;

    /// Parses `"<open> <close>"`, the same way a set-delimiters tag reads its
    /// content.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = split_components(s).collect();
        match components.as_slice() {
            [open, close] => Self::new(*open, *close),
            _ => Err(DelimiterError::ComponentCount {
                found: components.len(),
            }),
        }
    }
}

/// Splits set-delimiters content on runs of spaces and newlines.
pub(crate) fn split_components(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(|c: char| c == ' ' || c == '\n')
        .filter(|component| !component.is_empty())
}

/// Every marker the tokenizer needs for one delimiter pair.
///
/// # Example
///
/// ```
/// use stache_lex::{DelimiterPair, DelimiterTable};
///
/// let table = DelimiterTable::new(DelimiterPair::default());
/// assert_eq!(table.unescaped_open(), Some("{{{"));
/// assert_eq!(table.set_delimiters_open(), "{{=");
///
/// let table = DelimiterTable::new("<% %>".parse().unwrap());
/// assert_eq!(table.unescaped_open(), None);
/// assert_eq!(table.set_delimiters_close(), "=%>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimiterTable {
    pair: DelimiterPair,
    unescaped: Option<(&'static str, &'static str)>,
    set_delimiters_open: String,
    set_delimiters_close: String,
}

impl DelimiterTable {
    /// Derives all markers for `pair`.
    pub fn new(pair: DelimiterPair) -> Self {
        let unescaped = pair
            .is_default()
            .then_some((UNESCAPED_OPEN, UNESCAPED_CLOSE));
        let set_delimiters_open = format!("{}=", pair.open());
        let set_delimiters_close = format!("={}", pair.close());
        Self {
            pair,
            unescaped,
            set_delimiters_open,
            set_delimiters_close,
        }
    }

    /// The pair this table was derived from.
    pub fn pair(&self) -> &DelimiterPair {
        &self.pair
    }

    /// Opening tag marker.
    pub fn open(&self) -> &str {
        self.pair.open()
    }

    /// Closing tag marker.
    pub fn close(&self) -> &str {
        self.pair.close()
    }

    /// Byte length of the opening tag marker.
    pub fn open_len(&self) -> usize {
        self.pair.open().len()
    }

    /// Byte length of the closing tag marker.
    pub fn close_len(&self) -> usize {
        self.pair.close().len()
    }

    /// Triple mustache opening marker, present under the default pair only.
    pub fn unescaped_open(&self) -> Option<&'static str> {
        self.unescaped.map(|(open, _)| open)
    }

    /// Triple mustache closing marker, present under the default pair only.
    pub fn unescaped_close(&self) -> Option<&'static str> {
        self.unescaped.map(|(_, close)| close)
    }

    /// Opening marker of a set-delimiters tag: the open delimiter plus `=`.
    pub fn set_delimiters_open(&self) -> &str {
        &self.set_delimiters_open
    }

    /// Closing marker of a set-delimiters tag: `=` plus the close delimiter.
    pub fn set_delimiters_close(&self) -> &str {
        &self.set_delimiters_close
    }
}

impl Default for DelimiterTable {
    fn default() -> Self {
        Self::new(DelimiterPair::default())
    }
}
