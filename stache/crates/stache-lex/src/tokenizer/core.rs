//! Core scanning loop.
//!
//! The scanner walks the template one character at a time. Each state
//! remembers where its pending token started and the line it opened on, so
//! newlines inside a token never change the line the token reports.

use std::ops::ControlFlow;

use stache_util::{Span, TemplateError, TemplateId};
use tracing::{debug, trace};

use super::{tag, INVALID_SET_DELIMITERS, UNCLOSED_TAG};
use crate::consumer::TokenConsumer;
use crate::cursor::Cursor;
use crate::delimiters::{DelimiterPair, DelimiterTable, UNESCAPED_OPEN};
use crate::token::{Token, TokenKind};

/// Scanner state. `from` is the byte offset the pending token starts at and
/// `line` the line it opened on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InText { from: usize, line: u32 },
    InTag { from: usize, line: u32 },
    InUnescapedTag { from: usize, line: u32 },
    InSetDelimitersTag { from: usize, line: u32 },
}

/// Which opening marker the cursor sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Opening {
    Unescaped,
    SetDelimiters,
    Tag,
}

/// State of one tokenization run.
pub(super) struct Scanner<'a, 'c, C: ?Sized> {
    cursor: Cursor<'a>,
    table: DelimiterTable,
    template_id: Option<TemplateId>,
    consumer: &'c mut C,
}

impl<'a, 'c, C> Scanner<'a, 'c, C>
where
    C: TokenConsumer<'a> + ?Sized,
{
    pub(super) fn new(
        source: &'a str,
        delimiters: DelimiterPair,
        template_id: Option<TemplateId>,
        consumer: &'c mut C,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            table: DelimiterTable::new(delimiters),
            template_id,
            consumer,
        }
    }

    /// Scans the whole source, pushing tokens until the end, an early stop,
    /// or an error.
    pub(super) fn run(mut self) {
        let mut state = State::Start;

        while !self.cursor.is_at_end() {
            let position = self.cursor.position();

            match state {
                State::Start => {
                    if let Some(opening) = self.opening() {
                        state = self.enter(opening);
                        continue;
                    }
                    state = State::InText {
                        from: position,
                        line: self.cursor.line(),
                    };
                }
                State::InText { from, line } => {
                    if let Some(opening) = self.opening() {
                        if from < position {
                            let text = self.cursor.slice(from, position);
                            let kind = TokenKind::Text { text };
                            if self.emit(kind, from, position, line).is_break() {
                                return;
                            }
                        }
                        state = self.enter(opening);
                        continue;
                    }
                }
                State::InTag { from, line } => {
                    if self.cursor.at(self.table.close()) {
                        let interior = self.cursor.slice(from + self.table.open_len(), position);
                        let kind = tag::classify(interior, self.table.pair());
                        let close_len = self.table.close_len();
                        if self.emit(kind, from, position + close_len, line).is_break() {
                            return;
                        }
                        self.cursor.advance_bytes(close_len);
                        state = State::Start;
                        continue;
                    }
                }
                State::InUnescapedTag { from, line } => {
                    if let Some(close) = self
                        .table
                        .unescaped_close()
                        .filter(|close| self.cursor.at(close))
                    {
                        let content = self.cursor.slice(from + UNESCAPED_OPEN.len(), position);
                        let kind = TokenKind::UnescapedVariable {
                            content,
                            delimiters: self.table.pair().clone(),
                        };
                        if self.emit(kind, from, position + close.len(), line).is_break() {
                            return;
                        }
                        self.cursor.advance_bytes(close.len());
                        state = State::Start;
                        continue;
                    }
                }
                State::InSetDelimitersTag { from, line } => {
                    if self.cursor.at(self.table.set_delimiters_close()) {
                        let content_start = from + self.table.set_delimiters_open().len();
                        let content = self.cursor.slice(content_start, position);
                        let Ok(pair) = content.parse::<DelimiterPair>() else {
                            self.fail(INVALID_SET_DELIMITERS, line);
                            return;
                        };
                        let close_len = self.table.set_delimiters_close().len();
                        if self
                            .emit(TokenKind::SetDelimiters, from, position + close_len, line)
                            .is_break()
                        {
                            return;
                        }
                        self.cursor.advance_bytes(close_len);
                        debug!(
                            open = pair.open(),
                            close = pair.close(),
                            line,
                            "switching tag delimiters"
                        );
                        self.table = DelimiterTable::new(pair);
                        state = State::Start;
                        continue;
                    }
                }
            }

            self.cursor.advance();
        }

        self.finish(state);
    }

    /// Handles end of input for the state the scan stopped in.
    fn finish(mut self, state: State) {
        match state {
            State::Start => {}
            State::InText { from, line } => {
                let end = self.cursor.source().len();
                let text = self.cursor.slice(from, end);
                let _ = self.emit(TokenKind::Text { text }, from, end, line);
            }
            State::InTag { line, .. }
            | State::InUnescapedTag { line, .. }
            | State::InSetDelimitersTag { line, .. } => self.fail(UNCLOSED_TAG, line),
        }
    }

    /// Tests the opening markers in priority order. `{{{` and `{{=` both
    /// start with `{{`, so they must be tried first.
    fn opening(&self) -> Option<Opening> {
        if self
            .table
            .unescaped_open()
            .is_some_and(|open| self.cursor.at(open))
        {
            Some(Opening::Unescaped)
        } else if self.cursor.at(self.table.set_delimiters_open()) {
            Some(Opening::SetDelimiters)
        } else if self.cursor.at(self.table.open()) {
            Some(Opening::Tag)
        } else {
            None
        }
    }

    /// Consumes an opening marker and returns the state it leads to.
    fn enter(&mut self, opening: Opening) -> State {
        let from = self.cursor.position();
        let line = self.cursor.line();
        let (marker_len, state) = match opening {
            Opening::Unescaped => (UNESCAPED_OPEN.len(), State::InUnescapedTag { from, line }),
            Opening::SetDelimiters => (
                self.table.set_delimiters_open().len(),
                State::InSetDelimitersTag { from, line },
            ),
            Opening::Tag => (self.table.open_len(), State::InTag { from, line }),
        };
        self.cursor.advance_bytes(marker_len);
        state
    }

    fn emit(
        &mut self,
        kind: TokenKind<'a>,
        start: usize,
        end: usize,
        line: u32,
    ) -> ControlFlow<()> {
        trace!(kind = kind.name(), line, start, end, "token");
        let token = Token::new(
            kind,
            Span::new(start, end, line),
            self.template_id.clone(),
            self.cursor.source(),
        );
        self.consumer.consume_token(token)
    }

    fn fail(&mut self, message: &str, line: u32) {
        let error = TemplateError::parse(message, self.template_id.clone(), line);
        debug!(%error, "tokenization failed");
        self.consumer.consume_error(error);
    }
}
