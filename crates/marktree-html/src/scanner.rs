//! Character cursor over the markup source.
//!
//! The scanner keeps a byte offset into an immutable `&str` together with the
//! 1-based line and column of the character under the cursor. Every consuming
//! operation goes through [`Scanner::take`], so line/column bookkeeping is
//! never skipped. Returned substrings borrow from the input.

use marktree_dom::Position;

/// Whitespace as far as markup is concerned: space, tab, LF, CR.
#[must_use]
pub const fn is_markup_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A cursor over markup text with line/column tracking.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the first character of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The whole source text.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Line, column and offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// True once every character has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Unconsumed remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// True if the unconsumed input begins with `prefix`. Consumes nothing.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// The character under the cursor, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the one under the cursor.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consume and return the character under the cursor.
    ///
    /// A newline moves to column 1 of the next line; anything else advances
    /// the column by one.
    pub fn take(&mut self) -> Option<char> {
        let c = self.current()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume one character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            let _ = self.take();
            true
        } else {
            false
        }
    }

    /// Consume `literal` if the input continues with it. Nothing is consumed
    /// on a mismatch.
    pub fn match_str(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        self.advance_to(self.offset + literal.len());
        true
    }

    /// Consume the longest run of characters satisfying `predicate`.
    pub fn consume_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            let _ = self.take();
        }
        &self.input[start..self.offset]
    }

    /// Consume characters up to (not including) the first one satisfying
    /// `predicate`, or to end of input.
    pub fn consume_until(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        self.consume_while(|c| !predicate(c))
    }

    /// Consume up to (not including) the next occurrence of `literal`, or to
    /// end of input when it never occurs.
    pub fn consume_until_str(&mut self, literal: &str) -> &'a str {
        let start = self.offset;
        let end = self
            .rest()
            .find(literal)
            .map_or(self.input.len(), |found| start + found);
        self.advance_to(end);
        &self.input[start..end]
    }

    /// Skip spaces, tabs, newlines and carriage returns.
    pub fn skip_whitespace(&mut self) {
        let _ = self.consume_while(is_markup_whitespace);
    }

    /// Substring between two byte offsets. Out-of-range or misaligned bounds
    /// give an empty string.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end).unwrap_or("")
    }

    /// Substring from `start` up to the cursor.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.offset)
    }

    /// `line:column` of the cursor, for messages.
    #[must_use]
    pub fn location(&self) -> String {
        self.position().to_string()
    }

    /// Move the cursor to a previously seen `line`/`column`, recomputing the
    /// matching byte offset.
    ///
    /// Returns `false` if the input has no such location; the cursor is then
    /// left at end of input.
    pub fn set_location(&mut self, line: usize, column: usize) -> bool {
        self.offset = 0;
        self.line = 1;
        self.column = 1;
        while (self.line, self.column) != (line, column) {
            if self.take().is_none() {
                return false;
            }
        }
        true
    }

    fn advance_to(&mut self, end: usize) {
        while self.offset < end {
            if self.take().is_none() {
                break;
            }
        }
    }
}
