// basiclabel - Label preprocessor for line-numbered BBC BASIC programs
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Cursor helper methods for character navigation.
//!
//! This module provides utility methods for the cursor including:
//! - Character stream navigation (peek, advance)
//! - Position tracking and slicing
//! - Skipping over string literals

use super::Cursor;

/// Trait for cursor helper operations.
pub trait CursorHelpers<'source> {
    /// Get the current byte position.
    fn position(&self) -> usize;

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char>;

    /// Advance to the next character and return it.
    fn advance(&mut self) -> Option<char>;

    /// The text from the current position to the end.
    fn rest(&self) -> &'source str;

    /// The text from `start` to the current position.
    fn slice_from(&self, start: usize) -> &'source str;

    /// Skip the body of a string literal whose opening quote was consumed.
    ///
    /// Stops after the closing quote, or at the end of the text for an
    /// unterminated literal. Returns whether a closing quote was found.
    fn skip_string_literal(&mut self) -> bool;
}

impl<'source> CursorHelpers<'source> for Cursor<'source> {
    fn position(&self) -> usize {
        self.position
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'source str {
        &self.source[self.position..]
    }

    fn slice_from(&self, start: usize) -> &'source str {
        &self.source[start..self.position]
    }

    fn skip_string_literal(&mut self) -> bool {
        while let Some(c) = self.advance() {
            if c == '"' {
                // "" is an escaped quote, not the end of the literal
                if self.peek() == Some('"') {
                    self.advance();
                } else {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_multibyte() {
        let mut cursor = Cursor::new("é:");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.rest(), ":");
        assert_eq!(cursor.advance(), Some(':'));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_skip_terminated_literal() {
        let mut cursor = Cursor::new("\"abc\" rest");
        cursor.advance();
        assert!(cursor.skip_string_literal());
        assert_eq!(cursor.slice_from(0), "\"abc\"");
    }

    #[test]
    fn test_skip_escaped_quote() {
        let mut cursor = Cursor::new("\"He\"\"llo\":X");
        cursor.advance();
        assert!(cursor.skip_string_literal());
        assert_eq!(cursor.rest(), ":X");
    }

    #[test]
    fn test_skip_unterminated_literal() {
        let mut cursor = Cursor::new("\"open");
        cursor.advance();
        assert!(!cursor.skip_string_literal());
        assert_eq!(cursor.rest(), "");
    }
}
