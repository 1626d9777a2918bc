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

//! Splitting a line into code and string literal fragments.

use super::helpers::CursorHelpers;
use super::Cursor;

/// A piece of a line: either code or a quoted string literal.
///
/// Literal fragments include their delimiting quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'source> {
    Code(&'source str),
    Literal(&'source str),
}

impl<'source> Fragment<'source> {
    /// The fragment text.
    pub fn as_str(&self) -> &'source str {
        match *self {
            Fragment::Code(text) | Fragment::Literal(text) => text,
        }
    }

    /// Check if this fragment is a string literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Fragment::Literal(_))
    }
}

/// Split `text` into alternating code and literal fragments.
///
/// Code fragments sit at even indices and literals at odd indices, so a
/// line starting with a quote begins with an empty code fragment. An
/// unterminated literal runs to the end of the line. Concatenating the
/// fragments always gives back `text`.
pub fn split_literals(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut cursor = Cursor::new(text);
    let mut start = 0;

    while let Some(c) = cursor.peek() {
        if c == '"' {
            fragments.push(Fragment::Code(cursor.slice_from(start)));
            start = cursor.position();
            cursor.advance();
            cursor.skip_string_literal();
            fragments.push(Fragment::Literal(cursor.slice_from(start)));
            start = cursor.position();
        } else {
            cursor.advance();
        }
    }

    if start < text.len() {
        fragments.push(Fragment::Code(&text[start..]));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs<'a>(fragments: &[Fragment<'a>]) -> Vec<&'a str> {
        fragments.iter().map(Fragment::as_str).collect()
    }

    #[test]
    fn test_code_only() {
        assert_eq!(split_literals("GOTO 10"), vec![Fragment::Code("GOTO 10")]);
    }

    #[test]
    fn test_empty() {
        assert!(split_literals("").is_empty());
    }

    #[test]
    fn test_literal_in_middle() {
        let fragments = split_literals("PRINT \"hi\";X");
        assert_eq!(strs(&fragments), vec!["PRINT ", "\"hi\"", ";X"]);
        assert!(fragments[1].is_literal());
        assert!(!fragments[2].is_literal());
    }

    #[test]
    fn test_leading_literal_keeps_parity() {
        let fragments = split_literals("\"a\"");
        assert_eq!(fragments, vec![Fragment::Code(""), Fragment::Literal("\"a\"")]);
    }

    #[test]
    fn test_escaped_quote() {
        let fragments = split_literals("PRINT \"He\"\"llo\"");
        assert_eq!(strs(&fragments), vec!["PRINT ", "\"He\"\"llo\""]);
    }

    #[test]
    fn test_unterminated_literal() {
        let fragments = split_literals("PRINT \"open : GOTO 10");
        assert_eq!(strs(&fragments), vec!["PRINT ", "\"open : GOTO 10"]);
        assert!(fragments[1].is_literal());
    }

    #[test]
    fn test_several_literals() {
        let text = "A$=\"x\"+B$+\"%%L%%\":GOTO %%L%%";
        let fragments = split_literals(text);
        assert_eq!(
            strs(&fragments),
            vec!["A$=", "\"x\"", "+B$+", "\"%%L%%\"", ":GOTO %%L%%"]
        );
        assert_eq!(strs(&fragments).concat(), text);
    }
}
