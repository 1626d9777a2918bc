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

//! Leading line numbers and label definition markers.

use super::{is_label_char, NO_OP};
use crate::error::{ErrorCode, PreprocessError, Result, Span};

/// A physical line split into its optional user number and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLine<'source> {
    /// The user-supplied line number, if the line starts with digits.
    pub number: Option<u32>,
    /// Everything after the digits.
    pub content: &'source str,
    /// Byte offset of `content` within the physical line.
    pub offset: usize,
}

/// Split an optional run of leading decimal digits off a line.
///
/// `line_no` is the 1-based input line, used for the overflow error.
pub fn split_line_number(line: &str, line_no: usize) -> Result<UserLine<'_>> {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());

    if digits == 0 {
        return Ok(UserLine {
            number: None,
            content: line,
            offset: 0,
        });
    }

    let number = line[..digits].parse::<u32>().map_err(|_| {
        PreprocessError::at_line(
            ErrorCode::LineNumberTooLarge,
            format!("line number {} is too large", &line[..digits]),
            line_no,
            Span::new(0, digits),
        )
    })?;

    Ok(UserLine {
        number: Some(number),
        content: &line[digits..],
        offset: digits,
    })
}

/// A label definition found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDefinition<'source> {
    /// The label name.
    pub name: &'source str,
    /// The explicit value from `%%NAME=VALUE%%:`, if any.
    pub value: Option<&'source str>,
    /// The whole marker including the trailing `%%:`.
    pub span: Span,
}

/// Recognise a label definition marker at the very start of `text`.
///
/// Returns the definition (if any) and the residual content. A definition
/// followed only by whitespace leaves [`NO_OP`] as residual so that the line
/// still gets a number. An explicit value ends at the first `%%:`.
pub fn scan_label_definition(text: &str) -> (Option<LabelDefinition<'_>>, &str) {
    let Some(after_open) = text.strip_prefix("%%") else {
        return (None, text);
    };

    let name_len = after_open
        .find(|c: char| !is_label_char(c))
        .unwrap_or(after_open.len());
    if name_len == 0 {
        return (None, text);
    }
    let name = &after_open[..name_len];
    let after_name = &after_open[name_len..];
    let name_end = 2 + name_len;

    let (value, end) = if after_name.starts_with("%%:") {
        (None, name_end + 3)
    } else if let Some(value_text) = after_name.strip_prefix('=') {
        match value_text.find("%%:") {
            Some(len) => (Some(&value_text[..len]), name_end + 1 + len + 3),
            None => return (None, text),
        }
    } else {
        return (None, text);
    };

    let residual = &text[end..];
    let residual = if residual.trim().is_empty() {
        NO_OP
    } else {
        residual
    };

    (
        Some(LabelDefinition {
            name,
            value,
            span: Span::new(0, end),
        }),
        residual,
    )
}
