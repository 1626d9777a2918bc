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

//! Label reference scanning.
//!
//! Code fragments are tokenized with a small [`logos`] lexer. Every byte of
//! the input belongs to exactly one token, so the first `Reference` token is
//! the leftmost `%%NAME%%` in the fragment.

use logos::Logos;

use crate::error::Span;

/// Tokens of a code fragment, as far as labels are concerned.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RefToken {
    /// `%%NAME%%`
    #[regex(r"%%[A-Za-z0-9_]+%%")]
    Reference,

    /// `%%NAME=`, the start of a definition that is not at the line start
    /// or lacks its trailing `%%:`.
    #[regex(r"%%[A-Za-z0-9_]+=")]
    SuspectedDefinition,

    #[token("%")]
    Percent,

    #[regex(r"[^%]+")]
    Text,
}

/// A label reference inside a code fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'source> {
    /// The referenced label name.
    pub name: &'source str,
    /// The whole `%%NAME%%` including delimiters.
    pub span: Span,
}

/// Find the leftmost `%%NAME%%` reference in a code fragment.
pub fn find_reference(code: &str) -> Option<Reference<'_>> {
    RefToken::lexer(code)
        .spanned()
        .find_map(|(token, range)| match token {
            Ok(RefToken::Reference) => Some(Reference {
                name: &code[range.start + 2..range.end - 2],
                span: Span::from(range),
            }),
            _ => None,
        })
}

/// Find every `%%NAME=` in a code fragment.
///
/// Such text is left alone, but it usually means a label definition was
/// written with its `%%:` missing.
pub fn find_suspected_definitions(code: &str) -> Vec<Span> {
    RefToken::lexer(code)
        .spanned()
        .filter_map(|(token, range)| match token {
            Ok(RefToken::SuspectedDefinition) => Some(Span::from(range)),
            _ => None,
        })
        .collect()
}
