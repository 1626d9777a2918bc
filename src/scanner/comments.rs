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

//! `REM` comment stripping.

use super::helpers::CursorHelpers;
use super::{Cursor, NO_OP};

const REM: &str = "REM";

/// Remove `REM` comments from a line's content.
///
/// Leading whitespace is always dropped. A line that is entirely a comment
/// becomes [`NO_OP`]; an in-line comment introduced by `:` outside a string
/// literal is cut off together with its colon.
pub fn strip_comments(text: &str) -> &str {
    let text = text.trim_start();
    if text.starts_with(REM) {
        return NO_OP;
    }

    let mut cursor = Cursor::new(text);
    while let Some(c) = cursor.advance() {
        match c {
            '"' => {
                cursor.skip_string_literal();
            }
            ':' if cursor.rest().trim_start().starts_with(REM) => {
                let kept = &text[..cursor.position() - 1];
                return if kept.trim().is_empty() { NO_OP } else { kept };
            }
            _ => {}
        }
    }

    text
}
