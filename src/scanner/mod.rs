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

//! Line-level scanning for the label preprocessor.
//!
//! This module recognises the few pieces of syntax the preprocessor cares
//! about inside a single physical line:
//! - A leading user-supplied line number
//! - A label definition marker (`%%NAME%%:` or `%%NAME=VALUE%%:`)
//! - `REM` comments
//! - Double-quoted string literals (with `""` as an escaped quote)
//! - Label references (`%%NAME%%`)
//!
//! Nothing else of BASIC is parsed.

mod comments;
mod helpers;
mod line;
mod literals;
mod references;

pub use comments::strip_comments;
pub use line::{scan_label_definition, split_line_number, LabelDefinition, UserLine};
pub use literals::{split_literals, Fragment};
pub use references::{find_reference, find_suspected_definitions, Reference};

/// Content substituted for a line whose user content disappeared.
///
/// A lone colon is an empty BASIC statement, so the line keeps its number.
pub const NO_OP: &str = ":";

/// Check whether a character may appear in a label name.
pub fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A forward-only character cursor over one line of text.
pub struct Cursor<'source> {
    /// The text being scanned.
    source: &'source str,
    /// Current byte position in the text.
    position: usize,
}

impl<'source> Cursor<'source> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            position: 0,
        }
    }
}
