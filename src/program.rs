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

//! The numbered program built by the first pass.

use crate::config::Config;
use crate::error::{ErrorCode, PreprocessError, Result, Span};
use crate::labels::LabelTable;

/// One output line with its final number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLine {
    /// The final line number.
    pub number: u32,
    /// The user content, still containing label references.
    pub content: String,
    /// 1-based input line this entry came from.
    pub source_line: usize,
    /// Byte offset of `content` within the input line.
    pub content_offset: usize,
}

/// The handoff from the first pass to the second: all lines in file order
/// and every label definition.
#[derive(Debug, Clone)]
pub struct Program {
    pub lines: Vec<ProgramLine>,
    pub labels: LabelTable,
}

impl Program {
    /// Create an empty program with only the predefined labels.
    pub fn new(config: &Config) -> Self {
        Self {
            lines: Vec::new(),
            labels: LabelTable::new(config.increment),
        }
    }

    /// Number of lines in the program.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Hands out line numbers in increasing order.
#[derive(Debug, Clone)]
pub struct LineAllocator {
    /// Next automatically assigned number. Wider than a line number so that
    /// running off the end is only an error if it is actually used.
    next_auto: u64,
    increment: u64,
}

impl LineAllocator {
    /// Create an allocator starting at the configured start value.
    pub fn new(config: &Config) -> Self {
        Self {
            next_auto: u64::from(config.start),
            increment: u64::from(config.increment),
        }
    }

    /// The number the next unnumbered line would get.
    pub fn next_auto(&self) -> u64 {
        self.next_auto
    }

    /// Assign a number to a line.
    ///
    /// An explicit number must not be below the next automatic number.
    /// `line_no` and `span` locate the line (and its digits) for errors.
    pub fn allocate(&mut self, explicit: Option<u32>, line_no: usize, span: Span) -> Result<u32> {
        let number = match explicit {
            Some(number) if u64::from(number) < self.next_auto => {
                return Err(PreprocessError::at_line(
                    ErrorCode::LineNumberRegression,
                    format!(
                        "user-supplied line number {} is less than next automatic line number {}",
                        number, self.next_auto
                    ),
                    line_no,
                    span,
                )
                .with_hint("line numbers must increase; remove the number or raise it"));
            }
            Some(number) => number,
            None => u32::try_from(self.next_auto).map_err(|_| {
                PreprocessError::at_line(
                    ErrorCode::LineNumberTooLarge,
                    format!("automatic line number {} is too large", self.next_auto),
                    line_no,
                    span,
                )
            })?,
        };

        self.next_auto = u64::from(number) + self.increment;
        Ok(number)
    }
}
