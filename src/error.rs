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

//! Error and warning types for the label preprocessor.
//!
//! Every failure carries the 1-based input line it was detected on, so the
//! driver can report `FILE:LINE:` without any global state.

use std::ops::Range;
use thiserror::Error;

/// A byte range inside a single source line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Move the span right by `offset` bytes.
    pub fn shifted(&self, offset: usize) -> Span {
        Span::new(self.start + offset, self.end + offset)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration errors (E001-E099)
    InvalidIncrement,
    NegativeStart,

    // Line numbering errors (E100-E199)
    LineNumberRegression,
    LineNumberTooLarge,

    // Label errors (E200-E299)
    DuplicateLabel,
    UnresolvedLabel,
    RecursiveLabel,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidIncrement => "E001",
            ErrorCode::NegativeStart => "E002",
            ErrorCode::LineNumberRegression => "E100",
            ErrorCode::LineNumberTooLarge => "E101",
            ErrorCode::DuplicateLabel => "E200",
            ErrorCode::UnresolvedLabel => "E201",
            ErrorCode::RecursiveLabel => "E202",
        }
    }

    /// Whether this error comes from the configuration rather than the input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ErrorCode::InvalidIncrement | ErrorCode::NegativeStart)
    }
}

/// A preprocessing error.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct PreprocessError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The 1-based input line, absent for configuration errors.
    pub line: Option<usize>,
    /// The offending bytes within that line.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl PreprocessError {
    /// Create an error that is not tied to an input line.
    pub fn config(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
            span: Span::default(),
            hint: None,
        }
    }

    /// Create an error located on a 1-based input line.
    pub fn at_line(code: ErrorCode, message: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            line: Some(line),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Result type for preprocessor operations.
pub type Result<T> = std::result::Result<T, PreprocessError>;

/// Warning codes for the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    LineNumberOutOfRange,
    SuspectedDefinition,
}

impl WarningCode {
    /// Get the code string for this warning.
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LineNumberOutOfRange => "W001",
            WarningCode::SuspectedDefinition => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// The warning code.
    pub code: WarningCode,
    /// The warning message.
    pub message: String,
    /// The 1-based input line.
    pub line: usize,
    /// The suspicious bytes within that line.
    pub span: Span,
}

impl Warning {
    /// Create a new warning.
    pub fn new(code: WarningCode, message: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            span,
        }
    }
}

/// Fetch the text of a 1-based line, or an empty string past the end.
fn source_line(source: &str, line: usize) -> &str {
    source.lines().nth(line.saturating_sub(1)).unwrap_or("")
}

/// Render the offending line with a caret underline below the span.
fn push_context(output: &mut String, source: &str, line: usize, span: &Span) {
    let content = source_line(source, line);
    let width = line.to_string().len();

    let start = span.start.min(content.len());
    let column = content
        .get(..start)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    let underline = content
        .get(start..span.end.min(content.len()))
        .map(|s| s.chars().count())
        .unwrap_or(0)
        .max(1);

    output.push_str(&format!("{:>width$} |\n", "", width = width));
    output.push_str(&format!("{:>width$} | {}\n", line, content, width = width));
    output.push_str(&format!(
        "{:>width$} | {:>column$}{}\n",
        "",
        "",
        "^".repeat(underline),
        width = width,
        column = column
    ));
}

/// Format an error with source context.
///
/// The first line keeps the classic `FILE:LINE: error: MESSAGE` shape so
/// editors can jump to the location.
pub fn format_error(error: &PreprocessError, source: &str, filename: Option<&str>) -> String {
    let filename = filename.unwrap_or("<input>");
    let mut output = String::new();

    match error.line {
        Some(line) => {
            output.push_str(&format!(
                "{}:{}: error[{}]: {}\n",
                filename,
                line,
                error.code_str(),
                error.message
            ));
            push_context(&mut output, source, line, &error.span);
        }
        None => {
            output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));
        }
    }

    if let Some(hint) = &error.hint {
        output.push_str(&format!("  = hint: {}\n", hint));
    }

    output
}

/// Format a warning with source context.
pub fn format_warning(warning: &Warning, source: &str, filename: Option<&str>) -> String {
    let filename = filename.unwrap_or("<input>");
    let mut output = format!(
        "{}:{}: warning[{}]: {}\n",
        filename,
        warning.line,
        warning.code.code(),
        warning.message
    );
    push_context(&mut output, source, warning.line, &warning.span);
    output
}
