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

//! basiclabel Library
//!
//! Resolves symbolic labels in line-numbered BBC BASIC text programs.
//!
//! A line may start with a label definition, `%%NAME%%:` to name the line
//! itself or `%%NAME=VALUE%%:` to name a constant, and any code may refer to
//! a label as `%%NAME%%`. Lines without a number get one from an
//! auto-incrementing counter.
//!
//! # Modules
//!
//! - [`error`] - Error and warning types and their formatting
//! - [`config`] - Validated run settings
//! - [`scanner`] - Line-level syntax: numbers, definitions, comments, literals
//! - [`labels`] - The label table
//! - [`program`] - Numbered program lines and the line number allocator
//! - [`collector`] - First pass
//! - [`resolver`] - Second pass
//! - [`output`] - Reading the input and writing the result
//!
//! # Example
//!
//! ```
//! use basiclabel::Config;
//!
//! let source = "%%LOOP%%:PRINT \"HELLO\"\nGOTO %%LOOP%%\n";
//! let config = Config::new(None, 10, false).unwrap();
//! let output = basiclabel::preprocess(source, &config).unwrap();
//! assert_eq!(output, "10PRINT \"HELLO\"\n20GOTO 10\n");
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod labels;
pub mod output;
pub mod program;
pub mod resolver;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{
    format_error, format_warning, ErrorCode, PreprocessError, Result, Span, Warning, WarningCode,
};
pub use program::{Program, ProgramLine};

/// The version of the preprocessor.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the preprocessor.
pub const NAME: &str = "basiclabel";

/// Preprocess a whole program.
///
/// Returns the numbered program with every label resolved, one line per
/// program line, each terminated by a newline. Nothing is returned unless
/// the entire input is valid.
pub fn preprocess(source: &str, config: &Config) -> Result<String> {
    preprocess_with_warnings(source, config).map(|(output, _)| output)
}

/// Preprocess a whole program and also return the warnings.
pub fn preprocess_with_warnings(source: &str, config: &Config) -> Result<(String, Vec<Warning>)> {
    let program = collector::collect(source, config)?;
    let resolved = resolver::resolve(&program)?;
    Ok((resolved.render(), resolved.warnings))
}
