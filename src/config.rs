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

//! Preprocessor configuration.
//!
//! The command line accepts signed numbers so that nonsensical values can be
//! reported as configuration errors instead of usage errors.

use crate::error::{ErrorCode, PreprocessError, Result};

/// Validated settings for a preprocessing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// First automatically assigned line number.
    pub start: u32,
    /// Step between automatically numbered lines. Always positive.
    pub increment: u32,
    /// Remove `REM` comments before numbering.
    pub strip_rems: bool,
}

impl Config {
    /// Validate raw settings.
    ///
    /// `start` defaults to `increment` when not given.
    pub fn new(start: Option<i64>, increment: i64, strip_rems: bool) -> Result<Self> {
        if increment < 1 {
            return Err(PreprocessError::config(
                ErrorCode::InvalidIncrement,
                format!("increment must be positive, got {}", increment),
            ));
        }
        let increment = u32::try_from(increment).map_err(|_| {
            PreprocessError::config(
                ErrorCode::InvalidIncrement,
                format!("increment {} is too large", increment),
            )
        })?;

        let start = match start {
            None => increment,
            Some(start) if start < 0 => {
                return Err(PreprocessError::config(
                    ErrorCode::NegativeStart,
                    format!("start line number must not be negative, got {}", start),
                ));
            }
            Some(start) => u32::try_from(start).map_err(|_| {
                PreprocessError::config(
                    ErrorCode::LineNumberTooLarge,
                    format!("start line number {} is too large", start),
                )
            })?,
        };

        Ok(Self {
            start,
            increment,
            strip_rems,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: 1,
            increment: 1,
            strip_rems: false,
        }
    }
}
