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

//! Fuzz target for the whole preprocessor.
//!
//! Uses structured input so that both settings and program text vary.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_preprocess

#![no_main]

use arbitrary::Arbitrary;
use basiclabel::Config;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    start: Option<i64>,
    increment: i64,
    strip_rems: bool,
    source: String,
}

fuzz_target!(|input: Input| {
    if let Ok(config) = Config::new(input.start, input.increment, input.strip_rems) {
        // Must return Ok or Err, never panic or hang
        let _ = basiclabel::preprocess(&input.source, &config);
    }
});
