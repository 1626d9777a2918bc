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

//! Fuzz target for the line scanner.
//!
//! Feeds random text to every scanner function to find panics, and checks
//! that splitting at string literals never loses text.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_scanner
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_scanner -- -max_total_time=60

#![no_main]

use basiclabel::scanner;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = scanner::split_line_number(line, 1);
        let _ = scanner::scan_label_definition(line);
        let _ = scanner::strip_comments(line);
        let _ = scanner::find_reference(line);
        let _ = scanner::find_suspected_definitions(line);

        let joined: String = scanner::split_literals(line)
            .iter()
            .map(|fragment| fragment.as_str())
            .collect();
        assert_eq!(joined, line);
    }
});
