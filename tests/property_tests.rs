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

//! Property-based tests for the label preprocessor.
//!
//! These tests verify invariants that should hold for all inputs, using
//! proptest for random input generation.

use basiclabel::scanner::{split_literals, strip_comments, Fragment};
use basiclabel::{preprocess, Config};
use proptest::prelude::*;

/// Content that never starts with a digit and holds no labels or quotes.
const PLAIN_CONTENT: &str = "[A-Z][A-Z =:;+*$]{0,20}";

fn number_and_content(line: &str) -> (u32, &str) {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    (line[..digits].parse().unwrap(), &line[digits..])
}

// ============================================================================
// Scanner Properties
// ============================================================================

proptest! {
    /// Property: Fragments always concatenate back to the original text.
    #[test]
    fn prop_fragments_are_lossless(text in "[ -~]{0,80}") {
        let fragments = split_literals(&text);
        let joined: String = fragments.iter().map(Fragment::as_str).collect();
        prop_assert_eq!(joined, text);
    }

    /// Property: Code and literal fragments alternate, code first.
    #[test]
    fn prop_fragments_alternate(text in "[A-Z\" ]{0,40}") {
        for (index, fragment) in split_literals(&text).iter().enumerate() {
            prop_assert_eq!(fragment.is_literal(), index % 2 == 1);
        }
    }

    /// Property: Literal fragments start with a quote.
    #[test]
    fn prop_literals_are_quoted(text in "[A-Z\":% ]{0,40}") {
        for fragment in split_literals(&text) {
            if let Fragment::Literal(literal) = fragment {
                prop_assert!(literal.starts_with('"'));
            }
        }
    }

    /// Property: Stripping comments never adds text.
    #[test]
    fn prop_strip_comments_shrinks(text in "[A-Z\": ]{0,40}") {
        let stripped = strip_comments(&text);
        prop_assert!(stripped.len() <= text.len().max(1));
    }
}

// ============================================================================
// Numbering Properties
// ============================================================================

proptest! {
    /// Property: Unnumbered lines form an arithmetic progression.
    #[test]
    fn prop_auto_numbering(
        lines in prop::collection::vec(PLAIN_CONTENT, 1..30),
        start in 0i64..1000,
        increment in 1i64..100,
    ) {
        let config = Config::new(Some(start), increment, false).unwrap();
        let output = preprocess(&lines.join("\n"), &config).unwrap();

        let numbered: Vec<&str> = output.lines().collect();
        prop_assert_eq!(numbered.len(), lines.len());
        for (index, (out, input)) in numbered.iter().zip(&lines).enumerate() {
            let (number, content) = number_and_content(out);
            prop_assert_eq!(i64::from(number), start + index as i64 * increment);
            prop_assert_eq!(content, input.as_str());
        }
    }

    /// Property: A label-free program with increasing numbers is unchanged.
    #[test]
    fn prop_round_trip_identity(
        numbers in prop::collection::btree_set(1u32..65000, 0..30),
        content in PLAIN_CONTENT,
    ) {
        let source: String = numbers
            .iter()
            .map(|number| format!("{}{}\n", number, content))
            .collect();
        let output = preprocess(&source, &Config::default()).unwrap();
        prop_assert_eq!(output, source);
    }

    /// Property: References inside string literals are never substituted.
    #[test]
    fn prop_literal_immunity(text in "[A-Z0-9_%]{0,30}") {
        let source = format!("%%L1%%:PRINT \"{}\"", text);
        let output = preprocess(&source, &Config::default()).unwrap();
        prop_assert_eq!(output, format!("1PRINT \"{}\"\n", text));
    }

    /// Property: INCREMENT always expands to the configured increment.
    #[test]
    fn prop_increment_label(
        increment in 1i64..10000,
        padding in 0usize..20,
    ) {
        let mut source = "A\n".repeat(padding);
        source.push_str("X=%%INCREMENT%%");
        let config = Config::new(None, increment, false).unwrap();
        let output = preprocess(&source, &config).unwrap();
        let last = output.lines().last().unwrap();
        let expected_suffix = format!("X={}", increment);
        prop_assert!(last.ends_with(&expected_suffix));
    }

    /// Property: A forward reference resolves to the target's final number.
    #[test]
    fn prop_forward_reference(
        before in 0usize..20,
        between in 0usize..20,
        increment in 1i64..50,
    ) {
        let mut source = "A\n".repeat(before);
        source.push_str("GOTO %%TARGET%%\n");
        source.push_str(&"B\n".repeat(between));
        source.push_str("%%TARGET%%:END\n");

        let config = Config::new(None, increment, false).unwrap();
        let output = preprocess(&source, &config).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        let target = (before + between + 2) as i64 * increment;
        prop_assert_eq!(lines[before], format!("{}GOTO {}", (before + 1) as i64 * increment, target));
        prop_assert_eq!(*lines.last().unwrap(), format!("{}END", target));
    }
}
