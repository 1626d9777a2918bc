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

//! Second pass: replace label references with their values.
//!
//! The program is only read here. Output is assembled in memory so that an
//! error on any line means no output at all.

use crate::error::{ErrorCode, PreprocessError, Result, Span, Warning, WarningCode};
use crate::labels::LabelEntry;
use crate::program::{Program, ProgramLine};
use crate::scanner::{find_reference, find_suspected_definitions, split_literals, Fragment};

/// Highest line number BBC BASIC accepts.
pub const MAX_BASIC_LINE: u32 = 32767;

/// Passes allowed over one code fragment. A pass only repeats when a
/// reference was formed across the edge of a substituted value.
pub const MAX_PASSES: usize = 64;

const SUSPECTED_DEFINITION: &str =
    "this looks like a label definition, but definitions must start the line and end with '%%:'";

/// The fully numbered program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Output lines, each starting with its number.
    pub lines: Vec<String>,
    /// Diagnostics that did not stop the run.
    pub warnings: Vec<Warning>,
}

impl Resolved {
    /// Join the lines, each terminated by a newline.
    pub fn render(&self) -> String {
        self.lines.iter().fold(String::new(), |mut output, line| {
            output.push_str(line);
            output.push('\n');
            output
        })
    }
}

/// Run the second pass.
pub fn resolve(program: &Program) -> Result<Resolved> {
    let mut resolved = Resolved::default();

    for line in &program.lines {
        if line.number > MAX_BASIC_LINE {
            resolved.warnings.push(Warning::new(
                WarningCode::LineNumberOutOfRange,
                format!(
                    "line number {} exceeds {}, the largest BBC BASIC line number",
                    line.number, MAX_BASIC_LINE
                ),
                line.source_line,
                Span::default(),
            ));
        }

        let mut output = line.number.to_string();
        let mut position = line.content_offset;

        for fragment in split_literals(&line.content) {
            match fragment {
                Fragment::Code(code) => {
                    for span in find_suspected_definitions(code) {
                        resolved.warnings.push(Warning::new(
                            WarningCode::SuspectedDefinition,
                            SUSPECTED_DEFINITION,
                            line.source_line,
                            span.shifted(position),
                        ));
                    }
                    output.push_str(&substitute(code, program, line, position)?);
                }
                Fragment::Literal(literal) => output.push_str(literal),
            }
            position += fragment.as_str().len();
        }

        resolved.lines.push(output);
    }

    Ok(resolved)
}

/// Replace references in one code fragment until none are left.
///
/// Each pass expands references left to right. Characters next to a
/// substituted value can form a new reference with it, so the result is
/// scanned again until a pass leaves nothing to replace.
fn substitute(code: &str, program: &Program, line: &ProgramLine, offset: usize) -> Result<String> {
    let mut expander = Expander {
        program,
        line,
        code,
        offset,
        active: Vec::new(),
    };
    let mut text = code.to_string();

    for _ in 0..MAX_PASSES {
        if find_reference(&text).is_none() {
            return Ok(text);
        }
        text = expander.expand(&text)?;
    }

    match find_reference(&text) {
        Some(reference) => Err(expander.runaway(reference.name)),
        None => Ok(text),
    }
}

/// Expands the references of one code fragment.
struct Expander<'a> {
    program: &'a Program,
    line: &'a ProgramLine,
    code: &'a str,
    offset: usize,
    /// Value labels being expanded, innermost last.
    active: Vec<&'a str>,
}

impl<'a> Expander<'a> {
    /// Replace every reference in `text`, expanding value labels in place.
    fn expand(&mut self, text: &str) -> Result<String> {
        let program: &'a Program = self.program;
        let mut output = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(reference) = find_reference(rest) {
            output.push_str(&rest[..reference.span.start]);

            let label = match program.labels.lookup(reference.name) {
                Some(label) => label,
                None => {
                    return Err(unresolved(
                        reference.name,
                        self.code,
                        program,
                        self.line,
                        self.offset,
                    ))
                }
            };

            match &label.entry {
                LabelEntry::Line(index) => {
                    output.push_str(&program.lines[*index].number.to_string());
                }
                LabelEntry::Value(value) => {
                    if self.active.contains(&label.name.as_str()) {
                        return Err(self.runaway(&label.name));
                    }
                    self.active.push(&label.name);
                    let expanded = self.expand(value)?;
                    self.active.pop();
                    output.push_str(&expanded);
                }
            }

            rest = &rest[reference.span.end..];
        }

        output.push_str(rest);
        Ok(output)
    }

    /// Build the error for a value label that expands to itself.
    fn runaway(&self, name: &str) -> PreprocessError {
        PreprocessError::at_line(
            ErrorCode::RecursiveLabel,
            format!("expansion of label '{}' does not terminate", name),
            self.line.source_line,
            Span::new(0, self.code.len()).shifted(self.offset),
        )
        .with_hint("a value label must not expand to a reference to itself")
    }
}

/// Build the error for an undefined label.
fn unresolved(
    name: &str,
    code: &str,
    program: &Program,
    line: &ProgramLine,
    offset: usize,
) -> PreprocessError {
    // The reference may come from an expanded value rather than the source
    let span = code
        .find(&format!("%%{}%%", name))
        .map(|start| Span::new(start, start + name.len() + 4))
        .unwrap_or_else(|| Span::new(0, code.len()))
        .shifted(offset);

    let error = PreprocessError::at_line(
        ErrorCode::UnresolvedLabel,
        format!("unrecognised label '{}'", name),
        line.source_line,
        span,
    );

    match program
        .labels
        .iter()
        .find(|label| label.name.eq_ignore_ascii_case(name))
    {
        Some(label) => error.with_hint(format!("did you mean '{}'?", label.name)),
        None => error.with_hint(format!(
            "define it with '%%{}%%:' at the start of a line",
            name
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::collect;
    use crate::config::Config;

    fn run(source: &str, increment: i64) -> Result<Resolved> {
        let config = Config::new(None, increment, false).unwrap();
        resolve(&collect(source, &config)?)
    }

    #[test]
    fn test_forward_reference() {
        let resolved = run("GOTO %%END%%\nPRINT\n%%END%%:END", 10).unwrap();
        assert_eq!(resolved.lines, vec!["10GOTO 30", "20PRINT", "30END"]);
    }

    #[test]
    fn test_backward_reference() {
        let resolved = run("%%L1%%:PRINT\"hi\"\nGOTO %%L1%%", 10).unwrap();
        assert_eq!(resolved.lines, vec!["10PRINT\"hi\"", "20GOTO 10"]);
    }

    #[test]
    fn test_multiple_references_in_fragment() {
        let resolved = run("%%A%%:X\n%%B%%:Y\nON N GOTO %%A%%,%%B%%", 1).unwrap();
        assert_eq!(resolved.lines[2], "3ON N GOTO 1,2");
    }

    #[test]
    fn test_literal_is_untouched() {
        let resolved = run("%%L1%%:PRINT \"%%L1%%\";%%L1%%", 1).unwrap();
        assert_eq!(resolved.lines[0], "1PRINT \"%%L1%%\";1");
    }

    #[test]
    fn test_increment_label() {
        let resolved = run("PRINT %%INCREMENT%%", 7).unwrap();
        assert_eq!(resolved.lines[0], "7PRINT 7");
    }

    #[test]
    fn test_value_label_is_verbatim() {
        let resolved = run("%%ADDR=&7C00%%:\nP%=%%ADDR%%", 1).unwrap();
        assert_eq!(resolved.lines, vec!["1:", "2P%=&7C00"]);
    }

    #[test]
    fn test_value_label_expands_further() {
        let resolved = run("%%A=%%B%%%%:\n%%B%%:X\nGOTO %%A%%", 1).unwrap();
        assert_eq!(resolved.lines[2], "3GOTO 2");
    }

    #[test]
    fn test_unresolved_label() {
        let err = run("PRINT\nGOTO %%NOWHERE%%", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnresolvedLabel);
        assert_eq!(err.message, "unrecognised label 'NOWHERE'");
        assert_eq!(err.line, Some(2));
        assert_eq!(err.span, Span::new(5, 16));
    }

    #[test]
    fn test_unresolved_label_hint() {
        let err = run("%%Loop%%:X\nGOTO %%LOOP%%", 1).unwrap_err();
        assert_eq!(err.hint.as_deref(), Some("did you mean 'Loop'?"));
    }

    #[test]
    fn test_recursive_value_label() {
        let err = run("%%A=%%A%%%%:\nX=%%A%%", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::RecursiveLabel);
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn test_indirect_recursion() {
        let err = run("%%A=%%B%%%%:\n%%B=(%%A%%)%%:\nX=%%A%%", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::RecursiveLabel);
        assert_eq!(err.message, "expansion of label 'A' does not terminate");
        assert_eq!(err.line, Some(3));
    }

    #[test]
    fn test_many_references_to_one_value() {
        let references = vec!["%%A%%"; 5000].join("+");
        let resolved = run(&format!("%%A=1%%:\nX={}", references), 1).unwrap();
        assert_eq!(resolved.lines[1], format!("2X={}", vec!["1"; 5000].join("+")));
    }

    #[test]
    fn test_value_used_twice_in_another_value() {
        let resolved = run("%%A=2%%:\n%%B=%%A%%*%%A%%%%:\nX=%%B%%+%%B%%", 1).unwrap();
        assert_eq!(resolved.lines[2], "3X=2*2+2*2");
    }

    #[test]
    fn test_reference_formed_by_substitution() {
        let err = run("%%A%%:X\nPRINT %%%%A%%%%", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnresolvedLabel);
        assert_eq!(err.message, "unrecognised label '1'");
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn test_value_completing_a_reference() {
        let resolved = run("%%A=%%A%%:\nX=%%A%%%%", 1).unwrap();
        assert_eq!(resolved.lines, vec!["1:", "2X=%%A"]);
    }

    #[test]
    fn test_line_number_warning() {
        let resolved = run("32767A\nB", 1).unwrap();
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(resolved.warnings[0].code, WarningCode::LineNumberOutOfRange);
        assert_eq!(resolved.warnings[0].line, 2);
    }

    #[test]
    fn test_suspected_definition_warning() {
        let resolved = run("%%MAX=10%%\nPRINT \"%%X=1%%\"", 1).unwrap();
        assert_eq!(resolved.lines, vec!["1%%MAX=10%%", "2PRINT \"%%X=1%%\""]);
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(resolved.warnings[0].code, WarningCode::SuspectedDefinition);
        assert_eq!(resolved.warnings[0].span, Span::new(0, 6));
    }

    #[test]
    fn test_render() {
        let resolved = run("A\nB", 10).unwrap();
        assert_eq!(resolved.render(), "10A\n20B\n");
        assert_eq!(Resolved::default().render(), "");
    }
}
