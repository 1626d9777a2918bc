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

//! First pass: number every line and collect label definitions.

use crate::config::Config;
use crate::error::{ErrorCode, PreprocessError, Result, Span};
use crate::labels::{Label, LabelEntry};
use crate::program::{LineAllocator, Program, ProgramLine};
use crate::scanner::{scan_label_definition, split_line_number, strip_comments, LabelDefinition, NO_OP};

/// Run the first pass over the whole source.
///
/// Lines are processed in file order. Label references are left untouched;
/// they are resolved by [`crate::resolver::resolve`] once every line has
/// its final number.
pub fn collect(source: &str, config: &Config) -> Result<Program> {
    let mut program = Program::new(config);
    let mut allocator = LineAllocator::new(config);

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let user = split_line_number(line, line_no)?;
        let (definition, mut content) = scan_label_definition(user.content);
        let mut offset = user.offset + definition.as_ref().map_or(0, |d| d.span.end);

        if config.strip_rems {
            offset += content.len() - content.trim_start().len();
            content = strip_comments(content);
            // Nothing can refer to this line, so it can go.
            if user.number.is_none() && definition.is_none() && content == NO_OP {
                continue;
            }
        }

        if let Some(definition) = &definition {
            define_label(&mut program, definition, user.offset, line_no)?;
        }

        let number = allocator.allocate(user.number, line_no, Span::new(0, user.offset))?;

        program.lines.push(ProgramLine {
            number,
            content: content.to_string(),
            source_line: line_no,
            content_offset: offset,
        });
    }

    Ok(program)
}

/// Record a definition for the line about to be pushed.
fn define_label(
    program: &mut Program,
    definition: &LabelDefinition<'_>,
    offset: usize,
    line_no: usize,
) -> Result<()> {
    let entry = match definition.value {
        Some(value) => LabelEntry::Value(value.to_string()),
        None => LabelEntry::Line(program.lines.len()),
    };

    let label = Label {
        name: definition.name.to_string(),
        entry,
        defined_at: Some(line_no),
    };

    program.labels.define(label).map_err(|existing| {
        let span = Span::new(2, 2 + definition.name.len()).shifted(offset);
        let error = PreprocessError::at_line(
            ErrorCode::DuplicateLabel,
            format!("redefinition of label '{}'", definition.name),
            line_no,
            span,
        );
        match existing.defined_at {
            Some(first) => error.with_hint(format!("first defined on line {}", first)),
            None => error.with_hint(format!("'{}' is predefined", existing.name)),
        }
    })
}
