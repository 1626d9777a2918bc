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

//! basiclabel CLI
//!
//! Resolves symbolic labels in text BBC BASIC programs into line numbers.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use basiclabel::error::{format_error, format_warning, PreprocessError};
use basiclabel::output::{read_input, write_output, Destination, STDIO_NAME};
use basiclabel::{collector, resolver, Config};

/// basiclabel - labels instead of line numbers for BBC BASIC
#[derive(Parser, Debug)]
#[command(name = "basiclabel")]
#[command(author)]
#[command(version)]
#[command(about = "Preprocess text BBC BASIC to allow use of labels instead of line numbers")]
#[command(long_about = r#"
Preprocess text BBC BASIC to allow use of labels instead of line numbers.

Use "%%LABELNAME%%:" at the start of a line to define a label and
"%%LABELNAME%%" to refer to a label. "%%LABELNAME=VALUE%%:" defines a
label that expands to VALUE. "%%INCREMENT%%" is the line number increment.

Lines without a line number are numbered automatically.

Example usage:
  basiclabel game.bas game-numbered.bas
  basiclabel -i 10 -r game.bas > game-numbered.bas
  cat game.bas | basiclabel -
"#)]
struct Cli {
    /// Text (not tokenised) BBC BASIC program to preprocess; `-` reads standard input
    #[arg(value_name = "INFILE")]
    input_file: PathBuf,

    /// File to write preprocessed output to (defaults to standard output)
    #[arg(value_name = "OUTFILE")]
    output_file: Option<PathBuf>,

    /// Start line numbering with line N (defaults to the increment)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    start: Option<i64>,

    /// Increment line numbers in steps of N
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    increment: i64,

    /// Strip REMs (BASIC comments) from the input
    #[arg(short = 'r', long)]
    strip_rems: bool,

    /// Print progress messages to standard error
    #[arg(short, long)]
    verbose: bool,

    /// Do not print warnings
    #[arg(short = 'W', long)]
    no_warnings: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::new(cli.start, cli.increment, cli.strip_rems) {
        Ok(config) => config,
        Err(e) => return report_error(&e, "", ""),
    };

    let destination = Destination::from_path(cli.output_file.as_deref());
    let input_name = input_display_name(&cli.input_file);

    // Progress goes to stderr, stdout may be the output
    if cli.verbose {
        eprintln!("basiclabel v{}", basiclabel::VERSION);
        eprintln!("Input: {}", input_name);
        eprintln!("Output: {}", destination.display_name());
        eprintln!(
            "Numbering from {} in steps of {}{}",
            config.start,
            config.increment,
            if config.strip_rems {
                ", stripping REMs"
            } else {
                ""
            }
        );
    }

    let source = match read_input(&cli.input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", input_name, e);
            return ExitCode::from(3);
        }
    };

    if cli.verbose {
        eprintln!("Collecting labels...");
    }

    let program = match collector::collect(&source, &config) {
        Ok(program) => program,
        Err(e) => return report_error(&e, &source, &input_name),
    };

    if cli.verbose {
        eprintln!(
            "Numbered {} lines, {} labels defined",
            program.len(),
            program
                .labels
                .iter()
                .filter(|label| label.defined_at.is_some())
                .count()
        );
        eprintln!("Resolving references...");
    }

    let resolved = match resolver::resolve(&program) {
        Ok(resolved) => resolved,
        Err(e) => return report_error(&e, &source, &input_name),
    };

    // Warnings don't prevent output
    if !cli.no_warnings {
        for warning in &resolved.warnings {
            eprint!("{}", format_warning(warning, &source, Some(&input_name)));
        }
    }

    if let Err(e) = write_output(&resolved.render(), &destination) {
        eprintln!("Error: Cannot write {}: {}", destination.display_name(), e);
        return ExitCode::from(4);
    }

    if cli.verbose {
        eprintln!("Done!");
    }

    ExitCode::SUCCESS
}

/// Print an error and return the exit code for it.
fn report_error(error: &PreprocessError, source: &str, input_name: &str) -> ExitCode {
    if error.code.is_configuration() {
        eprint!("{}", format_error(error, "", None));
        eprintln!("Try '--help' for more information.");
    } else {
        eprint!("{}", format_error(error, source, Some(input_name)));
    }
    ExitCode::from(1)
}

/// Name used for the input in messages.
fn input_display_name(path: &Path) -> String {
    if path == Path::new(STDIO_NAME) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
