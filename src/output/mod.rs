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

//! Input and output for the preprocessor.
//!
//! The input is read whole and the numbered program is written in one go,
//! either to a file or to standard output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Name that selects standard input or output instead of a file.
pub const STDIO_NAME: &str = "-";

/// Where the numbered program goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl Destination {
    /// Pick the destination for an optional output path; `-` or no path
    /// means standard output.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new(STDIO_NAME) => Destination::File(path.to_path_buf()),
            _ => Destination::Stdout,
        }
    }

    /// Human readable name for messages.
    pub fn display_name(&self) -> String {
        match self {
            Destination::Stdout => "<stdout>".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }
}

/// Write the output text to its destination.
pub fn write_output(text: &str, destination: &Destination) -> io::Result<()> {
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()
        }
        Destination::File(path) => std::fs::write(path, text),
    }
}

/// Read the whole input; `-` reads standard input.
pub fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new(STDIO_NAME) {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_selection() {
        assert_eq!(Destination::from_path(None), Destination::Stdout);
        assert_eq!(
            Destination::from_path(Some(Path::new("-"))),
            Destination::Stdout
        );
        assert_eq!(
            Destination::from_path(Some(Path::new("out.bas"))),
            Destination::File(PathBuf::from("out.bas"))
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Destination::Stdout.display_name(), "<stdout>");
        assert_eq!(
            Destination::File(PathBuf::from("game.bas")).display_name(),
            "game.bas"
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bas");
        write_output("10PRINT\n", &Destination::File(path.clone())).unwrap();
        assert_eq!(read_input(&path).unwrap(), "10PRINT\n");
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_input(&dir.path().join("missing.bas")).is_err());
    }
}
