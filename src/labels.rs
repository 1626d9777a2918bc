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

//! The label table.
//!
//! Labels are collected during the first pass and only read afterwards.

use std::collections::HashMap;

/// Name of the pseudo-label that always expands to the increment.
pub const INCREMENT: &str = "INCREMENT";

/// What a label stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEntry {
    /// Index of the program line the label was defined on.
    Line(usize),
    /// Text substituted verbatim.
    Value(String),
}

/// A label together with the input line that defined it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// The label name.
    pub name: String,
    /// The label's target.
    pub entry: LabelEntry,
    /// 1-based input line of the definition, `None` for predefined labels.
    pub defined_at: Option<usize>,
}

/// Mapping from label name to its definition.
#[derive(Debug, Clone)]
pub struct LabelTable {
    labels: HashMap<String, Label>,
}

impl LabelTable {
    /// Create a table holding only the predefined `INCREMENT` label.
    pub fn new(increment: u32) -> Self {
        let mut labels = HashMap::new();
        labels.insert(
            INCREMENT.to_string(),
            Label {
                name: INCREMENT.to_string(),
                entry: LabelEntry::Value(increment.to_string()),
                defined_at: None,
            },
        );
        Self { labels }
    }

    /// Define a label. Fails with the existing definition if the name is
    /// already taken.
    pub fn define(&mut self, label: Label) -> Result<(), Label> {
        if let Some(existing) = self.labels.get(&label.name) {
            return Err(existing.clone());
        }
        self.labels.insert(label.name.clone(), label);
        Ok(())
    }

    /// Look up a label by name.
    pub fn lookup(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    /// Number of labels, including the predefined ones.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the table is empty. It never is, because of `INCREMENT`.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over all labels in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_label(name: &str, index: usize) -> Label {
        Label {
            name: name.to_string(),
            entry: LabelEntry::Line(index),
            defined_at: Some(index + 1),
        }
    }

    #[test]
    fn test_increment_is_predefined() {
        let table = LabelTable::new(10);
        let label = table.lookup(INCREMENT).unwrap();
        assert_eq!(label.entry, LabelEntry::Value("10".to_string()));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_define_and_lookup() {
        let mut table = LabelTable::new(1);
        table.define(line_label("LOOP", 3)).unwrap();
        let label = table.lookup("LOOP").unwrap();
        assert_eq!(label.entry, LabelEntry::Line(3));
        assert!(table.lookup("loop").is_none());
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn test_redefinition_is_rejected() {
        let mut table = LabelTable::new(1);
        table.define(line_label("LOOP", 0)).unwrap();
        let existing = table.define(line_label("LOOP", 5)).unwrap_err();
        assert_eq!(existing.defined_at, Some(1));
        assert_eq!(table.lookup("LOOP").unwrap().entry, LabelEntry::Line(0));
    }

    #[test]
    fn test_increment_cannot_be_redefined() {
        let mut table = LabelTable::new(1);
        let existing = table
            .define(Label {
                name: INCREMENT.to_string(),
                entry: LabelEntry::Value("5".to_string()),
                defined_at: Some(1),
            })
            .unwrap_err();
        assert_eq!(existing.defined_at, None);
    }
}
