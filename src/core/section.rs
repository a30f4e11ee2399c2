//! Sections of a rendered log block
//!
//! A block is a sequence of sections. Each section has an optional title and
//! a set of uniquely named fields, and renders to indented text:
//!
//! ```text
//! |	File
//! |		Name: main.rs
//! |		Line: 12
//! ```

use serde::Serialize;
use std::fmt;

/// Prefix of every line inside a block
const LINE_MARKER: char = '|';

/// A titled or untitled group of labeled fields
///
/// Fields keep their insertion order for rendering. Two sections are equal
/// when their titles match and they hold the same fields with the same values,
/// in any order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Section {
    title: Option<String>,
    fields: Vec<(String, String)>,
}

impl Section {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            fields: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            fields: Vec::new(),
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    /// Add a field, overwriting the value of an existing field with that name
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a field (mutable version)
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let name = name.into();
        let value = value.to_string();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the section has neither a title nor fields
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.fields.is_empty()
    }

    /// Render the section as indented block text
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output);
        output
    }

    pub(crate) fn render_into(&self, output: &mut String) {
        let field_depth = match &self.title {
            Some(title) => {
                push_line(output, 1, title);
                2
            }
            None => 1,
        };

        for (name, value) in &self.fields {
            push_line(output, field_depth, &format!("{}: {}", name, value));
        }
    }
}

fn push_line(output: &mut String, depth: usize, content: &str) {
    output.push(LINE_MARKER);
    for _ in 0..depth {
        output.push('\t');
    }
    output.push_str(content);
    output.push('\n');
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(key, value)| other.get(key) == Some(value.as_str()))
    }
}

impl Eq for Section {}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
