//! Environment buffer
//!
//! The accumulated declarations every query is evaluated against. Text only
//! ever enters through [`EnvironmentBuffer::commit`] after the backend has
//! accepted it.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBuffer {
    text: String,
}

impl EnvironmentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The buffer as it would be with `line` appended
    pub fn candidate(
        &self,
        line: &str,
    ) -> String {
        if self.text.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{}", self.text, line)
        }
    }

    /// Replace the contents with a validated candidate
    pub fn commit(
        &mut self,
        candidate: String,
    ) {
        self.text = candidate;
    }
}

impl fmt::Display for EnvironmentBuffer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}
