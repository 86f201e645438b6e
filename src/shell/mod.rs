//! Shell session
//!
//! A [`Shell`] owns the environment buffer and the last submitted line, and
//! routes every submission to the buffer manager or to query evaluation.
//! Front ends feed it lines and supply a [`Console`]; they never touch the
//! buffer directly.
//!
//! ```text
//!   line_available(line)
//!        |
//!        +-- only whitespace ------------------------> (nothing)
//!        |
//!        +-- add_history unless same as previous line
//!        |
//!        +-- Blank ----------------------------------> (nothing)
//!        +-- EnvironmentSetup --> store_in_buffer ----> validate_code
//!        +-- Query ---------------------------------> eval_tmp
//! ```

pub mod buffer;
pub mod console;
pub mod splash;

use std::collections::BTreeSet;

use tracing::debug;

use crate::backends::{Backend, CancelFlag};
use crate::frontend::{classify, Classification};
use crate::util::config::Config;

pub use buffer::EnvironmentBuffer;
pub use console::{Console, Output, RecordingConsole};

/// One interactive session
#[derive(Debug)]
pub struct Shell<B: Backend> {
    backend: B,
    config: Config,
    buffer: EnvironmentBuffer,
    prev_line: String,
    cancel: CancelFlag,
}

impl<B: Backend> Shell<B> {
    pub fn new(
        backend: B,
        config: Config,
    ) -> Self {
        Self {
            backend,
            config,
            buffer: EnvironmentBuffer::new(),
            prev_line: String::new(),
            cancel: CancelFlag::new(),
        }
    }

    /// The validated environment
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    /// The last line recorded in the history
    pub fn prev_line(&self) -> &str {
        &self.prev_line
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn prompt(&self) -> &str {
        &self.config.repl.prompt
    }

    pub fn display_splash(
        &self,
        console: &mut dyn Console,
    ) {
        let based_on = self.backend.describe(&self.config);
        let banner = splash::splash_lines(
            crate::NAME,
            crate::VERSION,
            based_on.as_deref(),
            console.width(),
        )
        .join("\n");
        console.display_normal(&banner);

        if self.config.verbose {
            console.display_normal("//\n// Verbose mode: ON\n//");
        }
    }

    /// Handle one submitted line
    pub fn line_available(
        &mut self,
        line: &str,
        console: &mut dyn Console,
    ) {
        if line.trim().is_empty() {
            return;
        }

        if line != self.prev_line {
            console.add_history(line);
            self.prev_line = line.to_string();
        }

        match classify(line) {
            Classification::Blank => {}
            Classification::EnvironmentSetup => {
                self.store_in_buffer(line, console);
            }
            Classification::Query => {
                self.cancel.clear();
                let result =
                    self.backend
                        .eval_tmp(self.buffer.as_str(), line, &self.config, &self.cancel);
                console.display_result(&result);
            }
        }
    }

    /// Append `line` to the environment if the backend accepts the result
    ///
    /// The result is displayed either way. Returns whether the buffer was
    /// extended; on `false` it is exactly as before.
    pub fn store_in_buffer(
        &mut self,
        line: &str,
        console: &mut dyn Console,
    ) -> bool {
        let candidate = self.buffer.candidate(line);
        self.cancel.clear();
        let result = self
            .backend
            .validate_code(&candidate, &self.config, &self.cancel);
        console.display_result(&result);

        if result.has_errors() {
            debug!(errors = result.errors.len(), "environment rejected");
            false
        } else {
            self.buffer.commit(candidate);
            debug!(len = self.buffer.as_str().len(), "environment extended");
            true
        }
    }

    /// Ask the backend for completions of `edited_text` up to `cursor`
    ///
    /// `cursor` is a byte offset; it is clamped to the text and moved back to
    /// the nearest char boundary.
    pub fn code_complete(
        &self,
        edited_text: &str,
        cursor: usize,
        out: &mut BTreeSet<String>,
    ) {
        let mut end = cursor.min(edited_text.len());
        while !edited_text.is_char_boundary(end) {
            end -= 1;
        }
        let prefix = &edited_text[..end];
        self.backend
            .code_complete(self.buffer.as_str(), prefix, &self.config, out);
    }

    /// Interrupt the backend call in progress, if any
    ///
    /// Safe to call at any time. Neither the buffer nor the previous line
    /// change.
    pub fn cancel_operation(&self) {
        self.cancel.raise();
    }

    /// Handle for raising the cancel flag from another thread
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }
}

#[cfg(test)]
mod tests;
