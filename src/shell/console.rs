//! Presentation side of a shell session

use crate::backends::EvalResult;

/// Where a session sends its output and history
///
/// The `display_*` methods are only called with non-empty text.
pub trait Console {
    fn display_normal(
        &mut self,
        text: &str,
    );

    fn display_info(
        &mut self,
        text: &str,
    );

    fn display_error(
        &mut self,
        text: &str,
    );

    /// Record a submitted line in the history
    fn add_history(
        &mut self,
        line: &str,
    );

    /// Terminal width in columns
    fn width(&self) -> usize;

    /// Show a backend result: info first, then each error, and the output
    /// only when there were no errors
    fn display_result(
        &mut self,
        result: &EvalResult,
    ) {
        if !result.info.is_empty() {
            self.display_info(&result.info);
        }
        for error in result.errors.iter().filter(|e| !e.is_empty()) {
            self.display_error(error);
        }
        if !result.has_errors() && !result.output.is_empty() {
            self.display_normal(&result.output);
        }
    }
}

/// One display call captured by [`RecordingConsole`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Normal(String),
    Info(String),
    Error(String),
}

/// Console that keeps everything it is given, for tests and scripting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingConsole {
    outputs: Vec<Output>,
    history: Vec<String>,
    width: usize,
}

impl Default for RecordingConsole {
    fn default() -> Self {
        Self::with_width(80)
    }
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            outputs: Vec::new(),
            history: Vec::new(),
            width,
        }
    }

    /// Display calls in the order they were made
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn normal(&self) -> Vec<&str> {
        self.select(|o| match o {
            Output::Normal(s) => Some(s),
            _ => None,
        })
    }

    pub fn info(&self) -> Vec<&str> {
        self.select(|o| match o {
            Output::Info(s) => Some(s),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.select(|o| match o {
            Output::Error(s) => Some(s),
            _ => None,
        })
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.outputs.clear();
        self.history.clear();
    }

    fn select<'a>(
        &'a self,
        f: impl Fn(&'a Output) -> Option<&'a String>,
    ) -> Vec<&'a str> {
        self.outputs.iter().filter_map(f).map(String::as_str).collect()
    }
}

impl Console for RecordingConsole {
    fn display_normal(
        &mut self,
        text: &str,
    ) {
        self.outputs.push(Output::Normal(text.to_string()));
    }

    fn display_info(
        &mut self,
        text: &str,
    ) {
        self.outputs.push(Output::Info(text.to_string()));
    }

    fn display_error(
        &mut self,
        text: &str,
    ) {
        self.outputs.push(Output::Error(text.to_string()));
    }

    fn add_history(
        &mut self,
        line: &str,
    ) {
        self.history.push(line.to_string());
    }

    fn width(&self) -> usize {
        self.width
    }
}
