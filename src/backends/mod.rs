//! Evaluation backends
//!
//! The shell never interprets C++ itself. It hands candidate environments
//! and queries to a [`Backend`], which answers with an [`EvalResult`].
//!
//! # Architecture
//!
//! ```text
//!   Shell::store_in_buffer      Shell::line_available     Shell::code_complete
//!            |                          |                          |
//!            v                          v                          v
//!     validate_code(buffer)     eval_tmp(buffer, query)   code_complete(buffer, prefix)
//!            |                          |                          |
//!            +------------+-------------+--------------------------+
//!                         |
//!                         v
//!                  ClangBackend (compiler process)
//! ```

pub mod cancel;
pub mod clang;

use std::collections::BTreeSet;
use std::io;

use crate::util::config::Config;

pub use cancel::CancelFlag;
pub use clang::ClangBackend;

/// Outcome of a single backend call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalResult {
    /// Normal output, shown only when there are no errors
    pub output: String,
    /// Informational text, shown first
    pub info: String,
    /// Error messages, in the order they were reported
    pub errors: Vec<String>,
}

impl EvalResult {
    /// A successful result carrying `output`
    pub fn output(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// A failed result carrying one error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Self::default()
        }
    }

    /// Attach informational text
    pub fn with_info(
        mut self,
        info: impl Into<String>,
    ) -> Self {
        self.info = info.into();
        self
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl From<BackendError> for EvalResult {
    fn from(err: BackendError) -> Self {
        EvalResult::error(err.to_string())
    }
}

/// Failures of the backend machinery itself, as opposed to errors in the
/// evaluated code
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while talking to the compiler: {0}")]
    Io(#[from] io::Error),
    #[error("operation cancelled")]
    Cancelled,
}

/// Evaluation backend
///
/// Calls are synchronous and may block for a long time. Implementations
/// that can abort work should poll `cancel` and give up once it is raised.
pub trait Backend {
    /// Check that `code` is a valid environment
    fn validate_code(
        &self,
        code: &str,
        config: &Config,
        cancel: &CancelFlag,
    ) -> EvalResult;

    /// Evaluate `query` in the environment `buffer`
    fn eval_tmp(
        &self,
        buffer: &str,
        query: &str,
        config: &Config,
        cancel: &CancelFlag,
    ) -> EvalResult;

    /// Add to `out` the text that may follow `prefix` in the environment
    /// `buffer`
    fn code_complete(
        &self,
        buffer: &str,
        prefix: &str,
        config: &Config,
        out: &mut BTreeSet<String>,
    );

    /// One-line description for the splash screen
    fn describe(
        &self,
        _config: &Config,
    ) -> Option<String> {
        None
    }
}
