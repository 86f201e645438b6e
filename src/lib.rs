//! tmplsh: an interactive shell for C++ template metaprogramming
//!
//! Lines typed at the prompt either extend an environment of declarations
//! or are queries evaluated against it. Evaluation is delegated to a
//! compiler-driven backend; this crate decides what each line is, keeps the
//! environment consistent and renders the answers.
//!
//! # Example
//!
//! ```no_run
//! use tmplsh::backends::ClangBackend;
//! use tmplsh::shell::{RecordingConsole, Shell};
//! use tmplsh::util::config::Config;
//!
//! let mut shell = Shell::new(ClangBackend::new(), Config::default());
//! let mut console = RecordingConsole::new();
//! shell.line_available("typedef int Int;", &mut console);
//! shell.line_available("Int", &mut console);
//! assert_eq!(console.normal(), vec!["int"]);
//! ```

#![warn(rust_2018_idioms)]

pub mod backends;
pub mod frontend;
pub mod repl;
pub mod shell;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};

/// Shell version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shell name
pub const NAME: &str = "tmplsh";
