//! rustyline helper
//!
//! Completion and highlighting for the line editor. The helper holds a
//! handle to its own session, so several editors can run side by side.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing::trace;

use crate::backends::Backend;
use crate::frontend::lexer::literals::is_identifier_char;
use crate::repl::highlight::highlight_cpp;
use crate::shell::Shell;

pub struct ShellHelper<B: Backend> {
    shell: Rc<RefCell<Shell<B>>>,
    highlight: bool,
}

impl<B: Backend> ShellHelper<B> {
    pub fn new(
        shell: Rc<RefCell<Shell<B>>>,
        highlight: bool,
    ) -> Self {
        Self { shell, highlight }
    }

    /// Completions for `line` with the cursor at `pos`
    ///
    /// Replacements are inserted at the cursor; the display text shows the
    /// whole word.
    pub fn candidates(
        &self,
        line: &str,
        pos: usize,
    ) -> Vec<Pair> {
        let mut out = BTreeSet::new();
        match self.shell.try_borrow() {
            Ok(shell) => shell.code_complete(line, pos, &mut out),
            Err(_) => {
                trace!("session busy, no completion");
                return Vec::new();
            }
        }

        let before = line.get(..pos).unwrap_or(line);
        let word_start = before
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_identifier_char(*c))
            .last()
            .map_or(before.len(), |(i, _)| i);
        let word = &before[word_start..];

        out.into_iter()
            .map(|suffix| Pair {
                display: format!("{}{}", word, suffix),
                replacement: suffix,
            })
            .collect()
    }
}

impl<B: Backend> Completer for ShellHelper<B> {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok((pos, self.candidates(line, pos)))
    }
}

impl<B: Backend> Highlighter for ShellHelper<B> {
    fn highlight<'l>(
        &self,
        line: &'l str,
        _pos: usize,
    ) -> Cow<'l, str> {
        if self.highlight {
            Cow::Owned(highlight_cpp(line))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(
        &self,
        _line: &str,
        _pos: usize,
        _forced: bool,
    ) -> bool {
        self.highlight
    }
}

impl<B: Backend> Hinter for ShellHelper<B> {
    type Hint = String;
}

impl<B: Backend> Validator for ShellHelper<B> {}

impl<B: Backend> Helper for ShellHelper<B> {}
