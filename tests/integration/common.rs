//! Shared test backend
//!
//! A scripted backend that records every call, accepts any environment that
//! does not mention a rejected word, and answers queries from a table.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use tmplsh::backends::{Backend, CancelFlag, EvalResult};
use tmplsh::shell::Shell;
use tmplsh::util::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Validate(String),
    Eval { buffer: String, query: String },
    Complete { buffer: String, prefix: String },
}

#[derive(Debug, Default)]
pub struct ScriptedBackend {
    calls: RefCell<Vec<Call>>,
    rejected: Vec<String>,
    answers: HashMap<String, EvalResult>,
    completions: Vec<String>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail validation of any environment containing `word`
    pub fn reject(
        mut self,
        word: &str,
    ) -> Self {
        self.rejected.push(word.to_string());
        self
    }

    /// Answer `query` with `result`
    pub fn answer(
        mut self,
        query: &str,
        result: EvalResult,
    ) -> Self {
        self.answers.insert(query.to_string(), result);
        self
    }

    /// Offer `suffix` on every completion request
    pub fn complete_with(
        mut self,
        suffix: &str,
    ) -> Self {
        self.completions.push(suffix.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn validated(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Validate(code) => Some(code),
                _ => None,
            })
            .collect()
    }

    pub fn evaluated(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Eval { buffer, query } => Some((buffer, query)),
                _ => None,
            })
            .collect()
    }
}

impl Backend for ScriptedBackend {
    fn validate_code(
        &self,
        code: &str,
        _config: &Config,
        _cancel: &CancelFlag,
    ) -> EvalResult {
        self.calls.borrow_mut().push(Call::Validate(code.to_string()));
        match self.rejected.iter().find(|word| code.contains(word.as_str())) {
            Some(word) => EvalResult::error(format!("<stdin>:1:9: error: unknown type name '{}'", word)),
            None => EvalResult::default(),
        }
    }

    fn eval_tmp(
        &self,
        buffer: &str,
        query: &str,
        _config: &Config,
        _cancel: &CancelFlag,
    ) -> EvalResult {
        self.calls.borrow_mut().push(Call::Eval {
            buffer: buffer.to_string(),
            query: query.to_string(),
        });
        self.answers
            .get(query)
            .cloned()
            .unwrap_or_else(|| EvalResult::error(format!("no answer for '{}'", query)))
    }

    fn code_complete(
        &self,
        buffer: &str,
        prefix: &str,
        _config: &Config,
        out: &mut BTreeSet<String>,
    ) {
        self.calls.borrow_mut().push(Call::Complete {
            buffer: buffer.to_string(),
            prefix: prefix.to_string(),
        });
        out.extend(self.completions.iter().cloned());
    }
}

pub fn shell_with(backend: ScriptedBackend) -> Shell<ScriptedBackend> {
    Shell::new(backend, Config::default())
}
