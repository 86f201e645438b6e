//! Compiler-driven backend
//!
//! Every call runs the configured compiler in syntax-only mode:
//! - validation compiles the candidate environment from stdin
//! - queries append a probe that names the query as the argument of an
//!   undefined template, then read the type back from the error message
//! - completion writes the environment to a temporary file and asks for
//!   `-code-completion-at` its end

pub mod diagnostics;
pub mod process;

use std::collections::BTreeSet;
use std::io::Write;
use std::process::Command;

use tracing::{debug, warn};

use crate::backends::{Backend, BackendError, CancelFlag, EvalResult};
use crate::frontend::lexer::literals::is_identifier_char;
use crate::util::config::Config;
use crate::util::span::Position;

use self::diagnostics::{parse_completions, parse_diagnostics, probe_type, Severity};
use self::process::{run_compiler, CompilerOutput};

const PROBE_NAMESPACE: &str = "__tmplsh";
const PROBE_TEMPLATE: &str = "__tmplsh::show";
const PROBE_VARIABLE: &str = "__tmplsh_probe";

/// Backend driving a clang-compatible compiler executable
#[derive(Debug, Default, Clone, Copy)]
pub struct ClangBackend;

impl ClangBackend {
    pub fn new() -> Self {
        Self
    }

    /// Source of the probe compiled after the environment
    pub fn probe_source(query: &str) -> String {
        let query = query.trim().trim_end_matches(';').trim_end();
        format!(
            "namespace {ns} {{ template <class T> struct show; }}\n{tmpl}< {query} > {var};\n",
            ns = PROBE_NAMESPACE,
            tmpl = PROBE_TEMPLATE,
            query = query,
            var = PROBE_VARIABLE,
        )
    }

    fn compile_stdin(
        &self,
        code: &str,
        config: &Config,
        cancel: &CancelFlag,
    ) -> Result<(CompilerOutput, String), BackendError> {
        let mut args = config.compiler.common_args();
        args.push("-".to_string());
        let command_line = format!("{} {}", config.compiler.program, args.join(" "));
        let output = run_compiler(&config.compiler.program, &args, Some(code), cancel)?;
        Ok((output, command_line))
    }

    fn complete(
        &self,
        buffer: &str,
        prefix: &str,
        config: &Config,
    ) -> Result<Vec<String>, BackendError> {
        let source = join_source(buffer, prefix);
        let at = Position::end_of(&source);

        let mut file = tempfile::Builder::new()
            .prefix("tmplsh")
            .suffix(".cpp")
            .tempfile()?;
        file.write_all(source.as_bytes())?;
        file.flush()?;
        let path = file.path().display().to_string();

        let mut args = config.compiler.common_args();
        args.push("-Xclang".to_string());
        args.push(format!("-code-completion-at={}:{}:{}", path, at.line, at.column));
        args.push(path);

        // completion is never cancelled; it runs while the user is typing
        let output = run_compiler(&config.compiler.program, &args, None, &CancelFlag::new())?;
        Ok(parse_completions(&output.stdout)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

impl Backend for ClangBackend {
    fn validate_code(
        &self,
        code: &str,
        config: &Config,
        cancel: &CancelFlag,
    ) -> EvalResult {
        let (output, command_line) = match self.compile_stdin(code, config, cancel) {
            Ok(run) => run,
            Err(err) => return err.into(),
        };

        let mut result = EvalResult::default();
        for group in parse_diagnostics(&output.stderr) {
            match group.severity {
                Severity::Error => result.errors.push(group.text),
                Severity::Warning => push_info(&mut result.info, &group.text),
            }
        }
        if !output.status.success() && result.errors.is_empty() {
            result
                .errors
                .push(format!("{} exited with {}", config.compiler.program, output.status));
        }
        if config.verbose {
            result.info = prepend_line(&command_line, &result.info);
        }
        debug!(errors = result.errors.len(), "validated environment");
        result
    }

    fn eval_tmp(
        &self,
        buffer: &str,
        query: &str,
        config: &Config,
        cancel: &CancelFlag,
    ) -> EvalResult {
        let code = join_source(buffer, &Self::probe_source(query));
        let (output, command_line) = match self.compile_stdin(&code, config, cancel) {
            Ok(run) => run,
            Err(err) => return err.into(),
        };

        let mut result = EvalResult::default();
        let mut found = None;
        for group in parse_diagnostics(&output.stderr) {
            match group.severity {
                Severity::Error => match probe_type(&group, PROBE_TEMPLATE) {
                    Some(ty) if found.is_none() => found = Some(ty),
                    Some(_) => {}
                    None => result.errors.push(group.text),
                },
                Severity::Warning => push_info(&mut result.info, &group.text),
            }
        }

        match found {
            Some(ty) if result.errors.is_empty() => result.output = ty,
            Some(_) => {}
            None if result.errors.is_empty() => result
                .errors
                .push(format!("Cannot determine the type of '{}'", query.trim())),
            None => {}
        }
        if config.verbose {
            result.info = prepend_line(&command_line, &result.info);
        }
        debug!(query, output = %result.output, errors = result.errors.len(), "evaluated query");
        result
    }

    fn code_complete(
        &self,
        buffer: &str,
        prefix: &str,
        config: &Config,
        out: &mut BTreeSet<String>,
    ) {
        let names = match self.complete(buffer, prefix, config) {
            Ok(names) => names,
            Err(err) => {
                warn!("code completion failed: {}", err);
                return;
            }
        };
        out.extend(completion_suffixes(prefix, &names));
    }

    fn describe(
        &self,
        config: &Config,
    ) -> Option<String> {
        let output = Command::new(&config.compiler.program)
            .arg("--version")
            .output()
            .ok()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .next()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
    }
}

fn join_source(
    buffer: &str,
    tail: &str,
) -> String {
    if buffer.is_empty() {
        tail.to_string()
    } else {
        format!("{}\n{}", buffer, tail)
    }
}

fn push_info(
    info: &mut String,
    text: &str,
) {
    if !info.is_empty() {
        info.push('\n');
    }
    info.push_str(text);
}

fn prepend_line(
    line: &str,
    rest: &str,
) -> String {
    if rest.is_empty() {
        line.to_string()
    } else {
        format!("{}\n{}", line, rest)
    }
}

/// The identifier being typed at the end of `prefix`
fn partial_word(prefix: &str) -> &str {
    let start = prefix
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_identifier_char(*c))
        .last()
        .map_or(prefix.len(), |(i, _)| i);
    &prefix[start..]
}

/// Turn full names into the text that extends `prefix`
pub fn completion_suffixes(
    prefix: &str,
    names: &[String],
) -> BTreeSet<String> {
    let word = partial_word(prefix);
    names
        .iter()
        .filter_map(|name| name.strip_prefix(word))
        .filter(|suffix| !suffix.is_empty())
        .map(str::to_string)
        .collect()
}
