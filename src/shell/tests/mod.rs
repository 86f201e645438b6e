//! Shell session unit tests

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::backends::{Backend, CancelFlag, EvalResult};
use crate::shell::{Console, Output, RecordingConsole, Shell};
use crate::util::config::Config;

/// Backend that rejects any environment mentioning `notatype` and answers
/// queries with the query text
#[derive(Debug, Default)]
struct EchoBackend {
    validated: RefCell<Vec<String>>,
    evaluated: RefCell<Vec<(String, String)>>,
    completed: RefCell<Vec<(String, String)>>,
}

impl Backend for EchoBackend {
    fn validate_code(
        &self,
        code: &str,
        _config: &Config,
        _cancel: &CancelFlag,
    ) -> EvalResult {
        self.validated.borrow_mut().push(code.to_string());
        if code.contains("notatype") {
            EvalResult::error("unknown type name 'notatype'")
        } else {
            EvalResult::default()
        }
    }

    fn eval_tmp(
        &self,
        buffer: &str,
        query: &str,
        _config: &Config,
        _cancel: &CancelFlag,
    ) -> EvalResult {
        self.evaluated
            .borrow_mut()
            .push((buffer.to_string(), query.to_string()));
        EvalResult::output(query)
    }

    fn code_complete(
        &self,
        buffer: &str,
        prefix: &str,
        _config: &Config,
        out: &mut BTreeSet<String>,
    ) {
        self.completed
            .borrow_mut()
            .push((buffer.to_string(), prefix.to_string()));
        out.insert("t".to_string());
    }

    fn describe(
        &self,
        _config: &Config,
    ) -> Option<String> {
        Some("echo".to_string())
    }
}

fn shell() -> Shell<EchoBackend> {
    Shell::new(EchoBackend::default(), Config::default())
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_whitespace_line_does_nothing() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        for line in ["", " ", "\t", "  \n "] {
            shell.line_available(line, &mut console);
        }
        assert!(console.history().is_empty());
        assert!(console.outputs().is_empty());
        assert!(shell.backend().validated.borrow().is_empty());
        assert!(shell.backend().evaluated.borrow().is_empty());
        assert_eq!(shell.prev_line(), "");
    }

    #[test]
    fn test_comment_line_only_reaches_history() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        shell.line_available("// nothing here", &mut console);
        assert_eq!(console.history(), &["// nothing here".to_string()]);
        assert!(console.outputs().is_empty());
        assert!(shell.backend().validated.borrow().is_empty());
        assert!(shell.backend().evaluated.borrow().is_empty());
    }

    #[test]
    fn test_setup_then_query() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();

        shell.line_available("typedef int Int;", &mut console);
        assert_eq!(shell.buffer(), "typedef int Int;");
        assert_eq!(
            *shell.backend().validated.borrow(),
            vec!["typedef int Int;".to_string()]
        );

        shell.line_available("Int", &mut console);
        assert_eq!(
            *shell.backend().evaluated.borrow(),
            vec![("typedef int Int;".to_string(), "Int".to_string())]
        );
        assert_eq!(console.normal(), vec!["Int"]);
    }

    #[test]
    fn test_rejected_setup_keeps_buffer() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        shell.line_available("typedef int Int;", &mut console);
        shell.line_available("typedef notatype X;", &mut console);

        assert_eq!(shell.buffer(), "typedef int Int;");
        assert_eq!(console.errors(), vec!["unknown type name 'notatype'"]);
        assert_eq!(
            shell.backend().validated.borrow().last().map(String::as_str),
            Some("typedef int Int;\ntypedef notatype X;")
        );
    }

    #[test]
    fn test_duplicate_lines_recorded_once() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        shell.line_available("foo", &mut console);
        shell.line_available("foo", &mut console);
        assert_eq!(console.history(), &["foo".to_string()]);
        // both were still evaluated
        assert_eq!(shell.backend().evaluated.borrow().len(), 2);

        shell.line_available("bar", &mut console);
        shell.line_available("foo", &mut console);
        assert_eq!(console.history(), &["foo", "bar", "foo"].map(String::from));
        assert_eq!(shell.prev_line(), "foo");
    }
}

#[cfg(test)]
mod buffer_tests {
    use super::*;

    #[test]
    fn test_store_in_buffer_result() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        assert!(shell.store_in_buffer("struct a;", &mut console));
        assert!(!shell.store_in_buffer("notatype b;", &mut console));
        assert!(shell.store_in_buffer("struct c;", &mut console));
        assert_eq!(shell.buffer(), "struct a;\nstruct c;");
    }

    #[test]
    fn test_store_in_buffer_skips_history() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        shell.store_in_buffer("struct a;", &mut console);
        assert!(console.history().is_empty());
        assert_eq!(shell.prev_line(), "");
    }
}

#[cfg(test)]
mod completion_tests {
    use super::*;

    #[test]
    fn test_prefix_ends_at_cursor() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        shell.line_available("typedef int Int;", &mut console);

        let mut out = BTreeSet::new();
        shell.code_complete("In + 1", 2, &mut out);
        assert_eq!(
            *shell.backend().completed.borrow(),
            vec![("typedef int Int;".to_string(), "In".to_string())]
        );
        assert!(out.contains("t"));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let shell = shell();
        let mut out = BTreeSet::new();
        shell.code_complete("abc", 99, &mut out);
        // 'é' takes two bytes; offset 2 falls inside it
        shell.code_complete("aé", 2, &mut out);
        let completed = shell.backend().completed.borrow();
        assert_eq!(completed[0].1, "abc");
        assert_eq!(completed[1].1, "a");
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_cancel_keeps_state() {
        let mut shell = shell();
        let mut console = RecordingConsole::new();
        shell.line_available("typedef int Int;", &mut console);

        let flag = shell.cancel_flag();
        shell.cancel_operation();
        assert!(flag.is_raised());
        assert_eq!(shell.buffer(), "typedef int Int;");
        assert_eq!(shell.prev_line(), "typedef int Int;");

        // the next backend call starts with a cleared flag
        shell.line_available("Int", &mut console);
        assert!(!flag.is_raised());
    }

    #[test]
    fn test_splash() {
        let shell = shell();
        let mut console = RecordingConsole::new();
        shell.display_splash(&mut console);
        let normal = console.normal();
        assert_eq!(normal.len(), 1);
        assert!(normal[0].starts_with("/*\n * Template metaprogramming shell"));
        assert!(normal[0].contains("Based on echo"));
    }

    #[test]
    fn test_verbose_splash() {
        let mut config = Config::default();
        config.verbose = true;
        let shell = Shell::new(EchoBackend::default(), config);
        let mut console = RecordingConsole::new();
        shell.display_splash(&mut console);
        assert!(matches!(
            console.outputs().last(),
            Some(Output::Normal(text)) if text.contains("// Verbose mode: ON")
        ));
    }

    #[test]
    fn test_prompt() {
        assert_eq!(shell().prompt(), "> ");
        assert_eq!(RecordingConsole::new().width(), 80);
    }
}
