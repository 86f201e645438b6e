//! Buffer, completion and cancellation through the public session API

use std::collections::BTreeSet;
use std::io::Cursor;

use tmplsh::backends::EvalResult;
use tmplsh::repl::StreamShell;
use tmplsh::shell::RecordingConsole;

use crate::common::{shell_with, Call, ScriptedBackend};

#[test]
fn test_store_in_buffer_is_all_or_nothing() {
    let mut shell = shell_with(ScriptedBackend::new().reject("bad"));
    let mut console = RecordingConsole::new();

    assert!(shell.store_in_buffer("struct ok;", &mut console));
    let before = shell.buffer().to_string();
    assert!(!shell.store_in_buffer("struct bad;", &mut console));
    assert_eq!(shell.buffer(), before);
    assert!(shell.store_in_buffer("struct fine;", &mut console));
    assert_eq!(shell.buffer(), "struct ok;\nstruct fine;");
}

#[test]
fn test_completion_uses_committed_buffer_and_prefix() {
    let mut shell = shell_with(ScriptedBackend::new().complete_with("ype"));
    let mut console = RecordingConsole::new();
    shell.line_available("typedef int Int;", &mut console);

    let mut out = BTreeSet::new();
    shell.code_complete("id<int>::t and more", 10, &mut out);

    assert_eq!(
        shell.backend().calls().last(),
        Some(&Call::Complete {
            buffer: "typedef int Int;".to_string(),
            prefix: "id<int>::t".to_string(),
        })
    );
    assert_eq!(out.into_iter().collect::<Vec<_>>(), vec!["ype".to_string()]);
}

#[test]
fn test_completion_does_not_touch_history() {
    let shell = shell_with(ScriptedBackend::new());
    let mut out = BTreeSet::new();
    shell.code_complete("Int", 3, &mut out);
    assert_eq!(shell.prev_line(), "");
    assert_eq!(shell.buffer(), "");
}

#[test]
fn test_cancel_while_idle() {
    let mut shell = shell_with(ScriptedBackend::new());
    let mut console = RecordingConsole::new();
    shell.line_available("struct a;", &mut console);

    let flag = shell.cancel_flag();
    shell.cancel_operation();
    shell.cancel_operation();

    assert!(flag.is_raised());
    assert_eq!(shell.buffer(), "struct a;");
    assert_eq!(shell.prev_line(), "struct a;");
    assert_eq!(shell.backend().calls().len(), 1);
}

#[test]
fn test_cancel_from_another_thread() {
    let shell = shell_with(ScriptedBackend::new());
    let flag = shell.cancel_flag();
    std::thread::spawn(move || flag.raise()).join().unwrap();
    assert!(shell.cancel_flag().is_raised());
}

#[test]
fn test_stream_session() {
    let backend = ScriptedBackend::new()
        .reject("notatype")
        .answer("Int", EvalResult::output("int"));
    let input = "typedef int Int;\n\n   \nInt\r\ntypedef notatype X;\nInt\n";
    let mut session = StreamShell::new(shell_with(backend), Cursor::new(input), Vec::new());
    session.run().unwrap();

    assert_eq!(
        session.console().history(),
        &[
            "typedef int Int;".to_string(),
            "Int".to_string(),
            "typedef notatype X;".to_string(),
            "Int".to_string(),
        ]
    );
    let (shell, output) = session.into_parts();
    assert_eq!(shell.buffer(), "typedef int Int;");
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "int\n<stdin>:1:9: error: unknown type name 'notatype'\nint\n"
    );
}

#[test]
fn test_stream_session_without_trailing_newline() {
    let backend = ScriptedBackend::new().answer("Int", EvalResult::output("int"));
    let mut session = StreamShell::new(shell_with(backend), Cursor::new("Int"), Vec::new());
    session.run().unwrap();
    let (_, output) = session.into_parts();
    assert_eq!(output, b"int\n");
}

#[test]
fn test_stream_session_survives_invalid_utf8() {
    let backend = ScriptedBackend::new().answer("2+2", EvalResult::output("4"));
    let input: &[u8] = b"1+1\n// caf\xe9\n2+2\n";
    let mut session = StreamShell::new(shell_with(backend), Cursor::new(input), Vec::new());
    session.run().unwrap();

    assert_eq!(
        session.console().history(),
        &[
            "1+1".to_string(),
            "// caf\u{fffd}".to_string(),
            "2+2".to_string(),
        ]
    );
    assert_eq!(
        session.shell().backend().evaluated(),
        vec![
            (String::new(), "1+1".to_string()),
            (String::new(), "2+2".to_string()),
        ]
    );
    let (_, output) = session.into_parts();
    assert!(String::from_utf8(output).unwrap().ends_with("4\n"));
}

#[test]
fn test_stream_splash() {
    let mut session = StreamShell::new(
        shell_with(ScriptedBackend::new()),
        Cursor::new(""),
        Vec::new(),
    );
    session.display_splash().unwrap();
    session.run().unwrap();
    let (_, output) = session.into_parts();
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("/*\n * Template metaprogramming shell (tmplsh) "));
    assert!(text.ends_with(" */\n"));
}
