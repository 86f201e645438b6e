//! Reading the compiler's textual output
//!
//! Diagnostics are grouped: a group starts at an `error:` or `warning:`
//! line and collects the notes, source excerpts and caret lines printed
//! after it. Lines such as `In file included from ...` printed before a
//! diagnostic belong to the group that follows them.

use once_cell::sync::Lazy;
use regex::Regex;

static DIAGNOSTIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:.*?:\d+:\d+|[^\s:]+): (?P<level>fatal error|error|warning|note|remark): ")
        .expect("diagnostic pattern is valid")
});

static SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+ (errors?|warnings?)( and \d+ (errors?|warnings?))? generated\.$")
        .expect("summary pattern is valid")
});

static COMPLETION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^COMPLETION: (?P<name>[^\s:]+)(?: : |$)").expect("completion pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One diagnostic together with its follow-up lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticGroup {
    pub severity: Severity,
    pub text: String,
}

/// Split compiler stderr into diagnostic groups
pub fn parse_diagnostics(stderr: &str) -> Vec<DiagnosticGroup> {
    let mut groups = Vec::new();
    let mut current: Option<DiagnosticGroup> = None;
    let mut pending = String::new();

    for line in stderr.lines() {
        let line = line.trim_end();
        if line.is_empty() || SUMMARY.is_match(line) {
            continue;
        }

        let severity = DIAGNOSTIC
            .captures(line)
            .and_then(|caps| match &caps["level"] {
                "fatal error" | "error" => Some(Severity::Error),
                "warning" => Some(Severity::Warning),
                _ => None,
            });

        match severity {
            Some(severity) => {
                groups.extend(current.take().map(finish));
                let mut text = std::mem::take(&mut pending);
                text.push_str(line);
                current = Some(DiagnosticGroup { severity, text });
            }
            None if line.starts_with("In file included from") => push_line(&mut pending, line),
            None => match current.as_mut() {
                Some(group) => push_line(&mut group.text, line),
                None => push_line(&mut pending, line),
            },
        }
    }
    groups.extend(current.map(finish));
    if !pending.is_empty() {
        groups.push(finish(DiagnosticGroup {
            severity: Severity::Error,
            text: pending,
        }));
    }
    groups
}

fn finish(mut group: DiagnosticGroup) -> DiagnosticGroup {
    let len = group.text.trim_end_matches('\n').len();
    group.text.truncate(len);
    group
}

fn push_line(
    text: &mut String,
    line: &str,
) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(line);
    text.push('\n');
}

/// Pull the type named in the probe's "undefined template" error
///
/// `template` is the fully qualified probe template, e.g. `__tmplsh::show`.
pub fn probe_type(
    group: &DiagnosticGroup,
    template: &str,
) -> Option<String> {
    let marker = format!("implicit instantiation of undefined template '{}<", template);
    let start = group.text.find(&marker)? + marker.len();
    let rest = &group.text[start..];
    // the quoted name ends at the last `>'` on the line
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let end = rest[..line_end].rfind(">'")?;
    Some(rest[..end].trim().to_string())
}

/// Names offered by `-code-completion-at`, in the order printed
pub fn parse_completions(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter_map(|line| COMPLETION.captures(line))
        .filter_map(|caps| caps.name("name"))
        .map(|name| name.as_str())
        .filter(|name| *name != "Pattern")
        .collect()
}
