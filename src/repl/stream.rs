//! Non-interactive front end
//!
//! Reads lines from any [`BufRead`] and writes every result to a [`Write`].
//! Used for `--batch` and whenever stdin is not a terminal.

use std::io::{self, BufRead, Write};

use crate::backends::Backend;
use crate::shell::{Console, Shell};

/// Console writing plain text to a stream
///
/// History stays in memory. The first write error is kept and reported by
/// [`StreamShell::run`].
#[derive(Debug)]
pub struct StreamConsole<W: Write> {
    out: W,
    history: Vec<String>,
    width: usize,
    error: Option<io::Error>,
}

impl<W: Write> StreamConsole<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            history: Vec::new(),
            width: 80,
            error: None,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(
        &mut self,
        text: &str,
    ) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", text) {
            self.error = Some(err);
        }
    }

    fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> Console for StreamConsole<W> {
    fn display_normal(
        &mut self,
        text: &str,
    ) {
        self.write_line(text);
    }

    fn display_info(
        &mut self,
        text: &str,
    ) {
        self.write_line(text);
    }

    fn display_error(
        &mut self,
        text: &str,
    ) {
        self.write_line(text);
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

/// Shell session driven by a line stream
pub struct StreamShell<B: Backend, R: BufRead, W: Write> {
    shell: Shell<B>,
    input: R,
    console: StreamConsole<W>,
}

impl<B: Backend, R: BufRead, W: Write> StreamShell<B, R, W> {
    pub fn new(
        shell: Shell<B>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            shell,
            input,
            console: StreamConsole::new(output),
        }
    }

    pub fn shell(&self) -> &Shell<B> {
        &self.shell
    }

    pub fn console(&self) -> &StreamConsole<W> {
        &self.console
    }

    /// Print the splash banner before the first line
    pub fn display_splash(&mut self) -> io::Result<()> {
        self.shell.display_splash(&mut self.console);
        self.console.take_error()
    }

    /// Process lines until end of input
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD instead of ending
    /// the session.
    pub fn run(&mut self) -> io::Result<()> {
        let mut raw = Vec::new();
        loop {
            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            let bytes = raw.strip_suffix(b"\n").map_or(&raw[..], |l| {
                l.strip_suffix(b"\r").unwrap_or(l)
            });
            let text = String::from_utf8_lossy(bytes);
            self.shell.line_available(&text, &mut self.console);
            self.console.take_error()?;
        }
        self.console.out.flush()
    }

    pub fn into_parts(self) -> (Shell<B>, W) {
        (self.shell, self.console.into_inner())
    }
}
