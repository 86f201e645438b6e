//! Tokenizer implementation
//! Main lexer structure and token generation logic

use super::keywords::{is_alternative_operator, is_directive, Keyword};
use super::literals::{
    is_identifier_char, is_identifier_start, scan_char, scan_number, scan_operator,
    scan_raw_string, scan_string,
};
use super::tokens::*;
use crate::util::span::{Position, Span};
use std::iter::Peekable;
use std::str::Chars;

/// Outcome of a single production step of the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A token was produced
    Continue(Token),
    /// Malformed text was consumed and dropped; lexing goes on
    Skip(LexError),
    /// Lexing cannot go on past this point
    Fatal(LexError),
}

/// Main lexer structure
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    pos: Position,
    start: Position,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            pos: Position::start(),
            start: Position::start(),
            finished: false,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        self.start
    }

    /// Text from the start of the current token to the end of the source
    pub(super) fn token_rest(&self) -> &'a str {
        let source = self.source;
        &source[self.start.offset..]
    }

    /// Text from the current position to the end of the source
    pub(super) fn rest(&self) -> &'a str {
        let source = self.source;
        &source[self.pos.offset..]
    }

    /// Advance to next character
    ///
    /// `\r\n` is consumed as a whole and reported as `\r`.
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos.advance(c);
        if c == '\r' && self.chars.peek() == Some(&'\n') {
            self.chars.next();
            self.pos.offset += 1;
        }
        Some(c)
    }

    /// Peek at next character
    pub(super) fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Peek at character after next
    pub(super) fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Whether the lexer has produced EOF or hit a fatal error
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Produce the next step, or `None` once the sequence is over
    pub fn next_step(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }

        self.start = self.pos;

        let Some(c) = self.advance() else {
            self.finished = true;
            return Some(Step::Continue(self.make_token(TokenKind::Eof)));
        };

        let step = match c {
            '\n' | '\r' => Step::Continue(self.make_token(TokenKind::Eol)),
            c if is_horizontal_space(c) => {
                while self.peek().map(is_horizontal_space).unwrap_or(false) {
                    self.advance();
                }
                Step::Continue(self.make_token(TokenKind::Whitespace))
            }
            '\\' if matches!(self.peek(), Some('\n' | '\r')) => {
                // Line continuation
                self.advance();
                Step::Continue(self.make_token(TokenKind::Whitespace))
            }
            '/' if self.peek() == Some('/') => {
                while !matches!(self.peek(), None | Some('\n' | '\r')) {
                    self.advance();
                }
                Step::Continue(self.make_token(TokenKind::Whitespace))
            }
            '/' if self.peek() == Some('*') => self.scan_block_comment(),
            '#' => self.scan_hash(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c if c.is_ascii_digit() => scan_number(self),
            '.' if self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) => scan_number(self),
            '"' => scan_string(self),
            '\'' => scan_char(self),
            c => match scan_operator(self) {
                Some(step) => step,
                None => Step::Skip(LexError::UnexpectedChar {
                    ch: c,
                    position: self.start,
                }),
            },
        };

        if matches!(step, Step::Fatal(_)) {
            self.finished = true;
        }
        Some(step)
    }

    /// `/*` has been seen; consume up to and including `*/`
    fn scan_block_comment(&mut self) -> Step {
        self.advance();
        let mut prev = '\0';
        while let Some(c) = self.advance() {
            if prev == '*' && c == '/' {
                return Step::Continue(self.make_token(TokenKind::Whitespace));
            }
            prev = c;
        }
        Step::Fatal(LexError::UnterminatedComment {
            position: self.start,
        })
    }

    /// `#` has been seen: a directive introducer, `##` or a lone `#`
    fn scan_hash(&mut self) -> Step {
        let mut lookahead = self.chars.clone();
        let mut skipped = 0;
        while lookahead.peek().map(|&c| c == ' ' || c == '\t').unwrap_or(false) {
            lookahead.next();
            skipped += 1;
        }
        let name: String = lookahead
            .take_while(|&c| c.is_ascii_alphanumeric() || c == '_')
            .collect();

        if is_directive(&name) {
            for _ in 0..skipped + name.len() {
                self.advance();
            }
            return Step::Continue(self.make_token(TokenKind::Preprocessor));
        }

        if self.peek() == Some('#') {
            self.advance();
        }
        Step::Continue(self.make_token(TokenKind::Other(OtherKind::Operator)))
    }

    /// Scan an identifier, keyword, or a prefixed literal such as `L"..."`
    fn scan_identifier(&mut self) -> Step {
        while self.peek().map(is_identifier_char).unwrap_or(false) {
            self.advance();
        }

        let source = self.source;
        let spelling = &source[self.start.offset..self.pos.offset];
        match (spelling, self.peek()) {
            ("L" | "u" | "U" | "u8", Some('"')) => {
                self.advance();
                return scan_string(self);
            }
            ("L" | "u" | "U" | "u8", Some('\'')) => {
                self.advance();
                return scan_char(self);
            }
            ("R" | "LR" | "uR" | "UR" | "u8R", Some('"')) => {
                self.advance();
                return scan_raw_string(self);
            }
            _ => {}
        }

        let kind = if let Some(kw) = Keyword::lookup(spelling) {
            TokenKind::Keyword(kw)
        } else if is_alternative_operator(spelling) {
            TokenKind::Other(OtherKind::Operator)
        } else {
            TokenKind::Identifier
        };
        Step::Continue(self.make_token(kind))
    }

    /// Create token with current span
    pub(super) fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token {
        Token {
            kind,
            lexeme: self.source[self.start.offset..self.pos.offset].to_string(),
            span: Span::new(self.start, self.pos),
        }
    }
}

fn is_horizontal_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0b' | '\x0c')
}
