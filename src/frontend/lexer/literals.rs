//! Literal and operator scanning
//! Handles numbers, string and character literals, raw strings and punctuators

use super::tokenizer::{Lexer, Step};
use super::tokens::*;

/// Punctuators, longest first so the first match is the longest one
const OPERATORS: &[&str] = &[
    "<<=", ">>=", "->*", "...", "::", "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&",
    "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", ".*", "{", "}", "[", "]", "(", ")", "<",
    ">", ";", ":", ",", ".", "?", "+", "-", "*", "/", "%", "^", "&", "|", "~", "!", "=",
];

/// Upper bound on the delimiter of a raw string literal
const MAX_RAW_DELIMITER: usize = 16;

/// Check if a character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (!c.is_ascii() && unicode_ident::is_xid_start(c))
}

/// Check if a character can continue an identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || (!c.is_ascii() && unicode_ident::is_xid_continue(c))
}

/// Scan a preprocessing number; the first character is already consumed
///
/// Accepts everything a pp-number may contain, so `0x1p-3`, `1'000'000`
/// and `12_km` each come out as one token.
pub fn scan_number(lexer: &mut Lexer<'_>) -> Step {
    let mut prev = lexer.token_rest().chars().next().unwrap_or('0');

    loop {
        match lexer.peek() {
            Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '.' => {
                lexer.advance();
                prev = c;
            }
            Some(c @ ('+' | '-')) if matches!(prev, 'e' | 'E' | 'p' | 'P') => {
                lexer.advance();
                prev = c;
            }
            // digit separator
            Some('\'')
                if lexer
                    .peek_next()
                    .map(|c| c.is_ascii_alphanumeric())
                    .unwrap_or(false) =>
            {
                lexer.advance();
                prev = '\'';
            }
            _ => break,
        }
    }

    Step::Continue(lexer.make_token(TokenKind::Other(OtherKind::Number)))
}

/// Scan a string literal; the opening quote is already consumed
pub fn scan_string(lexer: &mut Lexer<'_>) -> Step {
    let position = lexer.start_position();
    if !scan_quoted(lexer, '"') {
        return Step::Fatal(LexError::UnterminatedString { position });
    }
    scan_suffix(lexer);
    Step::Continue(lexer.make_token(TokenKind::Other(OtherKind::StringLiteral)))
}

/// Scan a character literal; the opening quote is already consumed
pub fn scan_char(lexer: &mut Lexer<'_>) -> Step {
    let position = lexer.start_position();
    if lexer.peek() == Some('\'') {
        lexer.advance();
        return Step::Skip(LexError::EmptyCharLiteral { position });
    }
    if !scan_quoted(lexer, '\'') {
        return Step::Fatal(LexError::UnterminatedChar { position });
    }
    scan_suffix(lexer);
    Step::Continue(lexer.make_token(TokenKind::Other(OtherKind::CharLiteral)))
}

/// Scan a raw string literal; `R"` is already consumed
pub fn scan_raw_string(lexer: &mut Lexer<'_>) -> Step {
    let unterminated = LexError::UnterminatedString {
        position: lexer.start_position(),
    };

    let mut delimiter = String::new();
    loop {
        match lexer.advance() {
            Some('(') => break,
            Some(c)
                if delimiter.len() < MAX_RAW_DELIMITER
                    && !c.is_whitespace()
                    && !matches!(c, ')' | '\\' | '"') =>
            {
                delimiter.push(c)
            }
            _ => return Step::Fatal(unterminated),
        }
    }

    let closing = format!("){}\"", delimiter);
    loop {
        if lexer.rest().starts_with(&closing) {
            for _ in closing.chars() {
                lexer.advance();
            }
            break;
        }
        if lexer.advance().is_none() {
            return Step::Fatal(unterminated);
        }
    }

    scan_suffix(lexer);
    Step::Continue(lexer.make_token(TokenKind::Other(OtherKind::StringLiteral)))
}

/// Scan the longest punctuator starting at the current token
///
/// Returns `None` if no punctuator starts there; nothing beyond the first
/// character is consumed in that case.
pub fn scan_operator(lexer: &mut Lexer<'_>) -> Option<Step> {
    let rest = lexer.token_rest();
    let op = OPERATORS.iter().find(|op| rest.starts_with(**op))?;
    for _ in 1..op.len() {
        lexer.advance();
    }
    Some(Step::Continue(
        lexer.make_token(TokenKind::Other(OtherKind::Operator)),
    ))
}

/// Consume the body of a quoted literal up to and including `quote`.
/// Returns false when the line or the input ends first.
fn scan_quoted(
    lexer: &mut Lexer<'_>,
    quote: char,
) -> bool {
    loop {
        match lexer.peek() {
            None | Some('\n' | '\r') => return false,
            Some('\\') => {
                lexer.advance();
                if lexer.advance().is_none() {
                    return false;
                }
            }
            Some(c) => {
                lexer.advance();
                if c == quote {
                    return true;
                }
            }
        }
    }
}

/// User-defined literal suffix, e.g. `"abc"_s`
fn scan_suffix(lexer: &mut Lexer<'_>) {
    if lexer.peek().map(is_identifier_start).unwrap_or(false) {
        while lexer.peek().map(is_identifier_char).unwrap_or(false) {
            lexer.advance();
        }
    }
}
