//! Lexer tests module
//!
//! - basic: identifiers, whitespace, line ends, comments, spans
//! - keywords: keyword table and classification rules
//! - literals: numbers, strings, characters, punctuators
//! - preprocessor: directive introducers
//! - errors: recoverable and fatal lexical errors


use super::{tokenize_all, TokenKind};

/// Token kinds of a fragment that lexes without a fatal error
fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize_all(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Lexemes of a fragment that lexes without a fatal error
fn lexemes(source: &str) -> Vec<String> {
    tokenize_all(source)
        .unwrap()
        .into_iter()
        .map(|t| t.lexeme)
        .collect()
}
