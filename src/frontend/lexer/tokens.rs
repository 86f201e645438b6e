//! Token types

use super::keywords::Keyword;
use crate::util::span::{Position, Span};

/// Lexer error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
    #[error("Empty character literal at {position}")]
    EmptyCharLiteral { position: Position },
    #[error("Unterminated string literal starting at {position}")]
    UnterminatedString { position: Position },
    #[error("Unterminated character literal starting at {position}")]
    UnterminatedChar { position: Position },
    #[error("Unterminated comment starting at {position}")]
    UnterminatedComment { position: Position },
}

impl LexError {
    /// Whether the lexer can skip the offending text and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LexError::UnexpectedChar { .. } | LexError::EmptyCharLiteral { .. }
        )
    }

    /// Where the offending text starts
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::EmptyCharLiteral { position }
            | LexError::UnterminatedString { position }
            | LexError::UnterminatedChar { position }
            | LexError::UnterminatedComment { position } => *position,
        }
    }
}

/// Refinement of the "other" token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtherKind {
    Number,
    CharLiteral,
    StringLiteral,
    /// Operators and punctuators, including alternative spellings like `and`
    Operator,
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    /// A preprocessor directive introducer such as `#define`
    Preprocessor,
    /// Spaces, tabs, comments and line continuations
    Whitespace,
    Eol,
    Eof,
    Other(OtherKind),
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Keyword identity, if this is a keyword token
    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Whitespace, EOL or EOF
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace | TokenKind::Eol | TokenKind::Eof
        )
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
