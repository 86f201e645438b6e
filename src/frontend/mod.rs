//! Input frontend
//!
//! Lexical analysis of submitted lines and their classification into
//! environment setup commands and queries. No parse tree is ever built.

pub mod classify;
pub mod lexer;

pub use classify::{classify, is_empty_line, is_environment_setup_command, Classification};
pub use lexer::{tokenize, LexError, Token, TokenKind};
