//! Lexer module
//!
//! Turns a fragment of C++ into a lazy sequence of categorized tokens.
//! Split into specialized modules:
//! - `tokens`: token and error types
//! - `keywords`: keyword table and the per-keyword classification rule
//! - `tokenizer`: the [`Lexer`] state machine, one [`Step`] at a time
//! - `literals`: numbers, quoted literals and punctuators

pub mod keywords;
pub mod literals;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use keywords::{Keyword, LeadingKeywordRule};
pub use tokenizer::{Lexer, Step};
pub use tokens::{LexError, OtherKind, Token, TokenKind};

/// Lazy token sequence over a text fragment
///
/// Yields `Ok` tokens in source order and ends after the EOF token.
/// Recoverable lexical errors are skipped; a fatal one is yielded once as
/// `Err` and ends the sequence. A clone forks the sequence at its current
/// point; calling [`tokenize`] again starts over.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lexer.next_step()? {
                Step::Continue(token) => {
                    log_token(&token);
                    return Some(Ok(token));
                }
                Step::Skip(err) => {
                    tracing::trace!("skipping malformed text: {}", err);
                }
                Step::Fatal(err) => {
                    tracing::trace!("lexing aborted: {}", err);
                    return Some(Err(err));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize a text fragment
///
/// The result depends on `source` only; calling it twice on the same text
/// yields the same sequence.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        lexer: Lexer::new(source),
    }
}

/// Tokenize the whole fragment eagerly, stopping at the first fatal error
pub fn tokenize_all(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source).collect()
}

/// Log a token for debugging
fn log_token(token: &Token) {
    tracing::trace!(kind = ?token.kind, lexeme = %token.lexeme, span = %token.span, "token");
}

#[cfg(test)]
mod tests;
