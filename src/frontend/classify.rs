//! Input classification
//!
//! Decides from lexical categories alone whether a submitted line extends the
//! environment or is a query. Lexical failures never escape from here: they
//! turn into the verdict that keeps unparseable text out of the environment.

use tracing::debug;

use super::lexer::{tokenize, Keyword, LeadingKeywordRule, LexError, TokenKind, Tokens};

/// What a submitted line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Only whitespace, comments and line ends
    Blank,
    /// A declaration to append to the environment
    EnvironmentSetup,
    /// An expression or type to evaluate against the environment
    Query,
}

/// Classify a line, consulting [`is_empty_line`] first
pub fn classify(line: &str) -> Classification {
    let classification = if is_empty_line(line) {
        Classification::Blank
    } else if is_environment_setup_command(line) {
        Classification::EnvironmentSetup
    } else {
        Classification::Query
    };
    debug!(?classification, line, "classified");
    classification
}

/// Whether `line` is a declaration to store in the environment
///
/// Lines with no significant token count as (trivial) setup commands.
/// Lexical errors make the line a query.
pub fn is_environment_setup_command(line: &str) -> bool {
    match setup_verdict(&mut tokenize(line)) {
        Ok(verdict) => verdict,
        Err(err) => {
            debug!("cannot classify {:?}: {}", line, err);
            false
        }
    }
}

/// Whether `line` holds nothing but whitespace, comments and line ends
///
/// A fatal lexical error makes the line non-blank so it still goes through
/// normal handling.
pub fn is_empty_line(line: &str) -> bool {
    for token in tokenize(line) {
        match token {
            Ok(token) if token.is_blank() => {}
            Ok(_) => return false,
            Err(err) => {
                debug!("cannot scan {:?}: {}", line, err);
                return false;
            }
        }
    }
    true
}

fn setup_verdict(tokens: &mut Tokens<'_>) -> Result<bool, LexError> {
    let first = loop {
        match tokens.next() {
            None => return Ok(true),
            Some(token) => {
                let token = token?;
                match token.kind {
                    TokenKind::Eof => return Ok(true),
                    TokenKind::Whitespace | TokenKind::Eol => continue,
                    _ => break token,
                }
            }
        }
    };

    match first.kind {
        TokenKind::Keyword(kw) => match kw.leading_rule() {
            LeadingKeywordRule::SetupIfTypedef => has_typedef(tokens),
            LeadingKeywordRule::Query => Ok(false),
            LeadingKeywordRule::Setup => Ok(true),
        },
        TokenKind::Identifier => has_typedef(tokens),
        TokenKind::Preprocessor => Ok(true),
        _ => Ok(false),
    }
}

/// Search the rest of the sequence for a `typedef` keyword
fn has_typedef(tokens: &mut Tokens<'_>) -> Result<bool, LexError> {
    for token in tokens {
        if token?.keyword() == Some(Keyword::Typedef) {
            return Ok(true);
        }
    }
    Ok(false)
}
