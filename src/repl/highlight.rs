//! Token-based syntax highlighting
//!
//! Colours come from the lexer's categories only. Text the lexer skips or
//! cannot reach (after a fatal error) is copied through unstyled.

use owo_colors::{OwoColorize, Style};

use crate::frontend::lexer::{tokenize, OtherKind, Token, TokenKind};

fn style_of(
    token: &Token,
    text: &str,
) -> Option<Style> {
    let style = match token.kind {
        TokenKind::Keyword(_) => Style::new().bright_blue().bold(),
        TokenKind::Preprocessor => Style::new().magenta(),
        TokenKind::Other(OtherKind::Number) => Style::new().cyan(),
        TokenKind::Other(OtherKind::CharLiteral) | TokenKind::Other(OtherKind::StringLiteral) => {
            Style::new().green()
        }
        TokenKind::Whitespace if text.starts_with("//") || text.starts_with("/*") => {
            Style::new().bright_black()
        }
        _ => return None,
    };
    Some(style)
}

/// `source` with ANSI colours applied
pub fn highlight_cpp(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut cursor = 0;

    for token in tokenize(source) {
        let Ok(token) = token else { break };
        let (start, end) = (token.span.start.offset, token.span.end.offset);
        if start > cursor {
            out.push_str(&source[cursor..start]);
        }
        let text = &source[start..end];
        match style_of(&token, text) {
            Some(style) => out.push_str(&text.style(style).to_string()),
            None => out.push_str(text),
        }
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}
