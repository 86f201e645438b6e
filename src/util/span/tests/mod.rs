//! Span unit tests

use crate::util::span::{Position, Span};

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = Position::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_display() {
        let pos = Position::with_offset(10, 20, 300);
        assert_eq!(format!("{}", pos), "10:20");
    }

    #[test]
    fn test_end_of_single_line() {
        let pos = Position::end_of("int x");
        assert_eq!(pos, Position::with_offset(1, 6, 5));
    }

    #[test]
    fn test_end_of_multi_line() {
        let pos = Position::end_of("typedef int T;\nT");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 16);
    }

    #[test]
    fn test_end_of_crlf_counts_once() {
        let pos = Position::end_of("a\r\nb");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 4);
    }

    #[test]
    fn test_end_of_trailing_newline() {
        let pos = Position::end_of("x\n");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    #[test]
    fn test_span_len_and_slice() {
        let text = "typedef int T;";
        let span = Span::new(
            Position::with_offset(1, 9, 8),
            Position::with_offset(1, 12, 11),
        );
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.slice(text), Some("int"));
    }

    #[test]
    fn test_span_empty() {
        let span = Span::new(Position::start(), Position::start());
        assert!(span.is_empty());
        assert_eq!(span.slice(""), Some(""));
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(
            Position::with_offset(1, 1, 0),
            Position::with_offset(1, 4, 3),
        );
        assert_eq!(format!("{}", span), "[1:1 - 1:4]");
    }
}
