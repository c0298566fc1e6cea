//! Turns an input buffer into a stream of spanned tokens.
//!
//! The token list is unbounded; anything the grammar does not know is reported back with the
//! offending span instead of being skipped.

mod token;

use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows
/// the parser to backtrack in case of an error.
///
/// An unrecognized character stops tokenization and is reported with its span.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token<'_>]>, Range<usize>> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(
        input: &'source str,
        expected: [(TokenKind, &'source str); N],
    ) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Num, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "2"),
            ],
        );
    }

    #[test]
    fn functions_and_variables() {
        compare_tokens(
            "sin(x)/x_1",
            [
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Div, "/"),
                (TokenKind::Name, "x_1"),
            ],
        );
    }

    #[test]
    fn fractional_literals() {
        compare_tokens(
            "2.25^0.5",
            [
                (TokenKind::Num, "2.25"),
                (TokenKind::Caret, "^"),
                (TokenKind::Num, "0.5"),
            ],
        );
    }

    #[test]
    fn unknown_characters_are_reported() {
        let tokens = tokenize_complete("2 $ 2");
        assert_eq!(tokens, Err(2..3));
    }

    #[test]
    fn complete_stream_keeps_spans() {
        let tokens = tokenize_complete("x + 1").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(kinds, [
            TokenKind::Name,
            TokenKind::Whitespace,
            TokenKind::Add,
            TokenKind::Whitespace,
            TokenKind::Num,
        ]);
        assert_eq!(tokens[4].span, 4..5);
    }
}
