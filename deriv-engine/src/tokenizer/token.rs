use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Caret,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A decimal literal with an optional fractional part.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Num,

    /// An identifier: a named function such as `sin`, or a variable. Which of the two it is gets
    /// decided by the parser against the operator symbol table.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
}

impl TokenKind {
    /// Returns true if the token should be ignored by the parser.
    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token should be ignored by the parser.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
