use logos::Logos;
use std::ops::Range;

/// The character classes recognized by the tokenizer. Consecutive characters of the same class
/// are grouped into a single token, except for operators and parentheses, which are always one
/// character long.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("^")]
    Exp,

    #[regex(r"[a-zA-Z]+")]
    Letters,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// Digits and decimal points. Decimal points are accepted here so that `1.5` is reported as
    /// one invalid number instead of two numbers and a stray symbol.
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r".", priority = 0)]
    Symbol,
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
