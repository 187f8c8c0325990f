//! The flat token stream produced by the [`Parser`](super::Parser), before parentheses are
//! matched.

use rug::Integer;
use std::ops::Range;
use super::token::op::BinOp;

/// The kinds of tokens in the flat stream.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatKind {
    /// An integer value.
    Literal(Integer),

    /// A single-letter variable.
    Variable(char),

    /// A binary operator, possibly inserted by the tokenizer.
    Operator(BinOp),

    /// The name of a function. Always followed by [`FlatKind::OpenParen`].
    Function(String),

    /// An opening parenthesis, either of a group or of a function's argument list.
    OpenParen,

    /// A closing parenthesis. Never retained in the tree.
    CloseParen,

    /// The `,` between two function arguments.
    Separator,
}

/// A token in the flat stream.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatToken {
    /// The kind of token.
    pub kind: FlatKind,

    /// The region of the source code that this token originated from. Tokens inserted by the
    /// tokenizer have an empty span.
    pub span: Range<usize>,
}

impl FlatToken {
    /// Creates a new token.
    pub fn new(kind: FlatKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Returns true if the token was inserted by the tokenizer rather than written in the source.
    pub fn is_synthesized(&self) -> bool {
        self.span.is_empty()
    }
}
