//! Binary operators and their precedence tiers.

use crate::tokenizer::TokenKind;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence tier of an operation, in order from lowest precedence (reduced last) to highest
/// precedence (reduced first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`), and modulo (`%`), which separate
    /// factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,
}

impl Precedence {
    /// The tiers in the order they are reduced.
    pub const REDUCTION_ORDER: [Precedence; 3] = [Precedence::Exp, Precedence::Factor, Precedence::Term];
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the operator for the given token kind, if the token is an operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Mod => Some(Self::Mod),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div | Self::Mod => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the character used to write the operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Exp => '^',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Returns true if, in `a self b next c`, the operands `b` and `c` can be combined first
    /// without changing the result, i.e. `(a self b) next c == a self (b next c)`.
    ///
    /// This holds for `+` followed by `+` or `-`, and for `*` followed by `*`. Integer division,
    /// remainders, subtraction, and (left-to-right) exponentiation do not associate.
    pub fn associates_with(self, next: BinOpKind) -> bool {
        matches!(
            (self, next),
            (Self::Add, Self::Add | Self::Sub) | (Self::Mul, Self::Mul)
        )
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether this binary operator was implicitly inserted by the tokenizer, between juxtaposed
    /// operands such as `5x`.
    pub implicit: bool,
}

impl BinOp {
    /// Creates an operator that was written in the source.
    pub fn explicit(kind: BinOpKind) -> Self {
        Self { kind, implicit: false }
    }

    /// Creates an implicit multiplication operator.
    pub fn implicit_mul() -> Self {
        Self { kind: BinOpKind::Mul, implicit: true }
    }

    /// Returns the precedence of the binary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Precedence::Exp > Precedence::Factor);
        assert!(Precedence::Factor > Precedence::Term);
        assert_eq!(BinOpKind::Mod.precedence(), Precedence::Factor);
        assert_eq!(BinOp::implicit_mul().precedence(), Precedence::Factor);
    }

    #[test]
    fn associativity() {
        assert!(BinOpKind::Add.associates_with(BinOpKind::Sub));
        assert!(BinOpKind::Mul.associates_with(BinOpKind::Mul));
        assert!(!BinOpKind::Sub.associates_with(BinOpKind::Add));
        assert!(!BinOpKind::Mul.associates_with(BinOpKind::Div));
        assert!(!BinOpKind::Exp.associates_with(BinOpKind::Exp));
    }
}
