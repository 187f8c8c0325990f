pub mod kind;

pub use bigfold_error::Error;

use kind::{
    DivisionByZero,
    ExponentTooLarge,
    InvalidRootDegree,
    NegativeExponent,
    NegativeRoot,
    NoModularInverse,
    PowerTooLarge,
};
use std::ops::Range;

/// An arithmetic operation that is undefined for its operands.
///
/// These are produced by the integer operations before the location of the failing operation is
/// known, and converted into an [`Error`] with [`ArithmeticError::into_error`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// Division or remainder by zero.
    DivisionByZero(DivisionByZero),

    /// The value has no modular inverse.
    NoModularInverse(NoModularInverse),

    /// A power with a negative exponent.
    NegativeExponent(NegativeExponent),

    /// A power with an exponent larger than allowed.
    ExponentTooLarge(ExponentTooLarge),

    /// A power whose result would be larger than allowed.
    PowerTooLarge(PowerTooLarge),

    /// An even root of a negative number.
    NegativeRoot(NegativeRoot),

    /// A root of degree zero or less.
    InvalidRootDegree(InvalidRootDegree),
}

impl ArithmeticError {
    /// Convert the [`ArithmeticError`] into an [`Error`] pointing at the given spans.
    ///
    /// For binary operations, the spans should be those of the left operand, the operator, and
    /// the right operand, in that order. For function calls, the span of the whole call.
    pub fn into_error(self, spans: Vec<Range<usize>>) -> Error {
        match self {
            ArithmeticError::DivisionByZero(e) => Error::new(spans, e),
            ArithmeticError::NoModularInverse(e) => Error::new(spans, e),
            ArithmeticError::NegativeExponent(e) => Error::new(spans, e),
            ArithmeticError::ExponentTooLarge(e) => Error::new(spans, e),
            ArithmeticError::PowerTooLarge(e) => Error::new(spans, e),
            ArithmeticError::NegativeRoot(e) => Error::new(spans, e),
            ArithmeticError::InvalidRootDegree(e) => Error::new(spans, e),
        }
    }
}

macro_rules! from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for ArithmeticError {
                fn from(e: $kind) -> Self {
                    ArithmeticError::$kind(e)
                }
            }
        )*
    };
}

from_kind! {
    DivisionByZero,
    NoModularInverse,
    NegativeExponent,
    ExponentTooLarge,
    PowerTooLarge,
    NegativeRoot,
    InvalidRootDegree,
}
