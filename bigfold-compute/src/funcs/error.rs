use crate::error::{
    kind::{MissingArgument, TooManyArguments},
    ArithmeticError,
    Error,
};
use std::ops::Range;

/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltinError {
    /// The function was called with too many arguments.
    TooManyArguments(TooManyArguments),

    /// An argument to the function call is missing.
    MissingArgument(MissingArgument),

    /// The function is undefined for the given arguments.
    Arithmetic(ArithmeticError),
}

impl BuiltinError {
    /// Convert the [`BuiltinError`] into an [`Error`], pointing at the span of the function call.
    pub fn into_error(self, call: Range<usize>) -> Error {
        match self {
            BuiltinError::TooManyArguments(e) => Error::new(vec![call], e),
            BuiltinError::MissingArgument(e) => Error::new(vec![call], e),
            BuiltinError::Arithmetic(e) => e.into_error(vec![call]),
        }
    }
}

impl From<ArithmeticError> for BuiltinError {
    fn from(e: ArithmeticError) -> Self {
        BuiltinError::Arithmetic(e)
    }
}
