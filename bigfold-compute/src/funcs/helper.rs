//! Private helpers used by the `builtin` macro.

use crate::error::{
    kind::{MissingArgument, TooManyArguments},
    ArithmeticError,
};
use rug::Integer;
use super::{error::BuiltinError, Builtin};

/// Conversion from the return type of an `eval_static` method into the result of a builtin.
pub(crate) trait IntoOutput {
    fn into_output(self) -> Result<Integer, ArithmeticError>;
}

impl IntoOutput for Integer {
    fn into_output(self) -> Result<Integer, ArithmeticError> {
        Ok(self)
    }
}

impl IntoOutput for Result<Integer, ArithmeticError> {
    fn into_output(self) -> Result<Integer, ArithmeticError> {
        self
    }
}

/// Builds the error for a call that is missing the argument at `index`.
pub(crate) fn missing_argument(builtin: &dyn Builtin, index: usize, given: usize) -> BuiltinError {
    BuiltinError::MissingArgument(MissingArgument {
        name: builtin.name().to_string(),
        index,
        expected: builtin.params().len(),
        given,
    })
}

/// Builds the error for a call with more arguments than the builtin takes.
pub(crate) fn too_many_arguments(builtin: &dyn Builtin, given: usize) -> BuiltinError {
    BuiltinError::TooManyArguments(TooManyArguments {
        name: builtin.name().to_string(),
        expected: builtin.params().len(),
        given,
    })
}
