use ariadne::Fmt;
use bigfold_attrs::ErrorKind;
use bigfold_error::{ErrorKind, EXPR};

/// Tried to divide by zero, or to take a remainder modulo zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["", "this operation", "this is zero"],
    help = "the divisor or modulus must be non-zero",
)]
pub struct DivisionByZero;

/// The value has no inverse modulo the given modulus.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no inverse modulo `{}`", self.value, self.modulus),
    labels = ["this function call"],
    help = "an inverse only exists when the value and the modulus have no common factor",
)]
pub struct NoModularInverse {
    /// The value that was to be inverted.
    pub value: String,

    /// The modulus.
    pub modulus: String,
}

/// Tried to raise an integer to a negative power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "negative exponent",
    labels = ["", "this operation", "this exponent is negative"],
    help = format!(
        "the result would not be an integer; for modular inverses, use {}",
        "invmod(x, m)".fg(EXPR),
    ),
)]
pub struct NegativeExponent;

/// The exponent or root degree is larger than allowed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent too large",
    labels = ["", "this operation", "this exponent is too large"],
    help = format!(
        "the largest allowed exponent is {}; for modular exponentiation, use {}",
        self.max.to_string().fg(EXPR),
        "powmod(b, e, m)".fg(EXPR),
    ),
)]
pub struct ExponentTooLarge {
    /// The largest allowed exponent.
    pub max: u32,
}

/// The result of a power would have more bits than allowed, although the exponent is in range.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "power too large",
    labels = ["this base is too large", "this operation", ""],
    help = format!(
        "a power can have at most {} bits; for modular exponentiation, use {}",
        self.max_bits.to_string().fg(EXPR),
        "powmod(b, e, m)".fg(EXPR),
    ),
)]
pub struct PowerTooLarge {
    /// The largest number of bits a power may have.
    pub max_bits: u64,
}

/// Tried to take an even root of a negative number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "even root of a negative number",
    labels = ["this function call"],
    help = "even roots of negative numbers are not real, let alone integers",
)]
pub struct NegativeRoot;

/// The degree of a root was zero or negative.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid root degree",
    labels = ["this function call"],
    help = "the degree of a root must be a positive integer",
)]
pub struct InvalidRootDegree;

/// The function is not a builtin.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["no builtin has this name"],
    help = match suggestions.as_slice() {
        [] => format!("builtins: {}", crate::funcs::names().join(", ").fg(EXPR)),
        [only] => format!("a builtin with a similar name exists: {}", only.fg(EXPR)),
        many => format!("builtins with similar names exist: {}", many.join(", ").fg(EXPR)),
    },
)]
pub struct UnknownFunction {
    /// The name that was called.
    pub name: String,

    /// Builtins whose names differ from the called name by at most one edit.
    pub suggestions: Vec<String>,
}

/// A builtin was called with more arguments than it has parameters.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {} argument(s), but {} were given", name, expected, given),
    labels = ["in this call"],
    help = format!("remove the last {} argument(s)", given - expected),
)]
pub struct TooManyArguments {
    /// The builtin that was called.
    pub name: String,

    /// How many parameters the builtin has.
    pub expected: usize,

    /// How many arguments the call has.
    pub given: usize,
}

/// A builtin was called with fewer arguments than it has parameters.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {} argument(s), but {} were given", name, expected, given),
    labels = [format!("argument #{} is missing from this call", index + 1)],
    help = crate::funcs::get(name)
        .map(|builtin| format!("the signature is {}", builtin.sig_str().fg(EXPR)))
        .unwrap_or_default(),
)]
pub struct MissingArgument {
    /// The builtin that was called.
    pub name: String,

    /// The position of the first missing argument, starting at zero.
    pub index: usize,

    /// How many parameters the builtin has.
    pub expected: usize,

    /// How many arguments the call has.
    pub given: usize,
}

/// The expression could not be reduced to a single value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression does not reduce to a single value",
    labels = [format!("this simplifies to `{}`", (&self.expression).fg(EXPR))],
    help = "the expression contains variables, or operations that cannot be folded",
)]
pub struct UnresolvedExpression {
    /// The most simplified form of the expression that was reached.
    pub expression: String,
}

/// A `{` in a template does not start a valid placeholder.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid placeholder",
    labels = ["this placeholder"],
    help = format!(
        "placeholders are written as {} or {}; write {} for a literal brace",
        "{}".fg(EXPR),
        "{0}".fg(EXPR),
        "{{".fg(EXPR),
    ),
)]
pub struct InvalidPlaceholder;

/// A placeholder in a template refers to an argument that was not given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument #{} for the template", self.index + 1),
    labels = ["this placeholder"],
    help = format!("{} argument(s) were given", self.given),
)]
pub struct MissingTemplateArgument {
    /// The index of the missing argument.
    pub index: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument given to a template is never used by it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("argument #{} is never used by the template", self.index + 1),
    labels = ["this template"],
)]
pub struct UnusedTemplateArgument {
    /// The index of the unused argument.
    pub index: usize,
}

/// More arguments were given to a template than are supported.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many template arguments",
    labels = ["this template"],
    help = format!("at most {} arguments are supported; {} were given", self.max, self.given),
)]
pub struct TooManyTemplateArguments {
    /// The maximum number of arguments.
    pub max: usize,

    /// The number of arguments that were given.
    pub given: usize,
}
