use ariadne::Fmt;
use bigfold_attrs::ErrorKind;
use bigfold_error::{ErrorKind, EXPR};

/// A character that is not part of any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character is not allowed here"],
    help = format!("expressions may contain digits, letters, whitespace, {} and {}", "+ - * / % ^".fg(EXPR), "( ) ,".fg(EXPR)),
)]
pub struct InvalidCharacter {
    /// The character that was found.
    pub character: char,
}

/// A number contained something other than decimal digits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
    help = "only whole numbers are supported; decimal points are not allowed",
)]
pub struct InvalidNumber {
    /// The text of the number.
    pub lexeme: String,
}

/// A parenthesis was never closed, or a closing parenthesis has no matching opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis"],
    help = if *opening {
        format!("add a closing parenthesis {} somewhere after this", ")".fg(EXPR))
    } else {
        format!("add an opening parenthesis {} somewhere before this", "(".fg(EXPR))
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis is an opening parenthesis `(`. Otherwise, it is a stray closing
    /// parenthesis `)`.
    pub opening: bool,
}

/// The expression contained no tokens at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// A pair of parentheses contained nothing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["these parentheses contain nothing"],
    help = format!("add an {} between the parentheses", "expression".fg(EXPR)),
)]
pub struct EmptyParenthesis;

/// An argument separator was used outside of a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected comma",
    labels = ["this comma is not inside a function call"],
    help = "commas may only be used to separate the arguments of a function",
)]
pub struct UnexpectedSeparator;

/// A function argument was empty, as in `f(1,)` or `f(,1)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing function argument",
    labels = [format!("expected an {} here", "argument".fg(EXPR))],
)]
pub struct EmptyArgument;

/// The expression is nested too deeply to be processed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum nesting depth exceeded",
    labels = ["this group is nested too deeply"],
    help = format!("expressions can be nested at most {} levels deep", max_depth.to_string().fg(EXPR)),
)]
pub struct DepthExceeded {
    /// The maximum depth that was allowed.
    pub max_depth: usize,
}
