//! Constant folding and evaluation of expressions over arbitrary-precision integers.
//!
//! An [`Expression`] is parsed once with [`bigfold_parser`], then rewritten in place by the
//! [`resolve::Resolver`] until it is either a single integer or stops changing. Parts of the
//! expression that involve variables are left as they are, so an expression can also be
//! simplified without being fully evaluated:
//!
//! ```
//! use bigfold_compute::{eval, Expression};
//!
//! assert_eq!(eval("2^607 % 1000").unwrap(), 128);
//!
//! let mut expr = Expression::new("2*3*x+(4-1)").unwrap();
//! expr.resolve().unwrap();
//! assert_eq!(expr.expression_result(), "6*x+3");
//! ```
//!
//! Builtin functions are listed in [`funcs`], and the limits applied while evaluating are
//! configured with [`options::Options`].

pub mod error;
pub mod expr;
pub mod funcs;
pub mod options;
pub mod primitive;
pub mod resolve;
pub mod template;

pub use expr::{eval, eval_with, Expression};
pub use template::evalf;
