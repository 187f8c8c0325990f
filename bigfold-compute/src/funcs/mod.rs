//! All built-in functions.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method. This
//! method can be used to evaluate the function in Rust code directly. The [`Builtin`] trait is
//! also implemented for each function, which checks the number of arguments before calling
//! `eval_static`, so that the function can be called by name from an expression.
//!
//! # Example
//!
//! ```
//! use bigfold_compute::funcs::{self, number_theory::InvMod};
//! use bigfold_compute::options::Options;
//! use rug::Integer;
//!
//! // evaluate invmod(301, 400) using `eval_static`
//! let result = InvMod::eval_static(Integer::from(301), Integer::from(400)).unwrap();
//! assert_eq!(result, 101);
//!
//! // evaluate it using the `Builtin` trait
//! let invmod = funcs::get("invmod").unwrap();
//! let result = invmod.eval(&Options::default(), vec![Integer::from(301), Integer::from(400)]);
//! assert_eq!(result.unwrap(), 101);
//! ```

pub mod error;
mod helper;

/// Implements [`Builtin`] for a unit struct by forwarding to its `eval_static` method.
///
/// Parameters are listed in order. If the list starts with `options;`, the current [`Options`]
/// are passed to `eval_static` before the arguments.
///
/// [`Options`]: crate::options::Options
macro_rules! builtin {
    ($upname:ident $name:literal (options; $($param:ident),*)) => {
        builtin!(@impl $upname $name options [$($param),*] $upname::eval_static(options, $($param),*));
    };
    ($upname:ident $name:literal ($($param:ident),*)) => {
        builtin!(@impl $upname $name options [$($param),*] $upname::eval_static($($param),*));
    };
    (@impl $upname:ident $name:literal $options:ident [$($param:ident),*] $call:expr) => {
        impl $crate::funcs::Builtin for $upname {
            fn name(&self) -> &'static str {
                $name
            }

            fn params(&self) -> &'static [&'static str] {
                &[$(stringify!($param)),*]
            }

            #[allow(unused_assignments, unused_variables)]
            fn eval(
                &self,
                $options: &$crate::options::Options,
                args: Vec<rug::Integer>,
            ) -> Result<rug::Integer, $crate::funcs::error::BuiltinError> {
                let given = args.len();
                let mut args = args.into_iter();
                let mut index = 0;
                $(
                    let Some($param) = args.next() else {
                        return Err($crate::funcs::helper::missing_argument(self, index, given));
                    };
                    index += 1;
                )*
                if given > index {
                    return Err($crate::funcs::helper::too_many_arguments(self, given));
                }

                Ok($crate::funcs::helper::IntoOutput::into_output($call)?)
            }
        }
    };
}

pub mod miscellaneous;
pub mod number_theory;
pub mod power;

use error::BuiltinError;
use crate::options::Options;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use rug::Integer;
use std::collections::HashMap;

/// A trait implemented by all builtin functions.
pub trait Builtin: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// The names of the function's parameters. Every parameter is required.
    fn params(&self) -> &'static [&'static str];

    /// Returns the signature of the function, such as `mod(x, y)`.
    fn sig_str(&self) -> String {
        format!("{}({})", self.name(), self.params().join(", "))
    }

    /// Evaluates the function.
    fn eval(&self, options: &Options, args: Vec<Integer>) -> Result<Integer, BuiltinError>;
}

/// Every builtin function, by name.
static BUILTINS: Lazy<HashMap<&'static str, Box<dyn Builtin>>> = Lazy::new(|| {
    use miscellaneous::*;
    use number_theory::*;
    use power::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, Box::new($upname) as Box<dyn Builtin>),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "abs" Abs,
        "min" Min,
        "max" Max,
        "sqrt" Sqrt,
        "root" Root,
        "pow" Pow,
        "powmod" PowMod,
        "mod" Mod,
        "invmod" InvMod,
        "gcd" Gcd,
        "lcm" Lcm,
    }
});

/// Returns all builtin functions, by name.
pub fn all() -> &'static HashMap<&'static str, Box<dyn Builtin>> {
    &BUILTINS
}

/// Returns the builtin function with the given name.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    BUILTINS.get(name).map(|builtin| &**builtin)
}

/// Returns the names of all builtin functions, sorted alphabetically.
pub fn names() -> Vec<&'static str> {
    let mut names = BUILTINS.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}

/// Returns the builtin functions with a name similar to the given name, sorted alphabetically.
pub fn similar(name: &str) -> Vec<String> {
    let mut similar = BUILTINS
        .keys()
        .filter(|n| levenshtein(n, name) < 2)
        .map(|n| n.to_string())
        .collect::<Vec<_>>();
    similar.sort_unstable();
    similar
}
