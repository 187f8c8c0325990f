//! Functions related to powers and roots.

use crate::error::{
    kind::{
        DivisionByZero,
        ExponentTooLarge,
        InvalidRootDegree,
        NegativeExponent,
        NegativeRoot,
        NoModularInverse,
        PowerTooLarge,
    },
    ArithmeticError,
};
use crate::options::Options;
use rug::{ops::Pow as _, Integer};

/// Basic power function, `pow(x, y)`. This is also the implementation of the `^` operator.
///
/// The exponent must be non-negative and at most [`Options::max_exponent`], and the result may have
/// at most [`Options::max_power_bits`] bits.
#[derive(Debug)]
pub struct Pow;

impl Pow {
    pub fn eval_static(options: &Options, x: Integer, y: Integer) -> Result<Integer, ArithmeticError> {
        if y < 0 {
            return Err(NegativeExponent.into());
        }

        // powers of these bases do not grow, no matter the exponent
        if x == 0 || x == 1 {
            return Ok(if y == 0 { Integer::from(1) } else { x });
        }
        if x == -1 {
            return Ok(if y.is_even() { Integer::from(1) } else { x });
        }

        let exp = match y.to_u32() {
            Some(exp) if exp <= options.max_exponent => exp,
            _ => return Err(ExponentTooLarge { max: options.max_exponent }.into()),
        };

        // |x| < 2^bits, so the result has at most bits * exp bits
        let max_bits = options.max_power_bits();
        if u64::from(x.significant_bits()) * u64::from(exp) > max_bits {
            return Err(PowerTooLarge { max_bits }.into());
        }

        Ok(x.pow(exp))
    }
}

builtin!(Pow "pow" (options; x, y));

/// Modular exponentiation, `powmod(base, exp, modulus)`.
///
/// The result is in the range `[0, |modulus|)`. A negative exponent is allowed if the base has an
/// inverse modulo the modulus.
#[derive(Debug)]
pub struct PowMod;

impl PowMod {
    pub fn eval_static(base: Integer, exp: Integer, modulus: Integer) -> Result<Integer, ArithmeticError> {
        if modulus == 0 {
            return Err(DivisionByZero.into());
        }

        let value = base.to_string();
        base.pow_mod(&exp, &modulus).map_err(|_| {
            NoModularInverse { value, modulus: modulus.to_string() }.into()
        })
    }
}

builtin!(PowMod "powmod" (base, exp, modulus));

/// The integer square root function, `sqrt(x)`. The result is truncated.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static(x: Integer) -> Result<Integer, ArithmeticError> {
        if x < 0 {
            return Err(NegativeRoot.into());
        }
        Ok(x.sqrt())
    }
}

builtin!(Sqrt "sqrt" (x));

/// The integer `n`th root function, `root(x, n)`. The result is truncated towards zero.
///
/// Odd roots of negative numbers are negative. The degree must be positive and at most
/// [`Options::max_exponent`].
#[derive(Debug)]
pub struct Root;

impl Root {
    pub fn eval_static(options: &Options, x: Integer, n: Integer) -> Result<Integer, ArithmeticError> {
        if n <= 0 {
            return Err(InvalidRootDegree.into());
        }

        let Some(degree) = n.to_u32() else {
            return Err(InvalidRootDegree.into());
        };
        if degree > options.max_exponent {
            return Err(ExponentTooLarge { max: options.max_exponent }.into());
        }
        if x < 0 && degree % 2 == 0 {
            return Err(NegativeRoot.into());
        }

        Ok(x.root(degree))
    }
}

builtin!(Root "root" (options; x, n));
