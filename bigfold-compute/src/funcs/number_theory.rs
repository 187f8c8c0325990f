//! Division, remainders, and related functions.

use crate::error::{kind::{DivisionByZero, NoModularInverse}, ArithmeticError};
use rug::Integer;

/// Integer division truncating towards zero. This is the implementation of the `/` operator.
#[derive(Debug)]
pub struct Div;

impl Div {
    pub fn eval_static(x: Integer, y: Integer) -> Result<Integer, ArithmeticError> {
        if y == 0 {
            return Err(DivisionByZero.into());
        }
        Ok(x / y)
    }
}

/// The Euclidean remainder, `mod(x, y)`. This is also the implementation of the `%` operator.
///
/// The result is always in the range `[0, |y|)`, regardless of the signs of the operands.
#[derive(Debug)]
pub struct Mod;

impl Mod {
    pub fn eval_static(x: Integer, y: Integer) -> Result<Integer, ArithmeticError> {
        if y == 0 {
            return Err(DivisionByZero.into());
        }

        let rem = x % &y;
        if rem < 0 {
            Ok(rem + y.abs())
        } else {
            Ok(rem)
        }
    }
}

builtin!(Mod "mod" (x, y));

/// The modular multiplicative inverse, `invmod(x, modulus)`.
///
/// The result is in the range `[0, |modulus|)`. The inverse only exists if `x` and the modulus are
/// coprime.
#[derive(Debug)]
pub struct InvMod;

impl InvMod {
    pub fn eval_static(x: Integer, modulus: Integer) -> Result<Integer, ArithmeticError> {
        let no_inverse = |x: &Integer, modulus: &Integer| NoModularInverse {
            value: x.to_string(),
            modulus: modulus.to_string(),
        };

        if modulus == 0 {
            return Err(no_inverse(&x, &modulus).into());
        }

        match x.invert(&modulus) {
            Ok(inverse) => Ok(inverse),
            Err(x) => Err(no_inverse(&x, &modulus).into()),
        }
    }
}

builtin!(InvMod "invmod" (x, modulus));

/// The greatest common divisor, `gcd(x, y)`. The result is never negative.
#[derive(Debug)]
pub struct Gcd;

impl Gcd {
    pub fn eval_static(x: Integer, y: Integer) -> Integer {
        x.gcd(&y)
    }
}

builtin!(Gcd "gcd" (x, y));

/// The least common multiple, `lcm(x, y)`. The result is never negative.
#[derive(Debug)]
pub struct Lcm;

impl Lcm {
    pub fn eval_static(x: Integer, y: Integer) -> Integer {
        x.lcm(&y)
    }
}

builtin!(Lcm "lcm" (x, y));

#[cfg(test)]
mod tests {
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn truncating_division() {
        assert_eq!(Div::eval_static(int(7), int(2)), Ok(int(3)));
        assert_eq!(Div::eval_static(int(-7), int(2)), Ok(int(-3)));
        assert_eq!(Div::eval_static(int(7), int(-2)), Ok(int(-3)));
        assert_eq!(Div::eval_static(int(1), int(0)), Err(ArithmeticError::DivisionByZero(DivisionByZero)));
    }

    #[test]
    fn euclidean_remainder() {
        assert_eq!(Mod::eval_static(int(300), int(40)), Ok(int(20)));
        assert_eq!(Mod::eval_static(int(-7), int(3)), Ok(int(2)));
        assert_eq!(Mod::eval_static(int(7), int(-3)), Ok(int(1)));
        assert_eq!(Mod::eval_static(int(-7), int(-3)), Ok(int(2)));
        assert_eq!(Mod::eval_static(int(5), int(0)), Err(ArithmeticError::DivisionByZero(DivisionByZero)));
    }

    #[test]
    fn modular_inverse() {
        assert_eq!(InvMod::eval_static(int(301), int(400)), Ok(int(101)));
        assert_eq!(InvMod::eval_static(int(3), int(-7)), Ok(int(5)));
        assert_eq!(
            InvMod::eval_static(int(6), int(9)),
            Err(ArithmeticError::NoModularInverse(NoModularInverse {
                value: "6".to_string(),
                modulus: "9".to_string(),
            })),
        );
        assert!(InvMod::eval_static(int(6), int(0)).is_err());
    }

    #[test]
    fn gcd_lcm() {
        assert_eq!(Gcd::eval_static(int(-12), int(18)), 6);
        assert_eq!(Lcm::eval_static(int(4), int(-6)), 12);
        assert_eq!(Gcd::eval_static(int(0), int(0)), 0);
    }
}
