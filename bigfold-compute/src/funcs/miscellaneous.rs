//! Uncategorized functions.

use rug::Integer;

/// Returns the absolute value, `abs(x)`.
#[derive(Debug)]
pub struct Abs;

impl Abs {
    pub fn eval_static(x: Integer) -> Integer {
        x.abs()
    }
}

builtin!(Abs "abs" (x));

/// Returns the smaller of two values, `min(x, y)`.
#[derive(Debug)]
pub struct Min;

impl Min {
    pub fn eval_static(x: Integer, y: Integer) -> Integer {
        x.min(y)
    }
}

builtin!(Min "min" (x, y));

/// Returns the larger of two values, `max(x, y)`.
#[derive(Debug)]
pub struct Max;

impl Max {
    pub fn eval_static(x: Integer, y: Integer) -> Integer {
        x.max(y)
    }
}

builtin!(Max "max" (x, y));
