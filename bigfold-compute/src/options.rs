use bigfold_parser::parser::MAX_DEPTH;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default maximum exponent accepted by `^`, `pow`, and `root`.
pub const MAX_EXPONENT: u32 = 1 << 24;

/// What to do with calls to functions that are not builtins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnknownFunctions {
    /// Fail with an [`UnknownFunction`](crate::error::kind::UnknownFunction) error.
    ///
    /// This is the default option.
    #[default]
    Error,

    /// Leave the call in the expression as symbolic residue. Its arguments are still simplified.
    Preserve,
}

/// Options that control how expressions are parsed and resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// The maximum nesting depth of parentheses and function calls. Deeper expressions fail with a
    /// [`DepthExceeded`](bigfold_parser::parser::error::kind::DepthExceeded) error.
    pub max_depth: usize,

    /// The largest exponent that `^` and `pow` will compute, and the largest degree `root` will
    /// accept. It also bounds the size of a power's result: see [`Options::max_power_bits`].
    ///
    /// Modular exponentiation with `powmod` is not limited by this option.
    pub max_exponent: u32,

    /// What to do with calls to unknown functions.
    pub unknown_functions: UnknownFunctions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_exponent: MAX_EXPONENT,
            unknown_functions: UnknownFunctions::default(),
        }
    }
}

impl Options {
    /// Creates a builder starting from the default options.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// The largest number of bits the result of `^` or `pow` may have, which is that of a 64-bit
    /// base raised to [`Options::max_exponent`]. Together with the exponent limit, this bounds the
    /// memory a single power can use, even when its base is already huge.
    pub fn max_power_bits(&self) -> u64 {
        u64::from(self.max_exponent) * u64::from(u64::BITS)
    }

    /// Wraps the given [`Options`] into a builder for further customization.
    pub fn into_builder(self) -> OptionsBuilder {
        OptionsBuilder(self)
    }
}

/// A builder for [`Options`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth. See [`Options::max_depth`] for more information.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Sets the maximum exponent. See [`Options::max_exponent`] for more information.
    pub fn max_exponent(mut self, max_exponent: u32) -> Self {
        self.0.max_exponent = max_exponent;
        self
    }

    /// Sets what to do with unknown functions. See [`UnknownFunctions`] for more information.
    pub fn unknown_functions(mut self, unknown_functions: UnknownFunctions) -> Self {
        self.0.unknown_functions = unknown_functions;
        self
    }

    /// Builds the [`Options`] struct.
    pub fn build(self) -> Options {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.max_depth, 256);
        assert_eq!(options.max_exponent, 1 << 24);
        assert_eq!(options.unknown_functions, UnknownFunctions::Error);
        assert_eq!(options.max_power_bits(), 1 << 30);
        assert_eq!(Options::builder().build(), options);
    }

    #[test]
    fn builder() {
        let options = OptionsBuilder::new()
            .max_depth(8)
            .unknown_functions(UnknownFunctions::Preserve)
            .build();
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.max_exponent, MAX_EXPONENT);

        let options = options.into_builder().max_exponent(10).build();
        assert_eq!(options.max_exponent, 10);
        assert_eq!(options.unknown_functions, UnknownFunctions::Preserve);
    }
}
