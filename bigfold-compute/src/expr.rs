use bigfold_parser::parser::{node::{Node, Tree}, parse_with_depth};
use crate::{
    error::{kind::UnresolvedExpression, Error},
    options::Options,
    resolve::Resolver,
};
use rug::Integer;
use tracing::debug;

/// A parsed expression that can be simplified and evaluated.
///
/// ```
/// use bigfold_compute::Expression;
///
/// let mut expr = Expression::new("5x+1+1").unwrap();
/// expr.resolve().unwrap();
/// assert_eq!(expr.expression_result(), "5*x+2");
/// assert!(!expr.found_result());
///
/// let mut expr = Expression::new("1289^3%25777").unwrap();
/// assert_eq!(*expr.eval().unwrap(), 18524);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The text the expression was parsed from.
    source: String,

    /// The current state of the expression.
    tree: Tree,

    /// The options used to parse and resolve the expression.
    options: Options,
}

impl Expression {
    /// Parses an expression with the default options.
    pub fn new(source: &str) -> Result<Self, Error> {
        Self::with_options(source, Options::default())
    }

    /// Parses an expression with the given options.
    pub fn with_options(source: &str, options: Options) -> Result<Self, Error> {
        let tree = parse_with_depth(source, options.max_depth)?;
        Ok(Self { source: source.to_string(), tree, options })
    }

    /// Parses an expression given in several parts, which are joined by spaces.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, Error> {
        let source = parts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        Self::new(&source)
    }

    /// Returns the text the expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the options of the expression.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the current tree of the expression.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the current top-level tokens of the expression.
    pub fn tokens(&self) -> Vec<&Node> {
        self.tree.top_level().collect()
    }

    /// Runs one resolution pass over the expression. Returns true if the expression changed.
    pub fn resolve(&mut self) -> Result<bool, Error> {
        Resolver::new(&mut self.tree, &self.options).resolve()
    }

    /// Resolves the expression until it is a single literal, returning its value.
    ///
    /// If a pass leaves the text of the expression unchanged before that happens, the expression
    /// cannot be evaluated and an [`UnresolvedExpression`] error is returned, carrying the most
    /// simplified form of the expression. If a pass fails, its error is returned with a note
    /// giving the form of the expression reached when it failed.
    pub fn eval(&mut self) -> Result<&Integer, Error> {
        let mut pass = 0;
        while !self.found_result() {
            let before = self.tree.to_string();
            pass += 1;
            if let Err(err) = self.resolve() {
                let reached = self.expression_result();
                debug!(pass, expression = %reached, "pass failed");
                return Err(err.with_note(format!("while evaluating `{}`", reached)));
            }

            let after = self.tree.to_string();
            debug!(pass, len = after.len(), "resolved");
            if after == before && !self.found_result() {
                debug!(pass, expression = %after, "no progress, giving up");
                return Err(self.unresolved());
            }
        }

        self.value_result().ok_or_else(|| self.unresolved())
    }

    /// Returns true if the expression has been reduced to a single literal.
    pub fn found_result(&self) -> bool {
        self.tree.as_literal().is_some()
    }

    /// Returns the text of the expression in its current state.
    pub fn expression_result(&self) -> String {
        self.tree.to_string()
    }

    /// Returns the value of the expression if it has been reduced to a single literal.
    pub fn value_result(&self) -> Option<&Integer> {
        self.tree.as_literal()
    }

    /// Builds the error for an expression that could not be reduced to a single literal.
    fn unresolved(&self) -> Error {
        Error::new(vec![0..self.source.len()], UnresolvedExpression {
            expression: self.expression_result(),
        })
    }
}

/// Evaluates the expression with the default options.
///
/// ```
/// use bigfold_compute::eval;
///
/// assert_eq!(eval("invmod(301, 400)").unwrap(), 101);
/// assert!(eval("x+1").is_err());
/// ```
pub fn eval(expression: &str) -> Result<Integer, Error> {
    eval_with(expression, Options::default())
}

/// Evaluates the expression with the given options.
pub fn eval_with(expression: &str, options: Options) -> Result<Integer, Error> {
    let mut expr = Expression::with_options(expression, options)?;
    expr.eval().cloned()
}

#[cfg(test)]
mod tests {
    use bigfold_parser::parser::{error::kind::{DepthExceeded, InvalidCharacter, UnclosedParenthesis}, parse};
    use crate::{
        error::kind::{
            DivisionByZero,
            MissingArgument,
            NoModularInverse,
            PowerTooLarge,
            TooManyArguments,
            UnknownFunction,
        },
        options::UnknownFunctions,
        primitive::{int, int_from_str},
    };
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates the expression, panicking if it fails.
    fn value(source: &str) -> Integer {
        match eval(source) {
            Ok(value) => value,
            Err(err) => panic!("`{}` failed: {}", source, err),
        }
    }

    /// Runs a single resolution pass and returns the text of the result.
    fn simplify(source: &str) -> String {
        let mut expr = Expression::new(source).unwrap();
        expr.resolve().unwrap();
        expr.expression_result()
    }

    #[test]
    fn literal_expressions() {
        let cases = [
            ("2^2", 4),
            ("1+1", 2),
            ("-1+2", 1),
            ("2-1", 1),
            ("1-10", -9),
            ("1+2*3", 7),
            ("2*3+1", 7),
            ("2*3/2", 3),
            ("2/2*3", 3),
            ("1+2*3/2", 4),
            ("-3+3*2+5-2*2", 4),
            ("4+3-2+1", 6),
            ("2-3+4-2", 1),
            ("24*3+15*2-31*4-1+2", -21),
            ("(1+2)*3", 9),
            ("3*(1+2)", 9),
            ("3*(1+2)*4", 36),
            ("(3*4+(4*7)+55)+(5*5)", 120),
            ("mod(300, 40)", 20),
            ("invmod(301, 400)", 101),
            ("3 * 4", 12),
            ("1289^3%25777", 18524),
            ("2^3^2", 64),
            ("100/7/2", 7),
            ("-7/2", -3),
            ("-7%3", -1),
            ("(-7)%3", 2),
            ("2(3)(4)", 24),
            ("(1)-2+3", 2),
            ("10-(2+3)", 5),
            ("max(abs(-9), 3) + min(2, 1)", 10),
            ("1 + max(1+1, 3*2)", 7),
            ("pow(2, 10) - sqrt(99)", 1015),
            ("gcd(12, 18) * lcm(4, 6)", 72),
            ("powmod(4, 13, 497)", 445),
            ("root(-27, 3)", -3),
            ("((((((5))))))", 5),
        ];

        for (source, expected) in cases {
            assert_eq!(value(source), expected, "{}", source);
        }
    }

    #[test]
    fn mersenne_prime() {
        let expected = int_from_str(
            "531137992816767098689588206552468627329593117727031923199444138200403559860852242739162502265229285668889329486246501015346579337652707239409519978766587351943831270835393219031728127",
        ).unwrap();
        assert_eq!(value("2^607-1"), expected);
        assert_eq!(expected.to_string().len(), 183);
    }

    #[test]
    fn symbolic_residue() {
        assert_eq!(simplify("5x+1+1"), "5*x+2");
        assert_eq!(simplify("x+1+1"), "x+2");
        assert_eq!(simplify("x-1+1"), "x-1+1");
        assert_eq!(simplify("x*2+3"), "x*2+3");
        assert_eq!(simplify("2+3*x"), "2+3*x");
        assert_eq!(simplify("2*3*x+(4-1)"), "6*x+3");
        assert_eq!(simplify("x^(1+1)"), "x^2");
        assert_eq!(simplify("max(x, 2+2)"), "max(x,4)");
        assert_eq!(simplify("(x+1)*(2+2)"), "(x+1)*4");
    }

    #[test]
    fn redundant_parentheses_collapse() {
        let mut expr = Expression::new("(1+2)*3").unwrap();
        assert_eq!(expr.tree().arena_len(), 6);
        expr.eval().unwrap();
        assert_eq!(expr.expression_result(), parse("9").unwrap().to_string());

        // the group itself is dropped, not replaced
        assert_eq!(expr.tree().arena_len(), 6);
    }

    #[test]
    fn folds_reuse_operand_nodes() {
        let mut expr = Expression::new("2^4096*3*5*7+max(1, 2)").unwrap();
        let len = expr.tree().arena_len();
        expr.eval().unwrap();
        assert_eq!(expr.tree().arena_len(), len);
        assert_eq!(expr.value_result(), Some(&((int(1) << 4096) * 105 + 2)));
    }

    #[test]
    fn resolve_is_idempotent_on_literals() {
        let mut expr = Expression::new("42").unwrap();
        let before = expr.clone();
        assert!(!expr.resolve().unwrap());
        assert_eq!(expr, before);
        assert_eq!(expr.value_result(), Some(&int(42)));
    }

    #[test]
    fn getters() {
        let mut expr = Expression::from_parts(&["2", "*", "x"]).unwrap();
        assert_eq!(expr.source(), "2 * x");
        assert_eq!(expr.tokens().len(), 3);
        assert_eq!(expr.value_result(), None);

        let err = expr.eval().unwrap_err();
        assert_eq!(err.spans, vec![0..5]);
        assert_eq!(
            err.downcast_ref::<UnresolvedExpression>(),
            Some(&UnresolvedExpression { expression: "2*x".to_string() }),
        );
    }

    #[test]
    fn non_convergent() {
        assert!(eval("x").unwrap_err().is::<UnresolvedExpression>());
        assert!(eval("2*-3").unwrap_err().is::<UnresolvedExpression>());

        let preserve = Options::builder().unknown_functions(UnknownFunctions::Preserve).build();
        let err = eval_with("foo(1+2)", preserve).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnresolvedExpression>(),
            Some(&UnresolvedExpression { expression: "foo(3)".to_string() }),
        );
    }

    #[test]
    fn unknown_function() {
        let err = eval("1 + mxa(1, 2)").unwrap_err();
        assert_eq!(err.spans, vec![4..13]);
        assert_eq!(
            err.downcast_ref::<UnknownFunction>(),
            Some(&UnknownFunction { name: "mxa".to_string(), suggestions: vec![] }),
        );

        let err = eval("sqrtt(4)").unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownFunction>().unwrap().suggestions, vec!["sqrt"]);
    }

    #[test]
    fn arithmetic_errors() {
        let err = eval("1 + 6/(3-3)").unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![4..5, 5..6, 6..11]);

        assert!(eval("5%0").unwrap_err().is::<DivisionByZero>());
        assert!(eval("mod(5, 0)").unwrap_err().is::<DivisionByZero>());

        let err = eval("invmod(6, 9)").unwrap_err();
        assert!(err.is::<NoModularInverse>());
        assert_eq!(err.spans, vec![0..12]);
    }

    #[test]
    fn failures_note_the_simplified_expression() {
        // folds made before the failing one are kept
        let err = eval("2*3 + 10/(4-4)").unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.note.as_deref(), Some("while evaluating `6+10/0`"));

        let err = eval("1 + mxa(2*2)").unwrap_err();
        assert!(err.is::<UnknownFunction>());
        assert_eq!(err.note.as_deref(), Some("while evaluating `1+mxa(2*2)`"));

        // parse errors happen before any pass
        assert_eq!(eval("(1").unwrap_err().note, None);
    }

    #[test]
    fn argument_errors() {
        assert!(eval("min(1)").unwrap_err().is::<MissingArgument>());
        assert!(eval("abs()").unwrap_err().is::<MissingArgument>());
        assert!(eval("abs(1, 2)").unwrap_err().is::<TooManyArguments>());
    }

    #[test]
    fn parse_errors() {
        assert!(eval("2 # 3").unwrap_err().is::<InvalidCharacter>());
        assert!(eval("(1+2").unwrap_err().is::<UnclosedParenthesis>());
    }

    #[test]
    fn depth_limit() {
        let options = Options::builder().max_depth(3).build();
        assert_eq!(eval_with("(((1)))", options).unwrap(), 1);
        assert!(eval_with("((((1))))", options).unwrap_err().is::<DepthExceeded>());

        // trees parsed with a larger limit are still checked by the resolver
        let mut tree = bigfold_parser::parser::parse_with_depth("((((1))))", 10).unwrap();
        let err = Resolver::new(&mut tree, &options).resolve().unwrap_err();
        assert!(err.is::<DepthExceeded>());
    }

    #[test]
    fn exponent_limit() {
        let options = Options::builder().max_exponent(64).build();
        assert_eq!(eval_with("2^64", options).unwrap(), int(1) << 64);
        assert!(eval_with("2^65", options).is_err());
        assert!(eval_with("2^(0-1)", options).is_err());

        // a huge base cannot be raised to an exponent that is itself in range
        let options = Options::builder().max_exponent(1 << 20).build();
        let err = eval_with("(2^64)^(2^20)", options).unwrap_err();
        assert_eq!(err.downcast_ref::<PowerTooLarge>(), Some(&PowerTooLarge { max_bits: 64 << 20 }));
        assert_eq!(err.spans, vec![0..6, 6..7, 7..13]);
    }
}
