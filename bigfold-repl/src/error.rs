use ariadne::Source;
use bigfold_compute::error::{kind::UnresolvedExpression, Error};

/// Reports the error to stderr, pointing into the given input.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr. If that fails, the
/// plain error message is printed instead.
pub fn report_to_stderr(err: &Error, input: &str) {
    let report = err.build_report("input");
    if report.eprint(("input", Source::from(input))).is_err() {
        eprintln!("error: {}", err);
    }
}

/// Returns the simplified form of the expression if the error is only that it could not be
/// evaluated to an integer.
pub fn residue(err: &Error) -> Option<&str> {
    err.downcast_ref::<UnresolvedExpression>()
        .map(|unresolved| unresolved.expression.as_str())
}
