use ariadne::Source;
use bigfold_attrs::ErrorKind;
use bigfold_error::{Error, ErrorKind};

/// Tried to divide by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this value".to_string(), "this operator".to_string(), format!("this is `{}`", self.divisor)],
    help = "the divisor must be non-zero",
)]
struct DivideByZero {
    divisor: String,
}

/// Unit struct with a single label.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "bad input", labels = ["here"])]
struct BadInput;

/// Renders the report of the given error without color codes.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_labels_and_help() {
    let err = Error::new(vec![0..1, 2..3, 4..5], DivideByZero { divisor: "0".to_string() });
    let report = render(&err, "1 / 0");

    assert!(report.contains("division by zero"));
    assert!(report.contains("this operator"));
    assert!(report.contains("this is `0`"));
    assert!(report.contains("the divisor must be non-zero"));
}

#[test]
fn note_is_rendered() {
    let err = Error::new(vec![2..3], BadInput).with_note("simplified to 1+2");
    assert_eq!(err.note.as_deref(), Some("simplified to 1+2"));
    assert!(render(&err, "1+2#").contains("simplified to 1+2"));

    let err = Error::new(vec![2..3], BadInput);
    assert!(!render(&err, "1+2#").contains("simplified"));
}

#[test]
fn display_uses_message() {
    let err = Error::new(vec![0..3], BadInput);
    assert_eq!(err.to_string(), "bad input");
    assert_eq!(err.kind.message(), "bad input");
}

#[test]
fn downcast_to_concrete_kind() {
    let err = Error::new(vec![0..1, 2..3, 4..5], DivideByZero { divisor: "0".to_string() });

    assert!(err.is::<DivideByZero>());
    assert!(!err.is::<BadInput>());
    assert_eq!(err.downcast_ref::<DivideByZero>().unwrap().divisor, "0");
}

#[test]
fn fewer_spans_than_labels() {
    // extra labels without a matching span are dropped rather than panicking
    let err = Error::new(vec![0..1], DivideByZero { divisor: "0".to_string() });
    let report = render(&err, "1 / 0");
    assert!(report.contains("this value"));
}
