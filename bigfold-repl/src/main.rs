mod error;

use bigfold_compute::{
    error::Error,
    options::{Options, UnknownFunctions},
    Expression,
};
use clap::{ArgAction, Parser};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Evaluates integer expressions of any size, simplifying around variables.
#[derive(Debug, Parser)]
#[command(name = "bigfold", version)]
struct Args {
    /// The expression to evaluate. Multiple arguments are joined by spaces. If omitted, lines are
    /// read from stdin, or an interactive prompt is started.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,

    /// Run a single simplification pass and print the result, instead of evaluating.
    #[arg(long)]
    simplify: bool,

    /// The maximum nesting depth of parentheses and function calls.
    #[arg(long)]
    max_depth: Option<usize>,

    /// The largest exponent accepted by `^` and `pow`.
    #[arg(long)]
    max_exponent: Option<u32>,

    /// Keep calls to unknown functions in the result instead of failing.
    #[arg(long)]
    preserve_unknown: bool,

    /// Log each evaluation pass; repeat to also log every folded operation. Overrides `RUST_LOG`.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Builds the evaluation options from the command-line flags.
    fn options(&self) -> Options {
        let mut builder = Options::builder();
        if let Some(max_depth) = self.max_depth {
            builder = builder.max_depth(max_depth);
        }
        if let Some(max_exponent) = self.max_exponent {
            builder = builder.max_exponent(max_exponent);
        }
        if self.preserve_unknown {
            builder = builder.unknown_functions(UnknownFunctions::Preserve);
        }
        builder.build()
    }
}

/// Installs a subscriber printing log events to stderr.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("bigfold_compute=debug"),
        _ => EnvFilter::new("bigfold_compute=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parses and evaluates the given input, or runs a single pass over it if `simplify` is set.
fn parse_eval(input: &str, options: Options, simplify: bool) -> Result<String, Error> {
    let mut expr = Expression::with_options(input, options)?;
    if simplify {
        expr.resolve()?;
        return Ok(expr.expression_result());
    }
    Ok(expr.eval()?.to_string())
}

/// Evaluates the input and prints the result, or reports the error to stderr. Returns true on
/// success.
///
/// If `residue` is set, an expression that only failed to evaluate because it contains variables
/// is not an error, and its simplified form is printed.
fn read_eval(input: &str, options: Options, simplify: bool, residue: bool) -> bool {
    match parse_eval(input, options, simplify) {
        Ok(output) => println!("{}", output),
        Err(err) => match error::residue(&err).filter(|_| residue) {
            Some(expression) => println!("{}", expression),
            None => {
                error::report_to_stderr(&err, input);
                return false;
            },
        },
    }
    true
}

/// Runs the interactive prompt until end of input.
fn repl(options: Options, simplify: bool) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, options: Options, simplify: bool) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        read_eval(&input, options, simplify, true);
        Ok(())
    }

    loop {
        match process_line(&mut rl, options, simplify) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    let options = args.options();
    debug!(?options, "starting");

    if !args.expression.is_empty() {
        // evaluate the expression given on the command line
        let input = args.expression.join(" ");
        return if read_eval(&input, options, args.simplify, false) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if !io::stdin().is_terminal() {
        // evaluate each line of stdin
        let mut ok = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("error: {}", err);
                    return ExitCode::FAILURE;
                },
            };
            if !line.trim().is_empty() {
                ok &= read_eval(&line, options, args.simplify, false);
            }
        }
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match repl(options, args.simplify) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn flags_map_to_options() {
        let args = Args::try_parse_from(["bigfold", "--max-depth", "4", "--preserve-unknown", "1", "+", "1"]).unwrap();
        assert_eq!(args.expression.join(" "), "1 + 1");
        assert_eq!(
            args.options(),
            Options::builder()
                .max_depth(4)
                .unknown_functions(UnknownFunctions::Preserve)
                .build(),
        );

        let args = Args::try_parse_from(["bigfold", "-7", "%", "3"]).unwrap();
        assert_eq!(args.expression.join(" "), "-7 % 3");
        assert_eq!(args.options(), Options::default());
    }

    #[test]
    fn evaluate_or_simplify() {
        let options = Options::default();
        assert_eq!(parse_eval("2^64", options, false).unwrap(), "18446744073709551616");
        assert_eq!(parse_eval("5x+1+1", options, true).unwrap(), "5*x+2");

        let err = parse_eval("5x+1+1", options, false).unwrap_err();
        assert_eq!(error::residue(&err), Some("5*x+2"));
    }
}
