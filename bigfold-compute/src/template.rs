//! Evaluation of expression templates with integer arguments.
//!
//! A template is an expression containing placeholders: `{}` is replaced by the next argument in
//! order, and `{N}` by the argument at index `N`. Literal braces are written `{{` and `}}`.

use crate::{
    error::{
        kind::{InvalidPlaceholder, MissingTemplateArgument, TooManyTemplateArguments, UnusedTemplateArgument},
        Error,
    },
    expr::eval,
};
use rug::Integer;
use std::{iter::Peekable, ops::Range, str::CharIndices};

/// The maximum number of arguments a template can be given.
pub const MAX_TEMPLATE_ARGS: usize = 16;

/// Substitutes the arguments into the template, returning the resulting expression.
///
/// Negative arguments are wrapped in parentheses, so that `2*{}` with `-3` becomes `2*(-3)`.
/// Every argument must be used at least once.
pub fn expand(template: &str, args: &[&Integer]) -> Result<String, Error> {
    if args.len() > MAX_TEMPLATE_ARGS {
        return Err(Error::new(vec![0..template.len()], TooManyTemplateArguments {
            max: MAX_TEMPLATE_ARGS,
            given: args.len(),
        }));
    }

    let mut output = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut next = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, c)| c == '{').is_some() => output.push('{'),
            '}' if chars.next_if(|&(_, c)| c == '}').is_some() => output.push('}'),
            '{' => {
                let (index, span) = match placeholder(start, &mut chars) {
                    Some((Some(index), span)) => (index, span),
                    Some((None, span)) => {
                        next += 1;
                        (next - 1, span)
                    },
                    None => {
                        let end = chars.peek().map_or(template.len(), |&(i, _)| i);
                        return Err(Error::new(vec![start..end], InvalidPlaceholder));
                    },
                };

                let Some(arg) = args.get(index) else {
                    return Err(Error::new(vec![span], MissingTemplateArgument {
                        index,
                        given: args.len(),
                    }));
                };
                used[index] = true;

                if **arg < 0 {
                    output.push_str(&format!("({})", arg));
                } else {
                    output.push_str(&arg.to_string());
                }
            },
            '}' => return Err(Error::new(vec![start..start + 1], InvalidPlaceholder)),
            c => output.push(c),
        }
    }

    if let Some(index) = used.iter().position(|used| !used) {
        return Err(Error::new(vec![0..template.len()], UnusedTemplateArgument { index }));
    }

    Ok(output)
}

/// Parses the rest of a placeholder whose `{` is at `start`, returning the explicit index if
/// there is one, and the span of the whole placeholder. Returns [`None`] if the placeholder is
/// malformed.
fn placeholder(start: usize, chars: &mut Peekable<CharIndices>) -> Option<(Option<usize>, Range<usize>)> {
    let mut digits = String::new();
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        digits.push(c);
    }

    let (end, _) = chars.next_if(|&(_, c)| c == '}')?;
    let span = start..end + 1;
    if digits.is_empty() {
        return Some((None, span));
    }

    // an index that does not fit is treated as missing rather than malformed
    Some((Some(digits.parse().unwrap_or(usize::MAX)), span))
}

/// Substitutes the arguments into the template and evaluates the result.
///
/// Errors from parsing and evaluating the substituted expression point into the substituted text,
/// not the template.
///
/// ```
/// use bigfold_compute::evalf;
/// use rug::Integer;
///
/// let n = Integer::from(5917380627180988719u64);
/// let (p, q) = (Integer::from(812817218), Integer::from(213831928));
/// let result = evalf("mod({}, (({}-1)*({}-1)))", &[&n, &p, &q]).unwrap();
/// assert_eq!(result, 7967385644825313u64);
/// ```
pub fn evalf(template: &str, args: &[&Integer]) -> Result<Integer, Error> {
    eval(&expand(template, args)?)
}
