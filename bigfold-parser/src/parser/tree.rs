//! Nests the flat token stream into a [`Tree`].

use super::{
    error::{kind, Error},
    node::{Node, NodeId, NodeKind, Owner, Tree},
    stream::{FlatKind, FlatToken},
};
use std::ops::Range;

/// An open parenthesis whose matching close has not been seen yet.
#[derive(Debug)]
struct Frame {
    /// The group or function node that will own the tokens, or [`None`] for the top level.
    node: Option<NodeId>,

    /// The tokens collected so far.
    sequence: Vec<NodeId>,

    /// The span of the opening parenthesis, or of the function name for function calls.
    open: Range<usize>,

    /// Whether the frame is a function's argument list.
    function: bool,

    /// Whether no token has been added since the opening parenthesis or the last separator.
    awaiting_arg: bool,
}

impl Frame {
    fn new(node: Option<NodeId>, open: Range<usize>, function: bool) -> Self {
        Self { node, sequence: Vec::new(), open, function, awaiting_arg: true }
    }
}

/// Builds a tree from the flat token stream. Parentheses and function calls may be nested at most
/// `max_depth` levels deep.
///
/// Matching is done with an explicit stack of open parentheses, so arbitrarily deep input fails
/// with [`kind::DepthExceeded`] instead of exhausting the call stack.
pub fn build(tokens: Vec<FlatToken>, max_depth: usize) -> Result<Tree, Error> {
    let mut tree = Tree::new();
    let mut stack = vec![Frame::new(None, 0..0, false)];
    let mut tokens = tokens.into_iter();

    while let Some(FlatToken { kind, span }) = tokens.next() {
        let frame = stack.len() - 1;
        match kind {
            FlatKind::Literal(value) => push(&mut stack, tree.alloc(Node::literal(value, span))),
            FlatKind::Variable(name) => {
                push(&mut stack, tree.alloc(Node::new(NodeKind::Variable(name), span)))
            },
            FlatKind::Operator(op) => {
                push(&mut stack, tree.alloc(Node::new(NodeKind::Operator(op), span)))
            },
            FlatKind::Function(name) => {
                // the tokenizer always emits the opening parenthesis right after the name
                tokens.next();
                let id = tree.alloc(Node::new(NodeKind::Function { name, args: Vec::new() }, span.clone()));
                open(&mut stack, Frame::new(Some(id), span, true), max_depth)?;
            },
            FlatKind::OpenParen => {
                let id = tree.alloc(Node::new(NodeKind::Group(Vec::new()), span.clone()));
                open(&mut stack, Frame::new(Some(id), span, false), max_depth)?;
            },
            FlatKind::Separator => {
                let top = &mut stack[frame];
                if !top.function {
                    return Err(Error::new(vec![span], kind::UnexpectedSeparator));
                }
                if top.awaiting_arg {
                    return Err(Error::new(vec![span], kind::EmptyArgument));
                }
                let id = tree.alloc(Node::new(NodeKind::ArgSeparator, span));
                push(&mut stack, id);
                stack[frame].awaiting_arg = true;
            },
            FlatKind::CloseParen => {
                if frame == 0 {
                    return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: false }));
                }

                let Frame { node, sequence, open, function, awaiting_arg } = stack.remove(frame);
                let whole = open.start..span.end;
                if function {
                    if awaiting_arg && !sequence.is_empty() {
                        return Err(Error::new(vec![span], kind::EmptyArgument));
                    }
                } else if sequence.is_empty() {
                    return Err(Error::new(vec![whole], kind::EmptyParenthesis));
                }

                if let Some(id) = node {
                    tree[id].span = whole;
                    tree.restore_sequence(Owner::Node(id), sequence);
                    push(&mut stack, id);
                }
            },
        }
    }

    let root = stack.remove(0);
    if let Some(unclosed) = stack.pop() {
        return Err(Error::new(vec![unclosed.open], kind::UnclosedParenthesis { opening: true }));
    }
    if root.sequence.is_empty() {
        return Err(Error::new(vec![0..0], kind::EmptyExpression));
    }

    tree.set_root(root.sequence);
    Ok(tree)
}

/// Adds a node to the innermost open sequence.
fn push(stack: &mut [Frame], id: NodeId) {
    if let Some(top) = stack.last_mut() {
        top.sequence.push(id);
        top.awaiting_arg = false;
    }
}

/// Opens a new nesting level.
fn open(stack: &mut Vec<Frame>, frame: Frame, max_depth: usize) -> Result<(), Error> {
    // the top level does not count towards the depth
    if stack.len() > max_depth {
        return Err(Error::new(vec![frame.open], kind::DepthExceeded { max_depth }));
    }
    stack.push(frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parser::{parse, parse_with_depth};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn nested_groups() {
        let tree = parse("(3*4+(4*7)+55)+(5*5)").unwrap();
        assert_eq!(tree.root().len(), 3);

        let first = tree.root()[0];
        assert_eq!(tree[first].span, 0..14);
        assert_eq!(tree.sequence(Owner::Node(first)).len(), 7);

        let inner = tree.sequence(Owner::Node(first))[4];
        assert!(matches!(tree[inner].kind, NodeKind::Group(_)));
        assert_eq!(tree[inner].span, 5..10);
    }

    /// "1+1" is three tokens, not six.
    #[test]
    fn top_level_token_count() {
        let tree = parse("1+1").unwrap();
        assert_eq!(tree.root().len(), 3);
        let texts = tree.top_level().map(Node::text).collect::<Vec<_>>();
        assert_eq!(texts, vec!["1", "+", "1"]);
    }

    #[test]
    fn function_arguments() {
        let tree = parse("invmod(301, 400)").unwrap();
        let call = tree.root()[0];
        assert_eq!(tree[call].span, 0..16);
        match &tree[call].kind {
            NodeKind::Function { name, args } => {
                assert_eq!(name, "invmod");
                assert_eq!(args.len(), 3);
                assert_eq!(tree[args[1]].kind, NodeKind::ArgSeparator);
            },
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn zero_argument_call() {
        let tree = parse("f()").unwrap();
        assert!(tree[tree.root()[0]].children().is_empty());
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse("2*(1+(3)").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert_eq!(err.downcast_ref::<kind::UnclosedParenthesis>(), Some(&kind::UnclosedParenthesis { opening: true }));

        let err = parse("1+2)").unwrap_err();
        assert_eq!(err.spans, vec![3..4]);
        assert_eq!(err.downcast_ref::<kind::UnclosedParenthesis>(), Some(&kind::UnclosedParenthesis { opening: false }));
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap_err().is::<kind::EmptyExpression>());
        assert!(parse("   ").unwrap_err().is::<kind::EmptyExpression>());

        let err = parse("1+()").unwrap_err();
        assert!(err.is::<kind::EmptyParenthesis>());
        assert_eq!(err.spans, vec![2..4]);
    }

    #[test]
    fn separators() {
        assert!(parse("1,2").unwrap_err().is::<kind::UnexpectedSeparator>());
        assert!(parse("(1,2)").unwrap_err().is::<kind::UnexpectedSeparator>());
        assert!(parse("min(1,,2)").unwrap_err().is::<kind::EmptyArgument>());
        assert!(parse("min(,2)").unwrap_err().is::<kind::EmptyArgument>());

        let err = parse("min(1,)").unwrap_err();
        assert!(err.is::<kind::EmptyArgument>());
        assert_eq!(err.spans, vec![6..7]);
    }

    #[test]
    fn separators_inside_nested_groups() {
        // the comma belongs to `max`, not to the group around its first argument
        let tree = parse("max((1+2),3)").unwrap();
        assert_eq!(tree[tree.root()[0]].children().len(), 3);
        assert!(parse("max((1,2),3)").unwrap_err().is::<kind::UnexpectedSeparator>());
    }

    #[test]
    fn depth_limit() {
        let deep = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert!(parse_with_depth(&deep, 10).is_ok());

        let err = parse_with_depth(&deep, 9).unwrap_err();
        assert_eq!(err.downcast_ref::<kind::DepthExceeded>(), Some(&kind::DepthExceeded { max_depth: 9 }));
        assert_eq!(err.spans, vec![9..10]);
    }

    #[test]
    fn very_deep_input_does_not_overflow() {
        let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(parse(&deep).unwrap_err().is::<kind::DepthExceeded>());
    }
}
