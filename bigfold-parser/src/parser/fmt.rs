//! Renders token trees back into text.

use super::node::{NodeId, NodeKind, Owner, Tree};
use std::fmt::{self, Display, Formatter};

/// Wrapper type that renders a sequence of tokens in a [`Tree`], including everything the tokens
/// own.
///
/// The rendering is canonical: whitespace is not reproduced, implicit multiplication is written
/// as `*`, and literals are written in decimal.
pub struct SeqFormatter<'a> {
    tree: &'a Tree,
    sequence: &'a [NodeId],
}

impl<'a> SeqFormatter<'a> {
    /// Creates a formatter for the given sequence.
    pub fn new(tree: &'a Tree, sequence: &'a [NodeId]) -> Self {
        Self { tree, sequence }
    }
}

impl Display for SeqFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // nested groups are rendered with an explicit stack so that deeply nested trees cannot
        // overflow the call stack
        let mut stack = vec![(self.sequence, 0)];
        while let Some((sequence, index)) = stack.pop() {
            let Some(&id) = sequence.get(index) else {
                if stack.is_empty() {
                    break;
                }
                f.write_str(")")?;
                continue;
            };

            stack.push((sequence, index + 1));
            let node = &self.tree[id];
            match &node.kind {
                NodeKind::Function { name, args } => {
                    write!(f, "{}(", name)?;
                    stack.push((args.as_slice(), 0));
                },
                NodeKind::Group(children) => {
                    f.write_str("(")?;
                    stack.push((children.as_slice(), 0));
                },
                _ => f.write_str(&node.text())?,
            }
        }
        Ok(())
    }
}

impl Tree {
    /// Returns a formatter that renders the sequence owned by the given owner.
    pub fn display(&self, owner: Owner) -> SeqFormatter<'_> {
        SeqFormatter::new(self, self.sequence(owner))
    }
}

/// Renders the whole expression.
impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.display(Owner::Root).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{
        node::{Node, NodeKind},
        parse,
        token::op::{BinOp, BinOpKind},
    };
    use pretty_assertions::assert_eq;
    use rug::Integer;
    use super::*;

    #[test]
    fn round_trip() {
        let cases = [
            ("5x+1+1", "5*x+1+1"),
            ("3 * 4", "3*4"),
            ("(3*4+(4*7)+55)+(5*5)", "(3*4+(4*7)+55)+(5*5)"),
            ("invmod(301, 400)", "invmod(301,400)"),
            ("-1+2", "0-1+2"),
            ("2^607-1", "2^607-1"),
            ("max(abs(x), 2)y", "max(abs(x),2)*y"),
            ("007", "7"),
        ];

        for (source, expected) in cases {
            assert_eq!(parse(source).unwrap().to_string(), expected, "{}", source);
        }
    }

    #[test]
    fn render_inner_sequence() {
        let tree = parse("2*(x+1)").unwrap();
        let group = tree.root()[2];
        assert_eq!(tree.display(Owner::Node(group)).to_string(), "x+1");
    }

    #[test]
    fn spaces_are_rendered() {
        let mut tree = Tree::new();
        let x = tree.alloc(Node::new(NodeKind::Variable('x'), 0..1));
        let space = tree.alloc(Node::new(NodeKind::Space, 1..2));
        let minus = tree.alloc(Node::new(NodeKind::Operator(BinOp::explicit(BinOpKind::Sub)), 2..3));
        let one = tree.alloc(Node::literal(Integer::from(1), 3..4));
        tree.set_root(vec![x, space, minus, one]);
        assert_eq!(tree.to_string(), "x -1");
    }

    #[test]
    fn deeply_nested() {
        let source = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(parse(&source).unwrap().to_string(), source);
    }
}
