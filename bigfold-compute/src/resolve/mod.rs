//! The reduction engine.
//!
//! A [`Resolver`] rewrites a [`Tree`] in place. Each pass over a sequence of tokens:
//!
//! 1. resolves the children of the first token, if it is a group or function call,
//! 2. folds `Literal Operator Literal` triples, one precedence tier at a time, from `^` to `* / %`
//!    to `+ -`, left to right within each tier,
//! 3. re-resolves groups with more than one child, and replaces groups with exactly one child by
//!    that child,
//! 4. evaluates calls to builtin functions whose arguments are all literals, and resolves the
//!    arguments of the other calls.
//!
//! The pass is repeated on the same sequence until it stops changing. Operators next to a
//! variable or any other non-literal token are left alone, so that the constant parts of an
//! expression fold while the symbolic parts remain as they are.

mod binary;
mod call;

use call::CallOutcome;
use bigfold_parser::parser::{
    error::kind::DepthExceeded,
    node::{NodeId, NodeKind, Owner, Tree},
    token::op::Precedence,
};
use crate::{error::Error, options::Options};

/// Rewrites a [`Tree`] towards a single literal.
#[derive(Debug)]
pub struct Resolver<'a> {
    /// The tree being rewritten.
    tree: &'a mut Tree,

    /// The options controlling the reduction.
    options: &'a Options,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver for the given tree.
    pub fn new(tree: &'a mut Tree, options: &'a Options) -> Self {
        Self { tree, options }
    }

    /// Resolves the whole tree, repeating passes over each sequence until it stops changing.
    /// Returns true if anything in the tree was rewritten.
    pub fn resolve(&mut self) -> Result<bool, Error> {
        self.resolve_seq(Owner::Root, 0)
    }

    /// Resolves the sequence owned by `owner`, which is nested `depth` levels deep.
    fn resolve_seq(&mut self, owner: Owner, depth: usize) -> Result<bool, Error> {
        if depth > self.options.max_depth {
            let span = match owner {
                Owner::Root => 0..0,
                Owner::Node(id) => self.tree[id].span.clone(),
            };
            return Err(Error::new(vec![span], DepthExceeded { max_depth: self.options.max_depth }));
        }

        // the first token's children are resolved before anything at this level
        let first = self.tree.sequence(owner).first().copied();
        let mut changed_any = match first {
            Some(first) if self.owns_children(first) => self.resolve_seq(Owner::Node(first), depth + 1)?,
            _ => false,
        };

        // the sequence is moved out of the tree while it is being rewritten, and always put back,
        // even if the pass fails
        let mut sequence = self.tree.take_sequence(owner);
        let result = self.fixed_point(&mut sequence, depth);
        self.tree.restore_sequence(owner, sequence);

        changed_any |= result?;
        Ok(changed_any)
    }

    /// Repeats passes over the sequence until one makes no change.
    fn fixed_point(&mut self, sequence: &mut Vec<NodeId>, depth: usize) -> Result<bool, Error> {
        let mut changed_any = false;
        loop {
            let mut changed = false;
            for tier in Precedence::REDUCTION_ORDER {
                changed |= self.fold_tier(sequence, tier)?;
            }
            changed |= self.resolve_nested(sequence, depth)?;

            if !changed {
                return Ok(changed_any);
            }
            changed_any = true;
        }
    }

    /// Resolves the groups and function calls in the sequence.
    fn resolve_nested(&mut self, sequence: &mut [NodeId], depth: usize) -> Result<bool, Error> {
        let mut changed = false;
        let mut i = 0;
        while i < sequence.len() {
            let id = sequence[i];
            match self.tree[id].kind {
                NodeKind::Group(_) => {
                    if self.tree[id].children().len() > 1 {
                        changed |= self.resolve_seq(Owner::Node(id), depth + 1)?;
                    }

                    // a group with a single token is replaced by that token, which takes over the
                    // span of the parentheses and is examined again in case it is a group itself
                    if let &[only] = self.tree[id].children() {
                        self.tree[only].span = self.tree[id].span.clone();
                        sequence[i] = only;
                        changed = true;
                        continue;
                    }
                },
                NodeKind::Function { .. } => match self.resolve_call(id, depth)? {
                    CallOutcome::Evaluated(value) => {
                        sequence[i] = value;
                        changed = true;
                    },
                    CallOutcome::Unevaluated { changed: args_changed } => changed |= args_changed,
                },
                _ => (),
            }
            i += 1;
        }
        Ok(changed)
    }

    /// Returns true if the node is a group or function call.
    fn owns_children(&self, id: NodeId) -> bool {
        matches!(self.tree[id].kind, NodeKind::Group(_) | NodeKind::Function { .. })
    }
}
