use bigfold_parser::parser::{
    node::{Node, NodeId},
    token::op::{BinOp, BinOpKind, Precedence},
};
use crate::{
    error::{ArithmeticError, Error},
    funcs::{number_theory::{Div, Mod}, power::Pow},
    options::Options,
};
use rug::Integer;
use std::cmp::Ordering;
use super::Resolver;
use tracing::trace;

/// Evaluates a binary operation on two integers.
pub fn eval_operands(
    op: BinOpKind,
    left: Integer,
    right: Integer,
    options: &Options,
) -> Result<Integer, ArithmeticError> {
    match op {
        BinOpKind::Exp => Pow::eval_static(options, left, right),
        BinOpKind::Mul => Ok(left * right),
        BinOpKind::Div => Div::eval_static(left, right),
        BinOpKind::Mod => Mod::eval_static(left, right),
        BinOpKind::Add => Ok(left + right),
        BinOpKind::Sub => Ok(left - right),
    }
}

impl Resolver<'_> {
    /// Folds every `Literal Operator Literal` triple in the sequence whose operator is in the
    /// given tier, left to right. Returns true if anything was folded.
    pub(super) fn fold_tier(&mut self, sequence: &mut Vec<NodeId>, tier: Precedence) -> Result<bool, Error> {
        let mut changed = false;
        let mut i = 1;
        while i + 1 < sequence.len() {
            let Some(op) = self.tree[sequence[i]].as_operator().filter(|op| op.precedence() == tier) else {
                i += 1;
                continue;
            };

            let (left_id, right_id) = (sequence[i - 1], sequence[i + 1]);
            let (lhs, rhs) = (&self.tree[left_id], &self.tree[right_id]);
            let (Some(left), Some(right)) = (lhs.as_literal(), rhs.as_literal()) else {
                i += 1;
                continue;
            };
            if !self.can_fold(sequence, i, op) {
                i += 1;
                continue;
            }

            let spans = vec![lhs.span.clone(), self.tree[sequence[i]].span.clone(), rhs.span.clone()];
            let value = eval_operands(op.kind, left.clone(), right.clone(), self.options)
                .map_err(|e| e.into_error(spans.clone()))?;
            trace!(op = %op.kind, left = %left, right = %right, result = %value, "folded");

            // the result overwrites the left operand, and the next operator to examine is now at `i`
            self.tree[left_id] = Node::literal(value, spans[0].start..spans[2].end);
            self.tree.release(right_id);
            sequence.drain(i..=i + 1);
            changed = true;
        }
        Ok(changed)
    }

    /// Returns true if the operands on either side of the operator at `i` can be combined without
    /// changing the meaning of the expression around them.
    ///
    /// When the whole expression is made of literals, stronger operators have already been folded
    /// and weaker ones have not, so this is always true. It matters next to symbolic terms:
    ///
    /// - in `x*2+3`, the `2` belongs to the `*`, so `2+3` cannot be folded;
    /// - in `2+3*x`, the `3` belongs to the `*`, so `2+3` cannot be folded;
    /// - in `x-1+1`, folding `1+1` would compute `x-(1+1)`, but in `x+1+1`, folding is fine.
    fn can_fold(&self, sequence: &[NodeId], i: usize, op: BinOp) -> bool {
        let operator_at = |index: Option<usize>| {
            index
                .and_then(|index| sequence.get(index))
                .and_then(|&id| self.tree[id].as_operator())
        };

        if let Some(prev) = operator_at(i.checked_sub(2)) {
            match prev.precedence().cmp(&op.precedence()) {
                Ordering::Greater => return false,
                Ordering::Equal if !prev.kind.associates_with(op.kind) => return false,
                _ => (),
            }
        }

        match operator_at(Some(i + 2)) {
            Some(next) => next.precedence() <= op.precedence(),
            None => true,
        }
    }
}
