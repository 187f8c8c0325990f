use bigfold_parser::parser::node::{Node, NodeId, NodeKind, Owner};
use crate::{
    error::{kind::UnknownFunction, Error},
    funcs,
    options::UnknownFunctions,
};
use rug::Integer;
use super::Resolver;
use tracing::trace;

/// The outcome of resolving a function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CallOutcome {
    /// The call was evaluated, and the given node is now a literal holding its value.
    Evaluated(NodeId),

    /// The call remains in the tree. Its arguments may have been simplified.
    Unevaluated {
        /// Whether any of the arguments changed.
        changed: bool,
    },
}

impl Resolver<'_> {
    /// Resolves the function call with the given id.
    ///
    /// A call to a builtin whose arguments are all literals is evaluated. Otherwise, the arguments
    /// are resolved like any other sequence; the separators between them keep each argument's
    /// operators to itself.
    pub(super) fn resolve_call(&mut self, id: NodeId, depth: usize) -> Result<CallOutcome, Error> {
        let node = &self.tree[id];
        let NodeKind::Function { name, args } = &node.kind else {
            return Ok(CallOutcome::Unevaluated { changed: false });
        };

        let Some(builtin) = funcs::get(name) else {
            if self.options.unknown_functions == UnknownFunctions::Error {
                return Err(Error::new(vec![node.span.clone()], UnknownFunction {
                    name: name.clone(),
                    suggestions: funcs::similar(name),
                }));
            }

            let changed = self.resolve_seq(Owner::Node(id), depth + 1)?;
            return Ok(CallOutcome::Unevaluated { changed });
        };

        let Some(values) = self.literal_args(args) else {
            let changed = self.resolve_seq(Owner::Node(id), depth + 1)?;
            return Ok(CallOutcome::Unevaluated { changed });
        };

        let span = node.span.clone();
        let value = builtin.eval(self.options, values)
            .map_err(|e| e.into_error(span.clone()))?;
        trace!(function = builtin.name(), result = %value, "evaluated");

        // the call node becomes the result, and its arguments are no longer referred to
        let call = std::mem::replace(&mut self.tree[id], Node::literal(value, span));
        for &arg in call.children() {
            self.tree.release(arg);
        }
        Ok(CallOutcome::Evaluated(id))
    }

    /// Returns the values of the arguments if every argument is a single literal.
    fn literal_args(&self, args: &[NodeId]) -> Option<Vec<Integer>> {
        // arguments and separators alternate, starting with an argument
        args.iter()
            .enumerate()
            .map(|(i, &id)| match (&self.tree[id].kind, i % 2) {
                (NodeKind::Literal(value), 0) => Some(Some(value.clone())),
                (NodeKind::ArgSeparator, 1) => Some(None),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(|values| values.into_iter().flatten().collect())
    }
}
