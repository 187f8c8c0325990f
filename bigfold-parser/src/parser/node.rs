//! The token tree. Every token of an expression is stored once in an arena owned by the [`Tree`],
//! and parenthesized groups and function calls refer to the tokens they own by [`NodeId`].

use rug::Integer;
use std::ops::{Index, IndexMut, Range};
use super::token::op::BinOp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The index of a [`Node`] in its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(usize);

/// The different kinds of tokens in the tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A run of whitespace. The tokenizer drops whitespace, but trees assembled by hand may
    /// contain it; it is rendered as a single space and never takes part in a reduction.
    Space,

    /// An integer value.
    Literal(Integer),

    /// A single-letter variable.
    Variable(char),

    /// A binary operator.
    Operator(BinOp),

    /// A function call. The arguments are separated by [`NodeKind::ArgSeparator`] tokens.
    Function {
        /// The name of the function.
        name: String,

        /// The tokens between the parentheses of the call.
        args: Vec<NodeId>,
    },

    /// A parenthesized sub-expression.
    Group(Vec<NodeId>),

    /// The `,` between two function arguments.
    ArgSeparator,
}

/// A token in the tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The kind of token, including any value or children it owns.
    pub kind: NodeKind,

    /// The region of the source code that this token originated from. Tokens that were inserted
    /// by the tokenizer have an empty span where they were inserted, and tokens produced by a
    /// reduction span everything they replaced.
    pub span: Range<usize>,
}

impl Node {
    /// Creates a new node.
    pub fn new(kind: NodeKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Creates a literal node.
    pub fn literal(value: Integer, span: Range<usize>) -> Self {
        Self::new(NodeKind::Literal(value), span)
    }

    /// Returns the value of the node if it is a literal.
    pub fn as_literal(&self) -> Option<&Integer> {
        match &self.kind {
            NodeKind::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the operator if the node is one.
    pub fn as_operator(&self) -> Option<BinOp> {
        match self.kind {
            NodeKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the tokens owned by this node. Only groups and function calls own tokens.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Function { args, .. } => args,
            NodeKind::Group(children) => children,
            _ => &[],
        }
    }

    /// Returns a mutable reference to the tokens owned by this node, if it can own any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.kind {
            NodeKind::Function { args, .. } => Some(args),
            NodeKind::Group(children) => Some(children),
            _ => None,
        }
    }

    /// Returns the canonical text of the token itself, not including any children. For literals,
    /// this is the decimal rendering of the value.
    pub fn text(&self) -> String {
        match &self.kind {
            NodeKind::Space => " ".to_string(),
            NodeKind::Literal(value) => value.to_string(),
            NodeKind::Variable(name) => name.to_string(),
            NodeKind::Operator(op) => op.kind.to_string(),
            NodeKind::Function { name, .. } => name.clone(),
            NodeKind::Group(_) => "(".to_string(),
            NodeKind::ArgSeparator => ",".to_string(),
        }
    }
}

/// Identifies a sequence of tokens in a [`Tree`]: either the top level of the expression, or the
/// children of a group or function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// The top level of the expression.
    Root,

    /// The children of the given node.
    Node(NodeId),
}

/// A tree of tokens.
///
/// Nodes are never removed from the arena; a reduction overwrites one of the nodes it replaces
/// and stops referring to the others. Use [`Tree::release`] to free the value of a literal that
/// is no longer referred to.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    /// Every node ever allocated in this tree.
    nodes: Vec<Node>,

    /// The top-level sequence of the expression.
    root: Vec<NodeId>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the arena, returning its id. The node is not part of any sequence until its
    /// id is placed in one.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Releases the value of a literal that is no longer part of any sequence, leaving zero in its
    /// place. Other nodes are left as they are.
    pub fn release(&mut self, id: NodeId) {
        if let NodeKind::Literal(value) = &mut self[id].kind {
            *value = Integer::new();
        }
    }

    /// Returns the top-level sequence of the expression.
    pub fn root(&self) -> &[NodeId] {
        &self.root
    }

    /// Replaces the top-level sequence of the expression.
    pub fn set_root(&mut self, root: Vec<NodeId>) {
        self.root = root;
    }

    /// Returns an iterator over the top-level tokens of the expression.
    pub fn top_level(&self) -> impl Iterator<Item = &Node> + '_ {
        self.root.iter().map(|&id| &self[id])
    }

    /// Returns the sequence owned by the given owner. Nodes that cannot own tokens own an empty
    /// sequence.
    pub fn sequence(&self, owner: Owner) -> &[NodeId] {
        match owner {
            Owner::Root => &self.root,
            Owner::Node(id) => self[id].children(),
        }
    }

    /// Moves the sequence owned by the given owner out of the tree, leaving it empty. Use
    /// [`Tree::restore_sequence`] to put it back.
    pub fn take_sequence(&mut self, owner: Owner) -> Vec<NodeId> {
        match owner {
            Owner::Root => std::mem::take(&mut self.root),
            Owner::Node(id) => self[id]
                .children_mut()
                .map(std::mem::take)
                .unwrap_or_default(),
        }
    }

    /// Puts a sequence taken with [`Tree::take_sequence`] back into its owner.
    pub fn restore_sequence(&mut self, owner: Owner, sequence: Vec<NodeId>) {
        match owner {
            Owner::Root => self.root = sequence,
            Owner::Node(id) => {
                if let Some(children) = self[id].children_mut() {
                    *children = sequence;
                }
            },
        }
    }

    /// Returns the value of the expression if it has been reduced to a single literal.
    pub fn as_literal(&self) -> Option<&Integer> {
        match self.root.as_slice() {
            [id] => self[*id].as_literal(),
            _ => None,
        }
    }

    /// Returns the number of nodes in the arena, including nodes that are no longer reachable.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
