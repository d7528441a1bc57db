//! Owned syntax trees.
//!
//! A [`Tree`] is either a terminal leaf holding a copy of the [`Token`] it was
//! shifted from, or a nonterminal [`Node`] that exclusively owns its children.
//! There are no parent links, so every tree is a finite, acyclic ownership
//! structure with a single root.
//!
//! Leaves copy the token rather than pointing into the token list, so the tree
//! outlives the list it was parsed from. Leaf text is still read from the
//! caller's source through the token's span.
//!
//! Dropping, comparing and debug-printing a tree all walk it with an explicit
//! work stack, so deeply nested trees never recurse on the native stack.

use crate::{Span, TerminalID, Token};
use std::fmt::{self, Debug};
use std::mem;

/// Identity of a nonterminal symbol, as defined by a compiled grammar.
pub trait NonterminalID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;

    /// Display name of the nonterminal.
    fn label(&self) -> &'static str;
}

pub enum Tree<T, N> {
    Terminal(Token<T>),
    Nonterminal(Node<T, N>),
}

/// An interior node: a nonterminal and its children in source order.
pub struct Node<T, N> {
    nonterminal: N,
    children: Vec<Tree<T, N>>,
}

impl<T, N> Node<T, N> {
    pub fn new(nonterminal: N, children: Vec<Tree<T, N>>) -> Self {
        Self {
            nonterminal,
            children,
        }
    }

    #[inline]
    pub fn nonterminal(&self) -> N
    where
        N: Copy,
    {
        self.nonterminal
    }

    #[inline]
    pub fn children(&self) -> &[Tree<T, N>] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Takes the children out, leaving this node empty.
    pub fn into_children(mut self) -> Vec<Tree<T, N>> {
        mem::take(&mut self.children)
    }
}

impl<T, N> Drop for Node<T, N> {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(tree) = stack.pop() {
            if let Tree::Nonterminal(mut node) = tree {
                stack.append(&mut node.children);
            }
        }
    }
}

/// Equality of a single node, ignoring what lies below its children.
fn shallow_eq<T: PartialEq, N: PartialEq>(a: &Tree<T, N>, b: &Tree<T, N>) -> bool {
    match (a, b) {
        (Tree::Terminal(a), Tree::Terminal(b)) => a == b,
        (Tree::Nonterminal(a), Tree::Nonterminal(b)) => {
            a.nonterminal == b.nonterminal && a.children.len() == b.children.len()
        }
        _ => false,
    }
}

// Two pre-orders that agree node by node, child counts included, describe
// the same tree.
impl<T: PartialEq, N: PartialEq> PartialEq for Tree<T, N> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.pre_order();
        let mut b = other.pre_order();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if shallow_eq(x, y) => {}
                _ => return false,
            }
        }
    }
}

impl<T: Eq, N: Eq> Eq for Tree<T, N> {}

impl<T: PartialEq, N: PartialEq> PartialEq for Node<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.nonterminal == other.nonterminal && self.children == other.children
    }
}

impl<T: Eq, N: Eq> Eq for Node<T, N> {}

/// Debug output is the pre-order list of nodes, each tagged with its depth.
impl<T: Debug, N: Debug> Debug for Tree<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (depth, tree) in self.pre_order_with_depth() {
            list.entry(&DebugEntry { depth, tree });
        }
        list.finish()
    }
}

impl<T: Debug, N: Debug> Debug for Node<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("nonterminal", &self.nonterminal)
            .field("children", &self.children)
            .finish()
    }
}

struct DebugEntry<'a, T, N> {
    depth: usize,
    tree: &'a Tree<T, N>,
}

impl<T: Debug, N: Debug> Debug for DebugEntry<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree {
            Tree::Terminal(token) => write!(f, "{}: {:?}", self.depth, token),
            Tree::Nonterminal(node) => {
                write!(f, "{}: {:?}/{}", self.depth, node.nonterminal, node.children.len())
            }
        }
    }
}

impl<T, N> Tree<T, N> {
    #[inline]
    pub fn terminal(token: Token<T>) -> Self {
        Tree::Terminal(token)
    }

    #[inline]
    pub fn nonterminal(nonterminal: N, children: Vec<Tree<T, N>>) -> Self {
        Tree::Nonterminal(Node::new(nonterminal, children))
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Tree::Terminal(_))
    }

    #[inline]
    pub fn as_token(&self) -> Option<&Token<T>> {
        match self {
            Tree::Terminal(token) => Some(token),
            Tree::Nonterminal(_) => None,
        }
    }

    #[inline]
    pub fn as_node(&self) -> Option<&Node<T, N>> {
        match self {
            Tree::Terminal(_) => None,
            Tree::Nonterminal(node) => Some(node),
        }
    }

    /// Children of a nonterminal; empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Tree<T, N>] {
        match self {
            Tree::Terminal(_) => &[],
            Tree::Nonterminal(node) => &node.children,
        }
    }

    /// Span from the first leaf to the last leaf, or `None` if the tree has
    /// no leaves.
    pub fn span(&self) -> Option<Span> {
        let first = self.leaves().next()?.span;
        let mut last = self;
        loop {
            match last {
                Tree::Terminal(token) => return Some(first.merge(&token.span)),
                Tree::Nonterminal(node) => {
                    // The last child may be an empty node; step back to the
                    // rightmost child that holds a leaf.
                    last = node
                        .children
                        .iter()
                        .rev()
                        .find(|c| c.leaves().next().is_some())?;
                }
            }
        }
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        self.pre_order().count()
    }

    /// Number of nodes on the longest path from the root; a lone leaf has
    /// depth 1.
    pub fn depth(&self) -> usize {
        self.pre_order_with_depth()
            .map(|(depth, _)| depth + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<T, N> Tree<T, N>
where
    T: TerminalID,
    N: NonterminalID,
{
    /// Display name of the root symbol.
    pub fn label(&self) -> &'static str {
        match self {
            Tree::Terminal(token) => token.terminal.label(),
            Tree::Nonterminal(node) => node.nonterminal.label(),
        }
    }
}
