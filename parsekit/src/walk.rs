//! Tree traversals.
//!
//! Every traversal keeps its own work stack on the heap, so walking a tree
//! never recurses on the native stack regardless of its depth. Traversals
//! borrow the tree and never mutate it.

use crate::tree::Tree;
use crate::Token;
use std::iter::FusedIterator;

/// Pre-order iterator: a node, then its children left to right.
#[derive(Debug)]
pub struct PreOrder<'a, T, N> {
    stack: Vec<&'a Tree<T, N>>,
}

impl<'a, T, N> Iterator for PreOrder<'a, T, N> {
    type Item = &'a Tree<T, N>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        self.stack.extend(tree.children().iter().rev());
        Some(tree)
    }
}

impl<T, N> FusedIterator for PreOrder<'_, T, N> {}

/// Pre-order iterator yielding each node with its depth; the root is at 0.
#[derive(Debug)]
pub struct PreOrderWithDepth<'a, T, N> {
    stack: Vec<(usize, &'a Tree<T, N>)>,
}

impl<'a, T, N> Iterator for PreOrderWithDepth<'a, T, N> {
    type Item = (usize, &'a Tree<T, N>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, tree) = self.stack.pop()?;
        self.stack
            .extend(tree.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, tree))
    }
}

impl<T, N> FusedIterator for PreOrderWithDepth<'_, T, N> {}

/// Post-order iterator: children left to right, then their parent.
#[derive(Debug)]
pub struct PostOrder<'a, T, N> {
    // Each entry is a node and the index of its next unvisited child.
    stack: Vec<(&'a Tree<T, N>, usize)>,
}

impl<'a, T, N> Iterator for PostOrder<'a, T, N> {
    type Item = &'a Tree<T, N>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (tree, next) = self.stack.last_mut()?;
            let tree = *tree;
            match tree.children().get(*next) {
                Some(child) => {
                    *next += 1;
                    self.stack.push((child, 0));
                }
                None => {
                    self.stack.pop();
                    return Some(tree);
                }
            }
        }
    }
}

impl<T, N> FusedIterator for PostOrder<'_, T, N> {}

/// Terminal tokens of a tree in source order.
#[derive(Debug)]
pub struct Leaves<'a, T, N> {
    inner: PreOrder<'a, T, N>,
}

impl<'a, T, N> Iterator for Leaves<'a, T, N> {
    type Item = &'a Token<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Tree::as_token)
    }
}

impl<T, N> FusedIterator for Leaves<'_, T, N> {}

impl<T, N> Tree<T, N> {
    pub fn pre_order(&self) -> PreOrder<'_, T, N> {
        PreOrder { stack: vec![self] }
    }

    pub fn pre_order_with_depth(&self) -> PreOrderWithDepth<'_, T, N> {
        PreOrderWithDepth {
            stack: vec![(0, self)],
        }
    }

    pub fn post_order(&self) -> PostOrder<'_, T, N> {
        PostOrder {
            stack: vec![(self, 0)],
        }
    }

    pub fn leaves(&self) -> Leaves<'_, T, N> {
        Leaves {
            inner: self.pre_order(),
        }
    }
}

/// Calls `visit` on every node of `tree` in pre-order.
pub fn walk<T, N, F>(tree: &Tree<T, N>, mut visit: F)
where
    F: FnMut(&Tree<T, N>),
{
    for node in tree.pre_order() {
        visit(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;
    use crate::test_data::{Nid, Tid};

    fn leaf(from: usize) -> Tree<Tid, Nid> {
        Tree::terminal(Token::new(Tid::Item, Span::new(from, from + 1)))
    }

    // List(List(List(), a0), a1, List(a2))
    fn sample() -> Tree<Tid, Nid> {
        Tree::nonterminal(
            Nid::List,
            vec![
                Tree::nonterminal(Nid::List, vec![Tree::nonterminal(Nid::List, vec![]), leaf(0)]),
                leaf(1),
                Tree::nonterminal(Nid::List, vec![leaf(2)]),
            ],
        )
    }

    fn describe(tree: &Tree<Tid, Nid>) -> String {
        match tree.as_token() {
            Some(token) => format!("a{}", token.span.from),
            None => format!("L{}", tree.children().len()),
        }
    }

    #[test]
    fn pre_order_visits_parent_first() {
        let tree = sample();
        let order: Vec<_> = tree.pre_order().map(describe).collect();
        assert_eq!(order, ["L3", "L2", "L0", "a0", "a1", "L1", "a2"]);
    }

    #[test]
    fn pre_order_depths() {
        let tree = sample();
        let depths: Vec<_> = tree.pre_order_with_depth().map(|(d, _)| d).collect();
        assert_eq!(depths, [0, 1, 2, 2, 1, 1, 2]);
    }

    #[test]
    fn post_order_visits_children_first() {
        let tree = sample();
        let order: Vec<_> = tree.post_order().map(describe).collect();
        assert_eq!(order, ["L0", "a0", "L2", "a1", "a2", "L1", "L3"]);
    }

    #[test]
    fn leaves_in_source_order() {
        let tree = sample();
        let froms: Vec<_> = tree.leaves().map(|t| t.span.from).collect();
        assert_eq!(froms, [0, 1, 2]);
    }

    #[test]
    fn iterators_are_fused() {
        let tree = leaf(0);
        let mut it = tree.post_order();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn walk_visits_every_node_once() {
        let tree = sample();
        let mut count = 0;
        walk(&tree, |_| count += 1);
        assert_eq!(count, tree.node_count());
        assert_eq!(count, tree.post_order().count());
    }

    #[test]
    fn deep_tree_walks_without_recursion() {
        let mut tree = leaf(0);
        for _ in 0..100_000 {
            tree = Tree::nonterminal(Nid::List, vec![Tree::nonterminal(Nid::List, vec![]), tree]);
        }
        assert_eq!(tree.post_order().count(), 200_001);
        assert_eq!(tree.leaves().count(), 1);
    }
}
