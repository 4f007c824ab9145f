//! Depth-first pre-order traversal.

use std::iter::FusedIterator;

use crate::tree::{NavTree, NodeRef};

/// Lazy pre-order iterator over `(node, depth)` pairs.
///
/// Created by [`NavTree::traverse`] and [`NodeRef::subtree`]. Nodes are
/// stored in pre-order, so a traversal is a scan over a contiguous index
/// range. Cloning forks the current position; call `traverse()` again to
/// start over.
#[derive(Clone, Debug)]
pub struct Traverse<'a> {
    tree: &'a NavTree,
    next: usize,
    end: usize,
}

impl<'a> Traverse<'a> {
    pub(crate) fn new(tree: &'a NavTree, start: usize, end: usize) -> Self {
        Self {
            tree,
            next: start,
            end,
        }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (NodeRef<'a>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let node = NodeRef::new(self.tree, self.next);
        self.next += 1;
        Some((node, node.depth()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Traverse<'_> {}

impl FusedIterator for Traverse<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::literal::{NavLiteral, NodeLiteral};
    use crate::tree::NavTree;

    fn tree() -> NavTree {
        NavTree::from_literal(NavLiteral::new(vec![
            NodeLiteral::new("A", "a.html").with_children(vec![
                NodeLiteral::new("B", "b.html").with_children(vec![
                    NodeLiteral::new("C", "c.html"),
                    NodeLiteral::new("D", "d.html"),
                ]),
                NodeLiteral::new("E", "e.html"),
            ]),
            NodeLiteral::new("F", "f.html").with_children(vec![NodeLiteral::new("G", "g.html")]),
        ]))
        .unwrap()
    }

    fn labels(iter: super::Traverse<'_>) -> Vec<(&str, usize)> {
        iter.map(|(node, depth)| (node.text(), depth)).collect()
    }

    #[test]
    fn test_traverse_pre_order_with_depths() {
        let tree = tree();

        assert_eq!(
            labels(tree.traverse()),
            vec![
                ("A", 0),
                ("B", 1),
                ("C", 2),
                ("D", 2),
                ("E", 1),
                ("F", 0),
                ("G", 1)
            ]
        );
    }

    #[test]
    fn test_traverse_spec_example() {
        let literal = NavLiteral::from_value(&serde_json::json!({"children": [
            {"text": "A", "url": "a.html", "children": [{"text": "B", "url": "b.html"}]}
        ]}))
        .unwrap();
        let tree = NavTree::from_literal(literal).unwrap();

        assert_eq!(labels(tree.traverse()), vec![("A", 0), ("B", 1)]);
        assert_eq!(tree.find_by_url("b.html").unwrap().text(), "B");
    }

    #[test]
    fn test_traverse_visits_each_node_once_parent_first() {
        let tree = tree();
        let mut seen = HashSet::new();

        for (node, _) in tree.traverse() {
            if let Some(parent) = node.parent() {
                assert!(seen.contains(&parent.id()), "{} before parent", node.text());
            }
            assert!(seen.insert(node.id()), "{} visited twice", node.text());
        }

        assert_eq!(seen.len(), tree.len());
    }

    #[test]
    fn test_traverse_depth_equals_ancestor_count() {
        let tree = tree();

        for (node, depth) in tree.traverse() {
            assert_eq!(depth, node.ancestors().count());
        }
    }

    #[test]
    fn test_traverse_is_restartable() {
        let tree = tree();
        let first = labels(tree.traverse());

        let mut partial = tree.traverse();
        partial.next();
        let forked = partial.clone();

        assert_eq!(labels(tree.traverse()), first);
        assert_eq!(labels(forked), labels(partial));
    }

    #[test]
    fn test_traverse_exact_size() {
        let tree = tree();
        let mut iter = tree.traverse();

        assert_eq!(iter.len(), 7);
        iter.next();
        assert_eq!(iter.len(), 6);
    }

    #[test]
    fn test_subtree_stays_within_node() {
        let tree = tree();
        let b = tree.find_by_url("b.html").unwrap();

        assert_eq!(labels(b.subtree()), vec![("B", 1), ("C", 2), ("D", 2)]);
    }

    #[test]
    fn test_subtree_of_leaf_is_single_node() {
        let tree = tree();
        let g = tree.find_by_url("g.html").unwrap();

        assert_eq!(labels(g.subtree()), vec![("G", 1)]);
    }
}
