//! Immutable navigation tree.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec<NavNode>` in depth-first pre-order, with
//! parent/children relationships tracked by indices. This provides:
//! - Pre-order traversal as a plain index scan
//! - Contiguous subtrees: node `i` owns indices `i..subtree_end[i]`
//! - O(1) URL lookups via a `url_index` `HashMap` whose entries are in pre-order
//! - O(d) breadcrumb building where d is the node depth

use std::collections::HashMap;
use std::fmt;

use crate::error::{MalformedNodeError, MalformedReason};
use crate::literal::{NavLiteral, NodeLiteral, ROOT_LOCATION, child_location};
use crate::traverse::Traverse;

/// Navigation entry data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavNode {
    /// Display label (never empty).
    pub text: String,
    /// Link target, optionally with a `#fragment`. May be empty.
    pub url: String,
}

impl NavNode {
    /// URL without its fragment.
    ///
    /// ```
    /// use navmenu_tree::NavNode;
    ///
    /// let node = NavNode { text: "c".to_owned(), url: "functions_c.html#index_c".to_owned() };
    /// assert_eq!(node.page(), "functions_c.html");
    /// assert_eq!(node.fragment(), Some("index_c"));
    /// ```
    #[must_use]
    pub fn page(&self) -> &str {
        self.url
            .split_once('#')
            .map_or(self.url.as_str(), |(page, _)| page)
    }

    /// In-page anchor after `#`, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.url.split_once('#').map(|(_, fragment)| fragment)
    }
}

/// Stable handle of a node within one [`NavTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in pre-order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, rooted, immutable tree of navigation nodes.
///
/// The root is implicit: it has no label or link and is never yielded by
/// traversal or lookup. Its children are the top-level nodes.
///
/// Built once with [`NavTree::from_literal`] and read-only thereafter, so a
/// tree can be shared between threads without locking.
#[derive(Clone, Debug, Default)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    depths: Vec<usize>,
    subtree_end: Vec<usize>,
    roots: Vec<usize>,
    url_index: HashMap<String, Vec<usize>>,
}

impl NavTree {
    /// Build a tree from a literal.
    ///
    /// The whole literal is rejected if any node has an empty `text`; no
    /// partial tree is returned.
    pub fn from_literal(literal: NavLiteral) -> Result<Self, MalformedNodeError> {
        let mut builder = NavTreeBuilder::with_capacity(literal.node_count());
        for (i, node) in literal.children.into_iter().enumerate() {
            builder.add_subtree(node, None, &child_location(ROOT_LOCATION, i))?;
        }
        let tree = builder.build();

        tracing::debug!(
            nodes = tree.len(),
            top_level = tree.roots.len(),
            max_depth = ?tree.max_depth(),
            "Built navigation tree"
        );
        Ok(tree)
    }

    /// Number of nodes, excluding the implicit root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the implicit root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node, `None` for an empty tree.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.depths.iter().copied().max()
    }

    /// Top-level nodes in display order.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().map(move |&idx| self.node_ref(idx))
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| self.node_ref(id.0))
    }

    /// All nodes with their depth, in depth-first pre-order.
    ///
    /// Top-level nodes have depth 0. The iterator is lazy and cloneable;
    /// calling this again starts a fresh traversal.
    #[must_use]
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::new(self, 0, self.nodes.len())
    }

    /// First node in pre-order whose `url` equals `url`.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<NodeRef<'_>> {
        self.url_index
            .get(url)
            .and_then(|indices| indices.first())
            .map(|&idx| self.node_ref(idx))
    }

    /// Every node whose `url` equals `url`, in pre-order.
    #[must_use]
    pub fn find_all_by_url(&self, url: &str) -> Vec<NodeRef<'_>> {
        self.url_index
            .get(url)
            .map(|indices| indices.iter().map(|&idx| self.node_ref(idx)).collect())
            .unwrap_or_default()
    }

    /// Every node linking to `page`, with or without a fragment, in pre-order.
    #[must_use]
    pub fn find_by_page(&self, page: &str) -> Vec<NodeRef<'_>> {
        self.traverse()
            .map(|(node, _)| node)
            .filter(|node| node.page() == page)
            .collect()
    }

    /// Ancestors of the first node matching `url`, top-level first.
    ///
    /// The node itself is not included. Empty for unknown urls and for
    /// top-level nodes.
    #[must_use]
    pub fn breadcrumbs(&self, url: &str) -> Vec<NodeRef<'_>> {
        let Some(node) = self.find_by_url(url) else {
            return Vec::new();
        };
        let mut ancestors: Vec<_> = node.ancestors().collect();
        ancestors.reverse();
        ancestors
    }

    /// Urls shared by more than one node, with their node count, sorted by url.
    #[must_use]
    pub fn shared_urls(&self) -> Vec<(&str, usize)> {
        let mut shared: Vec<_> = self
            .url_index
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(url, indices)| (url.as_str(), indices.len()))
            .collect();
        shared.sort_unstable();
        shared
    }

    /// Convert back to the literal shape.
    #[must_use]
    pub fn to_literal(&self) -> NavLiteral {
        NavLiteral::new(self.roots().map(NodeRef::to_literal).collect())
    }

    fn node_ref(&self, idx: usize) -> NodeRef<'_> {
        NodeRef::new(self, idx)
    }
}

impl TryFrom<NavLiteral> for NavTree {
    type Error = MalformedNodeError;

    fn try_from(literal: NavLiteral) -> Result<Self, Self::Error> {
        Self::from_literal(literal)
    }
}

/// Borrowed view of one node and its position in the tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a NavTree,
    idx: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a NavTree, idx: usize) -> Self {
        Self { tree, idx }
    }

    /// Handle of this node.
    #[must_use]
    pub fn id(self) -> NodeId {
        NodeId(self.idx)
    }

    /// Node data.
    #[must_use]
    pub fn node(self) -> &'a NavNode {
        &self.tree.nodes[self.idx]
    }

    /// Display label.
    #[must_use]
    pub fn text(self) -> &'a str {
        &self.node().text
    }

    /// Link target.
    #[must_use]
    pub fn url(self) -> &'a str {
        &self.node().url
    }

    /// Link target without fragment.
    #[must_use]
    pub fn page(self) -> &'a str {
        self.node().page()
    }

    /// Fragment of the link target.
    #[must_use]
    pub fn fragment(self) -> Option<&'a str> {
        self.node().fragment()
    }

    /// Number of ancestors (0 for top-level nodes).
    #[must_use]
    pub fn depth(self) -> usize {
        self.tree.depths[self.idx]
    }

    /// True if the node has no children.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        self.tree.children[self.idx].is_empty()
    }

    /// Parent node, `None` for top-level nodes.
    #[must_use]
    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.tree.parents[self.idx].map(|idx| self.tree.node_ref(idx))
    }

    /// Children in display order.
    pub fn children(self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        tree.children[self.idx]
            .iter()
            .map(move |&idx| tree.node_ref(idx))
    }

    /// Next node under the same parent, if any.
    #[must_use]
    pub fn next_sibling(self) -> Option<NodeRef<'a>> {
        let next = self.tree.subtree_end[self.idx];
        let limit = self.tree.parents[self.idx]
            .map_or(self.tree.nodes.len(), |parent| self.tree.subtree_end[parent]);
        (next < limit).then(|| self.tree.node_ref(next))
    }

    /// Ancestors from the parent up to the top-level node.
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// This node and its descendants in pre-order, with absolute depths.
    #[must_use]
    pub fn subtree(self) -> Traverse<'a> {
        Traverse::new(self.tree, self.idx, self.tree.subtree_end[self.idx])
    }

    /// Convert this subtree back to the literal shape.
    #[must_use]
    pub fn to_literal(self) -> NodeLiteral {
        NodeLiteral {
            text: self.text().to_owned(),
            url: self.url().to_owned(),
            children: self.children().map(NodeRef::to_literal).collect(),
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.idx)
            .field("text", &self.text())
            .field("url", &self.url())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Builder that lays nodes out in pre-order.
struct NavTreeBuilder {
    tree: NavTree,
}

impl NavTreeBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: NavTree {
                nodes: Vec::with_capacity(capacity),
                children: Vec::with_capacity(capacity),
                parents: Vec::with_capacity(capacity),
                depths: Vec::with_capacity(capacity),
                subtree_end: Vec::with_capacity(capacity),
                roots: Vec::new(),
                url_index: HashMap::new(),
            },
        }
    }

    /// Add `literal` and its descendants under `parent`.
    fn add_subtree(
        &mut self,
        literal: NodeLiteral,
        parent: Option<usize>,
        location: &str,
    ) -> Result<(), MalformedNodeError> {
        if literal.text.is_empty() {
            return Err(MalformedNodeError::new(location, MalformedReason::EmptyText));
        }
        if literal.url.is_empty() && literal.children.is_empty() {
            tracing::warn!(location, text = %literal.text, "Leaf navigation node has no url");
        }

        let tree = &mut self.tree;
        let idx = tree.nodes.len();
        let depth = parent.map_or(0, |p| tree.depths[p] + 1);

        tree.url_index
            .entry(literal.url.clone())
            .or_default()
            .push(idx);
        tree.nodes.push(NavNode {
            text: literal.text,
            url: literal.url,
        });
        tree.children.push(Vec::new());
        tree.parents.push(parent);
        tree.depths.push(depth);
        tree.subtree_end.push(idx + 1);

        match parent {
            Some(p) => tree.children[p].push(idx),
            None => tree.roots.push(idx),
        }

        for (i, child) in literal.children.into_iter().enumerate() {
            self.add_subtree(child, Some(idx), &child_location(location, i))?;
        }

        self.tree.subtree_end[idx] = self.tree.nodes.len();
        Ok(())
    }

    fn build(self) -> NavTree {
        self.tree
    }
}
