//! Walks a navigation tree and feeds a [`NavSink`].

use std::borrow::Cow;
use std::fmt;

use navmenu_tree::{NavTree, NodeRef};

use crate::html::HtmlSink;
use crate::markdown::MarkdownSink;
use crate::sink::{NavEntry, NavSink};
use crate::style::RenderStyle;
use crate::text::{TextSink, TreeSink};

/// Default indentation per level for [`TextSink`].
pub const DEFAULT_INDENT: usize = 2;

/// Navigation renderer.
///
/// Rendering only reads the tree; every side effect goes to the sink.
#[derive(Clone, Debug)]
pub struct Renderer {
    max_depth: Option<usize>,
    link_prefix: Option<String>,
    indent: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer that emits every level with links unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: None,
            link_prefix: None,
            indent: DEFAULT_INDENT,
        }
    }

    /// Limit output to `levels` levels below the rendered root.
    ///
    /// Entries on the last level are reported as leaves.
    #[must_use]
    pub fn with_max_depth(mut self, levels: usize) -> Self {
        self.max_depth = Some(levels);
        self
    }

    /// Prepend `prefix` to relative links.
    ///
    /// Empty links, fragment-only links (`#x`), absolute paths and links with
    /// a scheme are left untouched.
    #[must_use]
    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = Some(prefix.into());
        self
    }

    /// Spaces per level used by [`RenderStyle::Text`].
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Render `node` and its descendants.
    ///
    /// `node` is emitted at depth 0.
    pub fn render<S: NavSink + ?Sized>(&self, node: NodeRef<'_>, sink: &mut S) -> fmt::Result {
        self.render_subtree(node, true, sink)?;
        sink.finish()
    }

    /// Render every top-level node of `tree`.
    pub fn render_tree<S: NavSink + ?Sized>(&self, tree: &NavTree, sink: &mut S) -> fmt::Result {
        for root in tree.roots() {
            self.render_subtree(root, root.next_sibling().is_none(), sink)?;
        }
        sink.finish()
    }

    /// Render `node` in `style` into a new string.
    pub fn render_to_string(
        &self,
        node: NodeRef<'_>,
        style: RenderStyle,
    ) -> Result<String, fmt::Error> {
        self.render_styled(style, |sink| self.render(node, sink))
    }

    /// Render all of `tree` in `style` into a new string.
    pub fn render_tree_to_string(
        &self,
        tree: &NavTree,
        style: RenderStyle,
    ) -> Result<String, fmt::Error> {
        self.render_styled(style, |sink| self.render_tree(tree, sink))
    }

    fn render_styled(
        &self,
        style: RenderStyle,
        render: impl FnOnce(&mut dyn NavSink) -> fmt::Result,
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        match style {
            RenderStyle::Text => render(&mut TextSink::new(&mut out, self.indent))?,
            RenderStyle::Tree => render(&mut TreeSink::new(&mut out))?,
            RenderStyle::Html => render(&mut HtmlSink::new(&mut out))?,
            RenderStyle::Markdown => render(&mut MarkdownSink::new(&mut out))?,
        }
        Ok(out)
    }

    fn render_subtree<S: NavSink + ?Sized>(
        &self,
        root: NodeRef<'_>,
        root_is_last: bool,
        sink: &mut S,
    ) -> fmt::Result {
        let base = root.depth();
        let mut emitted = 0usize;

        for (node, depth) in root.subtree() {
            let depth = depth - base;
            if self.max_depth.is_some_and(|levels| depth >= levels) {
                continue;
            }
            let at_limit = self.max_depth.is_some_and(|levels| depth + 1 == levels);
            let is_last = if depth == 0 {
                root_is_last
            } else {
                node.next_sibling().is_none()
            };

            sink.entry(&NavEntry {
                text: node.text(),
                href: self.href(node.url()),
                depth,
                is_leaf: node.is_leaf() || at_limit,
                is_last,
            })?;
            emitted += 1;
        }

        tracing::trace!(root = root.text(), entries = emitted, "Rendered subtree");
        Ok(())
    }

    fn href<'a>(&self, url: &'a str) -> Cow<'a, str> {
        match &self.link_prefix {
            Some(prefix) if is_relative_link(url) => Cow::Owned(format!("{prefix}{url}")),
            _ => Cow::Borrowed(url),
        }
    }
}

fn is_relative_link(url: &str) -> bool {
    !url.is_empty() && !url.starts_with('/') && !url.starts_with('#') && !has_scheme(url)
}

/// True for `scheme:` prefixed links such as `https://`, `mailto:` or `tel:`.
fn has_scheme(url: &str) -> bool {
    let Some(end) = url.find([':', '/', '?', '#']) else {
        return false;
    };
    let scheme = &url[..end];
    url[end..].starts_with(':')
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
