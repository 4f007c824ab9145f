//! Nested HTML list sink.

use std::fmt::{self, Write};

use crate::sink::{NavEntry, NavSink};

/// Writes entries as nested `<ul>`/`<li>` lists.
///
/// Leaves close their `<li>` on the same line; a parent keeps its `<li>`
/// open around the nested `<ul>` of its children:
///
/// ```html
/// <ul>
/// <li><a href="files.html">Files</a>
/// <ul>
/// <li><a href="files.html">File List</a></li>
/// </ul>
/// </li>
/// </ul>
/// ```
pub struct HtmlSink<W: Write> {
    out: W,
    started: bool,
    /// Number of nested `<ul>` currently open inside a parent `<li>`.
    open: usize,
}

impl<W: Write> HtmlSink<W> {
    /// Create an HTML sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: false,
            open: 0,
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn close_to(&mut self, depth: usize) -> fmt::Result {
        while self.open > depth {
            self.out.write_str("</ul>\n</li>\n")?;
            self.open -= 1;
        }
        Ok(())
    }
}

impl<W: Write> NavSink for HtmlSink<W> {
    fn entry(&mut self, entry: &NavEntry<'_>) -> fmt::Result {
        if !self.started {
            self.out.write_str("<ul>\n")?;
            self.started = true;
        }
        self.close_to(entry.depth)?;

        let text = escape_html(entry.text);
        if entry.href.is_empty() {
            write!(self.out, "<li><span>{text}</span>")?;
        } else {
            let href = escape_html(&entry.href);
            write!(self.out, "<li><a href=\"{href}\">{text}</a>")?;
        }

        if entry.is_leaf {
            self.out.write_str("</li>\n")
        } else {
            self.open += 1;
            self.out.write_str("\n<ul>\n")
        }
    }

    fn finish(&mut self) -> fmt::Result {
        if !self.started {
            return Ok(());
        }
        self.close_to(0)?;
        self.started = false;
        self.out.write_str("</ul>\n")
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use navmenu_tree::{NavLiteral, NavTree, NodeLiteral};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::renderer::Renderer;

    fn render(tree: &NavTree) -> String {
        let mut sink = HtmlSink::new(String::new());
        Renderer::new().render_tree(tree, &mut sink).unwrap();
        sink.into_inner()
    }

    #[test]
    fn test_html_sink_nested_lists() {
        let tree = NavTree::from_literal(NavLiteral::new(vec![
            NodeLiteral::new("A", "a.html").with_children(vec![
                NodeLiteral::new("B", "b.html").with_children(vec![NodeLiteral::new("C", "c.html")]),
            ]),
            NodeLiteral::new("D", "d.html"),
        ]))
        .unwrap();

        assert_eq!(
            render(&tree),
            "\
<ul>
<li><a href=\"a.html\">A</a>
<ul>
<li><a href=\"b.html\">B</a>
<ul>
<li><a href=\"c.html\">C</a></li>
</ul>
</li>
</ul>
</li>
<li><a href=\"d.html\">D</a></li>
</ul>
"
        );
    }

    #[test]
    fn test_html_sink_closes_lists_at_end() {
        let tree = NavTree::from_literal(NavLiteral::new(vec![
            NodeLiteral::new("A", "a.html").with_children(vec![NodeLiteral::new("B", "b.html")]),
        ]))
        .unwrap();

        assert_eq!(
            render(&tree),
            "<ul>\n<li><a href=\"a.html\">A</a>\n<ul>\n<li><a href=\"b.html\">B</a></li>\n</ul>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_html_sink_escapes_and_spans_groups() {
        let tree = NavTree::from_literal(NavLiteral::new(vec![
            NodeLiteral::new("<Group>", "").with_children(vec![NodeLiteral::new(
                "Q&A",
                "faq.html?a=1&b=\"2\"",
            )]),
        ]))
        .unwrap();

        assert_eq!(
            render(&tree),
            "<ul>\n<li><span>&lt;Group&gt;</span>\n<ul>\n<li><a href=\"faq.html?a=1&amp;b=&quot;2&quot;\">Q&amp;A</a></li>\n</ul>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & 'c'"), "a &lt; b &amp; &#x27;c&#x27;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
