//! Plain-text sinks.

use std::fmt::{self, Write};

use crate::sink::{NavEntry, NavSink};

/// Writes one line per entry, indented by depth.
///
/// ```text
/// Files (files.html)
///   File List (files.html)
/// ```
pub struct TextSink<W: Write> {
    out: W,
    indent: usize,
}

impl<W: Write> TextSink<W> {
    /// Create a sink indenting each level by `indent` spaces.
    pub fn new(out: W, indent: usize) -> Self {
        Self { out, indent }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NavSink for TextSink<W> {
    fn entry(&mut self, entry: &NavEntry<'_>) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = self.indent * entry.depth)?;
        write_label(&mut self.out, entry)
    }
}

/// Draws entries as a box-drawing tree, like the `tree` command.
///
/// ```text
/// ├── Main Page (index.html)
/// └── Files (files.html)
///     └── File List (files.html)
/// ```
pub struct TreeSink<W: Write> {
    out: W,
    /// For each open ancestor level, whether more siblings follow it.
    open: Vec<bool>,
}

impl<W: Write> TreeSink<W> {
    /// Create a tree sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            open: Vec::new(),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NavSink for TreeSink<W> {
    fn entry(&mut self, entry: &NavEntry<'_>) -> fmt::Result {
        self.open.truncate(entry.depth);
        for &more in &self.open {
            self.out.write_str(if more { "│   " } else { "    " })?;
        }
        self.out
            .write_str(if entry.is_last { "└── " } else { "├── " })?;
        write_label(&mut self.out, entry)?;

        if !entry.is_leaf {
            self.open.push(!entry.is_last);
        }
        Ok(())
    }
}

fn write_label<W: Write>(out: &mut W, entry: &NavEntry<'_>) -> fmt::Result {
    if entry.href.is_empty() {
        writeln!(out, "{}", entry.text)
    } else {
        writeln!(out, "{} ({})", entry.text, entry.href)
    }
}
