//! Markdown list sink.

use std::fmt::{self, Write};

use crate::sink::{NavEntry, NavSink};

/// Writes entries as a nested Markdown bullet list of links.
pub struct MarkdownSink<W: Write> {
    out: W,
}

impl<W: Write> MarkdownSink<W> {
    /// Create a Markdown sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NavSink for MarkdownSink<W> {
    fn entry(&mut self, entry: &NavEntry<'_>) -> fmt::Result {
        write!(self.out, "{:width$}- ", "", width = 2 * entry.depth)?;
        let text = escape_markdown(entry.text, &['\\', '[', ']', '*', '_', '`']);
        if entry.href.is_empty() {
            writeln!(self.out, "{text}")
        } else {
            let href = escape_markdown(&entry.href, &['\\', '(', ')', ' ']);
            writeln!(self.out, "[{text}]({href})")
        }
    }
}

/// Backslash-escape `special` characters. Spaces become `%20`.
fn escape_markdown(s: &str, special: &[char]) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ' ' && special.contains(&' ') {
            result.push_str("%20");
        } else if special.contains(&c) {
            result.push('\\');
            result.push(c);
        } else {
            result.push(c);
        }
    }
    result
}
