//! Built-in output styles.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Built-in sink selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// [`TextSink`](crate::TextSink): indented lines.
    Text,
    /// [`TreeSink`](crate::TreeSink): box-drawing branches.
    #[default]
    Tree,
    /// [`HtmlSink`](crate::HtmlSink): nested lists.
    Html,
    /// [`MarkdownSink`](crate::MarkdownSink): bullet list of links.
    #[serde(alias = "md")]
    Markdown,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Tree => "tree",
            Self::Html => "html",
            Self::Markdown => "markdown",
        })
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "tree" => Ok(Self::Tree),
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!(
                "unknown render style `{other}` (expected text, tree, html or markdown)"
            )),
        }
    }
}
