//! Loading navigation trees from source text.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::LoadError;
use crate::literal::NavLiteral;
use crate::menudata::parse_menudata;
use crate::tree::NavTree;

/// Syntax of a navigation source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Pick [`Json`](Self::Json) or [`Menudata`](Self::Menudata) from the content.
    #[default]
    Auto,
    /// Plain JSON document.
    Json,
    /// Generator-emitted `var menudata = {...}` JavaScript.
    Menudata,
}

impl SourceFormat {
    /// Detect the format of `src`.
    ///
    /// Sources starting with `{` or `[` are JSON; anything else (comments,
    /// a `var` assignment) is treated as menudata. Never returns `Auto`.
    #[must_use]
    pub fn detect(src: &str) -> Self {
        match strip_bom(src).trim_start().chars().next() {
            Some('{' | '[') => Self::Json,
            _ => Self::Menudata,
        }
    }

    /// Resolve `Auto` against the content of `src`.
    #[must_use]
    pub fn resolve(self, src: &str) -> Self {
        match self {
            Self::Auto => Self::detect(src),
            other => other,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Json => "json",
            Self::Menudata => "menudata",
        })
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "menudata" => Ok(Self::Menudata),
            other => Err(format!(
                "unknown source format `{other}` (expected auto, json or menudata)"
            )),
        }
    }
}

/// Drop a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(src: &str) -> &str {
    src.strip_prefix('\u{feff}').unwrap_or(src)
}

/// Parse `src` into a literal without building a tree.
pub fn parse_source(src: &str, format: SourceFormat) -> Result<NavLiteral, LoadError> {
    let src = strip_bom(src);
    match format.resolve(src) {
        SourceFormat::Json => NavLiteral::from_json(src),
        SourceFormat::Menudata | SourceFormat::Auto => {
            let value = parse_menudata(src)?;
            Ok(NavLiteral::from_value(&value)?)
        }
    }
}

impl NavTree {
    /// Parse `src` and build a tree in one step.
    ///
    /// ```
    /// use navmenu_tree::{NavTree, SourceFormat};
    ///
    /// let src = r#"var menudata={children:[{text:"Main Page",url:"index.html"}]}"#;
    /// let tree = NavTree::from_source(src, SourceFormat::Auto)?;
    /// assert_eq!(tree.find_by_url("index.html").map(|n| n.text()), Some("Main Page"));
    /// # Ok::<(), navmenu_tree::LoadError>(())
    /// ```
    pub fn from_source(src: &str, format: SourceFormat) -> Result<Self, LoadError> {
        let literal = parse_source(src, format)?;
        Ok(Self::from_literal(literal)?)
    }
}
