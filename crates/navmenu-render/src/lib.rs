//! Navigation tree rendering.
//!
//! A [`Renderer`] walks a [`NavTree`](navmenu_tree::NavTree) (or one
//! subtree) in pre-order and hands each node to a [`NavSink`] as a
//! [`NavEntry`]: label, link and depth. Sinks decide the representation:
//!
//! - [`TextSink`]: indented lines
//! - [`TreeSink`]: box-drawing tree
//! - [`HtmlSink`]: nested `<ul>` lists
//! - [`MarkdownSink`]: nested bullet list of links
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use navmenu_render::{RenderStyle, Renderer};
//! use navmenu_tree::{NavTree, SourceFormat};
//!
//! let src = r#"var menudata={children:[
//! {text:"Files",url:"files.html",children:[
//! {text:"File List",url:"files.html"}]}]}"#;
//! let tree = NavTree::from_source(src, SourceFormat::Auto)?;
//!
//! let out = Renderer::new().render_tree_to_string(&tree, RenderStyle::Text)?;
//! assert_eq!(out, "Files (files.html)\n  File List (files.html)\n");
//! # Ok(())
//! # }
//! ```

mod html;
mod markdown;
mod renderer;
mod sink;
mod style;
mod text;

pub use html::{HtmlSink, escape_html};
pub use markdown::MarkdownSink;
pub use renderer::{DEFAULT_INDENT, Renderer};
pub use sink::{NavEntry, NavSink};
pub use style::RenderStyle;
pub use text::{TextSink, TreeSink};
