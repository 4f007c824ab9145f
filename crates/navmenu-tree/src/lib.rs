//! Navigation tree model for generated documentation menus.
//!
//! This crate provides:
//! - [`NavLiteral`]: the nested `{text, url, children?}` literal a
//!   documentation generator emits for its sidebar
//! - [`parse_menudata`]: a parser for generator `menudata.js` files
//! - [`NavTree`]: an immutable, ordered tree built once from a literal, with
//!   pre-order traversal and lookup by url
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use navmenu_tree::{NavTree, SourceFormat};
//!
//! let src = r#"var menudata={children:[
//! {text:"Files",url:"files.html",children:[
//! {text:"File List",url:"files.html"},
//! {text:"Globals",url:"globals.html"}]}]}"#;
//! let tree = NavTree::from_source(src, SourceFormat::Auto)?;
//!
//! let labels: Vec<_> = tree.traverse().map(|(node, depth)| (node.text(), depth)).collect();
//! assert_eq!(labels, [("Files", 0), ("File List", 1), ("Globals", 1)]);
//!
//! let all = tree.find_all_by_url("files.html");
//! assert_eq!(all.len(), 2);
//! # Ok(())
//! # }
//! ```

mod error;
mod json;
mod literal;
mod menudata;
mod source;
mod traverse;
mod tree;

pub use error::{LoadError, MalformedNodeError, MalformedReason, ParseError};
pub use literal::{NavLiteral, NodeLiteral};
pub use menudata::parse_menudata;
pub use source::{SourceFormat, parse_source};
pub use traverse::Traverse;
pub use tree::{NavNode, NavTree, NodeId, NodeRef};
