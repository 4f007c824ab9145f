//! Typed navigation literals.
//!
//! A navigation literal is the nested `{text, url, children?}` structure a
//! documentation generator emits for its sidebar menu. The implicit root is a
//! record holding only `children` (or a bare sequence of node records):
//!
//! ```json
//! {"children": [
//!     {"text": "Main Page", "url": "index.html"},
//!     {"text": "Files", "url": "files.html", "children": [
//!         {"text": "File List", "url": "files.html"}
//!     ]}
//! ]}
//! ```
//!
//! Conversion from an untyped [`Value`] checks the record shape and reports
//! the location of the first offending node. Non-empty `text` is checked when
//! the literal is turned into a [`NavTree`](crate::NavTree).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{MalformedNodeError, MalformedReason};
use crate::json::parse_json;
use crate::source::strip_bom;

/// Location label used for the implicit root.
pub(crate) const ROOT_LOCATION: &str = "root";

/// Implicit root of a navigation literal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavLiteral {
    /// Top-level nodes in display order.
    pub children: Vec<NodeLiteral>,
}

/// One `{text, url, children?}` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeLiteral {
    /// Display label.
    pub text: String,
    /// Link target, optionally with a `#fragment`. Empty for grouping nodes.
    pub url: String,
    /// Child records in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeLiteral>,
}

impl NodeLiteral {
    /// Create a leaf record.
    #[must_use]
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            children: Vec::new(),
        }
    }

    /// Replace the children of this record.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NodeLiteral>) -> Self {
        self.children = children;
        self
    }
}

impl NavLiteral {
    /// Create a literal from its top-level records.
    #[must_use]
    pub fn new(children: Vec<NodeLiteral>) -> Self {
        Self { children }
    }

    /// Convert an untyped value into a literal.
    ///
    /// Accepts either a record with an optional `children` key, or a bare
    /// sequence of node records.
    pub fn from_value(value: &Value) -> Result<Self, MalformedNodeError> {
        match value {
            Value::Object(map) => {
                if let Some(key) = map.keys().find(|key| key.as_str() != "children") {
                    return Err(MalformedNodeError::new(
                        ROOT_LOCATION,
                        MalformedReason::UnknownKey(key.clone()),
                    ));
                }
                let children = children_from_value(map.get("children"), ROOT_LOCATION)?;
                Ok(Self { children })
            }
            Value::Array(_) => {
                let children = children_from_value(Some(value), ROOT_LOCATION)?;
                Ok(Self { children })
            }
            other => Err(MalformedNodeError::new(
                ROOT_LOCATION,
                MalformedReason::NotARecord(json_type_name(other)),
            )),
        }
    }

    /// Parse a JSON document into a literal.
    ///
    /// Repeated keys in a record are a parse error. A leading byte order
    /// mark is ignored.
    pub fn from_json(src: &str) -> Result<Self, crate::LoadError> {
        let value = parse_json(strip_bom(src))?;
        Ok(Self::from_value(&value)?)
    }

    /// Serialize the literal as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Total number of records in the literal.
    #[must_use]
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[NodeLiteral]) -> usize {
            nodes.iter().map(|node| 1 + count(&node.children)).sum()
        }
        count(&self.children)
    }
}

/// Location of the `index`-th child of the node at `parent`.
pub(crate) fn child_location(parent: &str, index: usize) -> String {
    if parent == ROOT_LOCATION {
        format!("children[{index}]")
    } else {
        format!("{parent}.children[{index}]")
    }
}

fn children_from_value(
    value: Option<&Value>,
    parent: &str,
) -> Result<Vec<NodeLiteral>, MalformedNodeError> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| node_from_value(item, &child_location(parent, i)))
            .collect(),
        Some(other) => Err(MalformedNodeError::new(
            parent,
            MalformedReason::ChildrenNotSequence(json_type_name(other)),
        )),
    }
}

fn node_from_value(value: &Value, location: &str) -> Result<NodeLiteral, MalformedNodeError> {
    let Value::Object(map) = value else {
        return Err(MalformedNodeError::new(
            location,
            MalformedReason::NotARecord(json_type_name(value)),
        ));
    };

    if let Some(key) = map
        .keys()
        .find(|key| !matches!(key.as_str(), "text" | "url" | "children"))
    {
        return Err(MalformedNodeError::new(
            location,
            MalformedReason::UnknownKey(key.clone()),
        ));
    }

    let text = string_field(map, "text", location)?;
    let url = string_field(map, "url", location)?;
    let children = children_from_value(map.get("children"), location)?;

    Ok(NodeLiteral {
        text,
        url,
        children,
    })
}

fn string_field(
    map: &Map<String, Value>,
    key: &'static str,
    location: &str,
) -> Result<String, MalformedNodeError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(MalformedNodeError::new(
            location,
            MalformedReason::NotAString {
                key,
                found: json_type_name(other),
            },
        )),
        None => Err(MalformedNodeError::new(
            location,
            MalformedReason::MissingKey(key),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "record",
    }
}
