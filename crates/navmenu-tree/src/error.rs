//! Error types for loading navigation trees.

/// Reason a node literal was rejected during construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// Node literal is not a record.
    #[error("expected a record, found {0}")]
    NotARecord(&'static str),
    /// Required key is absent.
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    /// Key is present but does not hold a string.
    #[error("`{key}` must be a string, found {found}")]
    NotAString {
        /// Offending key.
        key: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },
    /// `text` is present but empty.
    #[error("`text` cannot be empty")]
    EmptyText,
    /// Key other than `text`, `url` or `children`.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    /// `children` is present but not a sequence.
    #[error("`children` must be a sequence, found {0}")]
    ChildrenNotSequence(&'static str),
}

/// A node literal violates the `{text, url, children?}` shape.
///
/// Construction is all-or-nothing: when this error is returned no tree
/// is built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Malformed navigation node at {location}: {reason}")]
pub struct MalformedNodeError {
    /// Location of the node, e.g. `children[1].children[3]`, or `root`.
    pub location: String,
    /// What is wrong with the node.
    pub reason: MalformedReason,
}

impl MalformedNodeError {
    pub(crate) fn new(location: impl Into<String>, reason: MalformedReason) -> Self {
        Self {
            location: location.into(),
            reason,
        }
    }
}

/// Syntax error in a navigation source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    /// Human-readable description.
    pub message: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        let full = e.to_string();
        let message = full
            .rsplit_once(" at line ")
            .map_or(full.as_str(), |(message, _)| message)
            .to_owned();
        Self {
            message,
            line: e.line(),
            column: e.column(),
        }
    }
}

/// Error returned when loading a tree from source text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Source parsed but a node has the wrong shape.
    #[error(transparent)]
    Malformed(#[from] MalformedNodeError),
}
