//! Output sink abstraction.

use std::borrow::Cow;
use std::fmt;

/// One node as seen by a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry<'a> {
    /// Display label.
    pub text: &'a str,
    /// Link target after applying the renderer's link prefix. Empty for
    /// grouping nodes.
    pub href: Cow<'a, str>,
    /// Depth relative to the rendered root (0 for the first level).
    pub depth: usize,
    /// True if no rendered entries follow as children of this one.
    pub is_leaf: bool,
    /// True if this is the last rendered entry among its siblings.
    pub is_last: bool,
}

/// Destination for rendered navigation entries.
///
/// Entries arrive in depth-first pre-order. A non-leaf entry is always
/// followed by its children at `depth + 1`.
pub trait NavSink {
    /// Emit one entry.
    fn entry(&mut self, entry: &NavEntry<'_>) -> fmt::Result;

    /// Called once after the last entry.
    fn finish(&mut self) -> fmt::Result {
        Ok(())
    }
}
