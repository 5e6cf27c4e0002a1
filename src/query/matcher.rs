//! Pattern descent
//!
//! Follows a pattern from the root one edge at a time. Cost is bounded by
//! the pattern length; the text length never enters into it.

use crate::index::suffix_tree::{NodeId, ROOT, SuffixTree, Symbol};

/// Locates the subtree whose leaves are exactly the occurrences of a pattern
pub struct Matcher<'t> {
    tree: &'t SuffixTree,
}

impl<'t> Matcher<'t> {
    pub fn new(tree: &'t SuffixTree) -> Self {
        Self { tree }
    }

    /// Descend along `pattern`, byte-exact.
    ///
    /// Returns the node at or just below the end of the pattern, or `None`
    /// at the first mismatch. When the pattern ends mid-edge the node below
    /// is returned: its subtree holds the same leaves. The empty pattern
    /// locates the root.
    pub fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let mut node = ROOT;
        let mut rest = pattern;

        while let Some(&first) = rest.first() {
            // Leaves have no children, so running into the end marker lands here too
            node = self.tree.child(node, first as Symbol)?;

            let label = self.tree.edge_bytes(node);
            let take = label.len().min(rest.len());
            if label[..take] != rest[..take] {
                return None;
            }
            rest = &rest[take..];
        }

        Some(node)
    }
}
