//! Types for suffix tree indexing
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to each other by
//! [`NodeId`]. Edge labels are never materialized: a node stores the offsets
//! of its incoming edge inside the text buffer, and open (leaf) edges read
//! their end from the tree-wide `current_end` cell.

use super::child_map::ChildMap;
use serde::Serialize;

/// Index of a node in the tree arena
pub type NodeId = u32;

/// Starting offset of the suffix a leaf represents (0-based)
pub type LeafId = usize;

/// Edge symbol: a byte value, or [`END_MARKER`]
pub type Symbol = u16;

/// The root is always the first node in the arena
pub const ROOT: NodeId = 0;

/// Virtual symbol appended by `finish()` so every suffix ends at a leaf.
/// It sits outside the byte alphabet and never matches a pattern byte.
pub const END_MARKER: Symbol = 256;

/// Number of distinct symbols a node can branch on (256 bytes + end marker)
pub const ALPHABET_SIZE: usize = 257;

/// End of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Internal edge, closed forever at this offset (exclusive)
    Closed(usize),
    /// Leaf edge, ends wherever the tree's `current_end` currently is
    Open,
}

/// A node of the suffix tree together with its incoming edge label
#[derive(Debug, Clone)]
pub struct Node {
    /// Offset of the first symbol of the incoming edge label
    pub start: usize,
    pub end: EdgeEnd,
    /// `Some` for leaves only
    pub leaf_id: Option<LeafId>,
    pub children: ChildMap,
    /// Construction-time shortcut to the node spelling this one minus its
    /// first symbol. Non-owning; carries no lifetime obligation.
    pub suffix_link: Option<NodeId>,
}

impl Node {
    pub fn root() -> Self {
        Self {
            start: 0,
            end: EdgeEnd::Closed(0),
            leaf_id: None,
            children: ChildMap::new(),
            suffix_link: Some(ROOT),
        }
    }

    pub fn internal(start: usize, end: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Closed(end),
            leaf_id: None,
            children: ChildMap::new(),
            suffix_link: None,
        }
    }

    pub fn leaf(start: usize, leaf_id: LeafId) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
            leaf_id: Some(leaf_id),
            children: ChildMap::new(),
            suffix_link: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf_id.is_some()
    }

    /// Offset one past the last symbol of the edge label
    #[inline]
    pub fn end(&self, current_end: usize) -> usize {
        match self.end {
            EdgeEnd::Closed(end) => end,
            EdgeEnd::Open => current_end,
        }
    }

    /// Number of symbols on the incoming edge
    #[inline]
    pub fn edge_len(&self, current_end: usize) -> usize {
        self.end(current_end) - self.start
    }
}

/// Shape summary of a finished tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Length of the indexed text in bytes (end marker excluded)
    pub text_len: usize,
    /// All nodes including the root
    pub node_count: usize,
    /// One per text suffix; the empty-suffix leaf is not counted
    pub leaf_count: usize,
    /// Branching nodes, root excluded
    pub internal_count: usize,
    /// Deepest root-to-node path in edges
    pub max_depth: usize,
}
