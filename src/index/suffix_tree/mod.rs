//! Suffix tree indexing module
//!
//! This module provides O(m + occ) exact substring search using a suffix
//! tree built online with Ukkonen's algorithm.
//!
//! ## Architecture
//!
//! - `child_map`: Per-node open-addressing child table
//! - `types`: Node arena entries, ids and constants
//! - `builder`: Online construction, one phase per input byte
//! - `tree`: The finished, immutable tree

pub mod builder;
pub mod child_map;
pub mod tree;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use child_map::ChildMap;
pub use tree::SuffixTree;
pub use types::{ALPHABET_SIZE, END_MARKER, EdgeEnd, LeafId, Node, NodeId, ROOT, Symbol, TreeStats};
