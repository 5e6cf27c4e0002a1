//! # STX - Suffix Tree Index
//!
//! STX builds a suffix tree over one text and then answers "where does
//! this pattern occur" queries in time proportional to the pattern length
//! plus the number of occurrences, independent of the text length.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Online suffix tree construction (Ukkonen)
//! - [`query`] - Pattern descent, leaf collection and ordering
//! - [`output`] - Result formatting (text or JSON lines)
//! - [`config`] - Session settings
//! - [`utils`] - Input framing and progress display
//!
//! ## Quick Start
//!
//! ```
//! let tree = stx::build(b"banana\n");
//!
//! assert_eq!(stx::query(&tree, b"ana"), vec![1, 3]);
//! assert_eq!(stx::query(&tree, b"na"), vec![2, 4]);
//! assert!(stx::query(&tree, b"xyz").is_empty());
//! ```
//!
//! Positions are 0-based offsets into the text, in ascending order. The
//! empty pattern occurs at every offset.

pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{Error, Result};
pub use index::suffix_tree::{SuffixTree, SuffixTreeBuilder};
pub use query::query;

/// Build the suffix tree of `text`
pub fn build(text: &[u8]) -> SuffixTree {
    SuffixTree::build(text)
}
