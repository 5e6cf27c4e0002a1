//! Pattern queries against a finished suffix tree
//!
//! A query descends from the root along the pattern ([`Matcher`]), gathers
//! the leaves under the node it reaches ([`LeafCollector`]) and sorts them
//! ([`counting_sort`]). Absence is not an error: it is an empty result.

pub mod collector;
pub mod matcher;
pub mod session;

pub use collector::{LeafCollector, counting_sort};
pub use matcher::Matcher;
pub use session::{QueryOutcome, QuerySession, SessionSummary};

use crate::index::suffix_tree::SuffixTree;
use memchr::memmem;

/// All 0-based start positions of `pattern` in the tree's text, ascending.
///
/// Empty when the pattern does not occur. The empty pattern occurs at every
/// position `0..text.len()`.
pub fn query(tree: &SuffixTree, pattern: &[u8]) -> Vec<usize> {
    let Some(locus) = Matcher::new(tree).locate(pattern) else {
        return Vec::new();
    };

    let mut ids = LeafCollector::new(tree).collect(locus);
    counting_sort(&mut ids);
    ids
}

/// Number of occurrences of `pattern`, without sorting them
pub fn count(tree: &SuffixTree, pattern: &[u8]) -> usize {
    Matcher::new(tree)
        .locate(pattern)
        .map_or(0, |locus| LeafCollector::new(tree).collect(locus).len())
}

/// Reference scan: restart a substring search one byte after every hit.
/// Linear in the text per query; used as the oracle in tests and benches.
pub fn naive_occurrences(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..text.len()).collect();
    }

    let finder = memmem::Finder::new(pattern);
    let mut positions = Vec::new();
    let mut from = 0;

    while let Some(found) = finder.find(&text[from..]) {
        positions.push(from + found);
        from += found + 1;
    }

    positions
}
