pub mod build;
pub mod stats;
pub mod suffix_tree;

pub use build::{BuiltTree, build_tree, build_tree_with_progress};
pub use suffix_tree::{SuffixTree, SuffixTreeBuilder};
