//! Suffix tree builder
//!
//! Online construction (Ukkonen): the text is consumed one byte at a time,
//! and after every byte the arena holds the implicit suffix tree of the
//! prefix seen so far. Leaf edges are open and read their end from
//! `current_end`, so advancing that one field lengthens every leaf at once.
//!
//! `finish()` runs one more phase for a virtual end marker, which turns the
//! implicit tree into an explicit one: every suffix ends at its own leaf.

use super::tree::SuffixTree;
use super::types::*;
use tracing::{debug, trace};

/// Construction cursor: the point where the next suffix gets inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoint {
    node: NodeId,
    /// Text offset whose symbol selects the edge leaving `node`
    edge: usize,
    /// Symbols already matched along that edge
    length: usize,
}

/// Builder for constructing a suffix tree from a byte stream
pub struct SuffixTreeBuilder {
    text: Vec<u8>,
    nodes: Vec<Node>,
    /// Shared end of every open leaf edge
    current_end: usize,
    active: ActivePoint,
    /// Suffixes of the current prefix not yet explicit in the tree
    remainder: usize,
}

impl Default for SuffixTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTreeBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a builder sized for a text of `capacity` bytes.
    /// A suffix tree has at most `2n + 1` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(2 * capacity + 2);
        nodes.push(Node::root());

        Self {
            text: Vec::with_capacity(capacity),
            nodes,
            current_end: 0,
            active: ActivePoint {
                node: ROOT,
                edge: 0,
                length: 0,
            },
            remainder: 0,
        }
    }

    /// Append one byte and update the tree
    pub fn push(&mut self, byte: u8) {
        self.text.push(byte);
        self.extend_phase(self.text.len() - 1);
    }

    /// Append a run of bytes
    pub fn extend(&mut self, bytes: &[u8]) {
        self.text.reserve(bytes.len());
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Number of bytes consumed so far
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Suffixes still pending after the last byte
    pub fn remainder(&self) -> usize {
        self.remainder
    }

    /// Seal the tree with the end marker and hand it over for querying.
    /// An empty text leaves the tree as a bare root.
    pub fn finish(mut self) -> SuffixTree {
        if !self.text.is_empty() {
            let end = self.text.len();
            self.extend_phase(end);
        }
        debug_assert_eq!(self.remainder, 0);

        debug!(
            text_len = self.text.len(),
            nodes = self.nodes.len(),
            "suffix tree finished"
        );

        SuffixTree::from_parts(self.text, self.nodes, self.current_end)
    }

    /// Symbol at a text offset; one past the text is the end marker
    #[inline]
    fn symbol_at(&self, pos: usize) -> Symbol {
        match self.text.get(pos) {
            Some(&byte) => byte as Symbol,
            None => {
                assert_eq!(pos, self.text.len(), "symbol offset {pos} past the end marker");
                END_MARKER
            }
        }
    }

    #[inline]
    fn edge_len(&self, node: NodeId) -> usize {
        self.nodes[node as usize].edge_len(self.current_end)
    }

    fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::try_from(self.nodes.len()).expect("node arena exceeds NodeId range");
        self.nodes.push(node);
        id
    }

    /// Point `from`'s suffix link at `to`. The root keeps its self-link.
    fn link(&mut self, from: Option<NodeId>, to: NodeId) {
        if let Some(from) = from.filter(|&id| id != ROOT) {
            self.nodes[from as usize].suffix_link = Some(to);
        }
    }

    /// One phase: make every suffix of `text[..=i]` present in the tree
    fn extend_phase(&mut self, i: usize) {
        let c = self.symbol_at(i);

        // Rule 1: every open leaf grows by one
        self.current_end = i + 1;
        self.remainder += 1;
        let mut last_created: Option<NodeId> = None;

        while self.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = i;
            }

            // The active point always spells the text just before position i
            debug_assert_eq!(self.active.edge + self.active.length, i);

            let edge_symbol = self.symbol_at(self.active.edge);
            let active_node = self.active.node;

            match self.nodes[active_node as usize].children.get(edge_symbol) {
                None => {
                    // Rule 2: new leaf straight off the active node
                    let leaf = self.add_node(Node::leaf(i, i + 1 - self.remainder));
                    self.nodes[active_node as usize]
                        .children
                        .set(edge_symbol, leaf);

                    self.link(last_created, active_node);
                    last_created = Some(active_node);
                }
                Some(next) => {
                    let len = self.edge_len(next);
                    if self.active.length >= len {
                        // Walk down: the active point lies past this edge
                        self.active.edge += len;
                        self.active.length -= len;
                        self.active.node = next;
                        continue;
                    }

                    let next_start = self.nodes[next as usize].start;
                    if self.symbol_at(next_start + self.active.length) == c {
                        // Rule 3: already present, and so is every shorter suffix
                        self.active.length += 1;
                        self.link(last_created, active_node);
                        break;
                    }

                    // Rule 2: split the edge and hang a new leaf off the split
                    let split_at = next_start + self.active.length;
                    let split = self.add_node(Node::internal(next_start, split_at));
                    self.nodes[next as usize].start = split_at;
                    let leaf = self.add_node(Node::leaf(i, i + 1 - self.remainder));

                    self.nodes[active_node as usize]
                        .children
                        .set(edge_symbol, split);
                    let split_symbol = self.symbol_at(split_at);
                    let split_children = &mut self.nodes[split as usize].children;
                    split_children.set(split_symbol, next);
                    split_children.set(c, leaf);

                    self.link(last_created, split);
                    last_created = Some(split);
                }
            }

            self.remainder -= 1;

            if self.active.node != ROOT {
                let Some(link) = self.nodes[self.active.node as usize].suffix_link else {
                    unreachable!("internal node {} has no suffix link", self.active.node);
                };
                self.active.node = link;
            } else if self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = i + 1 - self.remainder;
            }
        }

        trace!(
            pos = i,
            remainder = self.remainder,
            nodes = self.nodes.len(),
            "phase done"
        );
    }
}

impl SuffixTree {
    /// Build the suffix tree of `text` in one go
    pub fn build(text: &[u8]) -> Self {
        let mut builder = SuffixTreeBuilder::with_capacity(text.len());
        builder.extend(text);
        builder.finish()
    }
}
