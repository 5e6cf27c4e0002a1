//! Finished suffix tree
//!
//! Immutable once built: queries only read the arena, so a `&SuffixTree`
//! can be shared freely.

use super::types::*;
use std::io::{self, Write};
use std::ops::Range;

pub struct SuffixTree {
    text: Vec<u8>,
    nodes: Vec<Node>,
    /// Final value of the builder's shared end: one past the end marker,
    /// or 0 for an empty text
    current_end: usize,
}

impl SuffixTree {
    pub(super) fn from_parts(text: Vec<u8>, nodes: Vec<Node>, current_end: usize) -> Self {
        debug_assert!(current_end == text.len() + 1 || text.is_empty());
        Self {
            text,
            nodes,
            current_end,
        }
    }

    /// The indexed text
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Length of the indexed text in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Child of `id` whose edge starts with `symbol`
    #[inline]
    pub fn child(&self, id: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.nodes[id as usize].children.get(symbol)
    }

    /// Offsets of the incoming edge label of `id`. A leaf edge reaches one
    /// past the text, covering the end marker.
    #[inline]
    pub fn edge_range(&self, id: NodeId) -> Range<usize> {
        let node = &self.nodes[id as usize];
        node.start..node.end(self.current_end)
    }

    /// Bytes of the incoming edge label of `id`, end marker excluded
    #[inline]
    pub fn edge_bytes(&self, id: NodeId) -> &[u8] {
        let range = self.edge_range(id);
        &self.text[range.start.min(self.text.len())..range.end.min(self.text.len())]
    }

    /// Search for a pattern; see [`crate::query::query`]
    pub fn search(&self, pattern: &[u8]) -> Vec<usize> {
        crate::query::query(self, pattern)
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[u8]) -> usize {
        crate::query::count(self, pattern)
    }

    /// Check if pattern occurs in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        crate::query::Matcher::new(self).locate(pattern).is_some()
    }

    /// Get statistics about this tree
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            text_len: self.text.len(),
            node_count: self.nodes.len(),
            ..Default::default()
        };

        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id as usize];
            stats.max_depth = stats.max_depth.max(depth);

            if let Some(leaf_id) = node.leaf_id {
                if leaf_id < self.text.len() {
                    stats.leaf_count += 1;
                }
            } else if id != ROOT {
                stats.internal_count += 1;
            }

            stack.extend(node.children.nodes().map(|child| (child, depth + 1)));
        }

        stats
    }

    /// Write an indented listing of every edge.
    ///
    /// Children are listed in symbol order, newlines print as `$` and leaves
    /// carry their suffix start in brackets. The empty-suffix leaf is left out.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "ROOT")?;

        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id as usize];

            if id != ROOT {
                write!(out, "{}", "--".repeat(depth))?;
                for &byte in self.edge_bytes(id) {
                    match byte {
                        b'\n' => write!(out, "$")?,
                        b if b.is_ascii_graphic() || b == b' ' => write!(out, "{}", b as char)?,
                        b => write!(out, "\\x{:02x}", b)?,
                    }
                }
                if let Some(leaf_id) = node.leaf_id {
                    write!(out, " [{}]", leaf_id)?;
                }
                writeln!(out)?;
            }

            let mut children: Vec<(Symbol, NodeId)> = node
                .children
                .iter()
                .filter(|&(symbol, _)| symbol != END_MARKER)
                .collect();
            // Reverse order so the smallest symbol is popped first
            children.sort_unstable_by(|a, b| b.0.cmp(&a.0));
            stack.extend(children.into_iter().map(|(_, child)| (child, depth + 1)));
        }

        Ok(())
    }

    /// Full root-to-node label of every node, indexed by node id
    #[cfg(test)]
    pub(crate) fn path_labels(&self) -> Vec<Vec<u8>> {
        let mut labels = vec![Vec::new(); self.nodes.len()];
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            for child in self.nodes[id as usize].children.nodes() {
                let mut label = labels[id as usize].clone();
                label.extend_from_slice(self.edge_bytes(child));
                labels[child as usize] = label;
                stack.push(child);
            }
        }

        labels
    }
}
