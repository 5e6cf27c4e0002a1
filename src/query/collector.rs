//! Occurrence collection
//!
//! Every leaf below a locus is one occurrence. Leaves come out of the
//! traversal in child-table order, so they are put in ascending order with a
//! counting sort over their (dense) id range.

use crate::index::suffix_tree::{LeafId, NodeId, SuffixTree};

/// Depth-first leaf enumeration with a reusable stack
pub struct LeafCollector<'t> {
    tree: &'t SuffixTree,
    stack: Vec<NodeId>,
}

impl<'t> LeafCollector<'t> {
    pub fn new(tree: &'t SuffixTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
        }
    }

    /// Leaf ids under `locus`, unordered
    pub fn collect(&mut self, locus: NodeId) -> Vec<LeafId> {
        let mut ids = Vec::new();
        self.collect_into(locus, &mut ids);
        ids
    }

    /// Append the leaf ids under `locus` to `out`.
    ///
    /// The empty-suffix leaf (id equal to the text length) is skipped; it
    /// only exists to terminate the tree.
    pub fn collect_into(&mut self, locus: NodeId, out: &mut Vec<LeafId>) {
        let text_len = self.tree.len();
        self.stack.clear();
        self.stack.push(locus);

        while let Some(id) = self.stack.pop() {
            let node = self.tree.node(id);
            match node.leaf_id {
                Some(leaf_id) if leaf_id < text_len => out.push(leaf_id),
                Some(_) => {}
                None => self.stack.extend(node.children.nodes()),
            }
        }
    }
}

/// Sort ids in place by counting over `min..=max`
pub fn counting_sort(ids: &mut [usize]) {
    let (Some(&min), Some(&max)) = (ids.iter().min(), ids.iter().max()) else {
        return;
    };

    let mut counts = vec![0u32; max - min + 1];
    for &id in ids.iter() {
        counts[id - min] += 1;
    }

    let mut slot = 0;
    for (offset, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            ids[slot] = min + offset;
            slot += 1;
        }
    }
}
