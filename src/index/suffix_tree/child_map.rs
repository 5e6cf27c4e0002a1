//! Per-node child table
//!
//! A small open-addressing map from edge symbol to child node. Most nodes
//! branch on a handful of symbols, so the table starts tiny and grows by a
//! fixed step instead of doubling. The number of keys is bounded by the
//! alphabet, which also bounds every probe sequence. Leaves never get
//! children, so no slots are allocated until the first insert.

use super::types::{ALPHABET_SIZE, NodeId, Symbol};

/// Starting number of slots
pub const INITIAL_CAPACITY: usize = 10;

/// Slots added on every growth
pub const GROWTH_STEP: usize = 10;

type Slot = Option<(Symbol, NodeId)>;

#[derive(Debug, Clone)]
pub struct ChildMap {
    slots: Vec<Slot>,
    len: usize,
}

impl Default for ChildMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildMap {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert or replace the child for `key`, returning the replaced child
    pub fn set(&mut self, key: Symbol, child: NodeId) -> Option<NodeId> {
        debug_assert!((key as usize) < ALPHABET_SIZE);

        if self.slots.is_empty() {
            self.slots = vec![None; INITIAL_CAPACITY];
        } else if self.len * 4 >= self.capacity() * 3 && self.capacity() < ALPHABET_SIZE {
            self.grow();
        }

        let slot = self.probe(key);
        match self.slots[slot].replace((key, child)) {
            Some((_, previous)) => Some(previous),
            None => {
                self.len += 1;
                None
            }
        }
    }

    /// Look up the child whose edge label starts with `key`
    pub fn get(&self, key: Symbol) -> Option<NodeId> {
        let cap = self.capacity();
        if cap == 0 {
            return None;
        }
        let mut slot = key as usize % cap;

        for _ in 0..cap {
            match self.slots[slot] {
                Some((k, child)) if k == key => return Some(child),
                Some(_) => slot = (slot + 1) % cap,
                None => return None,
            }
        }

        None
    }

    /// Iterate over `(symbol, child)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, NodeId)> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Iterate over children only
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().map(|(_, child)| child)
    }

    /// First slot holding `key`, or the empty slot where it belongs.
    ///
    /// The table always keeps a free slot for a key it does not hold yet:
    /// either the load factor is below 75%, or the capacity already covers
    /// the whole alphabet.
    fn probe(&self, key: Symbol) -> usize {
        let cap = self.capacity();
        let mut slot = key as usize % cap;

        loop {
            match self.slots[slot] {
                Some((k, _)) if k != key => slot = (slot + 1) % cap,
                _ => return slot,
            }
        }
    }

    fn grow(&mut self) {
        let new_cap = (self.capacity() + GROWTH_STEP).min(ALPHABET_SIZE);
        let old = std::mem::replace(&mut self.slots, vec![None; new_cap]);

        for (key, child) in old.into_iter().flatten() {
            let slot = self.probe(key);
            self.slots[slot] = Some((key, child));
        }
    }
}
