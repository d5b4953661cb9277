//! Least Recently Used recency order.
//!
//! Each cache row keeps a strict recency ordering over its slot indices. The
//! order is an index vector rather than a linked list of owned nodes: rows
//! are narrow, so a linear shift is cheap and there is no allocation or
//! pointer ownership to manage.
//!
//! Index 0 of the vector is the most-recently-used slot; the last index is
//! the least-recently-used slot and the next eviction victim.

/// Recency order over the slot indices of one cache row.
pub struct LruOrder {
    /// Slot indices from most- to least-recently used.
    order: Vec<usize>,
}

impl LruOrder {
    /// Creates an order over `ways` slots.
    ///
    /// Initially slot 0 is most recent and slot `ways - 1` is the first
    /// victim, matching the fill order of an empty row.
    pub fn new(ways: usize) -> Self {
        Self {
            order: (0..ways).collect(),
        }
    }

    /// Marks `slot` as the most-recently-used entry.
    ///
    /// Called on every hit and immediately after every install.
    pub fn touch(&mut self, slot: usize) {
        if let Some(pos) = self.order.iter().position(|&s| s == slot) {
            let _ = self.order.remove(pos);
        }
        self.order.insert(0, slot);
    }

    /// Returns the least-recently-used slot and promotes it to most recent.
    ///
    /// The combined select-and-promote mirrors how a miss both evicts a slot
    /// and immediately reoccupies it with the incoming block.
    pub fn victim(&mut self) -> usize {
        let slot = self.order.pop().unwrap_or(0);
        self.order.insert(0, slot);
        slot
    }

    /// The current least-recently-used slot, without promoting it.
    pub fn peek_victim(&self) -> Option<usize> {
        self.order.last().copied()
    }
}
