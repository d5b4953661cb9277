//! Cache row (set) implementation.
//!
//! A row is a fixed-capacity group of slots that all blocks with the same
//! row index compete for, plus the recency order that decides evictions.
//! At most one valid slot in a row holds any given tag; the valid slots are
//! exactly the most-recently-touched distinct blocks mapped to the row.

use super::lru::LruOrder;

/// One slot of a row: a resident block and its identity.
#[derive(Clone)]
struct Slot {
    valid: bool,
    tag: usize,
    block: Vec<u16>,
}

/// A fixed-capacity set of slots with a strict recency order.
pub struct Row {
    slots: Vec<Slot>,
    order: LruOrder,
}

impl Row {
    /// Creates a row of `associativity` invalid slots holding zeroed
    /// `blocksize`-cell blocks.
    pub fn new(associativity: usize, blocksize: usize) -> Self {
        Self {
            slots: vec![
                Slot {
                    valid: false,
                    tag: 0,
                    block: vec![0; blocksize],
                };
                associativity
            ],
            order: LruOrder::new(associativity),
        }
    }

    /// Finds the valid slot holding `tag`, if any.
    ///
    /// Linear scan over the slots; associativity is small by construction.
    pub fn lookup(&self, tag: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.valid && s.tag == tag)
    }

    /// Marks `slot` as the most-recently-used entry of the row.
    pub fn touch(&mut self, slot: usize) {
        self.order.touch(slot);
    }

    /// Selects the least-recently-used slot for replacement and promotes it
    /// to most recent. The caller installs into the returned slot.
    pub fn victim(&mut self) -> usize {
        self.order.victim()
    }

    /// Overwrites `slot` with `tag` and `block`, marking it valid.
    ///
    /// The recency order is untouched: `victim` already promoted the slot,
    /// and a reused hit slot is touched by the caller per the protocol.
    pub fn install(&mut self, slot: usize, tag: usize, block: Vec<u16>) {
        let s = &mut self.slots[slot];
        s.valid = true;
        s.tag = tag;
        s.block = block;
    }

    /// Reads the cell at `offset` within `slot`'s block.
    pub fn read(&self, slot: usize, offset: usize) -> u16 {
        self.slots[slot].block[offset]
    }

    /// Writes `val` into the cell at `offset` within `slot`'s block without
    /// altering tag, validity, or recency.
    pub fn write_cell(&mut self, slot: usize, offset: usize, val: u16) {
        self.slots[slot].block[offset] = val;
    }

    /// The full block contents of `slot`.
    pub fn block(&self, slot: usize) -> &[u16] {
        &self.slots[slot].block
    }

    /// Number of slots in the row.
    pub fn ways(&self) -> usize {
        self.slots.len()
    }
}
