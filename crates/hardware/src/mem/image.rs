//! Memory Image Implementation.
//!
//! This module provides the flat backing store for the simulated machine. It
//! offers single-cell loads and stores plus the block-window reads cache
//! refills use. Addresses wrap modulo the cell count, so the 13-bit address
//! mask of the machine and out-of-range cache-mode addresses both resolve to
//! a valid cell instead of faulting.

/// Flat, word-addressed main memory.
///
/// An ordered sequence of 16-bit cells, created once at startup, mutated only
/// by executor-driven stores and loader writes, and read by cache refills and
/// direct access. The cell count is fixed at construction; keep it a power of
/// two so wrapping coincides with the machine's address mask.
#[derive(Debug)]
pub struct MemoryImage {
    cells: Vec<u16>,
}

impl MemoryImage {
    /// Creates a zero-filled memory image of `words` cells.
    pub fn new(words: usize) -> Self {
        Self {
            cells: vec![0; words],
        }
    }

    /// Number of cells in the image.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the image holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Loads the cell at `addr`, wrapping modulo the cell count.
    pub fn load(&self, addr: u16) -> u16 {
        self.cells[addr as usize % self.cells.len()]
    }

    /// Stores `val` at `addr`, wrapping modulo the cell count.
    pub fn store(&mut self, addr: u16, val: u16) {
        let len = self.cells.len();
        self.cells[addr as usize % len] = val;
    }

    /// Copies the `len`-cell window starting at flat index `start`.
    ///
    /// Used for cache refills; each index wraps modulo the cell count, so a
    /// window computed from an out-of-range address reads the aliased cells.
    pub fn read_block(&self, start: usize, len: usize) -> Vec<u16> {
        (start..start + len)
            .map(|i| self.cells[i % self.cells.len()])
            .collect()
    }

    /// All cells in address order, for state dumps.
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }
}
