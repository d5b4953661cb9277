//! Address decomposition against a cache geometry.
//!
//! Splits a flat word address into the (tag, row, offset) triple a
//! set-associative cache level uses to locate a cell. The decomposition is a
//! pure function of the level's blocksize and row count, so two levels with
//! different geometries decompose the same address differently.

/// An address decomposed against one cache level's geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrParts {
    /// Block identifier: `addr / blocksize`. The block's window in main
    /// memory starts at `block_id * blocksize`.
    pub block_id: usize,
    /// Tag stored alongside the block: `block_id / row_count`.
    pub tag: usize,
    /// Row (set) index the block maps to: `block_id % row_count`.
    pub row: usize,
    /// Cell offset within the block: `addr % blocksize`.
    pub offset: usize,
}

impl AddrParts {
    /// Decomposes `addr` against a geometry of `blocksize`-cell blocks and
    /// `row_count` rows.
    ///
    /// # Arguments
    ///
    /// * `addr` - Flat word address. Used in full; callers mask at the
    ///   memory-image boundary, not here.
    /// * `blocksize` - Cells per block; must be nonzero.
    /// * `row_count` - Rows in the level; must be nonzero.
    pub fn decompose(addr: u16, blocksize: usize, row_count: usize) -> Self {
        let addr = addr as usize;
        let block_id = addr / blocksize;
        Self {
            block_id,
            tag: block_id / row_count,
            row: block_id % row_count,
            offset: addr % blocksize,
        }
    }
}
