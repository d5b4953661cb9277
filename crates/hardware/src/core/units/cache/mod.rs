//! Set-Associative Cache Level.
//!
//! This module implements one level of the data cache. A level is a
//! collection of rows sized from (total size, associativity, blocksize),
//! with strict LRU replacement inside each row. It exposes the geometry
//! arithmetic and refill plumbing the hierarchy protocols are built on.

/// Cache hierarchy protocols over one or two levels.
pub mod hierarchy;

/// Least-recently-used recency order over a row's slots.
pub mod lru;

/// Row (set) of slots with a recency order.
pub mod row;

pub use hierarchy::CacheHierarchy;
pub use lru::LruOrder;
pub use row::Row;

use std::fmt;

use crate::common::access::CacheLabel;
use crate::common::addr::AddrParts;
use crate::config::CacheLevelConfig;
use crate::mem::MemoryImage;

/// One set-associative cache level.
///
/// The row count is derived from the configuration as
/// `total_size / (associativity * blocksize)`; the configuration guarantees
/// the division is exact.
pub struct CacheLevel {
    label: CacheLabel,
    total_size: usize,
    associativity: usize,
    blocksize: usize,
    rows: Vec<Row>,
}

impl CacheLevel {
    /// Creates a level from its configuration, with all slots invalid.
    pub fn new(label: CacheLabel, config: &CacheLevelConfig) -> Self {
        let row_count = config.row_count();
        tracing::debug!(
            %label,
            total_size = config.total_size,
            associativity = config.associativity,
            blocksize = config.blocksize,
            rows = row_count,
            "cache level constructed"
        );
        Self {
            label,
            total_size: config.total_size,
            associativity: config.associativity,
            blocksize: config.blocksize,
            rows: (0..row_count)
                .map(|_| Row::new(config.associativity, config.blocksize))
                .collect(),
        }
    }

    /// This level's label (L1 or L2).
    pub fn label(&self) -> CacheLabel {
        self.label
    }

    /// Cells per block.
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    /// Number of rows in the level.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Decomposes `addr` against this level's geometry.
    pub fn parts(&self, addr: u16) -> AddrParts {
        AddrParts::decompose(addr, self.blocksize, self.rows.len())
    }

    /// Mutable access to the row a decomposed address maps to.
    fn row_mut(&mut self, parts: &AddrParts) -> &mut Row {
        &mut self.rows[parts.row]
    }

    /// Copies this level's block window for `parts` out of main memory.
    ///
    /// Each level computes its window from its own geometry; block
    /// boundaries of two levels need not coincide.
    fn refill_block(&self, mem: &MemoryImage, parts: &AddrParts) -> Vec<u16> {
        mem.read_block(parts.block_id * self.blocksize, self.blocksize)
    }
}

impl fmt::Display for CacheLevel {
    /// Renders the startup configuration line, e.g.
    /// `Cache L1 has size 64, associativity 2, blocksize 4, rows 8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cache {} has size {}, associativity {}, blocksize {}, rows {}",
            self.label,
            self.total_size,
            self.associativity,
            self.blocksize,
            self.rows.len()
        )
    }
}
