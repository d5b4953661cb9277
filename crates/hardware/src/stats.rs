//! Simulation Statistics.
//!
//! Counters accumulated over a run: cycle and data-access totals, plus
//! per-level hit/miss/store tallies when a cache is configured. They feed
//! the structured log output at the end of a run; the user-facing access
//! log is produced separately, record by record.

use crate::common::access::{AccessKind, AccessRecord, CacheLabel};

/// Counters for one cache level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    /// Loads satisfied by the level.
    pub hits: u64,
    /// Loads the level had to refill.
    pub misses: u64,
    /// Stores written through the level.
    pub stores: u64,
}

impl LevelStats {
    /// Hit rate over the loads that reached this level, or zero when none
    /// have.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Whole-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimStats {
    /// Instructions executed.
    pub cycles: u64,
    /// Data loads issued.
    pub loads: u64,
    /// Data stores issued.
    pub stores: u64,
    /// First-level cache counters.
    pub l1: LevelStats,
    /// Second-level cache counters.
    pub l2: LevelStats,
}

impl SimStats {
    /// Folds one cache access record into the per-level counters.
    pub fn record_access(&mut self, record: &AccessRecord) {
        let level = match record.cache {
            CacheLabel::L1 => &mut self.l1,
            CacheLabel::L2 => &mut self.l2,
        };
        match record.kind {
            AccessKind::Hit => level.hits += 1,
            AccessKind::Miss => level.misses += 1,
            AccessKind::Store => level.stores += 1,
        }
    }
}
