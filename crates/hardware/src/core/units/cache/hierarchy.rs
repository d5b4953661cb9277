//! Cache hierarchy protocols.
//!
//! Composes one or two cache levels and implements the read/write protocols
//! the executor drives memory traffic through:
//! 1. **Single level:** hit/miss refill on loads, write-through on stores.
//! 2. **Dual level:** L1 fronting L2 with independent geometries; every
//!    refill window is computed per level from main memory.
//! 3. **Logging:** every access appends records in a fixed order — loads log
//!    each level touched (L1 first), stores always log `L1 SW` then `L2 SW`.
//!
//! Write-through keeps main memory identical to every resident block between
//! accesses, which is what lets cross-level refills (the dual-level store
//! branches) be materialized from main memory even when the two levels'
//! block windows differ in size.

use super::CacheLevel;
use crate::common::access::{AccessKind, AccessRecord, CacheLabel};
use crate::config::CacheSpec;
use crate::mem::MemoryImage;

/// One- or two-level data cache with strict LRU replacement.
///
/// Both levels are owned mutably, so secondary-level recency updates and
/// installs during dual-level accesses persist in the real cache state.
pub struct CacheHierarchy {
    l1: CacheLevel,
    l2: Option<CacheLevel>,
}

impl CacheHierarchy {
    /// Builds the hierarchy described by a parsed cache spec.
    pub fn new(spec: &CacheSpec) -> Self {
        Self {
            l1: CacheLevel::new(CacheLabel::L1, &spec.l1),
            l2: spec
                .l2
                .as_ref()
                .map(|cfg| CacheLevel::new(CacheLabel::L2, cfg)),
        }
    }

    /// The configured levels in order, for the startup banner.
    pub fn levels(&self) -> impl Iterator<Item = &CacheLevel> {
        std::iter::once(&self.l1).chain(self.l2.as_ref())
    }

    /// Reads the cell at `addr` through the hierarchy.
    ///
    /// Appends one record per level touched to `log` and refills missing
    /// levels from `mem`.
    pub fn read(
        &mut self,
        mem: &MemoryImage,
        addr: u16,
        pc: u16,
        log: &mut Vec<AccessRecord>,
    ) -> u16 {
        match self.l2.as_mut() {
            None => Self::read_single(&mut self.l1, mem, addr, pc, log),
            Some(l2) => Self::read_dual(&mut self.l1, l2, mem, addr, pc, log),
        }
    }

    /// Writes `val` to `addr` through the hierarchy and through to `mem`.
    ///
    /// Appends one SW record per configured level to `log`, L1 first.
    pub fn write(
        &mut self,
        mem: &mut MemoryImage,
        addr: u16,
        val: u16,
        pc: u16,
        log: &mut Vec<AccessRecord>,
    ) {
        match self.l2.as_mut() {
            None => Self::write_single(&mut self.l1, mem, addr, val, pc, log),
            Some(l2) => Self::write_dual(&mut self.l1, l2, mem, addr, val, pc, log),
        }
    }

    /// Single-level load: touch on hit, victim-and-install on miss.
    fn read_single(
        level: &mut CacheLevel,
        mem: &MemoryImage,
        addr: u16,
        pc: u16,
        log: &mut Vec<AccessRecord>,
    ) -> u16 {
        let label = level.label();
        let parts = level.parts(addr);
        match level.row_mut(&parts).lookup(parts.tag) {
            Some(slot) => {
                log.push(record(label, AccessKind::Hit, pc, addr, parts.row));
                let row = level.row_mut(&parts);
                row.touch(slot);
                row.read(slot, parts.offset)
            }
            None => {
                log.push(record(label, AccessKind::Miss, pc, addr, parts.row));
                let block = level.refill_block(mem, &parts);
                let row = level.row_mut(&parts);
                let slot = row.victim();
                row.install(slot, parts.tag, block);
                row.read(slot, parts.offset)
            }
        }
    }

    /// Single-level store: update the resident block (refilling on miss),
    /// then write through to main memory. Always logged as SW.
    fn write_single(
        level: &mut CacheLevel,
        mem: &mut MemoryImage,
        addr: u16,
        val: u16,
        pc: u16,
        log: &mut Vec<AccessRecord>,
    ) {
        let label = level.label();
        let parts = level.parts(addr);
        match level.row_mut(&parts).lookup(parts.tag) {
            Some(slot) => {
                let row = level.row_mut(&parts);
                row.write_cell(slot, parts.offset, val);
                row.touch(slot);
            }
            None => {
                let block = level.refill_block(mem, &parts);
                let row = level.row_mut(&parts);
                let slot = row.victim();
                row.install(slot, parts.tag, block);
                row.write_cell(slot, parts.offset, val);
            }
        }
        mem.store(addr, val);
        log.push(record(label, AccessKind::Store, pc, addr, parts.row));
    }

    /// Dual-level load.
    ///
    /// L1 hit leaves L2 untouched. On an L1 miss the L1 refill window always
    /// comes from main memory, not from the L2 block — the levels' block
    /// boundaries may differ. Records are fixed-order: L1 first, then L2 if
    /// it was consulted.
    fn read_dual(
        l1: &mut CacheLevel,
        l2: &mut CacheLevel,
        mem: &MemoryImage,
        addr: u16,
        pc: u16,
        log: &mut Vec<AccessRecord>,
    ) -> u16 {
        let p1 = l1.parts(addr);
        if let Some(slot) = l1.row_mut(&p1).lookup(p1.tag) {
            log.push(record(CacheLabel::L1, AccessKind::Hit, pc, addr, p1.row));
            let row = l1.row_mut(&p1);
            row.touch(slot);
            return row.read(slot, p1.offset);
        }

        let p2 = l2.parts(addr);
        match l2.row_mut(&p2).lookup(p2.tag) {
            Some(l2_slot) => {
                log.push(record(CacheLabel::L1, AccessKind::Miss, pc, addr, p1.row));
                log.push(record(CacheLabel::L2, AccessKind::Hit, pc, addr, p2.row));
                l2.row_mut(&p2).touch(l2_slot);
                let block = l1.refill_block(mem, &p1);
                let row = l1.row_mut(&p1);
                let slot = row.victim();
                row.install(slot, p1.tag, block);
                row.read(slot, p1.offset)
            }
            None => {
                log.push(record(CacheLabel::L1, AccessKind::Miss, pc, addr, p1.row));
                log.push(record(CacheLabel::L2, AccessKind::Miss, pc, addr, p2.row));
                let l2_block = l2.refill_block(mem, &p2);
                let l2_row = l2.row_mut(&p2);
                let l2_slot = l2_row.victim();
                l2_row.install(l2_slot, p2.tag, l2_block);

                let block = l1.refill_block(mem, &p1);
                let row = l1.row_mut(&p1);
                let slot = row.victim();
                row.install(slot, p1.tag, block);
                row.read(slot, p1.offset)
            }
        }
    }

    /// Dual-level store.
    ///
    /// All four hit/miss combinations end with the value resident in both
    /// levels and written through to main memory, and always emit exactly
    /// two records, `L1 SW` then `L2 SW`.
    fn write_dual(
        l1: &mut CacheLevel,
        l2: &mut CacheLevel,
        mem: &mut MemoryImage,
        addr: u16,
        val: u16,
        pc: u16,
        log: &mut Vec<AccessRecord>,
    ) {
        let p1 = l1.parts(addr);
        let p2 = l2.parts(addr);
        let l1_hit = l1.row_mut(&p1).lookup(p1.tag);
        let l2_hit = l2.row_mut(&p2).lookup(p2.tag);

        match (l1_hit, l2_hit) {
            (Some(s1), Some(s2)) => {
                let row1 = l1.row_mut(&p1);
                row1.write_cell(s1, p1.offset, val);
                row1.touch(s1);
                let row2 = l2.row_mut(&p2);
                row2.write_cell(s2, p2.offset, val);
                row2.touch(s2);
            }
            (None, Some(s2)) => {
                // L1 refills its own window from memory (block boundaries
                // may differ from L2's), then both slots take the value.
                let block = l1.refill_block(mem, &p1);
                let row2 = l2.row_mut(&p2);
                row2.touch(s2);
                row2.write_cell(s2, p2.offset, val);
                let row1 = l1.row_mut(&p1);
                let s1 = row1.victim();
                row1.install(s1, p1.tag, block);
                row1.write_cell(s1, p1.offset, val);
            }
            (Some(s1), None) => {
                // L1 is written first; the copy-up refill carries the
                // post-write data into L2, materialized as L2's own window
                // (write-through keeps memory equal to every resident block,
                // so the window plus the new value is exactly the post-write
                // block contents).
                let row1 = l1.row_mut(&p1);
                row1.write_cell(s1, p1.offset, val);
                row1.touch(s1);
                let mut block = l2.refill_block(mem, &p2);
                block[p2.offset] = val;
                let row2 = l2.row_mut(&p2);
                let s2 = row2.victim();
                row2.install(s2, p2.tag, block);
            }
            (None, None) => {
                let l2_block = l2.refill_block(mem, &p2);
                let row2 = l2.row_mut(&p2);
                let s2 = row2.victim();
                row2.install(s2, p2.tag, l2_block);
                row2.write_cell(s2, p2.offset, val);

                let l1_block = l1.refill_block(mem, &p1);
                let row1 = l1.row_mut(&p1);
                let s1 = row1.victim();
                row1.install(s1, p1.tag, l1_block);
                row1.write_cell(s1, p1.offset, val);
            }
        }

        mem.store(addr, val);
        log.push(record(CacheLabel::L1, AccessKind::Store, pc, addr, p1.row));
        log.push(record(CacheLabel::L2, AccessKind::Store, pc, addr, p2.row));
    }
}

/// Builds one access record.
fn record(cache: CacheLabel, kind: AccessKind, pc: u16, addr: u16, row: usize) -> AccessRecord {
    AccessRecord {
        cache,
        kind,
        pc,
        addr,
        row,
    }
}
