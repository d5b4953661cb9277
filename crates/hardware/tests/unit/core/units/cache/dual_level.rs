//! Dual-Level Cache Tests.
//!
//! Verifies the two-level protocols: record ordering (L1 before L2), the
//! inclusion-by-refill behavior of loads, persistent L2 state across L1
//! evictions, per-level geometry, and stores — every residency combination,
//! always emitting exactly one SW per level. Addresses past the 7-bit
//! immediate range are built up in a base register first.

use sim16_core::common::{AccessKind, AccessRecord, CacheLabel};

use crate::common::encode;
use crate::common::harness::{machine_with_cache, run_collect};

fn kinds(log: &[AccessRecord]) -> Vec<(CacheLabel, AccessKind)> {
    log.iter().map(|r| (r.cache, r.kind)).collect()
}

/// A cold load misses both levels and logs L1 first; a reload hits L1
/// alone.
#[test]
fn cold_load_misses_both_levels() {
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 50),
            encode::add(1, 1, 1), // $1 = 100
            encode::lw(2, 0, 1),
            encode::lw(3, 0, 1),
            encode::j(4),
        ],
        "16,1,2,64,4,4",
    );
    let log = run_collect(&mut m);
    assert_eq!(
        kinds(&log),
        vec![
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Hit),
        ]
    );
}

/// An L1 hit never consults L2.
#[test]
fn l1_hit_shields_l2() {
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 50),
            encode::add(1, 1, 1), // $1 = 100
            encode::lw(2, 0, 1),
            encode::lw(3, 0, 1),
            encode::lw(4, 0, 1),
            encode::j(5),
        ],
        "16,1,2,64,4,4",
    );
    let log = run_collect(&mut m);
    let l2_touches = log.iter().filter(|r| r.cache == CacheLabel::L2).count();
    assert_eq!(l2_touches, 1);
}

/// After an L1 eviction the block is still resident in the larger L2, so
/// the return access is an L1 miss but an L2 hit.
#[test]
fn l2_survives_l1_eviction() {
    // L1: 2,1,1 → 2 rows, direct mapped, blocksize 1. Addresses 0 and 2
    // both map to L1 row 0 and evict each other.
    // L2: 16,4,1 → 4 rows, 4-way. Both fit without conflict.
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 2),
            encode::lw(2, 0, 0), // addr 0: L1 MISS, L2 MISS
            encode::lw(2, 0, 1), // addr 2: L1 MISS (evicts 0), L2 MISS
            encode::lw(2, 0, 0), // addr 0: L1 MISS, L2 HIT
            encode::j(4),
        ],
        "2,1,1,16,4,1",
    );
    let log = run_collect(&mut m);
    assert_eq!(
        kinds(&log),
        vec![
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Hit),
        ]
    );
}

/// Row fields are computed against each level's own geometry.
#[test]
fn rows_follow_per_level_geometry() {
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 50),
            encode::add(1, 1, 1), // $1 = 100
            encode::lw(2, 0, 1),
            encode::j(3),
        ],
        "16,1,2,64,4,4",
    );
    let log = run_collect(&mut m);
    // L1: blocksize 2, 8 rows → block 50, row 2.
    // L2: blocksize 4, 4 rows → block 25, row 1.
    assert_eq!(log[0].row, 2);
    assert_eq!(log[1].row, 1);
}

/// Stores log exactly one SW per level, L1 first, in every residency
/// combination.
#[test]
fn stores_log_one_sw_per_level() {
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 7),
            encode::addi(2, 0, 50),
            encode::add(2, 2, 2), // $2 = 100
            encode::sw(1, 0, 2), // both cold
            encode::sw(1, 0, 2), // both resident
            encode::lw(3, 0, 2),
            encode::j(6),
        ],
        "16,1,2,64,4,4",
    );
    let log = run_collect(&mut m);
    assert_eq!(
        kinds(&log),
        vec![
            (CacheLabel::L1, AccessKind::Store),
            (CacheLabel::L2, AccessKind::Store),
            (CacheLabel::L1, AccessKind::Store),
            (CacheLabel::L2, AccessKind::Store),
            (CacheLabel::L1, AccessKind::Hit),
        ]
    );
    assert_eq!(m.regs().read(3), 7);
    assert_eq!(m.mem().load(100), 7);
}

/// A store that hits both levels leaves both holding the new value;
/// reloads after an intervening L1 eviction see it via L2.
#[test]
fn store_propagates_to_both_levels() {
    // L1 direct-mapped 2 cells; addresses 0 and 2 collide in L1 row 0.
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 2),
            encode::addi(2, 0, 9),
            encode::lw(3, 0, 0), // addr 0 resident in L1 and L2
            encode::sw(2, 0, 0), // store hits both levels
            encode::lw(3, 0, 1), // addr 2 evicts 0 from L1
            encode::lw(4, 0, 0), // L1 miss, L2 hit; must see 9
            encode::j(6),
        ],
        "2,1,1,16,4,1",
    );
    let log = run_collect(&mut m);
    assert_eq!(m.regs().read(4), 9);
    let last = log.last().expect("final record");
    assert_eq!((last.cache, last.kind), (CacheLabel::L2, AccessKind::Hit));
}

/// A store that hits L1 while L2 has evicted the block copies the
/// post-write data back up: L2 installs its own block window with the
/// stored value applied, observable as an L2 hit on that window after the
/// store.
#[test]
fn store_copies_up_on_l2_miss() {
    // L1: 2,1,1 → 2 rows, blocksize 1. Addresses 1 and 4 do not collide.
    // L2: 4,1,2 → 2 rows, blocksize 2. Blocks 0 (cells 0-1) and 2
    // (cells 4-5) both map to L2 row 0, so the load of address 4 evicts
    // address 1's block from L2 while L1 retains it.
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 9),
            encode::lw(2, 1, 0), // addr 1: both miss
            encode::lw(2, 4, 0), // addr 4: both miss; L2 evicts block 0
            encode::sw(1, 1, 0), // L1 hit, L2 miss: copy-up
            encode::lw(3, 0, 0), // addr 0: L1 miss, L2 HIT on the
                                 // reinstalled block 0
            encode::lw(4, 1, 0), // addr 1: L1 hit with the stored value
            encode::j(6),
        ],
        "2,1,1,4,1,2",
    );
    let log = run_collect(&mut m);
    assert_eq!(
        kinds(&log),
        vec![
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Store),
            (CacheLabel::L2, AccessKind::Store),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Hit),
            (CacheLabel::L1, AccessKind::Hit),
        ]
    );
    assert_eq!(m.regs().read(4), 9);
    assert_eq!(m.mem().load(1), 9);
    // The neighbor cell of the copied-up block still holds the program
    // word.
    assert_eq!(m.regs().read(3), encode::addi(1, 0, 9));
}

/// A store that misses L1 while L2 still holds the block refills L1 with
/// its own window and writes the value into both levels' slots.
#[test]
fn store_refills_l1_on_l2_hit() {
    // L1: 2,1,1 — addresses 8 and 10 collide in row 0.
    // L2: 16,4,1 — rows 0 and 2; no conflict, so L2 keeps both.
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 9),
            encode::lw(2, 8, 0),  // addr 8: both miss
            encode::lw(2, 10, 0), // addr 10: L1 MISS (evicts 8), L2 MISS
            encode::sw(1, 8, 0),  // L1 miss, L2 hit: refill-and-write
            encode::lw(3, 8, 0),  // L1 HIT with the stored value
            encode::lw(4, 10, 0), // evict 8 from L1 again
            encode::lw(5, 8, 0),  // L1 MISS, L2 HIT; value survived
            encode::j(7),
        ],
        "2,1,1,16,4,1",
    );
    let log = run_collect(&mut m);
    assert_eq!(
        kinds(&log),
        vec![
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Miss),
            (CacheLabel::L1, AccessKind::Store),
            (CacheLabel::L2, AccessKind::Store),
            (CacheLabel::L1, AccessKind::Hit),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Hit),
            (CacheLabel::L1, AccessKind::Miss),
            (CacheLabel::L2, AccessKind::Hit),
        ]
    );
    assert_eq!(m.regs().read(3), 9);
    assert_eq!(m.regs().read(5), 9);
    assert_eq!(m.mem().load(8), 9);
}

/// Mismatched blocksizes between the levels keep data coherent: an L1
/// refill from a store-updated region reads the written value.
#[test]
fn mismatched_blocksizes_stay_coherent() {
    // L1 blocksize 4, L2 blocksize 2.
    let mut m = machine_with_cache(
        &[
            encode::addi(1, 0, 33),
            encode::addi(2, 0, 50),
            encode::add(2, 2, 2), // $2 = 100
            encode::sw(1, 1, 2), // 101: cold store, both levels
            encode::lw(3, 0, 2), // 100: L1 hit (installed block covers 100-103)
            encode::lw(4, 2, 2), // 102
            encode::j(6),
        ],
        "16,1,4,16,2,2",
    );
    let log = run_collect(&mut m);
    assert_eq!(m.regs().read(3), 0);
    assert_eq!(m.regs().read(4), 0);
    assert_eq!(log[2].kind, AccessKind::Hit);
    assert_eq!(log[3].kind, AccessKind::Hit);
    assert_eq!(m.mem().load(101), 33);
}
