//! Cache access records and their log format.
//!
//! During execution the simulator's only observable side effect is an
//! append-only stream of access records, one or two per memory access. This
//! module defines the record type and the fixed-width text rendering the CLI
//! prints for each record.

use std::fmt;

/// Identifies which cache level an access record refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheLabel {
    /// Primary (or only) cache level.
    L1,
    /// Secondary cache level, configured only in dual-level mode.
    L2,
}

impl fmt::Display for CacheLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheLabel::L1 => write!(f, "L1"),
            CacheLabel::L2 => write!(f, "L2"),
        }
    }
}

/// The kind of cache event a record describes.
///
/// Loads record `Hit` or `Miss` per level touched; stores always record
/// `Store`, never `Hit`/`Miss`, regardless of whether the block was resident.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// Load found the block resident in this level.
    Hit,
    /// Load had to refill this level from main memory.
    Miss,
    /// Store wrote through this level.
    Store,
}

impl AccessKind {
    /// Log-entry status text for this kind.
    fn label(self) -> &'static str {
        match self {
            AccessKind::Hit => "HIT",
            AccessKind::Miss => "MISS",
            AccessKind::Store => "SW",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the access log stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    /// Cache level the event occurred in.
    pub cache: CacheLabel,
    /// Kind of event (HIT, MISS, or SW).
    pub kind: AccessKind,
    /// Program counter of the memory-access instruction.
    pub pc: u16,
    /// Word address being accessed.
    pub addr: u16,
    /// Row (set) index the address maps to in this level.
    pub row: usize,
}

impl fmt::Display for AccessRecord {
    /// Renders the fixed-width log-entry format, e.g.
    /// `L1 MISS  pc:    3	addr:  100	row:   2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
            format!("{} {}", self.cache, self.kind),
            self.pc,
            self.addr,
            self.row
        )
    }
}
