//! Processor Model.
//!
//! The processor owns the architectural state and drives the simulation:
//! 1. **State:** eight 16-bit registers (register 0 hardwired to zero), a
//!    13-bit program counter, the memory image, and an optional data cache.
//! 2. **Execution:** a fetch/decode/execute loop that runs until the program
//!    jumps to its own address.
//! 3. **Reporting:** cache access records surfaced per cycle, and a
//!    final-state rendering of registers and the low memory cells.

/// The fetch/decode/execute step.
mod execution;

use std::fmt::Write as _;

use crate::common::access::AccessRecord;
use crate::common::constants::{ADDR_MASK, DUMP_WORDS, NUM_REGS};
use crate::common::reg::RegisterFile;
use crate::core::units::cache::CacheHierarchy;
use crate::mem::MemoryImage;
use crate::stats::SimStats;

/// The simulated machine.
pub struct Machine {
    regs: RegisterFile,
    pc: u16,
    halted: bool,
    mem: MemoryImage,
    cache: Option<CacheHierarchy>,
    stats: SimStats,
    events: Vec<AccessRecord>,
}

impl Machine {
    /// Builds a machine around a loaded memory image.
    ///
    /// With `cache` present, data accesses go through the cache hierarchy;
    /// without it, they go straight to memory.
    pub fn new(mem: MemoryImage, cache: Option<CacheHierarchy>) -> Self {
        Self {
            regs: RegisterFile::new(NUM_REGS),
            pc: 0,
            halted: false,
            mem,
            cache,
            stats: SimStats::default(),
            events: Vec::new(),
        }
    }

    /// Current program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Whether the machine has reached its halt condition.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Register file contents.
    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// The memory image.
    pub fn mem(&self) -> &MemoryImage {
        &self.mem
    }

    /// The cache hierarchy, if one is configured.
    pub fn cache(&self) -> Option<&CacheHierarchy> {
        self.cache.as_ref()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Runs until the halt condition, calling `on_event` for each cache
    /// access record in program order.
    pub fn run(&mut self, mut on_event: impl FnMut(&AccessRecord)) {
        while !self.halted {
            self.step();
            for event in &self.events {
                on_event(event);
            }
        }
        tracing::info!(
            cycles = self.stats.cycles,
            loads = self.stats.loads,
            stores = self.stats.stores,
            "simulation finished"
        );
    }

    /// Cache access records from the most recent step.
    pub fn events(&self) -> &[AccessRecord] {
        &self.events
    }

    /// Renders the final machine state: program counter, all registers in
    /// decimal, and the low memory cells in hex, eight per line.
    pub fn render_state(&self) -> String {
        let mut out = String::new();
        out.push_str("Final state:\n");
        let _ = writeln!(out, "\tpc={:>5}", self.pc & ADDR_MASK);
        for (i, val) in self.regs.values().iter().enumerate() {
            let _ = writeln!(out, "\t${i}={val:>5}");
        }
        for (i, cell) in self.mem.cells().iter().take(DUMP_WORDS).enumerate() {
            let _ = write!(out, "{cell:04x} ");
            if i % 8 == 7 {
                out.push('\n');
            }
        }
        out
    }
}
