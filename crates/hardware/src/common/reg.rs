//! Architectural Register File.
//!
//! This module implements the machine's register file. It performs the following:
//! 1. **Storage:** Maintains the 16-bit general-purpose registers (`$0`-`$7`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Observability:** Exposes the raw values for state dumps and tests.

/// General-purpose register file.
///
/// Register `$0` is hardwired to zero: reads always return 0 and writes to it
/// are discarded, so the zero invariant holds after every cycle no matter
/// which register an instruction names as its destination.
pub struct RegisterFile {
    regs: Vec<u16>,
}

impl RegisterFile {
    /// Creates a register file of `count` registers, all initialized to zero.
    pub fn new(count: usize) -> Self {
        Self {
            regs: vec![0; count],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Register 0 always returns 0.
    pub fn read(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Writes to register 0 are discarded.
    /// * `val` - The 16-bit value to write.
    pub fn write(&mut self, idx: usize, val: u16) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Number of registers in the file.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns `true` if the file holds no registers.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// All register values in index order, for state dumps.
    pub fn values(&self) -> &[u16] {
        &self.regs
    }
}
