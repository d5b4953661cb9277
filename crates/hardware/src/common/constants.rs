//! Global Machine Constants.
//!
//! This module defines the fixed parameters of the simulated machine. It includes:
//! 1. **Sizing Constants:** Memory, register file, and address-space dimensions.
//! 2. **Instruction Constants:** Field shifts and masks for instruction decoding.
//! 3. **Control-Flow Constants:** The branch-target modulus.
//!
//! Sizing constants are defaults handed to constructors (`MemoryImage::new`,
//! `RegisterFile::new`), not values the components reach for globally.

/// Number of 16-bit cells in main memory (2^13).
pub const MEM_WORDS: usize = 1 << 13;

/// Mask reducing an address or program counter to 13 bits.
pub const ADDR_MASK: u16 = 0x1FFF;

/// Number of architectural registers.
pub const NUM_REGS: usize = 8;

/// Register holding the return address written by `jal`.
pub const LINK_REG: usize = 7;

/// Modulus applied to `jeq` branch targets.
///
/// Fixed at 128 independent of the address-space size; inherited machine
/// behavior that must be reproduced exactly.
pub const BRANCH_TARGET_MODULUS: u16 = 128;

/// Number of memory cells included in the final-state dump.
pub const DUMP_WORDS: usize = 128;

/// Bit position shift for the opcode field (bits 15-13).
pub const OPCODE_SHIFT: u16 = 13;

/// Bit position shift for the first source register field (bits 12-10).
pub const REG_A_SHIFT: u16 = 10;

/// Bit position shift for the second source register field (bits 9-7).
pub const REG_B_SHIFT: u16 = 7;

/// Bit position shift for the destination register field (bits 6-4).
pub const REG_DST_SHIFT: u16 = 4;

/// Bit mask for a 3-bit register index after shifting.
pub const REG_MASK: u16 = 0x7;

/// Bit mask for the function code of register-format instructions (bits 3-0).
pub const FUNCT_MASK: u16 = 0xF;

/// Bit mask for the 7-bit immediate field (bits 6-0).
pub const IMM7_MASK: u16 = 0x7F;

/// Sign bit of the 7-bit immediate field.
pub const IMM7_SIGN_BIT: u16 = 0x40;

/// Bit mask for the 13-bit immediate field (bits 12-0).
pub const IMM13_MASK: u16 = 0x1FFF;
