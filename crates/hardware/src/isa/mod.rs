//! Instruction Set Architecture.
//!
//! Decoded instruction forms and the word decoder for the 16-bit ISA:
//! three-register ALU operations, register-immediate operations, loads and
//! stores, and the jump family.

/// Bit-field extraction and the word decoder.
pub mod decode;

/// Decoded instruction forms.
pub mod instruction;

pub use decode::{decode, sign_extend_imm7};
pub use instruction::Instruction;
