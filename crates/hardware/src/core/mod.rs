//! Machine Core.
//!
//! The processor model and the functional units it drives.

/// The processor: register state, fetch/execute loop, final-state dump.
pub mod cpu;

/// Functional units attached to the core.
pub mod units;

pub use cpu::Machine;
