//! Processor and cache tests.

/// Execution semantics.
pub mod cpu;
