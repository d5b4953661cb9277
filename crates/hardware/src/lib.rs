//! # sim16-core
//!
//! A cycle-by-cycle simulator for a 16-bit word-addressed machine with an
//! optional one- or two-level set-associative data cache.
//!
//! The crate is organized as:
//! 1. **[`common`]:** Constants, the register file, address decomposition,
//!    access records, and error types.
//! 2. **[`config`]:** Cache geometry parsing and validation.
//! 3. **[`isa`]:** Instruction forms and the word decoder.
//! 4. **[`mem`]:** The flat main-memory image.
//! 5. **[`core`]:** The processor model and the cache hierarchy it drives.
//! 6. **[`sim`]:** The machine-code loader.
//! 7. **[`stats`]:** Whole-run counters.
//!
//! A front end loads a program with [`sim::load_program`], optionally parses
//! a [`config::CacheSpec`], builds a [`Machine`], and drains access records
//! from [`Machine::run`].

/// Common utilities and types.
pub mod common;

/// Cache configuration parsing.
pub mod config;

/// The processor model and its functional units.
pub mod core;

/// Instruction set architecture.
pub mod isa;

/// Main memory image.
pub mod mem;

/// Program loading.
pub mod sim;

/// Whole-run counters.
pub mod stats;

pub use crate::common::{AccessKind, AccessRecord, CacheLabel, ConfigError, LoadError};
pub use crate::config::{CacheLevelConfig, CacheSpec};
pub use crate::core::Machine;
pub use crate::core::units::cache::CacheHierarchy;
pub use crate::mem::MemoryImage;
