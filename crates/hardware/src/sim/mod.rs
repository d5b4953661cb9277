//! Simulation Setup.
//!
//! Front-end plumbing that turns a machine-code file into a ready memory
//! image.

/// Machine-code file parsing.
pub mod loader;

pub use loader::{load_program, parse_machine_code};
