//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine sizing and instruction field layout.
//! 2. **Address Decomposition:** Splitting an address against a cache geometry.
//! 3. **Access Records:** The per-access log stream (HIT/MISS/SW) and its text format.
//! 4. **Error Handling:** Load-time and configuration error types.
//! 5. **Register Management:** The architectural register file.

/// Cache access record definitions and log formatting.
pub mod access;

/// Address decomposition against a cache geometry.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for program loading and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use access::{AccessKind, AccessRecord, CacheLabel};
pub use addr::AddrParts;
pub use error::{ConfigError, LoadError};
pub use reg::RegisterFile;
