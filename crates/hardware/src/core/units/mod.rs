//! Functional units.

/// Set-associative data cache.
pub mod cache;

pub use cache::{CacheHierarchy, CacheLevel};
