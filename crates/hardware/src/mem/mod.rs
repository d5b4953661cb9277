//! Main memory.
//!
//! The flat, word-addressed backing store behind the cache hierarchy. Main
//! memory is the source of truth for cache refills and for direct (uncached)
//! access, and is updated by every store via write-through.

/// Flat backing store of 16-bit cells.
pub mod image;

pub use image::MemoryImage;
