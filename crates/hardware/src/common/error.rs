//! Load-time and configuration error types.
//!
//! This module defines the fatal error kinds the simulator can report before
//! execution starts. It provides:
//! 1. **Load Errors:** File and machine-code parsing failures; a malformed
//!    program image is unrecoverable by design, never retried.
//! 2. **Configuration Errors:** Malformed `--cache` specifications.
//!
//! No runtime faults are modeled: register and address arithmetic is defined
//! via fixed-width truncation, so overflow wraps instead of signalling.

use std::io;

use thiserror::Error;

/// Fatal errors raised while loading a machine-code program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A line did not match the `ram[<index>] = 16'b<bits>;` grammar.
    #[error("Can't parse line: {0}")]
    UnparsableLine(String),

    /// A record's index broke the strictly-increasing, gapless sequence.
    #[error("Memory addresses encountered out of sequence: {0}")]
    OutOfSequence(usize),

    /// A record addressed a cell beyond the end of memory.
    #[error("Program too big for memory")]
    TooBig,

    /// The program file could not be opened or read.
    #[error("Can't open file {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Fatal errors raised while parsing a cache configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The value was not 3 or 6 comma-separated integers.
    #[error("Invalid cache config")]
    Malformed,

    /// A level's size is not divisible by associativity times blocksize,
    /// so no whole number of rows fits.
    #[error(
        "Invalid cache config: size {total_size} is not a multiple of \
         associativity {associativity} x blocksize {blocksize}"
    )]
    Geometry {
        /// Total size of the offending level, in cells.
        total_size: usize,
        /// Associativity of the offending level.
        associativity: usize,
        /// Blocksize of the offending level, in cells.
        blocksize: usize,
    },
}
