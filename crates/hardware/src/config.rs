//! Cache Configuration.
//!
//! Parses and validates the `--cache` command-line value. The value is a
//! comma-separated list of cache parameters:
//! 1. **One level:** `size,associativity,blocksize` configures L1 alone.
//! 2. **Two levels:** `size,assoc,blocksize,size,assoc,blocksize` configures
//!    L1 followed by L2.
//!
//! Validation rejects any other field count, non-numeric fields, and
//! geometries where `associativity * blocksize` does not divide the total
//! size evenly.

use std::str::FromStr;

use crate::common::error::ConfigError;

/// Geometry of a single cache level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLevelConfig {
    /// Total capacity in cells.
    pub total_size: usize,
    /// Slots per row.
    pub associativity: usize,
    /// Cells per block.
    pub blocksize: usize,
}

impl CacheLevelConfig {
    /// Validates the geometry and builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if any parameter is zero and
    /// [`ConfigError::Geometry`] if `associativity * blocksize` does not
    /// divide `total_size` evenly.
    pub fn new(
        total_size: usize,
        associativity: usize,
        blocksize: usize,
    ) -> Result<Self, ConfigError> {
        if total_size == 0 || associativity == 0 || blocksize == 0 {
            return Err(ConfigError::Malformed);
        }
        if total_size % (associativity * blocksize) != 0 {
            return Err(ConfigError::Geometry {
                total_size,
                associativity,
                blocksize,
            });
        }
        Ok(Self {
            total_size,
            associativity,
            blocksize,
        })
    }

    /// Number of rows this geometry yields.
    pub fn row_count(&self) -> usize {
        self.total_size / (self.associativity * self.blocksize)
    }
}

/// Parsed `--cache` value: L1, optionally backed by L2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSpec {
    /// First-level geometry.
    pub l1: CacheLevelConfig,
    /// Second-level geometry, if configured.
    pub l2: Option<CacheLevelConfig>,
}

impl FromStr for CacheSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(',')
            .map(|f| f.trim().parse::<usize>().map_err(|_| ConfigError::Malformed))
            .collect::<Result<Vec<_>, _>>()?;

        match fields.as_slice() {
            [s1, a1, b1] => Ok(Self {
                l1: CacheLevelConfig::new(*s1, *a1, *b1)?,
                l2: None,
            }),
            [s1, a1, b1, s2, a2, b2] => Ok(Self {
                l1: CacheLevelConfig::new(*s1, *a1, *b1)?,
                l2: Some(CacheLevelConfig::new(*s2, *a2, *b2)?),
            }),
            _ => Err(ConfigError::Malformed),
        }
    }
}
