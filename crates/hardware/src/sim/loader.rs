//! Machine-Code Loader.
//!
//! Parses the textual machine-code format into a memory image. Each line is
//! one record:
//!
//! ```text
//! ram[<index>] = 16'b<bits>;<anything>
//! ```
//!
//! where `<index>` is a decimal cell index and `<bits>` is the cell value in
//! binary. Anything after the semicolon (typically the disassembly) is
//! ignored. Records must start at index 0 and increase by exactly one per
//! line; the first violated rule is reported and loading stops.

use std::fs;
use std::path::Path;

use crate::common::constants::MEM_WORDS;
use crate::common::error::LoadError;
use crate::mem::MemoryImage;

/// Reads and parses the machine-code file at `path` into a fresh,
/// full-sized memory image.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be read, or the parse
/// error for the first bad line.
pub fn load_program(path: impl AsRef<Path>) -> Result<MemoryImage, LoadError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut mem = MemoryImage::new(MEM_WORDS);
    parse_machine_code(&src, &mut mem)?;
    Ok(mem)
}

/// Parses machine-code text into `mem`, one record per line.
///
/// Cells the program does not cover keep their existing contents.
///
/// # Errors
///
/// * [`LoadError::UnparsableLine`] - a line does not match the record
///   grammar.
/// * [`LoadError::OutOfSequence`] - a record's index is not the successor
///   of the previous record's.
/// * [`LoadError::TooBig`] - a record addresses a cell past the end of
///   `mem`.
pub fn parse_machine_code(src: &str, mem: &mut MemoryImage) -> Result<(), LoadError> {
    let mut expected = 0usize;
    for line in src.lines() {
        let (addr, value) =
            parse_line(line).ok_or_else(|| LoadError::UnparsableLine(line.to_owned()))?;
        if addr != expected {
            return Err(LoadError::OutOfSequence(addr));
        }
        if addr >= mem.len() {
            return Err(LoadError::TooBig);
        }
        mem.store(addr as u16, value);
        expected += 1;
    }
    tracing::debug!(words = expected, "program loaded");
    Ok(())
}

/// Parses one record line into `(index, value)`, or `None` if it does not
/// match the grammar.
fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix("ram[")?;
    let close = rest.find(']')?;
    let (index_str, rest) = rest.split_at(close);
    if index_str.is_empty() || !index_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let addr = index_str.parse::<usize>().ok()?;

    let rest = rest.strip_prefix("] = 16'b")?;
    let end = rest.find(';')?;
    let bits = &rest[..end];
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    let value = u16::from_str_radix(bits, 2).ok()?;
    Some((addr, value))
}
