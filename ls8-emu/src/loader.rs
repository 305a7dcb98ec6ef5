//! Loader for `.ls8` program files.
//!
//! Programs are plain text, one byte per line written in binary.
//! Everything after a `#` is a comment and blank lines are skipped.
//! Parsed bytes are loaded into a fresh [`Memory`] starting at
//! address 0.

use libls8::{Memory, MemoryBus};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors produced while reading and parsing a program file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The program file could not be read.
    #[error("cannot read program file: {0}")]
    Io(#[from] io::Error),

    /// A non-comment line did not parse as a base-2 byte.
    #[error("line {line}: {text:?} is not a binary byte")]
    InvalidByte { line: usize, text: String },

    /// The program has more bytes than the machine has memory.
    #[error("program is {lines} bytes long but memory holds only 256")]
    TooLarge { lines: usize },
}

/// Parses program source text into a memory image.
///
/// Each line is split at the first `#`, the remainder is trimmed, and
/// empty results are skipped. Every surviving line must be a binary
/// byte literal. Bytes land at address 0 onward, one per line.
///
/// # Examples
///
/// ```
/// use libls8::MemoryBus;
/// use ls8_emu::loader;
///
/// let memory = loader::load_source("10000010 # LDI R0,8\n00000000\n00001000\n")?;
///
/// assert_eq!(memory.read(0)?, 0b10000010);
/// assert_eq!(memory.read(2)?, 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`LoaderError::InvalidByte`] for a line that does not parse
/// as a base-2 byte and [`LoaderError::TooLarge`] when the program has
/// more bytes than the machine has memory.
pub fn load_source(source: &str) -> Result<Memory, LoaderError> {
    let mut bytes = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let text = match line.split_once('#') {
            Some((code, _comment)) => code,
            None => line,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(text, 2).map_err(|_| LoaderError::InvalidByte {
            line: index + 1,
            text: text.to_string(),
        })?;
        bytes.push(byte);
    }

    if bytes.is_empty() {
        log::warn!("program has no instruction bytes");
    }
    log::debug!("parsed {} program bytes", bytes.len());

    let mut memory = Memory::new();
    memory
        .load(&bytes)
        .map_err(|_| LoaderError::TooLarge { lines: bytes.len() })?;
    Ok(memory)
}

/// Reads a program file from disk and parses it with [`load_source`].
///
/// # Errors
///
/// Returns [`LoaderError::Io`] when the file cannot be read, plus
/// everything [`load_source`] can return.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Memory, LoaderError> {
    let source = fs::read_to_string(path)?;
    load_source(&source)
}
