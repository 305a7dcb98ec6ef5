//! # LS-8 Machine Runner
//!
//! The pieces that turn the libls8 CPU core into a runnable machine:
//! a loader for the `.ls8` program file format and a one-line-per-step
//! machine state trace. The `ls8` binary in this crate wires them to a
//! command line.
//!
//! ## Program File Format
//!
//! An `.ls8` file is plain text with one instruction byte per line,
//! written in binary:
//!
//! ```text
//! # mult.ls8: multiply 8 by 9 and print the result
//!
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 10100010 # MUL R0,R1
//! ...
//! ```
//!
//! Everything after a `#` is a comment, blank lines are skipped, and
//! the remaining lines are parsed as base-2 bytes loaded into memory
//! starting at address 0.
//!
//! ## Quick Start
//!
//! ```rust
//! use libls8::Cpu;
//! use ls8_emu::loader;
//!
//! let memory = loader::load_source("10000010\n00000000\n00001000\n00000001\n")?;
//! let mut cpu = Cpu::new(memory);
//! cpu.run()?;
//!
//! assert_eq!(cpu.register(0)?, 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod loader;
pub mod trace;

// Re-export commonly used types
pub use loader::{load_file, load_source, LoaderError};
pub use trace::trace_line;
