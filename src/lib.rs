//! # LS-8 CPU Emulator Core
//!
//! An emulator for the LS-8, an 8-bit microcomputer with 256 bytes of memory,
//! eight general-purpose registers, and a descending stack that shares the
//! address space with program code.
//!
//! This crate provides the foundational architecture for emulating the LS-8
//! processor, including CPU state structures, a trait-based memory bus
//! abstraction, a self-contained ALU, and an instruction set decoded from a
//! structured opcode encoding.
//!
//! ## Quick Start
//!
//! ```rust
//! use libls8::{opcodes, Cpu, Memory, MemoryBus};
//!
//! // Assemble a tiny program: multiply 8 by 9 and print the result.
//! let mut memory = Memory::new();
//! memory
//!     .load(&[
//!         opcodes::LDI, 0, 8, // LDI R0,8
//!         opcodes::LDI, 1, 9, // LDI R1,9
//!         opcodes::MUL, 0, 1, // MUL R0,R1
//!         opcodes::PRN, 0,    // PRN R0
//!         opcodes::HLT,
//!     ])
//!     .unwrap();
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.register(0).unwrap(), 72);
//! assert_eq!(cpu.output(), b"72\n".as_slice());
//! ```
//!
//! ## Architecture
//!
//! The emulator follows a modular architecture adhering to these principles:
//!
//! - **Modularity**: CPU state is separated from memory implementation via the
//!   `MemoryBus` trait
//! - **Determinism**: the same program image and starting state always produce
//!   the same register file, memory, and output
//! - **Fail-stop execution**: every fault is a typed [`ExecutionError`] that
//!   leaves the machine inspectable at the faulting instruction
//! - **Structured decoding**: opcodes carry their operand count and ALU
//!   routing in the encoding itself
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the 256-byte `Memory` implementation
//! - `registers` - the eight-register file and stack pointer conventions
//! - `flags` - comparison flags and branch conditions
//! - `alu` - arithmetic, logic, shift, and compare operations
//! - `opcodes` - instruction encoding, mnemonics, and operand counts

pub mod alu;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use alu::AluOp;
pub use cpu::{Cpu, ExecutionState};
pub use flags::{Condition, Flags};
pub use memory::{Memory, MemoryBus, MEMORY_SIZE, STACK_TOP};
pub use opcodes::Opcode;
pub use registers::{RegisterFile, NUM_REGISTERS, SP};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Every variant is fatal to the running program: the fetch-decode-execute
/// loop stops at the faulting instruction and the error surfaces to the
/// caller unchanged. All state mutations performed before the fault remain
/// visible, so a stopped machine can be inspected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// Fetch produced a byte with no entry in the instruction set.
    ///
    /// The program counter is left pointing at the faulting byte.
    #[error("unknown opcode 0x{opcode:02X} at address 0x{address:02X}")]
    UnknownOpcode { opcode: u8, address: u16 },

    /// MOD attempted a division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A memory access fell outside the 256-byte address space.
    #[error("memory address 0x{0:02X} out of range")]
    AddressOutOfRange(u16),

    /// A register index fell outside R0 through R7.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(u8),
}
