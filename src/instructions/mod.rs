//! # LS-8 Instruction Implementations
//!
//! This module contains the implementations of all LS-8 instructions,
//! organized by category. Each instruction is implemented as a standalone
//! function that takes a mutable reference to the CPU and its decoded
//! operand bytes; the fetch-decode-execute loop in `cpu` fetches operands
//! before dispatching here.
//!
//! ## Categories
//!
//! - **alu**: ALU-routed operations (ADD, MUL, MOD, CMP, AND, OR, XOR, SHL, SHR, NOT)
//! - **branches**: Conditional jumps (JEQ, JNE)
//! - **control**: Control flow (HLT, JMP, CALL, RET)
//! - **io**: Output (PRN)
//! - **load_store**: Immediate loads (LDI)
//! - **stack**: Stack operations (PUSH, POP)

pub mod alu;
pub mod branches;
pub mod control;
pub mod io;
pub mod load_store;
pub mod stack;
