//! # ALU-Routed Instructions
//!
//! This module implements the instructions the encoding marks as ALU-routed:
//! the binary operations ADD, MUL, MOD, CMP, AND, OR, XOR, SHL, SHR, and the
//! unary NOT. The arithmetic itself lives in [`crate::alu`]; these functions
//! feed it register operands and advance the program counter.

use crate::alu::{self, AluOp};
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes a two-operand ALU instruction.
///
/// Reads the registers named by `reg_a` and `reg_b`, applies `op`, and
/// writes the result back to `reg_a` (or the flags register for
/// [`AluOp::Cmp`]). PC advances past the three instruction bytes.
///
/// Faults from the ALU (bad register index, division by zero) leave the PC
/// at the instruction that raised them.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `op` - The ALU operation this opcode routes to
/// * `reg_a` - First operand byte, destination register index
/// * `reg_b` - Second operand byte, source register index
pub(crate) fn execute_binary_alu<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    op: AluOp,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    alu::apply(&mut cpu.regs, &mut cpu.flags, op, reg_a, reg_b)?;
    cpu.pc = cpu.pc.wrapping_add(3);
    Ok(())
}

/// Executes the NOT instruction.
///
/// NOT is the only unary ALU instruction: it inverts the register named by
/// `reg_a` in place. Its single operand byte makes it a two-byte
/// instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg_a` - Operand byte, register index to invert
pub(crate) fn execute_not<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    reg_a: u8,
) -> Result<(), ExecutionError> {
    // NOT has no second operand; pass a register that always exists so
    // only reg_a can fault.
    alu::apply(&mut cpu.regs, &mut cpu.flags, AluOp::Not, reg_a, 0)?;
    cpu.pc = cpu.pc.wrapping_add(2);
    Ok(())
}
