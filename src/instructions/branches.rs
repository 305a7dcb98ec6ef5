//! # Conditional Jump Instructions
//!
//! This module implements the conditional jumps:
//! - JEQ: Jump if Equal flag set
//! - JNE: Jump if Equal flag clear
//!
//! Both take a register operand holding the absolute target address. Unlike
//! relative branches on larger machines, LS-8 jumps are always absolute; the
//! whole address space fits in a register.

use crate::flags::Condition;
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes a conditional jump (JEQ or JNE).
///
/// If the flags satisfy `condition`, the PC is loaded from the register
/// named by `reg`; otherwise it advances past the two instruction bytes.
/// The target register is read only when the jump is taken, so a bad
/// register index in a not-taken jump does not fault.
///
/// No flags are affected.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `condition` - The flag condition this opcode tests
/// * `reg` - Operand byte, register holding the target address
pub(crate) fn execute_conditional_jump<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    condition: Condition,
    reg: u8,
) -> Result<(), ExecutionError> {
    if cpu.flags.test(condition) {
        cpu.pc = cpu.regs.get(reg)? as u16;
    } else {
        cpu.pc = cpu.pc.wrapping_add(2);
    }
    Ok(())
}
