//! # Stack Operations
//!
//! This module implements the stack manipulation instructions:
//! - PUSH: Push a register value onto the stack
//! - POP: Pop the top of stack into a register
//!
//! The LS-8 stack lives in main memory and grows downward from
//! [`STACK_TOP`](crate::memory::STACK_TOP); R7 holds the address of the
//! current top element. The stack pointer wraps modulo 256 like every other
//! byte quantity, and nothing stops a deep stack from growing into program
//! code.

use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes the PUSH instruction.
///
/// Decrements the stack pointer and stores the value of the register named
/// by `reg` at the new top of stack. The register is read before the stack
/// pointer moves, so `PUSH R7` pushes the old stack pointer value.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg` - Operand byte, register to push
pub(crate) fn execute_push<M: MemoryBus>(cpu: &mut Cpu<M>, reg: u8) -> Result<(), ExecutionError> {
    let value = cpu.regs.get(reg)?;
    let sp = cpu.regs.sp().wrapping_sub(1);
    cpu.regs.set_sp(sp);
    cpu.memory.write(sp as u16, value)?;
    cpu.pc = cpu.pc.wrapping_add(2);
    Ok(())
}

/// Executes the POP instruction.
///
/// Reads the byte at the top of stack into the register named by `reg`, then
/// increments the stack pointer. The increment re-reads R7 after the
/// destination write, so `POP R7` ends with R7 holding the popped value plus
/// one rather than the old stack pointer plus one.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg` - Operand byte, destination register
pub(crate) fn execute_pop<M: MemoryBus>(cpu: &mut Cpu<M>, reg: u8) -> Result<(), ExecutionError> {
    let value = cpu.memory.read(cpu.regs.sp() as u16)?;
    cpu.regs.set(reg, value)?;
    let sp = cpu.regs.sp().wrapping_add(1);
    cpu.regs.set_sp(sp);
    cpu.pc = cpu.pc.wrapping_add(2);
    Ok(())
}
