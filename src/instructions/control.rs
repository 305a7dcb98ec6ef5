//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - HLT: Halt the CPU
//! - JMP: Unconditional jump to a register-held address
//! - CALL: Push the return address and jump
//! - RET: Pop the return address into the PC
//!
//! CALL and RET use the stack at R7. CALL pushes the address of the
//! instruction after its operand byte; RET pops it back. Nothing pairs the
//! two, so a program that pops a pushed data byte into the PC simply jumps
//! there.

use crate::cpu::ExecutionState;
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes the HLT (Halt) instruction.
///
/// Moves the CPU to [`ExecutionState::Halted`] without advancing the PC, so
/// a halted machine still shows the address of its HLT. Further `step` calls
/// are no-ops.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
pub(crate) fn execute_hlt<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.state = ExecutionState::Halted;
}

/// Executes the JMP (Jump) instruction.
///
/// Loads the PC from the register named by `reg`. This is an unconditional
/// jump that affects no flags and touches no stack.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg` - Operand byte, register holding the target address
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>, reg: u8) -> Result<(), ExecutionError> {
    cpu.pc = cpu.regs.get(reg)? as u16;
    Ok(())
}

/// Executes the CALL (Call Subroutine) instruction.
///
/// Pushes the address of the instruction following CALL onto the stack,
/// then loads the PC from the register named by `reg`. The decrement of the
/// stack pointer happens before the target register is read, matching the
/// architectural effect order; a bad target register faults with the return
/// address already on the stack.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg` - Operand byte, register holding the subroutine address
pub(crate) fn execute_call<M: MemoryBus>(cpu: &mut Cpu<M>, reg: u8) -> Result<(), ExecutionError> {
    // step() fetched the byte at PC+2 before dispatching here, so PC+2
    // fits in a byte.
    let return_address = cpu.pc.wrapping_add(2) as u8;

    let sp = cpu.regs.sp().wrapping_sub(1);
    cpu.regs.set_sp(sp);
    cpu.memory.write(sp as u16, return_address)?;

    cpu.pc = cpu.regs.get(reg)? as u16;
    Ok(())
}

/// Executes the RET (Return from Subroutine) instruction.
///
/// Pops the top of stack into the PC and increments the stack pointer.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
pub(crate) fn execute_ret<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), ExecutionError> {
    let sp = cpu.regs.sp();
    cpu.pc = cpu.memory.read(sp as u16)? as u16;
    cpu.regs.set_sp(sp.wrapping_add(1));
    Ok(())
}
