//! # Load Instructions
//!
//! This module implements LDI, the immediate load. The LS-8 has no
//! register-to-memory store instruction; data reaches memory only through
//! PUSH and CALL.

use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes the LDI (Load Immediate) instruction.
///
/// Writes the immediate operand byte into the register named by `reg`. Any
/// byte value is a valid immediate, including bytes that happen to encode
/// opcodes.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg` - First operand byte, destination register index
/// * `value` - Second operand byte, the immediate value
pub(crate) fn execute_ldi<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    reg: u8,
    value: u8,
) -> Result<(), ExecutionError> {
    cpu.regs.set(reg, value)?;
    cpu.pc = cpu.pc.wrapping_add(3);
    Ok(())
}
