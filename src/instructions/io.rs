//! # Output Instructions
//!
//! This module implements PRN, the only output instruction of the LS-8.
//!
//! The CPU does not write to the host's stdout directly. PRN appends to an
//! internal output buffer that the embedding program drains with
//! [`Cpu::take_output`](crate::Cpu::take_output).

use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes the PRN (Print Register) instruction.
///
/// Formats the value of the register named by `reg` as unsigned decimal and
/// appends it to the output buffer followed by a newline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `reg` - Operand byte, register to print
pub(crate) fn execute_prn<M: MemoryBus>(cpu: &mut Cpu<M>, reg: u8) -> Result<(), ExecutionError> {
    let value = cpu.regs.get(reg)?;
    cpu.output.extend_from_slice(value.to_string().as_bytes());
    cpu.output.push(b'\n');
    cpu.pc = cpu.pc.wrapping_add(2);
    Ok(())
}
