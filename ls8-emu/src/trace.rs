//! One-line machine state rendering for debugging.
//!
//! A trace line shows the PC, the flags byte, the three bytes at the
//! PC, and all eight registers, everything in hex:
//!
//! ```text
//! TRACE: 00 | 00 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```
//!
//! Bytes past the end of memory render as `--` so a trace can still be
//! printed for a CPU stopped at the top of the address space.

use libls8::{Cpu, MemoryBus, NUM_REGISTERS};

/// Renders the CPU state as a single trace line.
///
/// # Examples
///
/// ```
/// use libls8::{Cpu, Memory, MemoryBus};
/// use ls8_emu::trace::trace_line;
///
/// let mut memory = Memory::new();
/// memory.load(&[0b10000010, 0, 8])?;
/// let cpu = Cpu::new(memory);
///
/// assert_eq!(
///     trace_line(&cpu),
///     "TRACE: 00 | 00 82 00 08 | 00 00 00 00 00 00 00 F4"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn trace_line<M: MemoryBus>(cpu: &Cpu<M>) -> String {
    let pc = cpu.pc();
    let mut line = format!("TRACE: {:02X} | {:02X}", pc, cpu.flags().bits());

    for offset in 0..3 {
        match cpu.memory().read(pc.wrapping_add(offset)) {
            Ok(byte) => line.push_str(&format!(" {:02X}", byte)),
            Err(_) => line.push_str(" --"),
        }
    }

    line.push_str(" |");
    for index in 0..NUM_REGISTERS as u8 {
        match cpu.register(index) {
            Ok(value) => line.push_str(&format!(" {:02X}", value)),
            Err(_) => line.push_str(" --"),
        }
    }

    line
}
