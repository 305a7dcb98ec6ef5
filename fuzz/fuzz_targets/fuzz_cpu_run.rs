//! Fuzz target for CPU execution.
//!
//! This target creates arbitrary memory images and register states,
//! then runs a bounded number of instructions to find edge cases and
//! crashes.

#![no_main]

use arbitrary::Arbitrary;
use libls8::{Cpu, Memory, MemoryBus};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input: a full memory image plus a register seed
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// The whole 256-byte address space
    image: [u8; 256],
    /// Initial register values, including the stack pointer in R7
    registers: [u8; 8],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();
    // Loading a full-sized image cannot overflow memory
    let _ = memory.load(&input.image);

    let mut cpu = Cpu::new(memory);
    for (index, &value) in input.registers.iter().enumerate() {
        let _ = cpu.set_register(index as u8, value);
    }

    // Run a bounded number of instructions
    // We don't care if it returns an error (unknown opcode, fault) - just no panics
    let _ = cpu.run_for_steps(1_000);

    // Basic sanity checks after execution (these should never fail)
    // If they do, we found a bug
    assert!(cpu.pc() <= 0x102);
    assert!(cpu.steps() <= 1_000);
});
