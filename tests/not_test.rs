//! Tests for the NOT instruction.
//!
//! Tests cover:
//! - Bitwise inversion in place
//! - NOT being a two-byte instruction
//! - Double inversion restoring the value
//! - The byte after the operand belonging to the next instruction

use libls8::{opcodes, Cpu, Memory, MemoryBus};

/// Helper function to create a CPU with a program loaded at address 0
fn setup_cpu(program: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    memory.load(program).unwrap();
    Cpu::new(memory)
}

// ========== Basic NOT Operation Tests ==========

#[test]
fn test_not_inverts_in_place() {
    // LDI R0,0b10100101 / NOT R0
    let mut cpu = setup_cpu(&[opcodes::LDI, 0, 0b1010_0101, opcodes::NOT, 0]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.register(0).unwrap(), 0b0101_1010);
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_not_of_zero_is_all_ones() {
    let mut cpu = setup_cpu(&[opcodes::NOT, 3, opcodes::HLT]);

    cpu.run().unwrap();

    assert_eq!(cpu.register(3).unwrap(), 0xFF);
}

#[test]
fn test_not_twice_restores_value() {
    let mut cpu = setup_cpu(&[
        opcodes::LDI,
        0,
        0x42,
        opcodes::NOT,
        0,
        opcodes::NOT,
        0,
        opcodes::HLT,
    ]);

    cpu.run().unwrap();

    assert_eq!(cpu.register(0).unwrap(), 0x42);
}

// ========== Instruction Size Tests ==========

#[test]
fn test_not_is_two_bytes() {
    // NOT R0 / HLT: the halt sits at address 2, directly after the
    // operand byte, and must execute
    let mut cpu = setup_cpu(&[opcodes::NOT, 0, opcodes::HLT]);

    cpu.run().unwrap();

    assert_eq!(cpu.state(), libls8::ExecutionState::Halted);
    assert_eq!(cpu.pc(), 2);
    assert_eq!(cpu.steps(), 2);
}
