//! Tests for the PRN (Print Register) instruction.
//!
//! Tests cover:
//! - Decimal formatting with trailing newline
//! - One, two, and three digit values
//! - Output buffering and draining via take_output
//! - Repeated prints accumulating in order
//! - Register index validation

use libls8::{opcodes, Cpu, ExecutionError, Memory, MemoryBus};

/// Helper function to create a CPU with a program loaded at address 0
fn setup_cpu(program: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    memory.load(program).unwrap();
    Cpu::new(memory)
}

// ========== Basic PRN Operation Tests ==========

#[test]
fn test_prn_prints_decimal_with_newline() {
    // LDI R0,8 / PRN R0
    let mut cpu = setup_cpu(&[opcodes::LDI, 0, 8, opcodes::PRN, 0]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.output(), b"8\n".as_slice());
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_prn_value_digit_widths() {
    // Print 0, 42, and 255 in sequence
    let mut cpu = setup_cpu(&[
        opcodes::LDI,
        0,
        0,
        opcodes::PRN,
        0,
        opcodes::LDI,
        0,
        42,
        opcodes::PRN,
        0,
        opcodes::LDI,
        0,
        255,
        opcodes::PRN,
        0,
        opcodes::HLT,
    ]);

    cpu.run().unwrap();

    assert_eq!(cpu.output(), b"0\n42\n255\n".as_slice());
}

// ========== Output Buffer Tests ==========

#[test]
fn test_prn_output_is_buffered_until_taken() {
    // PRN R0 with R0 still zero
    let mut cpu = setup_cpu(&[opcodes::PRN, 0]);

    cpu.step().unwrap();

    assert_eq!(cpu.output(), b"0\n".as_slice());
    assert_eq!(cpu.take_output(), b"0\n");

    // Draining empties the buffer without disturbing the machine
    assert!(cpu.output().is_empty());
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_prn_same_register_twice() {
    // LDI R2,7 / PRN R2 / PRN R2
    let mut cpu = setup_cpu(&[opcodes::LDI, 2, 7, opcodes::PRN, 2, opcodes::PRN, 2]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.output(), b"7\n7\n".as_slice());
}

// ========== Register Index Validation Tests ==========

#[test]
fn test_prn_invalid_register_faults_without_output() {
    // PRN R9
    let mut cpu = setup_cpu(&[opcodes::PRN, 9]);

    let err = cpu.step().unwrap_err();

    assert_eq!(err, ExecutionError::RegisterOutOfRange(9));
    assert!(cpu.output().is_empty());
    assert_eq!(cpu.pc(), 0);
}
