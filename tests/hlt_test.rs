//! Tests for the HLT (Halt) instruction.
//!
//! Tests cover:
//! - Transition to the halted state
//! - PC staying on the HLT instruction
//! - Steps after halt being no-ops
//! - run() stopping at HLT and skipping later instructions

use libls8::{opcodes, Cpu, ExecutionState, Memory, MemoryBus};

/// Helper function to create a CPU with a program loaded at address 0
fn setup_cpu(program: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    memory.load(program).unwrap();
    Cpu::new(memory)
}

// ========== Basic HLT Operation Tests ==========

#[test]
fn test_hlt_halts_without_advancing_pc() {
    // LDI R0,1 / HLT
    let mut cpu = setup_cpu(&[opcodes::LDI, 0, 1, opcodes::HLT]);

    assert_eq!(cpu.step().unwrap(), ExecutionState::Running);
    assert_eq!(cpu.step().unwrap(), ExecutionState::Halted);

    assert_eq!(cpu.state(), ExecutionState::Halted);
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.steps(), 2);
}

#[test]
fn test_steps_after_halt_are_noops() {
    let mut cpu = setup_cpu(&[opcodes::HLT]);

    cpu.step().unwrap();
    let pc = cpu.pc();
    let steps = cpu.steps();

    for _ in 0..5 {
        assert_eq!(cpu.step().unwrap(), ExecutionState::Halted);
    }

    assert_eq!(cpu.pc(), pc);
    assert_eq!(cpu.steps(), steps);
}

// ========== Run Loop Interaction Tests ==========

#[test]
fn test_run_stops_at_hlt() {
    // HLT followed by an LDI that must never execute
    let mut cpu = setup_cpu(&[opcodes::HLT, opcodes::LDI, 0, 99]);

    cpu.run().unwrap();

    assert_eq!(cpu.state(), ExecutionState::Halted);
    assert_eq!(cpu.register(0).unwrap(), 0);
    assert_eq!(cpu.steps(), 1);
}

#[test]
fn test_run_after_halt_returns_immediately() {
    let mut cpu = setup_cpu(&[opcodes::HLT]);

    cpu.run().unwrap();
    cpu.run().unwrap();

    assert_eq!(cpu.steps(), 1);
}

// ========== Edge Case Tests ==========

#[test]
fn test_hlt_ignores_trailing_bytes() {
    // HLT is one byte; garbage after it is never decoded
    let mut cpu = setup_cpu(&[opcodes::HLT, 0xFF, 0xFF]);

    cpu.run().unwrap();

    assert_eq!(cpu.state(), ExecutionState::Halted);
}
