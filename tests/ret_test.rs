//! Tests for the RET (Return from Subroutine) instruction.
//!
//! Tests cover:
//! - PC loaded from the top of stack
//! - Stack pointer increment
//! - RET without a matching CALL consuming whatever the stack holds
//! - RET popping a data byte pushed by PUSH

use libls8::{opcodes, Cpu, Memory, MemoryBus, STACK_TOP};

/// Helper function to create a CPU with a program loaded at address 0
fn setup_cpu(program: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    memory.load(program).unwrap();
    Cpu::new(memory)
}

// ========== Basic RET Operation Tests ==========

#[test]
fn test_ret_pops_pc_from_stack() {
    // Seed the stack by hand: a return address of 0x30 at 0xF3
    let mut cpu = setup_cpu(&[opcodes::RET]);
    cpu.memory_mut().write(0xF3, 0x30).unwrap();
    cpu.set_register(7, 0xF3).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x30);
    assert_eq!(cpu.sp(), 0xF4);
}

// ========== Unpaired RET Tests ==========

#[test]
fn test_ret_with_empty_stack_jumps_to_stack_top_byte() {
    // Nothing was pushed; memory at STACK_TOP is zero, so RET jumps to 0.
    // Address 0 holds the RET again, which would loop forever.
    let mut cpu = setup_cpu(&[opcodes::RET]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.sp(), STACK_TOP + 1);
}

#[test]
fn test_ret_consumes_pushed_data_byte() {
    // PUSH R0 with R0 = 9, then RET: the machine jumps to 9, where a
    // HLT is waiting. Nothing distinguishes data from return addresses.
    let mut cpu = setup_cpu(&[
        opcodes::LDI,
        0,
        9,
        opcodes::PUSH,
        0,
        opcodes::RET,
        0,
        0,
        0,
        opcodes::HLT,
    ]);

    cpu.run().unwrap();

    assert_eq!(cpu.pc(), 9);
    assert_eq!(cpu.sp(), STACK_TOP);
}
