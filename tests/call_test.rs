//! Tests for the CALL (Call Subroutine) instruction.
//!
//! Tests cover:
//! - Return address pushed onto the stack
//! - PC loaded from the target register
//! - Nested calls stacking return addresses
//! - R7 as the target reading the decremented stack pointer
//! - Fault ordering when the target register is invalid
//! - A call at the end of memory pushing return address 255

use libls8::{opcodes, Cpu, ExecutionError, Memory, MemoryBus, STACK_TOP};

/// Helper function to create a CPU with a program loaded at address 0
fn setup_cpu(program: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    memory.load(program).unwrap();
    Cpu::new(memory)
}

// ========== Basic CALL Operation Tests ==========

#[test]
fn test_call_pushes_return_address_and_jumps() {
    // LDI R1,0x20 / CALL R1
    let mut cpu = setup_cpu(&[opcodes::LDI, 1, 0x20, opcodes::CALL, 1]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    // Return address is the byte after CALL's operand: 3 + 2 = 5
    assert_eq!(cpu.pc(), 0x20);
    assert_eq!(cpu.sp(), STACK_TOP - 1);
    assert_eq!(cpu.memory().read((STACK_TOP - 1) as u16).unwrap(), 5);
}

#[test]
fn test_call_and_return_resume_after_call() {
    // 0: LDI R1,8     (subroutine address)
    // 3: CALL R1
    // 5: PRN R0       (resumes here)
    // 7: HLT
    // 8: LDI R0,42    (subroutine)
    // 11: RET
    let mut cpu = setup_cpu(&[
        opcodes::LDI,
        1,
        8,
        opcodes::CALL,
        1,
        opcodes::PRN,
        0,
        opcodes::HLT,
        opcodes::LDI,
        0,
        42,
        opcodes::RET,
    ]);

    cpu.run().unwrap();

    assert_eq!(cpu.take_output(), b"42\n");
    assert_eq!(cpu.sp(), STACK_TOP);
}

// ========== Nested Call Tests ==========

#[test]
fn test_nested_calls_stack_return_addresses() {
    // 0: LDI R1,10    (outer subroutine)
    // 3: LDI R2,14    (inner subroutine)
    // 6: CALL R1
    // 8: HLT
    // 10: CALL R2     (outer calls inner)
    // 12: RET
    // 14: RET         (inner)
    let mut cpu = setup_cpu(&[
        opcodes::LDI,
        1,
        10,
        opcodes::LDI,
        2,
        14,
        opcodes::CALL,
        1,
        opcodes::HLT,
        0,
        opcodes::CALL,
        2,
        opcodes::RET,
        0,
        opcodes::RET,
    ]);

    // CALL R1: pushes 8, jumps to 10
    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 10);
    assert_eq!(cpu.memory().read((STACK_TOP - 1) as u16).unwrap(), 8);

    // CALL R2: pushes 12, jumps to 14
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 14);
    assert_eq!(cpu.sp(), STACK_TOP - 2);
    assert_eq!(cpu.memory().read((STACK_TOP - 2) as u16).unwrap(), 12);

    // Unwind both frames and halt
    cpu.run().unwrap();
    assert_eq!(cpu.sp(), STACK_TOP);
    assert_eq!(cpu.pc(), 8);
}

// ========== Effect Order Tests ==========

#[test]
fn test_call_r7_jumps_to_new_stack_pointer() {
    // CALL reads its target after the decrement, so R7 names the slot
    // that now holds the return address
    let mut cpu = setup_cpu(&[opcodes::CALL, 7]);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), STACK_TOP - 1);
    assert_eq!(cpu.pc(), (STACK_TOP - 1) as u16);
    assert_eq!(cpu.memory().read((STACK_TOP - 1) as u16).unwrap(), 2);
}

#[test]
fn test_call_invalid_target_faults_after_push() {
    // CALL R9: the push happens before the target register is read
    let mut cpu = setup_cpu(&[opcodes::CALL, 9]);

    let err = cpu.step().unwrap_err();

    assert_eq!(err, ExecutionError::RegisterOutOfRange(9));
    assert_eq!(cpu.sp(), STACK_TOP - 1);
    assert_eq!(cpu.memory().read((STACK_TOP - 1) as u16).unwrap(), 2);
    assert_eq!(cpu.pc(), 0);
}

// ========== Edge Case Tests ==========

#[test]
fn test_call_at_end_of_memory_pushes_return_address_255() {
    // CALL at 253 is the highest placement whose operand slots still
    // fetch; its return address 253 + 2 is the last address and must
    // survive the narrowing to a byte
    let mut cpu = setup_cpu(&[opcodes::LDI, 0, 253, opcodes::JMP, 0]);
    cpu.memory_mut().write(253, opcodes::CALL).unwrap();
    cpu.memory_mut().write(254, 1).unwrap();

    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.sp(), STACK_TOP - 1);
    assert_eq!(cpu.memory().read((STACK_TOP - 1) as u16).unwrap(), 255);
    // R1 still holds zero, so the call landed at address 0
    assert_eq!(cpu.pc(), 0);
}
