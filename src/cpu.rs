//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the LS-8 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Register file**: eight 8-bit registers R0-R7, with R7 as stack pointer
//! - **Program counter** (PC): address of the next instruction
//! - **Flags register**: Equal, Greater, Less comparison flags
//! - **Execution state**: running or halted
//! - **Step counter**: u64 count of retired instructions
//! - **Output buffer**: bytes produced by `PRN`, drained by the host
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: execute one instruction
//! - `run()`: execute until `HLT` or a fault
//! - `run_for_steps()`: execute until a step budget is exhausted
//!
//! Every fault is fatal and deterministic: the failing `step` leaves all
//! state as the instruction left it, and stepping again re-runs the same
//! instruction to the same fault.

use crate::alu::AluOp;
use crate::flags::{Condition, Flags};
use crate::instructions;
use crate::memory::{MemoryBus, STACK_TOP};
use crate::opcodes::Opcode;
use crate::registers::RegisterFile;
use crate::ExecutionError;

/// Whether the CPU is willing to execute more instructions.
///
/// A CPU starts [`ExecutionState::Running`] and moves to
/// [`ExecutionState::Halted`] when it executes `HLT`. Halting is permanent
/// for the life of the `Cpu` value; further `step` calls do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// The CPU will execute the instruction at PC on the next step.
    Running,
    /// The CPU has executed `HLT` and ignores further steps.
    Halted,
}

/// LS-8 CPU state and execution context.
///
/// The `Cpu` struct contains all processor state: the register file, flags,
/// program counter, execution state, step counter, and the `PRN` output
/// buffer. It is generic over the memory implementation via the `MemoryBus`
/// trait and owns its memory.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use libls8::{opcodes, Cpu, Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory
///     .load(&[
///         opcodes::LDI, 0, 8, // LDI R0,8
///         opcodes::PRN, 0,    // PRN R0
///         opcodes::HLT,
///     ])
///     .unwrap();
///
/// let mut cpu = Cpu::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.sp(), 0xF4);
/// assert_eq!(cpu.steps(), 0);
///
/// cpu.run().unwrap();
/// assert_eq!(cpu.take_output(), b"8\n");
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// The eight general-purpose registers, R7 doubling as stack pointer
    pub(crate) regs: RegisterFile,

    /// Comparison flags written by CMP
    pub(crate) flags: Flags,

    /// Running or halted
    pub(crate) state: ExecutionState,

    /// Total instructions retired since initialization
    pub(crate) steps: u64,

    /// Bytes produced by PRN, waiting for the host to drain them
    pub(crate) output: Vec<u8>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// The CPU is initialized to the LS-8 power-on state:
    /// - Program counter (PC) starts at address 0
    /// - R7, the stack pointer, starts at [`STACK_TOP`] (0xF4)
    /// - All other registers are zeroed
    /// - Flags are cleared
    /// - The step counter is zero and the output buffer is empty
    ///
    /// # Arguments
    ///
    /// * `memory` - A MemoryBus implementation holding the program image
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{Cpu, Memory};
    ///
    /// let cpu = Cpu::new(Memory::new());
    /// assert_eq!(cpu.pc(), 0);
    /// assert_eq!(cpu.sp(), 0xF4);
    /// ```
    pub fn new(memory: M) -> Self {
        let mut regs = RegisterFile::new();
        regs.set_sp(STACK_TOP);

        Self {
            pc: 0,
            regs,
            flags: Flags::new(),
            state: ExecutionState::Running,
            steps: 0,
            output: Vec::new(),
            memory,
        }
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. If halted, return `Ok(Halted)` without touching any state
    /// 2. Fetch the opcode byte at PC and both potential operand bytes at
    ///    PC+1 and PC+2
    /// 3. Decode the opcode byte
    /// 4. Execute the instruction, which moves PC itself
    ///
    /// Both operand slots are fetched regardless of how many operands the
    /// instruction uses, matching the LS-8 bus behavior. The visible
    /// consequence is that any instruction within two bytes of the end of
    /// memory faults with [`ExecutionError::AddressOutOfRange`] before it
    /// can execute.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::UnknownOpcode`] if the fetched byte does not
    ///   decode; PC is left at the faulting byte
    /// - [`ExecutionError::AddressOutOfRange`] if a fetch or a memory
    ///   access inside the instruction falls off the address space
    /// - [`ExecutionError::RegisterOutOfRange`] if an operand byte names a
    ///   register above R7
    /// - [`ExecutionError::DivisionByZero`] from `MOD` with a zero divisor
    ///
    /// A fault leaves every completed state mutation of the instruction in
    /// place and never advances PC past the faulting instruction, so the
    /// stopped machine can be inspected or traced.
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{opcodes, Cpu, ExecutionState, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// memory.load(&[opcodes::LDI, 0, 42]).unwrap();
    ///
    /// let mut cpu = Cpu::new(memory);
    /// let state = cpu.step().unwrap();
    ///
    /// assert_eq!(state, ExecutionState::Running);
    /// assert_eq!(cpu.register(0).unwrap(), 42);
    /// assert_eq!(cpu.pc(), 3);
    /// assert_eq!(cpu.steps(), 1);
    /// ```
    pub fn step(&mut self) -> Result<ExecutionState, ExecutionError> {
        if self.state == ExecutionState::Halted {
            return Ok(ExecutionState::Halted);
        }

        // Fetch the opcode and both operand slots unconditionally
        let opcode_byte = self.memory.read(self.pc)?;
        let operand_a = self.memory.read(self.pc.wrapping_add(1))?;
        let operand_b = self.memory.read(self.pc.wrapping_add(2))?;

        // Decode; PC stays on the faulting byte for unknown opcodes
        let opcode = Opcode::decode(opcode_byte).ok_or(ExecutionError::UnknownOpcode {
            opcode: opcode_byte,
            address: self.pc,
        })?;

        // Execute; each instruction is responsible for moving PC
        match opcode {
            Opcode::Ldi => instructions::load_store::execute_ldi(self, operand_a, operand_b)?,
            Opcode::Prn => instructions::io::execute_prn(self, operand_a)?,
            Opcode::Hlt => instructions::control::execute_hlt(self),
            Opcode::Add => {
                instructions::alu::execute_binary_alu(self, AluOp::Add, operand_a, operand_b)?
            }
            Opcode::Mul => {
                instructions::alu::execute_binary_alu(self, AluOp::Mul, operand_a, operand_b)?
            }
            Opcode::Mod => {
                instructions::alu::execute_binary_alu(self, AluOp::Mod, operand_a, operand_b)?
            }
            Opcode::Cmp => {
                instructions::alu::execute_binary_alu(self, AluOp::Cmp, operand_a, operand_b)?
            }
            Opcode::And => {
                instructions::alu::execute_binary_alu(self, AluOp::And, operand_a, operand_b)?
            }
            Opcode::Or => {
                instructions::alu::execute_binary_alu(self, AluOp::Or, operand_a, operand_b)?
            }
            Opcode::Xor => {
                instructions::alu::execute_binary_alu(self, AluOp::Xor, operand_a, operand_b)?
            }
            Opcode::Shl => {
                instructions::alu::execute_binary_alu(self, AluOp::Shl, operand_a, operand_b)?
            }
            Opcode::Shr => {
                instructions::alu::execute_binary_alu(self, AluOp::Shr, operand_a, operand_b)?
            }
            Opcode::Not => instructions::alu::execute_not(self, operand_a)?,
            Opcode::Push => instructions::stack::execute_push(self, operand_a)?,
            Opcode::Pop => instructions::stack::execute_pop(self, operand_a)?,
            Opcode::Call => instructions::control::execute_call(self, operand_a)?,
            Opcode::Ret => instructions::control::execute_ret(self)?,
            Opcode::Jmp => instructions::control::execute_jmp(self, operand_a)?,
            Opcode::Jeq => {
                instructions::branches::execute_conditional_jump(self, Condition::Equal, operand_a)?
            }
            Opcode::Jne => instructions::branches::execute_conditional_jump(
                self,
                Condition::NotEqual,
                operand_a,
            )?,
        }

        self.steps += 1;
        Ok(self.state)
    }

    /// Runs the CPU until it halts or an instruction faults.
    ///
    /// This is the plain fetch-decode-execute loop: `step` is called until
    /// it reports [`ExecutionState::Halted`] or returns an error. Programs
    /// that neither halt nor fault loop forever; use
    /// [`run_for_steps`](Cpu::run_for_steps) when the program is untrusted.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExecutionError`] a step produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{opcodes, Cpu, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// memory
    ///     .load(&[
    ///         opcodes::LDI, 0, 8, // LDI R0,8
    ///         opcodes::LDI, 1, 9, // LDI R1,9
    ///         opcodes::ADD, 0, 1, // ADD R0,R1
    ///         opcodes::HLT,
    ///     ])
    ///     .unwrap();
    ///
    /// let mut cpu = Cpu::new(memory);
    /// cpu.run().unwrap();
    ///
    /// assert_eq!(cpu.register(0).unwrap(), 17);
    /// assert_eq!(cpu.steps(), 4);
    /// ```
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while self.step()? == ExecutionState::Running {}
        Ok(())
    }

    /// Runs the CPU for at most `step_budget` instructions.
    ///
    /// Executes instructions until the budget is exhausted, the CPU halts,
    /// or an instruction faults, whichever comes first. Returns the
    /// execution state afterwards so callers can distinguish a clean halt
    /// from a still-running machine that ran out of budget.
    ///
    /// This is the right entry point for untrusted programs, which may
    /// loop forever.
    ///
    /// # Arguments
    ///
    /// * `step_budget` - Maximum number of instructions to execute
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExecutionError`] a step produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{opcodes, Cpu, ExecutionState, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// // JMP R0 with R0 = 0: an infinite loop at address 0
    /// memory.load(&[opcodes::JMP, 0]).unwrap();
    ///
    /// let mut cpu = Cpu::new(memory);
    /// let state = cpu.run_for_steps(1000).unwrap();
    ///
    /// assert_eq!(state, ExecutionState::Running);
    /// assert_eq!(cpu.steps(), 1000);
    /// ```
    pub fn run_for_steps(&mut self, step_budget: u64) -> Result<ExecutionState, ExecutionError> {
        for _ in 0..step_budget {
            if self.step()? == ExecutionState::Halted {
                break;
            }
        }
        Ok(self.state)
    }

    // ========== State Getters ==========

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer (R7) value.
    ///
    /// The stack grows downward; SP points at the current top-of-stack
    /// byte once something has been pushed.
    pub fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Reads the register at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RegisterOutOfRange`] if `index` is not in
    /// `0..8`.
    pub fn register(&self, index: u8) -> Result<u8, ExecutionError> {
        self.regs.get(index)
    }

    /// Writes `value` to the register at `index`.
    ///
    /// Useful for setting up machine state in tests and harnesses; programs
    /// themselves load registers with `LDI`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RegisterOutOfRange`] if `index` is not in
    /// `0..8`.
    pub fn set_register(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        self.regs.set(index, value)
    }

    /// Returns a copy of the flags register.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns whether the CPU is running or halted.
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// Returns the total number of instructions retired since
    /// initialization.
    ///
    /// Faulting instructions do not retire; a step that returns an error
    /// leaves the counter unchanged.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    // ========== Output Buffer ==========

    /// Returns the bytes `PRN` has produced that have not been drained yet.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Takes all pending `PRN` output, leaving the buffer empty.
    ///
    /// Hosts that stream output call this after each step; batch callers
    /// can call it once after `run`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{opcodes, Cpu, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// memory
    ///     .load(&[opcodes::LDI, 0, 255, opcodes::PRN, 0, opcodes::HLT])
    ///     .unwrap();
    ///
    /// let mut cpu = Cpu::new(memory);
    /// cpu.run().unwrap();
    ///
    /// assert_eq!(cpu.take_output(), b"255\n");
    /// assert!(cpu.output().is_empty());
    /// ```
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{opcodes, Memory};

    #[test]
    fn test_cpu_initialization() {
        let cpu = Cpu::new(Memory::new());

        assert_eq!(cpu.pc(), 0);
        assert_eq!(cpu.sp(), STACK_TOP);
        for index in 0..7 {
            assert_eq!(cpu.register(index).unwrap(), 0);
        }
        assert_eq!(cpu.flags().bits(), 0);
        assert_eq!(cpu.state(), ExecutionState::Running);
        assert_eq!(cpu.steps(), 0);
        assert!(cpu.output().is_empty());
    }

    #[test]
    fn test_step_retires_one_instruction() {
        let mut memory = Memory::new();
        memory.load(&[opcodes::LDI, 0, 42]).unwrap();

        let mut cpu = Cpu::new(memory);
        let state = cpu.step().unwrap();

        assert_eq!(state, ExecutionState::Running);
        assert_eq!(cpu.register(0).unwrap(), 42);
        assert_eq!(cpu.pc(), 3);
        assert_eq!(cpu.steps(), 1);
    }

    #[test]
    fn test_step_after_halt_is_noop() {
        let mut memory = Memory::new();
        memory.load(&[opcodes::HLT]).unwrap();

        let mut cpu = Cpu::new(memory);
        assert_eq!(cpu.step().unwrap(), ExecutionState::Halted);

        let steps_after_halt = cpu.steps();
        assert_eq!(cpu.step().unwrap(), ExecutionState::Halted);
        assert_eq!(cpu.steps(), steps_after_halt);
        assert_eq!(cpu.pc(), 0);
    }

    #[test]
    fn test_unknown_opcode_leaves_pc_in_place() {
        let mut memory = Memory::new();
        memory.load(&[opcodes::LDI, 0, 1, 0xFF]).unwrap();

        let mut cpu = Cpu::new(memory);
        cpu.step().unwrap();

        let err = cpu.step().unwrap_err();
        assert_eq!(
            err,
            ExecutionError::UnknownOpcode {
                opcode: 0xFF,
                address: 3
            }
        );
        assert_eq!(cpu.pc(), 3);
        assert_eq!(cpu.steps(), 1);

        // The fault is deterministic: stepping again re-faults identically
        assert_eq!(cpu.step().unwrap_err(), err);
    }
}
