//! # Register File
//!
//! The LS-8 has eight 8-bit general-purpose registers, R0 through R7. All
//! eight are readable and writable by any instruction that takes a register
//! operand; R7 additionally serves as the stack pointer by convention.
//!
//! The register file itself does not enforce the stack-pointer convention.
//! `Cpu::new` initializes R7 to [`STACK_TOP`](crate::memory::STACK_TOP), and
//! the stack instructions move it, but a program is free to clobber R7 like
//! any other register.

use crate::ExecutionError;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Index of the register used as the stack pointer.
pub const SP: u8 = 7;

/// The eight-register file of the LS-8.
///
/// Registers are created zeroed. Access by index is fallible so that decoded
/// operand bytes can be used directly; an index of 8 or more faults with
/// [`ExecutionError::RegisterOutOfRange`].
///
/// # Examples
///
/// ```
/// use libls8::RegisterFile;
///
/// let mut regs = RegisterFile::new();
/// regs.set(3, 0x42).unwrap();
/// assert_eq!(regs.get(3).unwrap(), 0x42);
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all registers set to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads the register at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RegisterOutOfRange`] if `index` is not in
    /// `0..8`.
    pub fn get(&self, index: u8) -> Result<u8, ExecutionError> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(ExecutionError::RegisterOutOfRange(index))
    }

    /// Writes `value` to the register at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::RegisterOutOfRange`] if `index` is not in
    /// `0..8`.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        match self.regs.get_mut(index as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ExecutionError::RegisterOutOfRange(index)),
        }
    }

    /// Reads the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Writes the stack pointer (R7).
    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
