//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations. This enables flexible memory
//! configurations including:
//!
//! - The standard 256-byte flat RAM (`Memory` implementation provided)
//! - Debugging wrappers with logging or watchpoints
//! - Partially-mapped address spaces for fault-injection tests
//!
//! ## Design Principles
//!
//! The LS-8 has no unmapped regions or bus faults on real hardware, but the
//! emulator keeps every access fallible so that alternative bus
//! implementations can reject addresses. The provided `Memory` only fails
//! when an address exceeds the 256-byte space, which the CPU core can produce
//! while fetching past the end of memory.

use crate::ExecutionError;

/// Total addressable memory on the LS-8, in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Address of the byte just above the stack.
///
/// The stack grows downward from here; the first `PUSH` decrements the stack
/// pointer to `0xF3` and stores there. `Cpu::new` initializes R7 to this
/// value.
pub const STACK_TOP: u8 = 0xF4;

/// Memory bus trait for CPU to read and write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU. The
/// CPU performs every access (instruction fetch, stack traffic, data moves)
/// through this abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - Both return `Result` so a bus can refuse an access; the CPU treats any
///   bus error as a fatal fault
///
/// # Examples
///
/// ```
/// use libls8::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
///
/// // Write a value
/// mem.write(0x34, 0x42).unwrap();
///
/// // Read it back
/// assert_eq!(mem.read(0x34).unwrap(), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use libls8::{ExecutionError, MemoryBus};
///
/// /// RAM below 0xF0, read-only above it.
/// struct RomTopMemory {
///     data: [u8; 256],
/// }
///
/// impl MemoryBus for RomTopMemory {
///     fn read(&self, addr: u16) -> Result<u8, ExecutionError> {
///         self.data
///             .get(addr as usize)
///             .copied()
///             .ok_or(ExecutionError::AddressOutOfRange(addr))
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
///         if addr >= 0xF0 {
///             return Err(ExecutionError::AddressOutOfRange(addr));
///         }
///         self.data[addr as usize] = value;
///         Ok(())
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified address.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::AddressOutOfRange`] if the address is not
    /// mapped by this bus.
    fn read(&self, addr: u16) -> Result<u8, ExecutionError>;

    /// Writes a byte to the specified address.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::AddressOutOfRange`] if the address is not
    /// mapped by this bus.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError>;

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Fails with the underlying write error if the image does not fit, with
    /// every byte before the failing address already written.
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{Memory, MemoryBus};
    ///
    /// let mut mem = Memory::new();
    /// mem.load(&[0x82, 0x00, 0x08]).unwrap();
    /// assert_eq!(mem.read(0).unwrap(), 0x82);
    /// assert_eq!(mem.read(2).unwrap(), 0x08);
    /// ```
    fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        for (addr, &byte) in program.iter().enumerate() {
            self.write(addr as u16, byte)?;
        }
        Ok(())
    }
}

/// The standard 256-byte flat memory of the LS-8.
///
/// All addresses 0x00 through 0xFF map to a single contiguous RAM array
/// holding program code, data, and the stack. Memory is initialized to zero.
///
/// # Memory Layout
///
/// | Range       | Conventional use                    |
/// |-------------|-------------------------------------|
/// | 0x00-0xF3   | Program code and data               |
/// | 0xF3 down   | Stack (grows downward from 0xF4)    |
/// | 0xF4-0xFF   | Reserved                            |
///
/// Nothing enforces the layout; a program that pushes far enough will
/// overwrite its own code.
///
/// # Examples
///
/// ```
/// use libls8::{opcodes, Cpu, Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory.load(&[opcodes::HLT]).unwrap();
///
/// let mut cpu = Cpu::new(memory);
/// cpu.run().unwrap();
/// ```
pub struct Memory {
    /// 256-byte contiguous memory array
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a new `Memory` with all bytes initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use libls8::{Memory, MemoryBus};
    ///
    /// let mem = Memory::new();
    /// assert_eq!(mem.read(0x00).unwrap(), 0x00);
    /// assert_eq!(mem.read(0xFF).unwrap(), 0x00);
    /// ```
    pub fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> Result<u8, ExecutionError> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(ExecutionError::AddressOutOfRange(addr))
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        match self.data.get_mut(addr as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ExecutionError::AddressOutOfRange(addr)),
        }
    }
}
