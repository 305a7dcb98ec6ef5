//! # Instruction Encoding
//!
//! This module defines the LS-8 instruction set: the opcode byte values, the
//! [`Opcode`] enum the CPU dispatches on, and the static metadata (mnemonic,
//! operand count, size) attached to each instruction.
//!
//! ## Encoding
//!
//! Every opcode byte follows the layout `AABCDDDD`:
//!
//! - `AA` - number of operand bytes that follow the opcode (0-2)
//! - `B` - set if the instruction is routed through the ALU
//! - `C` - set if the instruction may write the program counter directly
//! - `DDDD` - instruction identifier within its group
//!
//! The operand-count bits make instruction length decodable without a table
//! lookup; [`Opcode::operand_count`] always agrees with the top two bits of
//! [`Opcode::as_byte`].
//!
//! ## Instruction Set
//!
//! | Mnemonic | Byte         | Operands | Effect                               |
//! |----------|--------------|----------|--------------------------------------|
//! | `LDI`    | `0b10000010` | 2        | Load immediate into register         |
//! | `PRN`    | `0b01000111` | 1        | Print register as decimal            |
//! | `HLT`    | `0b00000001` | 0        | Halt                                 |
//! | `ADD`    | `0b10100000` | 2        | ALU add                              |
//! | `MUL`    | `0b10100010` | 2        | ALU multiply                         |
//! | `MOD`    | `0b10100100` | 2        | ALU remainder                        |
//! | `CMP`    | `0b10100111` | 2        | ALU compare, sets flags              |
//! | `AND`    | `0b10101000` | 2        | ALU bitwise and                      |
//! | `OR`     | `0b10101010` | 2        | ALU bitwise or                       |
//! | `XOR`    | `0b10101011` | 2        | ALU bitwise xor                      |
//! | `SHL`    | `0b10101100` | 2        | ALU shift left                       |
//! | `SHR`    | `0b10101101` | 2        | ALU shift right                      |
//! | `NOT`    | `0b01101001` | 1        | ALU bitwise invert                   |
//! | `PUSH`   | `0b01000101` | 1        | Push register onto stack             |
//! | `POP`    | `0b01000110` | 1        | Pop stack into register              |
//! | `CALL`   | `0b01010000` | 1        | Push return address, jump to register|
//! | `RET`    | `0b00010001` | 0        | Pop return address into PC           |
//! | `JMP`    | `0b01010100` | 1        | Jump to address in register          |
//! | `JEQ`    | `0b01010101` | 1        | Jump if Equal flag set               |
//! | `JNE`    | `0b01010110` | 1        | Jump if Equal flag clear             |

/// `LDI registerA immediate` - load a value into a register.
pub const LDI: u8 = 0b1000_0010;
/// `PRN registerA` - print the register value in decimal with a newline.
pub const PRN: u8 = 0b0100_0111;
/// `HLT` - halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// `ADD registerA registerB` - add, result into registerA.
pub const ADD: u8 = 0b1010_0000;
/// `MUL registerA registerB` - multiply, result into registerA.
pub const MUL: u8 = 0b1010_0010;
/// `MOD registerA registerB` - remainder, result into registerA.
pub const MOD: u8 = 0b1010_0100;
/// `CMP registerA registerB` - compare and set the flags register.
pub const CMP: u8 = 0b1010_0111;
/// `AND registerA registerB` - bitwise and, result into registerA.
pub const AND: u8 = 0b1010_1000;
/// `OR registerA registerB` - bitwise or, result into registerA.
pub const OR: u8 = 0b1010_1010;
/// `XOR registerA registerB` - bitwise xor, result into registerA.
pub const XOR: u8 = 0b1010_1011;
/// `SHL registerA registerB` - shift registerA left by registerB bits.
pub const SHL: u8 = 0b1010_1100;
/// `SHR registerA registerB` - shift registerA right by registerB bits.
pub const SHR: u8 = 0b1010_1101;
/// `NOT registerA` - bitwise invert registerA in place.
pub const NOT: u8 = 0b0110_1001;
/// `PUSH registerA` - push the register value onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// `POP registerA` - pop the top of stack into the register.
pub const POP: u8 = 0b0100_0110;
/// `CALL registerA` - push the return address and jump to the register value.
pub const CALL: u8 = 0b0101_0000;
/// `RET` - pop the return address into the program counter.
pub const RET: u8 = 0b0001_0001;
/// `JMP registerA` - jump to the address held in the register.
pub const JMP: u8 = 0b0101_0100;
/// `JEQ registerA` - jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;
/// `JNE registerA` - jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// A decoded LS-8 instruction.
///
/// [`Opcode::decode`] maps a fetched byte to its instruction, and the
/// metadata methods expose the static properties the byte encodes.
///
/// # Examples
///
/// ```
/// use libls8::{opcodes, Opcode};
///
/// let op = Opcode::decode(opcodes::LDI).unwrap();
/// assert_eq!(op, Opcode::Ldi);
/// assert_eq!(op.mnemonic(), "LDI");
/// assert_eq!(op.operand_count(), 2);
/// assert_eq!(op.size(), 3);
///
/// // Bytes outside the instruction set do not decode
/// assert_eq!(Opcode::decode(0x00), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Ldi,
    Prn,
    Hlt,
    Add,
    Mul,
    Mod,
    Cmp,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Not,
    Push,
    Pop,
    Call,
    Ret,
    Jmp,
    Jeq,
    Jne,
}

impl Opcode {
    /// Decodes an opcode byte, or returns `None` for bytes outside the
    /// instruction set.
    pub fn decode(byte: u8) -> Option<Opcode> {
        match byte {
            LDI => Some(Opcode::Ldi),
            PRN => Some(Opcode::Prn),
            HLT => Some(Opcode::Hlt),
            ADD => Some(Opcode::Add),
            MUL => Some(Opcode::Mul),
            MOD => Some(Opcode::Mod),
            CMP => Some(Opcode::Cmp),
            AND => Some(Opcode::And),
            OR => Some(Opcode::Or),
            XOR => Some(Opcode::Xor),
            SHL => Some(Opcode::Shl),
            SHR => Some(Opcode::Shr),
            NOT => Some(Opcode::Not),
            PUSH => Some(Opcode::Push),
            POP => Some(Opcode::Pop),
            CALL => Some(Opcode::Call),
            RET => Some(Opcode::Ret),
            JMP => Some(Opcode::Jmp),
            JEQ => Some(Opcode::Jeq),
            JNE => Some(Opcode::Jne),
            _ => None,
        }
    }

    /// The encoded byte value of this instruction.
    pub fn as_byte(self) -> u8 {
        match self {
            Opcode::Ldi => LDI,
            Opcode::Prn => PRN,
            Opcode::Hlt => HLT,
            Opcode::Add => ADD,
            Opcode::Mul => MUL,
            Opcode::Mod => MOD,
            Opcode::Cmp => CMP,
            Opcode::And => AND,
            Opcode::Or => OR,
            Opcode::Xor => XOR,
            Opcode::Shl => SHL,
            Opcode::Shr => SHR,
            Opcode::Not => NOT,
            Opcode::Push => PUSH,
            Opcode::Pop => POP,
            Opcode::Call => CALL,
            Opcode::Ret => RET,
            Opcode::Jmp => JMP,
            Opcode::Jeq => JEQ,
            Opcode::Jne => JNE,
        }
    }

    /// The instruction mnemonic, as written in assembly listings.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Hlt => "HLT",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Mod => "MOD",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Not => "NOT",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
        }
    }

    /// Number of operand bytes following the opcode byte (0-2).
    pub fn operand_count(self) -> u8 {
        match self {
            Opcode::Hlt | Opcode::Ret => 0,
            Opcode::Prn
            | Opcode::Not
            | Opcode::Push
            | Opcode::Pop
            | Opcode::Call
            | Opcode::Jmp
            | Opcode::Jeq
            | Opcode::Jne => 1,
            Opcode::Ldi
            | Opcode::Add
            | Opcode::Mul
            | Opcode::Mod
            | Opcode::Cmp
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Shl
            | Opcode::Shr => 2,
        }
    }

    /// Total instruction size in bytes, opcode included (1-3).
    pub fn size(self) -> u8 {
        1 + self.operand_count()
    }
}
