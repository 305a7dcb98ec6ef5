//! # Arithmetic Logic Unit
//!
//! The ALU performs every arithmetic, logic, shift, and compare operation of
//! the LS-8. Operands are register indices; results land back in the first
//! operand register, except for [`AluOp::Cmp`] which writes only the flags.
//!
//! All arithmetic is modulo 256: results wrap silently rather than faulting
//! or saturating. Shift amounts of 8 or more produce zero.

use crate::flags::Flags;
use crate::registers::RegisterFile;
use crate::ExecutionError;

/// Operations the ALU can perform.
///
/// [`AluOp::Sub`] is supported by the ALU but has no opcode in the
/// instruction set; it is reachable only through [`apply`] directly.
/// [`AluOp::Not`] is unary and never reads its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `reg_a = reg_a + reg_b` (mod 256)
    Add,
    /// `reg_a = reg_a - reg_b` (mod 256)
    Sub,
    /// `reg_a = reg_a * reg_b` (mod 256)
    Mul,
    /// `reg_a = reg_a % reg_b`; faults if `reg_b` holds zero
    Mod,
    /// Compare `reg_a` against `reg_b` and set the flags; no register write
    Cmp,
    /// `reg_a = reg_a & reg_b`
    And,
    /// `reg_a = reg_a | reg_b`
    Or,
    /// `reg_a = reg_a ^ reg_b`
    Xor,
    /// `reg_a = !reg_a`; unary
    Not,
    /// `reg_a = reg_a << reg_b`, zero when the shift amount is 8 or more
    Shl,
    /// `reg_a = reg_a >> reg_b`, zero when the shift amount is 8 or more
    Shr,
}

/// Applies `op` to the registers named by `reg_a` and `reg_b`.
///
/// Binary operations read both registers and write the result to `reg_a`.
/// [`AluOp::Not`] reads and writes only `reg_a`, so `reg_b` may hold any
/// byte. [`AluOp::Cmp`] writes `flags` instead of a register.
///
/// # Errors
///
/// - [`ExecutionError::RegisterOutOfRange`] if an operand register the
///   operation actually uses is not in `0..8`
/// - [`ExecutionError::DivisionByZero`] if `op` is [`AluOp::Mod`] and
///   `reg_b` holds zero
///
/// # Examples
///
/// ```
/// use libls8::{alu, AluOp, Flags, RegisterFile};
///
/// let mut regs = RegisterFile::new();
/// let mut flags = Flags::new();
/// regs.set(0, 200).unwrap();
/// regs.set(1, 100).unwrap();
///
/// alu::apply(&mut regs, &mut flags, AluOp::Add, 0, 1).unwrap();
/// assert_eq!(regs.get(0).unwrap(), 44); // 300 mod 256
/// ```
pub fn apply(
    regs: &mut RegisterFile,
    flags: &mut Flags,
    op: AluOp,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    match op {
        AluOp::Add => {
            let result = regs.get(reg_a)?.wrapping_add(regs.get(reg_b)?);
            regs.set(reg_a, result)
        }
        AluOp::Sub => {
            let result = regs.get(reg_a)?.wrapping_sub(regs.get(reg_b)?);
            regs.set(reg_a, result)
        }
        AluOp::Mul => {
            let result = regs.get(reg_a)?.wrapping_mul(regs.get(reg_b)?);
            regs.set(reg_a, result)
        }
        AluOp::Mod => {
            let a = regs.get(reg_a)?;
            let b = regs.get(reg_b)?;
            if b == 0 {
                return Err(ExecutionError::DivisionByZero);
            }
            regs.set(reg_a, a % b)
        }
        AluOp::Cmp => {
            let a = regs.get(reg_a)?;
            let b = regs.get(reg_b)?;
            flags.set_from_comparison(a, b);
            Ok(())
        }
        AluOp::And => {
            let result = regs.get(reg_a)? & regs.get(reg_b)?;
            regs.set(reg_a, result)
        }
        AluOp::Or => {
            let result = regs.get(reg_a)? | regs.get(reg_b)?;
            regs.set(reg_a, result)
        }
        AluOp::Xor => {
            let result = regs.get(reg_a)? ^ regs.get(reg_b)?;
            regs.set(reg_a, result)
        }
        AluOp::Not => {
            let result = !regs.get(reg_a)?;
            regs.set(reg_a, result)
        }
        AluOp::Shl => {
            let a = regs.get(reg_a)?;
            let b = regs.get(reg_b)?;
            // Shifting a u8 by 8 or more overflows in Rust; architecturally
            // every bit is gone
            let result = if b >= 8 { 0 } else { a << b };
            regs.set(reg_a, result)
        }
        AluOp::Shr => {
            let a = regs.get(reg_a)?;
            let b = regs.get(reg_b)?;
            let result = if b >= 8 { 0 } else { a >> b };
            regs.set(reg_a, result)
        }
    }
}
