//! # Comparison Flags
//!
//! The LS-8 flags register records the outcome of the most recent `CMP`
//! instruction as three mutually exclusive bits:
//!
//! | Bit | Mask  | Meaning              |
//! |-----|-------|----------------------|
//! | 0   | 0b001 | Equal                |
//! | 1   | 0b010 | Greater (a > b)      |
//! | 2   | 0b100 | Less (a < b)         |
//!
//! Exactly one bit is set after each comparison. The conditional jumps `JEQ`
//! and `JNE` test only the Equal bit.

/// Branch conditions testable against the flags register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The last comparison found its operands equal (`JEQ`).
    Equal,
    /// The last comparison found its operands unequal, or no comparison has
    /// run yet (`JNE`).
    NotEqual,
}

/// The LS-8 flags register.
///
/// Flags start cleared, so before the first `CMP` a [`Condition::NotEqual`]
/// test passes and a [`Condition::Equal`] test fails.
///
/// # Examples
///
/// ```
/// use libls8::{Condition, Flags};
///
/// let mut flags = Flags::new();
/// assert!(!flags.test(Condition::Equal));
///
/// flags.set_from_comparison(7, 7);
/// assert!(flags.test(Condition::Equal));
/// assert_eq!(flags.bits(), 0b001);
///
/// flags.set_from_comparison(3, 9);
/// assert!(flags.test(Condition::NotEqual));
/// assert_eq!(flags.bits(), 0b100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    equal: bool,
    greater: bool,
    less: bool,
}

impl Flags {
    /// Creates a flags register with every flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of comparing `a` against `b`.
    ///
    /// Clears all three flags and then sets exactly one of them.
    pub fn set_from_comparison(&mut self, a: u8, b: u8) {
        self.equal = a == b;
        self.greater = a > b;
        self.less = a < b;
    }

    /// Tests a branch condition against the current flags.
    pub fn test(&self, condition: Condition) -> bool {
        match condition {
            Condition::Equal => self.equal,
            Condition::NotEqual => !self.equal,
        }
    }

    /// Returns `true` if the last comparison found its operands equal.
    pub fn equal(&self) -> bool {
        self.equal
    }

    /// Returns `true` if the last comparison found `a > b`.
    pub fn greater(&self) -> bool {
        self.greater
    }

    /// Returns `true` if the last comparison found `a < b`.
    pub fn less(&self) -> bool {
        self.less
    }

    /// Packs the flags into the architectural `00000LGE` byte layout.
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.equal {
            bits |= 0b001;
        }
        if self.greater {
            bits |= 0b010;
        }
        if self.less {
            bits |= 0b100;
        }
        bits
    }
}
