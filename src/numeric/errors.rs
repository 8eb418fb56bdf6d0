// ============================================================================
// Numeric Signals
// Exceptional conditions raised by decimal arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exceptional conditions that decimal arithmetic can raise.
///
/// Whether a raised signal aborts the operation is decided by the trap set of
/// the [`Context`](super::Context) in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Signal {
    /// Operation has no defined result (Inf - Inf, 0 * Inf, sNaN operand, ...)
    InvalidOperation = 0,
    /// Finite non-zero dividend divided by zero
    DivisionByZero = 1,
    /// Result magnitude exceeds the representable range
    Overflow = 2,
    /// Result was rounded and digits were lost
    Inexact = 3,
    /// Result was rounded (possibly without loss)
    Rounded = 4,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::InvalidOperation,
        Signal::DivisionByZero,
        Signal::Overflow,
        Signal::Inexact,
        Signal::Rounded,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::InvalidOperation => write!(f, "invalid operation"),
            Signal::DivisionByZero => write!(f, "division by zero"),
            Signal::Overflow => {
                write!(f, "overflow: result exceeded the representable range")
            },
            Signal::Inexact => write!(f, "inexact: rounding discarded non-zero digits"),
            Signal::Rounded => write!(f, "rounded: result coefficient was shortened"),
        }
    }
}

/// A small set of [`Signal`]s, used for both trap configuration and for the
/// conditions raised by a single operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signals(u8);

impl Signals {
    pub const EMPTY: Self = Self(0);

    /// Every signal.
    pub const ALL: Self = Self(0b1_1111);

    pub const fn of(signal: Signal) -> Self {
        Self(signal.bit())
    }

    #[inline]
    pub const fn with(self, signal: Signal) -> Self {
        Self(self.0 | signal.bit())
    }

    #[inline]
    pub const fn without(self, signal: Signal) -> Self {
        Self(self.0 & !signal.bit())
    }

    #[inline]
    pub const fn contains(self, signal: Signal) -> bool {
        self.0 & signal.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, signal: Signal) {
        self.0 |= signal.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = Signal> {
        Signal::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for Signals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Signal> for Signals {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}
