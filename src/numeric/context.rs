// ============================================================================
// Decimal Context
// Precision, rounding, and trap configuration for decimal arithmetic
// ============================================================================

use super::errors::{Signal, Signals};
use crate::error::{MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding Mode
// ============================================================================

/// How a value is rounded when digits have to be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest, ties away from zero
    #[default]
    HalfUp,
    /// Nearest, ties toward zero
    HalfDown,
    /// Nearest, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Toward zero, unless the last kept digit would be 0 or 5, then away
    /// from zero
    ZeroFiveUp,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::Up => RoundingStrategy::AwayFromZero,
            Rounding::Down | Rounding::ZeroFiveUp => RoundingStrategy::ToZero,
            Rounding::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Rounding::Floor => RoundingStrategy::ToNegativeInfinity,
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfDown => RoundingStrategy::MidpointTowardZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round `value` to `dp` decimal places.
    ///
    /// Values that already have `dp` or fewer places are returned unchanged.
    pub fn round_dp(self, value: Decimal, dp: u32) -> Decimal {
        let down = value.round_dp_with_strategy(dp, self.strategy());
        if self != Rounding::ZeroFiveUp || down == value {
            return down;
        }

        let mut truncated = down;
        truncated.rescale(dp);
        let last_digit = (truncated.mantissa() % 10).unsigned_abs();
        if last_digit == 0 || last_digit == 5 {
            value.round_dp_with_strategy(dp, RoundingStrategy::AwayFromZero)
        } else {
            down
        }
    }
}

// ============================================================================
// Context
// ============================================================================

/// Configuration for decimal operations.
///
/// Every operation rounds its result to `precision` significant digits with
/// `rounding`, and turns any raised signal contained in `traps` into an
/// error. Untrapped signals substitute the standard special value instead
/// (NaN for an invalid operation, a signed infinity for division by zero or
/// overflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    /// Significant digits kept by arithmetic results (1..=28)
    pub precision: u32,

    /// Rounding applied when a result exceeds `precision`
    pub rounding: Rounding,

    /// Signals that abort the operation with an error
    pub traps: Signals,
}

impl Context {
    /// Largest precision the underlying 96-bit coefficient can hold
    pub const MAX_PRECISION: u32 = 28;

    /// Create a context with the default trap set
    pub fn new(precision: u32, rounding: Rounding) -> Self {
        Self {
            precision,
            rounding,
            ..Self::default()
        }
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Trap an additional signal
    pub fn with_trap(mut self, signal: Signal) -> Self {
        self.traps = self.traps.with(signal);
        self
    }

    /// Builder method: Stop trapping a signal
    pub fn without_trap(mut self, signal: Signal) -> Self {
        self.traps = self.traps.without(signal);
        self
    }

    /// Builder method: Replace the whole trap set
    pub fn with_traps(mut self, traps: Signals) -> Self {
        self.traps = traps;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if self.precision == 0 || self.precision > Self::MAX_PRECISION {
            return Err(MoneyError::InvalidContext(format!(
                "precision must be between 1 and {}, got {}",
                Self::MAX_PRECISION,
                self.precision
            )));
        }
        Ok(())
    }

    /// Returns the first raised signal that is trapped, if any.
    pub(crate) fn check(&self, raised: Signals) -> Result<(), Signal> {
        match raised.iter().find(|s| self.traps.contains(*s)) {
            Some(signal) => Err(signal),
            None => Ok(()),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: Self::MAX_PRECISION,
            rounding: Rounding::HalfEven,
            traps: Signals::EMPTY
                .with(Signal::InvalidOperation)
                .with(Signal::DivisionByZero)
                .with(Signal::Overflow),
        }
    }
}

// ============================================================================
// Preset Contexts
// ============================================================================

impl Context {
    /// Nine digits, half-up rounding, every signal trapped
    pub fn basic() -> Self {
        Self {
            precision: 9,
            rounding: Rounding::HalfUp,
            traps: Signals::ALL,
        }
    }

    /// Full precision, half-even rounding, nothing trapped
    pub fn extended() -> Self {
        Self {
            precision: Self::MAX_PRECISION,
            rounding: Rounding::HalfEven,
            traps: Signals::EMPTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_context() {
        let ctx = Context::default();
        assert_eq!(ctx.precision, 28);
        assert_eq!(ctx.rounding, Rounding::HalfEven);
        assert!(ctx.traps.contains(Signal::DivisionByZero));
        assert!(!ctx.traps.contains(Signal::Inexact));
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let ctx = Context::default()
            .with_precision(6)
            .with_rounding(Rounding::Floor)
            .with_trap(Signal::Inexact)
            .without_trap(Signal::Overflow);

        assert_eq!(ctx.precision, 6);
        assert_eq!(ctx.rounding, Rounding::Floor);
        assert!(ctx.traps.contains(Signal::Inexact));
        assert!(!ctx.traps.contains(Signal::Overflow));
    }

    #[test]
    fn test_validation() {
        assert!(Context::default().with_precision(0).validate().is_err());
        assert!(Context::default().with_precision(29).validate().is_err());
        assert!(Context::basic().validate().is_ok());
    }

    #[test]
    fn test_check_reports_trapped_only() {
        let ctx = Context::default();
        let raised = Signals::of(Signal::Inexact).with(Signal::Rounded);
        assert_eq!(ctx.check(raised), Ok(()));
        assert_eq!(
            ctx.check(raised.with(Signal::Overflow)),
            Err(Signal::Overflow)
        );
        assert_eq!(Context::extended().check(Signals::ALL), Ok(()));
    }

    #[test]
    fn test_rounding_modes() {
        let v = dec!(2.25);
        assert_eq!(Rounding::HalfUp.round_dp(v, 1), dec!(2.3));
        assert_eq!(Rounding::HalfDown.round_dp(v, 1), dec!(2.2));
        assert_eq!(Rounding::HalfEven.round_dp(v, 1), dec!(2.2));
        assert_eq!(Rounding::Up.round_dp(dec!(2.21), 1), dec!(2.3));
        assert_eq!(Rounding::Down.round_dp(dec!(2.29), 1), dec!(2.2));
        assert_eq!(Rounding::Ceiling.round_dp(dec!(-2.29), 1), dec!(-2.2));
        assert_eq!(Rounding::Floor.round_dp(dec!(-2.21), 1), dec!(-2.3));
    }

    #[test]
    fn test_zero_five_up() {
        // Truncation would leave a trailing 0 or 5, so round away instead
        assert_eq!(Rounding::ZeroFiveUp.round_dp(dec!(1.01), 1), dec!(1.1));
        assert_eq!(Rounding::ZeroFiveUp.round_dp(dec!(1.51), 1), dec!(1.6));
        assert_eq!(Rounding::ZeroFiveUp.round_dp(dec!(1.21), 1), dec!(1.2));
        // Exact values are untouched
        assert_eq!(Rounding::ZeroFiveUp.round_dp(dec!(1.5), 1), dec!(1.5));
    }
}
