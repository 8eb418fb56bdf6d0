// ============================================================================
// Decimal Amount
// Decimal number with signed infinities and NaNs, evaluated under a Context
// ============================================================================

use super::context::{Context, Rounding};
use super::errors::{Signal, Signals};
use crate::error::{MoneyError, MoneyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A decimal value as used for money amounts and plain scalars.
///
/// Finite values keep their scale (`1.50` and `1.5` compare equal but have
/// different exponents). Infinities and NaNs are ordinary values that
/// propagate through arithmetic; a signaling NaN raises
/// [`Signal::InvalidOperation`] when it is used as an operand.
///
/// # Example
/// ```
/// use moneymint::numeric::{Amount, Context};
///
/// let ctx = Context::default();
/// let a: Amount = "100.10".parse()?;
/// let b: Amount = "0.90".parse()?;
/// assert_eq!(a.add(b, &ctx)?, Amount::from(101));
/// # Ok::<_, moneymint::MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Amount {
    Finite(Decimal),
    Infinite { negative: bool },
    NaN { signaling: bool },
}

// ============================================================================
// Helpers
// ============================================================================

/// Largest scale (and smallest exponent) a coefficient can carry
const MAX_SCALE: u32 = 28;

/// Number of decimal digits in the coefficient (at least 1)
fn coefficient_digits(value: Decimal) -> u32 {
    match value.mantissa().unsigned_abs() {
        0 => 1,
        m => m.ilog10() + 1,
    }
}

/// 10^exp as a decimal, `None` when it does not fit
fn pow10(exp: u32) -> Option<Decimal> {
    if exp > MAX_SCALE {
        return None;
    }
    Decimal::try_from_i128_with_scale(10i128.pow(exp), 0).ok()
}

/// 10^exp for a possibly negative exponent
fn pow10_signed(exp: i32) -> Option<Decimal> {
    if exp < 0 {
        let scale = exp.unsigned_abs();
        (scale <= MAX_SCALE).then(|| Decimal::new(1, scale))
    } else {
        pow10(exp as u32)
    }
}

/// Multiply without any rounding, `None` if the exact product does not fit
fn exact_product(a: Decimal, b: Decimal) -> Option<Decimal> {
    let scale = a.scale() + b.scale();
    if scale > MAX_SCALE {
        return None;
    }
    let mantissa = a.mantissa().checked_mul(b.mantissa())?;
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Round `value` to a multiple of 10^exp. `None` on overflow.
fn round_to_exponent(value: Decimal, exp: i32, rounding: Rounding) -> Option<Decimal> {
    if exp <= 0 {
        let dp = exp.unsigned_abs();
        if dp > MAX_SCALE {
            return None;
        }
        let mut rounded = rounding.round_dp(value, dp);
        rounded.rescale(dp);
        Some(rounded)
    } else {
        let factor = pow10(exp as u32)?;
        let scaled = value.checked_div(factor)?;
        rounding.round_dp(scaled, 0).checked_mul(factor)
    }
}

/// Exact quotient truncated toward zero, with the matching remainder
fn integer_quotient(x: Decimal, y: Decimal) -> Option<(Decimal, Decimal)> {
    let remainder = x.checked_rem(y)?;
    let quotient = x.checked_sub(remainder)?.checked_div(y)?.trunc();
    Some((quotient, remainder))
}

/// Round a finite result to the context precision.
fn fit(value: Decimal, ctx: &Context, raised: &mut Signals) -> Amount {
    let digits = coefficient_digits(value);
    if digits <= ctx.precision {
        return Amount::Finite(value);
    }

    let drop = digits - ctx.precision;
    let scale = value.scale();
    let rounded = if scale >= drop {
        Some(ctx.rounding.round_dp(value, scale - drop))
    } else {
        round_to_exponent(value, (drop - scale) as i32, ctx.rounding)
    };

    raised.insert(Signal::Rounded);
    match rounded {
        Some(r) => {
            if r != value {
                raised.insert(Signal::Inexact);
            }
            // 9.99 -> 10.0 gains a digit; the trailing zero carries no value
            if coefficient_digits(r) > ctx.precision {
                Amount::Finite(r.normalize())
            } else {
                Amount::Finite(r)
            }
        },
        None => overflow(value.is_sign_negative(), raised),
    }
}

fn overflow(negative: bool, raised: &mut Signals) -> Amount {
    raised.insert(Signal::Overflow);
    raised.insert(Signal::Inexact);
    raised.insert(Signal::Rounded);
    Amount::Infinite { negative }
}

/// Accumulates the signals raised while evaluating one operation.
struct Eval<'a> {
    ctx: &'a Context,
    raised: Signals,
}

impl<'a> Eval<'a> {
    /// Rejects an out-of-range precision before any digit arithmetic
    fn new(ctx: &'a Context) -> MoneyResult<Self> {
        ctx.validate()?;
        Ok(Self {
            ctx,
            raised: Signals::EMPTY,
        })
    }

    fn invalid(&mut self) -> Amount {
        self.raised.insert(Signal::InvalidOperation);
        Amount::NAN
    }

    fn division_by_zero(&mut self, negative: bool) -> Amount {
        self.raised.insert(Signal::DivisionByZero);
        Amount::Infinite { negative }
    }

    fn overflow(&mut self, negative: bool) -> Amount {
        overflow(negative, &mut self.raised)
    }

    fn inexact(&mut self) {
        self.raised.insert(Signal::Inexact);
        self.raised.insert(Signal::Rounded);
    }

    fn fit(&mut self, value: Decimal) -> Amount {
        fit(value, self.ctx, &mut self.raised)
    }

    /// Quiet NaN result if any operand is a NaN; signaling NaNs also raise
    fn nan(&mut self, operands: &[Amount]) -> Option<Amount> {
        let mut result = None;
        for operand in operands {
            if let Amount::NaN { signaling } = operand {
                if *signaling {
                    self.raised.insert(Signal::InvalidOperation);
                }
                result = Some(Amount::NAN);
            }
        }
        result
    }

    fn finish(self, value: Amount) -> MoneyResult<Amount> {
        self.ctx.check(self.raised)?;
        Ok(value)
    }
}

// ============================================================================
// Construction and Accessors
// ============================================================================

impl Amount {
    pub const ZERO: Self = Self::Finite(Decimal::ZERO);
    pub const ONE: Self = Self::Finite(Decimal::ONE);
    pub const INFINITY: Self = Self::Infinite { negative: false };
    pub const NEG_INFINITY: Self = Self::Infinite { negative: true };
    pub const NAN: Self = Self::NaN { signaling: false };
    pub const SNAN: Self = Self::NaN { signaling: true };

    /// The finite value, if any.
    #[inline]
    pub fn as_decimal(self) -> Option<Decimal> {
        match self {
            Amount::Finite(d) => Some(d),
            _ => None,
        }
    }

    /// Exponent of a finite value (`-scale`).
    #[inline]
    pub fn exponent(self) -> Option<i32> {
        self.as_decimal().map(|d| -(d.scale() as i32))
    }

    /// Exponent of the most significant digit: `123.45` gives 2, `0.012`
    /// gives -2.
    pub fn adjusted(self) -> Option<i32> {
        self.as_decimal()
            .map(|d| coefficient_digits(d) as i32 - 1 - d.scale() as i32)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Amount::Finite(_))
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, Amount::Infinite { .. })
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        matches!(self, Amount::NaN { .. })
    }

    #[inline]
    pub fn is_qnan(self) -> bool {
        matches!(self, Amount::NaN { signaling: false })
    }

    #[inline]
    pub fn is_snan(self) -> bool {
        matches!(self, Amount::NaN { signaling: true })
    }

    /// True when the sign bit is set (including `-0` and `-Infinity`).
    #[inline]
    pub fn is_signed(self) -> bool {
        match self {
            Amount::Finite(d) => d.is_sign_negative(),
            Amount::Infinite { negative } => negative,
            Amount::NaN { .. } => false,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        matches!(self, Amount::Finite(d) if d.is_zero())
    }

    /// Integer value of a finite amount, `None` when it has a fractional part
    /// or does not fit.
    pub(crate) fn as_integer(self) -> Option<i64> {
        match self {
            Amount::Finite(d) if d.fract().is_zero() => d.to_i64(),
            _ => None,
        }
    }

    /// Truncate toward zero and convert to an integer.
    ///
    /// # Errors
    /// `Overflow` for infinities or values out of range, `InvalidOperation`
    /// for NaNs.
    pub fn to_i128(self) -> MoneyResult<i128> {
        match self {
            Amount::Finite(d) => d.trunc().to_i128().ok_or(Signal::Overflow.into()),
            Amount::Infinite { .. } => Err(Signal::Overflow.into()),
            Amount::NaN { .. } => Err(Signal::InvalidOperation.into()),
        }
    }

    /// Nearest binary float. Lossy by nature; for display and interop only.
    pub fn to_f64(self) -> f64 {
        match self {
            Amount::Finite(d) => d.to_f64().unwrap_or(f64::NAN),
            Amount::Infinite { negative: false } => f64::INFINITY,
            Amount::Infinite { negative: true } => f64::NEG_INFINITY,
            Amount::NaN { .. } => f64::NAN,
        }
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl Amount {
    /// Numeric comparison of two non-NaN values.
    fn numeric_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Amount::NaN { .. }, _) | (_, Amount::NaN { .. }) => None,
            (Amount::Finite(a), Amount::Finite(b)) => Some(a.cmp(&b)),
            (Amount::Infinite { negative: a }, Amount::Infinite { negative: b }) => Some(b.cmp(&a)),
            (Amount::Infinite { negative }, _) => Some(if negative {
                Ordering::Less
            } else {
                Ordering::Greater
            }),
            (_, Amount::Infinite { negative }) => Some(if negative {
                Ordering::Greater
            } else {
                Ordering::Less
            }),
        }
    }

    /// Total order over every value, including NaNs and exponents:
    /// `-Infinity < finite < Infinity < sNaN < NaN`; equal finite values are
    /// ordered by sign, then by exponent.
    pub fn total_cmp(self, other: Self) -> Ordering {
        match (self, other) {
            (Amount::NaN { signaling: a }, Amount::NaN { signaling: b }) => b.cmp(&a),
            (Amount::NaN { .. }, _) => Ordering::Greater,
            (_, Amount::NaN { .. }) => Ordering::Less,
            _ => {
                let ord = self.numeric_cmp(other).unwrap_or(Ordering::Equal);
                if ord != Ordering::Equal {
                    return ord;
                }
                match (self, other) {
                    (Amount::Finite(a), Amount::Finite(b)) => {
                        let (neg_a, neg_b) = (a.is_sign_negative(), b.is_sign_negative());
                        if neg_a != neg_b {
                            return if neg_a {
                                Ordering::Less
                            } else {
                                Ordering::Greater
                            };
                        }
                        let by_exponent = b.scale().cmp(&a.scale());
                        if neg_a {
                            by_exponent.reverse()
                        } else {
                            by_exponent
                        }
                    },
                    _ => Ordering::Equal,
                }
            },
        }
    }

    fn ordering_amount(ord: Ordering) -> Amount {
        match ord {
            Ordering::Less => Amount::Finite(Decimal::NEGATIVE_ONE),
            Ordering::Equal => Amount::ZERO,
            Ordering::Greater => Amount::ONE,
        }
    }

    /// -1, 0 or 1; NaN if either operand is a NaN.
    pub fn compare(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }
        let ord = self.numeric_cmp(other).unwrap_or(Ordering::Equal);
        ev.finish(Self::ordering_amount(ord))
    }

    /// Like [`compare`](Self::compare), but any NaN raises `InvalidOperation`.
    pub fn compare_signal(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        if self.is_nan() || other.is_nan() {
            let mut ev = Eval::new(ctx)?;
            let nan = ev.invalid();
            return ev.finish(nan);
        }
        self.compare(other, ctx)
    }

    /// -1, 0 or 1 under [`total_cmp`](Self::total_cmp). Never signals.
    pub fn compare_total(self, other: Self) -> Amount {
        Self::ordering_amount(self.total_cmp(other))
    }

    /// [`compare_total`](Self::compare_total) on absolute values.
    pub fn compare_total_mag(self, other: Self) -> Amount {
        Self::ordering_amount(self.abs().total_cmp(other.abs()))
    }

    /// True when both values have the same exponent (or are both infinite,
    /// or both NaN).
    pub fn same_quantum(self, other: Self) -> bool {
        match (self, other) {
            (Amount::Finite(a), Amount::Finite(b)) => a.scale() == b.scale(),
            (Amount::Infinite { .. }, Amount::Infinite { .. }) => true,
            (Amount::NaN { .. }, Amount::NaN { .. }) => true,
            _ => false,
        }
    }

    fn select(self, other: Self, ctx: &Context, magnitude: bool, want_max: bool) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        // A single quiet NaN loses to a number
        let lone_number = match (self, other) {
            (Amount::NaN { signaling: false }, b) if !b.is_nan() => Some(b),
            (a, Amount::NaN { signaling: false }) if !a.is_nan() => Some(a),
            _ => None,
        };
        if let Some(number) = lone_number {
            let value = number.fitted(&mut ev);
            return ev.finish(value);
        }
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }

        let mut ord = if magnitude {
            self.abs().numeric_cmp(other.abs())
        } else {
            self.numeric_cmp(other)
        }
        .unwrap_or(Ordering::Equal);
        if ord == Ordering::Equal {
            ord = self.total_cmp(other);
        }

        let pick_self = if want_max {
            ord != Ordering::Less
        } else {
            ord != Ordering::Greater
        };
        let chosen = if pick_self { self } else { other };
        let value = chosen.fitted(&mut ev);
        ev.finish(value)
    }

    fn fitted(self, ev: &mut Eval<'_>) -> Amount {
        match self {
            Amount::Finite(d) => ev.fit(d),
            other => other,
        }
    }

    pub fn max(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.select(other, ctx, false, true)
    }

    pub fn min(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.select(other, ctx, false, false)
    }

    /// The operand with the larger absolute value.
    pub fn max_mag(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.select(other, ctx, true, true)
    }

    /// The operand with the smaller absolute value.
    pub fn min_mag(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.select(other, ctx, true, false)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.numeric_cmp(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.numeric_cmp(*other)
    }
}

// ============================================================================
// Sign Operations
// ============================================================================

impl Amount {
    /// Negation. Exact, never signals.
    #[allow(clippy::should_implement_trait)]
    pub fn neg(self) -> Amount {
        match self {
            Amount::Finite(d) => Amount::Finite(-d),
            Amount::Infinite { negative } => Amount::Infinite {
                negative: !negative,
            },
            nan => nan,
        }
    }

    /// Absolute value. Exact, never signals.
    pub fn abs(self) -> Amount {
        match self {
            Amount::Finite(d) => Amount::Finite(d.abs()),
            Amount::Infinite { .. } => Amount::INFINITY,
            nan => nan,
        }
    }

    /// Unary plus: the value rounded to the context precision.
    pub fn plus(self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self]) {
            return ev.finish(nan);
        }
        let value = self.fitted(&mut ev);
        ev.finish(value)
    }

    /// This value with the sign of `other`.
    pub fn copy_sign(self, other: Self) -> Amount {
        let negative = other.is_signed();
        match self {
            Amount::Finite(mut d) => {
                d.set_sign_negative(negative);
                Amount::Finite(d)
            },
            Amount::Infinite { .. } => Amount::Infinite { negative },
            nan => nan,
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Amount {
    pub fn add(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }

        let value = match (self, other) {
            (Amount::Infinite { negative: a }, Amount::Infinite { negative: b }) => {
                if a == b {
                    self
                } else {
                    ev.invalid()
                }
            },
            (Amount::Infinite { .. }, _) => self,
            (_, Amount::Infinite { .. }) => other,
            (Amount::Finite(x), Amount::Finite(y)) => match x.checked_add(y) {
                Some(sum) => {
                    // The sum only loses scale when it had to be rounded
                    if sum.scale() < x.scale().max(y.scale()) && sum.checked_sub(y) != Some(x) {
                        ev.inexact();
                    }
                    ev.fit(sum)
                },
                None => ev.overflow(x.is_sign_negative()),
            },
            _ => Amount::NAN,
        };
        ev.finish(value)
    }

    pub fn sub(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.add(other.neg(), ctx)
    }

    pub fn mul(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }

        let negative = self.is_signed() != other.is_signed();
        let value = match (self, other) {
            (Amount::Infinite { .. }, b) | (b, Amount::Infinite { .. }) => {
                if b.is_zero() {
                    ev.invalid()
                } else {
                    Amount::Infinite { negative }
                }
            },
            (Amount::Finite(x), Amount::Finite(y)) => match exact_product(x, y) {
                Some(product) => ev.fit(product),
                None => match x.checked_mul(y) {
                    Some(product) => {
                        ev.inexact();
                        ev.fit(product)
                    },
                    None => ev.overflow(negative),
                },
            },
            _ => Amount::NAN,
        };
        ev.finish(value)
    }

    /// True division.
    pub fn div(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }

        let negative = self.is_signed() != other.is_signed();
        let value = match (self, other) {
            (Amount::Infinite { .. }, Amount::Infinite { .. }) => ev.invalid(),
            (Amount::Infinite { .. }, _) => Amount::Infinite { negative },
            (_, Amount::Infinite { .. }) => Amount::ZERO,
            (Amount::Finite(x), Amount::Finite(y)) if y.is_zero() => {
                if x.is_zero() {
                    ev.invalid()
                } else {
                    ev.division_by_zero(negative)
                }
            },
            (Amount::Finite(x), Amount::Finite(y)) => match x.checked_div(y) {
                Some(quotient) => {
                    if exact_product(quotient, y) != Some(x) {
                        ev.inexact();
                    }
                    ev.fit(quotient)
                },
                None => ev.overflow(negative),
            },
            _ => Amount::NAN,
        };
        ev.finish(value)
    }

    /// Integer part of the quotient, truncated toward zero.
    pub fn div_integer(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }

        let negative = self.is_signed() != other.is_signed();
        let value = match (self, other) {
            (Amount::Infinite { .. }, Amount::Infinite { .. }) => ev.invalid(),
            (Amount::Infinite { .. }, _) => Amount::Infinite { negative },
            (_, Amount::Infinite { .. }) => Amount::ZERO,
            (Amount::Finite(x), Amount::Finite(y)) if y.is_zero() => {
                if x.is_zero() {
                    ev.invalid()
                } else {
                    ev.division_by_zero(negative)
                }
            },
            (Amount::Finite(x), Amount::Finite(y)) => match integer_quotient(x, y) {
                Some((quotient, _)) if coefficient_digits(quotient) <= ctx.precision => {
                    Amount::Finite(quotient)
                },
                _ => ev.invalid(),
            },
            _ => Amount::NAN,
        };
        ev.finish(value)
    }

    /// Remainder of truncating division; takes the sign of the dividend.
    pub fn rem(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.remainder(other, ctx, false)
    }

    /// Remainder relative to the nearest (half-even) integer quotient.
    pub fn rem_near(self, other: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.remainder(other, ctx, true)
    }

    fn remainder(self, other: Self, ctx: &Context, near: bool) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, other]) {
            return ev.finish(nan);
        }

        let value = match (self, other) {
            (Amount::Infinite { .. }, _) => ev.invalid(),
            (Amount::Finite(x), Amount::Infinite { .. }) => ev.fit(x),
            (Amount::Finite(_), Amount::Finite(y)) if y.is_zero() => ev.invalid(),
            (Amount::Finite(x), Amount::Finite(y)) => match integer_quotient(x, y) {
                Some((quotient, remainder)) if coefficient_digits(quotient) <= ctx.precision => {
                    let mut remainder = remainder;
                    if near {
                        let twice = remainder.abs() * Decimal::TWO;
                        let quotient_odd = !(quotient % Decimal::TWO).is_zero();
                        if twice > y.abs() || (twice == y.abs() && quotient_odd) {
                            let step = if x.is_sign_negative() { -y.abs() } else { y.abs() };
                            remainder -= step;
                        }
                    }
                    ev.fit(remainder)
                },
                _ => ev.invalid(),
            },
            _ => Amount::NAN,
        };
        ev.finish(value)
    }

    /// `self * multiplier + addend` with a single final rounding.
    pub fn fma(self, multiplier: Self, addend: Self, ctx: &Context) -> MoneyResult<Amount> {
        let full = ctx.with_precision(Context::MAX_PRECISION);
        let product = self.mul(multiplier, &full)?;
        product.add(addend, ctx)
    }
}

// ============================================================================
// Rounding and Scaling
// ============================================================================

impl Amount {
    /// Round to an integral value with the given rounding mode.
    ///
    /// Infinities are returned unchanged.
    pub fn round_integral(self, rounding: Rounding, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self]) {
            return ev.finish(nan);
        }
        let value = match self {
            Amount::Finite(d) => Amount::Finite(rounding.round_dp(d, 0)),
            other => other,
        };
        ev.finish(value)
    }

    /// Round to the given exponent (`-2` means hundredths).
    pub fn quantize(self, exponent: i32, rounding: Rounding, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self]) {
            return ev.finish(nan);
        }
        let value = match self {
            Amount::Finite(d) => match round_to_exponent(d, exponent, rounding) {
                Some(r) if coefficient_digits(r) <= ctx.precision => {
                    if r != d {
                        ev.inexact();
                    } else if r.scale() < d.scale() {
                        ev.raised.insert(Signal::Rounded);
                    }
                    Amount::Finite(r)
                },
                _ => ev.invalid(),
            },
            _ => ev.invalid(),
        };
        ev.finish(value)
    }

    /// Round to the exponent of `target`.
    pub fn quantize_to(self, target: Self, rounding: Rounding, ctx: &Context) -> MoneyResult<Amount> {
        match (self, target) {
            (_, Amount::NaN { .. }) | (Amount::NaN { .. }, _) => {
                let mut ev = Eval::new(ctx)?;
                let nan = ev.nan(&[self, target]).unwrap_or(Amount::NAN);
                ev.finish(nan)
            },
            (Amount::Infinite { .. }, Amount::Infinite { .. }) => Ok(self),
            (_, Amount::Finite(t)) => self.quantize(-(t.scale() as i32), rounding, ctx),
            _ => {
                let mut ev = Eval::new(ctx)?;
                let nan = ev.invalid();
                ev.finish(nan)
            },
        }
    }

    /// Strip trailing zeros after rounding to the context precision.
    pub fn normalize(self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self]) {
            return ev.finish(nan);
        }
        let value = match self.fitted(&mut ev) {
            Amount::Finite(d) => Amount::Finite(d.normalize()),
            other => other,
        };
        ev.finish(value)
    }

    /// Multiply by 10^`exp`, where `exp` must be an integral scalar.
    pub fn scaleb(self, exp: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, exp]) {
            return ev.finish(nan);
        }
        let Some(n) = exp.as_integer() else {
            let nan = ev.invalid();
            return ev.finish(nan);
        };

        let value = match self {
            Amount::Finite(d) => {
                let Some(new_scale) = (d.scale() as i64).checked_sub(n) else {
                    let nan = ev.invalid();
                    return ev.finish(nan);
                };
                if (0..=MAX_SCALE as i64).contains(&new_scale) {
                    let mut scaled = d;
                    match scaled.set_scale(new_scale as u32) {
                        Ok(()) => ev.fit(scaled),
                        Err(_) => ev.invalid(),
                    }
                } else if new_scale < 0 {
                    let factor = u32::try_from(-new_scale).ok().and_then(pow10);
                    let base = Decimal::from_i128_with_scale(d.mantissa(), 0);
                    match factor.and_then(|f| base.checked_mul(f)) {
                        Some(scaled) => ev.fit(scaled),
                        None => ev.overflow(d.is_sign_negative()),
                    }
                } else {
                    // Below the smallest exponent: round into the last place
                    let excess = u32::try_from(new_scale - MAX_SCALE as i64).unwrap_or(u32::MAX);
                    let base = Decimal::from_i128_with_scale(d.mantissa(), 0);
                    let rounded = match pow10(excess) {
                        Some(f) => base.checked_div(f).map(|q| ctx.rounding.round_dp(q, 0)),
                        None => Some(Decimal::ZERO),
                    };
                    match rounded.and_then(|r| Decimal::try_from_i128_with_scale(r.mantissa(), MAX_SCALE).ok()) {
                        Some(scaled) => {
                            ev.inexact();
                            ev.fit(scaled)
                        },
                        None => ev.invalid(),
                    }
                }
            },
            other => other,
        };
        ev.finish(value)
    }

    /// Shift the coefficient digits left (positive) or right (negative)
    /// within the context precision. The exponent is unchanged.
    pub fn shift(self, places: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.move_digits(places, ctx, false)
    }

    /// Rotate the coefficient digits within the context precision.
    pub fn rotate(self, places: Self, ctx: &Context) -> MoneyResult<Amount> {
        self.move_digits(places, ctx, true)
    }

    fn move_digits(self, places: Self, ctx: &Context, rotate: bool) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, places]) {
            return ev.finish(nan);
        }
        let n = match places.as_integer() {
            Some(n) if n.unsigned_abs() <= u64::from(ctx.precision) => n,
            _ => {
                let nan = ev.invalid();
                return ev.finish(nan);
            },
        };

        let value = match self {
            Amount::Finite(d) => {
                let p = ctx.precision;
                let modulus = 10u128.pow(p);
                let c = d.mantissa().unsigned_abs() % modulus;
                let moved = if rotate {
                    let left = if n >= 0 { n as u32 } else { p - n.unsigned_abs() as u32 };
                    let keep = 10u128.pow(p - left);
                    (c % keep) * 10u128.pow(left) + c / keep
                } else if n >= 0 {
                    let k = n as u32;
                    (c % 10u128.pow(p - k)) * 10u128.pow(k)
                } else {
                    c / 10u128.pow(n.unsigned_abs() as u32)
                };
                let signed = if d.is_sign_negative() {
                    -(moved as i128)
                } else {
                    moved as i128
                };
                match Decimal::try_from_i128_with_scale(signed, d.scale()) {
                    Ok(result) => Amount::Finite(result),
                    Err(_) => ev.invalid(),
                }
            },
            other => other,
        };
        ev.finish(value)
    }
}

// ============================================================================
// Neighbouring Values
// ============================================================================

impl Amount {
    /// Largest finite magnitude representable at the context precision.
    fn largest(ctx: &Context) -> Decimal {
        Decimal::from_i128_with_scale(10i128.pow(ctx.precision) - 1, 0)
    }

    /// Smallest representable value greater than this one.
    pub fn next_plus(self, ctx: &Context) -> MoneyResult<Amount> {
        self.next(true, ctx)
    }

    /// Largest representable value smaller than this one.
    pub fn next_minus(self, ctx: &Context) -> MoneyResult<Amount> {
        self.next(false, ctx)
    }

    /// The neighbour of this value in the direction of `target`; equal values
    /// take the sign of `target`.
    pub fn next_toward(self, target: Self, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self, target]) {
            return ev.finish(nan);
        }
        match self.numeric_cmp(target) {
            Some(Ordering::Less) => self.next_plus(ctx),
            Some(Ordering::Greater) => self.next_minus(ctx),
            _ => Ok(self.copy_sign(target)),
        }
    }

    fn next(self, up: bool, ctx: &Context) -> MoneyResult<Amount> {
        let mut ev = Eval::new(ctx)?;
        if let Some(nan) = ev.nan(&[self]) {
            return ev.finish(nan);
        }

        let value = match self {
            Amount::Infinite { negative } if negative == up => {
                let largest = Self::largest(ctx);
                Amount::Finite(if up { -largest } else { largest })
            },
            Amount::Infinite { .. } => self,
            Amount::Finite(d) => {
                let toward_zero = if up {
                    d.is_sign_negative() && !d.is_zero()
                } else {
                    d.is_sign_positive() && !d.is_zero()
                };
                let mut exp = match self.adjusted() {
                    Some(adjusted) if !d.is_zero() => adjusted - (ctx.precision as i32 - 1),
                    _ => -(MAX_SCALE as i32),
                };
                // Leaving a power of ten toward zero lands in the decade below
                if toward_zero && d.normalize().mantissa().unsigned_abs() == 1 {
                    exp -= 1;
                }
                let exp = exp.max(-(MAX_SCALE as i32));

                let stepped = pow10_signed(exp).and_then(|step| {
                    if up {
                        d.checked_add(step)
                    } else {
                        d.checked_sub(step)
                    }
                });
                match stepped {
                    Some(candidate) => {
                        let directed = ctx.with_rounding(if up { Rounding::Floor } else { Rounding::Ceiling });
                        // Rounding back onto the grid is part of the step, not a
                        // reportable condition
                        let mut quiet = Signals::EMPTY;
                        match fit(candidate, &directed, &mut quiet) {
                            Amount::Finite(r) if r.abs() <= Self::largest(ctx) => Amount::Finite(r),
                            _ => ev.overflow(!up),
                        }
                    },
                    None => ev.overflow(!up),
                }
            },
            nan => nan,
        };
        ev.finish(value)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Decimal> for Amount {
    fn from(d: Decimal) -> Self {
        Amount::Finite(d)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(v: $t) -> Self {
                    Amount::Finite(Decimal::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<i128> for Amount {
    type Error = MoneyError;

    fn try_from(v: i128) -> Result<Self, Self::Error> {
        Decimal::try_from_i128_with_scale(v, 0)
            .map(Amount::Finite)
            .map_err(|e| MoneyError::InvalidAmount(format!("{v}: {e}")))
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    /// Parse exactly. Accepts plain and scientific notation as well as
    /// `Infinity`, `-Infinity`, `NaN` and `sNaN` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        match body.to_ascii_lowercase().as_str() {
            "inf" | "infinity" => return Ok(Amount::Infinite { negative }),
            "nan" => return Ok(Amount::NAN),
            "snan" => return Ok(Amount::SNAN),
            _ => {},
        }

        let parsed = if body.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        };
        parsed
            .map(Amount::Finite)
            .map_err(|e| MoneyError::InvalidAmount(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Finite(d) => write!(f, "{d}"),
            Amount::Infinite { negative: false } => write!(f, "Infinity"),
            Amount::Infinite { negative: true } => write!(f, "-Infinity"),
            Amount::NaN { signaling: false } => write!(f, "NaN"),
            Amount::NaN { signaling: true } => write!(f, "sNaN"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(amt("3.140").to_string(), "3.140");
        assert_eq!(amt("-Infinity").to_string(), "-Infinity");
        assert_eq!(amt("nan").to_string(), "NaN");
        assert_eq!(amt("sNaN").to_string(), "sNaN");
        assert_eq!(amt("1.5e2"), Amount::from(150));
        assert!("not_a_number".parse::<Amount>().is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(amt("-0").is_signed());
        assert!(amt("-0").is_zero());
        assert!(Amount::NEG_INFINITY.is_signed());
        assert!(!Amount::NAN.is_signed());
        assert!(Amount::SNAN.is_snan() && !Amount::SNAN.is_qnan());
        assert!(Amount::INFINITY.is_infinite() && !Amount::INFINITY.is_finite());
    }

    #[test]
    fn test_add_and_sub() {
        let ctx = Context::default();
        assert_eq!(amt("100").add(amt("50"), &ctx).unwrap(), Amount::from(150));
        assert_eq!(amt("100").sub(amt("50"), &ctx).unwrap(), Amount::from(50));
        assert_eq!(
            Amount::INFINITY.add(amt("1"), &ctx).unwrap(),
            Amount::INFINITY
        );
    }

    #[test]
    fn test_infinity_minus_infinity() {
        let trapped = Amount::INFINITY.add(Amount::NEG_INFINITY, &Context::default());
        assert_eq!(trapped, Err(MoneyError::Arithmetic(Signal::InvalidOperation)));

        let quiet = Amount::INFINITY
            .add(Amount::NEG_INFINITY, &Context::extended())
            .unwrap();
        assert!(quiet.is_qnan());
    }

    #[test]
    fn test_signaling_nan_operand() {
        let ctx = Context::default();
        assert!(Amount::SNAN.add(amt("1"), &ctx).is_err());
        assert!(Amount::NAN.add(amt("1"), &ctx).unwrap().is_qnan());
    }

    #[test]
    fn test_division() {
        let ctx = Context::default();
        assert_eq!(amt("100").div(amt("2"), &ctx).unwrap(), Amount::from(50));
        assert_eq!(
            amt("1").div(Amount::ZERO, &ctx),
            Err(MoneyError::Arithmetic(Signal::DivisionByZero))
        );
        assert_eq!(
            Amount::ZERO.div(Amount::ZERO, &ctx),
            Err(MoneyError::Arithmetic(Signal::InvalidOperation))
        );
        assert_eq!(
            amt("-1").div(Amount::ZERO, &Context::extended()).unwrap(),
            Amount::NEG_INFINITY
        );
    }

    #[test]
    fn test_division_inexact_trap() {
        let ctx = Context::default().with_trap(Signal::Inexact);
        assert_eq!(
            amt("1").div(amt("3"), &ctx),
            Err(MoneyError::Arithmetic(Signal::Inexact))
        );
        assert!(amt("1").div(amt("4"), &ctx).is_ok());
    }

    #[test]
    fn test_precision_rounding() {
        let ctx = Context::new(5, Rounding::HalfEven);
        assert_eq!(amt("1").div(amt("3"), &ctx).unwrap(), amt("0.33333"));
        assert_eq!(amt("123456").add(Amount::ZERO, &ctx).unwrap(), amt("123460"));
        assert_eq!(amt("99999.9").plus(&ctx).unwrap(), amt("100000"));
    }

    #[test]
    fn test_integer_division_and_remainder() {
        let ctx = Context::default();
        assert_eq!(amt("100").div_integer(amt("30"), &ctx).unwrap(), Amount::from(3));
        assert_eq!(amt("-7").div_integer(amt("2"), &ctx).unwrap(), Amount::from(-3));
        assert_eq!(amt("100").rem(amt("30"), &ctx).unwrap(), Amount::from(10));
        assert_eq!(amt("-7").rem(amt("2"), &ctx).unwrap(), Amount::from(-1));
        assert!(amt("5").rem(Amount::ZERO, &ctx).is_err());
        assert_eq!(amt("5").rem(Amount::INFINITY, &ctx).unwrap(), Amount::from(5));
    }

    #[test]
    fn test_remainder_near() {
        let ctx = Context::default();
        assert_eq!(amt("100").rem_near(amt("30"), &ctx).unwrap(), Amount::from(10));
        assert_eq!(amt("100").rem_near(amt("60"), &ctx).unwrap(), Amount::from(-20));
        // Tie goes to the even quotient: 10 / 4 = 2.5 -> 2
        assert_eq!(amt("10").rem_near(amt("4"), &ctx).unwrap(), Amount::from(2));
        // 6 / 4 = 1.5 -> 2
        assert_eq!(amt("6").rem_near(amt("4"), &ctx).unwrap(), Amount::from(-2));
    }

    #[test]
    fn test_multiplication() {
        let ctx = Context::default();
        assert_eq!(amt("100").mul(amt("5.5"), &ctx).unwrap(), Amount::from(550));
        assert!(Amount::INFINITY.mul(Amount::ZERO, &ctx).is_err());
        assert_eq!(
            Amount::INFINITY.mul(amt("-2"), &ctx).unwrap(),
            Amount::NEG_INFINITY
        );
        let huge = Amount::Finite(Decimal::MAX);
        assert_eq!(
            huge.mul(amt("10"), &ctx),
            Err(MoneyError::Arithmetic(Signal::Overflow))
        );
    }

    #[test]
    fn test_compare_family() {
        let ctx = Context::default();
        assert_eq!(amt("100").compare(amt("50"), &ctx).unwrap(), Amount::ONE);
        assert_eq!(amt("50").compare(amt("50.0"), &ctx).unwrap(), Amount::ZERO);
        assert!(amt("1").compare(Amount::NAN, &ctx).unwrap().is_nan());
        assert!(amt("1").compare_signal(Amount::NAN, &ctx).is_err());

        assert_eq!(amt("1.00").compare_total(amt("1.0")), amt("-1"));
        assert_eq!(amt("-0").compare_total(amt("0")), amt("-1"));
        assert_eq!(amt("1").compare_total(Amount::NAN), amt("-1"));
        assert_eq!(Amount::SNAN.compare_total(Amount::NAN), amt("-1"));
        assert_eq!(amt("-3").compare_total_mag(amt("2")), Amount::ONE);
    }

    #[test]
    fn test_min_max() {
        let ctx = Context::default();
        assert_eq!(amt("1").max(amt("2"), &ctx).unwrap(), Amount::from(2));
        assert_eq!(amt("1").min(amt("2"), &ctx).unwrap(), Amount::from(1));
        assert_eq!(Amount::NAN.max(amt("2"), &ctx).unwrap(), Amount::from(2));
        assert_eq!(amt("-3").max_mag(amt("2"), &ctx).unwrap(), Amount::from(-3));
        assert_eq!(amt("-3").min_mag(amt("2"), &ctx).unwrap(), Amount::from(2));
        assert!(Amount::SNAN.max(amt("2"), &ctx).is_err());
    }

    #[test]
    fn test_copy_sign_and_same_quantum() {
        assert_eq!(amt("5").copy_sign(amt("-1")), amt("-5"));
        assert_eq!(Amount::INFINITY.copy_sign(amt("-1")), Amount::NEG_INFINITY);
        assert!(amt("1.00").same_quantum(amt("2.50")));
        assert!(!amt("1.0").same_quantum(amt("1.00")));
        assert!(Amount::INFINITY.same_quantum(Amount::NEG_INFINITY));
    }

    #[test]
    fn test_quantize() {
        let ctx = Context::default();
        let q = amt("3.14159").quantize(-2, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(q.to_string(), "3.14");
        let q = amt("3").quantize(-2, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(q.to_string(), "3.00");
        let q = amt("1250").quantize(2, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(q, Amount::from(1300));
        assert!(Amount::INFINITY.quantize(-2, Rounding::HalfUp, &ctx).is_err());
        let q = amt("2.5").quantize_to(amt("0.001"), Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(q.to_string(), "2.500");
    }

    #[test]
    fn test_round_integral() {
        let ctx = Context::default();
        let v = amt("-2.5");
        assert_eq!(v.round_integral(Rounding::HalfEven, &ctx).unwrap(), amt("-2"));
        assert_eq!(v.round_integral(Rounding::Floor, &ctx).unwrap(), amt("-3"));
        assert_eq!(v.round_integral(Rounding::Ceiling, &ctx).unwrap(), amt("-2"));
        assert_eq!(v.round_integral(Rounding::Down, &ctx).unwrap(), amt("-2"));
        assert_eq!(
            Amount::INFINITY.round_integral(Rounding::Floor, &ctx).unwrap(),
            Amount::INFINITY
        );
    }

    #[test]
    fn test_next_plus_minus() {
        let ctx = Context::new(5, Rounding::HalfEven);
        assert_eq!(amt("1").next_plus(&ctx).unwrap(), amt("1.0001"));
        assert_eq!(amt("1").next_minus(&ctx).unwrap(), amt("0.99999"));
        assert_eq!(amt("-1").next_plus(&ctx).unwrap(), amt("-0.99999"));
        assert_eq!(amt("1.23456").next_plus(&ctx).unwrap(), amt("1.2346"));
        assert_eq!(Amount::ZERO.next_plus(&ctx).unwrap(), Amount::Finite(Decimal::new(1, 28)));
        assert_eq!(
            Amount::NEG_INFINITY.next_plus(&ctx).unwrap(),
            amt("-99999")
        );
        assert_eq!(
            amt("99999").next_plus(&Context::extended()).unwrap(),
            amt("99999.00000000000000000000001")
        );
    }

    #[test]
    fn test_next_toward() {
        let ctx = Context::new(5, Rounding::HalfEven);
        assert_eq!(amt("1").next_toward(amt("2"), &ctx).unwrap(), amt("1.0001"));
        assert_eq!(amt("1").next_toward(amt("0"), &ctx).unwrap(), amt("0.99999"));
        assert!(amt("0").next_toward(amt("-0"), &ctx).unwrap().is_signed());
    }

    #[test]
    fn test_shift_and_rotate() {
        let ctx = Context::new(9, Rounding::HalfEven);
        assert_eq!(amt("34").shift(amt("8"), &ctx).unwrap(), amt("400000000"));
        assert_eq!(amt("12").shift(amt("9"), &ctx).unwrap(), amt("0"));
        assert_eq!(amt("123456789").shift(amt("-2"), &ctx).unwrap(), amt("1234567"));
        assert_eq!(amt("123456789").rotate(amt("2"), &ctx).unwrap(), amt("345678912"));
        assert_eq!(amt("123456789").rotate(amt("-2"), &ctx).unwrap(), amt("891234567"));
        assert!(amt("1").shift(amt("10"), &ctx).is_err());
        assert!(amt("1").shift(amt("1.5"), &ctx).is_err());
    }

    #[test]
    fn test_scaleb() {
        let ctx = Context::default();
        assert_eq!(amt("7.50").scaleb(amt("2"), &ctx).unwrap(), amt("750"));
        assert_eq!(amt("7.50").scaleb(amt("-2"), &ctx).unwrap(), amt("0.0750"));
        assert_eq!(amt("75").scaleb(amt("3"), &ctx).unwrap(), amt("75000"));
    }

    #[test]
    fn test_operations_validate_context() {
        let wide = Context::default().with_precision(29);
        assert!(matches!(Amount::NEG_INFINITY.next_plus(&wide), Err(MoneyError::InvalidContext(_))));

        let mut huge = Context::default();
        huge.precision = 40;
        assert!(matches!(amt("12").shift(amt("1"), &huge), Err(MoneyError::InvalidContext(_))));
        assert!(matches!(amt("1").add(amt("2"), &huge), Err(MoneyError::InvalidContext(_))));
    }

    #[test]
    fn test_adjusted_exponent() {
        assert_eq!(amt("123.45").adjusted(), Some(2));
        assert_eq!(amt("0.012").adjusted(), Some(-2));
        assert_eq!(amt("7").adjusted(), Some(0));
        assert_eq!(amt("1.00").adjusted(), Some(0));
        assert_eq!(amt("0.00").adjusted(), Some(-2));
        assert_eq!(Amount::INFINITY.adjusted(), None);
    }

    #[test]
    fn test_extreme_exponents_are_errors() {
        let ctx = Context::default();
        let invalid = Err(MoneyError::Arithmetic(Signal::InvalidOperation));
        assert_eq!(amt("7.50").scaleb(Amount::from(i64::MIN), &ctx), invalid);
        assert_eq!(
            amt("7.50").scaleb(Amount::from(i64::MAX), &ctx),
            Err(MoneyError::Arithmetic(Signal::Overflow))
        );
        assert_eq!(amt("12").shift(Amount::from(i64::MIN), &ctx), invalid);
        assert_eq!(amt("12").rotate(Amount::from(i64::MIN), &ctx), invalid);
        assert_eq!(amt("12").shift(Amount::from(i64::MAX), &ctx), invalid);
    }

    #[test]
    fn test_fma() {
        let ctx = Context::default();
        let r = amt("100").fma(amt("2"), amt("5"), &ctx).unwrap();
        assert_eq!(r, Amount::from(205));
    }

    #[test]
    fn test_normalize() {
        let ctx = Context::default();
        assert_eq!(amt("1.500").normalize(&ctx).unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(amt("100.9").to_i128().unwrap(), 100);
        assert_eq!(amt("-100.9").to_i128().unwrap(), -100);
        assert!(Amount::INFINITY.to_i128().is_err());
        assert!((amt("100.1").to_f64() - 100.1).abs() < 1e-9);
        assert_eq!(Amount::from(dec!(1.25)), amt("1.25"));
        assert!(Amount::try_from(i128::MAX).is_err());
    }
}
