// ============================================================================
// Money
// A decimal amount bound to a shared currency
// ============================================================================

use super::ops::{MathOp, Operand, Outcome};
use crate::currency::{quantize_to_denominator, whole_units, Currency, Datum};
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{Amount, Context, Rounding};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::sync::Arc;

/// Target exponent for [`Money::quantize`]
#[derive(Debug, Clone, Copy)]
pub enum QuantizeTarget<'a> {
    /// `-2` rounds to hundredths
    Exponent(i32),
    /// Use the exponent of this amount (same currency required)
    Money(&'a Money),
}

/// An amount of money.
///
/// Operations on two Money values require both to use the same currency
/// (compared by value, not by pointer). Binary operations take the
/// [`Context`] to evaluate under. The operators (`+`, `*`, ...), the
/// `try_*_assign` methods and the exact unary methods use
/// [`Context::default`].
///
/// # Example
/// ```
/// use moneymint::currency::Currency;
/// use std::sync::Arc;
///
/// let eur = Arc::new(Currency::new("EUR", 978).with_denominator(100));
/// let mut total = eur.mint("10.00")?;
/// total.try_add_assign(&eur.mint("2.50")?)?;
/// assert_eq!(total.to_string(), "12.50 EUR");
/// # Ok::<_, moneymint::MoneyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    amount: Amount,
    currency: Arc<Currency>,
}

impl Money {
    pub fn new(amount: Amount, currency: Arc<Currency>) -> Self {
        Self { amount, currency }
    }

    #[inline]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Same currency, different amount
    pub(crate) fn with_amount(&self, amount: Amount) -> Money {
        Money {
            amount,
            currency: Arc::clone(&self.currency),
        }
    }

    pub(crate) fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::MismatchedCurrency {
                left: self.currency.code_alpha3.clone(),
                right: other.currency.code_alpha3.clone(),
            })
        }
    }

    fn money_op(&self, op: MathOp, operand: Operand<'_>, ctx: &Context) -> MoneyResult<Money> {
        self.apply(op, operand, ctx)?.into_money()
    }

    fn scalar_op(&self, op: MathOp, other: &Money, ctx: &Context) -> MoneyResult<Amount> {
        self.apply(op, other.into(), ctx)?.into_scalar()
    }

    fn bool_op(&self, op: MathOp) -> bool {
        matches!(
            self.apply(op, Operand::None, &Context::default()),
            Ok(Outcome::Bool(true))
        )
    }
}

// ============================================================================
// Unary Operations
// ============================================================================

impl Money {
    /// Largest integer not greater than the amount
    pub fn floor(&self) -> MoneyResult<Money> {
        self.money_op(MathOp::Floor, Operand::None, &Context::default())
    }

    /// Smallest integer not less than the amount
    pub fn ceil(&self) -> MoneyResult<Money> {
        self.money_op(MathOp::Ceil, Operand::None, &Context::default())
    }

    /// Integer part, rounding toward zero
    pub fn trunc(&self) -> MoneyResult<Money> {
        self.money_op(MathOp::Trunc, Operand::None, &Context::default())
    }

    /// Nearest integer, ties to even
    pub fn round(&self) -> MoneyResult<Money> {
        self.money_op(MathOp::Round, Operand::None, &Context::default())
    }

    /// Integer part of the amount; fails for infinities and NaNs.
    pub fn to_integer(&self) -> MoneyResult<i128> {
        self.apply(MathOp::ToInteger, Operand::None, &Context::default())?
            .into_integer()
    }

    /// Exponent of the most significant digit; `None` for infinities and
    /// NaNs.
    pub fn adjusted(&self) -> Option<i32> {
        self.amount.adjusted()
    }

    /// Nearest binary float; lossy.
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64()
    }

    pub fn pos(&self) -> MoneyResult<Money> {
        self.money_op(MathOp::Pos, Operand::None, &Context::default())
    }

    pub fn abs(&self) -> MoneyResult<Money> {
        self.money_op(MathOp::Abs, Operand::None, &Context::default())
    }

    pub fn normalize(&self, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Normalize, Operand::None, ctx)
    }

    pub fn next_minus(&self, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::NextMinus, Operand::None, ctx)
    }

    pub fn next_plus(&self, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::NextPlus, Operand::None, ctx)
    }

    pub fn is_finite(&self) -> bool {
        self.bool_op(MathOp::IsFinite)
    }

    pub fn is_infinite(&self) -> bool {
        self.bool_op(MathOp::IsInfinite)
    }

    pub fn is_nan(&self) -> bool {
        self.bool_op(MathOp::IsNan)
    }

    pub fn is_qnan(&self) -> bool {
        self.bool_op(MathOp::IsQnan)
    }

    pub fn is_snan(&self) -> bool {
        self.bool_op(MathOp::IsSnan)
    }

    pub fn is_signed(&self) -> bool {
        self.bool_op(MathOp::IsSigned)
    }

    pub fn is_zero(&self) -> bool {
        self.bool_op(MathOp::IsZero)
    }
}

// ============================================================================
// Binary Operations
// ============================================================================

impl Money {
    /// Sum of two amounts in the same currency.
    pub fn add(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Add, other.into(), ctx)
    }

    pub fn sub(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Sub, other.into(), ctx)
    }

    /// Multiply by a plain number.
    pub fn mul(&self, factor: impl Into<Amount>, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Mul, Operand::Scalar(factor.into()), ctx)
    }

    /// True division. A scalar divisor yields Money, a Money divisor yields
    /// the dimensionless ratio.
    pub fn div<'a>(&self, divisor: impl Into<Operand<'a>>, ctx: &Context) -> MoneyResult<Outcome> {
        self.apply(MathOp::Div, divisor.into(), ctx)
    }

    /// Integer part of the quotient, truncated toward zero. Shaped like
    /// [`div`](Self::div).
    pub fn floor_div<'a>(
        &self,
        divisor: impl Into<Operand<'a>>,
        ctx: &Context,
    ) -> MoneyResult<Outcome> {
        self.apply(MathOp::FloorDiv, divisor.into(), ctx)
    }

    /// Remainder of [`floor_div`](Self::floor_div), with the sign of the
    /// dividend. Always Money.
    pub fn rem<'a>(&self, divisor: impl Into<Operand<'a>>, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Rem, divisor.into(), ctx)
    }

    /// Remainder relative to the nearest integer quotient. Always Money.
    pub fn remainder_near<'a>(
        &self,
        divisor: impl Into<Operand<'a>>,
        ctx: &Context,
    ) -> MoneyResult<Money> {
        self.money_op(MathOp::RemainderNear, divisor.into(), ctx)
    }

    /// Quotient and remainder together.
    pub fn divmod<'a>(
        &self,
        divisor: impl Into<Operand<'a>>,
        ctx: &Context,
    ) -> MoneyResult<(Outcome, Money)> {
        self.apply(MathOp::DivMod, divisor.into(), ctx)?.into_pair()
    }

    pub fn shift(&self, places: impl Into<Amount>, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Shift, Operand::Scalar(places.into()), ctx)
    }

    pub fn scaleb(&self, exp: impl Into<Amount>, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Scaleb, Operand::Scalar(exp.into()), ctx)
    }

    pub fn rotate(&self, places: impl Into<Amount>, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Rotate, Operand::Scalar(places.into()), ctx)
    }

    /// -1, 0 or 1 as a scalar; NaN if either amount is NaN.
    pub fn compare(&self, other: &Money, ctx: &Context) -> MoneyResult<Amount> {
        self.scalar_op(MathOp::Compare, other, ctx)
    }

    pub fn compare_signal(&self, other: &Money, ctx: &Context) -> MoneyResult<Amount> {
        self.scalar_op(MathOp::CompareSignal, other, ctx)
    }

    pub fn compare_total(&self, other: &Money, ctx: &Context) -> MoneyResult<Amount> {
        self.scalar_op(MathOp::CompareTotal, other, ctx)
    }

    pub fn compare_total_mag(&self, other: &Money, ctx: &Context) -> MoneyResult<Amount> {
        self.scalar_op(MathOp::CompareTotalMag, other, ctx)
    }

    pub fn same_quantum(&self, other: &Money, ctx: &Context) -> MoneyResult<bool> {
        self.apply(MathOp::SameQuantum, other.into(), ctx)?
            .into_bool()
    }

    pub fn max(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Max, other.into(), ctx)
    }

    pub fn max_mag(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::MaxMag, other.into(), ctx)
    }

    pub fn min(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::Min, other.into(), ctx)
    }

    pub fn min_mag(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::MinMag, other.into(), ctx)
    }

    pub fn copy_sign(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::CopySign, other.into(), ctx)
    }

    pub fn next_toward(&self, other: &Money, ctx: &Context) -> MoneyResult<Money> {
        self.money_op(MathOp::NextToward, other.into(), ctx)
    }

    /// `self * multiplier + addend` with a single rounding.
    pub fn fma(
        &self,
        multiplier: impl Into<Amount>,
        addend: &Money,
        ctx: &Context,
    ) -> MoneyResult<Money> {
        self.ensure_same_currency(addend)?;
        let amount = self.amount.fma(multiplier.into(), addend.amount, ctx)?;
        Ok(self.with_amount(amount))
    }

    /// Round the amount to a target exponent.
    pub fn quantize(
        &self,
        target: QuantizeTarget<'_>,
        rounding: Rounding,
        ctx: &Context,
    ) -> MoneyResult<Money> {
        let amount = match target {
            QuantizeTarget::Exponent(exp) => self.amount.quantize(exp, rounding, ctx)?,
            QuantizeTarget::Money(other) => {
                self.ensure_same_currency(other)?;
                self.amount.quantize_to(other.amount, rounding, ctx)?
            },
        };
        Ok(self.with_amount(amount))
    }
}

// ============================================================================
// Augmented Assignment
// ============================================================================

impl Money {
    fn assign(&mut self, op: MathOp, operand: Operand<'_>) -> MoneyResult<&mut Self> {
        let result = self.money_op(op, operand, &Context::default())?;
        self.amount = result.amount;
        Ok(self)
    }

    /// `self += other`. On failure `self` is unchanged.
    pub fn try_add_assign(&mut self, other: &Money) -> MoneyResult<&mut Self> {
        self.assign(MathOp::AddAssign, other.into())
    }

    /// `self -= other`. On failure `self` is unchanged.
    pub fn try_sub_assign(&mut self, other: &Money) -> MoneyResult<&mut Self> {
        self.assign(MathOp::SubAssign, other.into())
    }

    pub fn try_mul_assign(&mut self, factor: impl Into<Amount>) -> MoneyResult<&mut Self> {
        self.assign(MathOp::MulAssign, Operand::Scalar(factor.into()))
    }

    pub fn try_div_assign(&mut self, divisor: impl Into<Amount>) -> MoneyResult<&mut Self> {
        self.assign(MathOp::DivAssign, Operand::Scalar(divisor.into()))
    }

    pub fn try_floor_div_assign(&mut self, divisor: impl Into<Amount>) -> MoneyResult<&mut Self> {
        self.assign(MathOp::FloorDivAssign, Operand::Scalar(divisor.into()))
    }

    pub fn try_rem_assign(&mut self, divisor: impl Into<Amount>) -> MoneyResult<&mut Self> {
        self.assign(MathOp::RemAssign, Operand::Scalar(divisor.into()))
    }
}

// ============================================================================
// Rounding to Currency Units
// ============================================================================

impl Money {
    fn denominator(&self) -> Option<u32> {
        match self.currency.minor_unit_denominator {
            Datum::Known(d) => Some(d),
            Datum::Unknown | Datum::NotApplicable => None,
        }
    }

    /// Round to a multiple of the minor unit `1/d`. Currencies without a
    /// known denominator return an equal copy.
    pub fn round_to_minor(&self, rounding: Rounding) -> MoneyResult<Money> {
        match self.denominator() {
            Some(d) => {
                let amount = quantize_to_denominator(self.amount, d, rounding, &Context::default())?;
                Ok(self.with_amount(amount))
            },
            None => Ok(self.clone()),
        }
    }

    /// Round to whole major units. Currencies without a known denominator
    /// return an equal copy.
    pub fn round_to_major(&self, rounding: Rounding) -> MoneyResult<Money> {
        match self.denominator() {
            Some(_) => {
                let amount = self.amount.round_integral(rounding, &Context::default())?;
                Ok(self.with_amount(amount))
            },
            None => Ok(self.clone()),
        }
    }

    /// Round to the decimal places needed to write the minor unit (one place
    /// for a denominator of 5, two for 100).
    pub fn round_to_decimal(&self, rounding: Rounding) -> MoneyResult<Money> {
        match (self.currency.decimal_places(), self.amount) {
            (Some(places), Amount::Finite(_)) => {
                let amount = self.amount.quantize(-(places as i32), rounding, &Context::default())?;
                Ok(self.with_amount(amount))
            },
            _ => Ok(self.clone()),
        }
    }

    /// True if the amount is a whole number of minor units. Without a known
    /// denominator any finite amount qualifies.
    ///
    /// With a denominator such as 3 the minor unit is held to the context
    /// precision, so `0.6666666666666666666666666667` counts as two units.
    pub fn is_nominal_division(&self) -> bool {
        if !self.amount.is_finite() {
            return false;
        }
        match self.denominator() {
            Some(d) => matches!(
                whole_units(self.amount, Amount::from(d), &Context::default()),
                Ok(Some(_))
            ),
            None => true,
        }
    }

    /// True if the amount is a whole number of major units.
    pub fn is_nominal_major(&self) -> bool {
        matches!(self.amount, Amount::Finite(value) if value.fract().is_zero())
    }
}

// ============================================================================
// Comparison and Display
// ============================================================================

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl PartialOrd for Money {
    /// Only defined within one currency
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            self.amount.partial_cmp(&other.amount)
        } else {
            None
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code_alpha3)
    }
}

// ============================================================================
// Operator Front-ends
// ============================================================================

impl Add for &Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: Self) -> Self::Output {
        Money::add(self, rhs, &Context::default())
    }
}

impl Sub for &Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::sub(self, rhs, &Context::default())
    }
}

impl Neg for &Money {
    type Output = MoneyResult<Money>;

    fn neg(self) -> Self::Output {
        self.money_op(MathOp::Neg, Operand::None, &Context::default())
    }
}

impl Div for &Money {
    type Output = MoneyResult<Amount>;

    fn div(self, rhs: Self) -> Self::Output {
        Money::div(self, rhs, &Context::default())?.into_scalar()
    }
}

impl Rem for &Money {
    type Output = MoneyResult<Money>;

    fn rem(self, rhs: Self) -> Self::Output {
        Money::rem(self, rhs, &Context::default())
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for &Money {
                type Output = MoneyResult<Money>;

                fn mul(self, rhs: $t) -> Self::Output {
                    Money::mul(self, rhs, &Context::default())
                }
            }

            impl Mul<&Money> for $t {
                type Output = MoneyResult<Money>;

                fn mul(self, rhs: &Money) -> Self::Output {
                    Money::mul(rhs, self, &Context::default())
                }
            }

            impl Div<$t> for &Money {
                type Output = MoneyResult<Money>;

                fn div(self, rhs: $t) -> Self::Output {
                    Money::div(self, rhs, &Context::default())?.into_money()
                }
            }

            impl Rem<$t> for &Money {
                type Output = MoneyResult<Money>;

                fn rem(self, rhs: $t) -> Self::Output {
                    Money::rem(self, rhs, &Context::default())
                }
            }
        )*
    };
}

impl_scalar_ops!(Amount, Decimal, i32, i64, u32, u64);
