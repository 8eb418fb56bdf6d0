// ============================================================================
// Minting Pipeline
// Exact conversion of raw inputs, float healing and unit quantization
// ============================================================================

use super::currency::{places_for_denominator, Currency};
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{Amount, Context, Rounding};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Mint Input
// ============================================================================

/// A raw amount handed to `mint`.
///
/// Integers, decimals and strings convert exactly. Binary floats are healed
/// through their shortest round-trip text form, so `3.14f64` becomes exactly
/// `3.14` instead of `3.140000000000000124344978758017532527446746826171875`.
#[derive(Debug, Clone, PartialEq)]
pub enum MintInput {
    Exact(Amount),
    Text(String),
    Float(f64),
    Float32(f32),
    /// Conversion already failed (e.g. an integer beyond the decimal range)
    Invalid(String),
}

impl MintInput {
    /// Resolve to an exact amount.
    pub fn into_amount(self) -> MoneyResult<Amount> {
        match self {
            MintInput::Exact(amount) => Ok(amount),
            MintInput::Text(text) => text.parse(),
            MintInput::Float(value) => heal_float(value),
            MintInput::Float32(value) => heal_float32(value),
            MintInput::Invalid(reason) => Err(MoneyError::InvalidAmount(reason)),
        }
    }
}

macro_rules! impl_exact_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MintInput {
                fn from(v: $t) -> Self {
                    MintInput::Exact(Amount::from(v))
                }
            }
        )*
    };
}

impl_exact_input!(i32, i64, u32, u64, Decimal);

impl From<i128> for MintInput {
    fn from(v: i128) -> Self {
        match Amount::try_from(v) {
            Ok(amount) => MintInput::Exact(amount),
            Err(e) => MintInput::Invalid(e.to_string()),
        }
    }
}

impl From<Amount> for MintInput {
    fn from(amount: Amount) -> Self {
        MintInput::Exact(amount)
    }
}

impl From<&str> for MintInput {
    fn from(s: &str) -> Self {
        MintInput::Text(s.to_string())
    }
}

impl From<String> for MintInput {
    fn from(s: String) -> Self {
        MintInput::Text(s)
    }
}

impl From<f64> for MintInput {
    fn from(v: f64) -> Self {
        MintInput::Float(v)
    }
}

impl From<f32> for MintInput {
    fn from(v: f32) -> Self {
        MintInput::Float32(v)
    }
}

// ============================================================================
// Float Healing
// ============================================================================

fn heal<F: Display>(value: F, is_nan: bool, is_infinite: bool, negative: bool) -> MoneyResult<Amount> {
    if is_nan {
        return Ok(Amount::NAN);
    }
    if is_infinite {
        return Ok(Amount::Infinite { negative });
    }
    // Display for floats prints the shortest digits that read back to the
    // same bits, never in exponent form
    let text = value.to_string();
    Decimal::from_str_exact(&text)
        .map(Amount::Finite)
        .map_err(|e| MoneyError::InvalidAmount(format!("{text}: {e}")))
}

/// Convert a binary float to the decimal it was written as.
///
/// # Errors
/// `InvalidAmount` when the value needs more digits than a decimal holds
/// (e.g. `1e300`).
pub fn heal_float(value: f64) -> MoneyResult<Amount> {
    heal(value, value.is_nan(), value.is_infinite(), value.is_sign_negative())
}

/// [`heal_float`] for `f32`, using the `f32` shortest representation.
pub fn heal_float32(value: f32) -> MoneyResult<Amount> {
    heal(value, value.is_nan(), value.is_infinite(), value.is_sign_negative())
}

// ============================================================================
// Quantization
// ============================================================================

/// Round `amount` to the nearest multiple of `1/denominator`.
///
/// Non-finite amounts and a zero denominator are returned unchanged. When the
/// denominator is a power of ten the result carries the matching number of
/// decimal places (`3` with `d = 100` becomes `3.00`).
pub fn quantize_to_denominator(
    amount: Amount,
    denominator: u32,
    rounding: Rounding,
    ctx: &Context,
) -> MoneyResult<Amount> {
    if !amount.is_finite() || denominator == 0 {
        return Ok(amount);
    }

    let d = Amount::from(denominator);
    let units = match whole_units(amount, d, ctx)? {
        Some(units) => units,
        None => amount.mul(d, ctx)?.round_integral(rounding, ctx)?,
    };
    let quantized = units.div(d, ctx)?;

    let places = places_for_denominator(denominator);
    Ok(match quantized {
        Amount::Finite(mut value) if value.scale() < places => {
            value.rescale(places);
            Amount::Finite(value)
        },
        other => other,
    })
}

/// The number of `1/d` units in `amount`, if it is a whole number.
///
/// Fractions such as 1/3 are only held to the context precision, so the
/// amount qualifies when dividing the nearest unit count reproduces it.
pub(crate) fn whole_units(amount: Amount, d: Amount, ctx: &Context) -> MoneyResult<Option<Amount>> {
    let nearest = amount.mul(d, ctx)?.round_integral(Rounding::HalfEven, ctx)?;
    let back = nearest.div(d, ctx)?;
    Ok((back == amount).then_some(nearest))
}

// ============================================================================
// Mint Options
// ============================================================================

/// Options for minting money.
///
/// # Example
/// ```
/// use moneymint::currency::MintOptions;
/// use moneymint::numeric::Rounding;
///
/// let options = MintOptions::default()
///     .quantized()
///     .with_rounding(Rounding::HalfEven);
/// assert!(options.quantize_to_minor);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MintOptions {
    /// Date used to disambiguate reused numeric codes
    pub on_date: Option<NaiveDate>,

    /// Round to the currency's minor unit after conversion
    pub quantize_to_minor: bool,

    /// Rounding for the quantization step (half-up by default)
    pub rounding: Rounding,

    /// Context for the quantization arithmetic
    pub context: Context,
}

impl MintOptions {
    /// Builder method: Resolve numeric codes as of `date`
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.on_date = Some(date);
        self
    }

    /// Builder method: Quantize to the minor unit
    pub fn quantized(mut self) -> Self {
        self.quantize_to_minor = true;
        self
    }

    /// Builder method: Set quantization rounding
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Set arithmetic context
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        self.context.validate()
    }
}

/// Convert `input` and, when requested and the denominator is known,
/// quantize it to the currency's minor unit.
pub(crate) fn mint_amount(
    input: MintInput,
    currency: &Currency,
    options: &MintOptions,
) -> MoneyResult<Amount> {
    options.validate()?;
    let amount = input.into_amount()?;

    match (options.quantize_to_minor, currency.minor_unit_denominator.known()) {
        (true, Some(&d)) => {
            let quantized = quantize_to_denominator(amount, d, options.rounding, &options.context)?;
            tracing::trace!(
                currency = %currency,
                denominator = d,
                from = %amount,
                to = %quantized,
                "quantized minted amount"
            );
            Ok(quantized)
        },
        _ => Ok(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_heal_float() {
        assert_eq!(heal_float(3.14).unwrap().to_string(), "3.14");
        assert_eq!(heal_float(0.1 + 0.2).unwrap().to_string(), "0.30000000000000004");
        assert_eq!(heal_float(-2.5).unwrap(), Amount::from(dec!(-2.5)));
        assert_eq!(heal_float32(3.14f32).unwrap().to_string(), "3.14");

        // The naive conversion keeps the binary noise
        let naive = Decimal::from_f64_retain(3.14).unwrap();
        assert_ne!(naive, dec!(3.14));
    }

    #[test]
    fn test_heal_float_specials() {
        assert!(heal_float(f64::NAN).unwrap().is_qnan());
        assert_eq!(heal_float(f64::NEG_INFINITY).unwrap(), Amount::NEG_INFINITY);
        assert!(heal_float(1e300).is_err());
    }

    #[test]
    fn test_exact_inputs() {
        assert_eq!(MintInput::from(42i32).into_amount().unwrap(), Amount::from(42));
        assert_eq!(
            MintInput::from("100.10").into_amount().unwrap().to_string(),
            "100.10"
        );
        assert_eq!(
            MintInput::from(dec!(1.005)).into_amount().unwrap(),
            Amount::from(dec!(1.005))
        );
        assert!(MintInput::from("12abc").into_amount().is_err());
        assert!(MintInput::from(i128::MAX).into_amount().is_err());
        assert!(MintInput::from("-Infinity").into_amount().unwrap().is_infinite());
    }

    #[test]
    fn test_quantize_to_denominator() {
        let ctx = Context::default();
        let value = Amount::from(dec!(3.1415));
        let cents = quantize_to_denominator(value, 100, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(cents.to_string(), "3.14");

        let fifths = quantize_to_denominator(value, 5, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(fifths, Amount::from(dec!(3.2)));

        let whole = quantize_to_denominator(Amount::from(3), 100, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(whole.to_string(), "3.00");

        let half_up = quantize_to_denominator(Amount::from(dec!(0.125)), 100, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(half_up, Amount::from(dec!(0.13)));
        let half_even =
            quantize_to_denominator(Amount::from(dec!(0.125)), 100, Rounding::HalfEven, &ctx).unwrap();
        assert_eq!(half_even, Amount::from(dec!(0.12)));
    }

    #[test]
    fn test_quantize_keeps_rounded_thirds() {
        let ctx = Context::default();
        let third = quantize_to_denominator(Amount::from(dec!(0.4)), 3, Rounding::Down, &ctx).unwrap();
        assert_eq!(third, Amount::from(dec!(0.3333333333333333333333333333)));

        // 0.333...3 * 3 falls just short of 1 but is already one whole unit
        let again = quantize_to_denominator(third, 3, Rounding::Down, &ctx).unwrap();
        assert_eq!(again, third);
        assert_eq!(whole_units(third, Amount::from(3), &ctx).unwrap(), Some(Amount::ONE));
        assert_eq!(whole_units(Amount::from(dec!(0.4)), Amount::from(3), &ctx).unwrap(), None);
    }

    #[test]
    fn test_quantize_leaves_specials() {
        let ctx = Context::default();
        let inf = quantize_to_denominator(Amount::INFINITY, 100, Rounding::HalfUp, &ctx).unwrap();
        assert_eq!(inf, Amount::INFINITY);
    }

    #[test]
    fn test_mint_options_builder() {
        let date = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
        let options = MintOptions::default().on(date).quantized();
        assert_eq!(options.on_date, Some(date));
        assert!(options.quantize_to_minor);
        assert_eq!(options.rounding, Rounding::HalfUp);
        assert!(options.validate().is_ok());
        assert!(MintOptions::default()
            .with_context(Context::default().with_precision(0))
            .validate()
            .is_err());
    }
}
