//! Property-based tests for currency and money invariants
//!
//! These tests use proptest to verify:
//! - Validity windows: activity and date containment follow the bounds
//! - Minting: exact inputs keep their value, floats heal to their shortest form
//! - Rounding: minor-unit rounding is idempotent and lands on a nominal division
//! - Currency safety: failed operations never change the receiver
//! - Temporal lookup: reused numeric codes resolve to the covering window

use chrono::{Duration, NaiveDate};
use moneymint::currency::{Currency, CurrencySet, Datum, MintOptions};
use moneymint::numeric::{Amount, Rounding};
use moneymint::MoneyError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap()
}

/// Strategy for generating dates between 1950 and roughly 2080
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..48_000).prop_map(|days| epoch() + Duration::days(days))
}

/// Strategy for generating decimals with up to six fractional digits
fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for generating minor unit denominators
fn denominator_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(1u32),
        Just(2),
        Just(3),
        Just(5),
        Just(7),
        Just(10),
        Just(20),
        Just(25),
        Just(100),
        Just(1000),
    ]
}

/// Strategy for generating rounding modes
fn rounding_strategy() -> impl Strategy<Value = Rounding> {
    prop_oneof![
        Just(Rounding::Up),
        Just(Rounding::Down),
        Just(Rounding::Ceiling),
        Just(Rounding::Floor),
        Just(Rounding::HalfUp),
        Just(Rounding::HalfDown),
        Just(Rounding::HalfEven),
        Just(Rounding::ZeroFiveUp),
    ]
}

/// Strategy for generating a window bound
fn bound_strategy() -> impl Strategy<Value = Datum<NaiveDate>> {
    prop_oneof![
        Just(Datum::Unknown),
        Just(Datum::NotApplicable),
        date_strategy().prop_map(Datum::Known),
    ]
}

fn currency(denominator: u32) -> Arc<Currency> {
    Arc::new(Currency::new("XTS", 963).with_denominator(denominator))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A currency is active exactly when no end of validity applies
    #[test]
    fn prop_active_iff_until_not_applicable(until in bound_strategy()) {
        let mut c = Currency::new("XTS", 963);
        c.approx_active_until = until;
        prop_assert_eq!(c.is_active(), until.is_not_applicable());
    }

    /// Date containment treats unknown and absent bounds as open
    #[test]
    fn prop_was_active_at_follows_bounds(
        from in bound_strategy(),
        until in bound_strategy(),
        date in date_strategy(),
    ) {
        let mut c = Currency::new("XTS", 963);
        c.approx_active_from = from;
        c.approx_active_until = until;

        let after_start = from.known().map_or(true, |f| *f <= date);
        let before_end = until.known().map_or(true, |u| date <= *u);
        prop_assert_eq!(c.was_active_at(date), after_start && before_end);
    }

    /// Exact decimal input never changes its value on mint
    #[test]
    fn prop_exact_mint_preserves_value(value in decimal_strategy(), denominator in denominator_strategy()) {
        let money = currency(denominator).mint(value).unwrap();
        prop_assert_eq!(money.amount(), Amount::from(value));
        prop_assert_eq!(money.amount().exponent(), Some(-(value.scale() as i32)));
    }

    /// Floats built from whole cents heal back to those cents
    #[test]
    fn prop_float_heals_to_cents(cents in -999_999_999i64..999_999_999i64) {
        let value = cents as f64 / 100.0;
        let money = currency(100).mint(value).unwrap();
        prop_assert_eq!(money.amount(), Amount::from(Decimal::new(cents, 2)));
    }

    /// Minor-unit rounding is idempotent and yields a nominal division
    #[test]
    fn prop_round_to_minor_idempotent(
        value in decimal_strategy(),
        denominator in denominator_strategy(),
        rounding in rounding_strategy(),
    ) {
        let money = currency(denominator).mint(value).unwrap();
        let once = money.round_to_minor(rounding).unwrap();
        let twice = once.round_to_minor(rounding).unwrap();

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.is_nominal_division());
    }

    /// Quantizing on mint matches rounding afterwards
    #[test]
    fn prop_quantized_mint_matches_round(value in decimal_strategy(), denominator in denominator_strategy()) {
        let c = currency(denominator);
        let options = MintOptions::default().quantized();
        let quantized = c.mint_with(value, &options).unwrap();
        let rounded = c.mint(value).unwrap().round_to_minor(Rounding::HalfUp).unwrap();
        prop_assert_eq!(quantized, rounded);
    }

    /// Adding then subtracting the same amount restores the original
    #[test]
    fn prop_add_sub_inverse(a in decimal_strategy(), b in decimal_strategy()) {
        let c = currency(100);
        let (ma, mb) = (c.mint(a).unwrap(), c.mint(b).unwrap());
        let back = (&(&ma + &mb).unwrap() - &mb).unwrap();
        prop_assert_eq!(back, ma);
    }

    /// A rejected augmented operation leaves the receiver unchanged
    #[test]
    fn prop_mismatch_leaves_receiver(a in decimal_strategy(), b in decimal_strategy()) {
        let eur = Arc::new(Currency::new("EUR", 978).with_denominator(100));
        let usd = Arc::new(Currency::new("USD", 840).with_denominator(100));

        let mut total = eur.mint(a).unwrap();
        let before = total.clone();
        let err = total.try_add_assign(&usd.mint(b).unwrap()).unwrap_err();

        let is_mismatch = matches!(err, MoneyError::MismatchedCurrency { .. });
        prop_assert!(is_mismatch);
        prop_assert_eq!(total, before);
    }

    /// Every date inside a window resolves a reused numeric code to that
    /// window's currency
    #[test]
    fn prop_numeric_code_resolves_by_window(
        lengths in prop::collection::vec(1i64..5_000, 2..5),
        pick in 0usize..4,
        offset in 0i64..5_000,
    ) {
        let mut start = epoch();
        let mut records = Vec::new();
        for (i, length) in lengths.iter().enumerate() {
            let until = start + Duration::days(length - 1);
            records.push(
                Currency::new(format!("Q{i:02}"), 180)
                    .active_from(start)
                    .active_until(until),
            );
            start = until + Duration::days(1);
        }
        let set = CurrencySet::new(records).unwrap();

        let is_ambiguous = matches!(set.get(180u16, None), Err(MoneyError::AmbiguousCode { .. }));
        prop_assert!(is_ambiguous);

        let index = pick % lengths.len();
        let window_start = epoch() + Duration::days(lengths[..index].iter().sum::<i64>());
        let date = window_start + Duration::days(offset % lengths[index]);
        let found = set.get(180u16, Some(date)).unwrap();
        prop_assert_eq!(found.code_alpha3.clone(), format!("Q{index:02}"));
    }
}
