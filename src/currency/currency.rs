// ============================================================================
// Currency
// Immutable currency value with codes, minor unit and validity window
// ============================================================================

use super::datum::Datum;
use super::mint::{MintInput, MintOptions};
use crate::error::MoneyResult;
use crate::money::Money;
use crate::numeric::Amount;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One currency, or one historical predecessor of a currency.
///
/// Equality and hashing only look at the identity-bearing fields: both codes,
/// the minor unit denominator and the validity window. `name` and `entities`
/// are descriptive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    pub code_alpha3: String,
    pub code_num: u16,
    pub minor_unit_denominator: Datum<u32>,
    pub name: Datum<String>,
    pub entities: BTreeSet<String>,
    pub approx_active_from: Datum<NaiveDate>,
    pub approx_active_until: Datum<NaiveDate>,
}

impl Currency {
    /// Create a currency that is still active, with every optional field
    /// unknown.
    pub fn new(code_alpha3: impl Into<String>, code_num: u16) -> Self {
        Self {
            code_alpha3: code_alpha3.into(),
            code_num,
            minor_unit_denominator: Datum::Unknown,
            name: Datum::Unknown,
            entities: BTreeSet::new(),
            approx_active_from: Datum::Unknown,
            approx_active_until: Datum::NotApplicable,
        }
    }

    /// Builder method: Set minor units per major unit
    pub fn with_denominator(mut self, denominator: u32) -> Self {
        self.minor_unit_denominator = Datum::Known(denominator);
        self
    }

    /// Builder method: Mark the currency as continuous (no minor unit)
    pub fn continuous(mut self) -> Self {
        self.minor_unit_denominator = Datum::NotApplicable;
        self
    }

    /// Builder method: Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Datum::Known(name.into());
        self
    }

    /// Builder method: Add an entity (region) using this currency
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entities.insert(entity.into());
        self
    }

    /// Builder method: Set the first day of validity
    pub fn active_from(mut self, date: NaiveDate) -> Self {
        self.approx_active_from = Datum::Known(date);
        self
    }

    /// Builder method: Set the last day of validity
    pub fn active_until(mut self, date: NaiveDate) -> Self {
        self.approx_active_until = Datum::Known(date);
        self
    }

    /// Builder method: Withdrawn at an unknown date
    pub fn withdrawn(mut self) -> Self {
        self.approx_active_until = Datum::Unknown;
        self
    }

    // ========================================================================
    // Validity Window
    // ========================================================================

    /// Still in circulation: no end of validity applies.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.approx_active_until.is_not_applicable()
    }

    /// Window bounds, `None` meaning open on that side.
    pub fn active_window(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (
            self.approx_active_from.known().copied(),
            self.approx_active_until.known().copied(),
        )
    }

    /// True if `date` lies within `[from, until]`; bounds that are not known
    /// are open.
    pub fn was_active_at(&self, date: NaiveDate) -> bool {
        let (from, until) = self.active_window();
        from.map_or(true, |f| f <= date) && until.map_or(true, |u| date <= u)
    }

    /// True if the two closed windows share at least one day.
    pub fn windows_overlap(&self, other: &Currency) -> bool {
        let (from_a, until_a) = self.active_window();
        let (from_b, until_b) = other.active_window();
        let a_starts_before_b_ends = match (from_a, until_b) {
            (Some(f), Some(u)) => f <= u,
            _ => true,
        };
        let b_starts_before_a_ends = match (from_b, until_a) {
            (Some(f), Some(u)) => f <= u,
            _ => true,
        };
        a_starts_before_b_ends && b_starts_before_a_ends
    }

    // ========================================================================
    // Units
    // ========================================================================

    /// The smallest unit, `1/d`, when the denominator is known.
    pub fn minor_unit(&self) -> Option<Amount> {
        let d = *self.minor_unit_denominator.known()?;
        Decimal::ONE.checked_div(Decimal::from(d)).map(Amount::Finite)
    }

    /// Decimal places needed to express the minor unit: the smallest `k` with
    /// `10^k >= d`.
    pub fn decimal_places(&self) -> Option<u32> {
        self.minor_unit_denominator.known().map(|&d| places_for_denominator(d))
    }

    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint money in this currency without quantization.
    pub fn mint(self: &Arc<Self>, amount: impl Into<MintInput>) -> MoneyResult<Money> {
        self.mint_with(amount, &MintOptions::default())
    }

    /// Mint money in this currency. `options.on_date` is not used since the
    /// currency is already resolved.
    pub fn mint_with(
        self: &Arc<Self>,
        amount: impl Into<MintInput>,
        options: &MintOptions,
    ) -> MoneyResult<Money> {
        let amount = super::mint::mint_amount(amount.into(), self, options)?;
        Ok(Money::new(amount, Arc::clone(self)))
    }
}

/// Smallest `k` with `10^k >= denominator`
pub(crate) fn places_for_denominator(denominator: u32) -> u32 {
    let mut places = 0;
    let mut power = 1u64;
    while power < u64::from(denominator) {
        power *= 10;
        places += 1;
    }
    places
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code_alpha3 == other.code_alpha3
            && self.code_num == other.code_num
            && self.minor_unit_denominator == other.minor_unit_denominator
            && self.approx_active_from == other.approx_active_from
            && self.approx_active_until == other.approx_active_until
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code_alpha3.hash(state);
        self.code_num.hash(state);
        self.minor_unit_denominator.hash(state);
        self.approx_active_from.hash(state);
        self.approx_active_until.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_alpha3)
    }
}
