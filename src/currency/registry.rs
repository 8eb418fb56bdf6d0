// ============================================================================
// Currency Set
// Immutable registry with alphabetic and date-aware numeric lookup
// ============================================================================

use super::currency::Currency;
use super::mint::{MintInput, MintOptions};
use crate::error::{MoneyError, MoneyResult};
use crate::interfaces::CurrencySource;
use crate::money::Money;
use chrono::NaiveDate;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Numeric codes are rarely reused more than once or twice
type Candidates = SmallVec<[Arc<Currency>; 2]>;

// ============================================================================
// Currency Code
// ============================================================================

/// A lookup key: either the alphabetic or the numeric code.
///
/// Strings made only of ASCII digits (`"978"`) are read as numeric codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    Alpha(String),
    Numeric(u16),
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        let numeric = !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit());
        match code.parse::<u16>() {
            Ok(num) if numeric => CurrencyCode::Numeric(num),
            _ => CurrencyCode::Alpha(code.to_string()),
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        CurrencyCode::from(code.as_str())
    }
}

impl From<&String> for CurrencyCode {
    fn from(code: &String) -> Self {
        CurrencyCode::from(code.as_str())
    }
}

impl From<u16> for CurrencyCode {
    fn from(code: u16) -> Self {
        CurrencyCode::Numeric(code)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyCode::Alpha(code) => write!(f, "{code}"),
            CurrencyCode::Numeric(code) => write!(f, "{code:03}"),
        }
    }
}

// ============================================================================
// Currency Set
// ============================================================================

/// An immutable set of currencies, indexed by both codes.
///
/// Construction enforces the registry invariants: alphabetic codes are
/// unique, and a numeric code may only be shared by currencies whose
/// validity windows do not overlap. Once built the set is never mutated and
/// can be shared freely across threads.
///
/// # Example
/// ```
/// use moneymint::currency::{Currency, CurrencySet};
///
/// let set = CurrencySet::new([
///     Currency::new("EUR", 978).with_denominator(100),
///     Currency::new("USD", 840).with_denominator(100),
/// ])?;
/// let eur = set.get("EUR", None)?;
/// assert!(std::sync::Arc::ptr_eq(&eur, &set.get(978u16, None)?));
///
/// let price = set.mint("9.99", "USD")?;
/// assert_eq!(price.to_string(), "9.99 USD");
/// # Ok::<_, moneymint::MoneyError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencySet {
    /// Sorted by alphabetic code
    currencies: Vec<Arc<Currency>>,
    by_alpha3: HashMap<String, Arc<Currency>>,
    /// Each list is sorted by window start, windows pairwise disjoint
    by_numeric: HashMap<u16, Candidates>,
}

impl CurrencySet {
    /// Build and validate a set.
    ///
    /// # Errors
    /// `AmbiguousCode` if two records share an alphabetic code, if records
    /// sharing a numeric code have overlapping validity windows, or if a
    /// minor unit denominator is zero.
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> MoneyResult<Self> {
        Self::build(currencies.into_iter().map(Arc::new).collect())
    }

    /// Build from a dataset source.
    pub fn from_source(source: &dyn CurrencySource) -> MoneyResult<Self> {
        let records = source.currencies().inspect_err(|e| {
            tracing::warn!(source = source.name(), error = %e, "currency source failed");
        })?;
        let set = Self::new(records)?;
        tracing::debug!(source = source.name(), currencies = set.len(), "loaded currency source");
        Ok(set)
    }

    /// Build from a JSON array of currency records.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> MoneyResult<Self> {
        Self::from_source(&crate::interfaces::JsonSource::new(text))
    }

    /// A new set with `currency` added; `self` is left untouched and the
    /// existing entries are shared.
    pub fn with_currency(&self, currency: Currency) -> MoneyResult<Self> {
        let mut currencies = self.currencies.clone();
        currencies.push(Arc::new(currency));
        Self::build(currencies)
    }

    fn build(mut currencies: Vec<Arc<Currency>>) -> MoneyResult<Self> {
        currencies.sort_by(|a, b| a.code_alpha3.cmp(&b.code_alpha3));

        let mut by_alpha3 = HashMap::with_capacity(currencies.len());
        let mut by_numeric: HashMap<u16, Candidates> = HashMap::new();

        for currency in &currencies {
            if currency.minor_unit_denominator.known() == Some(&0) {
                return Err(Self::reject(
                    &currency.code_alpha3,
                    "minor unit denominator must be positive",
                ));
            }
            if by_alpha3
                .insert(currency.code_alpha3.clone(), Arc::clone(currency))
                .is_some()
            {
                return Err(Self::reject(&currency.code_alpha3, "duplicate alphabetic code"));
            }
            by_numeric
                .entry(currency.code_num)
                .or_default()
                .push(Arc::clone(currency));
        }

        for (code, candidates) in by_numeric.iter_mut() {
            candidates.sort_by_key(|c| c.approx_active_from.known().copied());
            // Sorted by start, so disjointness of neighbours covers every pair
            for pair in candidates.windows(2) {
                if pair[0].windows_overlap(&pair[1]) {
                    return Err(Self::reject(
                        CurrencyCode::Numeric(*code),
                        format!(
                            "{} and {} share the numeric code with overlapping validity windows",
                            pair[0], pair[1]
                        ),
                    ));
                }
            }
        }

        tracing::debug!(
            currencies = currencies.len(),
            numeric_codes = by_numeric.len(),
            reused_numeric_codes = by_numeric.values().filter(|c| c.len() > 1).count(),
            "built currency set"
        );

        Ok(Self {
            currencies,
            by_alpha3,
            by_numeric,
        })
    }

    fn reject(code: impl ToString, reason: impl Into<String>) -> MoneyError {
        let error = MoneyError::ambiguous(code, reason);
        tracing::warn!(error = %error, "rejected currency dataset");
        error
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve a code to a currency.
    ///
    /// Alphabetic codes ignore `on_date`. A numeric code with a single
    /// candidate also ignores it; with several candidates the date is
    /// required and must fall within exactly one candidate's window.
    ///
    /// # Errors
    /// `NotFound` for unknown codes, `AmbiguousCode` when a reused numeric
    /// code cannot be narrowed down to one currency.
    pub fn get(
        &self,
        code: impl Into<CurrencyCode>,
        on_date: Option<NaiveDate>,
    ) -> MoneyResult<Arc<Currency>> {
        let code = code.into();
        let found = match &code {
            CurrencyCode::Alpha(alpha3) => self
                .by_alpha3
                .get(alpha3)
                .cloned()
                .ok_or_else(|| MoneyError::not_found(&code)),
            CurrencyCode::Numeric(num) => self.resolve_numeric(&code, *num, on_date),
        };
        tracing::trace!(code = %code, on_date = ?on_date, found = found.is_ok(), "currency lookup");
        found
    }

    fn resolve_numeric(
        &self,
        code: &CurrencyCode,
        num: u16,
        on_date: Option<NaiveDate>,
    ) -> MoneyResult<Arc<Currency>> {
        let candidates = match self.by_numeric.get(&num) {
            Some(candidates) if !candidates.is_empty() => candidates,
            _ => return Err(MoneyError::not_found(code)),
        };
        if let [only] = candidates.as_slice() {
            return Ok(Arc::clone(only));
        }

        let Some(date) = on_date else {
            return Err(MoneyError::ambiguous(
                code,
                format!("{} currencies use this code; a date is required", candidates.len()),
            ));
        };

        // Last window starting on or before the date, then its predecessor
        // for the uniqueness check
        let started = candidates.partition_point(|c| {
            c.approx_active_from.known().map_or(true, |from| *from <= date)
        });
        let mut active = candidates[..started]
            .iter()
            .rev()
            .take(2)
            .filter(|c| c.was_active_at(date));
        match (active.next(), active.next()) {
            (Some(currency), None) => Ok(Arc::clone(currency)),
            (None, _) => Err(MoneyError::ambiguous(
                code,
                format!("no currency with this code was active on {date}"),
            )),
            (Some(_), Some(_)) => Err(MoneyError::ambiguous(
                code,
                format!("several currencies with this code were active on {date}"),
            )),
        }
    }

    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint money without quantization.
    pub fn mint(
        &self,
        amount: impl Into<MintInput>,
        code: impl Into<CurrencyCode>,
    ) -> MoneyResult<Money> {
        self.mint_with(amount, code, &MintOptions::default())
    }

    /// Resolve `code` as of `options.on_date`, convert `amount` exactly and
    /// optionally quantize it to the minor unit.
    pub fn mint_with(
        &self,
        amount: impl Into<MintInput>,
        code: impl Into<CurrencyCode>,
        options: &MintOptions,
    ) -> MoneyResult<Money> {
        let currency = self.get(code, options.on_date)?;
        currency.mint_with(amount, options)
    }

    // ========================================================================
    // Collection Access
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Currencies in alphabetic code order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Currency>> {
        self.currencies.iter()
    }

    pub fn contains_alpha3(&self, code: &str) -> bool {
        self.by_alpha3.contains_key(code)
    }

    /// Every currency that has ever used `code_num`, oldest first
    pub fn numeric_candidates(&self, code_num: u16) -> &[Arc<Currency>] {
        self.by_numeric
            .get(&code_num)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }
}

impl<'a> IntoIterator for &'a CurrencySet {
    type Item = &'a Arc<Currency>;
    type IntoIter = std::slice::Iter<'a, Arc<Currency>>;

    fn into_iter(self) -> Self::IntoIter {
        self.currencies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Amount, Rounding};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_set() -> CurrencySet {
        CurrencySet::new([
            Currency::new("EUR", 978).with_denominator(100).with_name("Euro"),
            Currency::new("USD", 840).with_denominator(100).with_name("US Dollar"),
            Currency::new("MGA", 969).with_denominator(5),
            Currency::new("XAU", 959).continuous(),
            Currency::new("ZRZ", 180)
                .with_denominator(100)
                .active_from(date(1967, 1, 1))
                .active_until(date(1993, 10, 21)),
            Currency::new("ZRN", 180)
                .with_denominator(100)
                .active_from(date(1993, 10, 22))
                .active_until(date(1999, 6, 30)),
        ])
        .unwrap()
    }

    #[test]
    fn test_alpha_and_numeric_lookup_share_instance() {
        let set = sample_set();
        let by_alpha = set.get("EUR", None).unwrap();
        let by_num = set.get(978u16, None).unwrap();
        let by_num_str = set.get("978", None).unwrap();
        assert!(Arc::ptr_eq(&by_alpha, &by_num));
        assert!(Arc::ptr_eq(&by_alpha, &by_num_str));
        assert!(Arc::ptr_eq(
            &set.get("USD", None).unwrap(),
            &set.get(840u16, None).unwrap()
        ));
    }

    #[test]
    fn test_alpha_lookup_ignores_date() {
        let set = sample_set();
        let zrz = set.get("ZRZ", Some(date(2020, 1, 1))).unwrap();
        assert_eq!(zrz.code_alpha3, "ZRZ");
    }

    #[test]
    fn test_single_candidate_ignores_date() {
        let set = sample_set();
        let eur = set.get(978u16, Some(date(1800, 1, 1))).unwrap();
        assert_eq!(eur.code_alpha3, "EUR");
    }

    #[test]
    fn test_not_found() {
        let set = sample_set();
        assert_eq!(
            set.get("XYZ", None).unwrap_err(),
            MoneyError::NotFound {
                code: "XYZ".to_string()
            }
        );
        assert_eq!(
            set.get(1u16, None).unwrap_err(),
            MoneyError::NotFound {
                code: "001".to_string()
            }
        );
    }

    #[test]
    fn test_reused_numeric_code_requires_date() {
        let set = sample_set();
        let err = set.get(180u16, None).unwrap_err();
        assert!(matches!(err, MoneyError::AmbiguousCode { .. }));

        let old = set.get(180u16, Some(date(1980, 5, 1))).unwrap();
        assert_eq!(old.code_alpha3, "ZRZ");
        let new = set.get(180u16, Some(date(1995, 5, 1))).unwrap();
        assert_eq!(new.code_alpha3, "ZRN");
        assert_eq!(set.numeric_candidates(180).len(), 2);
        assert_eq!(set.numeric_candidates(180)[0].code_alpha3, "ZRZ");
    }

    #[test]
    fn test_reused_numeric_code_outside_all_windows() {
        let set = sample_set();
        let err = set.get(180u16, Some(date(2005, 1, 1))).unwrap_err();
        assert!(matches!(err, MoneyError::AmbiguousCode { .. }));
    }

    #[test]
    fn test_duplicate_alpha3_rejected() {
        let result = CurrencySet::new([Currency::new("EUR", 978), Currency::new("EUR", 979)]);
        assert!(matches!(result, Err(MoneyError::AmbiguousCode { .. })));
    }

    #[test]
    fn test_overlapping_numeric_windows_rejected() {
        let result = CurrencySet::new([
            Currency::new("AAA", 100).active_until(date(2000, 1, 1)),
            Currency::new("BBB", 100).active_from(date(1999, 1, 1)),
        ]);
        assert!(matches!(result, Err(MoneyError::AmbiguousCode { .. })));

        // Two open-ended records always overlap
        let result = CurrencySet::new([Currency::new("AAA", 100), Currency::new("BBB", 100)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(CurrencySet::new([Currency::new("AAA", 1).with_denominator(0)]).is_err());
    }

    #[test]
    fn test_with_currency() {
        let set = sample_set();
        let bigger = set.with_currency(Currency::new("CHF", 756).with_denominator(100)).unwrap();
        assert_eq!(bigger.len(), set.len() + 1);
        assert!(!set.contains_alpha3("CHF"));
        assert!(bigger.contains_alpha3("CHF"));
        assert!(Arc::ptr_eq(
            &set.get("EUR", None).unwrap(),
            &bigger.get("EUR", None).unwrap()
        ));
        assert!(set.with_currency(Currency::new("EUR", 1)).is_err());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let set = sample_set();
        let codes: Vec<_> = set.iter().map(|c| c.code_alpha3.as_str()).collect();
        assert_eq!(codes, vec!["EUR", "MGA", "USD", "XAU", "ZRN", "ZRZ"]);
        assert_eq!((&set).into_iter().count(), 6);
    }

    #[test]
    fn test_mint_exact_inputs() {
        let set = sample_set();
        let m = set.mint(dec!(100.10), "EUR").unwrap();
        assert_eq!(m.amount().to_string(), "100.10");
        assert_eq!(set.mint(42, "USD").unwrap().amount(), Amount::from(42));
        assert_eq!(set.mint(3.14, "USD").unwrap().amount().to_string(), "3.14");
    }

    #[test]
    fn test_mint_quantized() {
        let set = sample_set();
        let options = MintOptions::default().quantized();
        let cents = set.mint_with(dec!(3.1415), "USD", &options).unwrap();
        assert_eq!(cents.amount().to_string(), "3.14");
        let fifths = set.mint_with(dec!(3.1415), "MGA", &options).unwrap();
        assert_eq!(fifths.amount(), Amount::from(dec!(3.2)));

        // Continuous currency: quantization is a no-op
        let gold = set.mint_with(dec!(3.1415), "XAU", &options).unwrap();
        assert_eq!(gold.amount(), Amount::from(dec!(3.1415)));

        let down = options.clone().with_rounding(Rounding::Down);
        let truncated = set.mint_with(dec!(3.149), "USD", &down).unwrap();
        assert_eq!(truncated.amount().to_string(), "3.14");
    }

    #[test]
    fn test_mint_propagates_lookup_errors() {
        let set = sample_set();
        assert!(matches!(set.mint(1, "XYZ"), Err(MoneyError::NotFound { .. })));
        assert!(matches!(set.mint(1, 180u16), Err(MoneyError::AmbiguousCode { .. })));
        let options = MintOptions::default().on(date(1995, 1, 1));
        let zrn = set.mint_with(1, 180u16, &options).unwrap();
        assert_eq!(zrn.currency().code_alpha3, "ZRN");
    }

    #[test]
    fn test_currency_code_parsing() {
        assert_eq!(CurrencyCode::from("978"), CurrencyCode::Numeric(978));
        assert_eq!(CurrencyCode::from("EUR"), CurrencyCode::Alpha("EUR".to_string()));
        assert_eq!(CurrencyCode::from("99999"), CurrencyCode::Alpha("99999".to_string()));
        assert_eq!(CurrencyCode::Numeric(8).to_string(), "008");
    }
}
