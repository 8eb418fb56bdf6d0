// ============================================================================
// Currency Source Interface
// Defines the contract for frozen currency datasets
// ============================================================================

use crate::currency::Currency;
use crate::error::MoneyResult;

#[cfg(feature = "serde")]
use crate::error::MoneyError;

/// A producer of currency records, consumed once when a registry is built.
///
/// Records carry every field; values that are not known use
/// [`Datum::Unknown`](crate::currency::Datum::Unknown), which is distinct
/// from [`Datum::NotApplicable`](crate::currency::Datum::NotApplicable).
/// Registry construction validates the records, so sources do not have to.
pub trait CurrencySource: Send + Sync {
    /// Short label used in log output
    fn name(&self) -> &str;

    /// Produce the full record set
    fn currencies(&self) -> MoneyResult<Vec<Currency>>;
}

/// In-memory records, mainly for custom registries and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Currency>,
}

impl StaticSource {
    pub fn new(records: Vec<Currency>) -> Self {
        Self { records }
    }
}

impl CurrencySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn currencies(&self) -> MoneyResult<Vec<Currency>> {
        Ok(self.records.clone())
    }
}

/// Records encoded as a JSON array of currencies.
///
/// ```json
/// [{"code_alpha3": "EUR", "code_num": 978,
///   "minor_unit_denominator": {"known": 100}, "name": {"known": "Euro"},
///   "entities": ["DE", "FR"], "approx_active_from": {"known": "1999-01-01"},
///   "approx_active_until": "not_applicable"}]
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone)]
pub struct JsonSource {
    text: String,
}

#[cfg(feature = "serde")]
impl JsonSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(feature = "serde")]
impl CurrencySource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn currencies(&self) -> MoneyResult<Vec<Currency>> {
        serde_json::from_str(&self.text).map_err(|e| MoneyError::InvalidDataset {
            dataset: self.name().to_string(),
            reason: e.to_string(),
        })
    }
}
