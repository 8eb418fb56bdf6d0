// ============================================================================
// ISO-4217 Registry
// The built-in currency set, assembled once on first use
// ============================================================================

mod data;

use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::currency::{Currency, CurrencyCode, CurrencySet, MintInput};
use crate::error::{MoneyError, MoneyResult};
use crate::interfaces::CurrencySource;
use crate::money::Money;

use data::{ActiveRow, HistoricalRow, Ymd, ACTIVE, HISTORICAL};

static ISO_CURRENCIES: Lazy<MoneyResult<CurrencySet>> =
    Lazy::new(|| CurrencySet::from_source(&IsoDataset));

/// The frozen ISO-4217 dataset: every currency in circulation plus the
/// withdrawn ones, including numeric codes that were reused over time.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDataset;

impl CurrencySource for IsoDataset {
    fn name(&self) -> &str {
        "iso4217"
    }

    fn currencies(&self) -> MoneyResult<Vec<Currency>> {
        let active = ACTIVE.iter().map(active_record);
        let historical = HISTORICAL.iter().map(historical_record);
        active.chain(historical).collect()
    }
}

/// The shared ISO registry.
///
/// Built on first call; later calls return the same set, so lookups of the
/// same currency yield the same `Arc`.
pub fn currencies() -> MoneyResult<&'static CurrencySet> {
    ISO_CURRENCIES.as_ref().map_err(Clone::clone)
}

/// Look up an ISO currency by alphabetic or numeric code.
pub fn get(code: impl Into<CurrencyCode>, on_date: Option<NaiveDate>) -> MoneyResult<Arc<Currency>> {
    currencies()?.get(code, on_date)
}

/// Mint an ISO currency amount without quantization.
pub fn mint(amount: impl Into<MintInput>, code: impl Into<CurrencyCode>) -> MoneyResult<Money> {
    currencies()?.mint(amount, code)
}

fn date(alpha3: &str, (year, month, day): Ymd) -> MoneyResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        MoneyError::ambiguous(alpha3, format!("invalid date {year:04}-{month:02}-{day:02}"))
    })
}

fn with_entities(mut currency: Currency, entities: &[&str]) -> Currency {
    for entity in entities {
        currency = currency.with_entity(*entity);
    }
    currency
}

fn active_record(row: &ActiveRow) -> MoneyResult<Currency> {
    let &(alpha3, num, minor, name, entities, from) = row;
    let mut currency = Currency::new(alpha3, num).with_name(name);
    currency = match minor {
        Some(denominator) => currency.with_denominator(denominator),
        None => currency.continuous(),
    };
    if let Some(from) = from {
        currency = currency.active_from(date(alpha3, from)?);
    }
    Ok(with_entities(currency, entities))
}

fn historical_record(row: &HistoricalRow) -> MoneyResult<Currency> {
    let &(alpha3, num, name, entities, from, until) = row;
    // Denominator stays unknown for withdrawn currencies
    let mut currency = Currency::new(alpha3, num).with_name(name).withdrawn();
    if let Some(from) = from {
        currency = currency.active_from(date(alpha3, from)?);
    }
    if let Some(until) = until {
        currency = currency.active_until(date(alpha3, until)?);
    }
    Ok(with_entities(currency, entities))
}
