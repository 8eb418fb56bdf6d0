// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency_source;

pub use currency_source::{CurrencySource, StaticSource};

#[cfg(feature = "serde")]
pub use currency_source::JsonSource;
