// ============================================================================
// Currency Module
// Currency values, the registry, and the minting pipeline
// ============================================================================

#[allow(clippy::module_inception)]
mod currency;
mod datum;
mod mint;
mod registry;

pub use currency::Currency;
pub use datum::Datum;
pub(crate) use mint::whole_units;
pub use mint::{heal_float, heal_float32, quantize_to_denominator, MintInput, MintOptions};
pub use registry::{CurrencyCode, CurrencySet};
