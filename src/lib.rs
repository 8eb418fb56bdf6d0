// ============================================================================
// Money Mint Library
// Currency registry with temporal code resolution and currency-safe money
// ============================================================================

//! # Money Mint
//!
//! Currency-aware decimal money for financial code.
//!
//! ## Features
//!
//! - **Currency registry** with lookup by alphabetic or numeric ISO code,
//!   including numeric codes reused over time (resolved by date)
//! - **Built-in ISO-4217 dataset** with active and withdrawn currencies
//! - **Currency-checked arithmetic**: mixing currencies is an error, never a
//!   silent conversion
//! - **Float healing**: `0.1f64` mints as exactly `0.1`
//! - **Quantization** to minor units (cents, fils, five-unit divisions)
//! - **Decimal contexts** controlling precision, rounding, and traps
//!
//! ## Example
//!
//! ```rust
//! use moneymint::prelude::*;
//!
//! let eur = iso::get("EUR", None)?;
//! let price = eur.mint(19.99)?;
//! let shipping = eur.mint("4.50")?;
//!
//! let total = (&price + &shipping)?;
//! assert_eq!(total.to_string(), "24.49 EUR");
//!
//! // Mixing currencies fails
//! let usd = iso::get(840u16, None)?;
//! assert!((&total + &usd.mint(1)?).is_err());
//!
//! // Quantize on mint
//! let options = MintOptions::default().quantized();
//! assert_eq!(eur.mint_with(10.005, &options)?.to_string(), "10.01 EUR");
//! # Ok::<_, MoneyError>(())
//! ```

pub mod currency;
pub mod error;
pub mod interfaces;
pub mod iso;
pub mod money;
pub mod numeric;
#[cfg(feature = "logging")]
pub mod utils;

pub use error::{MoneyError, MoneyResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{Currency, CurrencyCode, CurrencySet, Datum, MintInput, MintOptions};
    pub use crate::error::{MoneyError, MoneyResult};
    pub use crate::interfaces::{CurrencySource, StaticSource};
    pub use crate::iso::{self, IsoDataset};
    pub use crate::money::{MathOp, Money, Operand, Outcome, QuantizeTarget};
    pub use crate::numeric::{Amount, Context, Rounding, Signal};
}
