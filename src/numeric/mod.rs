// ============================================================================
// Numeric Module
// Context-governed decimal arithmetic for money amounts
// ============================================================================
//
// This module provides:
// - Amount: decimal value with signed infinities and quiet/signaling NaNs
// - Context: precision, rounding mode and trap set for every operation
// - Signal/Signals: exceptional conditions raised by arithmetic
//
// Design principles:
// - No floating-point operations (floats only enter through healing)
// - All arithmetic returns Result (no panics)
// - Trapped conditions become errors, untrapped ones special values

mod amount;
mod context;
mod errors;

pub use amount::Amount;
pub use context::{Context, Rounding};
pub use errors::{Signal, Signals};
