// ============================================================================
// Utilities Module
// Log output setup for binaries, demos, and benchmarks
// ============================================================================

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `warn` when `RUST_LOG` is unset or unparsable. Returns
/// `false` if a global subscriber was already installed, in which case the
/// existing one is left in place.
///
/// ```
/// moneymint::utils::init_tracing();
/// // RUST_LOG=moneymint=trace shows every lookup and mint
/// ```
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        // Only the first install in the process can succeed
        assert!(!init_tracing());
    }
}
