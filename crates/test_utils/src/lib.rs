//! Test Utilities Crate
//!
//! Shared test infrastructure for the benefit and claims test suites.
//!
//! # Modules
//!
//! - `fixtures`: Deterministic money, date, and identifier fixtures
//! - `builders`: A wired-up engine fixture over the in-memory adapters
//! - `assertions`: Custom assertion helpers for domain types

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
});

/// Initializes tracing once for a test binary; honors `RUST_LOG`
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
