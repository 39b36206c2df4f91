//! Purpose: Shared helpers for integration tests.
//! Exports: `init_tracing`.
//! Invariants: Subscriber install is idempotent across tests in one binary.
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
