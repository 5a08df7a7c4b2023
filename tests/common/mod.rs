//! Shared helpers for integration tests.

#![allow(dead_code)]

use rust_patience::{BoardConfig, EventLog, PatienceGame, PatienceGameBuilder};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize log capture for tests.
///
/// Safe to call from every test. The level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A seeded session recording its notifications.
pub fn recorded_game(seed: u64, config: BoardConfig) -> PatienceGame<EventLog> {
    init_logging();
    PatienceGameBuilder::new()
        .seed(seed)
        .config(config)
        .observer(EventLog::new())
        .build()
        .expect("valid config")
}
