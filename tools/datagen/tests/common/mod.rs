// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::path::PathBuf;
use tracing::Level;

/// A fresh path under the system temp dir, unique per test name and process.
pub fn temp_path(test_name: &str, extension: &str) -> PathBuf {
  std::env::temp_dir().join(format!("datagen-{}-{}.{}", test_name, std::process::id(), extension))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
