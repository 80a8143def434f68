// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{DateTime, Duration, TimeZone, Utc};
use inventory::{ManualClock, ProductMapping, ProductRecord};
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::Level;

// --- Clocks ---
pub fn epoch() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

/// Every read moves the clock one millisecond forward.
pub fn ticking_clock() -> ManualClock {
  ManualClock::ticking(epoch(), Duration::milliseconds(1))
}

pub fn frozen_clock() -> ManualClock {
  ManualClock::new(epoch())
}

// --- Records ---
pub fn widget(clock: &ManualClock) -> ProductRecord {
  ProductRecord::builder()
    .name("Widget")
    .quantity(10)
    .price(2.5)
    .build_with(clock)
}

pub fn full_record(clock: &ManualClock) -> ProductRecord {
  ProductRecord::builder()
    .id(42)
    .name("Torque wrench")
    .description("3/8\" drive, 20-100 Nm")
    .category_id(7)
    .quantity(-3)
    .price(-12.75)
    .build_with(clock)
}

pub fn as_map(value: Value) -> ProductMapping {
  match value {
    Value::Object(map) => map,
    other => panic!("Expected a JSON object, got {:?}", other),
  }
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
