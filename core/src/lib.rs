// src/lib.rs

//! Inventory: in-memory product records for an inventory system.
//!
//! A [`ProductRecord`] carries identity, descriptive fields, a quantity
//! counter, a price and two timestamps. It offers:
//!  - Quantity and price updates that always refresh `updated_at`.
//!  - A `created_at` that is fixed at construction.
//!  - A flat key-value mapping with ISO-8601 timestamps as its stable external
//!    contract, reversible through [`ProductRecord::from_mapping`].
//!  - An injectable [`Clock`] for deterministic time in tests.

pub mod clock;
pub mod employee;
pub mod error;
pub mod product;

// --- Re-exports for the Public API ---

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::employee::Employee;
pub use crate::error::{InventoryError, InventoryResult};
pub use crate::product::{keys, ProductBuilder, ProductMapping, ProductRecord};

/*
    Typical use:
    1. Build a record with `ProductRecord::builder()` (or `ProductRecord::new(name)`).
    2. Mutate it with `update_quantity` / `update_price`; pass a `Clock` to the
       `*_with` variants when time must be controlled.
    3. Hand `to_mapping()` to whatever stores or transports it, and rebuild with
       `ProductRecord::from_mapping(&map)`.
*/
