// core/src/product/mod.rs

//! The product record and its mapping contract.

pub mod mapping;
pub mod record;

pub use mapping::{encode_timestamp, keys, parse_timestamp, ProductMapping};
pub use record::{ProductBuilder, ProductRecord};
