// core/src/product/record.rs
use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, warn};

/// One product's state.
///
/// Descriptive fields are public. `quantity`, `price` and both timestamps are
/// only reachable through accessors and the `update_*` operations, so every
/// change to quantity or price refreshes `updated_at`, and `created_at` never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct ProductRecord {
  /// `None` until an external layer persists the record.
  pub id: Option<i64>,
  pub name: String,
  pub description: Option<String>,
  /// Reference to a category; not checked here.
  pub category_id: Option<i64>,
  quantity: i64,
  price: f64,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl ProductRecord {
  /// A record with the given name and every other field defaulted.
  pub fn new(name: impl Into<String>) -> Self {
    Self::builder().name(name).build()
  }

  pub fn builder() -> ProductBuilder {
    ProductBuilder::default()
  }

  pub fn quantity(&self) -> i64 {
    self.quantity
  }

  pub fn price(&self) -> f64 {
    self.price
  }

  pub fn created_at(&self) -> DateTime<Utc> {
    self.created_at
  }

  pub fn updated_at(&self) -> DateTime<Utc> {
    self.updated_at
  }

  /// Adds `amount` (which may be zero or negative) to the quantity and
  /// refreshes `updated_at`.
  pub fn update_quantity(&mut self, amount: i64) {
    self.update_quantity_with(&SystemClock, amount);
  }

  pub fn update_quantity_with<C: Clock + ?Sized>(&mut self, clock: &C, amount: i64) {
    let previous = self.quantity;
    self.quantity = match previous.checked_add(amount) {
      Some(quantity) => quantity,
      None => {
        warn!(id = ?self.id, previous, amount, "Quantity update overflows i64; saturating.");
        previous.saturating_add(amount)
      }
    };
    self.touch(clock);
    debug!(id = ?self.id, previous, amount, quantity = self.quantity, "Product quantity updated");
  }

  /// Replaces the price and refreshes `updated_at`. Negative and non-finite
  /// prices are stored as given.
  pub fn update_price(&mut self, new_price: f64) {
    self.update_price_with(&SystemClock, new_price);
  }

  pub fn update_price_with<C: Clock + ?Sized>(&mut self, clock: &C, new_price: f64) {
    let previous = self.price;
    self.price = new_price;
    self.touch(clock);
    debug!(id = ?self.id, previous, price = self.price, "Product price updated");
  }

  // Never lets updated_at fall behind created_at, even if the clock steps back.
  fn touch<C: Clock + ?Sized>(&mut self, clock: &C) {
    self.updated_at = clock.now().max(self.created_at);
  }
}

// NaN prices compare equal to a NaN of the same sign, so a record holding
// one still equals its decoded copy.
fn same_price(a: f64, b: f64) -> bool {
  a == b || (a.is_nan() && b.is_nan() && a.is_sign_negative() == b.is_sign_negative())
}

impl PartialEq for ProductRecord {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
      && self.name == other.name
      && self.description == other.description
      && self.category_id == other.category_id
      && self.quantity == other.quantity
      && same_price(self.price, other.price)
      && self.created_at == other.created_at
      && self.updated_at == other.updated_at
  }
}

impl Default for ProductRecord {
  fn default() -> Self {
    Self::new("")
  }
}

fn or_dash<T: fmt::Display>(value: &Option<T>) -> String {
  match value {
    Some(v) => v.to_string(),
    None => "-".to_string(),
  }
}

/// Diagnostic rendering of every field, stable for equal records.
impl fmt::Display for ProductRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Product(id={}, name={:?}, description={}, category_id={}, quantity={}, price={}, created_at={}, updated_at={})",
      or_dash(&self.id),
      self.name,
      self
        .description
        .as_deref()
        .map(|d| format!("{:?}", d))
        .unwrap_or_else(|| "-".to_string()),
      or_dash(&self.category_id),
      self.quantity,
      self.price,
      super::mapping::encode_timestamp(&self.created_at),
      super::mapping::encode_timestamp(&self.updated_at),
    )
  }
}

/// Optional-argument constructor for [`ProductRecord`].
///
/// Omitted timestamps are filled from a single `now` read, so a fresh record
/// has `created_at == updated_at`. The result always has
/// `updated_at >= created_at`: an omitted `created_at` never lands after a
/// supplied `updated_at`, and an `updated_at` supplied before `created_at` is
/// raised to it.
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
  id: Option<i64>,
  name: String,
  description: Option<String>,
  category_id: Option<i64>,
  quantity: i64,
  price: f64,
  created_at: Option<DateTime<Utc>>,
  updated_at: Option<DateTime<Utc>>,
}

impl ProductBuilder {
  pub fn id(mut self, id: i64) -> Self {
    self.id = Some(id);
    self
  }

  pub fn maybe_id(mut self, id: Option<i64>) -> Self {
    self.id = id;
    self
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn maybe_description(mut self, description: Option<String>) -> Self {
    self.description = description;
    self
  }

  pub fn category_id(mut self, category_id: i64) -> Self {
    self.category_id = Some(category_id);
    self
  }

  pub fn maybe_category_id(mut self, category_id: Option<i64>) -> Self {
    self.category_id = category_id;
    self
  }

  pub fn quantity(mut self, quantity: i64) -> Self {
    self.quantity = quantity;
    self
  }

  pub fn price(mut self, price: f64) -> Self {
    self.price = price;
    self
  }

  pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
    self.created_at = Some(created_at);
    self
  }

  pub fn maybe_created_at(mut self, created_at: Option<DateTime<Utc>>) -> Self {
    self.created_at = created_at;
    self
  }

  pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
    self.updated_at = Some(updated_at);
    self
  }

  pub fn maybe_updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
    self.updated_at = updated_at;
    self
  }

  pub fn build(self) -> ProductRecord {
    self.build_with(&SystemClock)
  }

  pub fn build_with<C: Clock + ?Sized>(self, clock: &C) -> ProductRecord {
    let (created_at, updated_at) = match (self.created_at, self.updated_at) {
      (Some(created), Some(updated)) => (created, updated),
      (Some(created), None) => (created, clock.now()),
      (None, Some(updated)) => (clock.now().min(updated), updated),
      (None, None) => {
        let now = clock.now();
        (now, now)
      }
    };
    if updated_at < created_at {
      warn!(%created_at, %updated_at, "updated_at precedes created_at; raising it to created_at.");
    }
    self.finish(created_at, updated_at.max(created_at))
  }

  fn finish(self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> ProductRecord {
    ProductRecord {
      id: self.id,
      name: self.name,
      description: self.description,
      category_id: self.category_id,
      quantity: self.quantity,
      price: self.price,
      created_at,
      updated_at,
    }
  }
}
