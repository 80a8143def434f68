// core/src/product/mapping.rs

//! The flat key-value representation of a [`ProductRecord`].
//!
//! This is the only external contract of the record: any storage or transport
//! layer must use exactly the keys in [`keys`] and the timestamp encoding of
//! [`encode_timestamp`]. Decoding is permissive. Missing or wrong-typed
//! fields fall back to their defaults, and only a present but unreadable
//! timestamp is an error.

use super::record::ProductRecord;
use crate::clock::{Clock, SystemClock};
use crate::error::{InventoryError, InventoryResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub type ProductMapping = Map<String, Value>;

pub mod keys {
  pub const ID: &str = "id";
  pub const NAME: &str = "name";
  pub const DESCRIPTION: &str = "description";
  pub const CATEGORY_ID: &str = "category_id";
  pub const QUANTITY: &str = "quantity";
  pub const PRICE: &str = "price";
  pub const CREATED_AT: &str = "created_at";
  pub const UPDATED_AT: &str = "updated_at";

  pub const ALL: [&str; 8] = [ID, NAME, DESCRIPTION, CATEGORY_ID, QUANTITY, PRICE, CREATED_AT, UPDATED_AT];

  // Accepted on decode only, when the current key is absent or unreadable.
  pub const LEGACY_ID: &str = "product_id";
  pub const LEGACY_NAME: &str = "product_name";
}

/// RFC 3339 with a `Z` suffix and only as many fractional digits as the
/// instant needs, so decoding gives back the same nanosecond.
pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
  ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Reads an ISO-8601 timestamp. Offsets are converted to UTC; a timestamp
/// without an offset, or a bare date, is taken as UTC.
pub fn parse_timestamp(field: &'static str, raw: &str) -> InventoryResult<DateTime<Utc>> {
  let rfc_err = match DateTime::parse_from_rfc3339(raw) {
    Ok(ts) => return Ok(ts.with_timezone(&Utc)),
    Err(e) => e,
  };

  let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
    .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
    .ok()
    .or_else(|| {
      NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    });

  match naive {
    Some(naive) => Ok(Utc.from_utc_datetime(&naive)),
    None => Err(InventoryError::format(field, raw, rfc_err)),
  }
}

// JSON numbers cannot hold NaN or infinities. `f64`'s Display drops the
// sign of NaN, so both NaN forms are spelled out.
fn encode_price(price: f64) -> Value {
  if price.is_finite() {
    Value::from(price)
  } else if price.is_nan() {
    let text = if price.is_sign_negative() { "-NaN" } else { "NaN" };
    Value::String(text.to_string())
  } else {
    Value::String(price.to_string())
  }
}

fn decode_price_text(text: &str) -> Option<f64> {
  match text.trim() {
    "NaN" => Some(f64::NAN),
    "-NaN" => Some(-f64::NAN),
    other => other.parse::<f64>().ok(),
  }
}

fn optional<T: Into<Value>>(value: Option<T>) -> Value {
  value.map(Into::into).unwrap_or(Value::Null)
}

/// The non-null value under `key`.
fn field<'a>(map: &'a ProductMapping, key: &str) -> Option<&'a Value> {
  map.get(key).filter(|v| !v.is_null())
}

/// Decodes `key`, falling back to `legacy` when `key` is absent, null or of
/// the wrong type.
fn with_legacy<T>(
  map: &ProductMapping,
  key: &'static str,
  legacy: &'static str,
  decode: impl Fn(&'static str, Option<&Value>) -> Option<T>,
) -> Option<T> {
  decode(key, field(map, key)).or_else(|| decode(legacy, field(map, legacy)))
}

fn int_field(field_name: &'static str, value: Option<&Value>) -> Option<i64> {
  let value = value?;
  let parsed = value.as_i64();
  if parsed.is_none() {
    warn!(field = field_name, %value, "Ignoring non-integer mapping value");
  }
  parsed
}

fn string_field(field_name: &'static str, value: Option<&Value>) -> Option<String> {
  match value? {
    Value::String(s) => Some(s.clone()),
    other => {
      warn!(field = field_name, value = %other, "Ignoring non-string mapping value");
      None
    }
  }
}

fn price_field(value: Option<&Value>) -> Option<f64> {
  let parsed = match value? {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => decode_price_text(s),
    _ => None,
  };
  if parsed.is_none() {
    warn!(field = keys::PRICE, value = ?value, "Ignoring non-numeric mapping value");
  }
  parsed
}

fn timestamp_field(field_name: &'static str, value: Option<&Value>) -> InventoryResult<Option<DateTime<Utc>>> {
  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) if s.is_empty() => Ok(None),
    Some(Value::String(s)) => parse_timestamp(field_name, s).map(Some),
    Some(other) => Err(InventoryError::format(
      field_name,
      other.to_string(),
      "expected an ISO-8601 string",
    )),
  }
}

impl ProductRecord {
  /// Every key of the contract is present; absent optionals encode as null.
  pub fn to_mapping(&self) -> ProductMapping {
    let mut map = Map::with_capacity(keys::ALL.len());
    map.insert(keys::ID.to_string(), optional(self.id));
    map.insert(keys::NAME.to_string(), Value::String(self.name.clone()));
    map.insert(keys::DESCRIPTION.to_string(), optional(self.description.clone()));
    map.insert(keys::CATEGORY_ID.to_string(), optional(self.category_id));
    map.insert(keys::QUANTITY.to_string(), Value::from(self.quantity()));
    map.insert(keys::PRICE.to_string(), encode_price(self.price()));
    map.insert(
      keys::CREATED_AT.to_string(),
      Value::String(encode_timestamp(&self.created_at())),
    );
    map.insert(
      keys::UPDATED_AT.to_string(),
      Value::String(encode_timestamp(&self.updated_at())),
    );
    map
  }

  pub fn from_mapping(map: &ProductMapping) -> InventoryResult<Self> {
    Self::from_mapping_with(&SystemClock, map)
  }

  /// Missing timestamps take `clock`'s current time, like the builder does.
  pub fn from_mapping_with<C: Clock + ?Sized>(clock: &C, map: &ProductMapping) -> InventoryResult<Self> {
    let created_at = timestamp_field(keys::CREATED_AT, map.get(keys::CREATED_AT))?;
    let updated_at = timestamp_field(keys::UPDATED_AT, map.get(keys::UPDATED_AT))?;

    let record = ProductRecord::builder()
      .maybe_id(with_legacy(map, keys::ID, keys::LEGACY_ID, int_field))
      .name(with_legacy(map, keys::NAME, keys::LEGACY_NAME, string_field).unwrap_or_default())
      .maybe_description(string_field(keys::DESCRIPTION, field(map, keys::DESCRIPTION)))
      .maybe_category_id(int_field(keys::CATEGORY_ID, field(map, keys::CATEGORY_ID)))
      .quantity(int_field(keys::QUANTITY, field(map, keys::QUANTITY)).unwrap_or(0))
      .price(price_field(field(map, keys::PRICE)).unwrap_or(0.0))
      .maybe_created_at(created_at)
      .maybe_updated_at(updated_at)
      .build_with(clock);

    debug!(id = ?record.id, name = %record.name, "Product built from mapping");
    Ok(record)
  }

  pub fn to_json(&self) -> InventoryResult<String> {
    Ok(serde_json::to_string(&self.to_mapping())?)
  }

  /// Parses a JSON object and decodes it with [`ProductRecord::from_mapping`].
  pub fn from_json(json: &str) -> InventoryResult<Self> {
    let map: ProductMapping = serde_json::from_str(json)?;
    Self::from_mapping(&map)
  }
}

impl Serialize for ProductRecord {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.to_mapping().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for ProductRecord {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let map = ProductMapping::deserialize(deserializer)?;
    ProductRecord::from_mapping(&map).map_err(D::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Timelike;
  use serde_json::json;

  fn as_map(value: Value) -> ProductMapping {
    match value {
      Value::Object(map) => map,
      other => panic!("expected an object, got {other}"),
    }
  }

  #[test]
  fn encoding_keeps_nanoseconds() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap().with_nanosecond(123_456_789).unwrap();
    let encoded = encode_timestamp(&ts);
    assert_eq!(encoded, "2024-05-06T07:08:09.123456789Z");
    assert_eq!(parse_timestamp("created_at", &encoded).unwrap(), ts);
  }

  #[test]
  fn naive_and_offset_timestamps_are_read_as_utc() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    assert_eq!(parse_timestamp("created_at", "2024-01-01T10:00:00").unwrap(), expected);
    assert_eq!(parse_timestamp("created_at", "2024-01-01T12:00:00+02:00").unwrap(), expected);
    assert_eq!(
      parse_timestamp("created_at", "2024-01-01").unwrap(),
      Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
  }

  #[test]
  fn non_string_timestamp_is_a_format_error() {
    let err = ProductRecord::from_mapping(&as_map(json!({ "updated_at": 12345 }))).unwrap_err();
    assert!(err.is_format());
  }

  #[test]
  fn legacy_keys_are_accepted() {
    let record = ProductRecord::from_mapping(&as_map(json!({ "product_id": 4, "product_name": "Bolt" }))).unwrap();
    assert_eq!(record.id, Some(4));
    assert_eq!(record.name, "Bolt");
  }

  #[test]
  fn current_keys_win_over_legacy_keys() {
    let record =
      ProductRecord::from_mapping(&as_map(json!({ "id": 1, "product_id": 4, "name": "Nut", "product_name": "Bolt" })))
        .unwrap();
    assert_eq!(record.id, Some(1));
    assert_eq!(record.name, "Nut");
  }

  #[test]
  fn wrong_typed_numbers_fall_back_to_defaults() {
    let record = ProductRecord::from_mapping(&as_map(json!({ "quantity": "ten", "price": [1], "id": "x" }))).unwrap();
    assert_eq!(record.quantity(), 0);
    assert_eq!(record.price(), 0.0);
    assert_eq!(record.id, None);
  }

  #[test]
  fn non_finite_prices_encode_as_strings() {
    let mut record = ProductRecord::new("Gauge");
    record.update_price(f64::INFINITY);
    let map = record.to_mapping();
    assert_eq!(map[keys::PRICE], json!("inf"));
    assert_eq!(ProductRecord::from_mapping(&map).unwrap().price(), f64::INFINITY);
  }

  #[test]
  fn nan_prices_round_trip_with_their_sign() {
    for nan in [f64::NAN, -f64::NAN] {
      let mut record = ProductRecord::new("Gauge");
      record.update_price(nan);
      let map = record.to_mapping();
      let back = ProductRecord::from_mapping(&map).unwrap();
      assert!(back.price().is_nan());
      assert_eq!(back.price().is_sign_negative(), nan.is_sign_negative());
      assert_eq!(back, record);
    }
    assert_eq!(encode_price(-f64::NAN), json!("-NaN"));
  }

  #[test]
  fn wrong_typed_current_key_falls_back_to_legacy_key() {
    let record =
      ProductRecord::from_mapping(&as_map(json!({ "id": "x", "product_id": 4, "name": 5, "product_name": "Bolt" })))
        .unwrap();
    assert_eq!(record.id, Some(4));
    assert_eq!(record.name, "Bolt");
  }
}
