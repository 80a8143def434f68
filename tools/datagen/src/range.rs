// tools/datagen/src/range.rs

use crate::errors::{AppError, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Half-open integer range `[lo, hi)` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRange {
  lo: i64,
  hi: i64,
}

impl XRange {
  pub fn new(lo: i64, hi: i64) -> Result<Self> {
    if lo >= hi {
      return Err(AppError::InvalidRange { lo, hi });
    }
    Ok(XRange { lo, hi })
  }

  pub fn lo(&self) -> i64 {
    self.lo
  }

  pub fn hi(&self) -> i64 {
    self.hi
  }
}

impl Default for XRange {
  fn default() -> Self {
    XRange { lo: 0, hi: 100 }
  }
}

impl fmt::Display for XRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.lo, self.hi)
  }
}

/// Accepts `lo,hi`, optionally wrapped in parentheses or brackets.
impl FromStr for XRange {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    let inner = s
      .trim()
      .trim_start_matches(['(', '['])
      .trim_end_matches([')', ']']);
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
      [lo, hi] => match (lo.parse::<i64>(), hi.parse::<i64>()) {
        (Ok(lo), Ok(hi)) => XRange::new(lo, hi),
        _ => Err(AppError::InvalidRangeType(s.to_string())),
      },
      _ => Err(AppError::InvalidRangeType(s.to_string())),
    }
  }
}

/// Accepts a two-element JSON array of integers.
impl TryFrom<&Value> for XRange {
  type Error = AppError;

  fn try_from(value: &Value) -> Result<Self> {
    match value.as_array().map(Vec::as_slice) {
      Some([lo, hi]) => match (lo.as_i64(), hi.as_i64()) {
        (Some(lo), Some(hi)) => XRange::new(lo, hi),
        _ => Err(AppError::InvalidRangeType(value.to_string())),
      },
      _ => Err(AppError::InvalidRangeType(value.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn parses_plain_and_tuple_forms() {
    assert_eq!("0,100".parse::<XRange>().unwrap(), XRange::new(0, 100).unwrap());
    assert_eq!("(0, 100)".parse::<XRange>().unwrap(), XRange::new(0, 100).unwrap());
    assert_eq!("[-5,5]".parse::<XRange>().unwrap(), XRange::new(-5, 5).unwrap());
  }

  #[test]
  fn rejects_non_integer_input_as_type_error() {
    for bad in ["bad", "1", "1,2,3", "1.5,3", "a,b", ""] {
      assert!(matches!(bad.parse::<XRange>(), Err(AppError::InvalidRangeType(_))), "{bad}");
    }
    assert!(matches!(XRange::try_from(&json!("bad")), Err(AppError::InvalidRangeType(_))));
    assert!(matches!(XRange::try_from(&json!([0, 1.5])), Err(AppError::InvalidRangeType(_))));
    assert!(matches!(XRange::try_from(&json!([0, 1, 2])), Err(AppError::InvalidRangeType(_))));
  }

  #[test]
  fn rejects_reversed_or_empty_ranges() {
    assert!(matches!(XRange::new(100, 0), Err(AppError::InvalidRange { lo: 100, hi: 0 })));
    assert!(matches!(XRange::new(5, 5), Err(AppError::InvalidRange { .. })));
    assert!(matches!("100,0".parse::<XRange>(), Err(AppError::InvalidRange { .. })));
    assert!(matches!(XRange::try_from(&json!([3, 3])), Err(AppError::InvalidRange { .. })));
  }
}
