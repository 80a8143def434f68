// tools/datagen/src/dataset.rs

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
  pub x: f64,
  pub y: f64,
}

/// An ordered collection of `(x, y)` points with a two-column JSON form:
/// `{"x": [...], "y": [...]}`. Non-finite values are written as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
  points: Vec<DataPoint>,
}

fn finite_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
  values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
    None => Some((v, v)),
    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
  })
}

fn column(value: &Value, name: &str) -> Result<Vec<f64>> {
  let items = value
    .get(name)
    .and_then(Value::as_array)
    .ok_or_else(|| AppError::MissingColumns(format!("column '{}' is missing or not an array", name)))?;

  items
    .iter()
    .enumerate()
    .map(|(i, item)| match item {
      Value::Null => Ok(f64::NAN),
      other => other
        .as_f64()
        .ok_or_else(|| AppError::MissingColumns(format!("column '{}' has a non-numeric value at row {}", name, i))),
    })
    .collect()
}

impl Dataset {
  pub fn new(points: Vec<DataPoint>) -> Self {
    Dataset { points }
  }

  pub fn points(&self) -> &[DataPoint] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn is_sorted_by_x(&self) -> bool {
    self.points.windows(2).all(|w| w[0].x <= w[1].x)
  }

  /// Min and max of the finite `x` values.
  pub fn x_bounds(&self) -> Option<(f64, f64)> {
    finite_bounds(self.points.iter().map(|p| p.x))
  }

  /// Min and max of the finite `y` values.
  pub fn y_bounds(&self) -> Option<(f64, f64)> {
    finite_bounds(self.points.iter().map(|p| p.y))
  }

  pub fn to_columns(&self) -> Value {
    let xs: Vec<Value> = self.points.iter().map(|p| Value::from(p.x)).collect();
    let ys: Vec<Value> = self.points.iter().map(|p| Value::from(p.y)).collect();
    json!({ "x": xs, "y": ys })
  }

  /// Fails with `MissingColumns` unless both columns are present, numeric and
  /// the same length.
  pub fn from_columns(value: &Value) -> Result<Self> {
    if !value.is_object() {
      return Err(AppError::MissingColumns(format!("expected an object, got {}", value)));
    }
    let xs = column(value, "x")?;
    let ys = column(value, "y")?;
    if xs.len() != ys.len() {
      return Err(AppError::MissingColumns(format!(
        "columns differ in length: x has {}, y has {}",
        xs.len(),
        ys.len()
      )));
    }
    Ok(Dataset::new(
      xs.into_iter().zip(ys).map(|(x, y)| DataPoint { x, y }).collect(),
    ))
  }

  pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(&self.to_columns())?;
    fs::write(path, text)?;
    Ok(())
  }

  pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    Self::from_columns(&value)
  }
}

impl From<Vec<DataPoint>> for Dataset {
  fn from(points: Vec<DataPoint>) -> Self {
    Dataset::new(points)
  }
}
