// core/src/employee.rs
use crate::error::{InventoryError, InventoryResult};
use serde::Serialize;
use std::ops::RangeInclusive;

pub const DEPARTMENTS: RangeInclusive<i64> = 1..=3;

/// An employee with a fixed identity and validated mutable fields.
///
/// Unlike [`crate::ProductRecord`], every field is checked on construction and
/// on every setter; an invalid value leaves the record unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
  employee_id: i64,
  department_id: i64,
  first_name: String,
  last_name: String,
  hourly_rate: f64,
}

fn check_name(field: &'static str, value: &str) -> InventoryResult<()> {
  if value.trim().is_empty() {
    return Err(InventoryError::validation(field, "cannot be empty"));
  }
  Ok(())
}

fn check_rate(value: f64) -> InventoryResult<()> {
  if !value.is_finite() || value < 0.0 {
    return Err(InventoryError::validation(
      "hourly_rate",
      format!("must be a non-negative amount, got {}", value),
    ));
  }
  Ok(())
}

impl Employee {
  pub fn new(
    employee_id: i64,
    department_id: i64,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    hourly_rate: f64,
  ) -> InventoryResult<Self> {
    if employee_id <= 0 {
      return Err(InventoryError::validation(
        "employee_id",
        format!("must be positive, got {}", employee_id),
      ));
    }
    if !DEPARTMENTS.contains(&department_id) {
      return Err(InventoryError::validation(
        "department_id",
        format!(
          "must be between {} and {}, got {}",
          DEPARTMENTS.start(),
          DEPARTMENTS.end(),
          department_id
        ),
      ));
    }
    let first_name = first_name.into();
    let last_name = last_name.into();
    check_name("first_name", &first_name)?;
    check_name("last_name", &last_name)?;
    check_rate(hourly_rate)?;

    Ok(Employee {
      employee_id,
      department_id,
      first_name,
      last_name,
      hourly_rate,
    })
  }

  pub fn employee_id(&self) -> i64 {
    self.employee_id
  }

  pub fn department_id(&self) -> i64 {
    self.department_id
  }

  pub fn first_name(&self) -> &str {
    &self.first_name
  }

  pub fn last_name(&self) -> &str {
    &self.last_name
  }

  pub fn hourly_rate(&self) -> f64 {
    self.hourly_rate
  }

  pub fn set_first_name(&mut self, value: impl Into<String>) -> InventoryResult<()> {
    let value = value.into();
    check_name("first_name", &value)?;
    self.first_name = value;
    Ok(())
  }

  pub fn set_last_name(&mut self, value: impl Into<String>) -> InventoryResult<()> {
    let value = value.into();
    check_name("last_name", &value)?;
    self.last_name = value;
    Ok(())
  }

  pub fn set_hourly_rate(&mut self, value: f64) -> InventoryResult<()> {
    check_rate(value)?;
    self.hourly_rate = value;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn field_of(err: InventoryError) -> &'static str {
    match err {
      InventoryError::Validation { field, .. } => field,
      other => panic!("Expected a validation error, got {:?}", other),
    }
  }

  #[test]
  fn accepts_a_valid_employee() {
    let employee = Employee::new(1, 2, "Ada", "Lovelace", 42.5).unwrap();
    assert_eq!(employee.employee_id(), 1);
    assert_eq!(employee.department_id(), 2);
    assert_eq!(employee.first_name(), "Ada");
    assert_eq!(employee.last_name(), "Lovelace");
    assert_eq!(employee.hourly_rate(), 42.5);
  }

  #[test]
  fn rejects_each_invalid_constructor_argument() {
    assert_eq!(field_of(Employee::new(0, 1, "A", "B", 1.0).unwrap_err()), "employee_id");
    assert_eq!(field_of(Employee::new(1, 4, "A", "B", 1.0).unwrap_err()), "department_id");
    assert_eq!(field_of(Employee::new(1, 0, "A", "B", 1.0).unwrap_err()), "department_id");
    assert_eq!(field_of(Employee::new(1, 1, "  ", "B", 1.0).unwrap_err()), "first_name");
    assert_eq!(field_of(Employee::new(1, 1, "A", "", 1.0).unwrap_err()), "last_name");
    assert_eq!(field_of(Employee::new(1, 1, "A", "B", -0.5).unwrap_err()), "hourly_rate");
    assert_eq!(field_of(Employee::new(1, 1, "A", "B", f64::NAN).unwrap_err()), "hourly_rate");
  }

  #[test]
  fn failed_setters_leave_the_record_unchanged() {
    let mut employee = Employee::new(7, 3, "Grace", "Hopper", 50.0).unwrap();
    assert!(employee.set_first_name("").is_err());
    assert!(employee.set_hourly_rate(-1.0).is_err());
    assert_eq!(employee.first_name(), "Grace");
    assert_eq!(employee.hourly_rate(), 50.0);

    employee.set_last_name("Murray").unwrap();
    employee.set_hourly_rate(0.0).unwrap();
    assert_eq!(employee.last_name(), "Murray");
    assert_eq!(employee.hourly_rate(), 0.0);
  }
}
