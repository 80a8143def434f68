// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
  /// A timestamp field was present in a mapping but could not be read as ISO-8601.
  #[error("Invalid ISO-8601 timestamp for '{field}': {value:?} ({reason})")]
  Format {
    field: &'static str,
    value: String,
    reason: String,
  },

  #[error("Invalid value for '{field}': {message}")]
  Validation { field: &'static str, message: String },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

impl InventoryError {
  pub(crate) fn format(field: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
    InventoryError::Format {
      field,
      value: value.into(),
      reason: reason.to_string(),
    }
  }

  pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
    InventoryError::Validation {
      field,
      message: message.into(),
    }
  }

  /// True for the timestamp parse failure raised by `ProductRecord::from_mapping`.
  pub fn is_format(&self) -> bool {
    matches!(self, InventoryError::Format { .. })
  }
}

pub type InventoryResult<T, E = InventoryError> = std::result::Result<T, E>;
