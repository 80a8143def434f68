// tools/datagen/src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// The range was not exactly two integers.
  #[error("x_range must be a tuple of two integers, got {0:?}")]
  InvalidRangeType(String),

  #[error("Invalid range: the first element must be less than the second element (got {lo}, {hi})")]
  InvalidRange { lo: i64, hi: i64 },

  #[error("data must have 'x' and 'y' columns: {0}")]
  MissingColumns(String),

  #[error("Nothing to plot: the dataset has no finite points")]
  EmptyDataset,

  #[error("Sampling Error: {0}")]
  Distribution(String),

  #[error("Render Error: {0}")]
  Render(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON Error: {0}")]
  Json(#[from] serde_json::Error),
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
