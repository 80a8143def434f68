// tools/datagen/src/config.rs

use crate::errors::{AppError, Result};
use crate::range::XRange;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub range: XRange,
  /// Fixed seed for reproducible output; `None` draws from the thread RNG.
  pub seed: Option<u64>,
  pub plot_path: PathBuf,
  /// Where to dump the generated columns as JSON, if anywhere.
  pub data_path: Option<PathBuf>,
  pub plot_width: u32,
  pub plot_height: u32,
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      range: XRange::default(),
      seed: None,
      plot_path: PathBuf::from("data_points.svg"),
      data_path: None,
      plot_width: 800,
      plot_height: 600,
    }
  }
}

fn get_env(var_name: &str) -> Option<String> {
  env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(var_name: &str, default: T) -> Result<T>
where
  T::Err: std::fmt::Display,
{
  match get_env(var_name) {
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e))),
    None => Ok(default),
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = AppConfig::default();

    let range = match get_env("DATAGEN_RANGE") {
      Some(raw) => raw
        .parse::<XRange>()
        .map_err(|e| AppError::Config(format!("Invalid DATAGEN_RANGE: {}", e)))?,
      None => defaults.range,
    };
    let seed = match get_env("DATAGEN_SEED") {
      Some(raw) => Some(
        raw
          .trim()
          .parse::<u64>()
          .map_err(|e| AppError::Config(format!("Invalid DATAGEN_SEED: {}", e)))?,
      ),
      None => None,
    };
    let plot_path = get_env("DATAGEN_PLOT_PATH").map(PathBuf::from).unwrap_or(defaults.plot_path);
    let data_path = get_env("DATAGEN_DATA_PATH").map(PathBuf::from);
    let plot_width = parse_env("DATAGEN_PLOT_WIDTH", defaults.plot_width)?;
    let plot_height = parse_env("DATAGEN_PLOT_HEIGHT", defaults.plot_height)?;

    let config = Self {
      range,
      seed,
      plot_path,
      data_path,
      plot_width,
      plot_height,
    };
    config.validate()?;

    tracing::info!("Configuration loaded successfully.");
    tracing::debug!(range = %config.range, seed = ?config.seed, plot_path = %config.plot_path.display(), "Loaded config details");
    Ok(config)
  }

  /// Checks what the field types alone cannot; run again after CLI overrides.
  pub fn validate(&self) -> Result<()> {
    if self.plot_width == 0 || self.plot_height == 0 {
      return Err(AppError::Config(format!(
        "Plot dimensions must be non-zero, got {}x{}",
        self.plot_width, self.plot_height
      )));
    }
    Ok(())
  }

  pub fn plot_size(&self) -> (u32, u32) {
    (self.plot_width, self.plot_height)
  }
}
