// tools/datagen/src/lib.rs

//! Synthesizes a noisy `y = x^1.5` dataset and renders it as a scatter plot.
//!
//! Independent of the `inventory` crate.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod generator;
pub mod plot;
pub mod range;

pub use config::AppConfig;
pub use dataset::{DataPoint, Dataset};
pub use errors::{AppError, Result};
pub use generator::{gen_data, gen_data_seeded, gen_data_with, SAMPLE_SIZE};
pub use plot::{plot_data, plot_to_svg_string};
pub use range::XRange;

/// Generates data per `config`, writes the optional JSON dump and the plot.
/// Nothing is written when `config` fails [`AppConfig::validate`].
pub fn run(config: &AppConfig) -> Result<Dataset> {
  config.validate()?;
  let data = match config.seed {
    Some(seed) => gen_data_seeded(config.range, seed)?,
    None => gen_data(config.range)?,
  };
  tracing::info!(range = %config.range, points = data.len(), "Data generated");

  if let Some(path) = &config.data_path {
    data.write_json(path)?;
    tracing::info!(path = %path.display(), "Dataset written");
  }

  plot_data(&data, &config.plot_path, config.plot_size())?;
  tracing::info!(path = %config.plot_path.display(), "Plot rendered");
  Ok(data)
}
