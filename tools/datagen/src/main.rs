// tools/datagen/src/main.rs

use clap::Parser;
use datagen::{AppConfig, XRange};
use std::path::PathBuf;
use tracing::Level;

/// Generate a noisy x^1.5 dataset and plot it
#[derive(Parser, Debug)]
#[command(name = "datagen")]
#[command(version, about = "Generate a noisy x^1.5 dataset and render it as an SVG scatter plot")]
pub struct Args {
  /// Integer x range as "lo,hi" (lo < hi)
  #[arg(short, long)]
  pub range: Option<XRange>,

  /// Seed for reproducible output
  #[arg(short, long)]
  pub seed: Option<u64>,

  /// SVG output path
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Also write the generated columns as JSON
  #[arg(long)]
  pub data_out: Option<PathBuf>,

  /// Plot width in pixels
  #[arg(long)]
  pub width: Option<u32>,

  /// Plot height in pixels
  #[arg(long)]
  pub height: Option<u32>,
}

impl Args {
  /// Flags win over environment values.
  fn apply(self, config: &mut AppConfig) {
    if let Some(range) = self.range {
      config.range = range;
    }
    if self.seed.is_some() {
      config.seed = self.seed;
    }
    if let Some(output) = self.output {
      config.plot_path = output;
    }
    if self.data_out.is_some() {
      config.data_path = self.data_out;
    }
    if let Some(width) = self.width {
      config.plot_width = width;
    }
    if let Some(height) = self.height {
      config.plot_height = height;
    }
  }
}

fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .init();

  let args = Args::parse();

  let mut config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load configuration.");
      return Err(e.into());
    }
  };
  args.apply(&mut config);
  if let Err(e) = config.validate() {
    tracing::error!(error = %e, "Invalid command-line options.");
    return Err(e.into());
  }

  if let Err(e) = datagen::run(&config) {
    tracing::error!(error = %e, "Data generation failed.");
    return Err(e.into());
  }
  Ok(())
}
