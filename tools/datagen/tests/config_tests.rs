// tests/config_tests.rs
mod common;

use common::*;
use datagen::{AppConfig, AppError, XRange};
use std::env;
use std::path::PathBuf;

const VARS: [&str; 6] = [
  "DATAGEN_RANGE",
  "DATAGEN_SEED",
  "DATAGEN_PLOT_PATH",
  "DATAGEN_DATA_PATH",
  "DATAGEN_PLOT_WIDTH",
  "DATAGEN_PLOT_HEIGHT",
];

fn clear() {
  for var in VARS {
    env::remove_var(var);
  }
}

// Environment is process-wide, so every case lives in this one test.
#[test]
fn test_config_from_env() {
  setup_tracing();

  clear();
  let defaults = AppConfig::from_env().unwrap();
  assert_eq!(defaults.range, XRange::new(0, 100).unwrap());
  assert_eq!(defaults.seed, None);
  assert_eq!(defaults.plot_path, PathBuf::from("data_points.svg"));
  assert_eq!(defaults.plot_size(), (800, 600));

  env::set_var("DATAGEN_RANGE", "10,20");
  env::set_var("DATAGEN_SEED", "99");
  env::set_var("DATAGEN_DATA_PATH", "out.json");
  env::set_var("DATAGEN_PLOT_WIDTH", "1024");
  let custom = AppConfig::from_env().unwrap();
  assert_eq!(custom.range, XRange::new(10, 20).unwrap());
  assert_eq!(custom.seed, Some(99));
  assert_eq!(custom.data_path, Some(PathBuf::from("out.json")));
  assert_eq!(custom.plot_size(), (1024, 600));

  env::set_var("DATAGEN_RANGE", "20,10");
  assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

  env::set_var("DATAGEN_RANGE", "0,100");
  env::set_var("DATAGEN_PLOT_HEIGHT", "tall");
  assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

  env::set_var("DATAGEN_PLOT_HEIGHT", "0");
  assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

  clear();
}
