// tools/datagen/src/generator.rs

//! Synthetic `y = x^1.5 + noise` data.

use crate::dataset::{DataPoint, Dataset};
use crate::errors::{AppError, Result};
use crate::range::XRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, warn};

pub const SAMPLE_SIZE: usize = 100;
pub const EXPONENT: f64 = 1.5;
pub const NOISE_STD_DEV: f64 = 10.0;

/// The noise-free curve.
pub fn curve(x: f64) -> f64 {
  x.powf(EXPONENT)
}

/// [`SAMPLE_SIZE`] points with integer `x` drawn uniformly from the range,
/// `y = x^1.5` plus zero-mean Gaussian noise, sorted ascending by `x`.
pub fn gen_data(range: XRange) -> Result<Dataset> {
  gen_data_with(range, &mut rand::thread_rng())
}

/// Same as [`gen_data`], reproducible for a given seed.
pub fn gen_data_seeded(range: XRange, seed: u64) -> Result<Dataset> {
  gen_data_with(range, &mut StdRng::seed_from_u64(seed))
}

pub fn gen_data_with<R: Rng>(range: XRange, rng: &mut R) -> Result<Dataset> {
  let noise = Normal::new(0.0, NOISE_STD_DEV).map_err(|e| AppError::Distribution(e.to_string()))?;

  if range.lo() < 0 {
    // x^1.5 has no real value below zero.
    warn!(%range, "Range includes negative x; those points get NaN y");
  }

  let mut xs: Vec<i64> = (0..SAMPLE_SIZE).map(|_| rng.gen_range(range.lo()..range.hi())).collect();
  xs.sort_unstable();

  let points: Vec<DataPoint> = xs
    .into_iter()
    .map(|x| {
      let x = x as f64;
      DataPoint {
        x,
        y: curve(x) + noise.sample(&mut *rng),
      }
    })
    .collect();

  debug!(%range, count = points.len(), "Generated dataset");
  Ok(Dataset::new(points))
}
