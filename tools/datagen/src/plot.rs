// tools/datagen/src/plot.rs

//! Scatter plot rendering to SVG.

use crate::dataset::Dataset;
use crate::errors::{AppError, Result};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

pub const TITLE: &str = "Data Points";
pub const X_LABEL: &str = "x";
pub const Y_LABEL: &str = "f(x)";

fn render_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> AppError {
  AppError::Render(e.to_string())
}

// A zero-width axis cannot be drawn; give it half a unit either side.
fn axis(bounds: (f64, f64)) -> (f64, f64) {
  let (lo, hi) = bounds;
  if hi - lo > f64::EPSILON {
    (lo, hi)
  } else {
    (lo - 0.5, hi + 0.5)
  }
}

/// Writes the scatter plot of `data` to an SVG file at `path`.
pub fn plot_data(data: &Dataset, path: impl AsRef<Path>, size: (u32, u32)) -> Result<()> {
  let path = path.as_ref();
  draw(data, SVGBackend::new(path, size))?;
  debug!(path = %path.display(), "Plot written");
  Ok(())
}

/// Renders the scatter plot of `data` as an SVG document.
pub fn plot_to_svg_string(data: &Dataset, size: (u32, u32)) -> Result<String> {
  let mut svg = String::new();
  draw(data, SVGBackend::with_string(&mut svg, size))?;
  Ok(svg)
}

/// Axis limits are the min/max of the finite data; non-finite points are not drawn.
fn draw<DB: DrawingBackend>(data: &Dataset, backend: DB) -> Result<()> {
  let (x_min, x_max) = axis(data.x_bounds().ok_or(AppError::EmptyDataset)?);
  let (y_min, y_max) = axis(data.y_bounds().ok_or(AppError::EmptyDataset)?);

  let root = backend.into_drawing_area();
  root.fill(&WHITE).map_err(render_err)?;

  let mut chart = ChartBuilder::on(&root)
    .caption(TITLE, ("sans-serif", 24).into_font())
    .margin(10)
    .x_label_area_size(40)
    .y_label_area_size(60)
    .build_cartesian_2d(x_min..x_max, y_min..y_max)
    .map_err(render_err)?;

  chart
    .configure_mesh()
    .x_desc(X_LABEL)
    .y_desc(Y_LABEL)
    .draw()
    .map_err(render_err)?;

  chart
    .draw_series(
      data
        .points()
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| Circle::new((p.x, p.y), 3, BLUE.filled())),
    )
    .map_err(render_err)?
    .label(TITLE)
    .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

  chart
    .configure_series_labels()
    .background_style(WHITE.mix(0.8))
    .border_style(BLACK)
    .draw()
    .map_err(render_err)?;

  root.present().map_err(render_err)?;
  Ok(())
}
