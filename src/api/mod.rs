//! Chart drawing entry points.
//!
//! [`draw`] renders one whole chart onto any [`DrawingSurface`] in a fixed
//! pass order: shared extent, then the axis pass driven by the reference
//! series, then one path pass per series. [`ChartHost`] wraps the same call
//! with the display-to-device sizing convention for embedders.

mod axis;
mod host;
mod series;

pub use host::ChartHost;

use tracing::debug;

use crate::core::{ChartOptions, DataExtent};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

/// Draws one whole chart onto `surface`.
///
/// Degenerate inputs are defined no-ops rather than errors: an absent or
/// empty reference series returns without touching the surface, and series
/// whose plot area is not drawable are skipped individually. Only backend
/// failures propagate.
pub fn draw<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    options: &ChartOptions,
) -> ChartResult<()> {
    let Some(reference) = options.reference_series() else {
        debug!("no series configured, nothing to draw");
        return Ok(());
    };
    if reference.points.is_empty() {
        debug!("reference series has no points, nothing to draw");
        return Ok(());
    }

    let extent = DataExtent::from_series(&options.series);
    debug!(
        series_count = options.series.len(),
        min_x = extent.min_x,
        max_x = extent.max_x,
        min_y = extent.min_y,
        max_y = extent.max_y,
        "draw chart"
    );

    axis::draw_axis_pass(surface, reference, extent, options.surface)?;
    for entry in &options.series {
        series::draw_series_pass(surface, entry, extent, options.surface)?;
    }

    Ok(())
}
