use tracing::{debug, trace};

use crate::core::{
    DataExtent, PixelPoint, PlotMetrics, Series, SeriesKind, SurfaceSize, project_series,
};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

/// Draws one series onto the surface using the shared chart extent.
///
/// Skips the series when its plot area is not drawable or fewer than two
/// projected points survive; neither case is an error.
pub(super) fn draw_series_pass<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series: &Series,
    extent: DataExtent,
    size: SurfaceSize,
) -> ChartResult<()> {
    let Some(metrics) = PlotMetrics::resolve(size, series.padding.effective(), extent) else {
        debug!(name = %series.name, "plot area not drawable, skipping series");
        return Ok(());
    };

    let pixels = project_series(metrics, &series.points);
    if pixels.len() < 2 {
        trace!(
            name = %series.name,
            mapped = pixels.len(),
            "not enough drawable points to stroke"
        );
        return Ok(());
    }

    match series.kind {
        // Bars stroke the same connected path as lines; DESIGN.md records
        // the compatibility decision behind this.
        SeriesKind::Line | SeriesKind::Bar => stroke_polyline(surface, series, &pixels)?,
    }

    trace!(name = %series.name, points = pixels.len(), "stroked series path");
    Ok(())
}

fn stroke_polyline<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series: &Series,
    pixels: &[PixelPoint],
) -> ChartResult<()> {
    surface.begin_path();
    // The first line_to of a fresh path acts as a move, per the surface
    // contract.
    for pixel in pixels {
        surface.line_to(pixel.x, pixel.y);
    }
    surface.set_stroke_color(series.color);
    surface.stroke()
}
