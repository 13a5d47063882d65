use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::extent::DataExtent;
use crate::core::options::Padding;
use crate::core::types::{PixelPoint, Point, SurfaceSize};

/// Plot-area geometry and data-to-pixel ratios resolved for one series pass.
///
/// The plot spans the full surface width; only top/bottom padding shrink the
/// plotting height. Ratios divide by the extent spans, so degenerate extents
/// produce non-finite ratios that surface later as dropped pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMetrics {
    pub plot_width: f64,
    pub plot_height: f64,
    pub x_ratio: f64,
    pub y_ratio: f64,
    surface_height: f64,
    padding_bottom: f64,
}

impl PlotMetrics {
    /// Resolves plot geometry for a surface, padding, and shared extent.
    ///
    /// Returns `None` when either plot dimension is zero or non-finite; the
    /// caller skips scaling and drawing entirely in that case.
    #[must_use]
    pub fn resolve(surface: SurfaceSize, padding: Padding, extent: DataExtent) -> Option<Self> {
        let plot_width = f64::from(surface.width);
        let plot_height = f64::from(surface.height) - padding.top - padding.bottom;
        if !is_drawable(plot_width) || !is_drawable(plot_height) {
            return None;
        }

        Some(Self {
            plot_width,
            plot_height,
            x_ratio: plot_width / extent.x_span(),
            y_ratio: plot_height / extent.y_span(),
            surface_height: f64::from(surface.height),
            padding_bottom: padding.bottom,
        })
    }

    /// Maps one data point to floored device-pixel coordinates.
    ///
    /// Neither axis subtracts the extent minimum: data that does not start
    /// at zero shifts off-origin instead of snapping to the plot's left
    /// edge.
    #[must_use]
    pub fn project(self, point: Point) -> PixelPoint {
        PixelPoint {
            x: (point.x * self.x_ratio).floor(),
            y: (self.surface_height - self.padding_bottom - point.y * self.y_ratio).floor(),
        }
    }
}

fn is_drawable(dimension: f64) -> bool {
    dimension.is_finite() && dimension != 0.0
}

/// Projects a whole series into pixel space, dropping points that map to
/// non-finite coordinates (raster surfaces ignore those, so they carry no
/// pixels).
#[must_use]
pub fn project_series(metrics: PlotMetrics, points: &[Point]) -> Vec<PixelPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| metrics.project(*point))
            .filter(|pixel| pixel.is_finite())
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| metrics.project(*point))
            .filter(|pixel| pixel.is_finite())
            .collect()
    }
}
