use serde::{Deserialize, Serialize};

use crate::core::types::{Point, SurfaceSize};
use crate::render::Color;

/// Backing-store pixels per display pixel.
///
/// Hosts size the raster surface at twice the display size and scale the
/// final presentation back down, keeping strokes and text crisp.
pub const DEVICE_PIXEL_SCALE: u32 = 2;

/// Fallback for grid rows when the option is absent or zero.
pub const DEFAULT_ROW_COUNT: u32 = 5;

/// Fallback for each padding side, in device pixels.
pub const DEFAULT_PADDING_PX: f64 = 40.0;

/// Drawing variant of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Horizontal grid configuration consumed by the axis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub enabled: bool,
    pub row_count: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            row_count: DEFAULT_ROW_COUNT,
        }
    }
}

impl GridOptions {
    /// Row count the axis pass actually uses; an explicit 0 falls back to
    /// the default, the same fallback applied when the option is absent.
    #[must_use]
    pub fn effective_row_count(self) -> u32 {
        if self.row_count == 0 {
            DEFAULT_ROW_COUNT
        } else {
            self.row_count
        }
    }
}

/// Plot padding per side, in device pixels.
///
/// Only `top` and `bottom` shrink the plotting height; the plot spans the
/// full surface width regardless of `left` and `right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(DEFAULT_PADDING_PX)
    }
}

impl Padding {
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }

    /// Padding the draw passes actually use; a zero or NaN side falls back
    /// to the default, the same fallback applied when the field is absent.
    #[must_use]
    pub fn effective(self) -> Self {
        Self {
            top: effective_side(self.top),
            bottom: effective_side(self.bottom),
            left: effective_side(self.left),
            right: effective_side(self.right),
        }
    }
}

fn effective_side(px: f64) -> f64 {
    if px == 0.0 || px.is_nan() {
        DEFAULT_PADDING_PX
    } else {
        px
    }
}

/// One named data series plus its drawing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub kind: SeriesKind,
    #[serde(default)]
    pub color: Color,
    pub name: String,
    pub points: Vec<Point>,
    #[serde(default)]
    pub grid: GridOptions,
    #[serde(default)]
    pub padding: Padding,
}

impl Series {
    /// Builds a series with default color (opaque black), grid, and padding.
    #[must_use]
    pub fn new(kind: SeriesKind, name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            kind,
            color: Color::default(),
            name: name.into(),
            points,
            grid: GridOptions::default(),
            padding: Padding::default(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

/// Full input for one draw call.
///
/// Series order is significant: index 0 is the reference series, which
/// drives axis layout and the empty-chart no-op guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Chart height in display (CSS) pixels.
    pub display_height: u32,
    /// Raster backing-store size in device pixels.
    #[serde(default)]
    pub surface: SurfaceSize,
    pub series: Vec<Series>,
}

impl ChartOptions {
    /// Builds options with the backing-store height derived from the display
    /// height. The width stays zero until the host learns the mounted display
    /// width and calls [`crate::api::ChartHost::resize`].
    #[must_use]
    pub fn new(display_height: u32, series: Vec<Series>) -> Self {
        Self {
            display_height,
            surface: SurfaceSize::new(0, display_height.saturating_mul(DEVICE_PIXEL_SCALE)),
            series,
        }
    }

    #[must_use]
    pub fn with_surface_size(mut self, surface: SurfaceSize) -> Self {
        self.surface = surface;
        self
    }

    /// Reference series, when any series exists.
    #[must_use]
    pub fn reference_series(&self) -> Option<&Series> {
        self.series.first()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PADDING_PX, Padding};

    #[test]
    fn zero_and_nan_padding_sides_fall_back_to_the_default() {
        let padding = Padding {
            top: 0.0,
            bottom: f64::NAN,
            left: 12.0,
            right: -0.0,
        };
        let effective = padding.effective();

        assert_eq!(effective.top, DEFAULT_PADDING_PX);
        assert_eq!(effective.bottom, DEFAULT_PADDING_PX);
        assert_eq!(effective.left, 12.0);
        assert_eq!(effective.right, DEFAULT_PADDING_PX);
    }

    #[test]
    fn positive_padding_sides_pass_through_unchanged() {
        let padding = Padding::uniform(25.0);
        assert_eq!(padding.effective(), padding);
    }
}
