mod recording;
mod style;

pub use recording::{RecordingSurface, SurfaceOp, estimate_text_width_px};
pub use style::{Color, FontSpec};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface backend.
///
/// This is the raster-canvas subset the chart passes need: incremental path
/// building, a sequentially mutated {stroke color, font} style register,
/// baseline-anchored text fill, and text measurement.
///
/// Semantics every backend must honor:
/// - `line_to` with no current point behaves as `move_to`
/// - `stroke` draws the current path with the current stroke color
/// - `fill_text` fills opaque black regardless of the stroke register and
///   anchors `y` at the text baseline
/// - `fill_text` and `measure_text` fail with an invalid-style error while
///   the font register holds an unusable spec
/// - operations with non-finite coordinates are ignored
pub trait DrawingSurface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self) -> ChartResult<()>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()>;
    fn measure_text(&mut self, text: &str) -> ChartResult<f64>;
    fn set_stroke_color(&mut self, color: Color);
    fn set_font(&mut self, font: &FontSpec);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
