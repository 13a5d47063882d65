use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::DrawingSurface;
use crate::render::style::{Color, FontSpec};

/// One recorded drawing operation.
///
/// `Stroke` and `FillText` snapshot the style register they consumed, so a
/// recorded log fully determines the pixels a raster backend would produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Stroke {
        color: Color,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: FontSpec,
    },
}

/// Deterministic, backend-independent text width estimate.
///
/// Per-character advances approximate a proportional face; digits dominate
/// axis labels so they get the most faithful unit.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}

/// Surface that records every operation instead of rasterizing.
///
/// Used by tests, benches, and headless hosts. Coordinates that are not
/// finite are ignored, the way a raster canvas ignores them; recorded logs
/// therefore compare cleanly with `==`. Text measurement is served by
/// [`estimate_text_width_px`] against the current font register.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    stroke_color: Color,
    font: FontSpec,
    measure_calls: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    #[must_use]
    pub fn measure_calls(&self) -> usize {
        self.measure_calls
    }

    #[must_use]
    pub fn line_to_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::LineTo { .. }))
            .count()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke { .. }))
            .count()
    }

    #[must_use]
    pub fn fill_text_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::FillText { .. }))
            .count()
    }

    /// Discards the recorded ops and measure count so the surface can be
    /// reused for another draw. The style register keeps its last values,
    /// like a raster context that outlives a frame.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.measure_calls = 0;
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.ops.push(SurfaceOp::Stroke {
            color: self.stroke_color,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()> {
        self.font.validate()?;
        if !x.is_finite() || !y.is_finite() {
            return Ok(());
        }
        self.ops.push(SurfaceOp::FillText {
            text: text.to_owned(),
            x,
            y,
            font: self.font.clone(),
        });
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> ChartResult<f64> {
        self.font.validate()?;
        self.measure_calls += 1;
        Ok(estimate_text_width_px(text, self.font.size_px))
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }
}
