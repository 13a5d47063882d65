use tracing::debug;

use crate::core::{ChartOptions, DEVICE_PIXEL_SCALE, SurfaceSize};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

/// Owns chart options and the display-to-device sizing convention.
///
/// Embedders construct the host with display-space sizes, forward resize
/// events through [`ChartHost::resize`], and redraw through any
/// [`DrawingSurface`]. Redraws are stateless: the host keeps no caches, so
/// the same options produce the same operation sequence on every call.
#[derive(Debug, Clone)]
pub struct ChartHost {
    options: ChartOptions,
}

impl ChartHost {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    /// Adopts a display-space width, rescaling the raster surface to device
    /// pixels. The surface height stays tied to the configured display
    /// height.
    pub fn resize(&mut self, display_width: u32) {
        let surface = SurfaceSize::new(
            display_width.saturating_mul(DEVICE_PIXEL_SCALE),
            self.options
                .display_height
                .saturating_mul(DEVICE_PIXEL_SCALE),
        );
        self.options.surface = surface;
        debug!(
            display_width,
            width = surface.width,
            height = surface.height,
            "chart host resized"
        );
    }

    /// Replaces the chart contents wholesale; callers trigger their own
    /// redraw afterwards.
    pub fn set_options(&mut self, options: ChartOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        self.options.surface
    }

    /// Draws the whole chart onto `surface`.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        super::draw(surface, &self.options)
    }
}
