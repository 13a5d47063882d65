use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::style::{Color, FontSpec};
use crate::render::DrawingSurface;

/// Cairo + Pango + PangoCairo drawing surface backend.
///
/// Two modes:
/// - offscreen image-surface rendering via [`CairoSurface::new_image`], with
///   PNG export
/// - in-place rendering on an external Cairo context via
///   [`CairoSurface::for_context`] (for example a GTK `DrawingArea` callback)
///
/// Text fills opaque black with `y` anchored at the Pango baseline; path
/// state is preserved across `fill_text` so interleaved grid segments and
/// labels stroke correctly.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    stroke_color: Color,
    font: FontSpec,
}

impl CairoSurface {
    /// Creates an offscreen ARGB32 image surface of the given device-pixel
    /// size. The surface starts fully transparent; call [`CairoSurface::clear`]
    /// for a solid background.
    pub fn new_image(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Backend(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.set_line_width(1.0);

        Ok(Self {
            context,
            image: Some(image),
            stroke_color: Color::default(),
            font: FontSpec::default(),
        })
    }

    /// Wraps an external Cairo context, e.g. inside a GTK draw callback.
    /// The caller keeps ownership of the target surface.
    #[must_use]
    pub fn for_context(context: &Context) -> Self {
        context.set_line_width(1.0);
        Self {
            context: context.clone(),
            image: None,
            stroke_color: Color::default(),
            font: FontSpec::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Paints the whole surface with one color, discarding the current path.
    pub fn clear(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.context.new_path();
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    /// Offscreen image surface, when this backend owns one.
    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    /// Writes the offscreen image as PNG. Errors in external-context mode.
    pub fn write_png<W: std::io::Write>(&mut self, writer: &mut W) -> ChartResult<()> {
        let Some(image) = self.image.as_mut() else {
            return Err(ChartError::Backend(
                "png export requires the offscreen image mode".to_owned(),
            ));
        };
        image.flush();
        image
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn prepared_layout(&self, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("{} {}", self.font.family, self.font.size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl DrawingSurface for CairoSurface {
    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        // cairo treats line_to without a current point as move_to; the
        // series pass leans on that for its first point.
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.stroke_color);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()> {
        self.font.validate()?;
        if !x.is_finite() || !y.is_finite() {
            return Ok(());
        }

        let saved_path = self
            .context
            .copy_path()
            .map_err(|err| map_backend_error("failed to snapshot path", err))?;
        self.context.new_path();

        let layout = self.prepared_layout(text);
        let baseline_px = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(&self.context, Color::default());
        self.context.move_to(x, y - baseline_px);
        pangocairo::functions::show_layout(&self.context, &layout);

        self.context.new_path();
        self.context.append_path(&saved_path);
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> ChartResult<f64> {
        self.font.validate()?;
        let layout = self.prepared_layout(text);
        let (width, _height) = layout.pixel_size();
        Ok(f64::from(width))
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
