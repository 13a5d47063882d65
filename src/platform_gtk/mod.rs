//! GTK4 embedding for a chart host.
//!
//! The adapter owns a `DrawingArea` whose draw callback resizes the host to
//! the widget's current width, scales the cairo context back down by the
//! device-pixel factor, and redraws the whole chart. Drawing is stateless,
//! so every GTK-triggered repaint re-renders from the host's options.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;

use gtk::prelude::*;
use tracing::warn;

use crate::api::ChartHost;
use crate::core::DEVICE_PIXEL_SCALE;
use crate::render::CairoSurface;

pub struct GtkChartAdapter {
    host: Rc<RefCell<ChartHost>>,
    drawing_area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(host: ChartHost) -> Self {
        let display_height = host.options().display_height;
        let host = Rc::new(RefCell::new(host));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_content_height(i32::try_from(display_height).unwrap_or(i32::MAX));

        let draw_host = Rc::clone(&host);
        drawing_area.set_draw_func(move |_, context, width, _height| {
            let mut host = draw_host.borrow_mut();
            host.resize(width.max(0) as u32);

            // The surface renders at twice display size; scale the widget's
            // context so the oversized raster lands back in display pixels.
            let scale = 1.0 / f64::from(DEVICE_PIXEL_SCALE);
            context.scale(scale, scale);

            let mut surface = CairoSurface::for_context(context);
            if let Err(error) = host.draw(&mut surface) {
                warn!(%error, "chart draw failed in gtk draw callback");
            }
        });

        Self { host, drawing_area }
    }

    /// Widget to pack into the application.
    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared host handle, e.g. to swap options before a redraw.
    #[must_use]
    pub fn host(&self) -> Rc<RefCell<ChartHost>> {
        Rc::clone(&self.host)
    }

    /// Schedules a repaint, e.g. after replacing the host's options.
    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}
