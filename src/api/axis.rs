use smallvec::SmallVec;
use tracing::trace;

use crate::core::{DataExtent, PlotMetrics, Series, SeriesKind, SurfaceSize};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, FontSpec};

/// Light gray used for horizontal grid lines (`#bbb`).
pub(super) const GRID_LINE_COLOR: Color = Color::rgb(187.0 / 255.0, 187.0 / 255.0, 187.0 / 255.0);

/// One Y-axis row: the label value and its device-pixel baseline position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct YAxisRow {
    pub value: f64,
    pub y: f64,
}

/// One selected X-axis label slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct XLabelSlot {
    pub point_index: usize,
    pub x: f64,
    pub shift_left_by_text_width: bool,
}

/// Lays out `row_count + 1` evenly spaced Y rows spanning the plotting
/// height, values interpolated from `max_y` down to `min_y`.
///
/// Every row is offset downward by the bottom padding; `row_count` must be
/// at least 1 (callers resolve zero through `GridOptions::effective_row_count`).
pub(super) fn y_axis_rows(
    extent: DataExtent,
    plot_height: f64,
    row_count: u32,
    padding_bottom: f64,
) -> SmallVec<[YAxisRow; 8]> {
    let pixel_step = plot_height / f64::from(row_count);
    let value_step = extent.y_span() / f64::from(row_count);

    let mut rows = SmallVec::new();
    for index in 0..=row_count {
        rows.push(YAxisRow {
            value: extent.max_y - value_step * f64::from(index),
            y: pixel_step * f64::from(index) + padding_bottom,
        });
    }
    rows
}

/// Selects at most 6 X-axis label slots over `point_count` points.
///
/// Slot `index` labels point `index * step` at `plot_width / (labels − 1) ×
/// index`; the final selected slot is flagged for a leftward shift by its
/// measured text width so it stays inside the right edge. A single point
/// yields a non-finite slot position, which downstream drawing drops.
pub(super) fn x_label_slots(point_count: usize, plot_width: f64) -> SmallVec<[XLabelSlot; 6]> {
    let mut slots = SmallVec::new();
    if point_count == 0 {
        return slots;
    }

    let labels_count = point_count.min(6);
    let step = (point_count as f64 / labels_count as f64).round() as usize;
    let x_step = plot_width / (labels_count - 1) as f64;

    for index in 0..labels_count {
        let point_index = index * step;
        if point_index >= point_count {
            break;
        }
        slots.push(XLabelSlot {
            point_index,
            x: x_step * index as f64,
            shift_left_by_text_width: index == labels_count - 1,
        });
    }
    slots
}

/// Draws Y labels, the optional grid, and (for line charts) X labels, all
/// from the reference series' configuration.
///
/// Y rows draw unconditionally; only the X-label block requires a drawable
/// plot area. The pass mutates the surface's font and stroke registers.
pub(super) fn draw_axis_pass<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    reference: &Series,
    extent: DataExtent,
    size: SurfaceSize,
) -> ChartResult<()> {
    let padding = reference.padding.effective();
    let grid = reference.grid;
    let plot_height = f64::from(size.height) - padding.top - padding.bottom;
    let rows = y_axis_rows(extent, plot_height, grid.effective_row_count(), padding.bottom);

    surface.set_font(&FontSpec::default());
    if grid.enabled {
        surface.begin_path();
    }
    for row in &rows {
        surface.fill_text(&row.value.to_string(), 0.0, row.y)?;
        if grid.enabled {
            surface.move_to(0.0, row.y);
            surface.line_to(f64::from(size.width), row.y);
        }
    }
    if grid.enabled {
        surface.set_stroke_color(GRID_LINE_COLOR);
        surface.stroke()?;
    }

    if reference.kind != SeriesKind::Line {
        trace!(kind = ?reference.kind, "reference series kind suppresses x labels");
        return Ok(());
    }
    let Some(metrics) = PlotMetrics::resolve(size, padding, extent) else {
        trace!("plot area not drawable, skipping x labels");
        return Ok(());
    };

    for slot in x_label_slots(reference.points.len(), metrics.plot_width) {
        let text = reference.points[slot.point_index].x.to_string();
        let text_width = surface.measure_text(&text)?;
        let x = if slot.shift_left_by_text_width {
            slot.x - text_width
        } else {
            slot.x
        };
        surface.fill_text(&text, x, f64::from(size.height))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{x_label_slots, y_axis_rows};
    use crate::core::DataExtent;

    fn extent_y(min_y: f64, max_y: f64) -> DataExtent {
        DataExtent {
            min_x: 0.0,
            max_x: 1.0,
            min_y,
            max_y,
        }
    }

    #[test]
    fn y_rows_interpolate_from_max_down_to_min() {
        let rows = y_axis_rows(extent_y(0.0, 594.0), 720.0, 3, 40.0);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].value, 594.0);
        assert_eq!(rows[1].value, 396.0);
        assert_eq!(rows[2].value, 198.0);
        assert_eq!(rows[3].value, 0.0);
    }

    #[test]
    fn y_rows_offset_by_bottom_padding() {
        let rows = y_axis_rows(extent_y(0.0, 100.0), 720.0, 3, 40.0);

        assert_eq!(rows[0].y, 40.0);
        assert_eq!(rows[1].y, 280.0);
        assert_eq!(rows[2].y, 520.0);
        assert_eq!(rows[3].y, 760.0);
    }

    #[test]
    fn hundred_points_select_six_slots_with_rounded_step() {
        let slots = x_label_slots(100, 1000.0);

        let indices: Vec<usize> = slots.iter().map(|slot| slot.point_index).collect();
        assert_eq!(indices, vec![0, 17, 34, 51, 68, 85]);
        assert_eq!(slots[1].x, 200.0);
        assert!(slots[5].shift_left_by_text_width);
        assert!(slots.iter().take(5).all(|slot| !slot.shift_left_by_text_width));
    }

    #[test]
    fn slot_selection_never_exceeds_six() {
        // 20 points round to step 3; the raw stride would reach a seventh
        // label past the right edge, so selection stops at the cap.
        let slots = x_label_slots(20, 600.0);

        assert_eq!(slots.len(), 6);
        let indices: Vec<usize> = slots.iter().map(|slot| slot.point_index).collect();
        assert_eq!(indices, vec![0, 3, 6, 9, 12, 15]);
        assert!(slots[5].shift_left_by_text_width);
    }

    #[test]
    fn stride_past_the_end_shortens_the_selection() {
        // 10 points: step 2 exhausts the series after five slots, so no slot
        // carries the final-label shift.
        let slots = x_label_slots(10, 600.0);

        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|slot| !slot.shift_left_by_text_width));
    }

    #[test]
    fn single_point_slot_is_non_finite() {
        let slots = x_label_slots(1, 600.0);

        assert_eq!(slots.len(), 1);
        assert!(!slots[0].x.is_finite());
    }

    #[test]
    fn no_points_no_slots() {
        assert!(x_label_slots(0, 600.0).is_empty());
    }
}
