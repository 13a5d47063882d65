use chartlet::core::{ChartOptions, GridOptions, Point, Series, SeriesKind, SurfaceSize};
use chartlet::render::{Color, RecordingSurface, SurfaceOp};

fn ramp(count: usize, slope: f64) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(i as f64, i as f64 * slope))
        .collect()
}

fn record(options: &ChartOptions) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    chartlet::draw(&mut surface, options).expect("recording draw");
    surface
}

#[test]
fn empty_reference_series_touches_nothing() {
    // The guard reads the first series only; data in later series does not
    // resurrect the draw.
    let options = ChartOptions::new(400, vec![
        Series::new(SeriesKind::Line, "empty", Vec::new()),
        Series::new(SeriesKind::Line, "full", ramp(10, 1.0)),
    ])
    .with_surface_size(SurfaceSize::new(1000, 800));

    let surface = record(&options);
    assert!(surface.ops().is_empty());
    assert_eq!(surface.measure_calls(), 0);
}

#[test]
fn chart_without_series_is_a_no_op() {
    let options =
        ChartOptions::new(400, Vec::new()).with_surface_size(SurfaceSize::new(1000, 800));

    let surface = record(&options);
    assert!(surface.ops().is_empty());
}

#[test]
fn disjoint_series_share_one_extent() {
    // Series y ranges do not overlap; both must project through the union
    // envelope, keeping the high series near the top padding edge.
    let low = Series::new(
        SeriesKind::Line,
        "low",
        vec![Point::new(0.0, 0.0), Point::new(1.0, 5.0), Point::new(2.0, 10.0)],
    );
    let high = Series::new(
        SeriesKind::Line,
        "high",
        vec![
            Point::new(0.0, 100.0),
            Point::new(1.0, 105.0),
            Point::new(2.0, 110.0),
        ],
    )
    .with_color("#ff0000".parse().expect("red"));

    let options = ChartOptions::new(150, vec![low, high])
        .with_surface_size(SurfaceSize::new(400, 300));
    let surface = record(&options);

    let path: Vec<(f64, f64)> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::LineTo { x, y } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(
        path,
        vec![
            (0.0, 260.0),
            (200.0, 250.0),
            (400.0, 240.0),
            (0.0, 60.0),
            (200.0, 50.0),
            (400.0, 40.0),
        ]
    );

    let strokes: Vec<Color> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::Stroke { color } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(strokes, vec![Color::rgb(0.0, 0.0, 0.0), Color::rgb(1.0, 0.0, 0.0)]);
}

#[test]
fn identical_options_record_identical_ops() {
    let options = ChartOptions::new(400, vec![
        Series::new(SeriesKind::Line, "a", ramp(100, 6.0))
            .with_grid(GridOptions {
                enabled: true,
                row_count: 3,
            }),
        Series::new(SeriesKind::Line, "b", ramp(100, 1.0)),
    ])
    .with_surface_size(SurfaceSize::new(1000, 800));

    let first = record(&options);
    let second = record(&options);
    assert_eq!(first.ops(), second.ops());
}

#[test]
fn redraw_after_clear_records_the_same_ops() {
    let options = ChartOptions::new(400, vec![Series::new(
        SeriesKind::Line,
        "ramp",
        ramp(100, 6.0),
    )])
    .with_surface_size(SurfaceSize::new(1000, 800));

    let mut surface = RecordingSurface::new();
    chartlet::draw(&mut surface, &options).expect("first draw");
    let first_pass = surface.ops().to_vec();
    assert!(!first_pass.is_empty());

    surface.clear();
    assert!(surface.ops().is_empty());
    assert_eq!(surface.measure_calls(), 0);

    chartlet::draw(&mut surface, &options).expect("redraw");
    assert_eq!(surface.ops(), first_pass.as_slice());
}

#[test]
fn zero_width_surface_labels_but_never_strokes() {
    let options = ChartOptions::new(400, vec![Series::new(
        SeriesKind::Line,
        "ramp",
        ramp(100, 6.0),
    )])
    .with_surface_size(SurfaceSize::new(0, 800));

    let surface = record(&options);
    assert_eq!(surface.fill_text_count(), 6);
    assert_eq!(surface.line_to_count(), 0);
    assert_eq!(surface.stroke_count(), 0);

    // Every surviving label is a Y label; the x-label row at the surface
    // bottom never renders without a drawable plot.
    assert!(surface.ops().iter().all(|op| match op {
        SurfaceOp::FillText { y, .. } => *y < 800.0,
        _ => false,
    }));
}

#[test]
fn bar_series_strokes_connected_path_and_suppresses_x_labels() {
    let options = ChartOptions::new(450, vec![Series::new(
        SeriesKind::Bar,
        "volume",
        ramp(20, 4.0),
    )])
    .with_surface_size(SurfaceSize::new(1000, 900));

    let surface = record(&options);

    // Y labels only: six rows, nothing on the x-label row at y = 900.
    assert_eq!(surface.fill_text_count(), 6);
    assert!(surface.ops().iter().any(|op| matches!(
        op,
        SurfaceOp::FillText { text, .. } if text == "76"
    )));
    assert!(!surface.ops().iter().any(|op| matches!(
        op,
        SurfaceOp::FillText { y, .. } if *y == 900.0
    )));
    assert_eq!(surface.measure_calls(), 0);

    // The bar path strokes the same connected polyline a line series would.
    let path: Vec<(f64, f64)> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::LineTo { x, y } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(path.len(), 20);
    assert_eq!(path[0], (0.0, 860.0));
    assert_eq!(path[19], (999.0, 40.0));

    assert_eq!(surface.stroke_count(), 1);
}

#[test]
fn draw_reports_ok_on_degenerate_input() {
    let options = ChartOptions::new(400, vec![Series::new(
        SeriesKind::Line,
        "flat",
        vec![Point::new(0.0, 1.0), Point::new(0.0, 1.0)],
    )])
    .with_surface_size(SurfaceSize::new(1000, 800));

    let mut surface = RecordingSurface::new();
    assert!(chartlet::draw(&mut surface, &options).is_ok());
}
