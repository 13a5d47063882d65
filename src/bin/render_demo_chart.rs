use std::path::{Path, PathBuf};

use serde::Serialize;

use chartlet::api::ChartHost;
use chartlet::core::{ChartOptions, GridOptions, Point, Series, SeriesKind, SurfaceSize};
use chartlet::render::{Color, RecordingSurface};

const DEFAULT_DISPLAY_WIDTH: u32 = 500;
const DEFAULT_OUTPUT_ROOT: &str = "target/demo_charts";

#[derive(Debug)]
struct CliArgs {
    display_width: u32,
    output_root: PathBuf,
}

#[derive(Debug, Serialize)]
struct ChartSummary<'a> {
    chart: &'a str,
    surface: SurfaceSize,
    ops: usize,
    line_segments: usize,
    strokes: usize,
    labels: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = chartlet::telemetry::init_default_tracing();
    let args = parse_args()?;

    let mut recording = RecordingSurface::new();
    for (name, options) in demo_charts()? {
        let mut host = ChartHost::new(options);
        host.resize(args.display_width);

        recording.clear();
        host.draw(&mut recording)
            .map_err(|err| format!("chart `{name}` draw failed: {err}"))?;

        let summary = ChartSummary {
            chart: name,
            surface: host.surface_size(),
            ops: recording.ops().len(),
            line_segments: recording.line_to_count(),
            strokes: recording.stroke_count(),
            labels: recording.fill_text_count(),
        };
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|err| format!("chart `{name}` summary encoding failed: {err}"))?;
        println!("{rendered}");

        if let Some(path) = export_png(&host, name, &args.output_root)? {
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}

/// Two stacked line series on one chart, plus a standalone bar chart.
fn demo_charts() -> Result<Vec<(&'static str, ChartOptions)>, String> {
    let demo_grid = GridOptions {
        enabled: true,
        row_count: 3,
    };

    let steep = Series::new(SeriesKind::Line, "steep", ramp_points(100, 6.0))
        .with_color(parse_color("#ff0000")?)
        .with_grid(demo_grid);
    let diagonal = Series::new(SeriesKind::Line, "diagonal", ramp_points(100, 1.0))
        .with_color(parse_color("rgba(174, 7, 192)")?)
        .with_grid(demo_grid);
    let volume = Series::new(SeriesKind::Bar, "volume", ramp_points(20, 4.0));

    Ok(vec![
        ("line_chart", ChartOptions::new(400, vec![steep, diagonal])),
        ("bar_chart", ChartOptions::new(450, vec![volume])),
    ])
}

fn ramp_points(count: usize, slope: f64) -> Vec<Point> {
    (0..count)
        .map(|index| {
            let x = index as f64;
            Point::new(x, x * slope)
        })
        .collect()
}

fn parse_color(literal: &str) -> Result<Color, String> {
    literal
        .parse()
        .map_err(|err| format!("bad demo color `{literal}`: {err}"))
}

#[cfg(feature = "cairo-backend")]
fn export_png(host: &ChartHost, name: &str, output_root: &Path) -> Result<Option<PathBuf>, String> {
    use std::fs::{self, File};

    use chartlet::render::CairoSurface;

    let size = host.surface_size();
    let width = i32::try_from(size.width)
        .map_err(|_| format!("chart `{name}` surface width overflows i32"))?;
    let height = i32::try_from(size.height)
        .map_err(|_| format!("chart `{name}` surface height overflows i32"))?;

    let mut surface = CairoSurface::new_image(width, height)
        .map_err(|err| format!("chart `{name}` surface init failed: {err}"))?;
    surface
        .clear(Color::rgb(1.0, 1.0, 1.0))
        .map_err(|err| format!("chart `{name}` clear failed: {err}"))?;
    host.draw(&mut surface)
        .map_err(|err| format!("chart `{name}` draw failed: {err}"))?;

    fs::create_dir_all(output_root)
        .map_err(|err| format!("failed to create `{}`: {err}", output_root.display()))?;
    let output_path = output_root.join(format!("{name}.png"));
    let mut file = File::create(&output_path)
        .map_err(|err| format!("failed to create `{}`: {err}", output_path.display()))?;
    surface
        .write_png(&mut file)
        .map_err(|err| format!("failed to write `{}`: {err}", output_path.display()))?;

    Ok(Some(output_path))
}

#[cfg(not(feature = "cairo-backend"))]
fn export_png(
    _host: &ChartHost,
    _name: &str,
    _output_root: &Path,
) -> Result<Option<PathBuf>, String> {
    Ok(None)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut display_width = DEFAULT_DISPLAY_WIDTH;
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--display-width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --display-width".to_owned())?;
                display_width = value
                    .parse()
                    .map_err(|err| format!("bad --display-width `{value}`: {err}"))?;
            }
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        display_width,
        output_root,
    })
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_demo_chart -- [options]\n\nOptions:\n  --display-width <px>   Display width to lay the charts out at (default: {DEFAULT_DISPLAY_WIDTH})\n  --output-root <path>   Directory for png exports with feature `cairo-backend` (default: {DEFAULT_OUTPUT_ROOT})\n  -h, --help             Show this message"
    )
}
