pub mod extent;
pub mod options;
pub mod projection;
pub mod types;

pub use extent::DataExtent;
pub use options::{
    ChartOptions, DEFAULT_PADDING_PX, DEFAULT_ROW_COUNT, DEVICE_PIXEL_SCALE, GridOptions, Padding,
    Series, SeriesKind,
};
pub use projection::{PlotMetrics, project_series};
pub use types::{PixelPoint, Point, SurfaceSize};
