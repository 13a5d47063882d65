//! chartlet: a small line and bar chart renderer.
//!
//! The crate draws a whole chart in one synchronous pass onto any
//! [`render::DrawingSurface`]: a labelled Y axis with an optional horizontal
//! grid, sampled X labels, and one stroked path per series. Data maps to
//! pixels through a shared extent so every series shares one coordinate
//! system, and hosts double display sizes into device pixels for crisp
//! output on scaled surfaces.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartHost, draw};
pub use error::{ChartError, ChartResult};
pub use self::core::{ChartOptions, GridOptions, Padding, Point, Series, SeriesKind};
