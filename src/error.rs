use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors surfaced by chart drawing.
///
/// Degenerate chart inputs (empty series, zero-size surfaces, flat extents)
/// are defined no-ops rather than errors; only unusable style values and
/// raster backend failures reach callers.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A style value that cannot be interpreted, such as a malformed color
    /// literal or a non-positive font size.
    #[error("invalid style value: {0}")]
    InvalidStyle(String),

    /// The raster backend rejected an operation or could not be created.
    #[error("backend failure: {0}")]
    Backend(String),
}
