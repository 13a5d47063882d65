use serde::{Deserialize, Serialize};

use crate::core::options::Series;

/// Chart-global data bounds over every point of every series.
///
/// Computed fresh per draw and never persisted; all series share one extent
/// so their pixels land in a common coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataExtent {
    /// Scans all series left-to-right, series-by-series, and returns the
    /// coordinate-wise min/max envelope.
    ///
    /// Zero points yields the all-zero extent, a valid degenerate input for
    /// downstream scaling rather than an error. NaN coordinates poison the
    /// running bound they touch; any bound still NaN after the scan collapses
    /// to 0.0 so scaling always sees concrete numbers.
    #[must_use]
    pub fn from_series(series: &[Series]) -> Self {
        let mut bounds: Option<DataExtent> = None;

        for item in series {
            for point in &item.points {
                let envelope = bounds.get_or_insert(DataExtent {
                    min_x: point.x,
                    max_x: point.x,
                    min_y: point.y,
                    max_y: point.y,
                });
                if envelope.min_x > point.x {
                    envelope.min_x = point.x;
                }
                if envelope.max_x < point.x {
                    envelope.max_x = point.x;
                }
                if envelope.min_y > point.y {
                    envelope.min_y = point.y;
                }
                if envelope.max_y < point.y {
                    envelope.max_y = point.y;
                }
            }
        }

        bounds.unwrap_or_default().nan_collapsed()
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.max_y - self.min_y
    }

    fn nan_collapsed(mut self) -> Self {
        for bound in [
            &mut self.min_x,
            &mut self.max_x,
            &mut self.min_y,
            &mut self.max_y,
        ] {
            if bound.is_nan() {
                *bound = 0.0;
            }
        }
        self
    }
}
