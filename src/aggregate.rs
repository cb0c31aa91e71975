//! Fixed-width window aggregation and downsampling over a [`SeriesStore`].

use std::fmt;

use crate::point::{Point, Window};
use crate::store::SeriesStore;

/// Errors that can occur during window aggregation.
#[derive(Debug)]
pub enum AggregateError {
    /// The window width passed to an aggregation call was zero or negative.
    InvalidStep(i64),
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::InvalidStep(step_ms) => {
                write!(f, "window width must be positive, got {step_ms} ms")
            }
        }
    }
}

impl std::error::Error for AggregateError {}

impl SeriesStore {
    /// Computes per-window statistics for the named series over
    /// `[from_ms, to_ms]`.
    ///
    /// The range is tiled with contiguous windows of width `step_ms`, the
    /// first starting exactly at `from_ms`; the last window may extend past
    /// `to_ms`. Each window covers `[start, start + step_ms - 1]`, so every
    /// queried point belongs to exactly one window. Windows are returned in
    /// ascending start order, one per window even when empty.
    ///
    /// The result is a pure function of the store contents and arguments:
    /// calling this twice on an unmodified store yields identical output.
    ///
    /// # Arguments
    ///
    /// * `name` - Series to aggregate; an unknown name yields all-empty windows
    /// * `from_ms` - Start of the range (inclusive); `from_ms > to_ms` yields
    ///   no windows
    /// * `to_ms` - End of the range (inclusive)
    /// * `step_ms` - Window width in milliseconds, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::InvalidStep`] if `step_ms <= 0`. This is a
    /// caller bug, not a transient condition.
    #[allow(clippy::cast_precision_loss)]
    pub fn aggregate(
        &self,
        name: &str,
        from_ms: i64,
        to_ms: i64,
        step_ms: i64,
    ) -> Result<Vec<Window>, AggregateError> {
        if step_ms <= 0 {
            return Err(AggregateError::InvalidStep(step_ms));
        }

        // One sorted range query, then a single forward sweep: the cursor
        // only ever advances, so assignment of points to windows is linear.
        let points = self.query_range(name, from_ms, to_ms);
        let mut windows = Vec::new();
        let mut cursor = 0;
        let mut start = from_ms;

        while start <= to_ms {
            let end = start.saturating_add(step_ms - 1);

            let mut sum = 0.0;
            let mut count = 0usize;
            while cursor < points.len() && points[cursor].timestamp_ms <= end {
                sum += points[cursor].value;
                count += 1;
                cursor += 1;
            }

            let average = if count == 0 {
                None
            } else {
                Some(sum / count as f64)
            };
            windows.push(Window {
                start,
                average,
                count,
            });

            // A saturated end already covered everything up to i64::MAX.
            match start.checked_add(step_ms) {
                Some(next) => start = next,
                None => break,
            }
        }

        log::trace!(
            "aggregated '{name}' into {} windows of {step_ms} ms",
            windows.len()
        );
        Ok(windows)
    }

    /// Reduces the named series to one point per window over
    /// `[from_ms, to_ms]`.
    ///
    /// Calls [`SeriesStore::aggregate`] with the same arguments and maps each
    /// window to a point at the window start carrying the window average.
    /// Empty windows become points with value `0.0`, making them
    /// indistinguishable from windows that measured zero; callers that need
    /// to tell the two apart should use [`SeriesStore::aggregate`] directly.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::InvalidStep`] if `step_ms <= 0`.
    pub fn downsample(
        &self,
        name: &str,
        from_ms: i64,
        to_ms: i64,
        step_ms: i64,
    ) -> Result<Vec<Point>, AggregateError> {
        let windows = self.aggregate(name, from_ms, to_ms, step_ms)?;
        Ok(windows
            .iter()
            .map(|window| Point::new(window.start, window.average.unwrap_or(0.0)))
            .collect())
    }
}
