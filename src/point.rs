//! Core value types for series points and windowed statistics.

use serde::{Deserialize, Serialize};

/// A single timestamped observation in a series.
///
/// Points are immutable once inserted. Timestamps are milliseconds and may
/// be negative; values are not validated or deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Timestamp in milliseconds.
    pub timestamp_ms: i64,
    /// Observed value.
    pub value: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

/// Statistics for one fixed-width time window.
///
/// A window covers `[start, start + step_ms - 1]`. The width is supplied by
/// the aggregation call that produced the window and is not stored here; use
/// [`Window::end`] to recover the inclusive end timestamp.
///
/// `average` is `None` exactly when the window contains no points, so
/// consumers can distinguish "no data" from a measured average of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Inclusive start timestamp of the window, in milliseconds.
    pub start: i64,
    /// Arithmetic mean of the values in the window, or `None` when the
    /// window contains no points.
    pub average: Option<f64>,
    /// Number of points that fell inside the window.
    pub count: usize,
}

impl Window {
    /// Returns the inclusive end timestamp for a window of the given width.
    pub fn end(&self, step_ms: i64) -> i64 {
        self.start.saturating_add(step_ms - 1)
    }

    /// Returns `true` if the window contains no points.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(1_000, 42.5);
        assert_eq!(point.timestamp_ms, 1_000);
        assert_eq!(point.value, 42.5);
    }

    #[test]
    fn test_window_end() {
        let window = Window {
            start: 1_000,
            average: Some(5.0),
            count: 2,
        };
        assert_eq!(window.end(500), 1_499);
        assert_eq!(window.end(1), 1_000);
    }

    #[test]
    fn test_window_end_saturates() {
        let window = Window {
            start: i64::MAX - 10,
            average: None,
            count: 0,
        };
        assert_eq!(window.end(100), i64::MAX);
    }

    #[test]
    fn test_window_is_empty() {
        let empty = Window {
            start: 0,
            average: None,
            count: 0,
        };
        let full = Window {
            start: 0,
            average: Some(1.0),
            count: 3,
        };
        assert!(empty.is_empty());
        assert!(!full.is_empty());
    }
}
