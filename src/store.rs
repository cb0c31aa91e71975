//! In-memory storage of named point series.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::point::Point;

/// An append-only in-memory store of named time series.
///
/// Each series is an insertion-ordered sequence of [`Point`]s keyed by name.
/// Series are created implicitly on first insert and are never deleted. The
/// whole map sits behind a single [`RwLock`], so appends are serialized
/// against readers and the store can be shared across threads.
///
/// # Example
///
/// ```rust
/// use tidemark::SeriesStore;
///
/// let store = SeriesStore::new();
/// store.insert("sensor_42.temp", 1_000, 21.5);
/// store.insert("sensor_42.temp", 2_000, 21.7);
///
/// let points = store.query_range("sensor_42.temp", 0, 1_500);
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].value, 21.5);
/// ```
pub struct SeriesStore {
    series: RwLock<HashMap<String, Vec<Point>>>,
}

impl SeriesStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            series: RwLock::new(HashMap::new()),
        }
    }

    // Appends never leave the map half-mutated, so a guard recovered from a
    // poisoned lock still observes a consistent map.
    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<Point>>> {
        self.series.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<Point>>> {
        self.series.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a point to the named series, creating the series if absent.
    ///
    /// Timestamps are not validated or ordered on insert; equal timestamps
    /// are allowed. This operation never fails.
    pub fn insert(&self, name: &str, timestamp_ms: i64, value: f64) {
        let mut series = self.write_guard();
        match series.get_mut(name) {
            Some(points) => points.push(Point::new(timestamp_ms, value)),
            None => {
                log::debug!("created series '{name}'");
                series.insert(name.to_string(), vec![Point::new(timestamp_ms, value)]);
            }
        }
    }

    /// Appends multiple `(timestamp_ms, value)` pairs to the named series in
    /// the order given.
    ///
    /// Equivalent to calling [`SeriesStore::insert`] once per pair, but takes
    /// the store lock a single time.
    pub fn insert_batch(&self, name: &str, points: &[(i64, f64)]) {
        if points.is_empty() {
            return;
        }
        let mut series = self.write_guard();
        if !series.contains_key(name) {
            log::debug!("created series '{name}'");
        }
        let sequence = series.entry(name.to_string()).or_default();
        sequence.extend(
            points
                .iter()
                .map(|&(timestamp_ms, value)| Point::new(timestamp_ms, value)),
        );
    }

    /// Returns all points of `name` with `from_ms <= timestamp <= to_ms`,
    /// sorted ascending by timestamp.
    ///
    /// The sort is stable, so points sharing a timestamp keep their insertion
    /// order. An unknown series yields an empty vector, not an error.
    pub fn query_range(&self, name: &str, from_ms: i64, to_ms: i64) -> Vec<Point> {
        let series = self.read_guard();
        let Some(points) = series.get(name) else {
            return Vec::new();
        };
        let mut selected: Vec<Point> = points
            .iter()
            .copied()
            .filter(|point| point.timestamp_ms >= from_ms && point.timestamp_ms <= to_ms)
            .collect();
        selected.sort_by_key(|point| point.timestamp_ms);
        selected
    }

    /// Returns a copy of the named series in insertion order.
    ///
    /// An unknown series yields an empty vector.
    pub fn points(&self, name: &str) -> Vec<Point> {
        self.read_guard().get(name).cloned().unwrap_or_default()
    }

    /// Returns the names of all series in the store, sorted.
    pub fn series_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_guard().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of points stored for the named series.
    pub fn len(&self, name: &str) -> usize {
        self.read_guard().get(name).map_or(0, Vec::len)
    }

    /// Returns `true` if the named series holds no points or does not exist.
    pub fn is_empty(&self, name: &str) -> bool {
        self.len(name) == 0
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}
