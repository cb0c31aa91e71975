//! # tidemark
//!
//! A minimal in-memory store for named numeric time series with fixed-width
//! time-bucket aggregation and downsampling.
//!
//! ## Features
//!
//! - **Named series**: append-only `(timestamp, value)` sequences, created
//!   implicitly on first insert
//! - **Range queries**: inclusive-bound retrieval, timestamp-sorted with
//!   stable ties
//! - **Window aggregation**: per-window mean and count over contiguous
//!   fixed-width windows, with empty windows reported explicitly
//! - **Downsampling**: one representative point per window
//! - **CSV export**: raw series points as `ts,value` rows
//!
//! ## Quick Start
//!
//! ```rust
//! use tidemark::SeriesStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SeriesStore::new();
//! store.insert("server1.cpu.usage", 0, 10.0);
//! store.insert("server1.cpu.usage", 500, 20.0);
//! store.insert("server1.cpu.usage", 1_000, 30.0);
//!
//! // Two 500 ms windows covering [0, 999].
//! for window in store.aggregate("server1.cpu.usage", 0, 999, 500)? {
//!     println!("{}: {:?} ({} points)", window.start, window.average, window.count);
//! }
//!
//! // One representative point per window; empty windows become 0.0.
//! let points = store.downsample("server1.cpu.usage", 0, 999, 500)?;
//! assert_eq!(points.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! This crate does **not** persist data, coordinate multiple writers beyond
//! a store-wide lock, or compute statistics other than the mean. It is a
//! single-process library API, not a service.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod aggregate;
pub mod export;
pub mod point;
pub mod store;

pub use aggregate::AggregateError;
pub use export::{ExportError, export_series_csv, write_series_csv};
pub use point::{Point, Window};
pub use store::SeriesStore;
