//! Weather Storage
//!
//! Storage implementations for the weather tracker.
//! Ships an ordered in-memory backend; other backends plug in through
//! [`traits::OrderedStore`].

pub mod memory_store;
pub mod traits;

pub use memory_store::SortedMemoryStore;
pub use traits::OrderedStore;

use weather_types::Measurement;

/// The store used for measurements: timestamp key to measurement
pub type MeasurementMemoryStore = SortedMemoryStore<String, Measurement>;
