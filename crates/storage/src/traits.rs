//! Storage traits for pluggable storage implementations

// Re-export the storage traits from types crate
pub use weather_types::storage::{
	MeasurementStore, MergeFn, OrderedStoreTrait as OrderedStore, StorageError, StorageResult,
};
