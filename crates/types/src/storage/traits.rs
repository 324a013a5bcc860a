//! Storage traits for pluggable ordered storage implementations

use async_trait::async_trait;

use super::StorageResult;
use crate::Measurement;

/// Replacement function applied to the current value by [`OrderedStoreTrait::update_with`]
pub type MergeFn<V> = Box<dyn FnOnce(&V) -> V + Send>;

/// A key-ordered container with point and range access.
///
/// Keys are unique. `create` only inserts absent keys; `update`, `update_with`
/// and `delete` only touch present keys. Range results are ascending by key.
/// Implementations must make every operation atomic with respect to the others.
#[async_trait]
pub trait OrderedStoreTrait<K, V>: Send + Sync
where
	K: Ord + Send + Sync + 'static,
	V: Send + Sync + 'static,
{
	/// Insert a new entry; fails with `EntityExists` if the key is present
	async fn create(&self, value: V, key: K) -> StorageResult<()>;

	/// Get the value at `key`; fails with `EntityNotFound` if absent
	async fn retrieve(&self, key: &K) -> StorageResult<V>;

	/// Get all values with keys between `from` and `to`, ascending.
	///
	/// An empty or inverted range yields an empty Vec.
	async fn retrieve_range(
		&self,
		from: &K,
		from_inclusive: bool,
		to: &K,
		to_inclusive: bool,
	) -> StorageResult<Vec<V>>;

	/// Replace the entry at `key`, returning the previous value
	async fn update(&self, value: V, key: K) -> StorageResult<V>;

	/// Replace the entry at `key` with `merge(current)` in one atomic step,
	/// returning the previous value
	async fn update_with(&self, key: &K, merge: MergeFn<V>) -> StorageResult<V>;

	/// Remove the entry at `key`, returning it
	async fn delete(&self, key: &K) -> StorageResult<V>;

	/// Remove every entry
	async fn clear(&self) -> StorageResult<()>;

	/// Number of entries
	async fn len(&self) -> StorageResult<usize>;

	async fn is_empty(&self) -> StorageResult<bool> {
		Ok(self.len().await? == 0)
	}

	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}
}

/// Measurements keyed by their timestamp string
pub type MeasurementStore = dyn OrderedStoreTrait<String, Measurement>;
