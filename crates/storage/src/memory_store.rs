//! In-memory ordered storage backed by a `BTreeMap` behind a `RwLock`

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::traits::{MergeFn, OrderedStore, StorageError, StorageResult};

/// In-memory key-ordered store.
///
/// Clones share the same underlying map. A single lock guards the whole map:
/// reads (point and range) share it, writes hold it exclusively for the whole
/// operation, so a range scan always sees one consistent snapshot.
pub struct SortedMemoryStore<K, V> {
	entries: Arc<RwLock<BTreeMap<K, V>>>,
}

impl<K: Ord, V> SortedMemoryStore<K, V> {
	/// Create a new, empty store
	pub fn new() -> Self {
		Self {
			entries: Arc::new(RwLock::new(BTreeMap::new())),
		}
	}

	/// Create a store pre-populated with entries; later duplicates replace earlier ones
	pub fn with_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self {
			entries: Arc::new(RwLock::new(entries.into_iter().collect())),
		}
	}
}

impl<K, V> Clone for SortedMemoryStore<K, V> {
	fn clone(&self) -> Self {
		Self {
			entries: Arc::clone(&self.entries),
		}
	}
}

impl<K: Ord, V> Default for SortedMemoryStore<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

fn bound<K>(key: &K, inclusive: bool) -> Bound<&K> {
	if inclusive {
		Bound::Included(key)
	} else {
		Bound::Excluded(key)
	}
}

/// Bounds for `BTreeMap::range`, or `None` when the range is empty.
///
/// `BTreeMap::range` panics on an inverted range and on `(Excluded(k), Excluded(k))`.
fn range_bounds<'a, K: Ord>(
	from: &'a K,
	from_inclusive: bool,
	to: &'a K,
	to_inclusive: bool,
) -> Option<(Bound<&'a K>, Bound<&'a K>)> {
	match from.cmp(to) {
		Ordering::Greater => None,
		Ordering::Equal if !(from_inclusive && to_inclusive) => None,
		_ => Some((bound(from, from_inclusive), bound(to, to_inclusive))),
	}
}

#[async_trait]
impl<K, V> OrderedStore<K, V> for SortedMemoryStore<K, V>
where
	K: Ord + Clone + Display + Send + Sync + 'static,
	V: Clone + Send + Sync + 'static,
{
	async fn create(&self, value: V, key: K) -> StorageResult<()> {
		let mut entries = self.entries.write();
		match entries.entry(key) {
			Entry::Occupied(existing) => Err(StorageError::EntityExists {
				id: existing.key().to_string(),
			}),
			Entry::Vacant(slot) => {
				debug!("Created entry {}", slot.key());
				slot.insert(value);
				Ok(())
			},
		}
	}

	async fn retrieve(&self, key: &K) -> StorageResult<V> {
		self.entries
			.read()
			.get(key)
			.cloned()
			.ok_or_else(|| StorageError::EntityNotFound {
				id: key.to_string(),
			})
	}

	async fn retrieve_range(
		&self,
		from: &K,
		from_inclusive: bool,
		to: &K,
		to_inclusive: bool,
	) -> StorageResult<Vec<V>> {
		let Some(bounds) = range_bounds(from, from_inclusive, to, to_inclusive) else {
			debug!("Empty range {} .. {}", from, to);
			return Ok(Vec::new());
		};

		let entries = self.entries.read();
		let values: Vec<V> = entries
			.range::<K, _>(bounds)
			.map(|(_, value)| value.clone())
			.collect();
		debug!("Range {} .. {} matched {} entries", from, to, values.len());
		Ok(values)
	}

	async fn update(&self, value: V, key: K) -> StorageResult<V> {
		let mut entries = self.entries.write();
		match entries.get_mut(&key) {
			Some(current) => {
				debug!("Updated entry {}", key);
				Ok(std::mem::replace(current, value))
			},
			None => Err(StorageError::EntityNotFound {
				id: key.to_string(),
			}),
		}
	}

	async fn update_with(&self, key: &K, merge: MergeFn<V>) -> StorageResult<V> {
		let mut entries = self.entries.write();
		match entries.get_mut(key) {
			Some(current) => {
				let merged = merge(current);
				debug!("Merged entry {}", key);
				Ok(std::mem::replace(current, merged))
			},
			None => Err(StorageError::EntityNotFound {
				id: key.to_string(),
			}),
		}
	}

	async fn delete(&self, key: &K) -> StorageResult<V> {
		let removed = self.entries.write().remove(key);
		match removed {
			Some(value) => {
				debug!("Deleted entry {}", key);
				Ok(value)
			},
			None => Err(StorageError::EntityNotFound {
				id: key.to_string(),
			}),
		}
	}

	async fn clear(&self) -> StorageResult<()> {
		let mut entries = self.entries.write();
		let removed = entries.len();
		entries.clear();
		info!("Cleared {} entries from memory store", removed);
		Ok(())
	}

	async fn len(&self) -> StorageResult<usize> {
		Ok(self.entries.read().len())
	}
}
