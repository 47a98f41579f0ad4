mod read;
mod replace;
mod write;

use std::collections::HashMap;

use arc_swap::ArcSwap;

use super::Entry;

/// Thread-safe string store keyed case-insensitively.
///
/// Uses RCU (Read-Copy-Update) for lock-free reads and atomic updates. The map
/// is keyed by the folded key; each [`Entry`] keeps the original spelling.
pub struct Store {
	pub(crate) inner: ArcSwap<HashMap<String, Entry>>,
}

impl Store {
	/// Creates a new empty store.
	pub fn new() -> Self {
		Self {
			inner: ArcSwap::from_pointee(HashMap::new()),
		}
	}

	/// Creates a store holding `entries`. Later duplicates win.
	pub fn with_entries<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let store = Self::new();
		store.replace_all(entries);
		store
	}
}

impl Default for Store {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Store {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Store").field("len", &self.len()).finish()
	}
}
