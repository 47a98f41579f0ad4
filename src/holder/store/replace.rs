/* src/holder/store/replace.rs */

use std::collections::HashMap;
use std::sync::Arc;

use super::super::Entry;
use super::Store;
use crate::key;

impl Store {
	/// Atomically replaces all entries.
	///
	/// Readers observe either the old map or the new one, never a mix. When
	/// `entries` repeats a key (ignoring case) the last value wins and the
	/// first spelling is kept.
	pub fn replace_all<I, K, V>(&self, entries: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut new_entries: HashMap<String, Entry> = HashMap::new();
		for (k, v) in entries {
			let k = k.into();
			let value = v.into();
			new_entries
				.entry(key::fold(&k))
				.and_modify(|entry| entry.value = value.clone())
				.or_insert(Entry { key: k, value });
		}

		self.inner.store(Arc::new(new_entries));
	}
}
