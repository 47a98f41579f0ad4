/* src/holder/store/write.rs */

use std::cell::RefCell;

use super::super::Entry;
use super::Store;
use crate::key;

impl Store {
	/// Inserts or updates a value. Returns the previous value, if any.
	///
	/// Updating keeps the spelling the key was first stored under.
	pub fn insert(&self, key: &str, value: impl Into<String>) -> Option<String> {
		let folded = key::fold(key);
		let value = value.into();

		// Capture the old entry inside rcu so the returned value matches the swap that won.
		let old_entry: RefCell<Option<Entry>> = RefCell::new(None);

		self.inner.rcu(|map| {
			let previous = map.get(&folded).cloned();
			let spelling = previous
				.as_ref()
				.map(|entry| entry.key.clone())
				.unwrap_or_else(|| key.to_string());
			*old_entry.borrow_mut() = previous;

			let mut new_map = (**map).clone();
			new_map.insert(
				folded.clone(),
				Entry {
					key: spelling,
					value: value.clone(),
				},
			);
			new_map
		});

		old_entry.into_inner().map(|entry| entry.value)
	}
}
