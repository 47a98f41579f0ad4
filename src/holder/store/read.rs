/* src/holder/store/read.rs */

use super::Store;
use crate::key;

impl Store {
	/// Gets a value by key, ignoring case. This is a wait-free operation.
	pub fn get(&self, key: &str) -> Option<String> {
		let snapshot = self.inner.load();
		snapshot.get(&key::fold(key)).map(|entry| entry.value.clone())
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.inner.load().len()
	}

	/// Returns true if the store is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.load().is_empty()
	}

	/// Returns the segment directly below `parent` for every key beneath it.
	///
	/// With `parent == None` the first segment of every key is returned. The
	/// result is unordered and may repeat a segment once per descendant key.
	pub fn child_segments(&self, parent: Option<&str>) -> Vec<String> {
		let snapshot = self.inner.load();
		snapshot
			.values()
			.filter_map(|entry| match parent {
				None => Some(entry.key.as_str()),
				Some(parent) => key::strip_parent(&entry.key, parent),
			})
			.map(|rest| match rest.find(key::SEPARATOR) {
				Some(idx) => rest[..idx].to_string(),
				None => rest.to_string(),
			})
			.collect()
	}
}
