/* src/provider/data.rs */

use std::sync::Arc;

use crate::holder::Store;
use crate::key;
use crate::token::{ChangeNotifier, ReloadToken};

/// State shared by the bundled providers: a case-insensitive [`Store`] plus the
/// provider's reload token.
///
/// Custom providers can embed it and forward the [`Provider`](super::Provider)
/// methods to it.
#[derive(Debug, Default)]
pub struct ProviderData {
	store: Store,
	notifier: ChangeNotifier,
}

impl ProviderData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates provider state holding `entries`.
	pub fn with_entries<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			store: Store::with_entries(entries),
			notifier: ChangeNotifier::new(),
		}
	}

	/// The underlying store.
	pub fn store(&self) -> &Store {
		&self.store
	}

	pub fn try_get(&self, key: &str) -> Option<String> {
		self.store.get(key)
	}

	pub fn set(&self, key: &str, value: &str) {
		self.store.insert(key, value);
	}

	/// Atomically replaces the whole state, as a load does.
	pub fn replace<I, K, V>(&self, entries: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.store.replace_all(entries);
	}

	/// Own child segments under `parent`, merged with `earlier`, sorted with
	/// [`key::compare`]. Duplicates are kept.
	pub fn child_keys(&self, earlier: Vec<String>, parent: Option<&str>) -> Vec<String> {
		let mut keys = self.store.child_segments(parent);
		keys.extend(earlier);
		keys.sort_by(|a, b| key::compare(a, b));
		keys
	}

	pub fn reload_token(&self) -> Arc<ReloadToken> {
		self.notifier.token()
	}

	/// Fires the current reload token and installs a fresh one.
	pub fn raise(&self) {
		self.notifier.raise();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_child_keys_merges_earlier_and_sorts() {
		let data = ProviderData::with_entries([("b", "1"), ("a:x", "2"), ("10", "3"), ("2", "4")]);

		let keys = data.child_keys(vec!["c".to_string(), "a".to_string()], None);
		assert_eq!(keys, vec!["2", "10", "a", "a", "b", "c"]);
	}

	#[test]
	fn test_child_keys_reports_own_segments_regardless_of_earlier() {
		let data = ProviderData::with_entries([("wheels:year", "2008")]);

		let keys = data.child_keys(vec!["count".to_string()], Some("wheels"));
		assert_eq!(keys, vec!["count", "year"]);
	}

	#[test]
	fn test_raise_swaps_token() {
		let data = ProviderData::new();
		let before = data.reload_token();
		data.raise();

		assert!(before.has_changed());
		assert!(!data.reload_token().has_changed());
	}
}
