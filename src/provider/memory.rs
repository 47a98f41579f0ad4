/* src/provider/memory.rs */

use std::sync::Arc;

use super::{LoadError, Provider, ProviderData, Source};
use crate::config::Configuration;
use crate::token::ReloadToken;

/// A source of fixed in-memory pairs, useful for defaults and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	initial: Vec<(String, String)>,
}

impl MemorySource {
	/// Creates an empty MemorySource.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an initial pair.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.initial.push((key.into(), value.into()));
		self
	}
}

impl<K, V> FromIterator<(K, V)> for MemorySource
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			initial: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

impl Source for MemorySource {
	fn build(&self, _root: &Configuration) -> Result<Arc<dyn Provider>, LoadError> {
		Ok(Arc::new(MemoryProvider::new(self.initial.iter().cloned())))
	}
}

/// Provider over an in-memory map.
///
/// The map is filled once at construction; `load` has no origin to re-read and
/// leaves the current state, including values written through `set`, untouched.
#[derive(Debug, Default)]
pub struct MemoryProvider {
	data: ProviderData,
}

impl MemoryProvider {
	pub fn new<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			data: ProviderData::with_entries(entries),
		}
	}

	/// Fires this provider's reload token, as a background origin would.
	pub fn notify_reload(&self) {
		self.data.raise();
	}
}

impl Provider for MemoryProvider {
	fn try_get(&self, key: &str) -> Option<String> {
		self.data.try_get(key)
	}

	fn set(&self, key: &str, value: &str) {
		self.data.set(key, value);
	}

	fn load(&self) -> Result<(), LoadError> {
		Ok(())
	}

	fn child_keys(&self, earlier: Vec<String>, parent: Option<&str>) -> Vec<String> {
		self.data.child_keys(earlier, parent)
	}

	fn reload_token(&self) -> Arc<ReloadToken> {
		self.data.reload_token()
	}
}
