/* src/config/merge.rs */

use std::collections::HashSet;
use std::sync::Arc;

use super::ConfigError;
use crate::key;
use crate::provider::Provider;

/// Scans providers from the highest index down; the first hit wins.
pub(crate) fn get(providers: &[Arc<dyn Provider>], key: &str) -> Option<String> {
	providers.iter().rev().find_map(|provider| provider.try_get(key))
}

/// Writes to every provider so each stays consistent with the observed value.
pub(crate) fn set(providers: &[Arc<dyn Provider>], key: &str, value: &str) -> Result<(), ConfigError> {
	if providers.is_empty() {
		return Err(ConfigError::NoProviders);
	}

	for provider in providers {
		provider.set(key, value);
	}
	Ok(())
}

/// Folds every provider's children into one list, then keeps the first
/// spelling of each segment ignoring case.
pub(crate) fn child_keys(providers: &[Arc<dyn Provider>], parent: Option<&str>) -> Vec<String> {
	let all = providers
		.iter()
		.fold(Vec::new(), |earlier, provider| provider.child_keys(earlier, parent));

	let mut seen = HashSet::new();
	all.into_iter()
		.filter(|segment| seen.insert(key::fold(segment)))
		.collect()
}
