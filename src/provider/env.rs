/* src/provider/env.rs */

use std::sync::Arc;

use super::{LoadError, Provider, ProviderData, Source};
use crate::config::Configuration;
use crate::key;
use crate::token::ReloadToken;

/// Separator used in variable names where a key would use `:`.
const ENV_SEPARATOR: &str = "__";

/// A source of environment variables.
///
/// Variables are filtered by an optional prefix (matched ignoring case and
/// stripped), and `__` in names maps to the key separator, so
/// `APP_DATABASE__HOST` with prefix `APP_` becomes `DATABASE:HOST`.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
	prefix: Option<String>,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Reads every variable of the process environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Only variables starting with `prefix` are read; the prefix is stripped.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Reads from a fixed set of variables instead of the process environment.
	pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
		self
	}
}

impl Source for EnvSource {
	fn build(&self, _root: &Configuration) -> Result<Arc<dyn Provider>, LoadError> {
		Ok(Arc::new(EnvProvider {
			prefix: self.prefix.clone(),
			vars: self.vars.clone(),
			data: ProviderData::new(),
		}))
	}
}

/// Provider over environment variables.
#[derive(Debug)]
pub struct EnvProvider {
	prefix: Option<String>,
	vars: Option<Vec<(String, String)>>,
	data: ProviderData,
}

impl EnvProvider {
	fn normalize(&self, name: &str) -> Option<String> {
		let rest = match &self.prefix {
			None => name,
			Some(prefix) => {
				let head = name.get(..prefix.len())?;
				if !key::eq(head, prefix) {
					return None;
				}
				&name[prefix.len()..]
			}
		};
		if rest.is_empty() {
			return None;
		}
		Some(rest.replace(ENV_SEPARATOR, key::SEPARATOR))
	}
}

impl Provider for EnvProvider {
	fn try_get(&self, key: &str) -> Option<String> {
		self.data.try_get(key)
	}

	fn set(&self, key: &str, value: &str) {
		self.data.set(key, value);
	}

	fn load(&self) -> Result<(), LoadError> {
		let vars: Vec<(String, String)> = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars_os()
				.filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
				.collect(),
		};

		let entries: Vec<(String, String)> = vars
			.into_iter()
			.filter_map(|(name, value)| self.normalize(&name).map(|key| (key, value)))
			.collect();

		tracing::trace!(count = entries.len(), "loaded environment variables");
		self.data.replace(entries);
		Ok(())
	}

	fn child_keys(&self, earlier: Vec<String>, parent: Option<&str>) -> Vec<String> {
		self.data.child_keys(earlier, parent)
	}

	fn reload_token(&self) -> Arc<ReloadToken> {
		self.data.reload_token()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn provider(source: EnvSource) -> Arc<dyn Provider> {
		let root = Configuration::new();
		let provider = source.build(&root).unwrap();
		provider.load().unwrap();
		provider
	}

	#[test]
	fn test_prefix_is_stripped_ignoring_case() {
		let provider = provider(
			EnvSource::new()
				.with_prefix("APP_")
				.with_vars([("app_Color", "blue"), ("OTHER", "x"), ("APP_", "empty")]),
		);

		assert_eq!(provider.try_get("color").as_deref(), Some("blue"));
		assert_eq!(provider.try_get("OTHER"), None);
		assert_eq!(provider.child_keys(Vec::new(), None), vec!["Color"]);
	}

	#[test]
	fn test_double_underscore_maps_to_separator() {
		let provider = provider(EnvSource::new().with_vars([("Database__Host", "db.local")]));

		assert_eq!(provider.try_get("database:host").as_deref(), Some("db.local"));
		assert_eq!(provider.child_keys(Vec::new(), Some("database")), vec!["Host"]);
	}

	#[test]
	fn test_load_replaces_written_values() {
		let provider = provider(EnvSource::new().with_vars([("A", "1")]));
		provider.set("a", "2");
		assert_eq!(provider.try_get("A").as_deref(), Some("2"));

		provider.load().unwrap();
		assert_eq!(provider.try_get("A").as_deref(), Some("1"));
	}
}
