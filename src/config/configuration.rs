/* src/config/configuration.rs */

//!
//! The layered aggregator.

use std::sync::Arc;

use super::{ConfigError, ConfigView, ConfigurationRoot, reload};
use crate::provider::{LoadError, Provider, Source};
use crate::token::{ChangeNotifier, ChangeRegistration, ReloadToken};

/// Merges an ordered list of providers into one mutable, reloadable view.
///
/// Sources are added one at a time; each is built into a provider, loaded, and
/// subscribed so that a reload of any provider fires the root token. Providers
/// added later override earlier ones.
///
/// # Concurrency
///
/// Reads and writes are synchronous and take no lock around the provider list;
/// adding sources needs `&mut self`. Root token fan-in is safe from any thread,
/// including provider watcher threads.
///
/// # Disposal
///
/// [`dispose`](Configuration::dispose) consumes the aggregator. Dropping it
/// without disposing still detaches every provider subscription but skips
/// provider teardown.
pub struct Configuration {
	sources: Vec<Arc<dyn Source>>,
	providers: Vec<Arc<dyn Provider>>,
	registrations: Vec<ChangeRegistration>,
	notifier: Arc<ChangeNotifier>,
}

impl Configuration {
	/// Creates an empty aggregator with a fresh root token.
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
			providers: Vec::new(),
			registrations: Vec::new(),
			notifier: Arc::new(ChangeNotifier::new()),
		}
	}

	/// Adds a source. See [`add_source`](Configuration::add_source).
	pub fn add<S>(&mut self, source: S) -> Result<&mut Self, ConfigError>
	where
		S: Source + 'static,
	{
		self.add_source(Some(Arc::new(source)))
	}

	/// Builds the source's provider, loads it, and subscribes to its reloads.
	///
	/// A missing source fails with [`ConfigError::MissingSource`]; a failing
	/// build or initial load is returned as is. In both cases nothing is
	/// recorded, so sources and providers stay parallel. This deliberately
	/// differs from recording the source before its provider is built.
	pub fn add_source(&mut self, source: Option<Arc<dyn Source>>) -> Result<&mut Self, ConfigError> {
		let source = source.ok_or(ConfigError::MissingSource)?;

		let provider = source.build(self)?;
		provider.load()?;

		let registration = reload::fan_in(&provider, &self.notifier);

		tracing::debug!(
			provider = %provider.name(),
			index = self.providers.len(),
			"added configuration provider"
		);

		self.sources.push(source);
		self.providers.push(provider);
		self.registrations.push(registration);
		Ok(self)
	}

	/// Snapshot of the added sources, in insertion order.
	pub fn sources(&self) -> &[Arc<dyn Source>] {
		&self.sources
	}

	/// Reloads every provider in order, then fires the root token once.
	///
	/// The first failing provider stops the reload; providers already reloaded
	/// keep their new state and the root token does not fire.
	pub fn reload(&self) -> Result<(), ConfigError> {
		reload::reload(&self.providers, &self.notifier)
	}

	/// Runs `callback` after every root token fire until the registration is dropped.
	pub fn on_reload<F>(&self, callback: F) -> ChangeRegistration
	where
		F: Fn() + Send + Sync + 'static,
	{
		reload::on_reload(&self.notifier, callback)
	}

	/// Builds a frozen root over the current providers.
	pub fn build(&self) -> ConfigurationRoot {
		ConfigurationRoot::new(self.providers.clone())
	}

	/// Detaches every provider subscription, then tears down every provider.
	///
	/// Teardown continues past failing providers; their errors are returned
	/// together as [`ConfigError::Dispose`].
	pub fn dispose(mut self) -> Result<(), ConfigError> {
		for registration in self.registrations.drain(..) {
			registration.dispose();
		}

		let failures: Vec<LoadError> = self
			.providers
			.iter()
			.filter_map(|provider| {
				provider.dispose().err().inspect(|e| {
					tracing::warn!(provider = %provider.name(), error = %e, "failed to dispose provider");
				})
			})
			.collect();

		tracing::debug!(
			providers = self.providers.len(),
			failed = failures.len(),
			"configuration disposed"
		);

		if failures.is_empty() {
			Ok(())
		} else {
			Err(ConfigError::Dispose(failures))
		}
	}
}

impl ConfigView for Configuration {
	fn providers(&self) -> &[Arc<dyn Provider>] {
		&self.providers
	}

	fn prefix(&self) -> Option<&str> {
		None
	}

	fn root(&self) -> &dyn ConfigView {
		self
	}

	fn reload_token(&self) -> Arc<ReloadToken> {
		self.notifier.token()
	}
}

impl Default for Configuration {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Configuration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let names: Vec<String> = self.providers.iter().map(|p| p.name()).collect();
		f.debug_struct("Configuration")
			.field("sources", &self.sources.len())
			.field("providers", &names)
			.finish_non_exhaustive()
	}
}
