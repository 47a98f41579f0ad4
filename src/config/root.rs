/* src/config/root.rs */

use std::sync::Arc;

use super::{ConfigError, ConfigView, reload};
use crate::provider::Provider;
use crate::token::{ChangeNotifier, ChangeRegistration, ReloadToken};

/// A frozen root over a fixed provider list.
///
/// Shares providers with the [`Configuration`](super::Configuration) it was
/// built from but has its own root token and subscriptions. Providers added to
/// the aggregator afterwards are not seen here. Dropping the root detaches its
/// subscriptions; providers are never torn down by it.
pub struct ConfigurationRoot {
	providers: Vec<Arc<dyn Provider>>,
	notifier: Arc<ChangeNotifier>,
	_registrations: Vec<ChangeRegistration>,
}

impl ConfigurationRoot {
	/// Creates a root over `providers` and subscribes to each one's reloads.
	///
	/// Providers are expected to be loaded already.
	pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
		let notifier = Arc::new(ChangeNotifier::new());
		let registrations = providers
			.iter()
			.map(|provider| reload::fan_in(provider, &notifier))
			.collect();

		Self {
			providers,
			notifier,
			_registrations: registrations,
		}
	}

	/// Reloads every provider in order, then fires this root's token once.
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
}

impl ConfigView for ConfigurationRoot {
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

impl std::fmt::Debug for ConfigurationRoot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConfigurationRoot")
			.field("providers", &self.providers.len())
			.finish_non_exhaustive()
	}
}
