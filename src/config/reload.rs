/* src/config/reload.rs */

//!
//! Reload and fan-in shared by every root. Each path ends in
//! [`ChangeNotifier::raise`], the one place a root token fires.

use std::sync::Arc;

use super::ConfigError;
use crate::provider::Provider;
use crate::token::{ChangeNotifier, ChangeRegistration, on_change};

/// Subscribes `notifier` to every reload of `provider`.
pub(crate) fn fan_in(provider: &Arc<dyn Provider>, notifier: &Arc<ChangeNotifier>) -> ChangeRegistration {
	let producer = Arc::clone(provider);
	let notifier = Arc::clone(notifier);
	on_change(
		move || producer.reload_token(),
		move || {
			notifier.raise();
		},
	)
}

/// Loads every provider in order, then raises the root token once.
///
/// The first failure stops the pass and the token does not fire.
pub(crate) fn reload(providers: &[Arc<dyn Provider>], notifier: &ChangeNotifier) -> Result<(), ConfigError> {
	for provider in providers {
		provider.load()?;
	}

	tracing::debug!(providers = providers.len(), "configuration reloaded");
	notifier.raise();
	Ok(())
}

/// Runs `callback` after every fire of the notifier's token.
pub(crate) fn on_reload<F>(notifier: &Arc<ChangeNotifier>, callback: F) -> ChangeRegistration
where
	F: Fn() + Send + Sync + 'static,
{
	let notifier = Arc::clone(notifier);
	on_change(move || notifier.token(), callback)
}
