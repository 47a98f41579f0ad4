use thiserror::Error;

use crate::provider::LoadError;

/// Errors raised by the aggregator.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("a configuration source is required")]
	MissingSource,

	#[error("can only set a value once at least one provider has been added")]
	NoProviders,

	#[error(transparent)]
	Load(#[from] LoadError),

	#[error("{} provider(s) failed to dispose", .0.len())]
	Dispose(Vec<LoadError>),
}
