//!
//! The provider and source contracts, plus the providers shipped with the crate.
//!
//! - [`MemorySource`] - fixed in-memory pairs, typically defaults.
//! - [`EnvSource`] - environment variables (feature `env`).
//! - [`FileSource`] - a json/toml/yaml document, optionally watched (feature `file`).

mod data;
mod error;
mod memory;

#[cfg(feature = "env")]
mod env;
#[cfg(feature = "file")]
mod file;

pub use data::ProviderData;
pub use error::LoadError;
pub use memory::{MemoryProvider, MemorySource};

#[cfg(feature = "env")]
pub use env::{EnvProvider, EnvSource};
#[cfg(feature = "file")]
pub use file::{FileProvider, FileSource};

use std::sync::Arc;

use crate::config::Configuration;
use crate::token::ReloadToken;

/// A key/value store built from one [`Source`].
///
/// Providers are shared between the aggregator and any frozen roots built from
/// it, so every operation takes `&self` and implementations keep their state
/// behind interior mutability. Keys are compared case-insensitively.
pub trait Provider: Send + Sync {
	/// Looks up a value.
	fn try_get(&self, key: &str) -> Option<String>;

	/// Writes a value.
	fn set(&self, key: &str, value: &str);

	/// Re-reads the provider's origin, replacing its state on success.
	///
	/// `load` must not fire the provider's own reload token; the token is for
	/// changes the provider discovers by itself.
	fn load(&self) -> Result<(), LoadError>;

	/// Returns the immediate child segments under `parent` (the whole key space
	/// when `None`), merged with `earlier` and sorted.
	///
	/// `earlier` carries what previous providers reported. It is a hint to be
	/// merged into the result, never a filter on this provider's own segments.
	fn child_keys(&self, earlier: Vec<String>, parent: Option<&str>) -> Vec<String>;

	/// The one-shot token fired the next time this provider reloads by itself.
	fn reload_token(&self) -> Arc<ReloadToken>;

	/// Releases resources held by the provider. No-op by default.
	fn dispose(&self) -> Result<(), LoadError> {
		Ok(())
	}

	/// Name used in logs.
	fn name(&self) -> String {
		std::any::type_name::<Self>().rsplit("::").next().unwrap_or("provider").to_string()
	}
}

/// Describes how to construct a [`Provider`].
///
/// `build` receives the aggregator so a source can consult configuration added
/// before it.
pub trait Source: Send + Sync {
	fn build(&self, root: &Configuration) -> Result<Arc<dyn Provider>, LoadError>;
}
