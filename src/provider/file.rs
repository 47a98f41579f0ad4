/* src/provider/file.rs */

//!
//! File-backed provider: one json/toml/yaml document flattened into keys.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "watch")]
use parking_lot::Mutex;

use super::{LoadError, Provider, ProviderData, Source};
use crate::config::Configuration;
use crate::loader::{self, AnyFormat};
use crate::token::ReloadToken;

#[cfg(feature = "watch")]
use crate::signal::{Config as WatcherConfig, Event, Watcher};

/// A source reading one configuration document from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
	format: Option<AnyFormat>,
	optional: bool,
	#[cfg(feature = "watch")]
	reload_on_change: Option<WatcherConfig>,
}

impl FileSource {
	/// Reads `path`, picking the format from its extension.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			format: None,
			optional: false,
			#[cfg(feature = "watch")]
			reload_on_change: None,
		}
	}

	/// Forces a format regardless of the extension.
	pub fn format(mut self, format: AnyFormat) -> Self {
		self.format = Some(format);
		self
	}

	/// A missing optional file loads as an empty provider instead of failing.
	pub fn optional(mut self, optional: bool) -> Self {
		self.optional = optional;
		self
	}

	/// Watches the file and reloads the provider whenever it changes.
	#[cfg(feature = "watch")]
	pub fn reload_on_change(mut self, config: WatcherConfig) -> Self {
		self.reload_on_change = Some(config);
		self
	}
}

impl Source for FileSource {
	fn build(&self, _root: &Configuration) -> Result<Arc<dyn Provider>, LoadError> {
		let format = match self.format {
			Some(format) => format,
			None => AnyFormat::from_path(&self.path).map_err(|source| LoadError::Format {
				path: self.path.clone(),
				source,
			})?,
		};

		let provider = Arc::new(FileProvider {
			path: self.path.clone(),
			format,
			optional: self.optional,
			data: ProviderData::new(),
			#[cfg(feature = "watch")]
			watcher: Mutex::new(None),
		});

		#[cfg(feature = "watch")]
		if let Some(config) = &self.reload_on_change {
			provider.start_watching(config.clone())?;
		}

		Ok(provider)
	}
}

/// Provider over one configuration file.
#[derive(Debug)]
pub struct FileProvider {
	path: PathBuf,
	format: AnyFormat,
	optional: bool,
	data: ProviderData,
	#[cfg(feature = "watch")]
	watcher: Mutex<Option<Watcher>>,
}

impl FileProvider {
	/// The file this provider reads.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read(&self) -> Result<Vec<(String, String)>, LoadError> {
		match std::fs::read(&self.path) {
			Ok(bytes) => loader::parse_flat(&self.format, &bytes).map_err(|source| LoadError::Format {
				path: self.path.clone(),
				source,
			}),
			Err(e) if e.kind() == ErrorKind::NotFound && self.optional => Ok(Vec::new()),
			Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::NotFound(self.path.clone())),
			Err(e) => Err(LoadError::Io(e)),
		}
	}

	#[cfg(feature = "watch")]
	fn start_watching(self: &Arc<Self>, config: WatcherConfig) -> Result<(), LoadError> {
		let weak = Arc::downgrade(self);
		let watcher = Watcher::new(self.path.clone(), config, move |event| {
			if let Some(provider) = weak.upgrade() {
				provider.on_file_changed(event);
			}
		})?;

		*self.watcher.lock() = Some(watcher);
		Ok(())
	}

	/// Reloads after a change seen by the watcher. A failed reload keeps the
	/// previous state and does not fire the token.
	#[cfg(feature = "watch")]
	fn on_file_changed(&self, event: Event) {
		match self.load() {
			Ok(()) => {
				tracing::debug!(path = %self.path.display(), kind = ?event.kind, "configuration file reloaded");
				self.data.raise();
			}
			Err(e) => {
				tracing::warn!(path = %self.path.display(), error = %e, "failed to reload configuration file");
			}
		}
	}
}

impl Provider for FileProvider {
	fn try_get(&self, key: &str) -> Option<String> {
		self.data.try_get(key)
	}

	fn set(&self, key: &str, value: &str) {
		self.data.set(key, value);
	}

	fn load(&self) -> Result<(), LoadError> {
		let entries = self.read()?;
		self.data.replace(entries);
		Ok(())
	}

	fn child_keys(&self, earlier: Vec<String>, parent: Option<&str>) -> Vec<String> {
		self.data.child_keys(earlier, parent)
	}

	fn reload_token(&self) -> Arc<ReloadToken> {
		self.data.reload_token()
	}

	fn dispose(&self) -> Result<(), LoadError> {
		#[cfg(feature = "watch")]
		if let Some(watcher) = self.watcher.lock().take() {
			tracing::debug!(path = %watcher.path().display(), "stopped watching configuration file");
		}
		Ok(())
	}

	fn name(&self) -> String {
		format!("FileProvider({})", self.path.display())
	}
}
