/* src/signal/watcher.rs */

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use notify::{RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};

use super::worker::process_events;
use super::{Config, Event, Result, SignalError};

/// Watches one file and reports settled changes to a handler.
///
/// Dropping the watcher stops the OS subscription; the worker thread exits once
/// the event channel closes.
pub struct Watcher {
	path: PathBuf,
	_internal_watcher: RecommendedWatcher,
}

impl Watcher {
	/// Creates a new Watcher and starts monitoring immediately.
	///
	/// The file itself may be absent; its parent directory must exist.
	#[must_use = "Watcher must be kept alive"]
	pub fn new<F>(path: impl Into<PathBuf>, config: Config, handler: F) -> Result<Self>
	where
		F: Fn(Event) + Send + 'static,
	{
		let path = path.into();
		let (raw_tx, raw_rx) = mpsc::channel();

		let mut internal_watcher =
			notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
				let _ = raw_tx.send(res);
			})?;

		let watch_path = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
			_ => PathBuf::from("."),
		};

		if !watch_path.exists() {
			return Err(SignalError::Config(format!(
				"Path does not exist: {:?}",
				watch_path
			)));
		}

		let file_name = path
			.file_name()
			.map(|name| name.to_os_string())
			.ok_or_else(|| SignalError::Config(format!("Not a file path: {:?}", path)))?;

		internal_watcher.watch(&watch_path, RecursiveMode::NonRecursive)?;

		thread::Builder::new()
			.name("strata-watch".to_string())
			.spawn(move || process_events(raw_rx, file_name, config, handler))?;

		tracing::debug!(path = %path.display(), "watching configuration file");

		Ok(Self {
			path,
			_internal_watcher: internal_watcher,
		})
	}

	/// The watched file.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl std::fmt::Debug for Watcher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Watcher").field("path", &self.path).finish_non_exhaustive()
	}
}
