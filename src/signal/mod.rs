//!
//! Debounced single-file watching on top of `notify`.
//!
//! The watcher observes the parent directory of a file, filters events down to
//! that file, coalesces bursts, and hands one [`Event`] per settled change to a
//! callback on its own worker thread. No async runtime is required.

use std::path::PathBuf;
use std::time::Duration;

mod watcher;
mod worker;

pub use watcher::Watcher;

/// Errors raised while setting up a watcher.
#[derive(thiserror::Error, Debug)]
pub enum SignalError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Notify error: {0}")]
	Notify(#[from] notify::Error),

	#[error("Invalid configuration: {0}")]
	Config(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Configuration for the watcher behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Quiet period a file must see before its change is delivered.
	pub debounce: Duration,

	/// Whether to coalesce continuous events of the same file into a single event.
	pub coalesce: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			debounce: Duration::from_millis(250),
			coalesce: true,
		}
	}
}

/// The kind of filesystem event we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// File was created.
	Create,
	/// File content was modified.
	Modify,
	/// File was removed.
	Remove,
}

/// A settled change to the watched file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
	pub path: PathBuf,
	pub kind: EventKind,
}
