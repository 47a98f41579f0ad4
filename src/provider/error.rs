use std::path::PathBuf;

#[cfg(feature = "file")]
use crate::loader::FmtError;
#[cfg(feature = "watch")]
use crate::signal::SignalError;

/// Errors raised by providers while loading from, or releasing, their origin.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("configuration file not found: {}", .0.display())]
	NotFound(PathBuf),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[cfg(feature = "file")]
	#[error("failed to parse {}: {source}", path.display())]
	Format {
		path: PathBuf,
		#[source]
		source: FmtError,
	},

	#[cfg(feature = "watch")]
	#[error("Signal error: {0}")]
	Signal(#[from] SignalError),

	#[error("{0}")]
	Custom(String),
}
