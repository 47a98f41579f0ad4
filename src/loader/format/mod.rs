use std::path::Path;

use super::{FmtError, Format, Node};

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::Json;

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use self::toml::Toml;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// An enum wrapper for all supported formats, selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl AnyFormat {
	/// Every format compiled into this build.
	pub const ALL: &'static [AnyFormat] = &[
		#[cfg(feature = "json")]
		AnyFormat::Json,
		#[cfg(feature = "toml")]
		AnyFormat::Toml,
		#[cfg(feature = "yaml")]
		AnyFormat::Yaml,
	];

	/// Picks the format registered for `ext` (without the dot), ignoring case.
	pub fn from_extension(ext: &str) -> Option<Self> {
		Self::ALL
			.iter()
			.copied()
			.find(|format| format.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
	}

	/// Picks the format for a path by its extension.
	pub fn from_path(path: &Path) -> Result<Self, FmtError> {
		let ext = path
			.extension()
			.and_then(|ext| ext.to_str())
			.ok_or_else(|| FmtError::Unsupported(path.display().to_string()))?;
		Self::from_extension(ext).ok_or_else(|| FmtError::Unsupported(ext.to_string()))
	}
}

impl Format for AnyFormat {
	fn extensions(&self) -> &'static [&'static str] {
		match *self {
			#[cfg(feature = "json")]
			Self::Json => Json.extensions(),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.extensions(),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.extensions(),
		}
	}

	fn parse(&self, input: &[u8]) -> Result<Node, FmtError> {
		match *self {
			#[cfg(feature = "json")]
			Self::Json => Json.parse(input),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.parse(input),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.parse(input),
		}
	}
}
