/* src/config/section.rs */

use std::sync::Arc;

use super::{ConfigError, ConfigView};
use crate::key;
use crate::provider::Provider;
use crate::token::ReloadToken;

/// A view of the configuration under one key prefix.
///
/// Sections hold no data; every read goes back through the root, so a section
/// always reflects the current providers and a section over a missing prefix
/// is simply empty.
#[derive(Clone)]
pub struct Section<'a> {
	root: &'a dyn ConfigView,
	path: String,
}

impl<'a> Section<'a> {
	pub(crate) fn new(root: &'a dyn ConfigView, path: String) -> Self {
		Self { root, path }
	}

	/// The last segment of the path.
	pub fn key(&self) -> &str {
		key::section_key(&self.path)
	}

	/// The absolute path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// The value stored at the section's own path.
	pub fn value(&self) -> Option<String> {
		self.root.get(&self.path)
	}

	/// Writes the section's own value into every provider.
	pub fn set_value(&self, value: &str) -> Result<(), ConfigError> {
		self.root.set(&self.path, value)
	}

	/// True when the section has a value or any child.
	pub fn exists(&self) -> bool {
		self.value().is_some() || !self.child_keys().is_empty()
	}
}

impl ConfigView for Section<'_> {
	fn providers(&self) -> &[Arc<dyn Provider>] {
		self.root.providers()
	}

	fn prefix(&self) -> Option<&str> {
		Some(&self.path)
	}

	fn root(&self) -> &dyn ConfigView {
		self.root
	}

	fn reload_token(&self) -> Arc<ReloadToken> {
		self.root.reload_token()
	}
}

impl std::fmt::Debug for Section<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Section")
			.field("path", &self.path)
			.field("value", &self.value())
			.finish()
	}
}
