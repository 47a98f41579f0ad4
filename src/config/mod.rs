//!
//! The aggregator and its views.
//!
//! - [`Configuration`] - ordered providers, add/reload/dispose, root change token.
//! - [`ConfigurationRoot`] - frozen root over a snapshot of the provider list.
//! - [`Section`] - a view scoped to a key prefix.
//! - [`ConfigView`] - the read/write surface shared by all three.

mod configuration;
mod error;
mod merge;
mod reload;
mod root;
mod section;

pub use configuration::Configuration;
pub use error::ConfigError;
pub use root::ConfigurationRoot;
pub use section::Section;

use std::sync::Arc;

use crate::key;
use crate::provider::Provider;
use crate::token::ReloadToken;

/// Read/write access to merged configuration.
///
/// Lookups scan providers from the most recently added to the first and return
/// the first hit; writes go to every provider. Keys are relative to
/// [`prefix`](ConfigView::prefix) and compared case-insensitively.
pub trait ConfigView {
	/// Providers in override order, lowest priority first.
	fn providers(&self) -> &[Arc<dyn Provider>];

	/// Absolute path of this view, `None` at the root.
	fn prefix(&self) -> Option<&str>;

	/// The view that owns the providers; sections point back to it.
	fn root(&self) -> &dyn ConfigView;

	/// The root change token; it fires once on the next reload of any provider.
	fn reload_token(&self) -> Arc<ReloadToken>;

	/// Resolves a key against this view's prefix.
	fn absolute(&self, key: &str) -> String {
		match self.prefix() {
			None => key.to_string(),
			Some(prefix) => key::combine([prefix, key]),
		}
	}

	/// Returns the value of the highest-priority provider holding `key`.
	fn get(&self, key: &str) -> Option<String> {
		merge::get(self.providers(), &self.absolute(key))
	}

	/// Writes `key` into every provider.
	fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
		merge::set(self.providers(), &self.absolute(key), value)
	}

	/// Returns the section at `key`. Never fails; a missing section is empty.
	fn section(&self, key: &str) -> Section<'_> {
		Section::new(self.root(), self.absolute(key))
	}

	/// Distinct immediate child segments, deduplicated ignoring case.
	fn child_keys(&self) -> Vec<String> {
		merge::child_keys(self.providers(), self.prefix())
	}

	/// Immediate child sections.
	fn children(&self) -> Vec<Section<'_>> {
		self.child_keys()
			.into_iter()
			.map(|child| self.section(&child))
			.collect()
	}

	/// Every descendant as `(path, value)`, depth first in child order.
	///
	/// With `make_relative` paths drop this view's prefix and the view itself is
	/// left out; otherwise paths are absolute and a section includes itself.
	/// Intermediate sections without a value of their own yield `None`.
	fn entries(&self, make_relative: bool) -> Vec<(String, Option<String>)> {
		let root = self.root();
		let strip = match (make_relative, self.prefix()) {
			(true, Some(prefix)) => prefix.len() + key::SEPARATOR.len(),
			_ => 0,
		};

		let mut out = Vec::new();
		if let (false, Some(prefix)) = (make_relative, self.prefix()) {
			out.push((prefix.to_string(), root.get(prefix)));
		}

		let mut stack: Vec<Section<'_>> = self.children();
		stack.reverse();
		while let Some(section) = stack.pop() {
			let mut nested: Vec<Section<'_>> = section
				.child_keys()
				.into_iter()
				.map(|child| Section::new(root, key::combine([section.path(), child.as_str()])))
				.collect();
			nested.reverse();

			out.push((section.path()[strip..].to_string(), section.value()));
			stack.extend(nested);
		}
		out
	}
}
