/* src/lib.rs */

//!
//! Layered configuration: an ordered set of key/value providers merged into one
//! hierarchical, writable, reloadable view.
//!
//! This crate integrates these components:
//!
//! - **config**: The aggregator (`Configuration`), frozen roots and sections.
//! - **provider**: The provider/source contracts and bundled providers.
//! - **token**: One-shot reload tokens and their fan-in.
//! - **holder**: Case-insensitive, lock-free-read state for providers.
//! - **loader**: Format-agnostic parsing of documents into flat keys.
//! - **signal**: Debounced file watching for live reloading.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features (default).
//! - `env`: Environment variable provider.
//! - `file`: File provider; pair with `json`, `toml` or `yaml`.
//! - `watch`: Reload file providers when their file changes.
//!
//! ## Basic Usage
//!
//! ```
//! use strata::{ConfigView, Configuration, MemorySource};
//!
//! let mut config = Configuration::new();
//! config
//! 	.add(MemorySource::new().with("color", "blue").with("wheels:count", "4"))?
//! 	.add(MemorySource::new().with("color", "red"))?;
//!
//! assert_eq!(config.get("COLOR").as_deref(), Some("red"));
//! assert_eq!(config.section("wheels").get("count").as_deref(), Some("4"));
//! # Ok::<(), strata::ConfigError>(())
//! ```
//!
//! See `demos/layered.rs` for a complete example.

pub mod config;
pub mod holder;
pub mod key;
pub mod provider;
pub mod token;

#[cfg(feature = "file")]
pub mod loader;

#[cfg(feature = "watch")]
pub mod signal;

pub use config::{ConfigError, ConfigView, Configuration, ConfigurationRoot, Section};
pub use provider::{LoadError, MemoryProvider, MemorySource, Provider, ProviderData, Source};
pub use token::{ChangeRegistration, ReloadToken, on_change};

#[cfg(feature = "env")]
pub use provider::EnvSource;

#[cfg(feature = "file")]
pub use provider::FileSource;
