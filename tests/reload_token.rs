/* tests/reload_token.rs */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use strata::{ConfigView, Configuration, LoadError, MemoryProvider, MemorySource, Provider, Source};

/// Hands the aggregator a provider the test keeps a typed handle to.
struct Shared(Arc<MemoryProvider>);

impl Source for Shared {
	fn build(&self, _root: &Configuration) -> Result<Arc<dyn Provider>, LoadError> {
		Ok(self.0.clone())
	}
}

fn shared(pairs: &[(&str, &str)]) -> Arc<MemoryProvider> {
	Arc::new(MemoryProvider::new(pairs.iter().copied()))
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
	let hits = Arc::new(AtomicUsize::new(0));
	let inner = hits.clone();
	(hits, move || {
		inner.fetch_add(1, Ordering::SeqCst);
	})
}

#[test]
fn test_reload_fires_root_token_once() {
	let mut config = Configuration::new();
	config.add(MemorySource::new().with("color", "blue")).unwrap();

	let first = config.reload_token();
	let (hits, bump) = counter();
	let _registration = first.register(bump);

	config.reload().unwrap();
	assert!(first.has_changed());
	assert_eq!(hits.load(Ordering::SeqCst), 1);

	let second = config.reload_token();
	assert!(!second.has_changed());
	assert!(!Arc::ptr_eq(&first, &second));

	config.reload().unwrap();
	assert!(second.has_changed());
	assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_on_reload_runs_once_per_reload() {
	let mut config = Configuration::new();
	config
		.add(MemorySource::new().with("a", "1"))
		.unwrap()
		.add(MemorySource::new().with("b", "2"))
		.unwrap();

	let (hits, bump) = counter();
	let registration = config.on_reload(bump);

	config.reload().unwrap();
	config.reload().unwrap();
	config.reload().unwrap();
	assert_eq!(hits.load(Ordering::SeqCst), 3);

	drop(registration);
	config.reload().unwrap();
	assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn test_provider_reload_fans_in_to_root() {
	let provider = shared(&[("color", "blue")]);
	let mut config = Configuration::new();
	config.add(Shared(provider.clone())).unwrap();

	let root = config.reload_token();
	let (hits, bump) = counter();
	let _registration = config.on_reload(bump);

	provider.notify_reload();
	assert!(root.has_changed());
	assert!(!config.reload_token().has_changed());

	provider.notify_reload();
	provider.notify_reload();
	assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn test_concurrent_provider_fires_never_double_fire() {
	const PROVIDERS: usize = 4;
	const FIRES: usize = 25;

	let providers: Vec<Arc<MemoryProvider>> = (0..PROVIDERS).map(|_| shared(&[])).collect();
	let mut config = Configuration::new();
	for provider in &providers {
		config.add(Shared(provider.clone())).unwrap();
	}

	let first = config.reload_token();
	let (first_hits, bump) = counter();
	let _first_registration = first.register(bump);

	let (hits, bump) = counter();
	let _registration = config.on_reload(bump);

	let barrier = Arc::new(Barrier::new(PROVIDERS));
	let handles: Vec<_> = providers
		.iter()
		.cloned()
		.map(|provider| {
			let barrier = barrier.clone();
			thread::spawn(move || {
				barrier.wait();
				for _ in 0..FIRES {
					provider.notify_reload();
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert!(first.has_changed());
	assert_eq!(first_hits.load(Ordering::SeqCst), 1);
	assert!(!config.reload_token().has_changed());

	assert!(hits.load(Ordering::SeqCst) >= 1);

	// Every provider is still subscribed after the storm.
	for provider in &providers {
		assert_eq!(provider.reload_token().listener_count(), 1);
	}
}

#[test]
fn test_fan_in_survives_concurrent_fires_of_one_provider() {
	const THREADS: usize = 4;
	const FIRES: usize = 20;

	for _ in 0..500 {
		let provider = shared(&[]);
		let mut config = Configuration::new();
		config.add(Shared(provider.clone())).unwrap();

		let barrier = Arc::new(Barrier::new(THREADS));
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				let provider = provider.clone();
				let barrier = barrier.clone();
				thread::spawn(move || {
					barrier.wait();
					for _ in 0..FIRES {
						provider.notify_reload();
					}
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		assert_eq!(provider.reload_token().listener_count(), 1);

		let root = config.reload_token();
		let (hits, bump) = counter();
		let _registration = root.register(bump);

		provider.notify_reload();
		assert!(root.has_changed());
		assert_eq!(hits.load(Ordering::SeqCst), 1);
	}
}

#[test]
fn test_dispose_detaches_provider_subscriptions() {
	let provider = shared(&[("color", "blue")]);
	let mut config = Configuration::new();
	config.add(Shared(provider.clone())).unwrap();

	let root = config.reload_token();
	config.dispose().unwrap();

	assert_eq!(provider.reload_token().listener_count(), 0);
	provider.notify_reload();
	assert!(!root.has_changed());
}

#[test]
fn test_frozen_root_has_its_own_token() {
	let provider = shared(&[("color", "blue")]);
	let mut config = Configuration::new();
	config.add(Shared(provider.clone())).unwrap();

	let frozen = config.build();
	assert_eq!(provider.reload_token().listener_count(), 2);

	let config_token = config.reload_token();
	let frozen_token = frozen.reload_token();
	assert!(!Arc::ptr_eq(&config_token, &frozen_token));

	frozen.reload().unwrap();
	assert!(frozen_token.has_changed());
	assert!(!config_token.has_changed());

	let frozen_token = frozen.reload_token();
	provider.notify_reload();
	assert!(frozen_token.has_changed());
	assert!(config_token.has_changed());

	drop(frozen);
	assert_eq!(provider.reload_token().listener_count(), 1);
}

#[test]
fn test_section_shares_root_token() {
	let mut config = Configuration::new();
	config.add(MemorySource::new().with("wheels:count", "4")).unwrap();

	let section = config.section("wheels");
	assert!(Arc::ptr_eq(&section.reload_token(), &config.reload_token()));
}
