/* src/token/notifier.rs */

use std::sync::Arc;

use arc_swap::ArcSwap;

use super::ReloadToken;

/// Holds the current [`ReloadToken`] of an owner and replaces it on every raise.
///
/// [`raise`](ChangeNotifier::raise) swaps in a fresh token and fires the one it
/// displaced as a single atomic exchange, so concurrent raises each fire a
/// distinct token exactly once.
pub struct ChangeNotifier {
	current: ArcSwap<ReloadToken>,
}

impl ChangeNotifier {
	/// Creates a notifier with an unfired token installed.
	pub fn new() -> Self {
		Self {
			current: ArcSwap::from_pointee(ReloadToken::new()),
		}
	}

	/// Returns the token that the next raise will fire.
	pub fn token(&self) -> Arc<ReloadToken> {
		self.current.load_full()
	}

	/// Installs a fresh token and fires the previous one.
	///
	/// Returns the token that was fired.
	pub fn raise(&self) -> Arc<ReloadToken> {
		let previous = self.current.swap(Arc::new(ReloadToken::new()));
		tracing::trace!(listeners = previous.listener_count(), "firing reload token");
		previous.fire();
		previous
	}
}

impl Default for ChangeNotifier {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ChangeNotifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ChangeNotifier")
			.field("current", &*self.current.load())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;
	use std::sync::Barrier;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::thread;

	#[test]
	fn test_raise_replaces_token() {
		let notifier = ChangeNotifier::new();
		let before = notifier.token();
		let fired = notifier.raise();

		assert!(Arc::ptr_eq(&before, &fired));
		assert!(fired.has_changed());
		assert!(!notifier.token().has_changed());
		assert!(!Arc::ptr_eq(&before, &notifier.token()));
	}

	#[test]
	fn test_concurrent_raises_fire_distinct_tokens() {
		const THREADS: usize = 8;

		let notifier = Arc::new(ChangeNotifier::new());
		let barrier = Arc::new(Barrier::new(THREADS));
		let fires = Arc::new(AtomicUsize::new(0));

		let counter = fires.clone();
		let _first = notifier.token().register(move || {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				let notifier = notifier.clone();
				let barrier = barrier.clone();
				thread::spawn(move || {
					barrier.wait();
					notifier.raise()
				})
			})
			.collect();

		let fired: Vec<Arc<ReloadToken>> = handles
			.into_iter()
			.map(|handle| handle.join().unwrap())
			.collect();
		let distinct: HashSet<*const ReloadToken> = fired.iter().map(Arc::as_ptr).collect();

		assert_eq!(distinct.len(), THREADS);
		assert!(fired.iter().all(|token| token.has_changed()));
		assert_eq!(fires.load(Ordering::SeqCst), 1);
	}
}
