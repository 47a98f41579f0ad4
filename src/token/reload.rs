/* src/token/reload.rs */

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use super::Registration;

type Listener = Box<dyn FnOnce() + Send>;

/// A one-shot change signal.
///
/// Once fired a token stays fired; owners replace it with a fresh instance to
/// signal again. Listeners attached before the fire run exactly once, on the
/// firing thread. Listeners attached after the fire run immediately.
pub struct ReloadToken {
	fired: AtomicBool,
	next_id: AtomicU64,
	listeners: Mutex<Vec<(u64, Listener)>>,
}

impl ReloadToken {
	/// Creates an unfired token.
	pub fn new() -> Self {
		Self {
			fired: AtomicBool::new(false),
			next_id: AtomicU64::new(1),
			listeners: Mutex::new(Vec::new()),
		}
	}

	/// Returns true once the token has fired.
	pub fn has_changed(&self) -> bool {
		self.fired.load(Ordering::Acquire)
	}

	/// Attaches a listener.
	///
	/// The returned [`Registration`] detaches the listener when dropped.
	#[must_use = "dropping the registration detaches the listener"]
	pub fn register<F>(self: &Arc<Self>, listener: F) -> Registration
	where
		F: FnOnce() + Send + 'static,
	{
		{
			let mut listeners = self.listeners.lock();
			if !self.fired.load(Ordering::Acquire) {
				let id = self.next_id.fetch_add(1, Ordering::Relaxed);
				listeners.push((id, Box::new(listener)));
				return Registration::new(Arc::downgrade(self), id);
			}
		}

		listener();
		Registration::empty()
	}

	/// Fires the token, running every attached listener.
	///
	/// Returns false if the token had already fired; listeners never run twice.
	pub fn fire(&self) -> bool {
		let listeners = {
			let mut guard = self.listeners.lock();
			if self.fired.swap(true, Ordering::AcqRel) {
				return false;
			}
			std::mem::take(&mut *guard)
		};

		for (_, listener) in listeners {
			listener();
		}
		true
	}

	/// Number of listeners still waiting for the fire.
	pub fn listener_count(&self) -> usize {
		self.listeners.lock().len()
	}

	pub(crate) fn unregister(&self, id: u64) {
		self.listeners.lock().retain(|(slot, _)| *slot != id);
	}
}

impl Default for ReloadToken {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ReloadToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ReloadToken")
			.field("fired", &self.has_changed())
			.field("listeners", &self.listener_count())
			.finish()
	}
}
