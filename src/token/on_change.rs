/* src/token/on_change.rs */

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::{Registration, ReloadToken};

type Producer = Box<dyn Fn() -> Arc<ReloadToken> + Send + Sync>;
type Consumer = Box<dyn Fn() + Send + Sync>;

struct Subscription {
	producer: Producer,
	consumer: Consumer,
	disposed: AtomicBool,
	generation: AtomicU64,
	current: Mutex<Armed>,
}

/// The registration held by a subscription and the attach that produced it.
#[derive(Default)]
struct Armed {
	generation: u64,
	registration: Option<Registration>,
}

impl Subscription {
	fn attach(self: &Arc<Self>) {
		if self.disposed.load(Ordering::Acquire) {
			return;
		}

		// Taken before the token is fetched, so a later attach never sees an older token.
		let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
		let token = (self.producer)();
		let weak: Weak<Self> = Arc::downgrade(self);
		let registration = token.register(move || {
			if let Some(subscription) = weak.upgrade() {
				subscription.fire();
			}
		});

		// An already fired token ran the listener inline and re-attached from there.
		if !registration.is_active() {
			return;
		}

		let displaced = {
			let mut current = self.current.lock();
			if self.disposed.load(Ordering::Acquire) || generation < current.generation {
				// A newer attach already armed the subscription.
				Some(registration)
			} else {
				current.generation = generation;
				current.registration.replace(registration)
			}
		};
		drop(displaced);
	}

	fn fire(self: &Arc<Self>) {
		if self.disposed.load(Ordering::Acquire) {
			return;
		}
		(self.consumer)();
		self.attach();
	}

	fn dispose(&self) {
		self.disposed.store(true, Ordering::Release);
		let registration = self.current.lock().registration.take();
		drop(registration);
	}
}

/// Subscribes `consumer` to every token handed out by `producer`.
///
/// After each fire the consumer runs, then a fresh token is fetched from the
/// producer and the subscription re-arms on it. The subscription lives until
/// the returned [`ChangeRegistration`] is disposed or dropped.
#[must_use = "dropping the registration ends the subscription"]
pub fn on_change<P, C>(producer: P, consumer: C) -> ChangeRegistration
where
	P: Fn() -> Arc<ReloadToken> + Send + Sync + 'static,
	C: Fn() + Send + Sync + 'static,
{
	let subscription = Arc::new(Subscription {
		producer: Box::new(producer),
		consumer: Box::new(consumer),
		disposed: AtomicBool::new(false),
		generation: AtomicU64::new(0),
		current: Mutex::new(Armed::default()),
	});
	subscription.attach();
	ChangeRegistration { subscription }
}

/// Handle to a subscription created by [`on_change`].
#[must_use = "dropping the registration ends the subscription"]
pub struct ChangeRegistration {
	subscription: Arc<Subscription>,
}

impl ChangeRegistration {
	/// Ends the subscription. Fires arriving afterwards are ignored.
	pub fn dispose(&self) {
		self.subscription.dispose();
	}

	/// Returns true until the subscription is disposed.
	pub fn is_active(&self) -> bool {
		!self.subscription.disposed.load(Ordering::Acquire)
	}
}

impl Drop for ChangeRegistration {
	fn drop(&mut self) {
		self.subscription.dispose();
	}
}

impl std::fmt::Debug for ChangeRegistration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ChangeRegistration")
			.field("active", &self.is_active())
			.finish()
	}
}
