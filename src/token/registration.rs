/* src/token/registration.rs */

use std::sync::Weak;

use super::ReloadToken;

/// A listener attached to a [`ReloadToken`].
///
/// Dropping the registration detaches the listener if the token has not fired yet.
#[must_use = "dropping the registration detaches the listener"]
pub struct Registration {
	token: Weak<ReloadToken>,
	id: u64,
}

impl Registration {
	pub(crate) fn new(token: Weak<ReloadToken>, id: u64) -> Self {
		Self { token, id }
	}

	/// A registration that holds nothing, returned when the listener already ran.
	pub(crate) fn empty() -> Self {
		Self {
			token: Weak::new(),
			id: 0,
		}
	}

	/// Returns true while the listener is still waiting on a live, unfired token.
	pub fn is_active(&self) -> bool {
		self.token
			.upgrade()
			.is_some_and(|token| !token.has_changed())
	}

	/// Detaches the listener explicitly.
	pub fn dispose(self) {}
}

impl Drop for Registration {
	fn drop(&mut self) {
		if let Some(token) = self.token.upgrade() {
			token.unregister(self.id);
		}
	}
}

impl std::fmt::Debug for Registration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registration")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}
