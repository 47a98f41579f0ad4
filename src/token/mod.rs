//!
//! One-shot change signals and the plumbing that fans them in.
//!
//! - [`ReloadToken`] - a signal that fires at most once.
//! - [`Registration`] - a listener attached to one token; dropping it detaches.
//! - [`on_change`] - follows a producer of tokens, re-arming after every fire.
//! - [`ChangeNotifier`] - owns a current token and swaps it atomically on raise.

mod notifier;
mod on_change;
mod registration;
mod reload;

pub use notifier::ChangeNotifier;
pub use on_change::{ChangeRegistration, on_change};
pub use registration::Registration;
pub use reload::ReloadToken;
