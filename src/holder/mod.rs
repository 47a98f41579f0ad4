//!
//! Case-insensitive key/value state backing the bundled providers.
//!
//! Reads are wait-free snapshots; writes go through read-copy-update on an
//! [`arc_swap::ArcSwap`], so a provider can be written from the caller's thread
//! while a watcher thread reloads it.

mod entry;
mod store;

pub use entry::Entry;
pub use store::Store;
