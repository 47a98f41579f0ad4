/* src/holder/entry.rs */

/// A stored value together with the key spelling it was first written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	/// Canonical spelling of the key.
	pub key: String,
	/// The opaque value.
	pub value: String,
}
