/* src/key.rs */

//!
//! Key-space helpers. Keys are flat strings where [`SEPARATOR`] marks hierarchy;
//! every comparison in this crate goes through [`fold`] and is case-insensitive.

use std::cmp::Ordering;

/// Segment separator of the key space.
pub const SEPARATOR: &str = ":";

/// Folds a key into its case-insensitive lookup form.
pub fn fold(key: &str) -> String {
	key.to_lowercase()
}

/// Case-insensitive key equality.
pub fn eq(a: &str, b: &str) -> bool {
	a == b || fold(a) == fold(b)
}

/// Joins path segments with the separator.
///
/// Empty segments are kept so `combine(["a", ""])` yields `a:`, matching how
/// providers store keys verbatim.
pub fn combine<'a, I>(segments: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	segments.into_iter().collect::<Vec<_>>().join(SEPARATOR)
}

/// Returns the last segment of a path (`a:b:c` -> `c`).
pub fn section_key(path: &str) -> &str {
	match path.rfind(SEPARATOR) {
		Some(idx) => &path[idx + SEPARATOR.len()..],
		None => path,
	}
}

/// Strips `prefix` plus one separator from the front of `key`, ignoring case.
///
/// Returns `None` when `key` is not strictly beneath `prefix`.
pub fn strip_parent<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
	let head_len = prefix.len() + SEPARATOR.len();
	if key.len() <= head_len || !key.is_char_boundary(prefix.len()) {
		return None;
	}
	let (head, rest) = key.split_at(prefix.len());
	if !eq(head, prefix) || !rest.starts_with(SEPARATOR) {
		return None;
	}
	Some(&rest[SEPARATOR.len()..])
}

/// Orders configuration keys segment by segment.
///
/// Integer segments compare numerically and sort before text segments; text
/// segments compare case-insensitively. A key that is a strict prefix of
/// another sorts first.
pub fn compare(a: &str, b: &str) -> Ordering {
	let mut left = a.split(SEPARATOR).filter(|s| !s.is_empty());
	let mut right = b.split(SEPARATOR).filter(|s| !s.is_empty());

	loop {
		match (left.next(), right.next()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(x), Some(y)) => {
				let ord = match (x.parse::<i64>(), y.parse::<i64>()) {
					(Ok(x), Ok(y)) => x.cmp(&y),
					(Ok(_), Err(_)) => Ordering::Less,
					(Err(_), Ok(_)) => Ordering::Greater,
					(Err(_), Err(_)) => fold(x).cmp(&fold(y)),
				};
				if ord != Ordering::Equal {
					return ord;
				}
			}
		}
	}
}
