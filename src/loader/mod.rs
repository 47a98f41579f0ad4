//!
//! Format-agnostic parsing of configuration documents into flat `a:b:c` keys.

pub mod error;
pub mod format;

pub use error::FmtError;
pub use format::AnyFormat;

use std::collections::HashSet;

use crate::key;

/// A parsed document, independent of the format it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// An explicit null.
	Null,
	/// Any scalar, already rendered as text.
	Scalar(String),
	/// An ordered sequence; items are keyed by index.
	List(Vec<Node>),
	/// A mapping in document order.
	Map(Vec<(String, Node)>),
}

impl Node {
	fn kind(&self) -> &'static str {
		match self {
			Node::Null => "null",
			Node::Scalar(_) => "scalar",
			Node::List(_) => "sequence",
			Node::Map(_) => "mapping",
		}
	}
}

/// Abstract format parser that converts bytes into a [`Node`] tree.
pub trait Format: Send + Sync {
	/// List of supported extensions.
	fn extensions(&self) -> &'static [&'static str];

	/// Parse the raw bytes.
	fn parse(&self, input: &[u8]) -> Result<Node, FmtError>;
}

/// Parses `input` and flattens it into configuration keys.
pub fn parse_flat<F: Format + ?Sized>(format: &F, input: &[u8]) -> Result<Vec<(String, String)>, FmtError> {
	flatten(format.parse(input)?)
}

/// Flattens a document into `(key, value)` pairs.
///
/// Nested mappings join their keys with the separator, sequence items use
/// their index as the segment, nulls become empty strings. Empty mappings and
/// sequences contribute nothing. The top level must be a mapping (or null,
/// which yields no keys). Keys are unique ignoring case.
pub fn flatten(root: Node) -> Result<Vec<(String, String)>, FmtError> {
	let entries = match root {
		Node::Null => return Ok(Vec::new()),
		Node::Map(entries) => entries,
		other => return Err(FmtError::InvalidRoot(other.kind())),
	};

	let mut out = Vec::new();
	let mut seen = HashSet::new();
	let mut stack: Vec<(String, Node)> = entries.into_iter().rev().collect();

	while let Some((path, node)) = stack.pop() {
		match node {
			Node::Null => push(&mut out, &mut seen, path, String::new())?,
			Node::Scalar(value) => push(&mut out, &mut seen, path, value)?,
			Node::List(items) => {
				for (idx, item) in items.into_iter().enumerate().rev() {
					stack.push((key::combine([path.as_str(), idx.to_string().as_str()]), item));
				}
			}
			Node::Map(entries) => {
				for (k, v) in entries.into_iter().rev() {
					stack.push((key::combine([path.as_str(), k.as_str()]), v));
				}
			}
		}
	}

	Ok(out)
}

fn push(
	out: &mut Vec<(String, String)>,
	seen: &mut HashSet<String>,
	path: String,
	value: String,
) -> Result<(), FmtError> {
	if !seen.insert(key::fold(&path)) {
		return Err(FmtError::DuplicateKey(path));
	}
	out.push((path, value));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scalar(s: &str) -> Node {
		Node::Scalar(s.to_string())
	}

	#[test]
	fn test_flatten_nested() {
		let doc = Node::Map(vec![
			("color".into(), scalar("blue")),
			(
				"wheels".into(),
				Node::Map(vec![
					("count".into(), scalar("4")),
					("sizes".into(), Node::List(vec![scalar("17"), scalar("18")])),
					("spare".into(), Node::Null),
				]),
			),
		]);

		let flat = flatten(doc).unwrap();
		assert_eq!(
			flat,
			vec![
				("color".to_string(), "blue".to_string()),
				("wheels:count".to_string(), "4".to_string()),
				("wheels:sizes:0".to_string(), "17".to_string()),
				("wheels:sizes:1".to_string(), "18".to_string()),
				("wheels:spare".to_string(), String::new()),
			]
		);
	}

	#[test]
	fn test_flatten_rejects_case_duplicates() {
		let doc = Node::Map(vec![("Color".into(), scalar("blue")), ("color".into(), scalar("red"))]);
		match flatten(doc) {
			Err(FmtError::DuplicateKey(key)) => assert_eq!(key, "color"),
			other => panic!("expected DuplicateKey, got {other:?}"),
		}
	}

	#[test]
	fn test_flatten_rejects_scalar_root() {
		assert!(matches!(flatten(scalar("x")), Err(FmtError::InvalidRoot("scalar"))));
		assert!(flatten(Node::Null).unwrap().is_empty());
	}

	#[cfg(feature = "json")]
	#[test]
	fn test_parse_flat_json() {
		let flat = parse_flat(&AnyFormat::Json, br#"{"a": {"b": true, "c": [1, null]}}"#).unwrap();
		assert_eq!(
			flat,
			vec![
				("a:b".to_string(), "true".to_string()),
				("a:c:0".to_string(), "1".to_string()),
				("a:c:1".to_string(), String::new()),
			]
		);
	}

	#[cfg(feature = "toml")]
	#[test]
	fn test_parse_flat_toml() {
		let flat = parse_flat(&AnyFormat::Toml, b"name = \"demo\"\n[server]\nport = 8080\n").unwrap();
		assert!(flat.contains(&("name".to_string(), "demo".to_string())));
		assert!(flat.contains(&("server:port".to_string(), "8080".to_string())));
	}

	#[cfg(feature = "yaml")]
	#[test]
	fn test_parse_flat_yaml() {
		let flat = parse_flat(&AnyFormat::Yaml, b"server:\n  hosts:\n    - a\n    - b\n").unwrap();
		assert_eq!(
			flat,
			vec![
				("server:hosts:0".to_string(), "a".to_string()),
				("server:hosts:1".to_string(), "b".to_string()),
			]
		);
	}

	#[cfg(all(feature = "json", feature = "yaml"))]
	#[test]
	fn test_format_from_extension() {
		assert_eq!(AnyFormat::from_extension("JSON"), Some(AnyFormat::Json));
		assert_eq!(AnyFormat::from_extension("yml"), Some(AnyFormat::Yaml));
		assert_eq!(AnyFormat::from_extension("ini"), None);
	}
}
