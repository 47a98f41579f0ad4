/* src/loader/format/toml.rs */

use super::super::{FmtError, Format, Node};

/// TOML format parser using `toml`.
pub struct Toml;

impl Format for Toml {
	fn extensions(&self) -> &'static [&'static str] {
		&["toml"]
	}

	fn parse(&self, input: &[u8]) -> Result<Node, FmtError> {
		let s = std::str::from_utf8(input)?;
		let table: toml::Table = toml::from_str(s).map_err(|e| FmtError::ParseError(e.to_string()))?;
		Ok(convert(toml::Value::Table(table)))
	}
}

fn convert(value: toml::Value) -> Node {
	use toml::Value;
	match value {
		Value::String(s) => Node::Scalar(s),
		Value::Integer(i) => Node::Scalar(i.to_string()),
		Value::Float(f) => Node::Scalar(f.to_string()),
		Value::Boolean(b) => Node::Scalar(b.to_string()),
		Value::Datetime(d) => Node::Scalar(d.to_string()),
		Value::Array(items) => Node::List(items.into_iter().map(convert).collect()),
		Value::Table(table) => Node::Map(table.into_iter().map(|(k, v)| (k, convert(v))).collect()),
	}
}
