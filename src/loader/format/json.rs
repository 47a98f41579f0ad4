/* src/loader/format/json.rs */

use super::super::{FmtError, Format, Node};

/// JSON format parser using `serde_json`.
pub struct Json;

impl Format for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn parse(&self, input: &[u8]) -> Result<Node, FmtError> {
		let value: serde_json::Value =
			serde_json::from_slice(input).map_err(|e| FmtError::ParseError(e.to_string()))?;
		Ok(convert(value))
	}
}

fn convert(value: serde_json::Value) -> Node {
	use serde_json::Value;
	match value {
		Value::Null => Node::Null,
		Value::Bool(b) => Node::Scalar(b.to_string()),
		Value::Number(n) => Node::Scalar(n.to_string()),
		Value::String(s) => Node::Scalar(s),
		Value::Array(items) => Node::List(items.into_iter().map(convert).collect()),
		Value::Object(map) => Node::Map(map.into_iter().map(|(k, v)| (k, convert(v))).collect()),
	}
}
