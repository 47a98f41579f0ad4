/* src/loader/format/yaml.rs */

use super::super::{FmtError, Format, Node};

/// YAML format parser using `serde_yaml`.
pub struct Yaml;

impl Format for Yaml {
	fn extensions(&self) -> &'static [&'static str] {
		&["yaml", "yml"]
	}

	fn parse(&self, input: &[u8]) -> Result<Node, FmtError> {
		let value: serde_yaml::Value =
			serde_yaml::from_slice(input).map_err(|e| FmtError::ParseError(e.to_string()))?;
		convert(value)
	}
}

fn convert(value: serde_yaml::Value) -> Result<Node, FmtError> {
	use serde_yaml::Value;
	Ok(match value {
		Value::Null => Node::Null,
		Value::Bool(b) => Node::Scalar(b.to_string()),
		Value::Number(n) => Node::Scalar(n.to_string()),
		Value::String(s) => Node::Scalar(s),
		Value::Sequence(items) => Node::List(items.into_iter().map(convert).collect::<Result<_, _>>()?),
		Value::Mapping(map) => {
			let mut entries = Vec::with_capacity(map.len());
			for (k, v) in map {
				let key = match k {
					Value::String(s) => s,
					Value::Bool(b) => b.to_string(),
					Value::Number(n) => n.to_string(),
					_ => return Err(FmtError::ParseError("mapping keys must be scalars".to_string())),
				};
				entries.push((key, convert(v)?));
			}
			Node::Map(entries)
		}
		Value::Tagged(tagged) => convert(tagged.value)?,
	})
}
