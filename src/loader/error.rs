/// Errors raised while turning a document into configuration keys.
#[derive(Debug, thiserror::Error)]
pub enum FmtError {
	/// Parsing error from the format implementation.
	#[error("parse error: {0}")]
	ParseError(String),

	/// The document is not valid UTF-8.
	#[error("invalid utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	/// The top-level value is not a mapping.
	#[error("top-level value must be a mapping, found {0}")]
	InvalidRoot(&'static str),

	/// Two paths in the document fold to the same key.
	#[error("duplicate key: {0}")]
	DuplicateKey(String),

	/// No format is registered for the file extension.
	#[error("unsupported format: {0}")]
	Unsupported(String),
}
