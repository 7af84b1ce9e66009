//! Error types for weft-style

use thiserror::Error;

/// A string that does not name any variant of a style token enum.
///
/// Only returned by `FromStr` implementations. Parameter-bag extraction logs
/// and falls back to the declared default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {value:?}")]
pub struct UnknownToken {
	/// Name of the token type, e.g. `FontWeight`.
	pub kind: &'static str,
	/// The rejected input.
	pub value: String,
}

impl UnknownToken {
	/// Creates the error.
	pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
		Self {
			kind,
			value: value.into(),
		}
	}
}
