//! Class name tokens and the deduplicating class list carried by every node.

use std::borrow::Cow;
use std::fmt;

/// A single CSS class token, such as `bg-blue-500` or `hover:m-4`.
///
/// Tokens are opaque: nothing in this crate checks them against a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(Cow<'static, str>);

impl ClassName {
	/// Creates a class token.
	pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
		Self(token.into())
	}

	/// Returns the token text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true for a blank token.
	pub fn is_empty(&self) -> bool {
		self.0.trim().is_empty()
	}

	/// Returns a new token with `prefix` prepended verbatim.
	///
	/// An empty prefix returns a clone of the token.
	pub fn with_prefix(&self, prefix: &str) -> Self {
		if prefix.is_empty() {
			return self.clone();
		}
		Self(Cow::Owned(format!("{prefix}{}", self.0)))
	}
}

impl fmt::Display for ClassName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for ClassName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&'static str> for ClassName {
	fn from(token: &'static str) -> Self {
		Self(Cow::Borrowed(token))
	}
}

impl From<String> for ClassName {
	fn from(token: String) -> Self {
		Self(Cow::Owned(token))
	}
}

impl PartialEq<str> for ClassName {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for ClassName {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Ordered set of class tokens.
///
/// Insertion order is kept for serialization. A token already present (exact
/// string match) is never inserted twice. Blank tokens and tokens containing
/// whitespace are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	tokens: Vec<ClassName>,
}

impl ClassList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a token, returning false when it was blank, already present,
	/// or contained whitespace (it would serialize as several classes).
	pub fn insert(&mut self, class: ClassName) -> bool {
		if class.is_empty() || self.contains(class.as_str()) {
			return false;
		}
		if class.as_str().contains(char::is_whitespace) {
			tracing::debug!(class = class.as_str(), "class token with whitespace dropped");
			return false;
		}
		self.tokens.push(class);
		true
	}

	/// Inserts every whitespace-separated token of `classes`.
	pub fn insert_str(&mut self, classes: &str) {
		for token in classes.split_whitespace() {
			self.insert(ClassName::new(token.to_string()));
		}
	}

	/// Returns a new list with `classes` appended after the existing tokens.
	pub fn merged(&self, classes: impl IntoIterator<Item = ClassName>) -> Self {
		let mut merged = self.clone();
		merged.extend(classes);
		merged
	}

	/// Returns true if `class` is present.
	pub fn contains(&self, class: &str) -> bool {
		self.tokens.iter().any(|t| t.as_str() == class)
	}

	/// Iterates tokens in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, ClassName> {
		self.tokens.iter()
	}

	/// Number of tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns true when the list holds no tokens.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Space-joined value for a `class` attribute, `None` when empty.
	pub fn to_attribute_value(&self) -> Option<String> {
		if self.tokens.is_empty() {
			return None;
		}
		Some(
			self.tokens
				.iter()
				.map(ClassName::as_str)
				.collect::<Vec<_>>()
				.join(" "),
		)
	}
}

impl Extend<ClassName> for ClassList {
	fn extend<I: IntoIterator<Item = ClassName>>(&mut self, iter: I) {
		for class in iter {
			self.insert(class);
		}
	}
}

impl FromIterator<ClassName> for ClassList {
	fn from_iter<I: IntoIterator<Item = ClassName>>(iter: I) -> Self {
		let mut list = Self::new();
		list.extend(iter);
		list
	}
}

impl IntoIterator for ClassList {
	type Item = ClassName;
	type IntoIter = std::vec::IntoIter<ClassName>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.into_iter()
	}
}

impl<'a> IntoIterator for &'a ClassList {
	type Item = &'a ClassName;
	type IntoIter = std::slice::Iter<'a, ClassName>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.iter()
	}
}
