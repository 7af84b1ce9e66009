//! Untyped parameter bags for dynamic style entry points.
//!
//! Typed parameter structs are the primary API. A [`ParameterBag`] carries
//! the same information as loosely typed key/value pairs, for styles that
//! come from configuration files or other dynamic sources. Conversion never
//! fails: a missing key takes the documented default, a value of the wrong
//! type is ignored, and an out-of-range number is clamped.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A single bag value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
	/// `true` / `false`
	Bool(bool),
	/// Whole number
	Int(i64),
	/// Fractional number
	Float(f64),
	/// String
	Text(String),
	/// List of values
	List(Vec<StyleValue>),
}

impl From<bool> for StyleValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for StyleValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for StyleValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<f64> for StyleValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for StyleValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for StyleValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

/// Key/value parameters for one style family.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag {
	values: BTreeMap<String, StyleValue>,
}

impl ParameterBag {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the bag with `key` set.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Sets `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
		self.values.insert(key.into(), value.into());
	}

	/// Raw value of `key`.
	pub fn get(&self, key: &str) -> Option<&StyleValue> {
		self.values.get(key)
	}

	/// Returns true when no key is set.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Boolean value of `key`.
	pub fn bool(&self, key: &str) -> Option<bool> {
		match self.get(key)? {
			StyleValue::Bool(value) => Some(*value),
			other => mismatch(key, "bool", other),
		}
	}

	/// Integer value of `key`. Floats are truncated.
	pub fn int(&self, key: &str) -> Option<i64> {
		match self.get(key)? {
			StyleValue::Int(value) => Some(*value),
			StyleValue::Float(value) if value.is_finite() => Some(*value as i64),
			other => mismatch(key, "integer", other),
		}
	}

	/// Integer value of `key`, clamped to `min..=max`.
	pub fn int_clamped(&self, key: &str, min: i64, max: i64) -> Option<i64> {
		let value = self.int(key)?;
		let clamped = value.clamp(min, max);
		if clamped != value {
			tracing::debug!(key, value, clamped, "style parameter clamped");
		}
		Some(clamped)
	}

	/// String value of `key`.
	pub fn text(&self, key: &str) -> Option<&str> {
		match self.get(key)? {
			StyleValue::Text(value) => Some(value),
			other => mismatch(key, "string", other),
		}
	}

	/// String value of `key` parsed with `FromStr`. Unparseable input is
	/// logged and ignored.
	pub fn parsed<T>(&self, key: &str) -> Option<T>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let raw = self.text(key)?;
		match raw.parse() {
			Ok(value) => Some(value),
			Err(err) => {
				tracing::debug!(key, %err, "style parameter ignored");
				None
			}
		}
	}

	/// Strings of `key`. A single string counts as a one-element list.
	pub fn text_list(&self, key: &str) -> Vec<&str> {
		match self.get(key) {
			Some(StyleValue::Text(value)) => vec![value.as_str()],
			Some(StyleValue::List(values)) => values
				.iter()
				.filter_map(|v| match v {
					StyleValue::Text(text) => Some(text.as_str()),
					_ => None,
				})
				.collect(),
			Some(other) => mismatch(key, "string list", other).unwrap_or_default(),
			None => Vec::new(),
		}
	}

	/// Strings of `key` parsed with `FromStr`, skipping unparseable entries.
	pub fn parsed_list<T>(&self, key: &str) -> Vec<T>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.text_list(key)
			.into_iter()
			.filter_map(|raw| match raw.parse() {
				Ok(value) => Some(value),
				Err(err) => {
					tracing::debug!(key, %err, "style parameter entry ignored");
					None
				}
			})
			.collect()
	}
}

fn mismatch<T>(key: &str, expected: &str, found: &StyleValue) -> Option<T> {
	tracing::debug!(key, expected, ?found, "style parameter has wrong type");
	None
}

/// Conversion from a [`ParameterBag`], filling declared defaults.
pub trait FromParameterBag: Sized {
	/// Builds parameters from `bag`. Never fails.
	fn from_bag(bag: &ParameterBag) -> Self;
}
