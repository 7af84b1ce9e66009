//! Start-tag attribute construction.
//!
//! Attributes are always serialized in the same order:
//!
//! 1. `id`
//! 2. `class`
//! 3. `role`
//! 4. `aria-label`
//! 5. `data-*`, in insertion order
//! 6. additional attributes, in the order supplied
//!
//! Absent values and empty collections produce no attribute at all, so a tag
//! never carries `class=""` or `id=""`.

use crate::class::ClassList;
use crate::escape::escape_attribute;
use crate::role::AriaRole;
use std::borrow::Cow;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns true for HTML void elements (`<br />`, `<img />`, ...).
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// A single `name="value"` pair, or a bare boolean attribute when the value is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	name: Cow<'static, str>,
	value: Option<String>,
}

impl Attribute {
	/// Creates a valued attribute.
	pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: Some(value.into()),
		}
	}

	/// Creates a boolean attribute such as `defer` or `disabled`.
	pub fn boolean(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: None,
		}
	}

	/// Attribute name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Attribute value, `None` for boolean attributes.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	fn write_to(&self, output: &mut String) {
		output.push(' ');
		output.push_str(&self.name);
		if let Some(value) = &self.value {
			output.push_str("=\"");
			output.push_str(&escape_attribute(value));
			output.push('"');
		}
	}
}

/// Ordered attributes of one start tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
	attributes: Vec<Attribute>,
}

impl AttributeList {
	/// Looks up an attribute by name.
	pub fn get(&self, name: &str) -> Option<&Attribute> {
		self.attributes.iter().find(|a| a.name() == name)
	}

	/// Attribute names in serialization order.
	pub fn names(&self) -> Vec<&str> {
		self.attributes.iter().map(Attribute::name).collect()
	}

	/// Iterates attributes in serialization order.
	pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
		self.attributes.iter()
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	/// Returns true when no attribute will be emitted.
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Writes every attribute, each preceded by a single space.
	pub fn write_to(&self, output: &mut String) {
		for attribute in &self.attributes {
			attribute.write_to(output);
		}
	}

	/// Serialized attributes, each preceded by a single space.
	pub fn to_html(&self) -> String {
		let mut output = String::new();
		self.write_to(&mut output);
		output
	}

	fn push(&mut self, attribute: Attribute) {
		self.attributes.push(attribute);
	}
}

/// Collects the attribute sources of a node and orders them.
///
/// ## Example
///
/// ```
/// use weft_markup::attributes::{AttributeBuilder, render_tag};
///
/// let attrs = AttributeBuilder::new()
///     .id(Some("hero"))
///     .label(Some("Hero banner"))
///     .build();
/// assert_eq!(
///     render_tag("section", &attrs, None),
///     "<section id=\"hero\" aria-label=\"Hero banner\"></section>"
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeBuilder<'a> {
	id: Option<&'a str>,
	classes: Option<&'a ClassList>,
	role: Option<&'a AriaRole>,
	label: Option<&'a str>,
	data: &'a [(String, String)],
	additional: &'a [Attribute],
}

impl<'a> AttributeBuilder<'a> {
	/// Creates a builder with every source absent.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the element id.
	pub fn id(mut self, id: Option<&'a str>) -> Self {
		self.id = id;
		self
	}

	/// Sets the class list.
	pub fn classes(mut self, classes: &'a ClassList) -> Self {
		self.classes = Some(classes);
		self
	}

	/// Sets the ARIA role.
	pub fn role(mut self, role: Option<&'a AriaRole>) -> Self {
		self.role = role;
		self
	}

	/// Sets the `aria-label` text.
	pub fn label(mut self, label: Option<&'a str>) -> Self {
		self.label = label;
		self
	}

	/// Sets `data-*` pairs. Keys may be given with or without the `data-`
	/// prefix.
	pub fn data(mut self, data: &'a [(String, String)]) -> Self {
		self.data = data;
		self
	}

	/// Sets attributes emitted after every other source.
	pub fn additional(mut self, additional: &'a [Attribute]) -> Self {
		self.additional = additional;
		self
	}

	/// Produces the ordered attribute list.
	pub fn build(self) -> AttributeList {
		let mut list = AttributeList::default();

		if let Some(id) = non_blank(self.id) {
			list.push(Attribute::new("id", id));
		}
		if let Some(class) = self.classes.and_then(ClassList::to_attribute_value) {
			list.push(Attribute::new("class", class));
		}
		if let Some(role) = self.role.filter(|r| !r.as_str().trim().is_empty()) {
			list.push(Attribute::new("role", role.as_str()));
		}
		if let Some(label) = non_blank(self.label) {
			list.push(Attribute::new("aria-label", label));
		}
		for (key, value) in self.data {
			let key = key.trim();
			if key.is_empty() {
				continue;
			}
			let name = if key.starts_with("data-") {
				key.to_string()
			} else {
				format!("data-{key}")
			};
			list.push(Attribute::new(name, value.clone()));
		}
		for attribute in self.additional {
			if attribute.name().trim().is_empty() {
				continue;
			}
			list.push(attribute.clone());
		}

		list
	}
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}

/// Writes `<tag attrs>` (or `<tag attrs />` for void elements).
pub fn write_open_tag(output: &mut String, tag: &str, attributes: &AttributeList) {
	output.push('<');
	output.push_str(tag);
	attributes.write_to(output);
	if is_void_element(tag) {
		output.push_str(" />");
	} else {
		output.push('>');
	}
}

/// Writes `</tag>`, or nothing for void elements.
pub fn write_close_tag(output: &mut String, tag: &str) {
	if !is_void_element(tag) {
		output.push_str("</");
		output.push_str(tag);
		output.push('>');
	}
}

/// Renders a complete element.
///
/// Without `content` a non-void element still gets an explicit open/close
/// pair. Void elements ignore `content`.
pub fn render_tag(tag: &str, attributes: &AttributeList, content: Option<&str>) -> String {
	let body = content.unwrap_or_default();
	let mut output = String::with_capacity(tag.len() * 2 + body.len() + 16);
	write_open_tag(&mut output, tag, attributes);
	if is_void_element(tag) {
		if !body.is_empty() {
			tracing::debug!(tag, "content discarded for void element");
		}
		return output;
	}
	output.push_str(body);
	write_close_tag(&mut output, tag);
	output
}
