//! Node model and the `Markup` rendering contract.
//!
//! A [`Node`] is an immutable value: every builder method consumes the node
//! and returns a new one, so a node handed out earlier (or a clone of it) is
//! never changed by later styling.
//!
//! Children are either given eagerly ([`Node::child`]) or as a deferred
//! producer ([`Node::content`]). Producers run only while [`Markup::render`]
//! walks the tree, on every render, and their output is not cached.

use crate::attributes::{
	Attribute, AttributeBuilder, AttributeList, is_void_element, write_close_tag, write_open_tag,
};
use crate::class::{ClassList, ClassName};
use crate::escape::escape_text;
use crate::role::AriaRole;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Deferred child producer.
pub type ContentFn = Arc<dyn Fn() -> Vec<Node> + Send + Sync + 'static>;

/// Anything that renders to an HTML string.
pub trait Markup {
	/// Appends the rendered HTML to `output`.
	fn render_into(&self, output: &mut String);

	/// Renders to a new string.
	///
	/// Rendering has no side effects; calling it twice yields the same string.
	fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
	Element(Cow<'static, str>),
	Text(Cow<'static, str>),
	Raw(Cow<'static, str>),
	Fragment,
}

#[derive(Clone)]
enum Segment {
	Node(Node),
	Deferred(ContentFn),
}

/// One unit of the markup tree.
///
/// Attributes (`id`, classes, role, label, data, extra attributes) only
/// render for element nodes. Text, raw, and fragment nodes keep them but emit
/// no tag.
#[derive(Clone)]
pub struct Node {
	kind: NodeKind,
	id: Option<String>,
	classes: ClassList,
	role: Option<AriaRole>,
	label: Option<String>,
	data: Vec<(String, String)>,
	attributes: Vec<Attribute>,
	content: Vec<Segment>,
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let deferred = self
			.content
			.iter()
			.filter(|s| matches!(s, Segment::Deferred(_)))
			.count();
		f.debug_struct("Node")
			.field("kind", &self.kind)
			.field("id", &self.id)
			.field("classes", &self.classes)
			.field("role", &self.role)
			.field("label", &self.label)
			.field("data", &self.data)
			.field("attributes", &self.attributes)
			.field("segments", &self.content.len())
			.field("deferred_segments", &deferred)
			.finish()
	}
}

impl Node {
	fn with_kind(kind: NodeKind) -> Self {
		Self {
			kind,
			id: None,
			classes: ClassList::new(),
			role: None,
			label: None,
			data: Vec::new(),
			attributes: Vec::new(),
			content: Vec::new(),
		}
	}

	/// Creates an element node.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Self {
		Self::with_kind(NodeKind::Element(tag.into()))
	}

	/// Creates a text node. Content is escaped when rendered.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::with_kind(NodeKind::Text(content.into()))
	}

	/// Creates a raw node rendered verbatim, for inert inline scripts and
	/// styles.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::with_kind(NodeKind::Raw(content.into()))
	}

	/// Creates a fragment: children rendered back to back with no wrapper.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::with_kind(NodeKind::Fragment).children(children)
	}

	/// Creates a node that renders nothing.
	pub fn empty() -> Self {
		Self::with_kind(NodeKind::Fragment)
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Adds whitespace-separated classes.
	pub fn class(mut self, classes: &str) -> Self {
		self.classes.insert_str(classes);
		self
	}

	/// Returns a new node whose class list is the current one followed by
	/// `classes`, without duplicates.
	pub fn add_classes(mut self, classes: impl IntoIterator<Item = ClassName>) -> Self {
		self.classes.extend(classes);
		self
	}

	/// Sets the ARIA role.
	pub fn role(mut self, role: AriaRole) -> Self {
		self.role = Some(role);
		self
	}

	/// Sets `aria-label`.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets a `data-*` attribute. Setting an existing key replaces its value
	/// in place.
	pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let key = key.into();
		let value = value.into();
		match self.data.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.data.push((key, value)),
		}
		self
	}

	/// Sets an attribute emitted after the standard ones. Setting an existing
	/// name replaces its value in place.
	pub fn attr(self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		self.push_attribute(Attribute::new(name, value))
	}

	/// Sets a boolean attribute (`defer`, `disabled`, ...).
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>) -> Self {
		self.push_attribute(Attribute::boolean(name))
	}

	fn push_attribute(mut self, attribute: Attribute) -> Self {
		match self
			.attributes
			.iter_mut()
			.find(|a| a.name() == attribute.name())
		{
			Some(existing) => *existing = attribute,
			None => self.attributes.push(attribute),
		}
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.content.push(Segment::Node(child.into_node()));
		self
	}

	/// Appends several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.content
			.extend(children.into_iter().map(|c| Segment::Node(c.into_node())));
		self
	}

	/// Appends a deferred child producer.
	///
	/// The closure is not called here. It runs each time the node renders.
	pub fn content<F, C>(mut self, producer: F) -> Self
	where
		F: Fn() -> C + Send + Sync + 'static,
		C: IntoNode,
	{
		let producer: ContentFn = Arc::new(move || vec![producer().into_node()]);
		self.content.push(Segment::Deferred(producer));
		self
	}

	/// Tag name, `None` for text, raw, and fragment nodes.
	pub fn tag_name(&self) -> Option<&str> {
		match &self.kind {
			NodeKind::Element(tag) => Some(tag),
			_ => None,
		}
	}

	/// The `id` value.
	pub fn element_id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Current class list.
	pub fn class_list(&self) -> &ClassList {
		&self.classes
	}

	/// ARIA role.
	pub fn aria_role(&self) -> Option<&AriaRole> {
		self.role.as_ref()
	}

	/// `aria-label` value.
	pub fn aria_label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// `data-*` pairs in insertion order.
	pub fn data_attributes(&self) -> &[(String, String)] {
		&self.data
	}

	/// Returns true for void elements.
	pub fn is_void(&self) -> bool {
		self.tag_name().is_some_and(is_void_element)
	}

	/// Number of content segments (eager children plus deferred producers).
	/// Producers are not run.
	pub fn segment_count(&self) -> usize {
		self.content.len()
	}

	/// Ordered start-tag attributes.
	pub fn attributes(&self) -> AttributeList {
		AttributeBuilder::new()
			.id(self.id.as_deref())
			.classes(&self.classes)
			.role(self.role.as_ref())
			.label(self.label.as_deref())
			.data(&self.data)
			.additional(&self.attributes)
			.build()
	}

	/// Evaluates deferred producers and returns the children in order.
	pub fn resolve_children(&self) -> Vec<Node> {
		let mut resolved = Vec::with_capacity(self.content.len());
		for segment in &self.content {
			match segment {
				Segment::Node(node) => resolved.push(node.clone()),
				Segment::Deferred(producer) => resolved.extend(producer()),
			}
		}
		resolved
	}

	fn render_children_into(&self, output: &mut String) {
		for segment in &self.content {
			match segment {
				Segment::Node(node) => node.render_into(output),
				Segment::Deferred(producer) => {
					for node in producer() {
						node.render_into(output);
					}
				}
			}
		}
	}
}

impl Markup for Node {
	fn render_into(&self, output: &mut String) {
		match &self.kind {
			NodeKind::Element(tag) => {
				write_open_tag(output, tag, &self.attributes());
				if !is_void_element(tag) {
					self.render_children_into(output);
					write_close_tag(output, tag);
				}
			}
			NodeKind::Text(text) => output.push_str(&escape_text(text)),
			NodeKind::Raw(raw) => output.push_str(raw),
			NodeKind::Fragment => self.render_children_into(output),
		}
	}
}

impl<T: Markup> Markup for [T] {
	fn render_into(&self, output: &mut String) {
		for item in self {
			item.render_into(output);
		}
	}
}

impl<T: Markup> Markup for Vec<T> {
	fn render_into(&self, output: &mut String) {
		self.as_slice().render_into(output);
	}
}

/// Conversion into a [`Node`].
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl IntoNode for &str {
	fn into_node(self) -> Node {
		Node::text(self.to_string())
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::text(self)
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::empty()
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(node) => node.into_node(),
			None => Node::empty(),
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::fragment(self)
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::empty().child(self.0).child(self.1)
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::empty().child(self.0).child(self.1).child(self.2)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_element_without_attributes() {
		assert_eq!(Node::element("div").render(), "<div></div>");
	}

	#[rstest]
	fn test_text_is_escaped_and_raw_is_not() {
		let node = Node::element("p")
			.child("<b>")
			.child(Node::raw("<i>ok</i>"));
		assert_eq!(node.render(), "<p>&lt;b&gt;<i>ok</i></p>");
	}

	#[rstest]
	fn test_fragment_has_no_wrapper() {
		let node = Node::fragment(vec!["a", "b"]);
		assert_eq!(node.tag_name(), None);
		assert_eq!(node.render(), "ab");
	}

	#[rstest]
	fn test_void_element_drops_children() {
		let node = Node::element("img").attr("src", "/a.png").child("ignored");
		assert!(node.is_void());
		assert_eq!(node.render(), "<img src=\"/a.png\" />");
	}

	#[rstest]
	fn test_deferred_content_runs_only_on_render() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let node = Node::element("ul").content(move || {
			counter.fetch_add(1, Ordering::SeqCst);
			Node::element("li").child("item")
		});

		assert_eq!(calls.load(Ordering::SeqCst), 0);
		assert_eq!(node.segment_count(), 1);

		let first = node.render();
		let second = node.render();
		assert_eq!(first, "<ul><li>item</li></ul>");
		assert_eq!(first, second);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_eager_and_deferred_children_keep_order() {
		let node = Node::element("div")
			.child("1")
			.content(|| "2")
			.child("3");
		assert_eq!(node.render(), "<div>123</div>");
		assert_eq!(node.resolve_children().len(), 3);
	}

	#[rstest]
	fn test_builder_returns_new_value() {
		let base = Node::element("div").class("a");
		let styled = base.clone().class("b");
		assert_eq!(base.render(), "<div class=\"a\"></div>");
		assert_eq!(styled.render(), "<div class=\"a b\"></div>");
	}

	#[rstest]
	fn test_data_and_attr_replace_in_place() {
		let node = Node::element("div")
			.data("x", "1")
			.data("y", "2")
			.data("x", "3")
			.attr("title", "a")
			.attr("title", "b");
		assert_eq!(
			node.render(),
			"<div data-x=\"3\" data-y=\"2\" title=\"b\"></div>"
		);
	}

	#[rstest]
	fn test_option_and_tuple_into_node() {
		let none: Option<&str> = None;
		assert_eq!(none.into_node().render(), "");
		assert_eq!(("a", "b", Some("c")).into_node().render(), "abc");
	}

	#[rstest]
	fn test_node_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Node>();
	}
}
