//! Constructors for common HTML elements.
//!
//! ## Example
//!
//! ```
//! use weft_markup::elements::{article, h1, p};
//! use weft_markup::Markup;
//!
//! let html = article()
//!     .child(h1().child("Title"))
//!     .child(p().child("Body"))
//!     .render();
//! assert_eq!(html, "<article><h1>Title</h1><p>Body</p></article>");
//! ```

use crate::node::{IntoNode, Node};

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $name() -> Node {
				Node::element($tag)
			}
		)*
	};
}

define_element!(
	/// `<div>`
	div => "div",
	/// `<span>`
	span => "span",
	/// `<p>` (paragraph)
	p => "p",
	/// `<section>`
	section => "section",
	/// `<article>`
	article => "article",
	/// `<header>`
	header => "header",
	/// `<footer>`
	footer => "footer",
	/// `<main>`
	main => "main",
	/// `<nav>`
	nav => "nav",
	/// `<aside>`
	aside => "aside",
	/// `<h1>`
	h1 => "h1",
	/// `<h2>`
	h2 => "h2",
	/// `<h3>`
	h3 => "h3",
	/// `<h4>`
	h4 => "h4",
	/// `<h5>`
	h5 => "h5",
	/// `<h6>`
	h6 => "h6",
	/// `<a>`. Set `href` with [`Node::attr`] or use [`link`].
	a => "a",
	/// `<ul>`
	ul => "ul",
	/// `<ol>`
	ol => "ol",
	/// `<li>`
	li => "li",
	/// `<button>`
	button => "button",
	/// `<pre>`
	pre => "pre",
	/// `<code>`
	code => "code",
	/// `<strong>`
	strong => "strong",
	/// `<em>`
	em => "em",
	/// `<figure>`
	figure => "figure",
	/// `<figcaption>`
	figcaption => "figcaption",
	/// `<br />`
	br => "br",
	/// `<hr />`
	hr => "hr",
	/// `<html>`
	html => "html",
	/// `<head>`
	head => "head",
	/// `<body>`
	body => "body",
);

/// `<a href="...">label</a>`
pub fn link(href: impl Into<String>, label: impl IntoNode) -> Node {
	a().attr("href", href).child(label)
}

/// `<img src="..." alt="..." />`
pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Node {
	Node::element("img").attr("src", src).attr("alt", alt)
}

/// Inline `<script>`; the body is emitted verbatim.
pub fn script(body: impl Into<String>) -> Node {
	Node::element("script").child(Node::raw(body.into()))
}

/// Inline `<style>`; the body is emitted verbatim.
pub fn style(body: impl Into<String>) -> Node {
	Node::element("style").child(Node::raw(body.into()))
}

/// Escaped text node.
pub fn text(content: impl Into<String>) -> Node {
	Node::text(content.into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::Markup;
	use rstest::rstest;

	#[rstest]
	#[case(div(), "div")]
	#[case(section(), "section")]
	#[case(h3(), "h3")]
	#[case(nav(), "nav")]
	fn test_element_tags(#[case] node: Node, #[case] tag: &str) {
		assert_eq!(node.tag_name(), Some(tag));
	}

	#[rstest]
	fn test_link() {
		assert_eq!(
			link("/about", "About").render(),
			"<a href=\"/about\">About</a>"
		);
	}

	#[rstest]
	fn test_img_is_void() {
		assert_eq!(
			img("/logo.svg", "Logo").render(),
			"<img src=\"/logo.svg\" alt=\"Logo\" />"
		);
	}

	#[rstest]
	fn test_script_body_is_not_escaped() {
		assert_eq!(
			script("if (a < b) {}").render(),
			"<script>if (a < b) {}</script>"
		);
	}
}
