//! Rendering integration tests
//!
//! Covers whole-tree rendering through the public API:
//! - nested element composition with no whitespace between tags
//! - attribute omission and ordering
//! - lazy content evaluated on every render
//! - rendering from several threads

use pretty_assertions::assert_eq;
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use weft_markup::elements::{article, div, h2, img, p, section, script};
use weft_markup::{AriaRole, Markup, Node};

#[fixture]
fn two_section_article() -> Node {
	article()
		.child(section().child(p().child("one")).child(p().child("two")))
		.child(section().child(p().child("three")).child(p().child("four")))
}

#[rstest]
fn test_article_renders_as_one_string(two_section_article: Node) {
	assert_eq!(
		two_section_article.render(),
		"<article><section><p>one</p><p>two</p></section><section><p>three</p><p>four</p></section></article>"
	);
}

#[rstest]
fn test_render_is_idempotent(two_section_article: Node) {
	assert_eq!(two_section_article.render(), two_section_article.render());
}

#[rstest]
fn test_bare_node_has_no_attributes() {
	let node = div().id("").class("   ").label("");
	assert_eq!(node.render(), "<div></div>");
}

#[rstest]
fn test_attribute_order_is_fixed() {
	let node = section()
		.attr("hidden", "until-found")
		.data("kind", "intro")
		.label("Introduction")
		.role(AriaRole::Region)
		.class("prose")
		.id("intro");
	assert_eq!(
		node.render(),
		r#"<section id="intro" class="prose" role="region" aria-label="Introduction" data-kind="intro" hidden="until-found"></section>"#
	);
}

#[rstest]
fn test_text_is_escaped_and_script_is_not() {
	let node = div()
		.child(p().child("1 < 2 & \"quotes\""))
		.child(script("if (a < b) { go(); }"));
	assert_eq!(
		node.render(),
		"<div><p>1 &lt; 2 &amp; &quot;quotes&quot;</p><script>if (a < b) { go(); }</script></div>"
	);
}

#[rstest]
fn test_void_element_never_gets_children() {
	let node = img("/logo.png", "Logo").child("ignored");
	assert_eq!(node.render(), r#"<img src="/logo.png" alt="Logo" />"#);
}

#[rstest]
fn test_lazy_content_runs_on_each_render() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let node = section().child(h2().child("Posts")).content(move || {
		let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
		p().child(format!("render {n}"))
	});

	assert_eq!(calls.load(Ordering::SeqCst), 0);
	assert_eq!(node.render(), "<section><h2>Posts</h2><p>render 1</p></section>");
	assert_eq!(node.render(), "<section><h2>Posts</h2><p>render 2</p></section>");
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
fn test_render_from_threads(two_section_article: Node) {
	let expected = two_section_article.render();
	let shared = Arc::new(two_section_article);
	let handles: Vec<_> = (0..4)
		.map(|_| {
			let node = Arc::clone(&shared);
			std::thread::spawn(move || node.render())
		})
		.collect();
	for handle in handles {
		assert_eq!(handle.join().unwrap(), expected);
	}
}
