//! Style engine integration tests
//!
//! Exercises the three style entry points together with modifier scoping:
//!
//! 1. Direct method calls on nodes
//! 2. The responsive builder
//! 3. The free-function DSL
//!
//! Each path must produce byte-identical class tokens for the same intent.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use weft_markup::elements::{div, section};
use weft_markup::{Markup, Node};
use weft_style::{
	Breakpoint, Color, Edge, Margins, Modification, Modifier, ParameterBag, ResponsiveBuilder,
	SpacingParams, StyleExt, StyleFamily, StyleOperation, dsl,
};

fn classes(node: &Node) -> Option<String> {
	node.class_list().to_attribute_value()
}

// ============================================================================
// Modifier prefixing
// ============================================================================

/// Background under hover carries exactly the `hover:` prefix.
#[rstest]
fn test_background_under_hover() {
	let node = div().styled::<weft_style::Background>(Color::blue(500), &[Modifier::Hover]);
	assert_eq!(classes(&node).as_deref(), Some("hover:bg-blue-500"));
}

/// Hover and a breakpoint combine in fixed order regardless of input order.
#[rstest]
#[case(vec![Modifier::Hover, Modifier::Breakpoint(Breakpoint::Md)])]
#[case(vec![Modifier::Breakpoint(Breakpoint::Md), Modifier::Hover])]
fn test_hover_and_breakpoint_order(#[case] modifiers: Vec<Modifier>) {
	let node = div().styled::<weft_style::Background>(Color::blue(500), &modifiers);
	assert_eq!(classes(&node).as_deref(), Some("md:hover:bg-blue-500"));
}

/// Nested builder scopes produce the same prefix as a flat modifier list.
#[rstest]
fn test_nested_scope_equals_flat_list() {
	let nested = div().on([Modifier::Breakpoint(Breakpoint::Lg)], |b| b.dark(|b| b.hover(|b| b.opacity(75))));
	let flat = div().styled::<weft_style::Opacity>(
		weft_style::OpacityParams::new(75),
		&[Modifier::Hover, Modifier::Dark, Modifier::Breakpoint(Breakpoint::Lg)],
	);
	assert_eq!(classes(&nested), classes(&flat));
	assert_eq!(classes(&flat).as_deref(), Some("lg:dark:hover:opacity-75"));
}

// ============================================================================
// Defaults and dedup
// ============================================================================

/// Margins with no arguments emit `m-4`; `auto` wins over length.
#[rstest]
fn test_margin_defaults() {
	assert_eq!(classes(&div().margins(SpacingParams::default())).as_deref(), Some("m-4"));
	assert_eq!(
		classes(&div().margins(SpacingParams::length(10).with_auto(true))).as_deref(),
		Some("m-auto")
	);
}

/// Applying the same style twice yields a single token.
#[rstest]
fn test_same_style_twice() {
	let node = div().background(Color::Black).background(Color::Black);
	assert_eq!(classes(&node).as_deref(), Some("bg-black"));
}

/// Styling returns a new value and leaves clones untouched.
#[rstest]
fn test_style_does_not_touch_original() {
	let base = section().class("prose");
	let styled = base.clone().hidden();
	assert_eq!(base.render(), r#"<section class="prose"></section>"#);
	assert_eq!(styled.render(), r#"<section class="prose hidden"></section>"#);
}

// ============================================================================
// Entry-point parity
// ============================================================================

/// Method chain, builder and DSL agree for a multi-family style.
#[rstest]
fn test_entry_points_agree() {
	let method = div()
		.margins(SpacingParams::length(2).edges([Edge::Vertical]))
		.on([Modifier::Focus], |b| b.background(Color::indigo(100)));

	let builder_classes = ResponsiveBuilder::new()
		.responsive::<Margins>(&weft_style::ResponsiveValue::new(SpacingParams::length(2).edges([Edge::Vertical])))
		.focus(|b| b.background(Color::indigo(100)))
		.into_classes();
	let builder = div().add_classes(builder_classes);

	let dsl_node = dsl::styled(
		div(),
		&[
			dsl::margins(SpacingParams::length(2).edges([Edge::Vertical])),
			dsl::background(Color::indigo(100)).on([Modifier::Focus]),
		],
	);

	assert_eq!(method.render(), builder.render());
	assert_eq!(method.render(), dsl_node.render());
	assert_eq!(classes(&method).as_deref(), Some("my-2 focus:bg-indigo-100"));
}

/// A named family with a bag matches the typed path.
#[rstest]
fn test_family_lookup_matches_typed_call() {
	let bag: ParameterBag = toml::from_str(
		r#"
		edges = ["top", "bottom"]
		length = 8
		"#,
	)
	.unwrap();
	let by_name = StyleFamily::Margins.modification(&bag);
	let typed = Margins::as_modification(&SpacingParams::length(8).edges([Edge::Top, Edge::Bottom]));
	assert_eq!(by_name, typed);
}

/// A modification stored once can be attached to many nodes.
#[rstest]
fn test_modification_is_reusable() {
	let muted: Modification = dsl::opacity(60).on([Modifier::Disabled]);
	let nodes: Vec<Node> = (0..3).map(|_| div().style(&muted)).collect();
	assert!(nodes.iter().all(|n| classes(n).as_deref() == Some("disabled:opacity-60")));
}

// ============================================================================
// Properties
// ============================================================================

fn any_modifier() -> impl Strategy<Value = Modifier> {
	prop_oneof![
		Just(Modifier::Hover),
		Just(Modifier::Focus),
		Just(Modifier::Dark),
		Just(Modifier::Active),
		(0usize..Breakpoint::ALL.len()).prop_map(|i| Modifier::Breakpoint(Breakpoint::ALL[i])),
	]
}

proptest! {
	/// Modifier order never changes the emitted token.
	#[test]
	fn prop_modifier_order_is_irrelevant(mut modifiers in prop::collection::vec(any_modifier(), 0..5)) {
		let forward = div().styled::<weft_style::Background>(Color::Black, &modifiers);
		modifiers.reverse();
		let reversed = div().styled::<weft_style::Background>(Color::Black, &modifiers);
		prop_assert_eq!(forward.render(), reversed.render());
	}

	/// Repeated application never duplicates a token.
	#[test]
	fn prop_no_duplicate_tokens(repeats in 1usize..6, length in 0u16..120) {
		let mut node = div();
		for _ in 0..repeats {
			node = node.margins(SpacingParams::length(length)).hidden();
		}
		prop_assert_eq!(node.class_list().len(), 2);
	}
}
