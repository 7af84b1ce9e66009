//! The style-operation contract and its shared dispatcher.
//!
//! A style family implements [`StyleOperation`] once: a parameter type and a
//! pure `class_names` function. The provided methods route the resulting
//! tokens to every call site, so a node method, a responsive builder and a
//! free DSL function all emit the same classes for the same parameters.

use crate::bag::{FromParameterBag, ParameterBag};
use crate::breakpoint::ResponsiveValue;
use crate::modification::Modification;
use crate::modifier::{Modifier, ModifierScope};
use crate::responsive::ResponsiveBuilder;
use weft_markup::{ClassName, Node};

/// A value that accepts generated class tokens.
///
/// Implementors return a new value; the receiver is consumed, never shared.
pub trait Stylable: Sized {
	/// Modifiers already in effect for this target.
	///
	/// Nodes have none; a [`ResponsiveBuilder`] reports its nesting scope.
	fn modifier_scope(&self) -> ModifierScope {
		ModifierScope::default()
	}

	/// Appends already-prefixed tokens, dropping exact duplicates.
	fn merge_classes(self, classes: Vec<ClassName>) -> Self;
}

impl Stylable for Node {
	fn merge_classes(self, classes: Vec<ClassName>) -> Self {
		self.add_classes(classes)
	}
}

/// One family of utility classes.
///
/// Implementors are stateless unit structs. Only [`StyleOperation::NAME`],
/// the parameter type and [`StyleOperation::class_names`] are required.
pub trait StyleOperation {
	/// Parameters fully determining the emitted tokens.
	type Parameters: FromParameterBag + Clone + Send + Sync + 'static;

	/// Family name, used in logs and by [`Modification::family`].
	const NAME: &'static str;

	/// Unprefixed tokens for `params`, in emission order.
	fn class_names(params: &Self::Parameters) -> Vec<ClassName>;

	/// Applies the tokens to `target` under its own scope plus `modifiers`.
	fn apply_to<S: Stylable>(target: S, params: &Self::Parameters, modifiers: &[Modifier]) -> S {
		let scope = target.modifier_scope().extended(modifiers);
		let classes = scope.apply_all(Self::class_names(params));
		tracing::trace!(family = Self::NAME, prefix = %scope.prefix(), count = classes.len(), "style applied");
		target.merge_classes(classes)
	}

	/// Applies the tokens to a builder under its current nesting scope.
	fn apply_to_builder(builder: ResponsiveBuilder, params: &Self::Parameters) -> ResponsiveBuilder {
		Self::apply_to(builder, params, &[])
	}

	/// Captures the tokens as a reusable [`Modification`] with no modifiers.
	fn as_modification(params: &Self::Parameters) -> Modification {
		Modification::new(Self::NAME, Self::class_names(params))
	}

	/// Applies one set of parameters per breakpoint of `values`.
	fn apply_responsive<S: Stylable>(target: S, values: &ResponsiveValue<Self::Parameters>) -> S {
		values.entries().into_iter().fold(target, |target, (breakpoint, params)| {
			let modifiers: Vec<Modifier> = breakpoint.map(Modifier::Breakpoint).into_iter().collect();
			Self::apply_to(target, params, &modifiers)
		})
	}

	/// Unprefixed tokens for parameters read from a bag.
	fn class_names_from_bag(bag: &ParameterBag) -> Vec<ClassName> {
		Self::class_names(&Self::Parameters::from_bag(bag))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::breakpoint::Breakpoint;
	use crate::color::Color;
	use crate::styles::{Background, BackgroundParams, Margins, SpacingParams};
	use rstest::rstest;
	use weft_markup::Markup;
	use weft_markup::elements::div;

	fn blue() -> BackgroundParams {
		BackgroundParams::new(Color::blue(500))
	}

	#[rstest]
	fn test_apply_to_node() {
		let node = Background::apply_to(div(), &blue(), &[]);
		assert_eq!(node.render(), r#"<div class="bg-blue-500"></div>"#);
	}

	#[rstest]
	fn test_apply_to_node_with_modifiers() {
		let node = Background::apply_to(div(), &blue(), &[Modifier::Hover, Breakpoint::Md.into()]);
		assert_eq!(node.class_list().to_attribute_value().as_deref(), Some("md:hover:bg-blue-500"));
	}

	#[rstest]
	fn test_apply_twice_keeps_one_token() {
		let node = Background::apply_to(div(), &blue(), &[]);
		let node = Background::apply_to(node, &blue(), &[]);
		assert_eq!(node.class_list().len(), 1);
	}

	#[rstest]
	fn test_apply_to_builder_uses_scope() {
		let builder = ResponsiveBuilder::new().scope([Modifier::Dark], |b| Background::apply_to_builder(b, &blue()));
		assert_eq!(builder.classes().to_attribute_value().as_deref(), Some("dark:bg-blue-500"));
	}

	#[rstest]
	fn test_as_modification_matches_direct_call() {
		let modification = Background::as_modification(&blue());
		let via_modification = modification.apply_to(div());
		let direct = Background::apply_to(div(), &blue(), &[]);
		assert_eq!(via_modification.render(), direct.render());
	}

	#[rstest]
	fn test_apply_responsive() {
		let values = ResponsiveValue::new(SpacingParams::default()).md(SpacingParams::length(8));
		let node = Margins::apply_responsive(div(), &values);
		assert_eq!(node.class_list().to_attribute_value().as_deref(), Some("m-4 md:m-8"));
	}
}
