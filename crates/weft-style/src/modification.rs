//! Deferred style applications.

use crate::modifier::{Modifier, ModifierScope};
use crate::operation::Stylable;
use weft_markup::ClassName;

/// Classes from one style family, captured for later application.
///
/// A modification is plain data. It can be stored, cloned, and attached to
/// any number of nodes or builders; the modifier prefix is resolved against
/// the target's own scope at the time it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
	family: &'static str,
	classes: Vec<ClassName>,
	modifiers: Vec<Modifier>,
}

impl Modification {
	/// Unscoped modification carrying `classes`.
	pub fn new(family: &'static str, classes: Vec<ClassName>) -> Self {
		Self {
			family,
			classes,
			modifiers: Vec::new(),
		}
	}

	/// Adds modifiers the classes are scoped to.
	pub fn on(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
		self.modifiers.extend(modifiers);
		self
	}

	/// Name of the style family that produced the classes.
	pub fn family(&self) -> &'static str {
		self.family
	}

	/// Unprefixed classes.
	pub fn classes(&self) -> &[ClassName] {
		&self.classes
	}

	/// Modifiers added with [`Modification::on`].
	pub fn modifiers(&self) -> &[Modifier] {
		&self.modifiers
	}

	/// Classes prefixed for `outer` plus this modification's own modifiers.
	pub fn resolved_classes(&self, outer: &ModifierScope) -> Vec<ClassName> {
		outer.extended(&self.modifiers).apply_all(self.classes.iter().cloned())
	}

	/// Applies the classes to `target`.
	pub fn apply_to<S: Stylable>(&self, target: S) -> S {
		let classes = self.resolved_classes(&target.modifier_scope());
		target.merge_classes(classes)
	}
}
