//! Responsive builder: nested modifier scopes collecting class tokens.
//!
//! ```
//! use weft_style::{Color, ResponsiveBuilder, StyleExt};
//!
//! let classes = ResponsiveBuilder::new()
//!     .background(Color::White)
//!     .md(|b| b.hover(|b| b.background(Color::blue(500))))
//!     .into_classes();
//!
//! assert_eq!(classes.to_attribute_value().as_deref(), Some("bg-white md:hover:bg-blue-500"));
//! ```

use crate::breakpoint::{Breakpoint, ResponsiveValue};
use crate::modification::Modification;
use crate::modifier::{Modifier, ModifierScope};
use crate::operation::{StyleOperation, Stylable};
use weft_markup::{ClassList, ClassName};

/// Collects classes under a stack of modifier scopes.
///
/// Every style call made on the builder is prefixed with the scope in effect
/// at that point. Scopes nest through [`ResponsiveBuilder::scope`] and its
/// shorthands; leaving a closure restores the outer scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsiveBuilder {
	scope: ModifierScope,
	classes: ClassList,
}

impl ResponsiveBuilder {
	/// Empty builder with no modifiers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty builder starting inside `scope`.
	pub fn scoped(scope: ModifierScope) -> Self {
		Self {
			scope,
			classes: ClassList::new(),
		}
	}

	/// Runs `build` with `modifiers` added to the current scope.
	pub fn scope(self, modifiers: impl IntoIterator<Item = Modifier>, build: impl FnOnce(Self) -> Self) -> Self {
		let modifiers: Vec<Modifier> = modifiers.into_iter().collect();
		let outer = self.scope;
		let inner = Self {
			scope: outer.extended(&modifiers),
			classes: self.classes,
		};
		let done = build(inner);
		Self {
			scope: outer,
			classes: done.classes,
		}
	}

	/// Scope for one breakpoint.
	pub fn breakpoint(self, breakpoint: Breakpoint, build: impl FnOnce(Self) -> Self) -> Self {
		self.scope([Modifier::Breakpoint(breakpoint)], build)
	}

	/// `xs:` scope
	pub fn xs(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.breakpoint(Breakpoint::Xs, build)
	}

	/// `sm:` scope
	pub fn sm(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.breakpoint(Breakpoint::Sm, build)
	}

	/// `md:` scope
	pub fn md(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.breakpoint(Breakpoint::Md, build)
	}

	/// `lg:` scope
	pub fn lg(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.breakpoint(Breakpoint::Lg, build)
	}

	/// `xl:` scope
	pub fn xl(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.breakpoint(Breakpoint::Xl, build)
	}

	/// `2xl:` scope
	pub fn xxl(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.breakpoint(Breakpoint::Xxl, build)
	}

	/// `dark:` scope
	pub fn dark(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.scope([Modifier::Dark], build)
	}

	/// `hover:` scope
	pub fn hover(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.scope([Modifier::Hover], build)
	}

	/// `focus:` scope
	pub fn focus(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.scope([Modifier::Focus], build)
	}

	/// `active:` scope
	pub fn active(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.scope([Modifier::Active], build)
	}

	/// `disabled:` scope
	pub fn disabled(self, build: impl FnOnce(Self) -> Self) -> Self {
		self.scope([Modifier::Disabled], build)
	}

	/// Applies a captured modification under the current scope.
	pub fn modification(self, modification: &Modification) -> Self {
		modification.apply_to(self)
	}

	/// Applies per-breakpoint parameters of one style family.
	pub fn responsive<O: StyleOperation>(self, values: &ResponsiveValue<O::Parameters>) -> Self {
		O::apply_responsive(self, values)
	}

	/// Current scope.
	pub fn current_scope(&self) -> &ModifierScope {
		&self.scope
	}

	/// Classes collected so far.
	pub fn classes(&self) -> &ClassList {
		&self.classes
	}

	/// Consumes the builder, returning the collected classes.
	pub fn into_classes(self) -> ClassList {
		self.classes
	}
}

impl Stylable for ResponsiveBuilder {
	fn modifier_scope(&self) -> ModifierScope {
		self.scope.clone()
	}

	fn merge_classes(mut self, classes: Vec<ClassName>) -> Self {
		self.classes.extend(classes);
		self
	}
}
