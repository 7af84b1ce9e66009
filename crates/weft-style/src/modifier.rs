//! Modifiers and modifier scopes.
//!
//! A modifier scopes a class token to a state, color scheme, or viewport.
//! Several modifiers combine into one prefix: `[Hover, Breakpoint(Md)]`
//! becomes `md:hover:`.
//!
//! Scopes are canonical. Breakpoints come first (narrowest first), then
//! color scheme and media modifiers, then states, then custom prefixes
//! (alphabetically), and a modifier appears at most once. The same set of modifiers therefore always
//! produces the same prefix, whatever order it was supplied in.

use crate::breakpoint::Breakpoint;
use serde::Deserialize;
use std::borrow::Cow;
use weft_markup::ClassName;

/// Separator between modifier tokens and between the prefix and the class.
pub const MODIFIER_SEPARATOR: char = ':';

/// A scoping qualifier for class tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Modifier {
	/// Applies from a breakpoint upward (`md:`)
	Breakpoint(Breakpoint),
	/// Dark color scheme (`dark:`)
	Dark,
	/// Print media (`print:`)
	Print,
	/// Reduced motion preference (`motion-reduce:`)
	MotionReduce,
	/// `hover:`
	Hover,
	/// `focus:`
	Focus,
	/// `focus-visible:`
	FocusVisible,
	/// `focus-within:`
	FocusWithin,
	/// `active:`
	Active,
	/// `visited:`
	Visited,
	/// `disabled:`
	Disabled,
	/// `checked:`
	Checked,
	/// `first:`
	First,
	/// `last:`
	Last,
	/// `odd:`
	Odd,
	/// `even:`
	Even,
	/// `placeholder:`
	Placeholder,
	/// `group-hover:`
	GroupHover,
	/// Any other variant, written without the trailing separator
	/// (`aria-expanded`, `data-[state=open]`).
	Custom(String),
}

impl Modifier {
	/// Token used in the class prefix.
	pub fn token(&self) -> Cow<'_, str> {
		let token = match self {
			Self::Breakpoint(bp) => bp.as_str(),
			Self::Dark => "dark",
			Self::Print => "print",
			Self::MotionReduce => "motion-reduce",
			Self::Hover => "hover",
			Self::Focus => "focus",
			Self::FocusVisible => "focus-visible",
			Self::FocusWithin => "focus-within",
			Self::Active => "active",
			Self::Visited => "visited",
			Self::Disabled => "disabled",
			Self::Checked => "checked",
			Self::First => "first",
			Self::Last => "last",
			Self::Odd => "odd",
			Self::Even => "even",
			Self::Placeholder => "placeholder",
			Self::GroupHover => "group-hover",
			Self::Custom(raw) => return Cow::Borrowed(raw.trim_end_matches(MODIFIER_SEPARATOR)),
		};
		Cow::Borrowed(token)
	}

	/// Parses a modifier token. Unknown tokens become [`Modifier::Custom`].
	pub fn parse(token: &str) -> Self {
		let token = token.trim().trim_end_matches(MODIFIER_SEPARATOR);
		if let Some(bp) = Breakpoint::from_name(token) {
			return Self::Breakpoint(bp);
		}
		match token {
			"dark" => Self::Dark,
			"print" => Self::Print,
			"motion-reduce" => Self::MotionReduce,
			"hover" => Self::Hover,
			"focus" => Self::Focus,
			"focus-visible" => Self::FocusVisible,
			"focus-within" => Self::FocusWithin,
			"active" => Self::Active,
			"visited" => Self::Visited,
			"disabled" => Self::Disabled,
			"checked" => Self::Checked,
			"first" => Self::First,
			"last" => Self::Last,
			"odd" => Self::Odd,
			"even" => Self::Even,
			"placeholder" => Self::Placeholder,
			"group-hover" => Self::GroupHover,
			other => Self::Custom(other.to_string()),
		}
	}

	/// Resolves a custom token that spells a built-in modifier to that
	/// modifier. Blank custom tokens resolve to `None`.
	fn normalized(self) -> Option<Self> {
		match self {
			Self::Custom(raw) => match Self::parse(&raw) {
				Self::Custom(token) if token.is_empty() => None,
				modifier => Some(modifier),
			},
			modifier => Some(modifier),
		}
	}

	fn rank(&self) -> (u8, u8) {
		match self {
			Self::Breakpoint(bp) => (0, *bp as u8),
			Self::Dark => (1, 0),
			Self::Print => (1, 1),
			Self::MotionReduce => (1, 2),
			Self::Hover => (2, 0),
			Self::Focus => (2, 1),
			Self::FocusVisible => (2, 2),
			Self::FocusWithin => (2, 3),
			Self::Active => (2, 4),
			Self::Visited => (2, 5),
			Self::Disabled => (2, 6),
			Self::Checked => (2, 7),
			Self::First => (2, 8),
			Self::Last => (2, 9),
			Self::Odd => (2, 10),
			Self::Even => (2, 11),
			Self::Placeholder => (2, 12),
			Self::GroupHover => (2, 13),
			Self::Custom(_) => (3, 0),
		}
	}

	fn canonical_cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.rank()
			.cmp(&other.rank())
			.then_with(|| self.token().cmp(&other.token()))
	}
}

impl From<Breakpoint> for Modifier {
	fn from(breakpoint: Breakpoint) -> Self {
		Self::Breakpoint(breakpoint)
	}
}

impl From<String> for Modifier {
	fn from(token: String) -> Self {
		Self::parse(&token)
	}
}

impl From<&str> for Modifier {
	fn from(token: &str) -> Self {
		Self::parse(token)
	}
}

/// Canonical, deduplicated list of modifiers in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierScope {
	modifiers: Vec<Modifier>,
}

impl ModifierScope {
	/// Builds a canonical scope from any modifier list.
	///
	/// Blank custom modifiers are dropped and custom tokens naming a built-in
	/// modifier count as that modifier.
	pub fn new(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
		let mut canonical: Vec<Modifier> = Vec::new();
		for modifier in modifiers.into_iter().filter_map(Modifier::normalized) {
			if !canonical.contains(&modifier) {
				canonical.push(modifier);
			}
		}
		canonical.sort_by(Modifier::canonical_cmp);
		Self {
			modifiers: canonical,
		}
	}

	/// A new scope containing these modifiers and `extra`.
	pub fn extended(&self, extra: &[Modifier]) -> Self {
		if extra.is_empty() {
			return self.clone();
		}
		Self::new(self.modifiers.iter().chain(extra).cloned())
	}

	/// Modifiers in canonical order.
	pub fn modifiers(&self) -> &[Modifier] {
		&self.modifiers
	}

	/// Returns true when no modifier is in effect.
	pub fn is_empty(&self) -> bool {
		self.modifiers.is_empty()
	}

	/// Combined prefix including the trailing separator, or `""`.
	pub fn prefix(&self) -> String {
		let mut prefix = String::new();
		for modifier in &self.modifiers {
			prefix.push_str(&modifier.token());
			prefix.push(MODIFIER_SEPARATOR);
		}
		prefix
	}

	/// Prefixes one class token.
	pub fn apply(&self, class: &ClassName) -> ClassName {
		class.with_prefix(&self.prefix())
	}

	/// Prefixes every class token.
	pub fn apply_all(&self, classes: impl IntoIterator<Item = ClassName>) -> Vec<ClassName> {
		let prefix = self.prefix();
		classes
			.into_iter()
			.map(|class| class.with_prefix(&prefix))
			.collect()
	}
}

impl FromIterator<Modifier> for ModifierScope {
	fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
		Self::new(iter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(vec![], "")]
	#[case(vec![Modifier::Hover], "hover:")]
	#[case(vec![Modifier::Hover, Modifier::Breakpoint(Breakpoint::Md)], "md:hover:")]
	#[case(vec![Modifier::Breakpoint(Breakpoint::Md), Modifier::Hover], "md:hover:")]
	#[case(vec![Modifier::Focus, Modifier::Dark], "dark:focus:")]
	#[case(vec![Modifier::Custom("aria-busy:".into()), Modifier::Breakpoint(Breakpoint::Lg)], "lg:aria-busy:")]
	#[case(vec![Modifier::Breakpoint(Breakpoint::Lg), Modifier::Breakpoint(Breakpoint::Sm)], "sm:lg:")]
	fn test_prefix(#[case] modifiers: Vec<Modifier>, #[case] expected: &str) {
		assert_eq!(ModifierScope::new(modifiers).prefix(), expected);
	}

	#[rstest]
	#[case(vec![Modifier::parse(""), Modifier::Hover])]
	#[case(vec![Modifier::Custom("  ".into()), Modifier::Hover, Modifier::Custom(":".into())])]
	#[case(vec![Modifier::Hover, Modifier::Custom("hover".into())])]
	#[case(vec![Modifier::Custom(" hover: ".into())])]
	fn test_custom_tokens_normalize(#[case] modifiers: Vec<Modifier>) {
		let scope = ModifierScope::new(modifiers);
		assert_eq!(scope.modifiers(), &[Modifier::Hover]);
		assert_eq!(scope.prefix(), "hover:");
	}

	#[rstest]
	fn test_custom_breakpoint_token_sorts_as_breakpoint() {
		let scope = ModifierScope::new([Modifier::Hover, Modifier::Custom("md".into())]);
		assert_eq!(scope.prefix(), "md:hover:");
	}

	#[rstest]
	fn test_duplicates_collapse() {
		let scope = ModifierScope::new([Modifier::Hover, Modifier::Hover]);
		assert_eq!(scope.modifiers().len(), 1);
	}

	#[rstest]
	fn test_extended_keeps_canonical_order() {
		let outer = ModifierScope::new([Modifier::Hover]);
		let inner = outer.extended(&[Modifier::Breakpoint(Breakpoint::Sm)]);
		assert_eq!(inner.prefix(), "sm:hover:");
		assert_eq!(outer.prefix(), "hover:");
	}

	#[rstest]
	#[case("md", Modifier::Breakpoint(Breakpoint::Md))]
	#[case("2xl", Modifier::Breakpoint(Breakpoint::Xxl))]
	#[case("hover:", Modifier::Hover)]
	#[case("dark", Modifier::Dark)]
	#[case("aria-checked", Modifier::Custom("aria-checked".into()))]
	fn test_parse(#[case] token: &str, #[case] expected: Modifier) {
		assert_eq!(Modifier::parse(token), expected);
	}

	#[rstest]
	fn test_apply_all() {
		let scope = ModifierScope::new([Modifier::Dark]);
		let classes = scope.apply_all(vec![ClassName::from("bg-black"), ClassName::from("text-white")]);
		assert_eq!(classes, vec![ClassName::from("dark:bg-black"), ClassName::from("dark:text-white")]);
	}
}
