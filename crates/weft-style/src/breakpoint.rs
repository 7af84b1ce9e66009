//! Responsive breakpoints

use serde::Deserialize;

/// Responsive breakpoint, ordered from narrowest to widest.
///
/// Class prefixes use the name (`md:`), never the width. Widths live in the
/// [`Theme`](crate::theme::Theme) so they can be changed in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
	/// Extra small (≥ 30rem)
	Xs,
	/// Small (≥ 40rem)
	Sm,
	/// Medium (≥ 48rem)
	Md,
	/// Large (≥ 64rem)
	Lg,
	/// Extra large (≥ 80rem)
	Xl,
	/// Extra extra large (≥ 96rem)
	#[serde(rename = "2xl", alias = "xxl")]
	Xxl,
}

impl Breakpoint {
	/// Every breakpoint, narrowest first.
	pub const ALL: [Breakpoint; 6] = [
		Self::Xs,
		Self::Sm,
		Self::Md,
		Self::Lg,
		Self::Xl,
		Self::Xxl,
	];

	/// Default minimum width used when the theme does not override it.
	pub fn default_min_width(&self) -> &'static str {
		match self {
			Self::Xs => "30rem",
			Self::Sm => "40rem",
			Self::Md => "48rem",
			Self::Lg => "64rem",
			Self::Xl => "80rem",
			Self::Xxl => "96rem",
		}
	}

	/// Class prefix name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
			Self::Xxl => "2xl",
		}
	}

	/// Parses a breakpoint name; `xxl` is accepted for `2xl`.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"xs" => Some(Self::Xs),
			"sm" => Some(Self::Sm),
			"md" => Some(Self::Md),
			"lg" => Some(Self::Lg),
			"xl" => Some(Self::Xl),
			"2xl" | "xxl" => Some(Self::Xxl),
			_ => None,
		}
	}
}

/// Value that can vary by breakpoint.
///
/// `base` applies with no breakpoint prefix; each other entry applies from
/// its breakpoint upward.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveValue<T> {
	/// Unprefixed value
	pub base: Option<T>,
	/// Extra small
	pub xs: Option<T>,
	/// Small
	pub sm: Option<T>,
	/// Medium
	pub md: Option<T>,
	/// Large
	pub lg: Option<T>,
	/// Extra large
	pub xl: Option<T>,
	/// Extra extra large
	pub xxl: Option<T>,
}

impl<T> Default for ResponsiveValue<T> {
	fn default() -> Self {
		Self {
			base: None,
			xs: None,
			sm: None,
			md: None,
			lg: None,
			xl: None,
			xxl: None,
		}
	}
}

impl<T> ResponsiveValue<T> {
	/// Create new responsive value with an unprefixed default
	pub fn new(base: T) -> Self {
		Self {
			base: Some(base),
			..Self::default()
		}
	}

	/// Set extra small breakpoint value
	pub fn xs(mut self, value: T) -> Self {
		self.xs = Some(value);
		self
	}

	/// Set small breakpoint value
	pub fn sm(mut self, value: T) -> Self {
		self.sm = Some(value);
		self
	}

	/// Set medium breakpoint value
	pub fn md(mut self, value: T) -> Self {
		self.md = Some(value);
		self
	}

	/// Set large breakpoint value
	pub fn lg(mut self, value: T) -> Self {
		self.lg = Some(value);
		self
	}

	/// Set extra large breakpoint value
	pub fn xl(mut self, value: T) -> Self {
		self.xl = Some(value);
		self
	}

	/// Set extra extra large breakpoint value
	pub fn xxl(mut self, value: T) -> Self {
		self.xxl = Some(value);
		self
	}

	/// Set values, base first then narrowest to widest.
	pub fn entries(&self) -> Vec<(Option<Breakpoint>, &T)> {
		let slots = [
			(None, &self.base),
			(Some(Breakpoint::Xs), &self.xs),
			(Some(Breakpoint::Sm), &self.sm),
			(Some(Breakpoint::Md), &self.md),
			(Some(Breakpoint::Lg), &self.lg),
			(Some(Breakpoint::Xl), &self.xl),
			(Some(Breakpoint::Xxl), &self.xxl),
		];
		slots
			.into_iter()
			.filter_map(|(bp, value)| value.as_ref().map(|v| (bp, v)))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_breakpoint_default_min_width() {
		assert_eq!(Breakpoint::Xs.default_min_width(), "30rem");
		assert_eq!(Breakpoint::Sm.default_min_width(), "40rem");
		assert_eq!(Breakpoint::Md.default_min_width(), "48rem");
		assert_eq!(Breakpoint::Lg.default_min_width(), "64rem");
		assert_eq!(Breakpoint::Xl.default_min_width(), "80rem");
		assert_eq!(Breakpoint::Xxl.default_min_width(), "96rem");
	}

	#[test]
	fn test_breakpoint_as_str() {
		assert_eq!(Breakpoint::Xs.as_str(), "xs");
		assert_eq!(Breakpoint::Md.as_str(), "md");
		assert_eq!(Breakpoint::Xxl.as_str(), "2xl");
		assert_eq!(Breakpoint::from_name("xxl"), Some(Breakpoint::Xxl));
		assert_eq!(Breakpoint::from_name("huge"), None);
	}

	#[test]
	fn test_breakpoint_ordering() {
		assert!(Breakpoint::Sm < Breakpoint::Md);
		assert!(Breakpoint::Xl < Breakpoint::Xxl);
	}

	#[test]
	fn test_responsive_value() {
		let value = ResponsiveValue::new(12).sm(6).md(4).lg(3);

		assert_eq!(value.base, Some(12));
		assert_eq!(value.sm, Some(6));
		assert_eq!(value.md, Some(4));
		assert_eq!(value.lg, Some(3));
		assert_eq!(value.xl, None);
		assert_eq!(
			value.entries(),
			vec![
				(None, &12),
				(Some(Breakpoint::Sm), &6),
				(Some(Breakpoint::Md), &4),
				(Some(Breakpoint::Lg), &3),
			]
		);
	}
}
