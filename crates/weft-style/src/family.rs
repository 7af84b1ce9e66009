//! Style families addressed by name.
//!
//! Configuration files name a family and give its parameters as a table.
//! [`StyleFamily`] resolves that pair to classes without the caller knowing
//! the concrete operation type.

use crate::bag::ParameterBag;
use crate::error::UnknownToken;
use crate::modification::Modification;
use crate::operation::StyleOperation;
use crate::styles::{Background, Border, BorderRadius, Font, Margins, Opacity, Padding, Shadow, Visibility};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use weft_markup::ClassName;

/// Every built-in style family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum StyleFamily {
	/// [`Background`]
	Background,
	/// [`Margins`]
	Margins,
	/// [`Padding`]
	Padding,
	/// [`Border`]
	Border,
	/// [`BorderRadius`]
	BorderRadius,
	/// [`Shadow`]
	Shadow,
	/// [`Font`]
	Font,
	/// [`Visibility`]
	Visibility,
	/// [`Opacity`]
	Opacity,
}

impl StyleFamily {
	/// Every family.
	pub const ALL: [StyleFamily; 9] = [
		Self::Background,
		Self::Margins,
		Self::Padding,
		Self::Border,
		Self::BorderRadius,
		Self::Shadow,
		Self::Font,
		Self::Visibility,
		Self::Opacity,
	];

	/// Canonical name, equal to the operation's `NAME`.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Background => Background::NAME,
			Self::Margins => Margins::NAME,
			Self::Padding => Padding::NAME,
			Self::Border => Border::NAME,
			Self::BorderRadius => BorderRadius::NAME,
			Self::Shadow => Shadow::NAME,
			Self::Font => Font::NAME,
			Self::Visibility => Visibility::NAME,
			Self::Opacity => Opacity::NAME,
		}
	}

	/// Unprefixed classes for parameters in `bag`.
	pub fn class_names(&self, bag: &ParameterBag) -> Vec<ClassName> {
		match self {
			Self::Background => Background::class_names_from_bag(bag),
			Self::Margins => Margins::class_names_from_bag(bag),
			Self::Padding => Padding::class_names_from_bag(bag),
			Self::Border => Border::class_names_from_bag(bag),
			Self::BorderRadius => BorderRadius::class_names_from_bag(bag),
			Self::Shadow => Shadow::class_names_from_bag(bag),
			Self::Font => Font::class_names_from_bag(bag),
			Self::Visibility => Visibility::class_names_from_bag(bag),
			Self::Opacity => Opacity::class_names_from_bag(bag),
		}
	}

	/// Reusable modification for parameters in `bag`.
	pub fn modification(&self, bag: &ParameterBag) -> Modification {
		Modification::new(self.name(), self.class_names(bag))
	}
}

impl fmt::Display for StyleFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for StyleFamily {
	type Err = UnknownToken;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
		match normalized.as_str() {
			"background" | "bg" => Ok(Self::Background),
			"margins" | "margin" | "m" => Ok(Self::Margins),
			"padding" | "p" => Ok(Self::Padding),
			"border" => Ok(Self::Border),
			"border-radius" | "radius" | "rounded" => Ok(Self::BorderRadius),
			"shadow" => Ok(Self::Shadow),
			"font" | "text" | "typography" => Ok(Self::Font),
			"visibility" | "hidden" => Ok(Self::Visibility),
			"opacity" => Ok(Self::Opacity),
			_ => Err(UnknownToken::new("StyleFamily", s)),
		}
	}
}

impl TryFrom<String> for StyleFamily {
	type Error = UnknownToken;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("background", StyleFamily::Background)]
	#[case("Margin", StyleFamily::Margins)]
	#[case("border_radius", StyleFamily::BorderRadius)]
	#[case("rounded", StyleFamily::BorderRadius)]
	#[case("text", StyleFamily::Font)]
	fn test_parse(#[case] input: &str, #[case] expected: StyleFamily) {
		assert_eq!(input.parse::<StyleFamily>(), Ok(expected));
	}

	#[rstest]
	fn test_parse_unknown() {
		assert!("gradient".parse::<StyleFamily>().is_err());
	}

	#[rstest]
	fn test_name_round_trips() {
		for family in StyleFamily::ALL {
			assert_eq!(family.name().parse::<StyleFamily>(), Ok(family));
		}
	}

	#[rstest]
	#[case(StyleFamily::Margins, ParameterBag::new(), vec!["m-4"])]
	#[case(StyleFamily::Margins, ParameterBag::new().with("auto", true), vec!["m-auto"])]
	#[case(StyleFamily::Visibility, ParameterBag::new(), vec!["hidden"])]
	#[case(StyleFamily::Background, ParameterBag::new().with("color", "indigo-700"), vec!["bg-indigo-700"])]
	fn test_class_names(#[case] family: StyleFamily, #[case] bag: ParameterBag, #[case] expected: Vec<&str>) {
		assert_eq!(family.class_names(&bag), expected);
	}

	#[rstest]
	fn test_deserialize() {
		#[derive(Deserialize)]
		struct Entry {
			family: StyleFamily,
		}
		let entry: Entry = toml::from_str(r#"family = "padding""#).unwrap();
		assert_eq!(entry.family, StyleFamily::Padding);
	}
}
