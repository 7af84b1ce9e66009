//! Color tokens.

use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Shades available for every palette color.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Built-in palette hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
	/// `slate`
	Slate,
	/// `gray`
	Gray,
	/// `zinc`
	Zinc,
	/// `neutral`
	Neutral,
	/// `stone`
	Stone,
	/// `red`
	Red,
	/// `orange`
	Orange,
	/// `amber`
	Amber,
	/// `yellow`
	Yellow,
	/// `lime`
	Lime,
	/// `green`
	Green,
	/// `emerald`
	Emerald,
	/// `teal`
	Teal,
	/// `cyan`
	Cyan,
	/// `sky`
	Sky,
	/// `blue`
	Blue,
	/// `indigo`
	Indigo,
	/// `violet`
	Violet,
	/// `purple`
	Purple,
	/// `fuchsia`
	Fuchsia,
	/// `pink`
	Pink,
	/// `rose`
	Rose,
}

impl Palette {
	const ALL: [Palette; 22] = [
		Self::Slate,
		Self::Gray,
		Self::Zinc,
		Self::Neutral,
		Self::Stone,
		Self::Red,
		Self::Orange,
		Self::Amber,
		Self::Yellow,
		Self::Lime,
		Self::Green,
		Self::Emerald,
		Self::Teal,
		Self::Cyan,
		Self::Sky,
		Self::Blue,
		Self::Indigo,
		Self::Violet,
		Self::Purple,
		Self::Fuchsia,
		Self::Pink,
		Self::Rose,
	];

	/// Hue name used in class tokens.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Slate => "slate",
			Self::Gray => "gray",
			Self::Zinc => "zinc",
			Self::Neutral => "neutral",
			Self::Stone => "stone",
			Self::Red => "red",
			Self::Orange => "orange",
			Self::Amber => "amber",
			Self::Yellow => "yellow",
			Self::Lime => "lime",
			Self::Green => "green",
			Self::Emerald => "emerald",
			Self::Teal => "teal",
			Self::Cyan => "cyan",
			Self::Sky => "sky",
			Self::Blue => "blue",
			Self::Indigo => "indigo",
			Self::Violet => "violet",
			Self::Purple => "purple",
			Self::Fuchsia => "fuchsia",
			Self::Pink => "pink",
			Self::Rose => "rose",
		}
	}

	fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|p| p.as_str() == name)
	}
}

/// Snaps any number to the closest available shade.
pub fn nearest_shade(shade: u16) -> u16 {
	SHADES
		.into_iter()
		.min_by_key(|s| s.abs_diff(shade))
		.unwrap_or(500)
}

/// A color as it appears in a class token (`bg-<color>`, `text-<color>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Color {
	/// Palette hue and shade, e.g. `blue-500`.
	Palette(Palette, u16),
	/// `white`
	White,
	/// `black`
	Black,
	/// `transparent`
	Transparent,
	/// `current`
	Current,
	/// `inherit`
	Inherit,
	/// A color defined in the theme, emitted by name.
	Theme(String),
	/// An arbitrary CSS value, emitted as `[value]`.
	Arbitrary(String),
	/// A color with an opacity percentage, emitted as `<color>/<opacity>`.
	WithOpacity(Box<Color>, u8),
}

impl Color {
	/// Palette color; the shade snaps to the closest valid one.
	pub fn palette(hue: Palette, shade: u16) -> Self {
		Self::Palette(hue, nearest_shade(shade))
	}

	/// `slate-<shade>`
	pub fn slate(shade: u16) -> Self {
		Self::palette(Palette::Slate, shade)
	}

	/// `gray-<shade>`
	pub fn gray(shade: u16) -> Self {
		Self::palette(Palette::Gray, shade)
	}

	/// `red-<shade>`
	pub fn red(shade: u16) -> Self {
		Self::palette(Palette::Red, shade)
	}

	/// `green-<shade>`
	pub fn green(shade: u16) -> Self {
		Self::palette(Palette::Green, shade)
	}

	/// `blue-<shade>`
	pub fn blue(shade: u16) -> Self {
		Self::palette(Palette::Blue, shade)
	}

	/// `indigo-<shade>`
	pub fn indigo(shade: u16) -> Self {
		Self::palette(Palette::Indigo, shade)
	}

	/// Applies an opacity percentage, clamped to 0..=100.
	pub fn opacity(self, percent: u8) -> Self {
		let base = match self {
			Self::WithOpacity(inner, _) => *inner,
			other => other,
		};
		Self::WithOpacity(Box::new(base), percent.min(100))
	}

	/// Token fragment, e.g. `blue-500`, `white`, `[#0099ff]`, `red-500/50`.
	pub fn token(&self) -> String {
		match self {
			Self::Palette(hue, shade) => format!("{}-{}", hue.as_str(), nearest_shade(*shade)),
			Self::White => "white".into(),
			Self::Black => "black".into(),
			Self::Transparent => "transparent".into(),
			Self::Current => "current".into(),
			Self::Inherit => "inherit".into(),
			Self::Theme(name) => name.clone(),
			Self::Arbitrary(value) => {
				format!("[{}]", value.split_whitespace().collect::<Vec<_>>().join("_"))
			}
			Self::WithOpacity(inner, percent) => format!("{}/{}", inner.token(), percent),
		}
	}

	/// Parses a color token. Never fails: unknown names are theme colors.
	pub fn parse(input: &str) -> Self {
		let input = input.trim();

		if let Some((color, opacity)) = input.rsplit_once('/')
			&& let Ok(percent) = opacity.parse::<u16>()
		{
			return Self::parse(color).opacity(percent.min(100) as u8);
		}

		if let Some(inner) = input.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
			return Self::Arbitrary(inner.to_string());
		}
		if input.starts_with('#') || input.contains('(') {
			return Self::Arbitrary(input.to_string());
		}

		match input {
			"white" => return Self::White,
			"black" => return Self::Black,
			"transparent" => return Self::Transparent,
			"current" => return Self::Current,
			"inherit" => return Self::Inherit,
			_ => {}
		}

		if let Some((hue, shade)) = input.rsplit_once('-')
			&& let Some(palette) = Palette::from_name(hue)
			&& let Ok(shade) = shade.parse::<u16>()
		{
			return Self::palette(palette, shade);
		}

		Self::Theme(input.to_string())
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.token())
	}
}

impl FromStr for Color {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl From<String> for Color {
	fn from(value: String) -> Self {
		Self::parse(&value)
	}
}

impl From<&str> for Color {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}
