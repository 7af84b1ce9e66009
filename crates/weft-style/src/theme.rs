//! Theme system for breakpoints, colors, and fonts
//!
//! The theme is emitted as a Tailwind v4 `@theme` block. Class tokens only
//! name breakpoints and colors; the actual widths and values come from here,
//! so changing a breakpoint width never touches a style call.

use crate::breakpoint::Breakpoint;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
	/// Breakpoint minimum widths
	pub breakpoints: BTreeMap<Breakpoint, String>,
	/// Extra named colors, usable as `Color::Theme(name)`
	pub colors: BTreeMap<String, String>,
	/// Font stacks keyed by family name (`sans`, `serif`, `mono`, ...)
	pub fonts: BTreeMap<String, String>,
	/// Base border radius
	pub radius: Option<String>,
}

impl Theme {
	/// Create the default theme: standard breakpoint widths, no extra colors
	/// or fonts.
	pub fn default_theme() -> Self {
		Self {
			breakpoints: Breakpoint::ALL
				.iter()
				.map(|bp| (*bp, bp.default_min_width().to_string()))
				.collect(),
			colors: BTreeMap::new(),
			fonts: BTreeMap::new(),
			radius: None,
		}
	}

	/// Minimum width of a breakpoint.
	pub fn min_width(&self, breakpoint: Breakpoint) -> &str {
		self.breakpoints
			.get(&breakpoint)
			.map(String::as_str)
			.unwrap_or_else(|| breakpoint.default_min_width())
	}

	/// `(min-width: ...)` media condition for a breakpoint.
	pub fn media_query(&self, breakpoint: Breakpoint) -> String {
		format!("(min-width: {})", self.min_width(breakpoint))
	}

	/// Convert theme to a `@theme` block
	pub fn to_css(&self) -> String {
		let mut css = String::from("@theme {\n");
		for bp in Breakpoint::ALL {
			css.push_str(&format!(
				"  --breakpoint-{}: {};\n",
				bp.as_str(),
				self.min_width(bp)
			));
		}
		for (name, value) in &self.colors {
			css.push_str(&format!("  --color-{name}: {value};\n"));
		}
		for (name, value) in &self.fonts {
			css.push_str(&format!("  --font-{name}: {value};\n"));
		}
		if let Some(radius) = &self.radius {
			css.push_str(&format!("  --radius: {radius};\n"));
		}
		css.push('}');
		css
	}

	/// Builder method for a breakpoint width
	pub fn breakpoint(mut self, breakpoint: Breakpoint, min_width: impl Into<String>) -> Self {
		self.breakpoints.insert(breakpoint, min_width.into());
		self
	}

	/// Builder method for a named color
	pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.colors.insert(name.into(), value.into());
		self
	}

	/// Builder method for a font stack
	pub fn font(mut self, name: impl Into<String>, stack: impl Into<String>) -> Self {
		self.fonts.insert(name.into(), stack.into());
		self
	}

	/// Builder method for border radius
	pub fn radius(mut self, radius: impl Into<String>) -> Self {
		self.radius = Some(radius.into());
		self
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
