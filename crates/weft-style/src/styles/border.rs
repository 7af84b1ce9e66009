use crate::bag::{FromParameterBag, ParameterBag};
use crate::color::Color;
use crate::edge::{Edge, edge_token, normalize};
use crate::operation::StyleOperation;
use weft_markup::ClassName;

token_enum! {
	/// Border line style, `border-<style>`.
	pub enum BorderStyle {
		/// `solid`
		Solid => "solid",
		/// `dashed`
		Dashed => "dashed",
		/// `dotted`
		Dotted => "dotted",
		/// `double`
		Double => "double",
		/// `hidden`
		Hidden => "hidden",
		/// `none`
		None => "none",
	}
}

/// Border width, style and color.
#[derive(Debug, Clone, Copy, Default)]
pub struct Border;

/// Parameters for [`Border`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderParams {
	/// Width in pixels, clamped to `0..=8`. `1` emits the bare `border`.
	pub width: u8,
	/// Edges to draw; empty means all of them.
	pub edges: Vec<Edge>,
	/// Line style
	pub style: Option<BorderStyle>,
	/// Line color
	pub color: Option<Color>,
}

impl Default for BorderParams {
	fn default() -> Self {
		Self {
			width: 1,
			edges: vec![Edge::All],
			style: None,
			color: None,
		}
	}
}

impl BorderParams {
	/// Sets the width.
	pub fn width(mut self, width: u8) -> Self {
		self.width = width.min(8);
		self
	}

	/// Replaces the edge list.
	pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
		self.edges = edges.into_iter().collect();
		self
	}

	/// Sets the line style.
	pub fn style(mut self, style: BorderStyle) -> Self {
		self.style = Some(style);
		self
	}

	/// Sets the line color.
	pub fn color(mut self, color: impl Into<Color>) -> Self {
		self.color = Some(color.into());
		self
	}
}

impl From<Color> for BorderParams {
	fn from(color: Color) -> Self {
		Self::default().color(color)
	}
}

impl FromParameterBag for BorderParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		let defaults = Self::default();
		let edges = bag.parsed_list::<Edge>("edges");
		Self {
			width: bag.int_clamped("width", 0, 8).map_or(defaults.width, |w| w as u8),
			edges: if edges.is_empty() { defaults.edges } else { edges },
			style: bag.parsed("style"),
			color: bag.text("color").map(Color::parse),
		}
	}
}

impl StyleOperation for Border {
	type Parameters = BorderParams;
	const NAME: &'static str = "border";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		let width = params.width.min(8);
		let mut classes: Vec<ClassName> = normalize(&params.edges, Edge::All)
			.into_iter()
			.map(|edge| {
				let base = edge_token("border", "-", edge.as_str());
				if width == 1 {
					ClassName::from(base)
				} else {
					ClassName::from(format!("{base}-{width}"))
				}
			})
			.collect();
		if let Some(style) = params.style {
			classes.push(ClassName::from(format!("border-{style}")));
		}
		if let Some(color) = &params.color {
			classes.push(ClassName::from(format!("border-{}", color.token())));
		}
		classes
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(BorderParams::default(), vec!["border"])]
	#[case(BorderParams::default().width(0), vec!["border-0"])]
	#[case(BorderParams::default().width(2).edges([Edge::Top]), vec!["border-t-2"])]
	#[case(BorderParams::default().width(20), vec!["border-8"])]
	#[case(
		BorderParams::default().edges([Edge::Horizontal]).style(BorderStyle::Dashed).color(Color::gray(200)),
		vec!["border-x", "border-dashed", "border-gray-200"]
	)]
	fn test_class_names(#[case] params: BorderParams, #[case] expected: Vec<&str>) {
		assert_eq!(Border::class_names(&params), expected);
	}

	#[rstest]
	fn test_from_bag() {
		let bag = ParameterBag::new()
			.with("width", 4)
			.with("edges", "bottom")
			.with("style", "dotted")
			.with("color", "black");
		assert_eq!(
			Border::class_names_from_bag(&bag),
			vec!["border-b-4", "border-dotted", "border-black"]
		);
	}

	#[rstest]
	fn test_unknown_style_is_dropped() {
		let bag = ParameterBag::new().with("style", "wavy");
		assert_eq!(Border::class_names_from_bag(&bag), vec!["border"]);
	}
}
