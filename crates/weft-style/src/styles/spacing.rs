use crate::bag::{FromParameterBag, ParameterBag};
use crate::edge::{Edge, edge_token, normalize};
use crate::operation::StyleOperation;
use weft_markup::ClassName;

/// Largest spacing step accepted.
pub const MAX_SPACING: u16 = 96;

/// Outer spacing, `m<edge>-<n>` or `m<edge>-auto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Margins;

/// Inner spacing, `p<edge>-<n>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Padding;

/// Parameters shared by [`Margins`] and [`Padding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingParams {
	/// Edges to space; empty means all of them.
	pub edges: Vec<Edge>,
	/// Spacing step, clamped to `0..=96`.
	pub length: u16,
	/// Emit `auto` instead of the length. Padding ignores it.
	pub auto: bool,
}

impl Default for SpacingParams {
	fn default() -> Self {
		Self {
			edges: vec![Edge::All],
			length: 4,
			auto: false,
		}
	}
}

impl SpacingParams {
	/// Every edge at `length`.
	pub fn length(length: u16) -> Self {
		Self::default().with_length(length)
	}

	/// Automatic spacing on every edge.
	pub fn auto() -> Self {
		Self {
			auto: true,
			..Self::default()
		}
	}

	/// Replaces the edge list.
	pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
		self.edges = edges.into_iter().collect();
		self
	}

	/// Sets the spacing step.
	pub fn with_length(mut self, length: u16) -> Self {
		self.length = length.min(MAX_SPACING);
		self
	}

	/// Sets the auto flag.
	pub fn with_auto(mut self, auto: bool) -> Self {
		self.auto = auto;
		self
	}

	fn tokens(&self, base: &str, allow_auto: bool) -> Vec<ClassName> {
		let value = if self.auto && allow_auto {
			"auto".to_string()
		} else {
			self.length.min(MAX_SPACING).to_string()
		};
		normalize(&self.edges, Edge::All)
			.into_iter()
			.map(|edge| ClassName::from(format!("{}-{value}", edge_token(base, "", edge.as_str()))))
			.collect()
	}
}

impl From<u16> for SpacingParams {
	fn from(length: u16) -> Self {
		Self::length(length)
	}
}

impl From<Edge> for SpacingParams {
	fn from(edge: Edge) -> Self {
		Self::default().edges([edge])
	}
}

impl FromParameterBag for SpacingParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		let defaults = Self::default();
		let edges = bag.parsed_list::<Edge>("edges");
		Self {
			edges: if edges.is_empty() { defaults.edges } else { edges },
			length: bag
				.int_clamped("length", 0, MAX_SPACING.into())
				.map_or(defaults.length, |n| n as u16),
			auto: bag.bool("auto").unwrap_or(defaults.auto),
		}
	}
}

impl StyleOperation for Margins {
	type Parameters = SpacingParams;
	const NAME: &'static str = "margins";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		params.tokens("m", true)
	}
}

impl StyleOperation for Padding {
	type Parameters = SpacingParams;
	const NAME: &'static str = "padding";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		params.tokens("p", false)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(SpacingParams::default(), vec!["m-4"])]
	#[case(SpacingParams::auto(), vec!["m-auto"])]
	#[case(SpacingParams::length(12).with_auto(true), vec!["m-auto"])]
	#[case(SpacingParams::length(2).edges([Edge::Top, Edge::Horizontal]), vec!["mt-2", "mx-2"])]
	#[case(SpacingParams::length(500), vec!["m-96"])]
	#[case(SpacingParams::default().edges([Edge::Top, Edge::Top]), vec!["mt-4"])]
	#[case(SpacingParams::default().edges(Vec::new()), vec!["m-4"])]
	fn test_margins(#[case] params: SpacingParams, #[case] expected: Vec<&str>) {
		assert_eq!(Margins::class_names(&params), expected);
	}

	#[rstest]
	#[case(SpacingParams::default(), vec!["p-4"])]
	#[case(SpacingParams::auto(), vec!["p-4"])]
	#[case(SpacingParams::length(0).edges([Edge::Vertical]), vec!["py-0"])]
	fn test_padding(#[case] params: SpacingParams, #[case] expected: Vec<&str>) {
		assert_eq!(Padding::class_names(&params), expected);
	}

	#[rstest]
	fn test_from_bag_defaults_and_clamping() {
		assert_eq!(SpacingParams::from_bag(&ParameterBag::new()), SpacingParams::default());

		let bag = ParameterBag::new()
			.with("edges", vec!["leading", "nowhere"])
			.with("length", 1000)
			.with("auto", "maybe");
		let params = SpacingParams::from_bag(&bag);
		assert_eq!(params.edges, vec![Edge::Leading]);
		assert_eq!(params.length, MAX_SPACING);
		assert!(!params.auto);
	}
}
