use crate::bag::{FromParameterBag, ParameterBag};
use crate::edge::{RadiusSide, edge_token, normalize};
use crate::operation::StyleOperation;
use weft_markup::ClassName;

token_enum! {
	/// Corner radius step.
	pub enum RadiusSize {
		/// `none`
		None => "none",
		/// `xs`
		Xs => "xs",
		/// `sm`
		Sm => "sm",
		/// `md`
		Md => "md",
		/// `lg`
		Lg => "lg",
		/// `xl`
		Xl => "xl",
		/// `2xl`
		Xxl => "2xl" | "xxl",
		/// `3xl`
		Xxxl => "3xl" | "xxxl",
		/// `full`
		Full => "full",
	}
}

impl Default for RadiusSize {
	fn default() -> Self {
		Self::Md
	}
}

/// Rounded corners, `rounded<-side>-<size>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderRadius;

/// Parameters for [`BorderRadius`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusParams {
	/// Radius step
	pub size: RadiusSize,
	/// Sides or corners to round; empty means all of them.
	pub sides: Vec<RadiusSide>,
}

impl Default for RadiusParams {
	fn default() -> Self {
		Self {
			size: RadiusSize::default(),
			sides: vec![RadiusSide::All],
		}
	}
}

impl RadiusParams {
	/// Every corner at `size`.
	pub fn new(size: RadiusSize) -> Self {
		Self {
			size,
			..Self::default()
		}
	}

	/// Replaces the side list.
	pub fn sides(mut self, sides: impl IntoIterator<Item = RadiusSide>) -> Self {
		self.sides = sides.into_iter().collect();
		self
	}
}

impl From<RadiusSize> for RadiusParams {
	fn from(size: RadiusSize) -> Self {
		Self::new(size)
	}
}

impl FromParameterBag for RadiusParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		let defaults = Self::default();
		let sides = bag.parsed_list::<RadiusSide>("sides");
		Self {
			size: bag.parsed("size").unwrap_or(defaults.size),
			sides: if sides.is_empty() { defaults.sides } else { sides },
		}
	}
}

impl StyleOperation for BorderRadius {
	type Parameters = RadiusParams;
	const NAME: &'static str = "border-radius";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		normalize(&params.sides, RadiusSide::All)
			.into_iter()
			.map(|side| {
				let base = edge_token("rounded", "-", side.as_str());
				ClassName::from(format!("{base}-{}", params.size))
			})
			.collect()
	}
}
