use crate::bag::{FromParameterBag, ParameterBag};
use crate::color::Color;
use crate::operation::StyleOperation;
use weft_markup::ClassName;

token_enum! {
	/// Box shadow step.
	pub enum ShadowSize {
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
	}
}

impl Default for ShadowSize {
	fn default() -> Self {
		Self::Md
	}
}

/// Box shadow, `shadow-<size>` and `shadow-<color>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shadow;

/// Parameters for [`Shadow`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowParams {
	/// Shadow step
	pub size: ShadowSize,
	/// Shadow color
	pub color: Option<Color>,
}

impl ShadowParams {
	/// Shadow of `size`.
	pub fn new(size: ShadowSize) -> Self {
		Self { size, color: None }
	}

	/// Sets the shadow color.
	pub fn color(mut self, color: impl Into<Color>) -> Self {
		self.color = Some(color.into());
		self
	}
}

impl From<ShadowSize> for ShadowParams {
	fn from(size: ShadowSize) -> Self {
		Self::new(size)
	}
}

impl FromParameterBag for ShadowParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		Self {
			size: bag.parsed("size").unwrap_or_default(),
			color: bag.text("color").map(Color::parse),
		}
	}
}

impl StyleOperation for Shadow {
	type Parameters = ShadowParams;
	const NAME: &'static str = "shadow";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		let mut classes = vec![ClassName::from(format!("shadow-{}", params.size))];
		if let Some(color) = &params.color {
			classes.push(ClassName::from(format!("shadow-{}", color.token())));
		}
		classes
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ShadowParams::default(), vec!["shadow-md"])]
	#[case(ShadowParams::new(ShadowSize::None), vec!["shadow-none"])]
	#[case(ShadowParams::new(ShadowSize::Xl).color(Color::Black.opacity(10)), vec!["shadow-xl", "shadow-black/10"])]
	fn test_class_names(#[case] params: ShadowParams, #[case] expected: Vec<&str>) {
		assert_eq!(Shadow::class_names(&params), expected);
	}

	#[rstest]
	fn test_from_bag_unknown_size_defaults() {
		let bag = ParameterBag::new().with("size", "enormous");
		assert_eq!(Shadow::class_names_from_bag(&bag), vec!["shadow-md"]);
	}
}
