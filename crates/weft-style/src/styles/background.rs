use crate::bag::{FromParameterBag, ParameterBag};
use crate::color::Color;
use crate::operation::StyleOperation;
use weft_markup::ClassName;

/// Background color, `bg-<color>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Background;

/// Parameters for [`Background`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundParams {
	/// Color to paint. Nothing is emitted without one.
	pub color: Option<Color>,
}

impl BackgroundParams {
	/// Background of `color`.
	pub fn new(color: impl Into<Color>) -> Self {
		Self {
			color: Some(color.into()),
		}
	}
}

impl From<Color> for BackgroundParams {
	fn from(color: Color) -> Self {
		Self::new(color)
	}
}

impl FromParameterBag for BackgroundParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		let color = bag.text("color").map(Color::parse);
		if color.is_none() {
			tracing::debug!("background without color emits nothing");
		}
		Self { color }
	}
}

impl StyleOperation for Background {
	type Parameters = BackgroundParams;
	const NAME: &'static str = "background";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		params
			.color
			.iter()
			.map(|color| ClassName::from(format!("bg-{}", color.token())))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(BackgroundParams::new(Color::blue(500)), vec!["bg-blue-500"])]
	#[case(BackgroundParams::new(Color::White.opacity(80)), vec!["bg-white/80"])]
	#[case(BackgroundParams::new("[#0099ff]"), vec!["bg-[#0099ff]"])]
	#[case(BackgroundParams::default(), vec![])]
	fn test_class_names(#[case] params: BackgroundParams, #[case] expected: Vec<&str>) {
		assert_eq!(Background::class_names(&params), expected);
	}

	#[rstest]
	fn test_from_bag() {
		let bag = ParameterBag::new().with("color", "red-600");
		assert_eq!(Background::class_names_from_bag(&bag), vec!["bg-red-600"]);
		assert!(Background::class_names_from_bag(&ParameterBag::new()).is_empty());
	}
}
