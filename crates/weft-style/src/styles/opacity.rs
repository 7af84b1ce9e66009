use crate::bag::{FromParameterBag, ParameterBag, StyleValue};
use crate::operation::StyleOperation;
use weft_markup::ClassName;

/// Element opacity, `opacity-<n>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Opacity;

/// Parameters for [`Opacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpacityParams {
	/// Percentage, clamped to `0..=100`.
	pub value: u8,
}

impl OpacityParams {
	/// Opacity of `value` percent.
	pub fn new(value: u8) -> Self {
		Self {
			value: value.min(100),
		}
	}
}

impl Default for OpacityParams {
	fn default() -> Self {
		Self { value: 100 }
	}
}

impl From<u8> for OpacityParams {
	fn from(value: u8) -> Self {
		Self::new(value)
	}
}

impl FromParameterBag for OpacityParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		// Fractions such as 0.5 are read as a share of one.
		let value = match bag.get("value") {
			Some(StyleValue::Float(f)) if (0.0..=1.0).contains(f) => Some((f * 100.0).round() as i64),
			_ => bag.int_clamped("value", 0, 100),
		};
		Self::new(value.map_or(100, |v| v.clamp(0, 100) as u8))
	}
}

impl StyleOperation for Opacity {
	type Parameters = OpacityParams;
	const NAME: &'static str = "opacity";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		vec![ClassName::from(format!("opacity-{}", params.value.min(100)))]
	}
}
