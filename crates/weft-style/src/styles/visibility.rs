use crate::bag::{FromParameterBag, ParameterBag};
use crate::operation::StyleOperation;
use weft_markup::ClassName;

/// Hides an element with `hidden`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visibility;

/// Parameters for [`Visibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityParams {
	/// Emit `hidden`; `false` emits nothing.
	pub hidden: bool,
}

impl Default for VisibilityParams {
	fn default() -> Self {
		Self { hidden: true }
	}
}

impl From<bool> for VisibilityParams {
	fn from(hidden: bool) -> Self {
		Self { hidden }
	}
}

impl FromParameterBag for VisibilityParams {
	fn from_bag(bag: &ParameterBag) -> Self {
		Self {
			hidden: bag.bool("hidden").unwrap_or(true),
		}
	}
}

impl StyleOperation for Visibility {
	type Parameters = VisibilityParams;
	const NAME: &'static str = "visibility";

	fn class_names(params: &Self::Parameters) -> Vec<ClassName> {
		if params.hidden {
			vec![ClassName::from("hidden")]
		} else {
			Vec::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(VisibilityParams::default(), vec!["hidden"])]
	#[case(VisibilityParams::from(false), vec![])]
	fn test_class_names(#[case] params: VisibilityParams, #[case] expected: Vec<&str>) {
		assert_eq!(Visibility::class_names(&params), expected);
	}
}
