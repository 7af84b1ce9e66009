//! Chained style methods for nodes and builders.

use crate::breakpoint::ResponsiveValue;
use crate::color::Color;
use crate::modification::Modification;
use crate::modifier::Modifier;
use crate::operation::{StyleOperation, Stylable};
use crate::responsive::ResponsiveBuilder;
use crate::styles::{
	Background, BackgroundParams, Border, BorderParams, BorderRadius, Font, FontParams, Margins,
	Opacity, OpacityParams, Padding, RadiusParams, Shadow, ShadowParams, SpacingParams, Visibility,
	VisibilityParams,
};

/// Style methods available on every [`Stylable`] value.
///
/// Each method is a thin call into the matching [`StyleOperation`], so
/// `node.background(c)`, `builder.background(c)` and
/// `dsl::background(c).apply_to(node)` emit identical classes.
pub trait StyleExt: Stylable {
	/// Applies any style family with explicit modifiers.
	fn styled<O: StyleOperation>(self, params: impl Into<O::Parameters>, modifiers: &[Modifier]) -> Self {
		O::apply_to(self, &params.into(), modifiers)
	}

	/// `bg-<color>`
	fn background(self, color: impl Into<Color>) -> Self {
		self.styled::<Background>(BackgroundParams::new(color), &[])
	}

	/// `m<edge>-<n>`
	fn margins(self, params: impl Into<SpacingParams>) -> Self {
		self.styled::<Margins>(params, &[])
	}

	/// `p<edge>-<n>`
	fn padding(self, params: impl Into<SpacingParams>) -> Self {
		self.styled::<Padding>(params, &[])
	}

	/// `border...`
	fn border(self, params: impl Into<BorderParams>) -> Self {
		self.styled::<Border>(params, &[])
	}

	/// `rounded...`
	fn rounded(self, params: impl Into<RadiusParams>) -> Self {
		self.styled::<BorderRadius>(params, &[])
	}

	/// `shadow-...`
	fn shadow(self, params: impl Into<ShadowParams>) -> Self {
		self.styled::<Shadow>(params, &[])
	}

	/// Typography classes.
	fn font(self, params: FontParams) -> Self {
		self.styled::<Font>(params, &[])
	}

	/// `hidden`
	fn hidden(self) -> Self {
		self.styled::<Visibility>(VisibilityParams::default(), &[])
	}

	/// `opacity-<n>`
	fn opacity(self, value: u8) -> Self {
		self.styled::<Opacity>(OpacityParams::new(value), &[])
	}

	/// Collects classes in a [`ResponsiveBuilder`] scoped to `modifiers`
	/// and merges them.
	fn on(self, modifiers: impl IntoIterator<Item = Modifier>, build: impl FnOnce(ResponsiveBuilder) -> ResponsiveBuilder) -> Self {
		let modifiers: Vec<Modifier> = modifiers.into_iter().collect();
		let scope = self.modifier_scope().extended(&modifiers);
		let classes = build(ResponsiveBuilder::scoped(scope)).into_classes();
		self.merge_classes(classes.into_iter().collect())
	}

	/// Applies a captured modification.
	fn style(self, modification: &Modification) -> Self {
		modification.apply_to(self)
	}

	/// Applies several captured modifications in order.
	fn styles<'a>(self, modifications: impl IntoIterator<Item = &'a Modification>) -> Self {
		modifications
			.into_iter()
			.fold(self, |target, modification| modification.apply_to(target))
	}

	/// Applies per-breakpoint parameters of one style family.
	fn responsive_style<O: StyleOperation>(self, values: &ResponsiveValue<O::Parameters>) -> Self {
		O::apply_responsive(self, values)
	}
}

impl<T: Stylable> StyleExt for T {}
